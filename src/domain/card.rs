use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Масть карты. Порядок вариантов совпадает с порядком кодирования на леджере.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Hearts,   // ♥
    Diamonds, // ♦
    Clubs,    // ♣
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Индекс масти 0..3 (используется в `Card::encode`).
    pub const fn index(self) -> u8 {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// Ранг карты. Числовое значение 2..14, туз старший.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Все ранги от младшего к старшему.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Обратное к `value()`; `None` вне диапазона 2..=14.
    pub fn from_value(v: u8) -> Option<Rank> {
        if (2..=14).contains(&v) {
            Some(Rank::ALL[(v - 2) as usize])
        } else {
            None
        }
    }

    /// Английское название для подписей рук ("King", "Ten").
    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// Множественное число ("Kings", "Sixes").
    pub fn plural(self) -> String {
        match self {
            Rank::Six => "Sixes".to_string(),
            r => format!("{}s", r.name()),
        }
    }
}

/// Обычная покерная карта (52-карточная колода).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Числовое значение ранга (2..14).
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Компактный индекс 0..51: `suit_index * 13 + (value - 2)`.
    pub const fn encode(&self) -> u8 {
        self.suit.index() * 13 + (self.rank.value() - 2)
    }

    /// Обратное к `encode`. Индекс вне 0..51 – ошибка вызывающего кода.
    pub fn decode(index: u8) -> Result<Card, EngineError> {
        if index > 51 {
            return Err(EngineError::InvalidCardIndex(index));
        }
        let suit = Suit::ALL[(index / 13) as usize];
        let rank = Rank::ALL[(index % 13) as usize];
        Ok(Card { rank, suit })
    }

    /// Подпись вида `A♠`, `10♥`.
    pub fn label(&self) -> String {
        let rank = match self.rank {
            Rank::Ten => "10".to_string(),
            r => rank_char(r).to_string(),
        };
        format!("{}{}", rank, self.suit.symbol())
    }
}

fn rank_char(rank: Rank) -> char {
    match rank {
        Rank::Ten => 'T',
        Rank::Jack => 'J',
        Rank::Queen => 'Q',
        Rank::King => 'K',
        Rank::Ace => 'A',
        r => char::from(b'0' + r.value()),
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", rank_char(*self))
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "Ah", "Td", "7c".
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (r_ch, s_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r, s),
            _ => return Err("Card string must have length 2".into()),
        };

        let rank = match r_ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' | 't' => Rank::Ten,
            'J' | 'j' => Rank::Jack,
            'Q' | 'q' => Rank::Queen,
            'K' | 'k' => Rank::King,
            'A' | 'a' => Rank::Ace,
            _ => return Err(format!("Invalid rank: {r_ch}")),
        };

        let suit = match s_ch {
            'h' | 'H' => Suit::Hearts,
            'd' | 'D' => Suit::Diamonds,
            'c' | 'C' => Suit::Clubs,
            's' | 'S' => Suit::Spades,
            _ => return Err(format!("Invalid suit: {s_ch}")),
        };

        Ok(Card { rank, suit })
    }
}

/// Распарсить список карт через пробел: "Ah Kd 7c".
pub fn parse_cards(s: &str) -> Result<Vec<Card>, String> {
    s.split_whitespace().map(Card::from_str).collect()
}
