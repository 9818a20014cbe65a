use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    fn from_id(id: u8) -> HandCategory {
        match id {
            1 => HandCategory::Pair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            8 => HandCategory::StraightFlush,
            9 => HandCategory::RoyalFlush,
            _ => HandCategory::HighCard,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Сравнимая сила руки. Больше значение – сильнее рука, равные – ничья.
///
/// Схема кодирования (u32):
///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
/// Ранги значимых карт идут от старшего к младшему; неиспользуемые
/// позиции заполняются нулями.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(pub u32);

impl HandValue {
    /// Собрать значение из категории и до 5 значимых рангов.
    pub fn from_category_and_ranks(category: HandCategory, ranks: &[Rank]) -> Self {
        let mut value = (category as u32) << 20;
        for (i, rank) in ranks.iter().take(5).enumerate() {
            value |= (rank.value() as u32) << (16 - 4 * i);
        }
        HandValue(value)
    }

    pub fn category(&self) -> HandCategory {
        HandCategory::from_id(((self.0 >> 20) & 0x0F) as u8)
    }

    /// Значимые ранги (от старшего к младшему).
    pub fn ranks(&self) -> Vec<Rank> {
        (0..5)
            .filter_map(|i| Rank::from_value(((self.0 >> (16 - 4 * i)) & 0x0F) as u8))
            .collect()
    }
}

/// Результат оценки: категория, лучшие 5 карт, сравнимое значение, подпись.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandResult {
    pub category: HandCategory,
    /// Лучшие 5 карт в порядке значимости (комбинация, затем кикеры).
    pub best_five: [Card; 5],
    pub value: HandValue,
    pub label: String,
}

/// Человеческое описание руки.
pub fn describe_hand(value: HandValue) -> String {
    let ranks = value.ranks();
    let r = |i: usize| ranks.get(i).copied().unwrap_or(Rank::Two);
    match value.category() {
        HandCategory::HighCard => format!("{} High", r(0).name()),
        HandCategory::Pair => format!("Pair of {}", r(0).plural()),
        HandCategory::TwoPair => format!("Two Pair, {} and {}", r(0).plural(), r(1).plural()),
        HandCategory::ThreeOfAKind => format!("Three {}", r(0).plural()),
        HandCategory::Straight => format!("Straight, {} High", r(0).name()),
        HandCategory::Flush => format!("Flush, {} High", r(0).name()),
        HandCategory::FullHouse => format!("Full House, {} over {}", r(0).plural(), r(1).plural()),
        HandCategory::FourOfAKind => format!("Four {}", r(0).plural()),
        HandCategory::StraightFlush => format!("Straight Flush, {} High", r(0).name()),
        HandCategory::RoyalFlush => "Royal Flush".to_string(),
    }
}

/// Удобная функция – получить категорию из значения.
pub fn hand_category(value: HandValue) -> HandCategory {
    value.category()
}
