use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::game::Stage;
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;
use crate::infra::rng::DeterministicRng;

/// Колода карт. В домене – просто упорядоченный список карт без повторов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Hearts 2..A, Diamonds 2..A, Clubs 2..A, Spades 2..A.
    /// Индекс карты в этой колоде совпадает с `Card::encode`.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Перемешать колоду произвольным источником случайности.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Детерминированная перестановка Фишера–Йетса по seed.
    /// Только для тестов и локальной игры: это не защищённое перемешивание.
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = DeterministicRng::from_seed(seed);
        self.shuffle(&mut rng);
    }

    /// Раздать первые `n` карт. Возвращает (розданные, остаток колоды).
    pub fn deal(&self, n: usize) -> Result<(Vec<Card>, Deck), EngineError> {
        if n > self.cards.len() {
            return Err(EngineError::NotEnoughCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        let dealt = self.cards[..n].to_vec();
        let rest = Deck {
            cards: self.cards[n..].to_vec(),
        };
        Ok((dealt, rest))
    }

    /// Убрать из колоды уже использованные карты.
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }
}

/// Сессия раздачи в рамках одной руки: колода + позиция следующей карты.
///
/// Между раздачами состояние обязательно сбрасывается через `reset`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandDealer {
    deck: Deck,
    position: usize,
}

impl HandDealer {
    pub fn new(deck: Deck) -> Self {
        Self { deck, position: 0 }
    }

    /// Позиция следующей карты в колоде.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.deck.len().saturating_sub(self.position)
    }

    /// Начать новую руку с новой колодой.
    pub fn reset(&mut self, deck: Deck) {
        self.deck = deck;
        self.position = 0;
    }

    /// Взять `n` карт подряд.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        if n > self.remaining() {
            return Err(EngineError::NotEnoughCards {
                requested: n,
                available: self.remaining(),
            });
        }
        // Снапшот с позицией за концом колоды – просто пустой остаток.
        let cards = self
            .deck
            .cards
            .get(self.position..self.position + n)
            .map(<[Card]>::to_vec)
            .unwrap_or_default();
        self.position += n;
        Ok(cards)
    }

    /// Карманные карты: по одной по кругу, два круга.
    /// Результат в порядке `seats`.
    pub fn deal_hole_cards(&mut self, seat_count: usize) -> Result<Vec<[Card; 2]>, EngineError> {
        let needed = seat_count * 2;
        if needed > self.remaining() {
            return Err(EngineError::NotEnoughCards {
                requested: needed,
                available: self.remaining(),
            });
        }
        let first = self.draw(seat_count)?;
        let second = self.draw(seat_count)?;
        Ok(first
            .into_iter()
            .zip(second)
            .map(|(a, b)| [a, b])
            .collect())
    }

    /// Общие карты, открываемые при переходе на `stage`:
    /// флоп – 3, тёрн и ривер – по 1, остальные улицы – ничего.
    pub fn deal_community(&mut self, stage: Stage) -> Result<Vec<Card>, EngineError> {
        let count = match stage {
            Stage::Flop => 3,
            Stage::Turn | Stage::River => 1,
            _ => 0,
        };
        self.draw(count)
    }
}
