use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::table::TableConfig;
use crate::domain::{PlayerId, SeatIndex};

/// Стадия раздачи. Переходы только вперёд, Finished – терминальная.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Waiting,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    Finished,
}

impl Stage {
    /// Следующая стадия по таблице переходов.
    pub fn next(self) -> Option<Stage> {
        use Stage::*;
        match self {
            Waiting => Some(PreFlop),
            PreFlop => Some(Flop),
            Flop => Some(Turn),
            Turn => Some(River),
            River => Some(Showdown),
            Showdown => Some(Finished),
            Finished => None,
        }
    }

    /// Улица, на которой идёт торговля.
    pub fn is_betting_round(self) -> bool {
        matches!(self, Stage::PreFlop | Stage::Flop | Stage::Turn | Stage::River)
    }

    /// Сколько общих карт открыто на этой стадии.
    pub fn community_cards_revealed(self) -> u8 {
        match self {
            Stage::Waiting | Stage::PreFlop => 0,
            Stage::Flop => 3,
            Stage::Turn => 4,
            Stage::River | Stage::Showdown | Stage::Finished => 5,
        }
    }

    /// Допустим ли переход `self -> target`: один шаг по таблице либо
    /// досрочный прыжок на Showdown с улицы торговли.
    pub fn can_transition_to(self, target: Stage) -> bool {
        self.next() == Some(target) || (target == Stage::Showdown && self.is_betting_round())
    }
}

/// Снапшот игры, который приходит с леджера. Движок его не меняет –
/// только возвращает новое значение.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    pub stage: Stage,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub pot: Chips,
    /// Текущая целевая ставка раунда.
    pub current_bet: Chips,
    /// Места за столом: индекс вектора = SeatIndex, None – место пустое.
    pub seats: Vec<Option<PlayerId>>,
    /// Чей сейчас ход (индекс места).
    pub current_player_index: SeatIndex,
    /// Ходил ли игрок на этом месте в текущем раунде.
    pub acted: Vec<bool>,
    pub community_cards_revealed: u8,
    /// Открытые общие карты (0–5).
    pub community_cards: Vec<Card>,
    pub dealer_index: SeatIndex,
    pub hand_number: u64,
    /// Время последнего действия (unix-секунды), заполняет вызывающий код.
    pub last_action_at: Option<i64>,
}

impl Game {
    /// Пустой стол в Waiting по конфигу.
    pub fn new(config: &TableConfig) -> Self {
        Self::with_seats(
            vec![None; config.max_seats as usize],
            config.stakes.small_blind,
            config.stakes.big_blind,
        )
    }

    /// Снапшот в Waiting с уже рассаженными игроками.
    pub fn with_seats(seats: Vec<Option<PlayerId>>, small_blind: Chips, big_blind: Chips) -> Self {
        let acted = vec![false; seats.len()];
        Self {
            stage: Stage::Waiting,
            small_blind,
            big_blind,
            pot: Chips::ZERO,
            current_bet: Chips::ZERO,
            seats,
            current_player_index: 0,
            acted,
            community_cards_revealed: 0,
            community_cards: Vec::new(),
            dealer_index: 0,
            hand_number: 0,
            last_action_at: None,
        }
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    pub fn seated_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_seat_empty(&self, index: SeatIndex) -> bool {
        self.seats
            .get(index as usize)
            .map(|s| s.is_none())
            .unwrap_or(true)
    }

    pub fn has_acted(&self, seat: SeatIndex) -> bool {
        self.acted.get(seat as usize).copied().unwrap_or(false)
    }

    /// Посадить игрока на место (только для построения снапшотов).
    pub fn seat_player(&mut self, seat: SeatIndex, player_id: PlayerId) -> bool {
        match self.seats.get_mut(seat as usize) {
            Some(slot @ None) => {
                *slot = Some(player_id);
                true
            }
            _ => false,
        }
    }

    /// Открытые общие карты с учётом счётчика.
    pub fn revealed_board(&self) -> &[Card] {
        let n = (self.community_cards_revealed as usize).min(self.community_cards.len());
        &self.community_cards[..n]
    }

    pub(crate) fn clear_acted(&mut self) {
        self.acted.iter_mut().for_each(|a| *a = false);
    }

    pub(crate) fn mark_acted(&mut self, seat: SeatIndex) {
        if let Some(flag) = self.acted.get_mut(seat as usize) {
            *flag = true;
        }
    }
}
