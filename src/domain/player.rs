use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SeatIndex};

/// Состояние игрока в текущей раздаче (снапшот с леджера).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerState {
    /// Место за столом; уникально и не меняется в течение раздачи.
    pub seat: SeatIndex,
    pub player_id: PlayerId,
    /// Остаток стека (без учёта уже поставленного).
    pub chip_stack: Chips,
    /// Ставка в текущем раунде торговли.
    pub current_round_bet: Chips,
    /// Сколько всего игрок внёс в банк за раздачу (для side pots).
    pub total_bet: Chips,
    pub folded: bool,
    pub all_in: bool,
    /// Карманные карты (0 или 2 для холдема).
    pub hole_cards: Vec<Card>,
}

impl PlayerState {
    pub fn new(seat: SeatIndex, player_id: PlayerId, chip_stack: Chips) -> Self {
        Self {
            seat,
            player_id,
            chip_stack,
            current_round_bet: Chips::ZERO,
            total_bet: Chips::ZERO,
            folded: false,
            all_in: false,
            hole_cards: Vec::new(),
        }
    }

    pub fn with_hole_cards(mut self, cards: [Card; 2]) -> Self {
        self.hole_cards = cards.to_vec();
        self
    }

    /// Участвует в борьбе за банк.
    pub fn is_in_hand(&self) -> bool {
        !self.folded
    }

    /// Может ещё делать ходы в этой раздаче.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    /// Перенести `amount` из стека в ставку. Больше стека списать нельзя:
    /// лишнее просто не списывается. Возвращает реально внесённое.
    pub(crate) fn commit(&mut self, amount: Chips) -> Chips {
        let real = amount.min(self.chip_stack);
        self.chip_stack -= real;
        self.current_round_bet += real;
        self.total_bet += real;
        if self.chip_stack.is_zero() {
            self.all_in = true;
        }
        real
    }
}

/// Найти игрока по месту.
pub fn find_by_seat(players: &[PlayerState], seat: SeatIndex) -> Option<&PlayerState> {
    players.iter().find(|p| p.seat == seat)
}

/// Игроки, которые не сфолдили.
pub fn non_folded(players: &[PlayerState]) -> impl Iterator<Item = &PlayerState> {
    players.iter().filter(|p| !p.folded)
}
