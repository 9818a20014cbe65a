use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};
use crate::engine::errors::ActionError;

/// Тип действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    Check,
    Call,
    /// Bet, когда текущей ставки ещё нет.
    Bet(Chips),
    /// Raise до указанной суммы ставки раунда.
    Raise(Chips),
    /// All-in – поставить весь стек.
    AllIn,
}

/// Конкретное действие игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// С какого места действуют (0..max_seats-1).
    pub seat: SeatIndex,
    /// Само действие.
    pub kind: PlayerActionKind,
}

impl PlayerAction {
    pub fn new(seat: SeatIndex, kind: PlayerActionKind) -> Self {
        Self { seat, kind }
    }
}

/// Результат проверки действия – то, что уходит в UI.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn rejected(err: &ActionError) -> Self {
        Self {
            valid: false,
            error: Some(err.to_string()),
        }
    }
}

impl From<Result<(), ActionError>> for ValidationResult {
    fn from(res: Result<(), ActionError>) -> Self {
        match res {
            Ok(()) => ValidationResult::ok(),
            Err(err) => ValidationResult::rejected(&err),
        }
    }
}
