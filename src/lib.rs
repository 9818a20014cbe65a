//! Клиентское зеркало покерного движка (Texas Hold'em).
//!
//! Авторитетное состояние живёт на леджере; здесь только чистые функции
//! над снапшотами: проверка действий, смена стадий, сайд-поты, оценка рук
//! и шоудаун. Никакого I/O и глобального состояния.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{Card, Chips, Deck, Game, PlayerState, Rank, SeatIndex, Stage, Suit, TableConfig};
pub use engine::{EngineContext, PlayerAction, PlayerActionKind, ValidationResult};
pub use eval::{evaluate, HandCategory, HandResult, HandValue};
