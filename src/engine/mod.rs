//! Правила торговли, переходы стадий, сайд-поты, шоудаун.
//!
//! Движок чистый: каждая операция получает снапшоты `Game` / `PlayerState`
//! и возвращает новые значения, ничего не храня между вызовами.
//! Основные операции:
//!   - `validate_action` / `apply_action` – проверить и применить действие
//!   - `start_hand` / `advance_stage` – переходы стадий
//!   - `calculate_pots` / `distribute_pot` – банк и сайд-поты
//!   - `determine_winners` / `settle_hand` – шоудаун и выплаты

pub mod actions;
pub mod betting;
pub mod context;
pub mod errors;
pub mod positions;
pub mod pot;
pub mod settlement;
pub mod showdown;
pub mod side_pots;
pub mod stage;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind, ValidationResult};
pub use betting::{apply_action, is_round_complete, should_go_to_showdown, ActionOutcome};
pub use context::EngineContext;
pub use errors::{ActionError, EngineError};
pub use positions::next_player_index;
pub use pot::distribute_pot;
pub use settlement::{apply_payouts, settle_hand, Settlement};
pub use showdown::{determine_winners, Winner};
pub use side_pots::{calculate_pots, needs_side_pots, PotDistribution, SidePot};
pub use stage::{advance_stage, advance_to_showdown, next_hand, start_hand};
pub use validation::{check_action, validate_action};

/// RNG интерфейс для перемешивания колоды.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
