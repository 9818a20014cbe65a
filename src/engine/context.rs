use crate::domain::{Card, Chips, Game, PlayerState, SeatIndex, TableConfig};
use crate::engine::actions::{PlayerAction, ValidationResult};
use crate::engine::betting::{self, ActionOutcome};
use crate::engine::errors::{ActionError, EngineError};
use crate::engine::settlement::{self, Settlement};
use crate::engine::showdown::{self, Winner};
use crate::engine::side_pots::{self, PotDistribution};
use crate::engine::{pot, stage, validation};

/// Контекст движка, которым владеет вызывающий код.
///
/// Никакого глобального состояния: конфиг стола передаётся явно, а сам
/// контекст можно свободно шарить между потоками (он только читается).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineContext {
    config: TableConfig,
}

impl EngineContext {
    pub fn new(config: TableConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Пустой снапшот стола по конфигу.
    pub fn new_game(&self) -> Game {
        Game::new(&self.config)
    }

    pub fn start_hand(&self, game: &Game, players: &[PlayerState]) -> Result<(Game, Vec<PlayerState>), ActionError> {
        stage::start_hand(game, players, &self.config)
    }

    pub fn validate_action(&self, game: &Game, players: &[PlayerState], action: &PlayerAction) -> ValidationResult {
        if action.seat as usize >= game.seat_count() {
            return ValidationResult::rejected(&ActionError::InvalidSeat(action.seat));
        }
        match players.iter().find(|p| p.seat == action.seat) {
            Some(player) => validation::validate_action(game, player, &action.kind),
            None => ValidationResult::rejected(&ActionError::EmptySeat(action.seat)),
        }
    }

    pub fn apply_action(
        &self,
        game: &Game,
        players: &[PlayerState],
        action: &PlayerAction,
    ) -> Result<ActionOutcome, ActionError> {
        betting::apply_action(game, players, action)
    }

    pub fn is_round_complete(&self, game: &Game, players: &[PlayerState]) -> bool {
        betting::is_round_complete(game, players)
    }

    pub fn advance_stage(
        &self,
        game: &Game,
        players: &[PlayerState],
        new_cards: &[Card],
    ) -> Result<(Game, Vec<PlayerState>), ActionError> {
        stage::advance_stage(game, players, new_cards)
    }

    pub fn calculate_pots(&self, players: &[PlayerState]) -> PotDistribution {
        side_pots::calculate_pots(players)
    }

    pub fn distribute_pot(&self, amount: Chips, winners: &[SeatIndex]) -> Result<Vec<(SeatIndex, Chips)>, EngineError> {
        pot::distribute_pot(amount, winners)
    }

    pub fn determine_winners(&self, game: &Game, players: &[PlayerState]) -> Result<Vec<Winner>, EngineError> {
        showdown::determine_winners(game, players)
    }

    pub fn settle_hand(&self, game: &Game, players: &[PlayerState]) -> Result<Settlement, EngineError> {
        settlement::settle_hand(game, players)
    }
}
