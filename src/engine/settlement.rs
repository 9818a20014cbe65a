use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{non_folded, Chips, Game, PlayerState, Stage};
use crate::engine::errors::EngineError;
use crate::engine::showdown::{determine_winners, Winner};

/// Итог раздачи: финальные снапшоты и список победителей.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settlement {
    pub game: Game,
    pub players: Vec<PlayerState>,
    pub winners: Vec<Winner>,
}

/// Зачислить выигрыши в стеки и сбросить ставки раунда.
pub fn apply_payouts(players: &[PlayerState], winners: &[Winner]) -> Vec<PlayerState> {
    let mut players = players.to_vec();
    for p in players.iter_mut() {
        p.current_round_bet = Chips::ZERO;
        if let Some(w) = winners.iter().find(|w| w.seat == p.seat) {
            p.chip_stack += w.win_amount;
        }
    }
    players
}

/// Разыграть банк и закрыть раздачу (Showdown -> Finished).
///
/// Допустимо на шоудауне или когда в раздаче остался один игрок.
pub fn settle_hand(game: &Game, players: &[PlayerState]) -> Result<Settlement, EngineError> {
    let uncontested = non_folded(players).count() <= 1;
    if game.stage != Stage::Showdown && !(uncontested && game.stage.is_betting_round()) {
        return Err(EngineError::NotAtShowdown(game.stage));
    }

    let winners = determine_winners(game, players)?;
    let players = apply_payouts(players, &winners);

    let mut game = game.clone();
    game.stage = Stage::Finished;
    game.pot = Chips::ZERO;
    game.current_bet = Chips::ZERO;
    game.clear_acted();

    debug!("hand {} settled, {} winner(s)", game.hand_number, winners.len());

    Ok(Settlement {
        game,
        players,
        winners,
    })
}
