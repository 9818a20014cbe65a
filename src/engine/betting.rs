use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{non_folded, Chips, Game, PlayerState, Stage};
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::errors::ActionError;
use crate::engine::positions::next_player_index;
use crate::engine::validation::{check_action, diff_to_call};

/// Итог применения действия: новые снапшоты, которые вызывающий код
/// сам отправляет на леджер.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionOutcome {
    pub game: Game,
    pub players: Vec<PlayerState>,
    /// Сколько фишек ушло из стека в банк этим действием.
    pub chips_moved: Chips,
    pub round_complete: bool,
    pub showdown_ready: bool,
}

/// Применить действие игрока к снапшоту. Входные данные не меняются.
pub fn apply_action(
    game: &Game,
    players: &[PlayerState],
    action: &PlayerAction,
) -> Result<ActionOutcome, ActionError> {
    let seat = action.seat;
    if seat as usize >= game.seat_count() {
        return Err(ActionError::InvalidSeat(seat));
    }
    let idx = players
        .iter()
        .position(|p| p.seat == seat)
        .ok_or(ActionError::EmptySeat(seat))?;

    check_action(game, &players[idx], &action.kind)?;

    let mut game = game.clone();
    let mut players = players.to_vec();
    let to_call = diff_to_call(&game, &players[idx]);

    let player = &mut players[idx];
    let moved = match action.kind {
        PlayerActionKind::Fold => {
            player.folded = true;
            Chips::ZERO
        }
        PlayerActionKind::Check => Chips::ZERO,
        PlayerActionKind::Call => player.commit(to_call),
        PlayerActionKind::Bet(amount) | PlayerActionKind::Raise(amount) => {
            let diff = amount.saturating_sub(player.current_round_bet);
            let moved = player.commit(diff);
            game.current_bet = amount;
            game.clear_acted();
            moved
        }
        PlayerActionKind::AllIn => {
            let stack = player.chip_stack;
            let moved = player.commit(stack);
            // Олл-ин выше текущей ставки открывает новый уровень.
            if player.current_round_bet > game.current_bet {
                game.current_bet = player.current_round_bet;
                game.clear_acted();
            }
            moved
        }
    };

    game.pot += moved;
    game.mark_acted(seat);

    let mut round_complete = is_round_complete(&game, &players);
    if !round_complete {
        match next_player_index(&game, &players) {
            Some(next) => game.current_player_index = next,
            None => round_complete = true,
        }
    }
    let showdown_ready = should_go_to_showdown(&game, &players, round_complete);

    debug!(
        "seat {} {:?}: moved {}, pot {}, current bet {}, round complete {}, showdown {}",
        seat, action.kind, moved, game.pot, game.current_bet, round_complete, showdown_ready
    );

    Ok(ActionOutcome {
        game,
        players,
        chips_moved: moved,
        round_complete,
        showdown_ready,
    })
}

/// Раунд ставок завершён, если:
/// - в раздаче остался максимум один игрок, или
/// - каждый не сфолдивший и не олл-ин игрок уже ходил и уравнял текущую ставку.
pub fn is_round_complete(game: &Game, players: &[PlayerState]) -> bool {
    if non_folded(players).count() <= 1 {
        return true;
    }
    non_folded(players)
        .filter(|p| !p.all_in)
        .all(|p| game.has_acted(p.seat) && p.current_round_bet == game.current_bet)
}

/// Пора ли открывать карты:
/// - раунд на ривере закончен;
/// - остался один игрок;
/// - торговаться больше некому (все в олл-ине, либо ходить может один и он уравнял).
pub fn should_go_to_showdown(game: &Game, players: &[PlayerState], round_complete: bool) -> bool {
    let in_hand = non_folded(players).count();
    if in_hand <= 1 {
        return true;
    }
    let can_act = non_folded(players).filter(|p| !p.all_in).count();
    if can_act == 0 {
        return true;
    }
    if !round_complete {
        return false;
    }
    can_act == 1 || game.stage == Stage::River
}
