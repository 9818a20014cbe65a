use log::warn;

use crate::domain::{Chips, Game, PlayerState, Stage};
use crate::engine::actions::{PlayerActionKind, ValidationResult};
use crate::engine::errors::ActionError;

/// Проверка, может ли игрок выполнить это действие при текущем состоянии игры.
///
/// Нарушения правил не являются ошибкой вызова: причина приходит в
/// `ValidationResult::error`, чтобы её можно было показать игроку.
pub fn validate_action(game: &Game, player: &PlayerState, action: &PlayerActionKind) -> ValidationResult {
    let res = check_action(game, player, action);
    if let Err(err) = &res {
        warn!("seat {} action {:?} rejected: {}", player.seat, action, err);
    }
    res.into()
}

/// Та же проверка, но с типизированной причиной отказа.
pub fn check_action(game: &Game, player: &PlayerState, action: &PlayerActionKind) -> Result<(), ActionError> {
    check_gates(game, player)?;

    let stack = player.chip_stack;
    let to_call = diff_to_call(game, player);

    match action {
        PlayerActionKind::Fold => Ok(()),

        PlayerActionKind::Check => {
            if to_call.is_zero() {
                Ok(())
            } else {
                Err(ActionError::CannotCheck { to_call })
            }
        }

        PlayerActionKind::Call => {
            if to_call.is_zero() {
                return Err(ActionError::NothingToCall);
            }
            // Не хватает на полный call – это уже олл-ин, отдельное действие.
            if to_call > stack {
                return Err(ActionError::NotEnoughChips {
                    required: to_call,
                    available: stack,
                });
            }
            Ok(())
        }

        PlayerActionKind::Bet(amount) => {
            if !game.current_bet.is_zero() {
                return Err(ActionError::BetAlreadyOpen(game.current_bet));
            }
            if *amount < game.big_blind {
                return Err(ActionError::BetTooSmall {
                    amount: *amount,
                    minimum: game.big_blind,
                });
            }
            if *amount > stack {
                return Err(ActionError::NotEnoughChips {
                    required: *amount,
                    available: stack,
                });
            }
            Ok(())
        }

        PlayerActionKind::Raise(amount) => {
            if game.current_bet.is_zero() {
                return Err(ActionError::NoBetToRaise);
            }
            let minimum = game.current_bet.times(2);
            if *amount < minimum {
                return Err(ActionError::RaiseTooSmall {
                    amount: *amount,
                    minimum,
                });
            }
            if *amount > stack {
                return Err(ActionError::NotEnoughChips {
                    required: *amount,
                    available: stack,
                });
            }
            Ok(())
        }

        PlayerActionKind::AllIn => {
            if stack.is_zero() {
                return Err(ActionError::EmptyStack);
            }
            Ok(())
        }
    }
}

/// Общие проверки до правил конкретного действия: стадия, место, очередь хода.
fn check_gates(game: &Game, player: &PlayerState) -> Result<(), ActionError> {
    match game.stage {
        Stage::Waiting | Stage::Finished => return Err(ActionError::HandNotActive(game.stage)),
        Stage::Showdown => return Err(ActionError::NoBettingRound(game.stage)),
        _ => {}
    }

    let seat = player.seat;
    match game.seats.get(seat as usize) {
        None => return Err(ActionError::InvalidSeat(seat)),
        Some(None) => return Err(ActionError::EmptySeat(seat)),
        Some(Some(_)) => {}
    }

    if game.current_player_index != seat {
        return Err(ActionError::NotPlayersTurn {
            expected: game.current_player_index,
            actual: seat,
        });
    }

    if player.folded {
        return Err(ActionError::AlreadyFolded);
    }
    if player.all_in && player.chip_stack.is_zero() {
        return Err(ActionError::AlreadyAllIn);
    }

    Ok(())
}

/// Сколько фишек нужно добавить игроку, чтобы уравнять текущую ставку.
pub fn diff_to_call(game: &Game, player: &PlayerState) -> Chips {
    game.current_bet.saturating_sub(player.current_round_bet)
}
