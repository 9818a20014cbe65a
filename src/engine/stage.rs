//! Переходы стадий раздачи: старт с блайндами, смена улиц, досрочный шоудаун,
//! подготовка следующей раздачи.

use log::debug;

use crate::domain::{find_by_seat, Card, Chips, Game, PlayerState, SeatIndex, Stage, TableConfig};
use crate::engine::errors::ActionError;
use crate::engine::positions::{collect_occupied_seats_from, next_eligible_seat, next_occupied_seat};

/// Старт раздачи: Waiting -> PreFlop.
///
/// - игроки с пустым стеком в раздаче не участвуют (помечаются как fold);
/// - в хедз-апе малый блайнд ставит дилер, иначе – следующий за дилером;
/// - постинг блайнда считается ходом в раунде;
/// - первым ходит следующий после большого блайнда.
pub fn start_hand(
    game: &Game,
    players: &[PlayerState],
    config: &TableConfig,
) -> Result<(Game, Vec<PlayerState>), ActionError> {
    if game.stage != Stage::Waiting {
        return Err(ActionError::IllegalTransition { from: game.stage });
    }

    let mut game = game.clone();
    let mut players = players.to_vec();

    for p in players.iter_mut() {
        p.current_round_bet = Chips::ZERO;
        p.total_bet = Chips::ZERO;
        p.all_in = false;
        p.folded = p.chip_stack.is_zero() || game.is_seat_empty(p.seat);
    }

    let dealer = if game.is_seat_empty(game.dealer_index) {
        next_occupied_seat(&game, game.dealer_index).unwrap_or(game.dealer_index)
    } else {
        game.dealer_index
    };
    let order: Vec<SeatIndex> = collect_occupied_seats_from(&game, dealer)
        .into_iter()
        .filter(|&s| find_by_seat(&players, s).map(|p| !p.folded).unwrap_or(false))
        .collect();

    // Меньше двух игроков раздачу не начать, даже если конфиг не проверен.
    let required = (config.min_players_to_start as usize).max(2);
    if order.len() < required {
        return Err(ActionError::NotEnoughPlayers {
            required,
            seated: order.len(),
        });
    }

    let (sb_seat, bb_seat) = if order.len() == 2 {
        (order[0], order[1])
    } else {
        (order[1], order[2])
    };

    game.stage = Stage::PreFlop;
    game.dealer_index = order[0];
    game.pot = Chips::ZERO;
    game.community_cards.clear();
    game.community_cards_revealed = 0;
    game.clear_acted();

    let small_blind = game.small_blind;
    let big_blind = game.big_blind;
    post_blind(&mut game, &mut players, sb_seat, small_blind);
    post_blind(&mut game, &mut players, bb_seat, big_blind);
    game.current_bet = big_blind;

    game.current_player_index = next_eligible_seat(&game, &players, bb_seat, false).unwrap_or(bb_seat);

    debug!(
        "hand {} started: dealer {}, sb {}, bb {}, first to act {}",
        game.hand_number, game.dealer_index, sb_seat, bb_seat, game.current_player_index
    );

    Ok((game, players))
}

/// Поставить блайнд; короткий стек уходит в олл-ин.
fn post_blind(game: &mut Game, players: &mut [PlayerState], seat: SeatIndex, amount: Chips) {
    if let Some(p) = players.iter_mut().find(|p| p.seat == seat) {
        let paid = p.commit(amount);
        game.pot += paid;
        game.mark_acted(seat);
    }
}

/// Переход на следующую улицу после завершённого раунда.
///
/// `new_cards` – общие карты, которые открываются на новой стадии (их
/// раздаёт вызывающий код). Waiting и Finished отсюда не продвигаются.
pub fn advance_stage(
    game: &Game,
    players: &[PlayerState],
    new_cards: &[Card],
) -> Result<(Game, Vec<PlayerState>), ActionError> {
    let next = match game.stage {
        Stage::Waiting | Stage::Finished => {
            return Err(ActionError::IllegalTransition { from: game.stage })
        }
        s => s.next().ok_or(ActionError::IllegalTransition { from: s })?,
    };

    let mut game = game.clone();
    let mut players = players.to_vec();
    reset_round(&mut game, &mut players);

    game.stage = next;
    game.community_cards.extend_from_slice(new_cards);
    game.community_cards_revealed = next.community_cards_revealed();

    if next.is_betting_round() {
        // Постфлоп первым ходит первый активный слева от дилера.
        if let Some(first) = next_eligible_seat(&game, &players, game.dealer_index, true) {
            game.current_player_index = first;
        }
    }

    debug!(
        "hand {}: stage -> {:?}, board {}",
        game.hand_number,
        next,
        game.community_cards.len()
    );

    Ok((game, players))
}

/// Досрочный переход к шоудауну (остался один игрок или все в олл-ине).
pub fn advance_to_showdown(game: &Game, remaining_board: &[Card]) -> Result<Game, ActionError> {
    if !game.stage.is_betting_round() || !game.stage.can_transition_to(Stage::Showdown) {
        return Err(ActionError::IllegalTransition { from: game.stage });
    }
    let mut game = game.clone();
    game.stage = Stage::Showdown;
    game.community_cards.extend_from_slice(remaining_board);
    game.community_cards_revealed = Stage::Showdown.community_cards_revealed();
    game.current_bet = Chips::ZERO;
    game.clear_acted();

    debug!("hand {}: jumped to showdown", game.hand_number);
    Ok(game)
}

/// Снапшот следующей раздачи по завершённой.
///
/// Finished-снапшот не меняется и остаётся терминальным: новая раздача
/// строится с нуля в Waiting. Переносятся рассадка, блайнды и стеки,
/// кнопка сдвигается на следующее занятое место, `hand_number` + 1.
pub fn next_hand(finished: &Game, players: &[PlayerState]) -> Result<(Game, Vec<PlayerState>), ActionError> {
    if finished.stage != Stage::Finished {
        return Err(ActionError::IllegalTransition { from: finished.stage });
    }

    let mut game = Game::with_seats(finished.seats.clone(), finished.small_blind, finished.big_blind);
    game.hand_number = finished.hand_number + 1;
    game.dealer_index = next_occupied_seat(finished, finished.dealer_index).unwrap_or(finished.dealer_index);

    let players = players
        .iter()
        .map(|p| PlayerState::new(p.seat, p.player_id, p.chip_stack))
        .collect();

    debug!("hand {} prepared, dealer {}", game.hand_number, game.dealer_index);
    Ok((game, players))
}

fn reset_round(game: &mut Game, players: &mut [PlayerState]) {
    for p in players.iter_mut() {
        p.current_round_bet = Chips::ZERO;
    }
    game.current_bet = Chips::ZERO;
    game.clear_acted();
}
