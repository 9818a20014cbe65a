//! Betting rules tests: гейты, правила каждого действия, очередь хода,
//! завершение раунда, старт раздачи и переходы улиц.

use poker_mirror::domain::{Chips, Game, PlayerState, Stage, TableConfig};
use poker_mirror::engine::{
    advance_stage, apply_action, check_action, is_round_complete, next_player_index, start_hand,
    validate_action, ActionError, ActionOutcome, PlayerAction, PlayerActionKind,
};

use PlayerActionKind::*;

/// Утилита: стол по умолчанию (6 мест, блайнды 10/20), игроки на местах 0..n.
fn table(stacks: &[u64]) -> (Game, Vec<PlayerState>) {
    let mut game = Game::new(&TableConfig::default());
    let mut players = Vec::new();
    for (i, &stack) in stacks.iter().enumerate() {
        let seat = i as u8;
        game.seat_player(seat, 100 + i as u64);
        players.push(PlayerState::new(seat, 100 + i as u64, Chips(stack)));
    }
    (game, players)
}

/// Утилита: стол после постинга блайндов.
fn started(stacks: &[u64]) -> (Game, Vec<PlayerState>) {
    let (game, players) = table(stacks);
    start_hand(&game, &players, &TableConfig::default()).expect("start_hand")
}

fn act(game: &Game, players: &[PlayerState], seat: u8, kind: PlayerActionKind) -> ActionOutcome {
    apply_action(game, players, &PlayerAction::new(seat, kind)).expect("action must be legal")
}

fn reject(game: &Game, players: &[PlayerState], seat: u8, kind: PlayerActionKind) -> ActionError {
    apply_action(game, players, &PlayerAction::new(seat, kind)).expect_err("action must be rejected")
}

fn seat(players: &[PlayerState], seat: u8) -> &PlayerState {
    players.iter().find(|p| p.seat == seat).unwrap()
}

/// Хедз-ап после префлопа (SB доколлировал), ход на флопе.
fn heads_up_on_flop() -> (Game, Vec<PlayerState>) {
    let (g, ps) = started(&[1000, 1000]);
    let out = act(&g, &ps, 0, Call);
    advance_stage(&out.game, &out.players, &[]).unwrap()
}

//
// ====================== SCENARIO A ======================
//

#[test]
fn heads_up_blinds_and_call_complete_round() {
    let (g, ps) = started(&[1000, 1000]);

    assert_eq!(g.stage, Stage::PreFlop);
    assert_eq!(seat(&ps, 0).current_round_bet, Chips(10), "Дилер в хедз-апе ставит SB");
    assert_eq!(seat(&ps, 1).current_round_bet, Chips(20));
    assert_eq!(g.pot, Chips(30));
    assert_eq!(g.current_bet, Chips(20));
    assert_eq!(g.current_player_index, 0, "Префлоп первым ходит SB");
    assert!(!is_round_complete(&g, &ps));

    let out = act(&g, &ps, 0, Call);

    assert_eq!(out.chips_moved, Chips(10));
    assert_eq!(out.game.pot, Chips(40));
    assert_eq!(seat(&out.players, 0).current_round_bet, Chips(20));
    assert_eq!(seat(&out.players, 1).current_round_bet, Chips(20));
    assert_eq!(seat(&out.players, 0).chip_stack, Chips(980));
    assert!(out.round_complete);
    assert!(!out.showdown_ready);
}

#[test]
fn apply_action_does_not_touch_input_snapshot() {
    let (g, ps) = started(&[1000, 1000]);
    let (g_before, ps_before) = (g.clone(), ps.clone());

    let _ = act(&g, &ps, 0, Call);

    assert_eq!(g, g_before);
    assert_eq!(ps, ps_before);
}

//
// ====================== GATES ======================
//

#[test]
fn actions_rejected_outside_active_hand() {
    let (mut g, ps) = table(&[1000, 1000]);
    let v = validate_action(&g, &ps[0], &Fold);
    assert!(!v.valid);
    assert!(v.error.is_some());

    g.stage = Stage::Finished;
    assert_eq!(
        check_action(&g, &ps[0], &Fold),
        Err(ActionError::HandNotActive(Stage::Finished))
    );

    g.stage = Stage::Showdown;
    assert_eq!(
        check_action(&g, &ps[0], &Check),
        Err(ActionError::NoBettingRound(Stage::Showdown))
    );
}

#[test]
fn action_out_of_turn_is_rejected() {
    let (g, ps) = started(&[1000, 1000]);
    assert_eq!(
        reject(&g, &ps, 1, Check),
        ActionError::NotPlayersTurn {
            expected: 0,
            actual: 1
        }
    );
}

#[test]
fn unknown_seat_is_rejected() {
    let (g, ps) = started(&[1000, 1000]);
    assert_eq!(reject(&g, &ps, 9, Fold), ActionError::InvalidSeat(9));
    assert_eq!(reject(&g, &ps, 4, Fold), ActionError::EmptySeat(4));
}

#[test]
fn folded_player_never_acts_again() {
    let (g, ps) = started(&[1000, 1000]);
    let out = act(&g, &ps, 0, Fold);

    assert!(seat(&out.players, 0).folded);
    assert!(out.round_complete);
    assert!(out.showdown_ready, "Остался один игрок – сразу шоудаун");
    assert_eq!(out.game.pot, Chips(30), "Fold не двигает фишки");

    let v = validate_action(&out.game, seat(&out.players, 0), &Check);
    assert!(!v.valid);
    assert_eq!(
        check_action(&out.game, seat(&out.players, 0), &Fold),
        Err(ActionError::AlreadyFolded)
    );
}

//
// ====================== CHECK / CALL ======================
//

#[test]
fn check_requires_matched_bet() {
    let (g, ps) = started(&[1000, 1000]);
    assert_eq!(
        reject(&g, &ps, 0, Check),
        ActionError::CannotCheck { to_call: Chips(10) }
    );

    let (g, ps) = heads_up_on_flop();
    let out = act(&g, &ps, g.current_player_index, Check);
    assert_eq!(out.chips_moved, Chips::ZERO);
    assert!(!out.round_complete, "Второй игрок ещё не ходил");
}

#[test]
fn call_needs_outstanding_bet_within_stack() {
    let (g, ps) = heads_up_on_flop();
    assert_eq!(reject(&g, &ps, g.current_player_index, Call), ActionError::NothingToCall);

    // Короткий стек не может сделать полный call – только all-in.
    let (g, ps) = started(&[15, 1000]);
    assert_eq!(seat(&ps, 0).chip_stack, Chips(5));
    assert_eq!(
        reject(&g, &ps, 0, Call),
        ActionError::NotEnoughChips {
            required: Chips(10),
            available: Chips(5)
        }
    );
}

//
// ====================== BET ======================
//

#[test]
fn bet_rules() {
    let (g, ps) = heads_up_on_flop();
    assert_eq!(g.stage, Stage::Flop);
    assert_eq!(g.current_bet, Chips::ZERO);
    assert_eq!(g.current_player_index, 1, "Постфлоп первым ходит игрок слева от дилера");

    assert_eq!(
        reject(&g, &ps, 1, Bet(Chips(19))),
        ActionError::BetTooSmall {
            amount: Chips(19),
            minimum: Chips(20)
        }
    );
    assert_eq!(
        reject(&g, &ps, 1, Bet(Chips(981))),
        ActionError::NotEnoughChips {
            required: Chips(981),
            available: Chips(980)
        }
    );

    let out = act(&g, &ps, 1, Bet(Chips(50)));
    assert_eq!(out.game.current_bet, Chips(50));
    assert_eq!(out.game.pot, Chips(90));
    assert_eq!(seat(&out.players, 1).chip_stack, Chips(930));
    assert_eq!(seat(&out.players, 1).total_bet, Chips(70));
    assert_eq!(out.game.current_player_index, 0);

    // Второй bet на той же улице – уже raise.
    assert_eq!(
        reject(&out.game, &out.players, 0, Bet(Chips(100))),
        ActionError::BetAlreadyOpen(Chips(50))
    );
}

//
// ====================== RAISE ======================
//

#[test]
fn raise_rules() {
    let (g, ps) = started(&[1000, 1000]);

    assert_eq!(
        reject(&g, &ps, 0, Raise(Chips(30))),
        ActionError::RaiseTooSmall {
            amount: Chips(30),
            minimum: Chips(40)
        }
    );
    assert_eq!(
        reject(&g, &ps, 0, Raise(Chips(995))),
        ActionError::NotEnoughChips {
            required: Chips(995),
            available: Chips(990)
        }
    );

    let out = act(&g, &ps, 0, Raise(Chips(40)));
    assert_eq!(out.chips_moved, Chips(30));
    assert_eq!(out.game.current_bet, Chips(40));
    assert_eq!(out.game.pot, Chips(60));
    assert_eq!(seat(&out.players, 0).current_round_bet, Chips(40));
    assert_eq!(seat(&out.players, 0).chip_stack, Chips(960));
    assert!(!out.game.has_acted(1), "После рейза BB обязан ходить снова");
    assert!(!out.round_complete);
    assert_eq!(out.game.current_player_index, 1);

    let out = act(&out.game, &out.players, 1, Call);
    assert!(out.round_complete);
    assert_eq!(out.game.pot, Chips(80));
}

#[test]
fn raise_without_bet_is_rejected() {
    let (g, ps) = heads_up_on_flop();
    assert_eq!(reject(&g, &ps, 1, Raise(Chips(100))), ActionError::NoBetToRaise);
}

//
// ====================== ALL-IN ======================
//

#[test]
fn all_in_commits_whole_stack_and_opens_new_level() {
    let (g, ps) = started(&[100, 1000]);

    let out = act(&g, &ps, 0, AllIn);
    let p0 = seat(&out.players, 0);
    assert_eq!(out.chips_moved, Chips(90));
    assert!(p0.all_in);
    assert!(p0.chip_stack.is_zero());
    assert_eq!(p0.total_bet, Chips(100));
    assert_eq!(out.game.current_bet, Chips(100));
    assert_eq!(out.game.current_player_index, 1);
    assert!(!out.round_complete);
    assert!(!out.showdown_ready);

    let out = act(&out.game, &out.players, 1, Call);
    assert!(out.round_complete, "Олл-ин игрок не обязан уравнивать");
    assert!(out.showdown_ready, "Торговаться больше некому");
    assert_eq!(out.game.pot, Chips(200));
}

#[test]
fn short_all_in_does_not_change_current_bet() {
    let (g, ps) = started(&[15, 1000]);
    let out = act(&g, &ps, 0, AllIn);

    assert_eq!(seat(&out.players, 0).current_round_bet, Chips(15));
    assert_eq!(out.game.current_bet, Chips(20));
    assert!(out.round_complete, "BB уже уравнял, SB в олл-ине");
    assert!(out.showdown_ready);
}

#[test]
fn all_in_player_cannot_act() {
    let (g, mut ps) = started(&[1000, 1000]);
    ps[0].chip_stack = Chips::ZERO;
    ps[0].all_in = true;

    assert_eq!(check_action(&g, &ps[0], &AllIn), Err(ActionError::AlreadyAllIn));
}

//
// ====================== ROUND COMPLETION / TURN ORDER ======================
//

/// Флоп, три игрока, текущая ставка 50.
fn three_way_flop(p2_bet: u64, p2_acted: bool, p2_all_in: bool) -> (Game, Vec<PlayerState>) {
    let (mut g, mut ps) = table(&[1000, 1000, 1000]);
    g.stage = Stage::Flop;
    g.current_bet = Chips(50);
    for p in ps.iter_mut().take(2) {
        p.current_round_bet = Chips(50);
        g.acted[p.seat as usize] = true;
    }
    ps[2].current_round_bet = Chips(p2_bet);
    ps[2].all_in = p2_all_in;
    g.acted[2] = p2_acted;
    (g, ps)
}

#[test]
fn round_incomplete_while_eligible_player_unmatched() {
    let (g, ps) = three_way_flop(0, false, false);
    assert!(!is_round_complete(&g, &ps));

    let (g, ps) = three_way_flop(20, true, false);
    assert!(!is_round_complete(&g, &ps), "Ходил, но не уравнял");

    let (g, ps) = three_way_flop(50, false, false);
    assert!(!is_round_complete(&g, &ps), "Уравнял блайндом, но не ходил");

    let (g, ps) = three_way_flop(50, true, false);
    assert!(is_round_complete(&g, &ps));
}

#[test]
fn all_in_players_exempt_from_matching() {
    let (g, ps) = three_way_flop(30, true, true);
    assert!(is_round_complete(&g, &ps));
}

#[test]
fn single_remaining_player_completes_round() {
    let (g, mut ps) = three_way_flop(0, false, false);
    ps[1].folded = true;
    ps[2].folded = true;
    assert!(is_round_complete(&g, &ps));
}

#[test]
fn turn_skips_folded_and_all_in_players() {
    let (mut g, mut ps) = table(&[1000, 1000, 1000, 1000]);
    g.stage = Stage::Turn;
    ps[1].folded = true;
    ps[2].all_in = true;

    g.current_player_index = 0;
    assert_eq!(next_player_index(&g, &ps), Some(3));

    g.current_player_index = 3;
    assert_eq!(next_player_index(&g, &ps), Some(0), "Очередь идёт по кругу");

    ps[3].folded = true;
    g.current_player_index = 0;
    assert_eq!(next_player_index(&g, &ps), None, "Ходить больше некому");
}

//
// ====================== START HAND / STAGES ======================
//

#[test]
fn three_handed_blinds_follow_dealer() {
    let (g, ps) = started(&[1000, 1000, 1000]);
    assert_eq!(g.dealer_index, 0);
    assert_eq!(seat(&ps, 1).current_round_bet, Chips(10));
    assert_eq!(seat(&ps, 2).current_round_bet, Chips(20));
    assert_eq!(g.current_player_index, 0, "UTG после BB");

    let (g, _) = started(&[1000, 1000, 1000, 1000]);
    assert_eq!(g.current_player_index, 3);
}

#[test]
fn start_hand_requires_two_players_with_chips() {
    let (g, ps) = table(&[1000]);
    assert_eq!(
        start_hand(&g, &ps, &TableConfig::default()),
        Err(ActionError::NotEnoughPlayers {
            required: 2,
            seated: 1
        })
    );

    let (g, ps) = table(&[1000, 0]);
    assert!(start_hand(&g, &ps, &TableConfig::default()).is_err());

    let (g, ps) = started(&[1000, 1000]);
    assert_eq!(
        start_hand(&g, &ps, &TableConfig::default()),
        Err(ActionError::IllegalTransition { from: Stage::PreFlop })
    );
}

#[test]
fn start_hand_needs_two_players_even_with_unchecked_config() {
    // Конфиг собран руками, validate() не вызывался.
    let cfg = TableConfig {
        min_players_to_start: 1,
        ..TableConfig::default()
    };
    assert!(cfg.validate().is_err());

    let (g, ps) = table(&[1000]);
    assert_eq!(
        start_hand(&g, &ps, &cfg),
        Err(ActionError::NotEnoughPlayers {
            required: 2,
            seated: 1
        })
    );

    let (g, ps) = table(&[1000, 1000]);
    let (g, _) = start_hand(&g, &ps, &cfg).unwrap();
    assert_eq!(g.stage, Stage::PreFlop);
}

#[test]
fn advance_stage_resets_round_and_reveals_board() {
    let (g, ps) = started(&[1000, 1000]);
    let out = act(&g, &ps, 0, Call);
    let (flop, ps) = advance_stage(&out.game, &out.players, &[]).unwrap();

    assert_eq!(flop.stage, Stage::Flop);
    assert_eq!(flop.community_cards_revealed, 3);
    assert_eq!(flop.current_bet, Chips::ZERO);
    assert_eq!(flop.pot, Chips(40), "Банк переносится на следующую улицу");
    assert!(ps.iter().all(|p| p.current_round_bet.is_zero()));
    assert!(ps.iter().all(|p| p.total_bet == Chips(20)));
    assert!(!flop.has_acted(0) && !flop.has_acted(1));

    let (turn, ps) = advance_stage(&flop, &ps, &[]).unwrap();
    let (river, ps) = advance_stage(&turn, &ps, &[]).unwrap();
    let (showdown, ps) = advance_stage(&river, &ps, &[]).unwrap();
    let (finished, _) = advance_stage(&showdown, &ps, &[]).unwrap();
    assert_eq!(turn.community_cards_revealed, 4);
    assert_eq!(river.community_cards_revealed, 5);
    assert_eq!(showdown.stage, Stage::Showdown);
    assert_eq!(finished.stage, Stage::Finished);

    assert_eq!(
        advance_stage(&finished, &ps, &[]),
        Err(ActionError::IllegalTransition { from: Stage::Finished })
    );
}

#[test]
fn advance_from_waiting_is_illegal() {
    let (g, ps) = table(&[1000, 1000]);
    assert_eq!(
        advance_stage(&g, &ps, &[]),
        Err(ActionError::IllegalTransition { from: Stage::Waiting })
    );
}
