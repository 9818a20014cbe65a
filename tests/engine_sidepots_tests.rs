//! Side pot / distribution tests.
//!
//! Здесь мы проверяем:
//! - слои банка по суммарным ставкам (2, 3, 4 игрока, fold);
//! - сумма слоёв == сумме вкладов не сфолдивших;
//! - деление банка с остатком.

use poker_mirror::domain::{Chips, PlayerState, SeatIndex};
use poker_mirror::engine::{calculate_pots, distribute_pot, needs_side_pots, EngineError, SidePot};

/// Утилита: игроки с заданными (seat, total_bet), никто не сфолдил.
fn with_bets(pairs: &[(SeatIndex, u64)]) -> Vec<PlayerState> {
    pairs
        .iter()
        .map(|&(seat, bet)| {
            let mut p = PlayerState::new(seat, seat as u64 + 1, Chips::ZERO);
            p.total_bet = Chips(bet);
            p.all_in = true;
            p
        })
        .collect()
}

/// Утилита: достать (amount, eligible_seats) из SidePot.
fn pot_info(p: &SidePot) -> (u64, Vec<SeatIndex>) {
    (p.amount.0, p.eligible_seats.clone())
}

//
// ====================== SCENARIO B ======================
//

#[test]
fn three_all_in_players_produce_three_layers() {
    let players = with_bets(&[(0, 50), (1, 150), (2, 300)]);
    let pots = calculate_pots(&players);

    let main = pots.main_pot.as_ref().expect("main pot");
    assert_eq!(pot_info(main), (150, vec![0, 1, 2]));
    assert_eq!(main.cap, Chips(50));

    assert_eq!(pots.side_pots.len(), 2);
    assert_eq!(pot_info(&pots.side_pots[0]), (200, vec![1, 2]));
    assert_eq!(pot_info(&pots.side_pots[1]), (150, vec![2]));
    assert_eq!(pots.side_pots[1].cap, Chips(300));

    assert_eq!(pots.total_pot, Chips(500));
}

#[test]
fn equal_contributions_make_single_pot() {
    let players = with_bets(&[(0, 100), (1, 100)]);
    let pots = calculate_pots(&players);

    assert_eq!(pot_info(pots.main_pot.as_ref().unwrap()), (200, vec![0, 1]));
    assert!(pots.side_pots.is_empty());
    assert!(!needs_side_pots(&players));
}

#[test]
fn four_players_two_levels() {
    // Порядок во входе не важен.
    let players = with_bets(&[(3, 300), (0, 100), (2, 300), (1, 100)]);
    let pots = calculate_pots(&players);

    assert_eq!(pot_info(pots.main_pot.as_ref().unwrap()), (400, vec![0, 1, 2, 3]));
    assert_eq!(pots.side_pots.len(), 1);
    assert_eq!(pot_info(&pots.side_pots[0]), (400, vec![2, 3]));
    assert_eq!(pots.total_pot, Chips(800));
}

#[test]
fn folded_players_are_excluded() {
    let mut players = with_bets(&[(0, 50), (1, 200), (2, 200), (3, 500)]);
    players[3].folded = true;

    let pots = calculate_pots(&players);
    assert_eq!(pot_info(pots.main_pot.as_ref().unwrap()), (150, vec![0, 1, 2]));
    assert_eq!(pot_info(&pots.side_pots[0]), (300, vec![1, 2]));
    assert!(pots.layers().all(|p| !p.eligible_seats.contains(&3)));
    assert_eq!(pots.total_pot, Chips(450));
}

#[test]
fn layers_sum_to_non_folded_contributions() {
    let cases: &[&[(SeatIndex, u64)]] = &[
        &[(0, 10)],
        &[(0, 10), (1, 10), (2, 10)],
        &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)],
        &[(0, 999), (1, 1), (2, 500), (3, 500)],
        &[(0, 0), (1, 40), (2, 40)],
    ];

    for pairs in cases {
        let players = with_bets(pairs);
        let pots = calculate_pots(&players);
        let contributed: u64 = pairs.iter().map(|&(_, b)| b).sum();
        let layered: u64 = pots.layers().map(|p| p.amount.0).sum();

        assert_eq!(layered, contributed, "Слои {pairs:?}");
        assert_eq!(pots.total_pot.0, contributed);
        assert!(pots.layers().all(|p| !p.amount.is_zero()), "Нулевых слоёв быть не должно");
    }
}

#[test]
fn no_players_in_hand_yields_empty_distribution() {
    let mut players = with_bets(&[(0, 100), (1, 200)]);
    players.iter_mut().for_each(|p| p.folded = true);

    let pots = calculate_pots(&players);
    assert!(pots.main_pot.is_none());
    assert!(pots.side_pots.is_empty());
    assert_eq!(pots.total_pot, Chips::ZERO);
    assert_eq!(pots.main_amount(), Chips::ZERO);

    assert_eq!(calculate_pots(&[]).total_pot, Chips::ZERO);
}

#[test]
fn needs_side_pots_only_for_unequal_contenders() {
    assert!(needs_side_pots(&with_bets(&[(0, 50), (1, 150)])));
    assert!(!needs_side_pots(&with_bets(&[(0, 50)])));

    let mut players = with_bets(&[(0, 50), (1, 150), (2, 150)]);
    players[0].folded = true;
    assert!(!needs_side_pots(&players), "Сфолдивший не в счёт");
}

//
// ====================== DISTRIBUTION (SCENARIO C) ======================
//

#[test]
fn odd_chip_goes_to_lowest_seat() {
    let shares = distribute_pot(Chips(1001), &[0, 1]).unwrap();
    assert_eq!(shares, vec![(0, Chips(501)), (1, Chips(500))]);

    // Порядок победителей во входе не меняет результат.
    let shares = distribute_pot(Chips(1001), &[1, 0]).unwrap();
    assert_eq!(shares, vec![(0, Chips(501)), (1, Chips(500))]);
}

#[test]
fn distribution_is_exact_and_even() {
    let winner_sets: &[&[SeatIndex]] = &[&[4], &[0, 1], &[2, 5, 3], &[0, 1, 2, 3, 4, 5, 6]];
    for amount in [0u64, 1, 2, 7, 100, 1001, 99_999] {
        for winners in winner_sets {
            let shares = distribute_pot(Chips(amount), winners).unwrap();
            let total: u64 = shares.iter().map(|(_, c)| c.0).sum();
            let max = shares.iter().map(|(_, c)| c.0).max().unwrap();
            let min = shares.iter().map(|(_, c)| c.0).min().unwrap();

            assert_eq!(total, amount);
            assert!(max - min <= 1, "Разброс долей не больше 1");
            assert_eq!(shares.len(), winners.len());
        }
    }
}

#[test]
fn remainder_units_go_in_seat_order() {
    let shares = distribute_pot(Chips(11), &[5, 2, 3]).unwrap();
    assert_eq!(shares, vec![(2, Chips(4)), (3, Chips(4)), (5, Chips(3))]);
}

#[test]
fn distribution_without_winners_is_usage_error() {
    assert_eq!(distribute_pot(Chips(100), &[]), Err(EngineError::NoWinners));
    assert_eq!(
        distribute_pot(Chips(100), &[1, 1]),
        Err(EngineError::DuplicateWinner(1))
    );
}
