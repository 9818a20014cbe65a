use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{non_folded, Chips, Game, PlayerId, PlayerState, SeatIndex};
use crate::engine::errors::EngineError;
use crate::engine::pot::distribute_pot;
use crate::engine::side_pots::calculate_pots;
use crate::eval::{evaluate_best_hand, HandResult};

/// Победитель раздачи (или одного из её слоёв банка).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Winner {
    pub seat: SeatIndex,
    pub player_id: PlayerId,
    pub win_amount: Chips,
    /// Рука победителя; `None`, если до шоудауна дело не дошло.
    pub hand: Option<HandResult>,
}

/// Определить победителей и их выигрыш.
///
/// - никого в раздаче – пустой список;
/// - один игрок – забирает весь банк без оценки рук;
/// - иначе каждый слой банка разыгрывается отдельно среди своих участников,
///   выигрыши по слоям суммируются.
///
/// Вклад сфолдивших раскладывается по слоям до их уровней (см. `layers_with_folded_money`).
pub fn determine_winners(game: &Game, players: &[PlayerState]) -> Result<Vec<Winner>, EngineError> {
    let contenders: Vec<&PlayerState> = non_folded(players).collect();

    match contenders.as_slice() {
        [] => return Ok(Vec::new()),
        [only] => {
            debug!("seat {} wins {} uncontested", only.seat, game.pot);
            return Ok(vec![Winner {
                seat: only.seat,
                player_id: only.player_id,
                win_amount: game.pot,
                hand: None,
            }]);
        }
        _ => {}
    }

    let board = game.revealed_board();
    let mut hands: BTreeMap<SeatIndex, HandResult> = BTreeMap::new();
    for p in &contenders {
        let hand = evaluate_best_hand(&p.hole_cards, board)?;
        debug!("seat {} shows {}", p.seat, hand.label);
        hands.insert(p.seat, hand);
    }

    let layers = layers_with_folded_money(game, players);
    let mut payouts: BTreeMap<SeatIndex, Chips> = BTreeMap::new();

    for (amount, eligible) in &layers {
        let best = eligible.iter().filter_map(|s| hands.get(s).map(|h| h.value)).max();
        let Some(best) = best else { continue };

        let layer_winners: Vec<SeatIndex> = eligible
            .iter()
            .copied()
            .filter(|s| hands.get(s).map(|h| h.value) == Some(best))
            .collect();

        for (seat, share) in distribute_pot(*amount, &layer_winners)? {
            *payouts.entry(seat).or_insert(Chips::ZERO) += share;
        }
    }

    let winners: Vec<Winner> = payouts
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .filter_map(|(seat, win_amount)| {
            let player = contenders.iter().find(|p| p.seat == seat)?;
            Some(Winner {
                seat,
                player_id: player.player_id,
                win_amount,
                hand: hands.get(&seat).cloned(),
            })
        })
        .collect();

    debug!(
        "showdown: {:?}",
        winners.iter().map(|w| (w.seat, w.win_amount)).collect::<Vec<_>>()
    );

    Ok(winners)
}

/// Слои банка с учётом вклада сфолдивших.
///
/// Вклад сфолдившего режется по тем же уровням: в слой с уровнем `cap`
/// попадает `min(total_bet, cap) - prev_cap`. Претендовать на эти фишки
/// сфолдивший не может. Остаток банка сверх всех слоёв (вклад выше
/// старшего уровня или расхождение снапшота) уходит в старший слой.
fn layers_with_folded_money(game: &Game, players: &[PlayerState]) -> Vec<(Chips, Vec<SeatIndex>)> {
    let pots = calculate_pots(players);
    let folded: Vec<Chips> = players.iter().filter(|p| p.folded).map(|p| p.total_bet).collect();

    let mut layers: Vec<(Chips, Vec<SeatIndex>)> = Vec::new();
    let mut prev_cap = Chips::ZERO;
    for layer in pots.layers() {
        let dead: Chips = folded
            .iter()
            .map(|bet| (*bet).min(layer.cap).saturating_sub(prev_cap))
            .sum();
        layers.push((layer.amount + dead, layer.eligible_seats.clone()));
        prev_cap = layer.cap;
    }

    // Все претенденты без вклада: банк целиком делят все оставшиеся.
    if layers.is_empty() {
        let seats = non_folded(players).map(|p| p.seat).collect();
        layers.push((Chips::ZERO, seats));
    }

    let layered: Chips = layers.iter().map(|(amount, _)| *amount).sum();
    let residual = game.pot.saturating_sub(layered);
    if let Some(top) = layers.last_mut() {
        top.0 += residual;
    }
    layers
}
