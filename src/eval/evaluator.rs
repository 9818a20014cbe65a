use log::trace;

use crate::domain::card::{Card, Rank};
use crate::engine::errors::EngineError;

use super::hand_rank::{describe_hand, HandCategory, HandResult, HandValue};
use super::lookup_tables::{detect_straight, rank_to_bit, straight_sequence, RankMask};

/// Оценить лучшую 5-карточную руку из 5–7 карт.
///
/// Для 6–7 карт перебираются все C(n,5) комбинаций (максимум 21),
/// побеждает комбинация с наибольшим `HandValue`.
pub fn evaluate(cards: &[Card]) -> Result<HandResult, EngineError> {
    if cards.len() < 5 {
        return Err(EngineError::InsufficientCards(cards.len()));
    }
    if cards.len() > 7 {
        return Err(EngineError::TooManyCards(cards.len()));
    }
    for (i, card) in cards.iter().enumerate() {
        if cards[i + 1..].contains(card) {
            return Err(EngineError::DuplicateCard(*card));
        }
    }

    let mut best: Option<([Card; 5], HandValue)> = None;
    let mut combo: Vec<Card> = Vec::with_capacity(5);
    for_each_five(cards, 0, &mut combo, &mut |five| {
        let (ordered, value) = evaluate_five(five);
        if best.map_or(true, |(_, b)| value > b) {
            best = Some((ordered, value));
        }
    });

    let (best_five, value) = best.ok_or(EngineError::InsufficientCards(cards.len()))?;
    trace!("evaluated {} cards -> {:?} ({:#x})", cards.len(), value.category(), value.0);

    Ok(HandResult {
        category: value.category(),
        best_five,
        value,
        label: describe_hand(value),
    })
}

/// Главная функция для холдема: карманные + открытые общие карты.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> Result<HandResult, EngineError> {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    evaluate(&all_cards)
}

/// Обход в глубину: вызвать `f` для каждой 5-карточной комбинации.
fn for_each_five<F: FnMut(&[Card; 5])>(cards: &[Card], start: usize, combo: &mut Vec<Card>, f: &mut F) {
    if combo.len() == 5 {
        let five = [combo[0], combo[1], combo[2], combo[3], combo[4]];
        f(&five);
        return;
    }
    let need = 5 - combo.len();
    for i in start..=cards.len().saturating_sub(need) {
        combo.push(cards[i]);
        for_each_five(cards, i + 1, combo, f);
        combo.pop();
    }
}

/// Оценка строго 5-карточной комбинации.
/// Возвращает карты в порядке значимости и значение руки.
fn evaluate_five(cards: &[Card; 5]) -> ([Card; 5], HandValue) {
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);

    let mut rank_counts = [0u8; 15]; // индексы 2..14
    let mut rank_mask: RankMask = 0;
    for card in cards {
        rank_counts[card.value() as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }
    let straight_high = detect_straight(rank_mask);

    // Группы (ранг, количество), сначала по количеству, затем по рангу, по убыванию.
    let mut groups: Vec<(Rank, u8)> = (2u8..=14)
        .rev()
        .filter(|&v| rank_counts[v as usize] > 0)
        .filter_map(|v| Rank::from_value(v).map(|r| (r, rank_counts[v as usize])))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    let pattern: Vec<u8> = groups.iter().map(|g| g.1).collect();
    let group_ranks: Vec<Rank> = groups.iter().map(|g| g.0).collect();

    if let Some(high) = straight_high {
        let category = match (is_flush, high) {
            (true, Rank::Ace) => HandCategory::RoyalFlush,
            (true, _) => HandCategory::StraightFlush,
            (false, _) => HandCategory::Straight,
        };
        // Фулл-хаус и каре на 5 разных рангах невозможны, поэтому стрит можно решать сразу.
        let ordered = order_straight(cards, high);
        return (ordered, HandValue::from_category_and_ranks(category, &[high]));
    }

    let category = match pattern.as_slice() {
        [4, 1] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        _ if is_flush => HandCategory::Flush,
        [3, 1, 1] => HandCategory::ThreeOfAKind,
        [2, 2, 1] => HandCategory::TwoPair,
        [2, 1, 1, 1] => HandCategory::Pair,
        _ => HandCategory::HighCard,
    };

    (order_by_groups(cards, &group_ranks), HandValue::from_category_and_ranks(category, &group_ranks))
}

/// Карты стрита от старшей к младшей (в колесе туз последний).
fn order_straight(cards: &[Card; 5], high: Rank) -> [Card; 5] {
    let mut ordered = *cards;
    for (slot, rank) in ordered.iter_mut().zip(straight_sequence(high)) {
        if let Some(card) = cards.iter().find(|c| c.rank == rank) {
            *slot = *card;
        }
    }
    ordered
}

/// Карты в порядке групп: сначала каре/сет/пары, затем кикеры.
fn order_by_groups(cards: &[Card; 5], group_ranks: &[Rank]) -> [Card; 5] {
    let mut ordered = *cards;
    let mut i = 0;
    for rank in group_ranks {
        for card in cards.iter().filter(|c| c.rank == *rank) {
            ordered[i] = *card;
            i += 1;
        }
    }
    ordered
}
