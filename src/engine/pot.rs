use crate::domain::chips::Chips;
use crate::domain::SeatIndex;
use crate::engine::errors::EngineError;

/// Разделить `amount` между победителями.
///
/// Каждый получает `amount / n`, остаток раздаётся по одной фишке
/// победителям в порядке возрастания места, начиная с первого.
/// Сумма выплат всегда равна `amount`, разница между долями не больше 1.
pub fn distribute_pot(amount: Chips, winners: &[SeatIndex]) -> Result<Vec<(SeatIndex, Chips)>, EngineError> {
    if winners.is_empty() {
        return Err(EngineError::NoWinners);
    }

    let mut seats = winners.to_vec();
    seats.sort_unstable();
    if let Some(w) = seats.windows(2).find(|w| w[0] == w[1]) {
        return Err(EngineError::DuplicateWinner(w[0]));
    }

    let n = seats.len() as u64;
    let share = amount.0 / n;
    let remainder = amount.0 % n;

    Ok(seats
        .into_iter()
        .enumerate()
        .map(|(i, seat)| {
            let extra = if (i as u64) < remainder { 1 } else { 0 };
            (seat, Chips(share + extra))
        })
        .collect())
}
