use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{chips::Chips, non_folded, PlayerState, SeatIndex};

/// Слой банка: часть фишек, за которую борются только некоторые игроки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    /// Уровень суммарной ставки, до которого собран этот слой.
    pub cap: Chips,
    pub eligible_seats: Vec<SeatIndex>,
}

/// Структура банка: основной пот + сайд-поты от младших к старшим.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotDistribution {
    pub main_pot: Option<SidePot>,
    pub side_pots: Vec<SidePot>,
    pub total_pot: Chips,
}

impl PotDistribution {
    /// Все слои по порядку: сначала основной пот.
    pub fn layers(&self) -> impl Iterator<Item = &SidePot> {
        self.main_pot.iter().chain(self.side_pots.iter())
    }

    pub fn main_amount(&self) -> Chips {
        self.main_pot.as_ref().map(|p| p.amount).unwrap_or(Chips::ZERO)
    }
}

/// Посчитать основной пот и сайд-поты по суммарным ставкам за раздачу.
///
/// Учитываются только не сфолдившие игроки. Для каждого нового уровня ставки
/// слой = (уровень − предыдущий уровень) × число игроков на этом уровне и выше.
pub fn calculate_pots(players: &[PlayerState]) -> PotDistribution {
    let mut entries: Vec<(SeatIndex, Chips)> = non_folded(players).map(|p| (p.seat, p.total_bet)).collect();

    if entries.is_empty() {
        return PotDistribution::default();
    }

    // Сортируем по размеру вклада (возрастание), при равенстве – по месту.
    entries.sort_by_key(|&(seat, c)| (c, seat));

    let mut layers = Vec::new();
    let mut prev_level = Chips::ZERO;

    for (i, &(_, level)) in entries.iter().enumerate() {
        if level <= prev_level {
            continue;
        }
        // Все игроки начиная с i внесли не меньше level.
        let mut eligible: Vec<SeatIndex> = entries[i..].iter().map(|&(seat, _)| seat).collect();
        eligible.sort_unstable();

        layers.push(SidePot {
            amount: (level - prev_level).times(eligible.len()),
            cap: level,
            eligible_seats: eligible,
        });
        prev_level = level;
    }

    let total_pot: Chips = layers.iter().map(|p| p.amount).sum();
    let mut layers = layers.into_iter();
    let main_pot = layers.next();
    let side_pots: Vec<SidePot> = layers.collect();

    debug!(
        "pots: main {:?}, {} side pot(s), total {}",
        main_pot.as_ref().map(|p| p.amount),
        side_pots.len(),
        total_pot
    );

    PotDistribution {
        main_pot,
        side_pots,
        total_pot,
    }
}

/// Нужны ли сайд-поты: минимум два игрока в раздаче и их вклады различаются.
pub fn needs_side_pots(players: &[PlayerState]) -> bool {
    let bets: Vec<Chips> = non_folded(players).map(|p| p.total_bet).collect();
    bets.len() >= 2 && bets.iter().any(|b| *b != bets[0])
}
