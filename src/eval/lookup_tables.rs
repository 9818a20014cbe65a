use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Пять подряд идущих рангов, младший – двойка.
const FIVE_IN_A_ROW: RankMask = 0b1_1111;

/// Маска колеса A2345.
pub const WHEEL_MASK: RankMask = mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);

/// Получить битовую маску для одного ранга.
pub const fn rank_to_bit(rank: Rank) -> RankMask {
    1u16 << (rank as u8 - 2)
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        mask |= rank_to_bit(ranks[i]);
        i += 1;
    }
    mask
}

/// Найти стрит в битовой маске рангов.
/// Возвращает старшую карту стрита, если он есть.
///
/// Особый случай: wheel (A2345) → возвращаем Rank::Five.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    // От бродвея (T..A, старшая A = 14) вниз до 6-high.
    for high in (6u8..=14).rev() {
        let window = FIVE_IN_A_ROW << (high - 6);
        if rank_mask & window == window {
            return Rank::from_value(high);
        }
    }
    if rank_mask & WHEEL_MASK == WHEEL_MASK {
        return Some(Rank::Five);
    }
    None
}

/// Порядок рангов стрита от старшей карты; в колесе туз идёт последним.
pub fn straight_sequence(high: Rank) -> [Rank; 5] {
    if high == Rank::Five {
        return [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace];
    }
    let h = high.value();
    let mut seq = [high; 5];
    for (i, slot) in seq.iter_mut().enumerate() {
        *slot = Rank::from_value(h - i as u8).unwrap_or(Rank::Two);
    }
    seq
}
