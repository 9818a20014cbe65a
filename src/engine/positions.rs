use crate::domain::{find_by_seat, Game, PlayerState, SeatIndex};

/// Может ли место делать ход: занято, есть снапшот игрока, не fold и не all-in.
fn is_eligible(game: &Game, players: &[PlayerState], seat: SeatIndex) -> bool {
    if game.is_seat_empty(seat) {
        return false;
    }
    find_by_seat(players, seat).map(|p| p.can_act()).unwrap_or(false)
}

/// Найти следующее место, которое может ходить, по кругу после `start`.
/// С `include_start` само `start` проверяется последним.
pub fn next_eligible_seat(
    game: &Game,
    players: &[PlayerState],
    start: SeatIndex,
    include_start: bool,
) -> Option<SeatIndex> {
    let max = game.seat_count();
    if max == 0 {
        return None;
    }

    let steps = if include_start { max } else { max - 1 };
    (1..=steps)
        .map(|offset| ((start as usize + offset) % max) as SeatIndex)
        .find(|&seat| is_eligible(game, players, seat))
}

/// Кто ходит после текущего игрока. `None` – ходить некому, раунд окончен.
pub fn next_player_index(game: &Game, players: &[PlayerState]) -> Option<SeatIndex> {
    next_eligible_seat(game, players, game.current_player_index, false)
}

/// Следующее занятое место по кругу (для кнопки и блайндов).
pub fn next_occupied_seat(game: &Game, start: SeatIndex) -> Option<SeatIndex> {
    let max = game.seat_count();
    (1..=max)
        .map(|offset| ((start as usize + offset) % max) as SeatIndex)
        .find(|&seat| !game.is_seat_empty(seat))
}

/// Занятые места по кругу начиная со `start` (включительно).
pub fn collect_occupied_seats_from(game: &Game, start: SeatIndex) -> Vec<SeatIndex> {
    let max = game.seat_count();
    (0..max)
        .map(|offset| ((start as usize + offset) % max) as SeatIndex)
        .filter(|&seat| !game.is_seat_empty(seat))
        .collect()
}
