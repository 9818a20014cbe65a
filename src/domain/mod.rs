//! Доменная модель: карты, колода, фишки, снапшоты игры и игроков, конфиг стола.

pub mod card;
pub mod chips;
pub mod deck;
pub mod game;
pub mod player;
pub mod table;

/// Идентификатор игрока (ключ аккаунта на леджере сводится к u64 на стороне клиента).
pub type PlayerId = u64;

/// Индекс места за столом (0..max_seats-1).
pub type SeatIndex = u8;

pub use card::*;
pub use chips::*;
pub use deck::*;
pub use game::*;
pub use player::*;
pub use table::*;
