//! RngSeed – seed для тестового перемешивания, собранный из входов раздачи.
//!
//! new = H(domain || base || game_id || hand_number || entropy)
//!
//! Это воспроизводимая фикстура, а не честный многосторонний shuffle.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::Deck;
use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Доменное хэш-расширение с контекстом раздачи.
    pub fn derive(&self, game_id: u64, hand_number: u64, entropy: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"POKER_MIRROR_SHUFFLE_V1");
        hasher.update(self.bytes);
        hasher.update(game_id.to_le_bytes());
        hasher.update(hand_number.to_le_bytes());
        hasher.update(entropy);

        let mut out = [0u8; 32];
        out.copy_from_slice(&hasher.finalize());
        Self { bytes: out }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed_bytes(self.bytes)
    }

    /// Перемешанная стандартная колода для этого seed.
    pub fn shuffled_deck(&self) -> Deck {
        let mut deck = Deck::standard_52();
        deck.shuffle(&mut self.to_rng());
        deck
    }
}
