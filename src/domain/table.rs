use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::errors::EngineError;

/// Верхняя граница мест за одним столом.
pub const MAX_SEATS_LIMIT: u8 = 10;

/// Конфиг стола: сколько мест, блайнды, минимум игроков для старта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Максимальное количество мест за столом (2–10).
    pub max_seats: u8,
    /// Сколько занятых мест нужно для Waiting -> PreFlop.
    pub min_players_to_start: u8,
    pub stakes: TableStakes,
}

/// Стейки стола (SB/BB).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableStakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl TableStakes {
    pub fn new(sb: Chips, bb: Chips) -> Self {
        Self {
            small_blind: sb,
            big_blind: bb,
        }
    }
}

impl Default for TableStakes {
    fn default() -> Self {
        Self::new(Chips(10), Chips(20))
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_seats: 6,
            min_players_to_start: 2,
            stakes: TableStakes::default(),
        }
    }
}

impl TableConfig {
    pub fn new(max_seats: u8, stakes: TableStakes) -> Self {
        Self {
            max_seats,
            stakes,
            ..Self::default()
        }
    }

    /// Загрузить конфиг из JSON; отсутствующие поля берутся из `Default`.
    pub fn from_json_str(s: &str) -> Result<Self, EngineError> {
        let cfg: TableConfig =
            serde_json::from_str(s).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !(2..=MAX_SEATS_LIMIT).contains(&self.max_seats) {
            return Err(EngineError::InvalidConfig(format!(
                "max_seats must be in 2..={MAX_SEATS_LIMIT}, got {}",
                self.max_seats
            )));
        }
        if self.min_players_to_start < 2 || self.min_players_to_start > self.max_seats {
            return Err(EngineError::InvalidConfig(format!(
                "min_players_to_start must be in 2..={}, got {}",
                self.max_seats, self.min_players_to_start
            )));
        }
        if self.stakes.small_blind.is_zero() || self.stakes.big_blind.is_zero() {
            return Err(EngineError::InvalidConfig("blinds must be positive".into()));
        }
        if self.stakes.small_blind > self.stakes.big_blind {
            return Err(EngineError::InvalidConfig(
                "small blind must not exceed big blind".into(),
            ));
        }
        Ok(())
    }
}
