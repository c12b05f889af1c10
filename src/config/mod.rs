mod load;

pub use load::load_config;

use crate::sim::catalog::StandKind;
use crate::sim::player::{DEFAULT_BALANCE, DEFAULT_PLAYER_NAME, DEFAULT_TIER};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE: &str = "idle-stands.ron";
pub const CONFIG_ENV: &str = "IDLE_STANDS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_name: String,
    pub initial_balance: f64,
    pub tier: u32,
    /// Stands handed to the player for free at the start of the session.
    pub starting_stands: Vec<StandKind>,
    /// Tracing output goes here; the terminal is owned by the UI.
    pub log_file: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            initial_balance: DEFAULT_BALANCE,
            tier: DEFAULT_TIER,
            starting_stands: Vec::new(),
            log_file: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_name.trim().is_empty() {
            return Err(ConfigError::EmptyPlayerName);
        }
        if !self.initial_balance.is_finite() || self.initial_balance < 0.0 {
            return Err(ConfigError::InvalidBalance(self.initial_balance));
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("player name must not be empty")]
    EmptyPlayerName,
    #[error("initial balance must be a non-negative number (got {0})")]
    InvalidBalance(f64),
}
