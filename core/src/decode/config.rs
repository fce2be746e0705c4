//! decode/config.rs
//!
//! Resource bounds for a decode.
//!
//! Industry notes:
//! - Length-prefixed formats let a few bytes claim gigabytes; every decode runs with a
//!   payload ceiling so a hostile prefix fails before any allocation.
//! - Nesting is bounded so structural recursion always terminates.
//! - Missing values fall back to conservative defaults, never to "unlimited".

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Largest payload length any single prefix may declare.
    pub max_size: usize,
    /// Largest number of simultaneously open lists.
    pub max_depth: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl StreamConfig {
    pub fn new(max_size: Option<usize>, max_depth: Option<usize>) -> Self {
        Self {
            max_size: max_size.unwrap_or(DEFAULT_MAX_SIZE),
            max_depth: max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
        }
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Load from a JSON document; absent keys take the defaults.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: StreamConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_size == 0 {
            return Err(ConfigError::ZeroLimit { field: "max_size" });
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroLimit { field: "max_depth" });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid stream config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid stream config: {field} must be non-zero")]
    ZeroLimit { field: &'static str },
}
