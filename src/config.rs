//! Configuration for the differential checker
//!
//! Centralized configuration with sensible defaults.

use serde::{Deserialize, Serialize};

use crate::error::{BigMapError, Result};

/// Workload shape for one differential-check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    // -------------------------------------------------------------------------
    // Run Shape
    // -------------------------------------------------------------------------
    /// Number of rounds; each round starts from an empty map
    pub rounds: usize,

    /// Random insert/erase/lookup operations per round
    pub ops_per_round: usize,

    /// Random range scans compared at the end of each round
    pub scans_per_round: usize,

    // -------------------------------------------------------------------------
    // Key Space
    // -------------------------------------------------------------------------
    /// Shard indices are drawn from `0..shard_span`.
    /// Values above the slot count exercise modulo routing.
    pub shard_span: u64,

    /// Keys are drawn from `0..key_space`
    pub key_space: u64,

    /// Percentage of mutating operations that are erases
    pub erase_ratio_percent: u8,

    // -------------------------------------------------------------------------
    // Reproducibility
    // -------------------------------------------------------------------------
    /// Seed for the workload generator
    pub seed: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            rounds: 20,
            ops_per_round: 500,
            scans_per_round: 20,
            shard_span: 16,
            key_space: 64,
            erase_ratio_percent: 25,
            seed: 0x5EED,
        }
    }
}

impl CheckConfig {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Larger preset: more operations, wider keys, shards past the slot count
    pub fn wide() -> Self {
        Self {
            rounds: 30,
            ops_per_round: 5_000,
            scans_per_round: 30,
            shard_span: 48,
            key_space: 1 << 20,
            erase_ratio_percent: 30,
            seed: 0x5EED,
        }
    }

    /// Reject shapes that cannot produce a meaningful run
    pub fn validate(&self) -> Result<()> {
        let counts = [
            ("rounds", self.rounds as u64),
            ("ops_per_round", self.ops_per_round as u64),
            ("scans_per_round", self.scans_per_round as u64),
            ("shard_span", self.shard_span),
            ("key_space", self.key_space),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(BigMapError::Config(format!("{} must be non-zero", name)));
            }
        }

        if self.erase_ratio_percent > 100 {
            return Err(BigMapError::Config(format!(
                "erase_ratio_percent must be at most 100, got {}",
                self.erase_ratio_percent
            )));
        }

        Ok(())
    }
}

/// Builder for CheckConfig
#[derive(Default)]
pub struct ConfigBuilder {
    config: CheckConfig,
}

impl ConfigBuilder {
    /// Start from an existing config instead of the default
    pub fn from_config(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn rounds(mut self, rounds: usize) -> Self {
        self.config.rounds = rounds;
        self
    }

    pub fn ops_per_round(mut self, ops: usize) -> Self {
        self.config.ops_per_round = ops;
        self
    }

    pub fn scans_per_round(mut self, scans: usize) -> Self {
        self.config.scans_per_round = scans;
        self
    }

    /// Set the exclusive upper bound for drawn shard indices
    pub fn shard_span(mut self, span: u64) -> Self {
        self.config.shard_span = span;
        self
    }

    /// Set the exclusive upper bound for drawn keys
    pub fn key_space(mut self, space: u64) -> Self {
        self.config.key_space = space;
        self
    }

    pub fn erase_ratio_percent(mut self, percent: u8) -> Self {
        self.config.erase_ratio_percent = percent;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate and return the config
    pub fn build(self) -> Result<CheckConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
