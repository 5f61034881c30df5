//! Differential checker
//!
//! Applies the same random operations to a `BigMap` and a `ReferenceModel`
//! and fails on the first disagreement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::compact::Int40;
use crate::config::CheckConfig;
use crate::error::{BigMapError, Result};
use crate::map::BigMap;

use super::model::ReferenceModel;

/// Slot count of the map under test
pub const CHECK_SLOTS: usize = 16;

type MapUnderTest = BigMap<CHECK_SLOTS, Int40, u64>;

/// Counters for a single round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub inserts: usize,
    pub erases: usize,
    pub lookups: usize,
    pub seeks: usize,
    pub scans: usize,
    /// Entries left in the map when the round ended
    pub final_size: usize,
}

/// Totals for a full run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub rounds: usize,
    pub operations: usize,
    pub scans: usize,
    /// Entries in the map after the last round
    pub final_size: usize,
}

/// Drives randomized rounds against the map and the reference model
pub struct Checker {
    config: CheckConfig,
    rng: StdRng,
    rounds_run: usize,
}

impl Checker {
    /// Validate `config` and seed the workload generator
    pub fn new(config: CheckConfig) -> Result<Self> {
        config.validate()?;

        let key_limit = Int40::mask();
        if config.key_space - 1 > key_limit {
            return Err(BigMapError::Config(format!(
                "key_space {} exceeds the {}-byte key width",
                config.key_space,
                Int40::WIDTH
            )));
        }

        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            rng,
            rounds_run: 0,
        })
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Rounds completed so far
    pub fn rounds_run(&self) -> usize {
        self.rounds_run
    }

    /// Run every configured round
    pub fn run(&mut self) -> Result<CheckReport> {
        let mut report = CheckReport::default();
        while self.rounds_run < self.config.rounds {
            let stats = self.run_round()?;
            report.rounds += 1;
            report.operations += stats.inserts + stats.erases + stats.lookups + stats.seeks;
            report.scans += stats.scans;
            report.final_size = stats.final_size;
        }
        Ok(report)
    }

    /// One round: fresh map, random operations, then full comparison
    pub fn run_round(&mut self) -> Result<RoundStats> {
        let round = self.rounds_run;
        let mut map = MapUnderTest::new();
        let mut model = ReferenceModel::new(CHECK_SLOTS);
        let mut stats = RoundStats::default();

        for op in 0..self.config.ops_per_round {
            let shard = self.rng.gen_range(0..self.config.shard_span);
            let key = self.rng.gen_range(0..self.config.key_space);
            let compact = Int40::from_u64(key);

            match self.rng.gen_range(0..4u8) {
                0 | 1 => {
                    if self.rng.gen_range(0..100u8) < self.config.erase_ratio_percent {
                        stats.erases += 1;
                        let got = map.erase(shard, &compact);
                        let want = model.erase(shard, key);
                        if got != want {
                            return Err(divergence(
                                round,
                                op,
                                format!("erase({}, {}) -> {:?}, expected {:?}", shard, key, got, want),
                            ));
                        }
                    } else {
                        stats.inserts += 1;
                        let value = self.rng.gen::<u64>();
                        let got = map.insert(shard, compact, value);
                        let want = model.insert(shard, key, value);
                        if got != want {
                            return Err(divergence(
                                round,
                                op,
                                format!("insert({}, {}) added={}, expected {}", shard, key, got, want),
                            ));
                        }
                    }
                }
                2 => {
                    stats.lookups += 1;
                    let got = map.get(shard, &compact).copied();
                    let want = model.get(shard, key);
                    if got != want {
                        return Err(divergence(
                            round,
                            op,
                            format!("get({}, {}) -> {:?}, expected {:?}", shard, key, got, want),
                        ));
                    }
                }
                _ => {
                    stats.seeks += 1;
                    let got = map
                        .seek(shard, &compact)
                        .map(|cursor| (cursor.key().to_u64(), *cursor.value()));
                    let want = model.seek(shard, key);
                    if got != want {
                        return Err(divergence(
                            round,
                            op,
                            format!("seek({}, {}) -> {:?}, expected {:?}", shard, key, got, want),
                        ));
                    }
                }
            }
        }

        if map.size() != model.len() {
            return Err(divergence(
                round,
                self.config.ops_per_round,
                format!("size() = {}, expected {}", map.size(), model.len()),
            ));
        }

        let traversal = collect(map.iter());
        if traversal != model.all() {
            return Err(divergence(
                round,
                self.config.ops_per_round,
                "full traversal differs from reference".to_string(),
            ));
        }

        for _ in 0..self.config.scans_per_round {
            self.compare_scan(round, &map, &model)?;
            stats.scans += 1;
        }

        stats.final_size = map.size();
        self.rounds_run += 1;

        tracing::debug!(
            round,
            inserts = stats.inserts,
            erases = stats.erases,
            scans = stats.scans,
            size = stats.final_size,
            allocated_slots = map.allocated_slots(),
            "round passed"
        );

        Ok(stats)
    }

    /// Compare one random range scan, bounds allowed past the last slot
    fn compare_scan(
        &mut self,
        round: usize,
        map: &MapUnderTest,
        model: &ReferenceModel,
    ) -> Result<()> {
        let slot_limit = CHECK_SLOTS as u64 + 2;
        let start_shard = self.rng.gen_range(0..slot_limit);
        let end_shard = self.rng.gen_range(0..slot_limit);
        let start_key = self.rng.gen_range(0..self.config.key_space);
        let end_key = self.rng.gen_range(0..self.config.key_space);

        let got = collect(map.get_iterator(
            start_shard,
            &Int40::from_u64(start_key),
            end_shard,
            Int40::from_u64(end_key),
        ));
        let want = model.scan((start_shard, start_key), (end_shard, end_key));

        if got != want {
            return Err(divergence(
                round,
                self.config.ops_per_round,
                format!(
                    "scan [({}, {}), ({}, {})) yielded {} entries, expected {}",
                    start_shard,
                    start_key,
                    end_shard,
                    end_key,
                    got.len(),
                    want.len()
                ),
            ));
        }
        Ok(())
    }
}

fn collect<'a>(
    iter: impl Iterator<Item = (usize, &'a Int40, &'a u64)>,
) -> Vec<(u64, u64, u64)> {
    iter.map(|(slot, key, value)| (slot as u64, key.to_u64(), *value))
        .collect()
}

fn divergence(round: usize, op: usize, detail: String) -> BigMapError {
    BigMapError::Divergence(format!("round {} op {}: {}", round, op, detail))
}
