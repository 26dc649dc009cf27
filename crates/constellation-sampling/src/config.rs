//! Sampling parameters.

use constellation_topology::GroupId;

use crate::{Result, SamplingError};

/// Parameters shared by the sampling algorithms.
///
/// `groups` is the number of sources for Forest Fire and MDRW, and the
/// number of candidate groups (`0..groups`) for random node sampling.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct SamplingConfig {
    /// Number of groups to produce
    pub groups: usize,
    /// Forest Fire spread probability per candidate neighbor (0.0 - 1.0)
    pub spread_probability: f64,
    /// Base seed for deterministic runs
    pub seed: u64,
    /// Let candidate selection include nodes already claimed by a group
    pub overlap: bool,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            groups: 10,
            spread_probability: 0.7,
            seed: 1,
            overlap: false,
        }
    }
}

impl SamplingConfig {
    pub fn with_groups(mut self, groups: usize) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_spread_probability(mut self, p: f64) -> Self {
        self.spread_probability = p;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_overlap(mut self, overlap: bool) -> Self {
        self.overlap = overlap;
        self
    }

    /// Check the parameters that do not depend on the swarm.
    pub fn validate(&self) -> Result<()> {
        if self.groups == 0 {
            return Err(SamplingError::NoGroups);
        }
        check_probability(self.spread_probability)?;
        Ok(())
    }

    /// Candidate group ids `0..groups`, for random node sampling.
    pub fn candidate_groups(&self) -> Vec<GroupId> {
        (0..self.groups).map(|g| GroupId(g as u32)).collect()
    }
}

/// Reject probabilities outside [0, 1] and NaN.
pub fn check_probability(p: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(SamplingError::InvalidProbability(p))
    }
}
