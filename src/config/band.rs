//! Score banding thresholds

use serde::{Deserialize, Serialize};

/// Minimum percentages for the upper two result bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    /// Minimum percentage for `ScoreBand::Pass`
    #[serde(default = "default_pass")]
    pub pass: u32,
    /// Minimum percentage for `ScoreBand::Warn`
    #[serde(default = "default_warn")]
    pub warn: u32,
}

fn default_pass() -> u32 {
    80
}

fn default_warn() -> u32 {
    50
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            pass: default_pass(),
            warn: default_warn(),
        }
    }
}
