use crate::config::ScoreWeights;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One of the independently stored rank tables.
///
/// Cohorts differ only in the crit chance cap applied when scoring.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Cohort {
    #[default]
    #[strum(to_string = "120", serialize = "cap120")]
    #[serde(rename = "120")]
    Cap120,
    #[strum(to_string = "100", serialize = "cap100")]
    #[serde(rename = "100")]
    Cap100,
}

impl Cohort {
    pub fn crit_cap_pct(&self) -> f64 {
        match self {
            Self::Cap120 => 120.0,
            Self::Cap100 => 100.0,
        }
    }

    pub fn store_file(&self) -> &'static str {
        match self {
            Self::Cap120 => "attackRanks.json",
            Self::Cap100 => "attackRanks100.json",
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            Self::Cap120 => "/api/attack-rank",
            Self::Cap100 => "/api/attack-rank-100",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Cap120 => "Build 120% Crit (cap)",
            Self::Cap100 => "Build 100% Crit (cap)",
        }
    }

    /// `base` with the crit cap replaced by this cohort's cap.
    pub fn weights(&self, base: &ScoreWeights) -> ScoreWeights {
        base.with_crit_cap(self.crit_cap_pct())
    }
}
