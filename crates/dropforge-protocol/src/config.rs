use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub store: StoreParams,
    #[command(flatten)]
    pub weights: ScoreWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreParams {
    /// Directory holding the JSON record files
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}

impl Config {
    /// Effective weights: the file at `weights_file` when given, with any
    /// weight flag typed on the command line applied on top.
    pub fn resolve_weights(
        &self,
        weights_file: Option<&Path>,
        matches: &ArgMatches,
    ) -> Result<ScoreWeights, String> {
        let weights = match weights_file {
            Some(path) => {
                let mut weights = ScoreWeights::load_from_file(path)?;
                weights.merge_from_cli(&self.weights, matches);
                weights
            }
            None => self.weights,
        };

        if !weights.is_finite() {
            return Err("Weights must be finite numbers".to_string());
        }
        Ok(weights)
    }
}

impl Default for StoreParams {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

/// Tunable coefficients of the attack score.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreWeights {
    /// Fraction of special attack folded into effective attack
    #[arg(long, default_value_t = 0.25)]
    pub special_attack_to_attack: f64,
    /// Scaling of the back-attack percentage bonus
    #[arg(long, default_value_t = 1.0)]
    pub back_attack_weight: f64,
    /// Scaling of the expected critical damage contribution
    #[arg(long, default_value_t = 1.0)]
    pub crit_weight: f64,
    /// Upper clamp on crit chance, in percent
    #[arg(long, default_value_t = 120.0)]
    pub crit_chance_cap_pct: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            special_attack_to_attack: 0.25,
            back_attack_weight: 1.0,
            crit_weight: 1.0,
            crit_chance_cap_pct: 120.0,
        }
    }
}

impl ScoreWeights {
    pub fn with_crit_cap(self, crit_chance_cap_pct: f64) -> Self {
        Self {
            crit_chance_cap_pct,
            ..self
        }
    }

    pub fn is_finite(&self) -> bool {
        self.special_attack_to_attack.is_finite()
            && self.back_attack_weight.is_finite()
            && self.crit_weight.is_finite()
            && self.crit_chance_cap_pct.is_finite()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read weights file: {}", e))?;

        let weights: Self = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse weights JSON: {}", e))?;

        if !weights.is_finite() {
            return Err("Weights must be finite numbers".to_string());
        }
        Ok(weights)
    }

    pub fn merge_from_cli(&mut self, cli_weights: &ScoreWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(special_attack_to_attack);
        update_if_present!(back_attack_weight);
        update_if_present!(crit_weight);
        update_if_present!(crit_chance_cap_pct);
    }
}
