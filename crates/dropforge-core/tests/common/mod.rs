#![allow(dead_code)] // Not every test binary uses every helper

use dropforge_core::models::StatBlock;
use dropforge_core::store::JsonStore;
use tempfile::TempDir;

/// The stat line players usually quote when checking the formula.
pub fn reference_stats() -> StatBlock {
    StatBlock {
        attack: 41991.0,
        crit_chance_pct: 117.52,
        crit_damage_pct: 968.02,
        special_attack: 25620.0,
        back_attack_damage_pct: 86.90,
    }
}

pub fn stats(attack: f64, crit_chance: f64, crit_damage: f64, special: f64, back: f64) -> StatBlock {
    StatBlock {
        attack,
        crit_chance_pct: crit_chance,
        crit_damage_pct: crit_damage,
        special_attack: special,
        back_attack_damage_pct: back,
    }
}

/// A store rooted in a fresh temp dir. Keep the `TempDir` alive for the test.
pub fn temp_store() -> (TempDir, JsonStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = JsonStore::new(dir.path());
    (dir, store)
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} (±{}), got {}",
        expected,
        tolerance,
        actual
    );
}
