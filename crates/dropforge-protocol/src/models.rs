use crate::coerce::{finite_or_zero, lenient_f64};
use serde::{Deserialize, Serialize};

// === ATTACK RANK ===

/// The five raw stats an attack score is computed from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub attack: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub crit_chance_pct: f64, // ex: 117.52
    #[serde(default, deserialize_with = "lenient_f64")]
    pub crit_damage_pct: f64, // ex: 968.02
    #[serde(default, deserialize_with = "lenient_f64")]
    pub special_attack: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub back_attack_damage_pct: f64, // ex: 86.90
}

impl StatBlock {
    /// Copy with every non-finite field replaced by zero.
    pub fn normalized(self) -> Self {
        Self {
            attack: finite_or_zero(self.attack),
            crit_chance_pct: finite_or_zero(self.crit_chance_pct),
            crit_damage_pct: finite_or_zero(self.crit_damage_pct),
            special_attack: finite_or_zero(self.special_attack),
            back_attack_damage_pct: finite_or_zero(self.back_attack_damage_pct),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackRankEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    #[serde(default)]
    pub stats: StatBlock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

// === CATALOG ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMap {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub items: Vec<MapItem>,
}

impl GameMap {
    pub fn has_item(&self, item_id: &str) -> bool {
        self.items.iter().any(|i| i.id == item_id)
    }
}

// === RUNS ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFound {
    pub item_id: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub qty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub id: String,
    pub character_id: String,
    pub map_id: String,
    #[serde(default)]
    pub items_found: Vec<ItemFound>,
    #[serde(default)]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stat_block_reads_camel_case() {
        let stats: StatBlock = serde_json::from_value(json!({
            "attack": 41991,
            "critChancePct": 117.52,
            "critDamagePct": 968.02,
            "specialAttack": 25620,
            "backAttackDamagePct": 86.90
        }))
        .unwrap();

        assert_eq!(stats.attack, 41991.0);
        assert_eq!(stats.back_attack_damage_pct, 86.90);
    }

    #[test]
    fn stat_block_coerces_bad_and_missing_fields() {
        let stats: StatBlock = serde_json::from_value(json!({
            "attack": "abc",
            "critChancePct": "117.52",
            "critDamagePct": null
        }))
        .unwrap();

        assert_eq!(stats.attack, 0.0);
        assert_eq!(stats.crit_chance_pct, 117.52);
        assert_eq!(stats.crit_damage_pct, 0.0);
        assert_eq!(stats.special_attack, 0.0);
    }

    #[test]
    fn stat_block_zeroes_numbers_beyond_f64_range() {
        let stats: StatBlock =
            serde_json::from_str(r#"{ "attack": 1000, "critDamagePct": 1e400 }"#).unwrap();

        assert_eq!(stats.attack, 1000.0);
        assert_eq!(stats.crit_damage_pct, 0.0);
    }

    #[test]
    fn normalized_zeroes_non_finite_values() {
        let stats = StatBlock {
            attack: f64::NAN,
            crit_chance_pct: f64::INFINITY,
            special_attack: 5.0,
            ..Default::default()
        }
        .normalized();

        assert_eq!(stats.attack, 0.0);
        assert_eq!(stats.crit_chance_pct, 0.0);
        assert_eq!(stats.special_attack, 5.0);
    }

    #[test]
    fn entry_omits_absent_optionals() {
        let entry = AttackRankEntry {
            id: "atk_1_1".into(),
            name: "Kai".into(),
            character: None,
            stats: StatBlock::default(),
            updated_at: None,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("character").is_none());
        assert!(value.get("updatedAt").is_none());
    }

    #[test]
    fn legacy_runs_without_items_still_load() {
        let run: Run = serde_json::from_value(json!({
            "id": "run_1_2",
            "characterId": "char_1_2",
            "mapId": "ruins"
        }))
        .unwrap();
        assert!(run.items_found.is_empty());
    }
}
