use super::RankedEntry;
use crate::coerce::parse_threshold;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Default, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Name,
    Character,
    Attack,
    CritChancePct,
    CritDamagePct,
    SpecialAttack,
    BackAttackDamagePct,
    #[default]
    Score,
}

#[derive(
    Debug, Default, Clone, Copy, EnumString, Display, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

/// Leaderboard filters and ordering.
///
/// Numeric thresholds are kept as typed text (`"117,5"` is accepted) and
/// ignored when they do not parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankQuery {
    pub name: Option<String>,
    pub character: Option<String>,
    pub atk_min: Option<String>,
    pub crit_min: Option<String>,
    pub score_min: Option<String>,
    pub sort: Option<SortKey>,
    pub dir: Option<SortDir>,
}

impl RankQuery {
    pub fn apply(&self, entries: Vec<RankedEntry>) -> Vec<RankedEntry> {
        let mut kept = self.filter(entries);
        let key = self.sort.unwrap_or_default();
        let dir = self.dir.unwrap_or_default();

        kept.sort_by(|a, b| {
            let ord = compare(a, b, key);
            match dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        });
        kept
    }

    pub fn filter(&self, entries: Vec<RankedEntry>) -> Vec<RankedEntry> {
        let name_needle = needle(self.name.as_deref());
        let char_needle = needle(self.character.as_deref());
        let atk_min = self.atk_min.as_deref().and_then(parse_threshold);
        let crit_min = self.crit_min.as_deref().and_then(parse_threshold);
        let score_min = self.score_min.as_deref().and_then(parse_threshold);

        entries
            .into_iter()
            .filter(|e| {
                if let Some(n) = &name_needle {
                    if !e.entry.name.to_lowercase().contains(n.as_str()) {
                        return false;
                    }
                }
                if let Some(c) = &char_needle {
                    let character = e.entry.character.as_deref().unwrap_or("").to_lowercase();
                    if !character.contains(c.as_str()) {
                        return false;
                    }
                }
                if atk_min.is_some_and(|min| e.entry.stats.attack < min) {
                    return false;
                }
                if crit_min.is_some_and(|min| e.entry.stats.crit_chance_pct < min) {
                    return false;
                }
                if score_min.is_some_and(|min| e.score < min) {
                    return false;
                }
                true
            })
            .collect()
    }
}

fn needle(raw: Option<&str>) -> Option<String> {
    raw.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty())
}

fn compare(a: &RankedEntry, b: &RankedEntry, key: SortKey) -> Ordering {
    let (sa, sb) = (&a.entry.stats, &b.entry.stats);
    match key {
        SortKey::Name => a.entry.name.to_lowercase().cmp(&b.entry.name.to_lowercase()),
        SortKey::Character => {
            let ca = a.entry.character.as_deref().unwrap_or("").to_lowercase();
            let cb = b.entry.character.as_deref().unwrap_or("").to_lowercase();
            ca.cmp(&cb)
        }
        SortKey::Attack => sa.attack.total_cmp(&sb.attack),
        SortKey::CritChancePct => sa.crit_chance_pct.total_cmp(&sb.crit_chance_pct),
        SortKey::CritDamagePct => sa.crit_damage_pct.total_cmp(&sb.crit_damage_pct),
        SortKey::SpecialAttack => sa.special_attack.total_cmp(&sb.special_attack),
        SortKey::BackAttackDamagePct => sa
            .back_attack_damage_pct
            .total_cmp(&sb.back_attack_damage_pct),
        SortKey::Score => a.score.total_cmp(&b.score),
    }
}
