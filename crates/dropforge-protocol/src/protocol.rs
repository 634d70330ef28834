use crate::coerce::{lenient_f64, lenient_string, present};
use crate::config::ScoreWeights;
use crate::models::StatBlock;
use serde::{Deserialize, Serialize};

// === ATTACK RANK ===

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct NewEntryRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub character: Option<String>,
    #[serde(default)]
    pub stats: StatBlock,
}

/// Partial update of a rank entry. Absent fields keep their stored value.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct EntryPatchRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub character: Option<String>,
    #[serde(default)]
    pub stats: Option<StatBlock>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ScoreRequest {
    #[serde(default)]
    pub stats: StatBlock,
    #[serde(default)]
    pub weights: Option<ScoreWeights>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cohort: Option<String>,
}

// === CATALOG ===

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateMapRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMapRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub image_url: Option<Option<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[serde(default)]
    pub map_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub map_id: Option<String>,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub rarity: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub image_url: Option<Option<String>>,
}

// === RUNS ===

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemFoundRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub item_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub qty: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub character_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub character_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub map_id: Option<String>,
    /// Entries that are `null` or lack an item id are skipped.
    #[serde(default)]
    pub items_found: Vec<Option<ItemFoundRequest>>,
}
