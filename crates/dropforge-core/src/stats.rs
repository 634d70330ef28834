//! Drop-rate tabulation over recorded runs.

use crate::models::{GameMap, MapItem, Run};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDropStats {
    pub item: MapItem,
    /// Runs in which this item dropped at least once.
    pub runs_with_item: usize,
    pub qty_total: f64,
    /// Percentage of the map's runs that dropped the item.
    pub drop_rate: f64,
    /// Average quantity per run that dropped the item.
    pub avg_qty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDropStats {
    pub map_id: String,
    pub map_name: String,
    pub total_runs: usize,
    pub runs_with_any_drop: usize,
    pub max_drop_rate: f64,
    pub max_qty_total: f64,
    pub items: Vec<ItemDropStats>,
}

pub fn drop_stats(maps: &[GameMap], runs: &[Run]) -> Vec<MapDropStats> {
    maps.iter().map(|m| map_drop_stats(m, runs)).collect()
}

pub fn map_drop_stats(map: &GameMap, runs: &[Run]) -> MapDropStats {
    let map_runs: Vec<&Run> = runs.iter().filter(|r| r.map_id == map.id).collect();
    let total_runs = map_runs.len();

    let mut items: Vec<ItemDropStats> = map
        .items
        .iter()
        .map(|item| {
            let mut runs_with_item = 0;
            let mut qty_total = 0.0;
            for run in &map_runs {
                let found = run.items_found.iter().find(|f| f.item_id == item.id);
                if let Some(f) = found.filter(|f| f.qty > 0.0) {
                    runs_with_item += 1;
                    qty_total += f.qty;
                }
            }

            let drop_rate = if total_runs > 0 {
                runs_with_item as f64 / total_runs as f64 * 100.0
            } else {
                0.0
            };
            let avg_qty = if runs_with_item > 0 {
                qty_total / runs_with_item as f64
            } else {
                0.0
            };

            ItemDropStats {
                item: item.clone(),
                runs_with_item,
                qty_total,
                drop_rate,
                avg_qty,
            }
        })
        .collect();

    items.sort_by(|a, b| b.drop_rate.total_cmp(&a.drop_rate));

    let runs_with_any_drop = map_runs
        .iter()
        .filter(|r| r.items_found.iter().any(|f| f.qty > 0.0))
        .count();

    MapDropStats {
        map_id: map.id.clone(),
        map_name: map.name.clone(),
        total_runs,
        runs_with_any_drop,
        max_drop_rate: items.first().map_or(0.0, |s| s.drop_rate),
        max_qty_total: items.iter().fold(0.0, |m, s| f64::max(m, s.qty_total)),
        items,
    }
}
