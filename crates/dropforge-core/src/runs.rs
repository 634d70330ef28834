use crate::coerce::non_empty_trimmed;
use crate::error::{ForgeError, ForgeResult};
use crate::models::{Character, GameMap, ItemFound, Run};
use crate::protocol::{ItemFoundRequest, RunRequest};
use crate::store::{JsonStore, CHARACTERS_FILE, MAPS_FILE, RUNS_FILE};
use crate::util::{generate_id, timestamp_now};
use tracing::{debug, info};

/// Farming runs and the characters that made them.
#[derive(Debug, Clone)]
pub struct RunLog {
    store: JsonStore,
}

impl RunLog {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub fn list_runs(&self) -> ForgeResult<Vec<Run>> {
        self.store.read_list(RUNS_FILE)
    }

    pub fn list_characters(&self) -> ForgeResult<Vec<Character>> {
        self.store.read_list(CHARACTERS_FILE)
    }

    /// Records a run on a map.
    ///
    /// The character is looked up by id, then by name, and created when
    /// neither matches. Dropped items that do not belong to the map are
    /// silently discarded.
    pub fn record_run(&self, req: RunRequest) -> ForgeResult<Run> {
        let character_id = non_empty_trimmed(req.character_id.as_deref());
        let character_name = non_empty_trimmed(req.character_name.as_deref());
        let map_id = non_empty_trimmed(req.map_id.as_deref());

        let map_id = match map_id {
            Some(m) if character_id.is_some() || character_name.is_some() => m,
            _ => {
                return Err(ForgeError::validation(
                    "characterName or characterId and mapId required",
                ))
            }
        };

        let maps: Vec<GameMap> = self.store.read_list(MAPS_FILE)?;
        let map = maps
            .iter()
            .find(|m| m.id == map_id)
            .ok_or_else(|| ForgeError::validation("map not found"))?;

        let character =
            self.resolve_character(character_id.as_deref(), character_name.as_deref())?;

        let run = Run {
            id: generate_id("run"),
            character_id: character.id,
            map_id: map.id.clone(),
            items_found: validate_items(map, &req.items_found),
            created_at: timestamp_now(),
        };

        let mut runs = self.list_runs()?;
        runs.push(run.clone());
        self.store.write(RUNS_FILE, &runs)?;

        info!(
            "📥 Run {} on '{}' | {} item(s)",
            run.id,
            run.map_id,
            run.items_found.len()
        );
        Ok(run)
    }

    fn resolve_character(&self, id: Option<&str>, name: Option<&str>) -> ForgeResult<Character> {
        let mut characters = self.list_characters()?;

        let found = id
            .and_then(|id| characters.iter().find(|c| c.id == id))
            .or_else(|| name.and_then(|n| characters.iter().find(|c| c.name == n)));

        if let Some(c) = found {
            debug!("Using character {}", c.id);
            return Ok(c.clone());
        }

        let name = name.ok_or_else(|| ForgeError::not_found("character not found"))?;
        let created = Character {
            id: generate_id("char"),
            name: name.to_string(),
        };
        characters.push(created.clone());
        self.store.write(CHARACTERS_FILE, &characters)?;

        info!("🧙 Character '{}' created ({})", created.name, created.id);
        Ok(created)
    }
}

/// Keeps entries naming an item of `map`; a zero quantity counts as one.
pub fn validate_items(map: &GameMap, items: &[Option<ItemFoundRequest>]) -> Vec<ItemFound> {
    items
        .iter()
        .flatten()
        .filter_map(|it| {
            let item_id = it.item_id.as_deref().filter(|id| !id.is_empty())?;
            if !map.has_item(item_id) {
                return None;
            }
            let qty = if it.qty == 0.0 { 1.0 } else { it.qty };
            Some(ItemFound {
                item_id: item_id.to_string(),
                qty,
            })
        })
        .collect()
}
