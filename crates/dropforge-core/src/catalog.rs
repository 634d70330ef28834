use crate::coerce::non_empty_trimmed;
use crate::error::{ForgeError, ForgeResult};
use crate::models::{GameMap, MapItem};
use crate::protocol::{CreateItemRequest, CreateMapRequest, UpdateItemRequest, UpdateMapRequest};
use crate::store::{JsonStore, MAPS_FILE};
use crate::util::slugify;
use tracing::info;

/// Maps and the items that can drop on them, all kept in `maps.json`.
#[derive(Debug, Clone)]
pub struct Catalog {
    store: JsonStore,
}

impl Catalog {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub fn list_maps(&self) -> ForgeResult<Vec<GameMap>> {
        self.store.read_list(MAPS_FILE)
    }

    pub fn get_map(&self, id: &str) -> ForgeResult<Option<GameMap>> {
        Ok(self.list_maps()?.into_iter().find(|m| m.id == id))
    }

    pub fn create_map(&self, req: CreateMapRequest) -> ForgeResult<GameMap> {
        let name = non_empty_trimmed(req.name.as_deref())
            .ok_or_else(|| ForgeError::validation("map name is required"))?;
        let id = slug_for(&name)?;

        let mut maps = self.list_maps()?;
        if maps.iter().any(|m| m.id == id) {
            return Err(ForgeError::Conflict(
                "a map with this name already exists".into(),
            ));
        }

        let map = GameMap {
            id,
            name,
            image_url: non_empty_trimmed(req.image_url.as_deref()),
            items: Vec::new(),
        };

        maps.push(map.clone());
        self.store.write(MAPS_FILE, &maps)?;

        info!("🗺️  Map '{}' created", map.id);
        Ok(map)
    }

    pub fn update_map(&self, req: UpdateMapRequest) -> ForgeResult<GameMap> {
        let id = non_empty_trimmed(req.id.as_deref())
            .ok_or_else(|| ForgeError::validation("map id is required"))?;

        let mut maps = self.list_maps()?;
        let map = find_map_mut(&mut maps, &id)?;

        if let Some(name) = non_empty_trimmed(req.name.as_deref()) {
            map.name = name;
        }
        if let Some(image_url) = req.image_url {
            map.image_url = non_empty_trimmed(image_url.as_deref());
        }

        let updated = map.clone();
        self.store.write(MAPS_FILE, &maps)?;
        Ok(updated)
    }

    pub fn delete_map(&self, id: &str) -> ForgeResult<()> {
        if id.trim().is_empty() {
            return Err(ForgeError::validation("map id is required"));
        }

        let maps = self.list_maps()?;
        let before = maps.len();
        let next: Vec<GameMap> = maps.into_iter().filter(|m| m.id != id).collect();
        if next.len() == before {
            return Err(ForgeError::not_found("map not found"));
        }

        self.store.write(MAPS_FILE, &next)?;
        info!("🗑️  Map '{}' removed", id);
        Ok(())
    }

    pub fn add_item(&self, req: CreateItemRequest) -> ForgeResult<MapItem> {
        let (map_id, name) = match (
            non_empty_trimmed(req.map_id.as_deref()),
            non_empty_trimmed(req.name.as_deref()),
        ) {
            (Some(m), Some(n)) => (m, n),
            _ => return Err(ForgeError::validation("mapId and name are required")),
        };

        let mut maps = self.list_maps()?;
        let map = find_map_mut(&mut maps, &map_id)?;

        let id = slug_for(&name)?;
        if map.has_item(&id) {
            return Err(ForgeError::Conflict(
                "an item with this name already exists on this map".into(),
            ));
        }

        let item = MapItem {
            id,
            name,
            rarity: non_empty_trimmed(req.rarity.as_deref()),
            image_url: non_empty_trimmed(req.image_url.as_deref()),
        };
        map.items.push(item.clone());
        self.store.write(MAPS_FILE, &maps)?;

        info!("💎 Item '{}' added to map '{}'", item.id, map_id);
        Ok(item)
    }

    pub fn update_item(&self, req: UpdateItemRequest) -> ForgeResult<MapItem> {
        let (map_id, item_id) = require_item_ref(req.map_id.as_deref(), req.item_id.as_deref())?;

        let mut maps = self.list_maps()?;
        let map = find_map_mut(&mut maps, &map_id)?;
        let item = map
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| ForgeError::not_found("item not found"))?;

        if let Some(name) = non_empty_trimmed(req.name.as_deref()) {
            item.name = name;
        }
        if let Some(rarity) = req.rarity {
            item.rarity = non_empty_trimmed(rarity.as_deref());
        }
        if let Some(image_url) = req.image_url {
            item.image_url = non_empty_trimmed(image_url.as_deref());
        }

        let updated = item.clone();
        self.store.write(MAPS_FILE, &maps)?;
        Ok(updated)
    }

    pub fn delete_item(&self, map_id: &str, item_id: &str) -> ForgeResult<()> {
        let (map_id, item_id) = require_item_ref(Some(map_id), Some(item_id))?;

        let mut maps = self.list_maps()?;
        let map = find_map_mut(&mut maps, &map_id)?;

        let before = map.items.len();
        map.items.retain(|i| i.id != item_id);
        if map.items.len() == before {
            return Err(ForgeError::not_found("item not found"));
        }

        self.store.write(MAPS_FILE, &maps)?;
        info!("🗑️  Item '{}' removed from map '{}'", item_id, map_id);
        Ok(())
    }
}

fn find_map_mut<'a>(maps: &'a mut [GameMap], id: &str) -> ForgeResult<&'a mut GameMap> {
    maps.iter_mut()
        .find(|m| m.id == id)
        .ok_or_else(|| ForgeError::not_found("map not found"))
}

fn require_item_ref(map_id: Option<&str>, item_id: Option<&str>) -> ForgeResult<(String, String)> {
    match (non_empty_trimmed(map_id), non_empty_trimmed(item_id)) {
        (Some(m), Some(i)) => Ok((m, i)),
        _ => Err(ForgeError::validation("mapId and itemId are required")),
    }
}

fn slug_for(name: &str) -> ForgeResult<String> {
    let id = slugify(name);
    if id.is_empty() {
        return Err(ForgeError::validation(
            "name must contain at least one letter or digit",
        ));
    }
    Ok(id)
}
