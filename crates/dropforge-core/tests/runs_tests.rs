mod common;

use common::temp_store;
use dropforge_core::catalog::Catalog;
use dropforge_core::error::ForgeError;
use dropforge_core::protocol::{CreateItemRequest, CreateMapRequest, ItemFoundRequest, RunRequest};
use dropforge_core::runs::{validate_items, RunLog};
use dropforge_core::store::JsonStore;
use rstest::rstest;
use serde_json::json;

/// One map (`dark_cave`) holding `gem` and `coin`.
fn seeded() -> (tempfile::TempDir, JsonStore) {
    let (dir, store) = temp_store();
    let catalog = Catalog::new(store.clone());
    catalog
        .create_map(CreateMapRequest {
            name: Some("Dark Cave".into()),
            image_url: None,
        })
        .unwrap();
    for name in ["Gem", "Coin"] {
        catalog
            .add_item(CreateItemRequest {
                map_id: Some("dark_cave".into()),
                name: Some(name.into()),
                ..Default::default()
            })
            .unwrap();
    }
    (dir, store)
}

fn found(item_id: &str, qty: f64) -> Option<ItemFoundRequest> {
    Some(ItemFoundRequest {
        item_id: Some(item_id.to_string()),
        qty,
    })
}

#[test]
fn test_record_run_creates_character_once() {
    let (_dir, store) = seeded();
    let log = RunLog::new(store);

    let req = RunRequest {
        character_name: Some(" Kai ".into()),
        map_id: Some("dark_cave".into()),
        items_found: vec![found("gem", 2.0)],
        ..Default::default()
    };
    let first = log.record_run(req.clone()).unwrap();
    let second = log.record_run(req).unwrap();

    let characters = log.list_characters().unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].name, "Kai");
    assert!(characters[0].id.starts_with("char_"));
    assert_eq!(first.character_id, characters[0].id);
    assert_eq!(second.character_id, characters[0].id);

    assert!(first.id.starts_with("run_"));
    assert!(first.created_at.ends_with('Z'));
    assert_eq!(log.list_runs().unwrap().len(), 2);
}

#[test]
fn test_character_id_wins_over_name() {
    let (_dir, store) = seeded();
    let log = RunLog::new(store);

    let kai = log
        .record_run(RunRequest {
            character_name: Some("Kai".into()),
            map_id: Some("dark_cave".into()),
            ..Default::default()
        })
        .unwrap();

    let run = log
        .record_run(RunRequest {
            character_id: Some(kai.character_id.clone()),
            character_name: Some("Somebody Else".into()),
            map_id: Some("dark_cave".into()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(run.character_id, kai.character_id);
    assert_eq!(log.list_characters().unwrap().len(), 1);
}

#[test]
fn test_unknown_character_id_without_name() {
    let (_dir, store) = seeded();
    let log = RunLog::new(store);

    let err = log
        .record_run(RunRequest {
            character_id: Some("char_missing".into()),
            map_id: Some("dark_cave".into()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, ForgeError::NotFound(_)));
    assert!(log.list_runs().unwrap().is_empty());
}

#[rstest]
#[case::no_character(None, Some("dark_cave"), "characterName or characterId and mapId required")]
#[case::no_map(Some("Kai"), None, "characterName or characterId and mapId required")]
#[case::blank_map(Some("Kai"), Some("  "), "characterName or characterId and mapId required")]
#[case::unknown_map(Some("Kai"), Some("ghost_town"), "map not found")]
fn test_record_run_validation(
    #[case] character: Option<&str>,
    #[case] map_id: Option<&str>,
    #[case] msg: &str,
) {
    let (_dir, store) = seeded();
    let log = RunLog::new(store);

    let req = RunRequest {
        character_name: character.map(str::to_string),
        map_id: map_id.map(str::to_string),
        ..Default::default()
    };
    match log.record_run(req) {
        Err(ForgeError::Validation(m)) => assert_eq!(m, msg),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(log.list_characters().unwrap().is_empty());
}

#[test]
fn test_items_are_filtered_to_the_map() {
    let (_dir, store) = seeded();
    let log = RunLog::new(store);

    let req: RunRequest = serde_json::from_value(json!({
        "characterName": "Kai",
        "mapId": "dark_cave",
        "itemsFound": [
            { "itemId": "gem", "qty": 0 },
            { "itemId": "coin", "qty": "5" },
            { "itemId": "dragon_scale", "qty": 1 },
            { "qty": 3 },
            null
        ]
    }))
    .unwrap();

    let run = log.record_run(req).unwrap();
    let items: Vec<(&str, f64)> = run
        .items_found
        .iter()
        .map(|f| (f.item_id.as_str(), f.qty))
        .collect();
    assert_eq!(items, vec![("gem", 1.0), ("coin", 5.0)]);
}

#[test]
fn test_validate_items_on_empty_map() {
    let (_dir, store) = seeded();
    let map = Catalog::new(store).get_map("dark_cave").unwrap().unwrap();

    assert!(validate_items(&map, &[]).is_empty());
    assert_eq!(validate_items(&map, &[found("", 1.0), None]).len(), 0);
    assert_eq!(validate_items(&map, &[found("gem", 4.0)])[0].qty, 4.0);
}
