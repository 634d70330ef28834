mod common;

use common::{reference_stats, stats, temp_store};
use dropforge_core::cohort::Cohort;
use dropforge_core::config::ScoreWeights;
use dropforge_core::error::ForgeError;
use dropforge_core::models::AttackRankEntry;
use dropforge_core::protocol::{EntryPatchRequest, NewEntryRequest};
use dropforge_core::ranking::{rank_entries, RankBook, RankQuery, SortDir, SortKey};
use rstest::rstest;
use std::fs;

fn new_entry(name: &str, attack: f64) -> NewEntryRequest {
    NewEntryRequest {
        name: Some(name.to_string()),
        character: None,
        stats: stats(attack, 50.0, 200.0, 1000.0, 20.0),
    }
}

fn entry(id: &str, name: &str, character: Option<&str>, attack: f64) -> AttackRankEntry {
    AttackRankEntry {
        id: id.to_string(),
        name: name.to_string(),
        character: character.map(str::to_string),
        stats: stats(attack, 50.0, 200.0, 0.0, 0.0),
        updated_at: None,
    }
}

// --- PURE RANKING ---

#[test]
fn test_rank_entries_sorts_descending() {
    let ranked = rank_entries(
        vec![
            entry("a", "Low", None, 100.0),
            entry("b", "High", None, 900.0),
            entry("c", "Mid", None, 500.0),
        ],
        &ScoreWeights::default(),
    );
    let ids: Vec<&str> = ranked.iter().map(|r| r.entry.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}

#[test]
fn test_rank_entries_keeps_tie_order() {
    let ranked = rank_entries(
        vec![entry("first", "A", None, 100.0), entry("second", "B", None, 100.0)],
        &ScoreWeights::default(),
    );
    assert_eq!(ranked[0].entry.id, "first");
    assert_eq!(ranked[1].entry.id, "second");
}

#[test]
fn test_ranked_entry_serializes_flat() {
    let ranked = rank_entries(vec![entry("a", "Kai", Some("Mage"), 100.0)], &ScoreWeights::default());
    let value = serde_json::to_value(&ranked[0]).unwrap();
    assert_eq!(value["id"], "a");
    assert_eq!(value["character"], "Mage");
    assert!(value["score"].is_number());
    assert!(value["breakdown"]["effectiveAttack"].is_number());
}

// --- RANK BOOK ---

#[test]
fn test_create_then_rank_per_cohort() {
    let (_dir, store) = temp_store();
    let book = RankBook::new(store);

    let req = NewEntryRequest {
        name: Some("  Kai  ".into()),
        character: Some("  Mage ".into()),
        stats: reference_stats(),
    };
    let created = book.create(Cohort::Cap120, req.clone()).unwrap();
    book.create(Cohort::Cap100, req).unwrap();

    assert!(created.id.starts_with("atk_"));
    assert_eq!(created.name, "Kai");
    assert_eq!(created.character.as_deref(), Some("Mage"));
    assert!(created.updated_at.is_some());

    let base = ScoreWeights::default();
    let top120 = book.ranked(Cohort::Cap120, &base).unwrap();
    let top100 = book.ranked(Cohort::Cap100, &base).unwrap();
    assert_eq!(top120.len(), 1);
    assert_eq!(top100.len(), 1);
    assert!(top100[0].score < top120[0].score);
    assert_eq!(top100[0].breakdown.crit_chance_capped_pct, 100.0);
}

#[test]
fn test_scores_are_never_persisted() {
    let (_dir, store) = temp_store();
    let book = RankBook::new(store.clone());
    book.create(Cohort::Cap120, new_entry("Kai", 1000.0)).unwrap();

    let raw = fs::read_to_string(store.path_of(Cohort::Cap120.store_file())).unwrap();
    assert!(!raw.contains("score"));
    assert!(!raw.contains("breakdown"));
}

#[rstest]
#[case::blank_name(Some("   "), 1000.0, "name is required")]
#[case::missing_name(None, 1000.0, "name is required")]
#[case::zero_attack(Some("Kai"), 0.0, "attack must be > 0")]
#[case::negative_attack(Some("Kai"), -5.0, "attack must be > 0")]
fn test_create_validation(#[case] name: Option<&str>, #[case] attack: f64, #[case] msg: &str) {
    let (_dir, store) = temp_store();
    let book = RankBook::new(store);
    let req = NewEntryRequest {
        name: name.map(str::to_string),
        ..new_entry("unused", attack)
    };

    match book.create(Cohort::Cap120, req) {
        Err(ForgeError::Validation(m)) => assert_eq!(m, msg),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(book.entries(Cohort::Cap120).unwrap().is_empty());
}

#[test]
fn test_create_with_text_attack_is_rejected() {
    let (_dir, store) = temp_store();
    let book = RankBook::new(store);
    let req: NewEntryRequest =
        serde_json::from_str(r#"{ "name": "Kai", "stats": { "attack": "abc" } }"#).unwrap();

    assert!(matches!(
        book.create(Cohort::Cap120, req),
        Err(ForgeError::Validation(_))
    ));
}

#[test]
fn test_update_merges_fields() {
    let (_dir, store) = temp_store();
    let book = RankBook::new(store);
    let mut req = new_entry("Kai", 1000.0);
    req.character = Some("Mage".into());
    let created = book.create(Cohort::Cap120, req).unwrap();

    let renamed = book
        .update(
            Cohort::Cap120,
            &created.id,
            EntryPatchRequest {
                name: Some(" Kai II ".into()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(renamed.name, "Kai II");
    assert_eq!(renamed.character.as_deref(), Some("Mage"));
    assert_eq!(renamed.stats, created.stats);

    let cleared = book
        .update(
            Cohort::Cap120,
            &created.id,
            EntryPatchRequest {
                character: Some(String::new()),
                stats: Some(stats(2000.0, 0.0, 0.0, 0.0, 0.0)),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(cleared.character, None);
    assert_eq!(cleared.stats.attack, 2000.0);
    assert_eq!(cleared.name, "Kai II");

    let stored = book.entries(Cohort::Cap120).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], cleared);
}

#[test]
fn test_update_rejects_bad_values() {
    let (_dir, store) = temp_store();
    let book = RankBook::new(store);
    let created = book.create(Cohort::Cap120, new_entry("Kai", 1000.0)).unwrap();

    let zero_attack = EntryPatchRequest {
        stats: Some(stats(0.0, 0.0, 0.0, 0.0, 0.0)),
        ..Default::default()
    };
    assert!(matches!(
        book.update(Cohort::Cap120, &created.id, zero_attack),
        Err(ForgeError::Validation(_))
    ));

    let blank_name = EntryPatchRequest {
        name: Some("  ".into()),
        ..Default::default()
    };
    assert!(matches!(
        book.update(Cohort::Cap120, &created.id, blank_name),
        Err(ForgeError::Validation(_))
    ));

    assert_eq!(book.entries(Cohort::Cap120).unwrap()[0], created);
}

#[test]
fn test_unknown_ids_are_not_found() {
    let (_dir, store) = temp_store();
    let book = RankBook::new(store);
    book.create(Cohort::Cap120, new_entry("Kai", 1000.0)).unwrap();

    assert!(matches!(
        book.update(Cohort::Cap120, "atk_nope", EntryPatchRequest::default()),
        Err(ForgeError::NotFound(_))
    ));
    assert!(matches!(
        book.delete(Cohort::Cap120, "atk_nope"),
        Err(ForgeError::NotFound(_))
    ));
}

#[test]
fn test_delete_only_touches_its_cohort() {
    let (_dir, store) = temp_store();
    let book = RankBook::new(store);
    let a = book.create(Cohort::Cap120, new_entry("Kai", 1000.0)).unwrap();
    book.create(Cohort::Cap100, new_entry("Kai", 1000.0)).unwrap();

    assert!(matches!(
        book.delete(Cohort::Cap100, &a.id),
        Err(ForgeError::NotFound(_))
    ));
    book.delete(Cohort::Cap120, &a.id).unwrap();

    assert!(book.entries(Cohort::Cap120).unwrap().is_empty());
    assert_eq!(book.entries(Cohort::Cap100).unwrap().len(), 1);
}

// --- QUERY ---

fn board() -> Vec<dropforge_core::ranking::RankedEntry> {
    rank_entries(
        vec![
            entry("1", "Alice", Some("Mage"), 300.0),
            entry("2", "bob", Some("Knight"), 900.0),
            entry("3", "Carol", None, 600.0),
            entry("4", "alan", Some("mage"), 100.0),
        ],
        &ScoreWeights::default(),
    )
}

fn ids(entries: &[dropforge_core::ranking::RankedEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.entry.id.as_str()).collect()
}

#[test]
fn test_default_query_orders_by_score_desc() {
    let out = RankQuery::default().apply(board());
    assert_eq!(ids(&out), vec!["2", "3", "1", "4"]);
}

#[rstest]
#[case::name_substring(RankQuery { name: Some("AL".into()), ..Default::default() }, vec!["1", "4"])]
#[case::character_substring(RankQuery { character: Some("mage".into()), ..Default::default() }, vec!["1", "4"])]
#[case::attack_floor(RankQuery { atk_min: Some("600".into()), ..Default::default() }, vec!["2", "3"])]
#[case::comma_decimal(RankQuery { atk_min: Some("299,5".into()), ..Default::default() }, vec!["2", "3", "1"])]
#[case::garbage_threshold_ignored(RankQuery { score_min: Some("lots".into()), ..Default::default() }, vec!["2", "3", "1", "4"])]
#[case::crit_floor(RankQuery { crit_min: Some("60".into()), ..Default::default() }, vec![])]
fn test_filters(#[case] query: RankQuery, #[case] expected: Vec<&str>) {
    let out = query.apply(board());
    assert_eq!(ids(&out), expected);
}

#[rstest]
#[case(SortKey::Name, SortDir::Asc, vec!["4", "1", "2", "3"])]
#[case(SortKey::Attack, SortDir::Asc, vec!["4", "1", "3", "2"])]
#[case(SortKey::Score, SortDir::Asc, vec!["4", "1", "3", "2"])]
#[case(SortKey::Character, SortDir::Desc, vec!["1", "4", "2", "3"])]
fn test_sorting(#[case] key: SortKey, #[case] dir: SortDir, #[case] expected: Vec<&str>) {
    let query = RankQuery {
        sort: Some(key),
        dir: Some(dir),
        ..Default::default()
    };
    assert_eq!(ids(&query.apply(board())), expected);
}

#[test]
fn test_query_reads_from_camel_case() {
    let query: RankQuery =
        serde_json::from_str(r#"{ "sort": "critChancePct", "dir": "asc", "atkMin": "5" }"#).unwrap();
    assert_eq!(query.sort, Some(SortKey::CritChancePct));
    assert_eq!(query.dir, Some(SortDir::Asc));
    assert_eq!(query.atk_min.as_deref(), Some("5"));
}
