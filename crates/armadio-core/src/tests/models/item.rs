use crate::{Item, ItemStatus, Season};

use serde_json::json;

#[test]
fn test_item_new() {
    let item = Item::new("Maglietta", "Blu", Season::Estate);

    assert!(!item.id.is_empty());
    assert_eq!(item.category, "Maglietta");
    assert_eq!(item.color, "Blu");
    assert_eq!(item.season, Season::Estate);
    assert_eq!(item.status, ItemStatus::Ready);
    assert!(item.tags.is_empty());
    assert!(item.image.is_none());
}

#[test]
fn test_dedupe_keeps_last_occurrence() {
    let mut first = Item::new("Maglietta", "Blu", Season::Estate);
    first.id = "a".to_string();
    let mut second = Item::new("Felpa", "Nero", Season::Inverno);
    second.id = "b".to_string();
    let mut replacement = Item::new("Maglietta", "Rosso", Season::Estate);
    replacement.id = "a".to_string();

    let out = Item::dedupe_by_id(&[first, second, replacement]);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].id, "a");
    assert_eq!(out[0].color, "Rosso");
    assert_eq!(out[1].id, "b");
}

#[test]
fn test_dedupe_drops_blank_ids() {
    let mut blank = Item::new("Giacca", "Verde", Season::Autunno);
    blank.id = "   ".to_string();
    let mut kept = Item::new("Giacca", "Verde", Season::Autunno);
    kept.id = "x".to_string();

    let out = Item::dedupe_by_id(&[blank, kept]);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "x");
}

#[test]
fn test_from_document_falls_back_on_malformed_fields() {
    let data = json!({
        "season": "NotASeason",
        "status": 42,
        "tags": ["ok", 7, "also-ok"],
        "note": null,
        "updatedAt": "garbage"
    });

    let item = Item::from_document("doc-1", data.as_object().unwrap());

    assert_eq!(item.id, "doc-1");
    assert_eq!(item.season, Season::Primavera);
    assert_eq!(item.status, ItemStatus::Ready);
    assert_eq!(item.tags, vec!["ok".to_string(), "also-ok".to_string()]);
    assert_eq!(item.note, "");
}

#[test]
fn test_from_document_prefers_doc_id_over_payload_id() {
    let data = json!({ "id": "payload-id", "category": "Felpa" });

    let item = Item::from_document("doc-id", data.as_object().unwrap());

    assert_eq!(item.id, "doc-id");
    assert_eq!(item.category, "Felpa");
}

#[test]
fn test_from_local_value_upgrades_legacy_shape() {
    let value = json!({
        "id": "legacy-1",
        "category": "Cappotto",
        "imageUrl": "https://img.example/old.jpg",
        "description": "vecchia nota",
        "updatedAt": "2023-04-01"
    });

    let item = Item::from_local_value(&value).unwrap();

    let image = item.image.unwrap();
    assert_eq!(image.url, "https://img.example/old.jpg");
    assert_eq!(image.provider, "legacy");
    assert_eq!(item.note, "vecchia nota");
    assert_eq!(item.updated_at.to_string(), "2023-04-01");
}

#[test]
fn test_from_local_value_rejects_non_objects_and_missing_ids() {
    assert!(Item::from_local_value(&json!("scalar")).is_none());
    assert!(Item::from_local_value(&json!({ "category": "Felpa" })).is_none());
    assert!(Item::from_local_value(&json!({ "id": "  " })).is_none());
}

#[test]
fn test_wire_shape_is_camel_case() {
    let mut item = Item::new("Pantaloni", "Grigio", Season::Primavera);
    item.status = ItemStatus::NeedsRepair;

    let value = serde_json::to_value(&item).unwrap();

    assert_eq!(value["status"], "Needs Repair");
    assert_eq!(value["season"], "Primavera");
    assert!(value.get("updatedAt").is_some());
    // Unset optionals stay off the wire entirely.
    assert!(value.get("name").is_none());
    assert!(value.get("image").is_none());
}
