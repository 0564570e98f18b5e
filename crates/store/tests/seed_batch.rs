//! Full seed-catalog batch behavior against the in-memory store.

use std::sync::Arc;
use vietcal_core::catalog;
use vietcal_store::{BulkUpserter, MemoryStore, UpsertStatus};

#[tokio::test]
async fn seeding_twice_yields_exactly_one_document_per_food() {
    let store = MemoryStore::new();
    let upserter = BulkUpserter::new(Arc::new(store.clone()));
    let foods = catalog::seed_foods();

    let first = upserter.upsert_all(&foods).await;
    assert!(first.is_full_success());
    assert_eq!(first.created(), catalog::SEED_FOOD_COUNT);
    assert_eq!(store.len("foods"), catalog::SEED_FOOD_COUNT);

    let created_ats: Vec<_> = foods
        .iter()
        .map(|f| store.document("foods", &f.id).unwrap().created_at)
        .collect();

    let second = upserter.upsert_all(&foods).await;
    assert!(second.is_full_success());
    assert_eq!(second.updated(), catalog::SEED_FOOD_COUNT);
    assert_eq!(second.created(), 0);

    // no duplicates, createdAt fixed at first write
    assert_eq!(store.len("foods"), catalog::SEED_FOOD_COUNT);
    for (food, original) in foods.iter().zip(created_ats) {
        let doc = store.document("foods", &food.id).unwrap();
        assert_eq!(doc.created_at, original, "createdAt moved for {}", food.id);
    }
}

#[tokio::test]
async fn seeded_documents_carry_expected_fields() {
    let store = MemoryStore::new();
    let upserter = BulkUpserter::new(Arc::new(store.clone()));
    upserter.upsert_all(&catalog::seed_foods()).await;

    let pho = store.document("foods", "pho").unwrap();
    assert_eq!(pho.fields["name"], serde_json::json!("Phở bò"));
    assert_eq!(pho.fields["kcal_per_100g"], serde_json::json!(120.0));
    assert_eq!(pho.fields["tags"], serde_json::json!(["beef", "soup"]));
    // the server-assigned timestamp never travels in the field map
    assert!(pho.fields.get("createdAt").is_none());
}

#[tokio::test]
async fn outcomes_preserve_input_order() {
    let store = MemoryStore::new();
    let upserter = BulkUpserter::new(Arc::new(store.clone()));
    let foods = catalog::seed_foods();

    let report = upserter.upsert_all(&foods).await;
    let ids: Vec<_> = report.outcomes.iter().map(|o| o.id.as_str()).collect();
    let expected: Vec<_> = foods.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, expected);
    assert!(report
        .outcomes
        .iter()
        .all(|o| o.status == UpsertStatus::Created));
}
