mod common;

use common::test_store::create_test_store;

use armadio_store::{DocumentStore, WriteBatch, paths};

use googletest::prelude::*;
use serde_json::{Map, Value, json};

fn fields(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[tokio::test]
async fn given_empty_store_when_getting_document_then_returns_none() {
    // Given: An empty store
    let store = create_test_store().await;

    // When: Reading a document that was never written
    let result = store.get(&paths::user_doc("u1")).await.unwrap();

    // Then: Returns None
    assert_that!(result, none());
}

#[tokio::test]
async fn given_absent_document_when_set_merge_then_document_is_created() {
    // Given: An empty store
    let store = create_test_store().await;
    let doc = paths::user_doc("u1");

    // When: Merging into a document that does not exist
    store
        .set_merge(&doc, fields(&[("displayName", json!("Anna"))]))
        .await
        .unwrap();

    // Then: The document exists with the written field
    let data = store.get(&doc).await.unwrap().unwrap();
    assert_that!(data.get("displayName"), some(eq(&json!("Anna"))));
}

#[tokio::test]
async fn given_existing_document_when_set_merge_then_unrelated_fields_survive() {
    // Given: A document with two fields
    let store = create_test_store().await;
    let doc = paths::user_doc("u1");
    store
        .set_merge(
            &doc,
            fields(&[("displayName", json!("Anna")), ("tier", json!("pro"))]),
        )
        .await
        .unwrap();

    // When: Merging a patch touching only one field
    store
        .set_merge(&doc, fields(&[("displayName", json!("Bianca"))]))
        .await
        .unwrap();

    // Then: The untouched field is still there
    let data = store.get(&doc).await.unwrap().unwrap();
    assert_that!(data.get("displayName"), some(eq(&json!("Bianca"))));
    assert_that!(data.get("tier"), some(eq(&json!("pro"))));
}

#[tokio::test]
async fn given_absent_document_when_updated_then_returns_not_found() {
    // Given: An empty store
    let store = create_test_store().await;

    // When: Updating a document that does not exist
    let result = store
        .update(&paths::user_doc("u1"), fields(&[("tier", json!("pro"))]))
        .await;

    // Then: The not-found error surfaces so callers can fall back to create
    assert_that!(result.is_err(), eq(true));
    assert_that!(result.unwrap_err().is_not_found(), eq(true));
}

#[tokio::test]
async fn given_batch_when_committed_then_all_operations_apply() {
    // Given: A store with one existing wardrobe document
    let store = create_test_store().await;
    let keep = paths::wardrobe_doc("u1", "a");
    let gone = paths::wardrobe_doc("u1", "b");
    store
        .set_merge(&gone, fields(&[("category", json!("Felpa"))]))
        .await
        .unwrap();

    // When: Committing a batch with one upsert and one delete
    let mut batch = WriteBatch::new();
    batch.set_merge(&keep, fields(&[("category", json!("Maglietta"))]));
    batch.delete(&gone);
    store.commit(batch).await.unwrap();

    // Then: The upsert landed and the delete removed the other document
    assert_that!(store.get(&keep).await.unwrap(), some(anything()));
    assert_that!(store.get(&gone).await.unwrap(), none());
}

#[tokio::test]
async fn given_empty_batch_when_committed_then_nothing_happens() {
    // Given: An empty store
    let store = create_test_store().await;

    // When: Committing an empty batch
    store.commit(WriteBatch::new()).await.unwrap();

    // Then: The store is still empty
    let listed = store
        .list_collection(&paths::wardrobe_collection("u1"))
        .await
        .unwrap();
    assert_that!(listed.is_empty(), eq(true));
}

#[tokio::test]
async fn given_nested_documents_when_listing_collection_then_only_direct_children_return() {
    // Given: A profile document and two wardrobe documents for the same user
    let store = create_test_store().await;
    store
        .set_merge(&paths::user_doc("u1"), fields(&[("tier", json!("pro"))]))
        .await
        .unwrap();
    store
        .set_merge(
            &paths::wardrobe_doc("u1", "a"),
            fields(&[("category", json!("Felpa"))]),
        )
        .await
        .unwrap();
    store
        .set_merge(
            &paths::wardrobe_doc("u1", "b"),
            fields(&[("category", json!("Giacca"))]),
        )
        .await
        .unwrap();

    // When: Listing the wardrobe collection
    let listed = store
        .list_collection(&paths::wardrobe_collection("u1"))
        .await
        .unwrap();

    // Then: Only the wardrobe documents come back, keyed by bare id
    let mut ids: Vec<&str> = listed.iter().map(|(id, _)| id.as_str()).collect();
    ids.sort_unstable();
    assert_that!(ids, eq(&vec!["a", "b"]));
}

#[tokio::test]
async fn given_documents_when_checking_emptiness_then_reflects_collection_contents() {
    // Given: A store with a document in one user's wardrobe
    let store = create_test_store().await;
    store
        .set_merge(
            &paths::wardrobe_doc("u1", "a"),
            fields(&[("category", json!("Felpa"))]),
        )
        .await
        .unwrap();

    // When / Then: The populated collection reads non-empty, others empty
    assert_that!(
        store
            .collection_is_empty(&paths::wardrobe_collection("u1"))
            .await
            .unwrap(),
        eq(false)
    );
    assert_that!(
        store
            .collection_is_empty(&paths::wardrobe_collection("u2"))
            .await
            .unwrap(),
        eq(true)
    );
}
