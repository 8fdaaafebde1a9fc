use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Collection, Document, DocumentFilter, DocumentStore, StoreError};

/// In-process store. Documents are returned in insertion order.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create_document(
        &self,
        collection: Collection,
        record: Value,
    ) -> Result<String, StoreError> {
        let Value::Object(body) = record else {
            return Err(StoreError::NotAnObject);
        };
        let id = Uuid::new_v4().to_string();
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(Document {
                id: id.clone(),
                body,
            });
        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError> {
        let cap = match limit {
            Some(n) => usize::try_from(n.max(0)).unwrap_or(usize::MAX),
            None => usize::MAX,
        };
        let guard = self.collections.read().await;
        let docs = guard
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| filter.matches(&d.body))
                    .take(cap)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }

    fn database_name(&self) -> String {
        "memory".into()
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let guard = self.collections.read().await;
        let mut names: Vec<String> = guard
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(c, _)| c.as_str().to_string())
            .collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn create_then_get_preserves_insertion_order() {
        let store = MemoryDocumentStore::new();
        let a = store
            .create_document(Collection::FoodItem, json!({ "name": "Apple" }))
            .await
            .unwrap();
        let b = store
            .create_document(Collection::FoodItem, json!({ "name": "Bread" }))
            .await
            .unwrap();
        assert_ne!(a, b);

        let docs = store
            .get_documents(Collection::FoodItem, &DocumentFilter::All, None)
            .await
            .unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[tokio::test]
    async fn collections_are_isolated() {
        let store = MemoryDocumentStore::new();
        store
            .create_document(Collection::Entry, json!({ "name": "Soup" }))
            .await
            .unwrap();
        let foods = store
            .get_documents(Collection::FoodItem, &DocumentFilter::All, None)
            .await
            .unwrap();
        assert!(foods.is_empty());
        assert_eq!(store.list_collections().await.unwrap(), vec!["entry"]);
    }

    #[tokio::test]
    async fn limit_caps_results_and_zero_returns_nothing() {
        let store = MemoryDocumentStore::new();
        for i in 0..5 {
            store
                .create_document(Collection::FoodItem, json!({ "name": format!("item {i}") }))
                .await
                .unwrap();
        }
        let three = store
            .get_documents(Collection::FoodItem, &DocumentFilter::All, Some(3))
            .await
            .unwrap();
        assert_eq!(three.len(), 3);
        let none = store
            .get_documents(Collection::FoodItem, &DocumentFilter::All, Some(0))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn rejects_non_object_records() {
        let store = MemoryDocumentStore::new();
        let err = store
            .create_document(Collection::Entry, json!([1, 2]))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotAnObject));
    }
}
