use crate::store::{to_object, Collection, Document, DocumentFilter, DocumentStore, StoreError};

use super::dto::{FoodItem, FoodItemRecord};

pub async fn insert(store: &dyn DocumentStore, item: &FoodItem) -> Result<String, StoreError> {
    store
        .create_document(Collection::FoodItem, to_object(item)?)
        .await
}

pub async fn list(
    store: &dyn DocumentStore,
    filter: &DocumentFilter,
    limit: i64,
) -> Result<Vec<FoodItemRecord>, StoreError> {
    let docs = store
        .get_documents(Collection::FoodItem, filter, Some(limit))
        .await?;
    Ok(docs.into_iter().map(to_record).collect())
}

fn to_record(doc: Document) -> FoodItemRecord {
    let mut fields = doc.body;
    fields.remove("id");
    FoodItemRecord { id: doc.id, fields }
}
