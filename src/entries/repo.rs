use crate::store::{to_object, Collection, Document, DocumentFilter, DocumentStore, StoreError};

use super::dto::Entry;

pub async fn insert(store: &dyn DocumentStore, entry: &Entry) -> Result<String, StoreError> {
    store.create_document(Collection::Entry, to_object(entry)?).await
}

/// Entries logged on `day`, or across all days when `day` is `None`.
pub async fn list(
    store: &dyn DocumentStore,
    day: Option<&str>,
    limit: Option<i64>,
) -> Result<Vec<Document>, StoreError> {
    let filter = match day {
        Some(day) => DocumentFilter::DateEquals(day.to_string()),
        None => DocumentFilter::All,
    };
    store.get_documents(Collection::Entry, &filter, limit).await
}
