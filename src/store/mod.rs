use async_trait::async_trait;
use serde_json::{Map, Value};

mod memory;
mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// Logical collections held by the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    FoodItem,
    Entry,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::FoodItem => "fooditem",
            Collection::Entry => "entry",
        }
    }
}

/// The closed set of queries callers may run against a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentFilter {
    All,
    /// Case-insensitive literal substring match on the `name` field.
    NameContains(String),
    /// Exact string match on the `date` field.
    DateEquals(String),
}

impl DocumentFilter {
    pub fn matches(&self, body: &Map<String, Value>) -> bool {
        match self {
            DocumentFilter::All => true,
            DocumentFilter::NameContains(needle) => body
                .get("name")
                .and_then(Value::as_str)
                .map(|name| name.to_lowercase().contains(&needle.to_lowercase()))
                .unwrap_or(false),
            DocumentFilter::DateEquals(day) => {
                body.get("date").and_then(Value::as_str) == Some(day.as_str())
            }
        }
    }
}

/// A stored document together with its store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub body: Map<String, Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database not configured")]
    NotConfigured,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("document is not a JSON object")]
    NotAnObject,
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `record` into `collection` and return the assigned id.
    async fn create_document(
        &self,
        collection: Collection,
        record: Value,
    ) -> Result<String, StoreError>;

    /// Fetch documents matching `filter`. `None` means no limit.
    async fn get_documents(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError>;

    /// Human-readable name of the backing database.
    fn database_name(&self) -> String;

    /// Names of collections that currently hold documents.
    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;

    /// Release pooled resources. Called once on shutdown.
    async fn close(&self) {}
}

/// Serialize `record` and require it to be a flat JSON object.
pub fn to_object<T: serde::Serialize>(record: &T) -> Result<Value, StoreError> {
    let value = serde_json::to_value(record)?;
    if !value.is_object() {
        return Err(StoreError::NotAnObject);
    }
    Ok(value)
}
