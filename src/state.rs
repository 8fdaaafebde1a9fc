use std::sync::Arc;

use crate::config::{AppConfig, StoreKind};
use crate::store::{DocumentStore, MemoryDocumentStore, PgDocumentStore, StoreError};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let store = match (config.store, config.database_url.as_deref()) {
            (StoreKind::Memory, _) => {
                tracing::info!("using in-memory document store");
                Some(Arc::new(MemoryDocumentStore::new()) as Arc<dyn DocumentStore>)
            }
            (StoreKind::Postgres, Some(url)) => {
                let pg = PgDocumentStore::connect(
                    url,
                    config.database_name.as_deref(),
                    config.max_connections,
                )?;
                if let Err(e) = pg.migrate().await {
                    tracing::warn!(error = %e, "migration failed; continuing");
                }
                Some(Arc::new(pg) as Arc<dyn DocumentStore>)
            }
            (StoreKind::Postgres, None) => {
                tracing::warn!("DATABASE_URL not set; store endpoints will fail");
                None
            }
        };

        Ok(Self { config, store })
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self { config, store }
    }

    /// The wired store, or `NotConfigured` when the service runs without one.
    pub fn store(&self) -> Result<&dyn DocumentStore, StoreError> {
        self.store.as_deref().ok_or(StoreError::NotConfigured)
    }

    pub async fn shutdown(&self) {
        if let Some(store) = &self.store {
            store.close().await;
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Arc<AppConfig> {
        Arc::new(AppConfig {
            database_url: None,
            database_name: None,
            store: StoreKind::Memory,
            host: "127.0.0.1".into(),
            port: 0,
            max_connections: 1,
        })
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::from_parts(
            Self::test_config(),
            Some(Arc::new(MemoryDocumentStore::new()) as Arc<dyn DocumentStore>),
        )
    }
}
