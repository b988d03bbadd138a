use std::path::PathBuf;

use async_trait::async_trait;
use tokio::{fs, sync::RwLock};
use tracing::info;

use crate::menu::domain::Pizza;
use crate::menu::errors::MenuError;
use crate::menu::repository::MenuRepository;

/// Backend loaded once from a packaged JSON document (an array of items in
/// the wire shape). After loading it behaves like the in-memory backend:
/// creates mutate the loaded list in process memory and are NOT written back
/// to the document.
pub struct JsonFileMenuRepository {
    items: RwLock<Vec<Pizza>>,
}

impl JsonFileMenuRepository {
    /// Parse the document at `path`. A missing or malformed document is a
    /// startup error, not a fallback to an empty menu.
    pub async fn load<P: Into<PathBuf>>(path: P) -> Result<Self, MenuError> {
        let path = path.into();
        let bytes = fs::read(&path)
            .await
            .map_err(|e| MenuError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let items: Vec<Pizza> = serde_json::from_slice(&bytes)
            .map_err(|e| MenuError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
        info!(path = %path.display(), items = items.len(), "loaded menu document");
        Ok(Self { items: RwLock::new(items) })
    }
}

#[async_trait]
impl MenuRepository for JsonFileMenuRepository {
    async fn find_all(&self) -> Result<Vec<Pizza>, MenuError> {
        Ok(self.items.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pizza>, MenuError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|p| p.name == name).cloned())
    }

    async fn count(&self) -> Result<u64, MenuError> {
        Ok(self.items.read().await.len() as u64)
    }

    async fn create(&self, pizza: Pizza) -> Result<(), MenuError> {
        self.items.write().await.push(pizza);
        Ok(())
    }
}
