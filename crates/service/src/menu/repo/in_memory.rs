use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::menu::domain::Pizza;
use crate::menu::errors::MenuError;
use crate::menu::repository::MenuRepository;

/// In-process backend seeded with a fixed catalog at construction.
///
/// The item list is shared mutable state across concurrent requests, so it
/// sits behind an `RwLock`; readers proceed in parallel, appends serialize.
pub struct InMemoryMenuRepository {
    items: RwLock<Vec<Pizza>>,
}

impl InMemoryMenuRepository {
    /// Default seed catalog.
    pub fn with_default_menu() -> Self {
        Self::with_items(vec![
            Pizza::new("Capricciosa", 12),
            Pizza::new("Calzone", 8),
            Pizza::new("Regina", 10),
        ])
    }

    pub fn with_items(items: Vec<Pizza>) -> Self {
        Self { items: RwLock::new(items) }
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
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
