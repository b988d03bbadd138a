use std::sync::Arc;

use tracing::instrument;

use super::domain::{MenuInfo, Pizza};
use super::errors::MenuError;
use super::repository::MenuRepository;

/// The packaged menu image. Every found item serves the same bytes; there is
/// no per-item image.
static MENU_IMAGE: &[u8] = include_bytes!("../../assets/pizza.jpg");

/// Business façade over the selected repository; the only boundary the web
/// layer talks to.
pub struct MenuService {
    repo: Arc<dyn MenuRepository>,
}

impl MenuService {
    pub fn new(repo: Arc<dyn MenuRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Pizza>, MenuError> {
        self.repo.find_all().await
    }

    /// The one business rule: an item must exist before its image is served.
    #[instrument(skip(self))]
    pub async fn get_image(&self, name: &str) -> Result<&'static [u8], MenuError> {
        match self.repo.find_by_name(name).await? {
            Some(_) => Ok(MENU_IMAGE),
            None => Err(MenuError::NotFound(name.to_string())),
        }
    }

    pub async fn create(&self, pizza: Pizza) -> Result<(), MenuError> {
        self.repo.create(pizza).await
    }

    pub async fn count(&self) -> Result<u64, MenuError> {
        self.repo.count().await
    }

    /// Startup diagnostic: print the configured menu metadata followed by
    /// one line per item. Output only, no result beyond failure propagation.
    pub async fn print_summary(&self, info: &MenuInfo) -> Result<(), MenuError> {
        println!("{} (v{}, since {})", info.name, info.version, info.created_on);
        for pizza in self.repo.find_all().await? {
            println!(" * {} ({} €)", pizza.name, pizza.price);
        }
        Ok(())
    }
}
