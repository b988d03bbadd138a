use async_trait::async_trait;

use super::domain::Pizza;
use super::errors::MenuError;

/// Storage abstraction for the menu. All backends expose the same four
/// operations; exactly one implementation is constructed per process, at the
/// composition root.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Every known item, in backend-defined order (insertion order for the
    /// in-process backends; unspecified for the relational one).
    async fn find_all(&self) -> Result<Vec<Pizza>, MenuError>;

    /// First item whose name matches exactly (case-sensitive). A miss is a
    /// normal outcome, not an error.
    async fn find_by_name(&self, name: &str) -> Result<Option<Pizza>, MenuError>;

    async fn count(&self) -> Result<u64, MenuError>;

    /// Append an item. No validation, no duplicate check.
    async fn create(&self, pizza: Pizza) -> Result<(), MenuError>;
}
