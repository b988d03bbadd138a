use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::MenuError;

/// One menu entry. Also the wire shape: `vegan` is emitted as
/// `veganFriendly` and `created_on` as `createdOn`; every field is always
/// serialized, defaults included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub name: String,
    pub price: i32,
    #[serde(rename = "veganFriendly", default)]
    pub vegan: bool,
    #[serde(rename = "createdOn", default = "default_created_on")]
    pub created_on: DateTime<Utc>,
}

/// Fallback creation timestamp for items that do not specify one.
pub fn default_created_on() -> DateTime<Utc> {
    // 2022-01-01T00:00:00Z
    DateTime::from_timestamp(1_640_995_200, 0).unwrap_or_default()
}

impl Pizza {
    pub fn new(name: &str, price: i32) -> Self {
        Self {
            name: name.to_string(),
            price,
            vegan: false,
            created_on: default_created_on(),
        }
    }

    /// Boundary validation, enforced once at the web layer. Repositories
    /// never re-validate.
    pub fn validate(&self) -> Result<(), MenuError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(MenuError::Validation("name must not be blank".into()));
        }
        if self.name.chars().count() < 3 || self.name.chars().count() > 16 {
            return Err(MenuError::Validation("name must be 3-16 characters".into()));
        }
        if self.price <= 0 {
            return Err(MenuError::Validation("price must be positive".into()));
        }
        Ok(())
    }
}

/// Display metadata of the configured menu, used by the startup summary.
#[derive(Debug, Clone)]
pub struct MenuInfo {
    pub name: String,
    pub version: u32,
    pub created_on: String,
}
