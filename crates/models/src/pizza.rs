use chrono::{DateTime, Utc};
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pizza")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub vegan: bool,
    pub created_on: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert one row. No duplicate check: the menu allows items with the same
/// name and lookups take the first match.
pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    price: i32,
    vegan: bool,
    created_on: DateTime<Utc>,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        name: Set(name.to_string()),
        price: Set(price),
        vegan: Set(vegan),
        created_on: Set(created_on.into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
