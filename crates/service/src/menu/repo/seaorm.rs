use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

use crate::menu::domain::Pizza;
use crate::menu::errors::MenuError;
use crate::menu::repository::MenuRepository;

/// Relational backend over the `pizza` table. Every operation is one round
/// trip; the table is the source of truth and no in-process state is held
/// beyond the connection. Row order of `find_all` is whatever the database
/// returns (no ORDER BY).
pub struct SeaOrmMenuRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmMenuRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(m: models::pizza::Model) -> Pizza {
    Pizza {
        name: m.name,
        price: m.price,
        vegan: m.vegan,
        created_on: m.created_on.to_utc(),
    }
}

#[async_trait]
impl MenuRepository for SeaOrmMenuRepository {
    async fn find_all(&self) -> Result<Vec<Pizza>, MenuError> {
        let rows = models::pizza::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| MenuError::Repository(e.to_string()))?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pizza>, MenuError> {
        // Zero rows is a normal miss, distinct from a query failure.
        let row = models::pizza::Entity::find()
            .filter(models::pizza::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| MenuError::Repository(e.to_string()))?;
        Ok(row.map(to_domain))
    }

    async fn count(&self) -> Result<u64, MenuError> {
        models::pizza::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| MenuError::Repository(e.to_string()))
    }

    async fn create(&self, pizza: Pizza) -> Result<(), MenuError> {
        models::pizza::create(&self.db, &pizza.name, pizza.price, pizza.vegan, pizza.created_on)
            .await
            .map_err(|e| MenuError::Repository(e.to_string()))?;
        Ok(())
    }
}
