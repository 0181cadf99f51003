use crate::seed::{SeedError, Seeder};
use db::models::position_status::Model;
use sea_orm::DatabaseConnection;

pub struct PositionStatusSeeder;

#[async_trait::async_trait]
impl Seeder for PositionStatusSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), SeedError> {
        Model::create(db, "Active", "Position is currently accepting applications").await?;
        Model::create(db, "Closed", "Position is no longer accepting applications").await?;
        Model::create(db, "Draft", "Position is in draft mode").await?;
        Model::create(db, "Paused", "Position is temporarily paused").await?;
        Ok(())
    }
}
