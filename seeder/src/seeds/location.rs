use crate::seed::{SeedError, Seeder};
use db::models::location::Model;
use sea_orm::DatabaseConnection;

pub struct LocationSeeder;

#[async_trait::async_trait]
impl Seeder for LocationSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), SeedError> {
        Model::create(db, "Barcelona", Some("Catalonia"), "Spain").await?;
        Model::create(db, "Madrid", Some("Madrid"), "Spain").await?;
        Model::create(db, "Remote", None, "Global").await?;
        Ok(())
    }
}
