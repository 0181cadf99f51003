use crate::seed::{SeedError, Seeder};
use db::models::application_status::Model;
use sea_orm::DatabaseConnection;

pub struct ApplicationStatusSeeder;

#[async_trait::async_trait]
impl Seeder for ApplicationStatusSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), SeedError> {
        Model::create(db, "Pending", "Application is under review", "#FFA500").await?;
        Model::create(db, "Reviewing", "Application is being reviewed", "#4169E1").await?;
        Model::create(db, "Accepted", "Application has been accepted", "#32CD32").await?;
        Model::create(db, "Rejected", "Application has been rejected", "#DC143C").await?;
        Model::create(
            db,
            "Withdrawn",
            "Application has been withdrawn by candidate",
            "#808080",
        )
        .await?;
        Ok(())
    }
}
