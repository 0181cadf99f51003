use crate::seed::{SeedError, Seeder};
use db::models::employment_type::Model;
use sea_orm::DatabaseConnection;

pub struct EmploymentTypeSeeder;

#[async_trait::async_trait]
impl Seeder for EmploymentTypeSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), SeedError> {
        Model::create(db, "Full-time", "Full-time employment with benefits").await?;
        Model::create(db, "Part-time", "Part-time employment").await?;
        Model::create(db, "Contract", "Contract-based employment").await?;
        Model::create(db, "Internship", "Internship position").await?;
        Ok(())
    }
}
