use crate::seed::{SeedError, Seeder};
use db::models::company::Model;
use sea_orm::DatabaseConnection;

pub struct CompanySeeder;

#[async_trait::async_trait]
impl Seeder for CompanySeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), SeedError> {
        Model::create(db, "TechCorp").await?;
        Model::create(db, "InnovateSoft").await?;
        Model::create(db, "Digital Solutions").await?;
        Ok(())
    }
}
