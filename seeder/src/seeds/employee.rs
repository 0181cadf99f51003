use crate::seed::{SeedError, Seeder};
use db::models::{company, employee::Model};
use sea_orm::DatabaseConnection;

pub struct EmployeeSeeder;

#[async_trait::async_trait]
impl Seeder for EmployeeSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), SeedError> {
        let techcorp = company::Model::find_by_name(db, "TechCorp")
            .await?
            .ok_or(SeedError::MissingParent {
                table: "companies",
                key: "TechCorp",
            })?;

        Model::create(
            db,
            techcorp.id,
            "John Doe",
            "john.doe@techcorp.com",
            "HR Manager",
        )
        .await?;
        Model::create(
            db,
            techcorp.id,
            "Jane Smith",
            "jane.smith@techcorp.com",
            "Technical Lead",
        )
        .await?;
        Ok(())
    }
}
