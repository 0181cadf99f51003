use crate::seed::{SeedError, Seeder};
use db::models::{
    Application, ApplicationStatus, Company, Employee, EmploymentType, Interview, InterviewFlow,
    InterviewResult, InterviewStep, InterviewType, Location, Position, PositionStatus,
};
use sea_orm::{DatabaseConnection, EntityTrait};

/// Purges all thirteen tables, dependents before their parents, so the run
/// always starts from empty tables. Lookup tables go last; nothing
/// references them once the entity rows are gone.
pub struct CleanupSeeder;

#[async_trait::async_trait]
impl Seeder for CleanupSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), SeedError> {
        Interview::delete_many().exec(db).await?;
        Application::delete_many().exec(db).await?;
        InterviewStep::delete_many().exec(db).await?;
        Position::delete_many().exec(db).await?;
        Employee::delete_many().exec(db).await?;
        InterviewFlow::delete_many().exec(db).await?;
        InterviewType::delete_many().exec(db).await?;
        Company::delete_many().exec(db).await?;
        EmploymentType::delete_many().exec(db).await?;
        Location::delete_many().exec(db).await?;
        ApplicationStatus::delete_many().exec(db).await?;
        InterviewResult::delete_many().exec(db).await?;
        PositionStatus::delete_many().exec(db).await?;
        Ok(())
    }
}
