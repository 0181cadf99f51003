use crate::seed::{SeedError, Seeder};
use db::models::interview_result::Model;
use sea_orm::DatabaseConnection;

pub struct InterviewResultSeeder;

#[async_trait::async_trait]
impl Seeder for InterviewResultSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), SeedError> {
        Model::create(db, "Passed", "Candidate passed the interview").await?;
        Model::create(db, "Failed", "Candidate failed the interview").await?;
        Model::create(db, "Pending", "Interview result is pending").await?;
        Model::create(db, "Rescheduled", "Interview was rescheduled").await?;
        Ok(())
    }
}
