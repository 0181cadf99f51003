use crate::seed::{SeedError, Seeder};
use db::models::interview_flow::Model;
use sea_orm::DatabaseConnection;

pub struct InterviewFlowSeeder;

#[async_trait::async_trait]
impl Seeder for InterviewFlowSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), SeedError> {
        Model::create(
            db,
            "Standard Engineering Position",
            "Typical interview process for software engineering positions",
        )
        .await?;
        Model::create(
            db,
            "Senior Management Position",
            "Interview process for senior and management positions",
        )
        .await?;
        Model::create(
            db,
            "Entry Level Position",
            "Simplified interview process for entry-level positions",
        )
        .await?;
        Ok(())
    }
}
