use crate::seed::{SeedError, Seeder};
use db::models::interview_type::Model;
use sea_orm::DatabaseConnection;

pub struct InterviewTypeSeeder;

#[async_trait::async_trait]
impl Seeder for InterviewTypeSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), SeedError> {
        Model::create(
            db,
            "Phone Screening",
            "Initial phone interview to assess basic qualifications and interest",
        )
        .await?;
        Model::create(
            db,
            "Technical Interview",
            "Technical skills assessment and problem-solving evaluation",
        )
        .await?;
        Model::create(
            db,
            "Behavioral Interview",
            "Assessment of soft skills, cultural fit, and past experiences",
        )
        .await?;
        Model::create(
            db,
            "Final Interview",
            "Final round with senior management or hiring manager",
        )
        .await?;
        Ok(())
    }
}
