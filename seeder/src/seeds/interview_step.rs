use crate::seed::{SeedError, Seeder};
use db::models::interview_step::{Model, NewInterviewStep};
use db::models::{interview_flow, interview_type};
use sea_orm::DatabaseConnection;

/// Seeds the four steps of the standard engineering flow in one multi-row
/// insert, order indices 1 through 4.
pub struct InterviewStepSeeder;

async fn interview_type_id(
    db: &DatabaseConnection,
    name: &'static str,
) -> Result<i64, SeedError> {
    interview_type::Model::find_by_name(db, name)
        .await?
        .map(|t| t.id)
        .ok_or(SeedError::MissingParent {
            table: "interview_types",
            key: name,
        })
}

#[async_trait::async_trait]
impl Seeder for InterviewStepSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), SeedError> {
        let flow = interview_flow::Model::find_by_name(db, "Standard Engineering Position")
            .await?
            .ok_or(SeedError::MissingParent {
                table: "interview_flows",
                key: "Standard Engineering Position",
            })?;

        let steps = vec![
            NewInterviewStep {
                interview_flow_id: flow.id,
                interview_type_id: interview_type_id(db, "Phone Screening").await?,
                name: "Initial Phone Screening".to_string(),
                order_index: 1,
            },
            NewInterviewStep {
                interview_flow_id: flow.id,
                interview_type_id: interview_type_id(db, "Technical Interview").await?,
                name: "Technical Assessment".to_string(),
                order_index: 2,
            },
            NewInterviewStep {
                interview_flow_id: flow.id,
                interview_type_id: interview_type_id(db, "Behavioral Interview").await?,
                name: "Behavioral Interview".to_string(),
                order_index: 3,
            },
            NewInterviewStep {
                interview_flow_id: flow.id,
                interview_type_id: interview_type_id(db, "Final Interview").await?,
                name: "Final Interview".to_string(),
                order_index: 4,
            },
        ];

        Model::create_many(db, steps).await?;
        Ok(())
    }
}
