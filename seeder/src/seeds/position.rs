use crate::seed::{SeedError, Seeder};
use chrono::NaiveDate;
use db::models::position::{Model, NewPosition};
use db::models::{company, employment_type, interview_flow, location, position_status};
use sea_orm::DatabaseConnection;

pub struct PositionSeeder;

#[async_trait::async_trait]
impl Seeder for PositionSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), SeedError> {
        let techcorp = company::Model::find_by_name(db, "TechCorp")
            .await?
            .ok_or(SeedError::MissingParent {
                table: "companies",
                key: "TechCorp",
            })?;
        let flow = interview_flow::Model::find_by_name(db, "Standard Engineering Position")
            .await?
            .ok_or(SeedError::MissingParent {
                table: "interview_flows",
                key: "Standard Engineering Position",
            })?;
        let active = position_status::Model::find_by_name(db, "Active")
            .await?
            .ok_or(SeedError::MissingParent {
                table: "position_statuses",
                key: "Active",
            })?;
        let barcelona = location::Model::find_by_city(db, "Barcelona")
            .await?
            .ok_or(SeedError::MissingParent {
                table: "locations",
                key: "Barcelona",
            })?;
        let full_time = employment_type::Model::find_by_name(db, "Full-time")
            .await?
            .ok_or(SeedError::MissingParent {
                table: "employment_types",
                key: "Full-time",
            })?;

        Model::create(
            db,
            NewPosition {
                company_id: techcorp.id,
                interview_flow_id: flow.id,
                position_status_id: Some(active.id),
                location_id: Some(barcelona.id),
                employment_type_id: Some(full_time.id),
                title: "Senior Software Engineer".to_string(),
                description: Some(
                    "Looking for an experienced software engineer to join our team".to_string(),
                ),
                job_description: Some(
                    "We are seeking a Senior Software Engineer to join our development team..."
                        .to_string(),
                ),
                requirements: Some(
                    "5+ years of experience in software development, proficiency in JavaScript, React, Node.js..."
                        .to_string(),
                ),
                responsibilities: Some(
                    "Design and implement scalable software solutions, mentor junior developers..."
                        .to_string(),
                ),
                salary_min: Some(60000.00),
                salary_max: Some(80000.00),
                benefits: Some(
                    "Health insurance, flexible working hours, remote work options...".to_string(),
                ),
                company_description: Some(
                    "TechCorp is a leading technology company...".to_string(),
                ),
                application_deadline: NaiveDate::from_ymd_opt(2024, 12, 31),
                contact_info: Some("hr@techcorp.com".to_string()),
            },
        )
        .await?;
        Ok(())
    }
}
