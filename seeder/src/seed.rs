use async_trait::async_trait;
use colored::*;
use futures::FutureExt;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use std::fmt;
use std::io::{self, Write};
use std::time::Instant;
use thiserror::Error;

use crate::seeds::{
    application_status::ApplicationStatusSeeder, cleanup::CleanupSeeder, company::CompanySeeder,
    employee::EmployeeSeeder, employment_type::EmploymentTypeSeeder,
    interview_flow::InterviewFlowSeeder, interview_result::InterviewResultSeeder,
    interview_step::InterviewStepSeeder, interview_type::InterviewTypeSeeder,
    location::LocationSeeder, position::PositionSeeder, position_status::PositionStatusSeeder,
};
use db::models;

const STATUS_COLUMN: usize = 80;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Db(#[from] DbErr),

    #[error("missing {table} row '{key}' needed by a dependent seed stage")]
    MissingParent {
        table: &'static str,
        key: &'static str,
    },

    #[error("seed stage '{0}' panicked")]
    Panic(String),
}

#[async_trait]
pub trait Seeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), SeedError>;
}

pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    name: &str,
    db: &DatabaseConnection,
) -> Result<(), SeedError> {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    match std::panic::AssertUnwindSafe(seeder.seed(db))
        .catch_unwind()
        .await
    {
        Ok(Ok(())) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(())
        }
        Ok(Err(err)) => {
            println!("{}", "failed".red());
            Err(err)
        }
        Err(_) => {
            println!("{}", "failed".red());
            Err(SeedError::Panic(name.to_string()))
        }
    }
}

/// Resets the database to the fixed sample dataset: purge everything, then
/// insert lookup rows before the entity rows that reference them.
pub async fn seed_all(db: &DatabaseConnection) -> Result<Summary, SeedError> {
    for (seeder, name) in [
        (
            Box::new(CleanupSeeder) as Box<dyn Seeder + Send + Sync>,
            "Cleanup",
        ),
        (Box::new(EmploymentTypeSeeder), "EmploymentType"),
        (Box::new(LocationSeeder), "Location"),
        (Box::new(ApplicationStatusSeeder), "ApplicationStatus"),
        (Box::new(InterviewResultSeeder), "InterviewResult"),
        (Box::new(PositionStatusSeeder), "PositionStatus"),
        (Box::new(CompanySeeder), "Company"),
        (Box::new(InterviewTypeSeeder), "InterviewType"),
        (Box::new(InterviewFlowSeeder), "InterviewFlow"),
        (Box::new(InterviewStepSeeder), "InterviewStep"),
        (Box::new(EmployeeSeeder), "Employee"),
        (Box::new(PositionSeeder), "Position"),
    ] {
        run_seeder(&*seeder, name, db).await?;
    }

    Ok(Summary::collect(db).await?)
}

/// Row counts per table after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub employment_types: u64,
    pub locations: u64,
    pub application_statuses: u64,
    pub interview_results: u64,
    pub position_statuses: u64,
    pub companies: u64,
    pub interview_types: u64,
    pub interview_flows: u64,
    pub interview_steps: u64,
    pub employees: u64,
    pub positions: u64,
}

impl Summary {
    pub async fn collect(db: &DatabaseConnection) -> Result<Self, DbErr> {
        Ok(Summary {
            employment_types: models::EmploymentType::find().count(db).await?,
            locations: models::Location::find().count(db).await?,
            application_statuses: models::ApplicationStatus::find().count(db).await?,
            interview_results: models::InterviewResult::find().count(db).await?,
            position_statuses: models::PositionStatus::find().count(db).await?,
            companies: models::Company::find().count(db).await?,
            interview_types: models::InterviewType::find().count(db).await?,
            interview_flows: models::InterviewFlow::find().count(db).await?,
            interview_steps: models::InterviewStep::find().count(db).await?,
            employees: models::Employee::find().count(db).await?,
            positions: models::Position::find().count(db).await?,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary of created data:")?;
        writeln!(f, "- Employment Types: {}", self.employment_types)?;
        writeln!(f, "- Locations: {}", self.locations)?;
        writeln!(f, "- Application Statuses: {}", self.application_statuses)?;
        writeln!(f, "- Interview Results: {}", self.interview_results)?;
        writeln!(f, "- Position Statuses: {}", self.position_statuses)?;
        writeln!(f, "- Companies: {}", self.companies)?;
        writeln!(f, "- Interview Types: {}", self.interview_types)?;
        writeln!(f, "- Interview Flows: {}", self.interview_flows)?;
        writeln!(f, "- Interview Steps: {}", self.interview_steps)?;
        writeln!(f, "- Employees: {}", self.employees)?;
        writeln!(f, "- Positions: {}", self.positions)
    }
}
