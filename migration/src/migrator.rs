use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202608270001_create_companies::Migration),
            Box::new(migrations::m202608270002_create_interview_types::Migration),
            Box::new(migrations::m202608270003_create_employment_types::Migration),
            Box::new(migrations::m202608270004_create_locations::Migration),
            Box::new(migrations::m202608270005_create_application_statuses::Migration),
            Box::new(migrations::m202608270006_create_interview_results::Migration),
            Box::new(migrations::m202608270007_create_position_statuses::Migration),
            Box::new(migrations::m202608270008_create_interview_flows::Migration),
            Box::new(migrations::m202608270009_create_interview_steps::Migration),
            Box::new(migrations::m202608270010_create_employees::Migration),
            Box::new(migrations::m202608270011_create_positions::Migration),
            Box::new(migrations::m202608270012_create_applications::Migration),
            Box::new(migrations::m202608270013_create_interviews::Migration),
        ]
    }
}
