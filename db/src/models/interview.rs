use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A scheduled or completed interview for an application. The seeder purges
/// this table but never populates it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "interviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub application_id: i64,
    pub interview_step_id: i64,
    pub employee_id: Option<i64>,
    pub interview_result_id: Option<i64>,
    pub interview_date: Option<DateTime<Utc>>,
    pub score: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application::Entity",
        from = "Column::ApplicationId",
        to = "super::application::Column::Id"
    )]
    Application,

    #[sea_orm(
        belongs_to = "super::interview_step::Entity",
        from = "Column::InterviewStepId",
        to = "super::interview_step::Column::Id"
    )]
    InterviewStep,

    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,

    #[sea_orm(
        belongs_to = "super::interview_result::Entity",
        from = "Column::InterviewResultId",
        to = "super::interview_result::Column::Id"
    )]
    InterviewResult,
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl Related<super::interview_step::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterviewStep.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::interview_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterviewResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
impl Model {}
