use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, QueryFilter, Set};
use serde::{Deserialize, Serialize};

/// An open position at a company. Location, status, and employment type are
/// foreign keys into the lookup tables rather than free-text fields.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "positions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub company_id: i64,
    pub interview_flow_id: i64,
    pub position_status_id: Option<i64>,
    pub location_id: Option<i64>,
    pub employment_type_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub job_description: Option<String>,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub benefits: Option<String>,
    pub company_description: Option<String>,
    pub application_deadline: Option<NaiveDate>,
    pub contact_info: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,

    #[sea_orm(
        belongs_to = "super::interview_flow::Entity",
        from = "Column::InterviewFlowId",
        to = "super::interview_flow::Column::Id"
    )]
    InterviewFlow,

    #[sea_orm(
        belongs_to = "super::position_status::Entity",
        from = "Column::PositionStatusId",
        to = "super::position_status::Column::Id"
    )]
    PositionStatus,

    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id"
    )]
    Location,

    #[sea_orm(
        belongs_to = "super::employment_type::Entity",
        from = "Column::EmploymentTypeId",
        to = "super::employment_type::Column::Id"
    )]
    EmploymentType,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::interview_flow::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterviewFlow.def()
    }
}

impl Related<super::position_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PositionStatus.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::employment_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmploymentType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for inserting a position.
pub struct NewPosition {
    pub company_id: i64,
    pub interview_flow_id: i64,
    pub position_status_id: Option<i64>,
    pub location_id: Option<i64>,
    pub employment_type_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub job_description: Option<String>,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub benefits: Option<String>,
    pub company_description: Option<String>,
    pub application_deadline: Option<NaiveDate>,
    pub contact_info: Option<String>,
}

impl Model {
    pub async fn create(db: &DatabaseConnection, new: NewPosition) -> Result<Self, DbErr> {
        let position = ActiveModel {
            company_id: Set(new.company_id),
            interview_flow_id: Set(new.interview_flow_id),
            position_status_id: Set(new.position_status_id),
            location_id: Set(new.location_id),
            employment_type_id: Set(new.employment_type_id),
            title: Set(new.title),
            description: Set(new.description),
            job_description: Set(new.job_description),
            requirements: Set(new.requirements),
            responsibilities: Set(new.responsibilities),
            salary_min: Set(new.salary_min),
            salary_max: Set(new.salary_max),
            benefits: Set(new.benefits),
            company_description: Set(new.company_description),
            application_deadline: Set(new.application_deadline),
            contact_info: Set(new.contact_info),
            ..Default::default()
        };
        position.insert(db).await
    }

    pub async fn find_by_title(
        db: &DatabaseConnection,
        title: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find().filter(Column::Title.eq(title)).one(db).await
    }
}
