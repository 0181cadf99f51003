use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A candidate's application for a position. The seeder purges this table
/// but never populates it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub position_id: i64,
    pub application_status_id: Option<i64>,
    pub candidate_name: String,
    pub candidate_email: String,
    pub application_date: DateTime<Utc>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::position::Entity",
        from = "Column::PositionId",
        to = "super::position::Column::Id"
    )]
    Position,

    #[sea_orm(
        belongs_to = "super::application_status::Entity",
        from = "Column::ApplicationStatusId",
        to = "super::application_status::Column::Id"
    )]
    ApplicationStatus,
}

impl Related<super::position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Position.def()
    }
}

impl Related<super::application_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationStatus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
impl Model {}
