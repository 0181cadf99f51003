use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, QueryFilter, Set};
use serde::{Deserialize, Serialize};

/// An ordered interview process that positions point at; its steps live in
/// `interview_steps`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "interview_flows")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::interview_step::Entity")]
    InterviewStep,

    #[sea_orm(has_many = "super::position::Entity")]
    Position,
}

impl Related<super::interview_step::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterviewStep.def()
    }
}

impl Related<super::position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Position.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        description: &str,
    ) -> Result<Self, DbErr> {
        let flow = ActiveModel {
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
            ..Default::default()
        };
        flow.insert(db).await
    }

    pub async fn find_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find().filter(Column::Name.eq(name)).one(db).await
    }
}
