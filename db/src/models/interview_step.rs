use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use serde::{Deserialize, Serialize};

/// One step inside an interview flow. `order_index` establishes the sequence
/// of steps within the flow.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "interview_steps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Flow this step belongs to (foreign key to `interview_flows`).
    pub interview_flow_id: i64,
    /// Kind of interview this step is (foreign key to `interview_types`).
    pub interview_type_id: i64,
    pub name: String,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::interview_flow::Entity",
        from = "Column::InterviewFlowId",
        to = "super::interview_flow::Column::Id"
    )]
    InterviewFlow,

    #[sea_orm(
        belongs_to = "super::interview_type::Entity",
        from = "Column::InterviewTypeId",
        to = "super::interview_type::Column::Id"
    )]
    InterviewType,
}

impl Related<super::interview_flow::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterviewFlow.def()
    }
}

impl Related<super::interview_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterviewType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Row data for a batch insert of interview steps.
pub struct NewInterviewStep {
    pub interview_flow_id: i64,
    pub interview_type_id: i64,
    pub name: String,
    pub order_index: i32,
}

impl Model {
    /// Inserts all given steps in one multi-row statement.
    pub async fn create_many(
        db: &DatabaseConnection,
        steps: Vec<NewInterviewStep>,
    ) -> Result<(), DbErr> {
        let rows = steps.into_iter().map(|step| ActiveModel {
            interview_flow_id: Set(step.interview_flow_id),
            interview_type_id: Set(step.interview_type_id),
            name: Set(step.name),
            order_index: Set(step.order_index),
            ..Default::default()
        });
        Entity::insert_many(rows).exec(db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Model, NewInterviewStep};
    use crate::models::{interview_flow, interview_type};
    use crate::test_utils::setup_test_db;
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

    #[tokio::test]
    async fn test_steps_insert_and_sort_by_order_index() {
        let db = setup_test_db().await;

        let flow = interview_flow::Model::create(&db, "Standard", "Standard process")
            .await
            .unwrap();
        let kind = interview_type::Model::create(&db, "Phone Screening", "Initial call")
            .await
            .unwrap();

        // Insert out of order on purpose.
        Model::create_many(
            &db,
            vec![
                NewInterviewStep {
                    interview_flow_id: flow.id,
                    interview_type_id: kind.id,
                    name: "Second".to_string(),
                    order_index: 2,
                },
                NewInterviewStep {
                    interview_flow_id: flow.id,
                    interview_type_id: kind.id,
                    name: "First".to_string(),
                    order_index: 1,
                },
            ],
        )
        .await
        .unwrap();

        let steps = super::Entity::find()
            .filter(super::Column::InterviewFlowId.eq(flow.id))
            .order_by_asc(super::Column::OrderIndex)
            .all(&db)
            .await
            .unwrap();

        let names: Vec<&str> = steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
