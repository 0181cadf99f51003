use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, QueryFilter, Set};
use serde::{Deserialize, Serialize};

/// Represents a hiring company in the `companies` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique company name.
    pub name: String,
    /// Timestamp when the company was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the company was last updated.
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee::Entity")]
    Employee,

    #[sea_orm(has_many = "super::position::Entity")]
    Position,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Position.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new company with the given (unique) name.
    pub async fn create(db: &DatabaseConnection, name: &str) -> Result<Self, DbErr> {
        let company = ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        company.insert(db).await
    }

    /// Looks up a company by its unique name.
    pub async fn find_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find().filter(Column::Name.eq(name)).one(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::Model;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_company_create_and_find() {
        let db = setup_test_db().await;

        let created = Model::create(&db, "TechCorp").await.unwrap();
        assert_eq!(created.name, "TechCorp");

        let found = Model::find_by_name(&db, "TechCorp").await.unwrap();
        assert_eq!(found.map(|c| c.id), Some(created.id));

        let missing = Model::find_by_name(&db, "NoSuchCorp").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_company_name_unique() {
        let db = setup_test_db().await;

        Model::create(&db, "TechCorp").await.unwrap();
        let duplicate = Model::create(&db, "TechCorp").await;
        assert!(duplicate.is_err());
    }
}
