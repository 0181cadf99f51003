use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use serde::{Deserialize, Serialize};

/// A company employee who can be assigned to conduct interviews.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Employer (foreign key to `companies`).
    pub company_id: i64,
    pub name: String,
    /// Unique work email address.
    pub email: String,
    pub role: String,
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
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        company_id: i64,
        name: &str,
        email: &str,
        role: &str,
    ) -> Result<Self, DbErr> {
        let employee = ActiveModel {
            company_id: Set(company_id),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            role: Set(role.to_string()),
            ..Default::default()
        };
        employee.insert(db).await
    }
}
