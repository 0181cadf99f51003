use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, QueryFilter, Set};
use serde::{Deserialize, Serialize};

/// Lookup row for position locations. `state` is nullable (e.g. the
/// "Remote" location has no state).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::position::Entity")]
    Position,
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
        city: &str,
        state: Option<&str>,
        country: &str,
    ) -> Result<Self, DbErr> {
        let location = ActiveModel {
            city: Set(city.to_string()),
            state: Set(state.map(|s| s.to_string())),
            country: Set(country.to_string()),
            ..Default::default()
        };
        location.insert(db).await
    }

    pub async fn find_by_city(
        db: &DatabaseConnection,
        city: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find().filter(Column::City.eq(city)).one(db).await
    }
}
