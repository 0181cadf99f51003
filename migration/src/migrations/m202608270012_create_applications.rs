use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608270012_create_applications"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("applications"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("position_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("application_status_id")).integer().null())
                    .col(ColumnDef::new(Alias::new("candidate_name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("candidate_email")).string().not_null())
                    .col(ColumnDef::new(Alias::new("application_date")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("notes")).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("applications"), Alias::new("position_id"))
                            .to(Alias::new("positions"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("applications"), Alias::new("application_status_id"))
                            .to(Alias::new("application_statuses"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("applications")).to_owned())
            .await
    }
}
