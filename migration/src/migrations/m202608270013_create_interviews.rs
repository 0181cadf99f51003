use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608270013_create_interviews"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("interviews"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("application_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("interview_step_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("employee_id")).integer().null())
                    .col(ColumnDef::new(Alias::new("interview_result_id")).integer().null())
                    .col(ColumnDef::new(Alias::new("interview_date")).timestamp().null())
                    .col(ColumnDef::new(Alias::new("score")).integer().null())
                    .col(ColumnDef::new(Alias::new("notes")).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("interviews"), Alias::new("application_id"))
                            .to(Alias::new("applications"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("interviews"), Alias::new("interview_step_id"))
                            .to(Alias::new("interview_steps"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("interviews"), Alias::new("employee_id"))
                            .to(Alias::new("employees"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("interviews"), Alias::new("interview_result_id"))
                            .to(Alias::new("interview_results"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("interviews")).to_owned())
            .await
    }
}
