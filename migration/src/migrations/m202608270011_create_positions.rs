use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608270011_create_positions"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("positions"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("company_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("interview_flow_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("position_status_id")).integer().null())
                    .col(ColumnDef::new(Alias::new("location_id")).integer().null())
                    .col(ColumnDef::new(Alias::new("employment_type_id")).integer().null())
                    .col(ColumnDef::new(Alias::new("title")).string().not_null())
                    .col(ColumnDef::new(Alias::new("description")).string().null())
                    .col(ColumnDef::new(Alias::new("job_description")).string().null())
                    .col(ColumnDef::new(Alias::new("requirements")).string().null())
                    .col(ColumnDef::new(Alias::new("responsibilities")).string().null())
                    .col(ColumnDef::new(Alias::new("salary_min")).double().null())
                    .col(ColumnDef::new(Alias::new("salary_max")).double().null())
                    .col(ColumnDef::new(Alias::new("benefits")).string().null())
                    .col(ColumnDef::new(Alias::new("company_description")).string().null())
                    .col(ColumnDef::new(Alias::new("application_deadline")).date().null())
                    .col(ColumnDef::new(Alias::new("contact_info")).string().null())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("positions"), Alias::new("company_id"))
                            .to(Alias::new("companies"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("positions"), Alias::new("interview_flow_id"))
                            .to(Alias::new("interview_flows"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("positions"), Alias::new("position_status_id"))
                            .to(Alias::new("position_statuses"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("positions"), Alias::new("location_id"))
                            .to(Alias::new("locations"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("positions"), Alias::new("employment_type_id"))
                            .to(Alias::new("employment_types"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("positions")).to_owned())
            .await
    }
}
