use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Materials::Table)
                    .if_not_exists()
                    .col(pk_auto(Materials::Id))
                    .col(string(Materials::Name))
                    .col(text_null(Materials::Description))
                    .col(
                        integer(Materials::Quantity)
                            .check(Expr::col(Materials::Quantity).gte(0)),
                    )
                    .col(string(Materials::Unit))
                    .col(
                        timestamp_with_time_zone(Materials::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Materials::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Materials::DeletedAt))
                    .to_owned(),
            )
            .await?;

        // Every read filters on deleted_at IS NULL
        manager
            .create_index(
                Index::create()
                    .name("idx_materials_deleted_at")
                    .table(Materials::Table)
                    .col(Materials::DeletedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Materials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Materials {
    Table,
    Id,
    Name,
    Description,
    Quantity,
    Unit,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
