use sea_orm_migration::{prelude::*, schema::*};

use super::m20241101_000001_create_city_table::City;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(pk_auto(Hotel::Id))
                    .col(string_uniq(Hotel::Name))
                    .col(text_null(Hotel::Description))
                    .col(integer(Hotel::CityId))
                    .col(big_integer_null(Hotel::ManagerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_city_id")
                            .from(Hotel::Table, Hotel::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotel_manager_id")
                    .table(Hotel::Table)
                    .col(Hotel::ManagerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hotel {
    Table,
    Id,
    Name,
    Description,
    CityId,
    ManagerId,
}
