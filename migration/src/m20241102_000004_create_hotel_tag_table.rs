use sea_orm_migration::{prelude::*, schema::*};

use super::m20241101_000002_create_tag_table::Tag;
use super::m20241102_000003_create_hotel_table::Hotel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HotelTag::Table)
                    .if_not_exists()
                    .col(pk_auto(HotelTag::Id))
                    .col(integer(HotelTag::HotelId))
                    .col(integer(HotelTag::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_tag_hotel_id")
                            .from(HotelTag::Table, HotelTag::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_tag_tag_id")
                            .from(HotelTag::Table, HotelTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotel_tag_pair")
                    .table(HotelTag::Table)
                    .col(HotelTag::HotelId)
                    .col(HotelTag::TagId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HotelTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HotelTag {
    Table,
    Id,
    HotelId,
    TagId,
}
