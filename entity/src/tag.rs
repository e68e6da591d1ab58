use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hotel_tag::Entity")]
    HotelTag,
}

impl Related<super::hotel_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HotelTag.def()
    }
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        super::hotel_tag::Relation::Hotel.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::hotel_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
