use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hotel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub city_id: i32,
    /// Auth service user id of the managing user
    pub manager_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::Id",
        on_update = "Cascade",
        on_delete = "NoAction"
    )]
    City,
    #[sea_orm(has_many = "super::hotel_tag::Entity")]
    HotelTag,
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::hotel_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HotelTag.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::hotel_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::hotel_tag::Relation::Hotel.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
