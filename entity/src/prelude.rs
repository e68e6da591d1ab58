pub use super::city::Entity as City;
pub use super::hotel::Entity as Hotel;
pub use super::hotel_tag::Entity as HotelTag;
pub use super::tag::Entity as Tag;
