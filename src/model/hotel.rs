use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateHotelDto {
    pub name: String,
    #[serde(default, alias = "desc")]
    pub description: Option<String>,
    /// Name of an existing city
    pub city: String,
    /// Names of existing tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Auth service id of the user managing this hotel
    #[serde(default)]
    pub manager_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HotelDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HotelListDto {
    pub hotels: Vec<HotelDto>,
}
