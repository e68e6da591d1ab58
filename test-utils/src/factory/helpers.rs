//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a hotel along with its city and the given number of tags.
///
/// All entities are created with default values. Use the individual factories if you
/// need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
/// - `tag_count` - Number of tags to create and attach to the hotel
///
/// # Returns
/// - `Ok((city, tags, hotel))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_hotel_with_dependencies(
    db: &DatabaseConnection,
    tag_count: usize,
) -> Result<
    (
        entity::city::Model,
        Vec<entity::tag::Model>,
        entity::hotel::Model,
    ),
    DbErr,
> {
    let city = crate::factory::city::create_city(db).await?;

    let mut tags = Vec::with_capacity(tag_count);
    for _ in 0..tag_count {
        tags.push(crate::factory::tag::create_tag(db).await?);
    }

    let tag_ids: Vec<i32> = tags.iter().map(|t| t.id).collect();
    let hotel = crate::factory::hotel::HotelFactory::new(db, city.id)
        .tags(&tag_ids)
        .build()
        .await?;

    Ok((city, tags, hotel))
}
