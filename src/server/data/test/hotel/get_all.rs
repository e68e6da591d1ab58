use super::*;

/// Tests listing with no hotels.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_list_without_hotels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_city(db).await?;
    factory::create_tag(db).await?;

    let hotels = HotelRepository::new(db).get_all().await.unwrap();

    assert!(hotels.is_empty());

    Ok(())
}

/// Tests listing tagged and untagged hotels together.
///
/// Verifies the left join keeps hotels without tags and that each hotel appears once
/// with its own city.
///
/// Expected: two hotels in id order, the first with two tags and the second with none
#[tokio::test]
async fn aggregates_tags_per_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city_a = factory::city::CityFactory::new(db).name("CityA").build().await?;
    let city_b = factory::city::CityFactory::new(db).name("CityB").build().await?;
    let wifi = factory::tag::TagFactory::new(db).name("Wifi").build().await?;
    let pool = factory::tag::TagFactory::new(db).name("Pool").build().await?;

    let h1 = factory::hotel::HotelFactory::new(db, city_a.id)
        .name("H1")
        .description(Some("d"))
        .tags(&[wifi.id, pool.id])
        .build()
        .await?;
    let h2 = factory::hotel::HotelFactory::new(db, city_b.id)
        .name("H2")
        .description(Some(""))
        .build()
        .await?;

    let hotels = HotelRepository::new(db).get_all().await.unwrap();

    assert_eq!(hotels.len(), 2);
    assert_eq!(hotels[0].id, h1.id);
    assert_eq!(hotels[0].city, "CityA");
    assert_eq!(hotels[0].tags, vec!["Wifi".to_string(), "Pool".to_string()]);
    assert_eq!(hotels[1].id, h2.id);
    assert_eq!(hotels[1].city, "CityB");
    assert_eq!(hotels[1].description.as_deref(), Some(""));
    assert!(hotels[1].tags.is_empty());

    Ok(())
}

/// Tests a tag shared by several hotels.
///
/// Expected: each hotel lists the tag exactly once
#[tokio::test]
async fn shared_tag_listed_once_per_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let tag = factory::create_tag(db).await?;
    for _ in 0..3 {
        factory::hotel::HotelFactory::new(db, city.id)
            .tags(&[tag.id])
            .build()
            .await?;
    }

    let hotels = HotelRepository::new(db).get_all().await.unwrap();

    assert_eq!(hotels.len(), 3);
    assert!(hotels.iter().all(|h| h.tags == vec![tag.name.clone()]));

    Ok(())
}

/// Tests listing only the hotels of one manager.
///
/// Expected: only the hotels managed by user 7, with their tags intact
#[tokio::test]
async fn filters_hotels_by_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let tag = factory::create_tag(db).await?;

    let own = factory::hotel::HotelFactory::new(db, city.id)
        .manager_id(Some(7))
        .tags(&[tag.id])
        .build()
        .await?;
    factory::hotel::HotelFactory::new(db, city.id)
        .manager_id(Some(8))
        .build()
        .await?;
    factory::hotel::HotelFactory::new(db, city.id).build().await?;

    let hotels = HotelRepository::new(db).get_by_manager(7).await.unwrap();

    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].id, own.id);
    assert_eq!(hotels[0].tags, vec![tag.name.clone()]);

    Ok(())
}

/// Tests listing for a manager without hotels.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn manager_without_hotels_gets_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hotel::create_hotel(db, factory::create_city(db).await?.id).await?;

    let hotels = HotelRepository::new(db).get_by_manager(1).await.unwrap();

    assert!(hotels.is_empty());

    Ok(())
}

/// Tests a stored value that cannot be read back as a hotel row.
///
/// The hotel name is written as a non-UTF-8 blob, bypassing the entity types.
///
/// Expected: Err(Internal) instead of a partial list
#[tokio::test]
async fn unreadable_row_aborts_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    factory::hotel::create_hotel(db, city.id).await?;
    db.execute_unprepared(&format!(
        "INSERT INTO hotel (name, description, city_id) VALUES (X'DEADBEEF', NULL, {})",
        city.id
    ))
    .await?;

    let result = HotelRepository::new(db).get_all().await;

    assert!(matches!(result, Err(CatalogError::Internal(_))));

    Ok(())
}
