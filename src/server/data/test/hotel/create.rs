use super::*;

/// Tests creating a hotel with a city and two tags, then reading it back.
///
/// Verifies that the hotel row and both association rows are committed and that the
/// listing folds them into one hotel with the tags in the given order.
///
/// Expected: Ok(id) and a single hotel Ritz in Paris tagged Wifi, Pool
#[tokio::test]
async fn creates_hotel_with_city_and_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::city::CityFactory::new(db).name("Paris").build().await?;
    factory::tag::TagFactory::new(db).name("Wifi").build().await?;
    factory::tag::TagFactory::new(db).name("Pool").build().await?;

    let repo = HotelRepository::new(db);
    let result = repo
        .create(CreateHotelParams {
            description: Some("Luxury".to_string()),
            ..params("Ritz", "Paris", &["Wifi", "Pool"])
        })
        .await;

    assert!(result.is_ok());
    let id = result.unwrap();

    let hotels = repo.get_all().await.unwrap();
    assert_eq!(
        hotels,
        vec![Hotel {
            id,
            name: "Ritz".to_string(),
            description: Some("Luxury".to_string()),
            city: "Paris".to_string(),
            tags: vec!["Wifi".to_string(), "Pool".to_string()],
        }]
    );
    assert_eq!(entity::prelude::HotelTag::find().count(db).await?, 2);

    Ok(())
}

/// Tests creating a hotel with no tags.
///
/// Expected: Ok with one hotel row and no association rows
#[tokio::test]
async fn creates_hotel_without_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;

    let result = HotelRepository::new(db)
        .create(params("Plain", &city.name, &[]))
        .await;

    assert!(result.is_ok());
    assert_eq!(entity::prelude::Hotel::find().count(db).await?, 1);
    assert_eq!(entity::prelude::HotelTag::find().count(db).await?, 0);

    Ok(())
}

/// Tests storing the manager of a hotel.
///
/// Expected: manager_id persisted on the hotel row
#[tokio::test]
async fn stores_manager_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;

    let id = HotelRepository::new(db)
        .create(CreateHotelParams {
            manager_id: Some(77),
            ..params("Managed", &city.name, &[])
        })
        .await
        .unwrap();

    let hotel = entity::prelude::Hotel::find_by_id(id).one(db).await?.unwrap();
    assert_eq!(hotel.manager_id, Some(77));
    assert_eq!(hotel.city_id, city.id);

    Ok(())
}

/// Tests creating a hotel whose name is already taken.
///
/// Expected: Err(AlreadyExists) and no new rows
#[tokio::test]
async fn rejects_duplicate_hotel_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let tag = factory::create_tag(db).await?;
    factory::hotel::HotelFactory::new(db, city.id)
        .name("Ritz")
        .build()
        .await?;

    let result = HotelRepository::new(db)
        .create(params("Ritz", &city.name, &[&tag.name]))
        .await;

    assert!(matches!(
        result,
        Err(CatalogError::AlreadyExists { entity: "hotel", .. })
    ));
    assert_eq!(entity::prelude::Hotel::find().count(db).await?, 1);
    assert_eq!(entity::prelude::HotelTag::find().count(db).await?, 0);

    Ok(())
}

/// Tests creating a hotel in a city that does not exist.
///
/// Expected: Err(CityNotFound) naming the city, no rows written
#[tokio::test]
async fn rejects_unknown_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = HotelRepository::new(db)
        .create(params("X", "Atlantis", &[]))
        .await;

    assert!(matches!(result, Err(CatalogError::CityNotFound(ref city)) if city == "Atlantis"));
    assert_eq!(entity::prelude::Hotel::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a missing tag rolls back the hotel and the links already written.
///
/// The first tag exists and is linked before the second one is found missing, so
/// both the hotel row and one association row were written inside the transaction.
///
/// Expected: Err(TagNotFound) and zero hotel and association rows
#[tokio::test]
async fn rolls_back_when_tag_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::city::CityFactory::new(db).name("Paris").build().await?;
    factory::tag::TagFactory::new(db).name("Wifi").build().await?;

    let result = HotelRepository::new(db)
        .create(params("Ritz", "Paris", &["Wifi", "Ghost"]))
        .await;

    assert!(matches!(result, Err(CatalogError::TagNotFound(ref tag)) if tag == "Ghost"));
    assert_eq!(entity::prelude::Hotel::find().count(db).await?, 0);
    assert_eq!(entity::prelude::HotelTag::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a failed link insert rolls back the hotel and the earlier link.
///
/// The same tag listed twice passes the existence check both times, so the second
/// link insert reaches the unique (hotel_id, tag_id) index and fails.
///
/// Expected: Err(InsertionFailed) for the hotel tag and zero hotel and association rows
#[tokio::test]
async fn rolls_back_when_tag_link_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::city::CityFactory::new(db).name("Paris").build().await?;
    factory::tag::TagFactory::new(db).name("Wifi").build().await?;

    let result = HotelRepository::new(db)
        .create(params("Ritz", "Paris", &["Wifi", "Wifi"]))
        .await;

    assert!(matches!(
        result,
        Err(CatalogError::InsertionFailed { entity: "hotel tag", .. })
    ));
    assert_eq!(entity::prelude::Hotel::find().count(db).await?, 0);
    assert_eq!(entity::prelude::HotelTag::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a rolled back attempt does not block a later one.
///
/// Expected: first attempt fails with TagNotFound, second succeeds once the tag exists
#[tokio::test]
async fn retries_after_rollback() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::city::CityFactory::new(db).name("Paris").build().await?;

    let repo = HotelRepository::new(db);
    let first = repo.create(params("Ritz", "Paris", &["Spa"])).await;
    assert!(matches!(first, Err(CatalogError::TagNotFound(_))));

    factory::tag::TagFactory::new(db).name("Spa").build().await?;

    let second = repo.create(params("Ritz", "Paris", &["Spa"])).await;
    assert!(second.is_ok());
    assert_eq!(entity::prelude::Hotel::find().count(db).await?, 1);
    assert_eq!(entity::prelude::HotelTag::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a unique violation at insert time is reported as a duplicate.
///
/// Writes directly on a transaction, skipping the pre-check, which is what happens
/// when a concurrent request inserts the same name between check and insert.
///
/// Expected: Err(AlreadyExists) and only the original hotel after rollback
#[tokio::test]
async fn reports_insert_time_unique_violation_as_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    factory::hotel::HotelFactory::new(db, city.id)
        .name("Ritz")
        .build()
        .await?;

    let txn = db.begin().await?;
    let result = insert_with_tags(&txn, &params("Ritz", &city.name, &[])).await;
    txn.rollback().await?;

    assert!(matches!(
        result,
        Err(CatalogError::AlreadyExists { entity: "hotel", ref name }) if name == "Ritz"
    ));
    assert_eq!(entity::prelude::Hotel::find().count(db).await?, 1);

    Ok(())
}

/// Tests a city that vanishes between the pre-check and the insert.
///
/// Expected: Err(InsertionFailed) from inside the transaction
#[tokio::test]
async fn reports_vanished_city_as_insertion_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    let result = insert_with_tags(&txn, &params("Ritz", "Gone", &[])).await;
    txn.rollback().await?;

    assert!(matches!(
        result,
        Err(CatalogError::InsertionFailed { entity: "hotel", .. })
    ));
    assert_eq!(entity::prelude::Hotel::find().count(db).await?, 0);

    Ok(())
}
