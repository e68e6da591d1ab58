//! Hotel data repository: transactional creation and aggregated listing.
//!
//! A hotel is written together with its tag associations inside one transaction so that
//! a hotel never becomes visible with only part of its tags. Listing reads one flat row
//! per hotel-tag pair and folds the rows with `HotelAggregator`.

pub mod aggregate;

use futures::TryStreamExt;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select, TransactionTrait,
};

use crate::server::{
    data::{city, tag},
    error::catalog::CatalogError,
    model::hotel::{CreateHotelParams, Hotel},
};

use self::aggregate::{HotelAggregator, HotelRow};

const ENTITY: &str = "hotel";

pub struct HotelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a hotel in the named city and attaches the named tags, all or nothing.
    ///
    /// The name and city are checked before the transaction opens. Inside the
    /// transaction the hotel row is inserted first, then each tag is verified and linked
    /// in the given order. The first failure rolls back everything written so far.
    ///
    /// # Returns
    /// - `Ok(id)` - Generated id of the committed hotel
    /// - `Err(CatalogError::AlreadyExists)` - A hotel with this name exists, either at the
    ///   pre-check or as a unique violation at insert time
    /// - `Err(CatalogError::CityNotFound)` - The city does not exist
    /// - `Err(CatalogError::TagNotFound)` - One of the tags does not exist
    /// - `Err(CatalogError::InsertionFailed)` - A write inside the transaction failed
    /// - `Err(CatalogError::Internal)` - Connection, begin or commit failure
    pub async fn create(&self, params: CreateHotelParams) -> Result<i32, CatalogError> {
        if find_id_by_name(self.db, &params.name).await?.is_some() {
            return Err(CatalogError::AlreadyExists {
                entity: ENTITY,
                name: params.name,
            });
        }

        if city::find_id_by_name(self.db, &params.city_name)
            .await?
            .is_none()
        {
            return Err(CatalogError::CityNotFound(params.city_name));
        }

        // Dropping an uncommitted transaction rolls it back, which covers cancellation.
        let txn = self.db.begin().await?;

        match insert_with_tags(&txn, &params).await {
            Ok(hotel_id) => {
                txn.commit().await?;

                tracing::info!(
                    "Created hotel '{}' (id {}) in {} with {} tag(s)",
                    params.name,
                    hotel_id,
                    params.city_name,
                    params.tag_names.len()
                );

                Ok(hotel_id)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!(
                        "Failed to roll back creation of hotel '{}': {}",
                        params.name,
                        rollback_err
                    );
                }

                Err(err)
            }
        }
    }

    /// Gets every hotel with its city and tags, ordered by hotel id.
    ///
    /// # Returns
    /// - `Ok(Vec<Hotel>)` - All hotels, empty when there are none
    /// - `Err(CatalogError::Internal)` - Query failed or a row could not be read
    pub async fn get_all(&self) -> Result<Vec<Hotel>, CatalogError> {
        self.fold(joined_rows()).await
    }

    /// Gets the hotels managed by the given user, ordered by hotel id.
    ///
    /// # Returns
    /// - `Ok(Vec<Hotel>)` - Hotels whose manager is `manager_id`
    /// - `Err(CatalogError::Internal)` - Query failed or a row could not be read
    pub async fn get_by_manager(&self, manager_id: i64) -> Result<Vec<Hotel>, CatalogError> {
        self.fold(joined_rows().filter(entity::hotel::Column::ManagerId.eq(manager_id)))
            .await
    }

    /// Streams the joined rows into the aggregator; the first unreadable row aborts.
    async fn fold(&self, query: Select<entity::hotel::Entity>) -> Result<Vec<Hotel>, CatalogError> {
        let mut rows = query.into_model::<HotelRow>().stream(self.db).await?;

        let mut aggregator = HotelAggregator::new();
        while let Some(row) = rows.try_next().await? {
            aggregator.push(row);
        }

        Ok(aggregator.finish())
    }
}

/// Looks up the id of the hotel with exactly the given name.
pub async fn find_id_by_name<C: ConnectionTrait>(conn: &C, name: &str) -> Result<Option<i32>, DbErr> {
    entity::prelude::Hotel::find()
        .select_only()
        .column(entity::hotel::Column::Id)
        .filter(entity::hotel::Column::Name.eq(name))
        .into_tuple::<i32>()
        .one(conn)
        .await
}

/// Writes the hotel row and its tag links on an open transaction.
///
/// Never commits or rolls back; the caller owns the transaction outcome.
pub(in crate::server::data) async fn insert_with_tags(
    txn: &DatabaseTransaction,
    params: &CreateHotelParams,
) -> Result<i32, CatalogError> {
    let hotel_id = insert_hotel(txn, params).await?;

    for tag_name in &params.tag_names {
        let Some(tag_id) = tag::find_id_by_name(txn, tag_name).await? else {
            return Err(CatalogError::TagNotFound(tag_name.clone()));
        };

        entity::hotel_tag::ActiveModel {
            hotel_id: ActiveValue::Set(hotel_id),
            tag_id: ActiveValue::Set(tag_id),
            ..Default::default()
        }
        .insert(txn)
        .await
        .map_err(|source| CatalogError::InsertionFailed {
            entity: "hotel tag",
            source,
        })?;
    }

    Ok(hotel_id)
}

/// Inserts the hotel row, resolving its city by name inside the transaction.
async fn insert_hotel(
    txn: &DatabaseTransaction,
    params: &CreateHotelParams,
) -> Result<i32, CatalogError> {
    // The city passed the pre-check but may have been deleted since.
    let Some(city_id) = city::find_id_by_name(txn, &params.city_name).await? else {
        return Err(CatalogError::InsertionFailed {
            entity: ENTITY,
            source: DbErr::RecordNotFound(format!(
                "City '{}' disappeared before insert",
                params.city_name
            )),
        });
    };

    let hotel = entity::hotel::ActiveModel {
        name: ActiveValue::Set(params.name.clone()),
        description: ActiveValue::Set(params.description.clone()),
        city_id: ActiveValue::Set(city_id),
        manager_id: ActiveValue::Set(params.manager_id),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(|e| CatalogError::from_insert(ENTITY, &params.name, e))?;

    Ok(hotel.id)
}

/// Builds the hotel × city × tag join, one row per hotel-tag pair.
///
/// Hotels without tags still yield one row with a null tag name.
fn joined_rows() -> Select<entity::hotel::Entity> {
    entity::prelude::Hotel::find()
        .select_only()
        .column_as(entity::hotel::Column::Id, "hotel_id")
        .column_as(entity::hotel::Column::Name, "hotel_name")
        .column_as(entity::hotel::Column::Description, "hotel_description")
        .column_as(entity::city::Column::Name, "city_name")
        .column_as(entity::tag::Column::Name, "tag_name")
        .join(JoinType::InnerJoin, entity::hotel::Relation::City.def())
        .join(JoinType::LeftJoin, entity::hotel::Relation::HotelTag.def())
        .join(JoinType::LeftJoin, entity::hotel_tag::Relation::Tag.def())
        .order_by_asc(entity::hotel::Column::Id)
        .order_by_asc(entity::hotel_tag::Column::Id)
}
