//! Folding of flat hotel join rows into nested hotels.
//!
//! The listing query joins `hotel`, `city`, `hotel_tag` and `tag`, yielding one row per
//! hotel-tag pair, or a single row with a null tag for a hotel without tags. The
//! `HotelAggregator` folds those rows back into one `Hotel` per id.

use indexmap::IndexMap;
use sea_orm::FromQueryResult;

use crate::server::model::hotel::Hotel;

/// One row of the hotel × tag left join.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct HotelRow {
    pub hotel_id: i32,
    pub hotel_name: String,
    pub hotel_description: Option<String>,
    pub city_name: String,
    /// `None` when the hotel has no tags.
    pub tag_name: Option<String>,
}

/// Builder keyed by hotel id that accumulates join rows in first-seen order.
///
/// Each non-null tag row appends exactly one tag. The join never yields the same
/// (hotel, tag) pair twice, so no deduplication happens here. The city is taken from
/// the first row seen for a hotel; later rows for the same hotel carry the same city.
#[derive(Debug, Default)]
pub struct HotelAggregator {
    hotels: IndexMap<i32, Hotel>,
}

impl HotelAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one row into the hotel it belongs to, creating the hotel on first sight.
    pub fn push(&mut self, row: HotelRow) {
        let HotelRow {
            hotel_id,
            hotel_name,
            hotel_description,
            city_name,
            tag_name,
        } = row;

        let hotel = self.hotels.entry(hotel_id).or_insert_with(|| Hotel {
            id: hotel_id,
            name: hotel_name,
            description: hotel_description,
            city: city_name,
            tags: Vec::new(),
        });

        if let Some(tag) = tag_name {
            hotel.tags.push(tag);
        }
    }

    /// Consumes the builder, returning hotels in the order their ids were first seen.
    pub fn finish(self) -> Vec<Hotel> {
        self.hotels.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(rows: Vec<HotelRow>) -> Vec<Hotel> {
        let mut aggregator = HotelAggregator::new();
        for row in rows {
            aggregator.push(row);
        }
        aggregator.finish()
    }

    fn row(id: i32, name: &str, desc: &str, city: &str, tag: Option<&str>) -> HotelRow {
        HotelRow {
            hotel_id: id,
            hotel_name: name.to_string(),
            hotel_description: Some(desc.to_string()),
            city_name: city.to_string(),
            tag_name: tag.map(str::to_string),
        }
    }

    fn sample_rows() -> Vec<HotelRow> {
        vec![
            row(1, "H1", "d", "CityA", Some("Wifi")),
            row(1, "H1", "d", "CityA", Some("Pool")),
            row(2, "H2", "", "CityB", None),
        ]
    }

    /// Tests folding tagged and untagged hotels.
    ///
    /// Expected: two hotels, H1 with both tags and CityA, H2 without tags and CityB
    #[test]
    fn folds_rows_into_hotels_with_tags() {
        let hotels = aggregate(sample_rows());

        assert_eq!(hotels.len(), 2);

        let h1 = hotels.iter().find(|h| h.id == 1).unwrap();
        assert_eq!(h1.name, "H1");
        assert_eq!(h1.city, "CityA");
        assert_eq!(h1.description.as_deref(), Some("d"));
        let mut tags = h1.tags.clone();
        tags.sort();
        assert_eq!(tags, vec!["Pool".to_string(), "Wifi".to_string()]);

        let h2 = hotels.iter().find(|h| h.id == 2).unwrap();
        assert_eq!(h2.name, "H2");
        assert_eq!(h2.city, "CityB");
        assert!(h2.tags.is_empty());
    }

    /// Tests that an empty row sequence is not an error.
    ///
    /// Expected: empty hotel list
    #[test]
    fn empty_input_yields_no_hotels() {
        let hotels = aggregate(Vec::new());

        assert!(hotels.is_empty());
    }

    /// Tests that folding the same rows twice gives identical results.
    ///
    /// Expected: equal hotel lists
    #[test]
    fn aggregation_is_repeatable() {
        let first = aggregate(sample_rows());
        let second = aggregate(sample_rows());

        assert_eq!(first, second);
    }

    /// Tests that hotel ids appear once each, in the order first seen.
    ///
    /// Expected: ids [3, 1, 2] even though rows for hotel 3 are interleaved
    #[test]
    fn keeps_first_seen_order_without_duplicate_ids() {
        let hotels = aggregate(vec![
            row(3, "H3", "", "CityC", Some("Spa")),
            row(1, "H1", "", "CityA", None),
            row(3, "H3", "", "CityC", Some("Gym")),
            row(2, "H2", "", "CityB", Some("Wifi")),
        ]);

        let ids: Vec<i32> = hotels.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(hotels[0].tags, vec!["Spa".to_string(), "Gym".to_string()]);
    }

    /// Tests that hotel fields come from the first row seen for that hotel.
    ///
    /// Expected: city and description of the first row are kept
    #[test]
    fn keeps_fields_from_first_row() {
        let mut aggregator = HotelAggregator::new();
        aggregator.push(row(1, "H1", "first", "CityA", Some("Wifi")));
        aggregator.push(row(1, "H1", "second", "CityA", Some("Pool")));

        let hotels = aggregator.finish();
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].description.as_deref(), Some("first"));
        assert_eq!(hotels[0].tags.len(), 2);
    }

    /// Tests a hotel whose description column is null.
    ///
    /// Expected: description stays None
    #[test]
    fn keeps_null_description() {
        let hotels = aggregate(vec![HotelRow {
            hotel_id: 7,
            hotel_name: "Plain".to_string(),
            hotel_description: None,
            city_name: "CityA".to_string(),
            tag_name: None,
        }]);

        assert_eq!(hotels.len(), 1);
        assert!(hotels[0].description.is_none());
        assert!(hotels[0].tags.is_empty());
    }
}
