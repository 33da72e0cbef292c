use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pricing::{PriceMode, PricedVehicle};
use crate::product::{Bookable, TicketMode, Vehicle};
use crate::CatalogError;

/// Listing order. `Popular` keeps catalog order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Popular,
    RatingDesc,
    RatingAsc,
    PriceAsc,
    PriceDesc,
    ReviewsDesc,
}

impl SortKey {
    fn compare<T: Bookable>(&self, a: &T, b: &T) -> Ordering {
        match self {
            SortKey::Popular => Ordering::Equal,
            SortKey::RatingDesc => b.rating().total_cmp(&a.rating()),
            SortKey::RatingAsc => a.rating().total_cmp(&b.rating()),
            SortKey::PriceAsc => a.price().cmp(&b.price()),
            SortKey::PriceDesc => b.price().cmp(&a.price()),
            SortKey::ReviewsDesc => b.reviews().cmp(&a.reviews()),
        }
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(SortKey::Popular),
            "rating-desc" => Ok(SortKey::RatingDesc),
            "rating-asc" => Ok(SortKey::RatingAsc),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "reviews-desc" => Ok(SortKey::ReviewsDesc),
            other => Err(CatalogError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Per-category filters. `None` means "all"; a filter set for another
/// category has no effect.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Facets {
    /// Tours carrying this tag
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub ticket_mode: Option<TicketMode>,
    /// Wedding car class, e.g. `Luxury`
    #[serde(default)]
    pub wedding_class: Option<String>,
    /// Self-drive model type, e.g. `SUV`
    #[serde(default)]
    pub vehicle_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(flatten)]
    pub facets: Facets,
}

impl CatalogQuery {
    pub fn new(search: Option<&str>, sort: SortKey) -> Self {
        Self {
            search: search.map(str::to_string),
            sort,
            facets: Facets::default(),
        }
    }

    pub fn with_facets(mut self, facets: Facets) -> Self {
        self.facets = facets;
        self
    }

    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    fn matches<T: Bookable>(&self, needle: Option<&str>, entry: &T) -> bool {
        if !entry.admits(&self.facets) {
            return false;
        }
        match needle {
            None => true,
            Some(needle) => entry
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle)),
        }
    }

    /// Filter then sort. `sort_by` is stable, so entries the key considers
    /// equal stay in catalog order.
    fn apply<T: Bookable>(&self, entries: Vec<T>) -> Vec<T> {
        let needle = self.needle();
        let mut selected: Vec<T> = entries
            .into_iter()
            .filter(|entry| self.matches(needle.as_deref(), entry))
            .collect();
        selected.sort_by(|a, b| self.sort.compare(a, b));
        selected
    }
}

/// Browse any catalog slice
pub fn browse<'a, T: Bookable>(entries: &'a [T], query: &CatalogQuery) -> Vec<&'a T> {
    query.apply(entries.iter().collect())
}

/// Vehicle tab in the self-drive listing
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    #[default]
    All,
    Cars,
    Bikes,
}

impl VehicleClass {
    pub fn admits(&self, vehicle: &Vehicle) -> bool {
        match self {
            VehicleClass::All => true,
            VehicleClass::Cars => !vehicle.is_two_wheeler(),
            VehicleClass::Bikes => vehicle.is_two_wheeler(),
        }
    }
}

/// Browse self-drive vehicles quoted under `mode`; price sorts use that rate.
pub fn browse_vehicles<'a>(
    entries: &'a [Vehicle],
    class: VehicleClass,
    mode: PriceMode,
    query: &CatalogQuery,
) -> Vec<PricedVehicle<'a>> {
    let priced = entries
        .iter()
        .filter(|v| class.admits(v))
        .map(|v| v.priced(mode))
        .collect();
    query.apply(priced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::product::{TicketMode, TicketPlatform};

    fn names<T: Bookable>(entries: &[T]) -> Vec<String> {
        entries.iter().map(|e| e.display_name().to_string()).collect()
    }

    #[test]
    fn test_popular_keeps_catalog_order() {
        let listed = browse(data::tours(), &CatalogQuery::default());
        assert_eq!(names(&listed), names(data::tours()));
    }

    #[test]
    fn test_search_is_case_insensitive_over_agent() {
        let query = CatalogQuery::new(Some("ISLAND escapes"), SortKey::Popular);
        let listed = browse(data::tours(), &query);
        assert_eq!(names(&listed), vec!["Andaman Island Getaway"]);
    }

    #[test]
    fn test_blank_search_keeps_everything() {
        let query = CatalogQuery::new(Some("   "), SortKey::Popular);
        assert_eq!(browse(data::movers(), &query).len(), data::movers().len());
    }

    #[test]
    fn test_price_sort_ties_keep_catalog_order() {
        let platforms = vec![
            TicketPlatform {
                id: "a".into(),
                mode: TicketMode::Bus,
                name: "First".into(),
                description: String::new(),
                sample_route: String::new(),
                average_price: 500,
                rating: 4.5,
            },
            TicketPlatform {
                id: "b".into(),
                mode: TicketMode::Bus,
                name: "Cheap".into(),
                description: String::new(),
                sample_route: String::new(),
                average_price: 100,
                rating: 4.5,
            },
            TicketPlatform {
                id: "c".into(),
                mode: TicketMode::Train,
                name: "Second".into(),
                description: String::new(),
                sample_route: String::new(),
                average_price: 500,
                rating: 4.5,
            },
        ];

        let listed = browse(&platforms, &CatalogQuery::new(None, SortKey::PriceAsc));
        assert_eq!(names(&listed), vec!["Cheap", "First", "Second"]);

        let listed = browse(&platforms, &CatalogQuery::new(None, SortKey::RatingDesc));
        assert_eq!(names(&listed), vec!["First", "Cheap", "Second"]);
    }

    #[test]
    fn test_rating_desc_ties_in_real_catalog() {
        let listed = browse(data::wedding_cars(), &CatalogQuery::new(None, SortKey::RatingDesc));
        let top: Vec<String> = names(&listed).into_iter().take(4).collect();
        // Two 5.0 cars then two 4.9 cars, each pair in catalog order.
        assert_eq!(
            top,
            vec![
                "Mercedes S-Class",
                "Rolls Royce Phantom",
                "Range Rover Sport",
                "Vintage Rolls Royce"
            ]
        );
    }

    #[test]
    fn test_reviews_desc() {
        let listed = browse(data::movers(), &CatalogQuery::new(None, SortKey::ReviewsDesc));
        assert_eq!(listed[0].name, "Agarwal Packers & Movers");
        assert_eq!(listed[2].name, "Urban Company Movers");
    }

    #[test]
    fn test_vehicle_browse_sorts_by_mode_rate() {
        let listed = browse_vehicles(
            data::vehicles(),
            VehicleClass::Bikes,
            PriceMode::Daily,
            &CatalogQuery::new(None, SortKey::PriceDesc),
        );
        let prices: Vec<u64> = listed.iter().map(|v| v.price()).collect();
        assert_eq!(prices, vec![899, 599]);
    }

    #[test]
    fn test_tour_tag_facet() {
        let facets = Facets {
            tag: Some("Beach".to_string()),
            ..Facets::default()
        };
        let query = CatalogQuery::default().with_facets(facets);
        let listed = browse(data::tours(), &query);

        assert!(!listed.is_empty());
        assert!(listed.len() < data::tours().len());
        assert!(listed.iter().all(|t| t.has_tag("Beach")));
    }

    #[test]
    fn test_ticket_mode_facet_and_rating_asc() {
        let facets = Facets {
            ticket_mode: Some(TicketMode::Flight),
            ..Facets::default()
        };
        let query = CatalogQuery::new(None, SortKey::RatingAsc).with_facets(facets);
        let listed = browse(data::ticket_platforms(), &query);

        assert!(!listed.is_empty());
        assert!(listed.iter().all(|p| p.mode == TicketMode::Flight));
        let ratings: Vec<f64> = listed.iter().map(|p| p.rating).collect();
        assert!(ratings.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_wedding_class_facet() {
        let class = data::wedding_cars()[0].class.clone();
        let facets = Facets {
            wedding_class: Some(class.to_uppercase()),
            ..Facets::default()
        };
        let listed = browse(data::wedding_cars(), &CatalogQuery::default().with_facets(facets));

        assert!(!listed.is_empty());
        assert!(listed.iter().all(|c| c.class == class));
    }

    #[test]
    fn test_vehicle_type_facet() {
        let facets = Facets {
            vehicle_type: Some("Sedan".to_string()),
            ..Facets::default()
        };
        let listed = browse_vehicles(
            data::vehicles(),
            VehicleClass::All,
            PriceMode::Hourly,
            &CatalogQuery::default().with_facets(facets),
        );

        assert_eq!(names(&listed), vec!["Honda City 2024"]);
    }

    #[test]
    fn test_foreign_facet_is_ignored() {
        let facets = Facets {
            ticket_mode: Some(TicketMode::Bus),
            ..Facets::default()
        };
        let listed = browse(data::movers(), &CatalogQuery::default().with_facets(facets));
        assert_eq!(listed.len(), data::movers().len());
    }

    #[test]
    fn test_query_wire_format() {
        let query: CatalogQuery = serde_json::from_str(
            r#"{"search":"goa","sort":"rating-asc","tag":"Beach"}"#,
        )
        .unwrap();
        assert_eq!(query.sort, SortKey::RatingAsc);
        assert_eq!(query.facets.tag.as_deref(), Some("Beach"));
        assert!(query.facets.ticket_mode.is_none());
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("price-asc".parse::<SortKey>().unwrap(), SortKey::PriceAsc);
        let err = "cheapest".parse::<SortKey>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown sort key: cheapest");
    }
}
