pub mod browse;
pub mod data;
pub mod pricing;
pub mod product;

pub use browse::{browse, browse_vehicles, CatalogQuery, SortKey, VehicleClass};
pub use pricing::{PriceMode, PricedVehicle};
pub use product::{
    Agent, Bookable, BookingItem, Mover, PlannerPackage, TicketMode, TicketPlatform, TourPackage,
    Vehicle, WeddingCar,
};

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown price mode: {0}")]
    UnknownPriceMode(String),

    #[error("Catalog entry not found: {0}")]
    NotFound(String),
}
