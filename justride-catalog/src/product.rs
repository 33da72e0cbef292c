use justride_shared::ServiceCategory;
use serde::{Deserialize, Serialize};

use crate::browse::Facets;

/// Agent who handles bookings for a catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Agent {
    pub name: String,
    pub phone: String,
}

impl Agent {
    pub fn new(name: &str, phone: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }
}

/// Parameters handed from a catalog view to the booking request flow.
/// Everything is copied; nothing points back into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingItem {
    pub category: ServiceCategory,
    pub item_name: String,
    pub details: String,
    pub price: u64,
    pub agent_name: String,
    pub agent_phone: String,
}

/// Common surface of every catalog entry
pub trait Bookable {
    fn category(&self) -> ServiceCategory;

    fn display_name(&self) -> &str;

    fn description(&self) -> &str;

    /// Details line snapshotted into the booking
    fn details(&self) -> String;

    fn price(&self) -> u64;

    fn agent(&self) -> Option<&Agent>;

    fn rating(&self) -> f64;

    fn reviews(&self) -> u32;

    /// Category-specific filters. Entries without one admit everything.
    fn admits(&self, _facets: &Facets) -> bool {
        true
    }

    /// Text matched by free-text search
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.display_name(), self.description()];
        if let Some(agent) = self.agent() {
            fields.push(agent.name.as_str());
        }
        fields
    }

    fn booking_item(&self) -> BookingItem {
        let (agent_name, agent_phone) = match self.agent() {
            Some(agent) => (agent.name.clone(), agent.phone.clone()),
            None => (String::new(), String::new()),
        };

        BookingItem {
            category: self.category(),
            item_name: self.display_name().to_string(),
            details: self.details(),
            price: self.price(),
            agent_name,
            agent_phone,
        }
    }
}

impl<T: Bookable + ?Sized> Bookable for &T {
    fn category(&self) -> ServiceCategory {
        (**self).category()
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn details(&self) -> String {
        (**self).details()
    }

    fn price(&self) -> u64 {
        (**self).price()
    }

    fn agent(&self) -> Option<&Agent> {
        (**self).agent()
    }

    fn rating(&self) -> f64 {
        (**self).rating()
    }

    fn reviews(&self) -> u32 {
        (**self).reviews()
    }

    fn admits(&self, facets: &Facets) -> bool {
        (**self).admits(facets)
    }

    fn search_fields(&self) -> Vec<&str> {
        (**self).search_fields()
    }
}

/// Self-drive vehicle. Priced per hour or per day, see [`crate::PricedVehicle`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub vehicle_type: String,
    pub name: String,
    pub description: String,
    pub hourly_rate: u64,
    pub daily_rate: u64,
    pub agent: Agent,
    pub features: Vec<String>,
    pub rating: f64,
    pub reviews: u32,
    pub mileage: String,
    pub seating: u32,
    pub transmission: String,
    pub fuel: String,
    pub location: String,
    pub availability: String,
}

impl Vehicle {
    pub fn is_two_wheeler(&self) -> bool {
        matches!(self.vehicle_type.as_str(), "Bike" | "Scooter")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourPackage {
    pub id: String,
    pub destination: String,
    pub region: String,
    pub duration_days: u32,
    pub nights: u32,
    pub starting_price: u64,
    pub agent: Agent,
    pub highlights: Vec<String>,
    pub rating: f64,
    pub reviews: u32,
    pub max_persons: u32,
    pub description: String,
    pub tags: Vec<String>,
}

impl TourPackage {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Bookable for TourPackage {
    fn category(&self) -> ServiceCategory {
        ServiceCategory::Tours
    }

    fn display_name(&self) -> &str {
        &self.destination
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn details(&self) -> String {
        format!("{}D / {}N - {}", self.duration_days, self.nights, self.description)
    }

    fn admits(&self, facets: &Facets) -> bool {
        facets.tag.as_deref().map_or(true, |tag| self.has_tag(tag))
    }

    fn price(&self) -> u64 {
        self.starting_price
    }

    fn agent(&self) -> Option<&Agent> {
        Some(&self.agent)
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn reviews(&self) -> u32 {
        self.reviews
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TicketMode {
    Train,
    Bus,
    Flight,
}

/// Third-party ticketing platform. Platforms carry no agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketPlatform {
    pub id: String,
    pub mode: TicketMode,
    pub name: String,
    pub description: String,
    pub sample_route: String,
    pub average_price: u64,
    pub rating: f64,
}

impl Bookable for TicketPlatform {
    fn category(&self) -> ServiceCategory {
        ServiceCategory::Tickets
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn details(&self) -> String {
        self.description.clone()
    }

    fn price(&self) -> u64 {
        self.average_price
    }

    fn agent(&self) -> Option<&Agent> {
        None
    }

    fn admits(&self, facets: &Facets) -> bool {
        facets.ticket_mode.map_or(true, |mode| self.mode == mode)
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn reviews(&self) -> u32 {
        0
    }
}

/// Packers and movers vendor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mover {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base_price: u64,
    pub per_km: u64,
    pub per_item: u64,
    pub rating: f64,
    pub reviews: u32,
    pub services: Vec<String>,
    pub agent: Agent,
    pub coverage: String,
}

impl Bookable for Mover {
    fn category(&self) -> ServiceCategory {
        ServiceCategory::Movers
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn details(&self) -> String {
        self.description.clone()
    }

    fn price(&self) -> u64 {
        self.base_price
    }

    fn agent(&self) -> Option<&Agent> {
        Some(&self.agent)
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn reviews(&self) -> u32 {
        self.reviews
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeddingCar {
    pub id: String,
    pub name: String,
    pub class: String,
    pub price: u64,
    pub rating: f64,
    pub reviews: u32,
    pub features: Vec<String>,
    pub agent: Agent,
}

impl Bookable for WeddingCar {
    fn category(&self) -> ServiceCategory {
        ServiceCategory::Wedding
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.class
    }

    fn details(&self) -> String {
        let features: Vec<&str> = self.features.iter().take(3).map(String::as_str).collect();
        format!("{} • Includes: {}...", self.class, features.join(", "))
    }

    fn admits(&self, facets: &Facets) -> bool {
        facets
            .wedding_class
            .as_deref()
            .map_or(true, |class| self.class.eq_ignore_ascii_case(class))
    }

    fn price(&self) -> u64 {
        self.price
    }

    fn agent(&self) -> Option<&Agent> {
        Some(&self.agent)
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn reviews(&self) -> u32 {
        self.reviews
    }
}

/// Multi-day trip planned by a vendor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerPackage {
    pub id: String,
    pub vendor: String,
    pub package: String,
    pub days: u32,
    pub group_size: String,
    pub best_season: String,
    pub difficulty: String,
    pub price: u64,
    pub route: String,
    pub highlights: Vec<String>,
    pub includes: Vec<String>,
    pub rating: f64,
    pub reviews: u32,
    pub agent: Agent,
}

impl Bookable for PlannerPackage {
    fn category(&self) -> ServiceCategory {
        ServiceCategory::Planner
    }

    fn display_name(&self) -> &str {
        &self.package
    }

    fn description(&self) -> &str {
        &self.route
    }

    fn details(&self) -> String {
        format!("{} Days • Route: {}", self.days, self.route)
    }

    fn price(&self) -> u64 {
        self.price
    }

    fn agent(&self) -> Option<&Agent> {
        Some(&self.agent)
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn reviews(&self) -> u32 {
        self.reviews
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.package, &self.route, &self.vendor, &self.agent.name]
    }
}
