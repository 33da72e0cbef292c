//! Built-in catalog. Entries are fixed at build time and never mutated.

use std::sync::LazyLock;

use justride_shared::ServiceCategory;

use crate::pricing::PriceMode;
use crate::product::{
    Agent, Bookable, BookingItem, Mover, PlannerPackage, TicketMode, TicketPlatform, TourPackage,
    Vehicle, WeddingCar,
};
use crate::CatalogError;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: &str,
    vehicle_type: &str,
    name: &str,
    description: &str,
    hourly_rate: u64,
    daily_rate: u64,
    agent: Agent,
    features: &[&str],
    rating: f64,
    reviews: u32,
    mileage: &str,
    seating: u32,
    transmission: &str,
    fuel: &str,
    location: &str,
    availability: &str,
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        vehicle_type: vehicle_type.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        hourly_rate,
        daily_rate,
        agent,
        features: strings(features),
        rating,
        reviews,
        mileage: mileage.to_string(),
        seating,
        transmission: transmission.to_string(),
        fuel: fuel.to_string(),
        location: location.to_string(),
        availability: availability.to_string(),
    }
}

static VEHICLES: LazyLock<Vec<Vehicle>> = LazyLock::new(|| {
    vec![
        vehicle(
            "hc1", "Sedan", "Honda City 2024",
            "Comfortable compact sedan perfect for city drives",
            299, 2499, Agent::new("Rajesh Kumar", "+91 98765 43210"),
            &["AC", "Power Steering", "ABS Brakes"],
            4.8, 342, "15 km/l", 5, "Manual", "Petrol", "Downtown Hub", "Available Now",
        ),
        vehicle(
            "tc1", "SUV", "Thar",
            "Spacious SUV for family trips and offroad adventures",
            599, 4999, Agent::new("Priya Sharma", "+91 98765 43211"),
            &["4WD", "Sunroof", "Premium Sound"],
            4.9, 528, "12 km/l", 7, "Automatic", "Diesel", "Central Station", "Available Now",
        ),
        vehicle(
            "bx1", "Premium Sedan", "Tata Sierra",
            "Luxury driving experience with premium features",
            999, 7999, Agent::new("Vikram Singh", "+91 98765 43212"),
            &["Leather Seats", "Apple CarPlay", "Panoramic Roof"],
            5.0, 156, "14 km/l", 5, "Automatic", "Petrol", "Airport Terminal", "Available Now",
        ),
        vehicle(
            "mv1", "Microvan", "Mahindra Xylo",
            "Perfect for group travel with spacious interiors",
            449, 3999, Agent::new("Arjun Patel", "+91 98765 43213"),
            &["AC", "Wide Seats", "DVD Player"],
            4.7, 289, "13 km/l", 8, "Manual", "Diesel", "Highway Terminal", "Available Now",
        ),
        vehicle(
            "re1", "Bike", "Royal Enfield Classic 350",
            "Classic bike for smooth highway and city rides",
            149, 899, Agent::new("Mohan Verma", "+91 98765 43214"),
            &["ABS Brakes", "LED Headlight"],
            4.6, 1247, "35 km/l", 2, "Manual", "Petrol", "City Center", "Multiple Available",
        ),
        vehicle(
            "ha2", "Scooter", "Honda Activa 6G",
            "Reliable scooter for urban commutes",
            99, 599, Agent::new("Sneha Singh", "+91 98765 43215"),
            &["LED Lights", "Storage Box"],
            4.5, 2156, "45 km/l", 2, "Automatic", "Petrol", "Metro Stations", "Multiple Available",
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn tour(
    id: &str,
    destination: &str,
    region: &str,
    duration_days: u32,
    nights: u32,
    starting_price: u64,
    agent: Agent,
    highlights: &[&str],
    rating: f64,
    reviews: u32,
    max_persons: u32,
    description: &str,
    tags: &[&str],
) -> TourPackage {
    TourPackage {
        id: id.to_string(),
        destination: destination.to_string(),
        region: region.to_string(),
        duration_days,
        nights,
        starting_price,
        agent,
        highlights: strings(highlights),
        rating,
        reviews,
        max_persons,
        description: description.to_string(),
        tags: strings(tags),
    }
}

static TOURS: LazyLock<Vec<TourPackage>> = LazyLock::new(|| {
    vec![
        tour(
            "t1", "Goa Beach Paradise", "Goa", 3, 2, 12999,
            Agent::new("Goa Travels Ltd", "+91 98765 43220"),
            &["Baga Beach", "Fort Aguada", "Spice Plantation", "Water Sports"],
            4.7, 523, 4,
            "Experience the vibrant beaches and nightlife of Goa with comfortable stays and curated activities.",
            &["Best Seller", "Beach"],
        ),
        tour(
            "t2", "Himalayan Adventure", "Himachal", 5, 4, 25999,
            Agent::new("Mountain Quest Tours", "+91 98765 43221"),
            &["Manali Valley", "Rohtang Pass", "Paragliding", "Adventure Sports"],
            4.9, 687, 6,
            "Thrilling mountain adventure with scenic landscapes and curated adventure activities.",
            &["Adventure", "Trending"],
        ),
        tour(
            "t3", "Kerala Backwaters Tour", "Kerala", 4, 3, 18999,
            Agent::new("Kerala Tourism Board", "+91 98765 43222"),
            &["Houseboat Cruise", "Chinese Fishing Nets", "Spice Gardens", "Lagoons"],
            4.8, 742, 4,
            "Serene backwater experience with traditional houseboat stays and local cuisine.",
            &["Relax", "Family"],
        ),
        tour(
            "t4", "Rajasthan Royal Circuit", "Rajasthan", 6, 5, 35999,
            Agent::new("Royal Rajasthan Tours", "+91 98765 43223"),
            &["Jaipur", "Pushkar", "Udaipur", "Jaisalmer", "Camel Safari"],
            5.0, 891, 8,
            "Experience the grandeur of royal palaces and desert safaris in an iconic itinerary.",
            &["Luxury", "Best Seller"],
        ),
        tour(
            "t5", "Northeast Explorer", "Northeast", 7, 6, 42999,
            Agent::new("Northeast Adventures", "+91 98765 43224"),
            &["Meghalaya", "Assam", "Arunachal Pradesh", "Tribal Villages"],
            4.6, 345, 6,
            "Discover the untouched beauty of the Northeast with local guides and cultural experiences.",
            &["Offbeat"],
        ),
        tour(
            "t6", "Andaman Island Getaway", "Andaman", 4, 3, 28999,
            Agent::new("Island Escapes", "+91 98765 43225"),
            &["Port Blair", "Havelock Island", "Scuba Diving", "Coral Reefs"],
            4.8, 612, 4,
            "Paradise islands with pristine beaches, coral reefs and a variety of water activities.",
            &["Beach", "Popular"],
        ),
    ]
});

fn platform(
    id: &str,
    mode: TicketMode,
    name: &str,
    description: &str,
    sample_route: &str,
    average_price: u64,
    rating: f64,
) -> TicketPlatform {
    TicketPlatform {
        id: id.to_string(),
        mode,
        name: name.to_string(),
        description: description.to_string(),
        sample_route: sample_route.to_string(),
        average_price,
        rating,
    }
}

static TICKET_PLATFORMS: LazyLock<Vec<TicketPlatform>> = LazyLock::new(|| {
    vec![
        platform("irctc", TicketMode::Train, "IRCTC",
            "Official Indian Railway ticket booking platform.", "NDLS → AGC", 350, 4.9),
        platform("redbus", TicketMode::Bus, "RedBus",
            "India's largest bus booking marketplace.", "DEL → JPR", 499, 4.7),
        platform("indigo", TicketMode::Flight, "IndiGo",
            "India's largest airline offering domestic & international flights.", "DEL → BOM", 3499, 4.8),
        platform("airindia", TicketMode::Flight, "Air India",
            "Full-service international & domestic airline.", "HYD → DEL", 3999, 4.6),
        platform("abhibus", TicketMode::Bus, "AbhiBus",
            "Popular bus booking platform with offers & discounts.", "VJA → HYD", 550, 4.5),
        platform("konkan", TicketMode::Train, "Konkan Railway",
            "Scenic coastal railway operator with premium trains.", "MAO → MUM", 650, 4.7),
    ]
});

#[allow(clippy::too_many_arguments)]
fn mover(
    id: &str,
    name: &str,
    description: &str,
    base_price: u64,
    per_km: u64,
    per_item: u64,
    rating: f64,
    reviews: u32,
    services: &[&str],
    agent: Agent,
    coverage: &str,
) -> Mover {
    Mover {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        base_price,
        per_km,
        per_item,
        rating,
        reviews,
        services: strings(services),
        agent,
        coverage: coverage.to_string(),
    }
}

static MOVERS: LazyLock<Vec<Mover>> = LazyLock::new(|| {
    vec![
        mover("mv1", "Agarwal Packers & Movers",
            "India's most trusted interstate moving company.", 5999, 22, 60, 4.9, 5823,
            &["Packing", "Loading", "Insurance", "GPS Tracking"],
            Agent::new("Agarwal Logistics", "+91 98765 10000"), "Pan India"),
        mover("mv2", "NoBroker Movers",
            "Affordable packers and movers with verified workers.", 3499, 18, 45, 4.7, 4211,
            &["Packing", "Loading", "Transport", "Support"],
            Agent::new("NoBroker Move", "+91 98765 30000"), "Major Cities"),
        mover("mv3", "Urban Company Movers",
            "Super-fast local shifting with professional packaging.", 3999, 20, 55, 4.8, 3180,
            &["Premium Packing", "Safety Wrap", "Furniture Handling"],
            Agent::new("Urban Co Movers", "+91 98765 22000"), "Metro Cities"),
    ]
});

fn wedding_car(
    id: &str,
    name: &str,
    class: &str,
    price: u64,
    rating: f64,
    reviews: u32,
    features: &[&str],
    agent: Agent,
) -> WeddingCar {
    WeddingCar {
        id: id.to_string(),
        name: name.to_string(),
        class: class.to_string(),
        price,
        rating,
        reviews,
        features: strings(features),
        agent,
    }
}

static WEDDING_CARS: LazyLock<Vec<WeddingCar>> = LazyLock::new(|| {
    vec![
        wedding_car("w1", "Mercedes S-Class", "Ultra Luxury", 15000, 5.0, 456,
            &["Red Carpet", "Flower Decoration", "Premium Chauffeur"],
            Agent::new("Luxury Wheels", "+91 98765 12345")),
        wedding_car("w2", "Rolls Royce Phantom", "Ultra Luxury", 48000, 5.0, 382,
            &["Premium Decor", "Champagne Setup", "VIP Chauffeur"],
            Agent::new("Royal Drive", "+91 98765 75757")),
        wedding_car("w3", "BMW 7 Series", "Luxury", 12000, 4.8, 678,
            &["Premium Decoration", "Leather Interior", "Sound System"],
            Agent::new("Elite Cars", "+91 98765 54321")),
        wedding_car("w4", "Audi A6", "Luxury", 9000, 4.7, 345,
            &["Elegant Decor", "Clean Interior", "Professional Driver"],
            Agent::new("City Rentals", "+91 90000 11111")),
        wedding_car("w5", "Range Rover Sport", "Luxury SUV", 18000, 4.9, 289,
            &["Modern Look", "Full Decoration", "Comfort Ride"],
            Agent::new("SUV Elite", "+91 98989 12121")),
        wedding_car("w6", "Vintage Rolls Royce", "Vintage", 25000, 4.9, 234,
            &["Vintage Styling", "Photo Shoot Ready", "Full Decoration"],
            Agent::new("Heritage Motors", "+91 99887 66554")),
        wedding_car("w7", "Ambassador Classic", "Vintage", 7000, 4.6, 198,
            &["Classic Decoration", "Retro Feel", "White Theme"],
            Agent::new("Vintage Drive", "+91 99000 88888")),
        wedding_car("w8", "Toyota Innova Crysta", "Premium", 6500, 4.4, 432,
            &["Affordable", "Comfortable", "Decor Available"],
            Agent::new("City Travels", "+91 90909 33333")),
        wedding_car("w9", "Maruti Ertiga", "Budget", 4500, 4.3, 305,
            &["Budget Friendly", "AC", "Basic Decoration"],
            Agent::new("Family Rentals", "+91 93455 00000")),
    ]
});

#[allow(clippy::too_many_arguments)]
fn planner(
    id: &str,
    vendor: &str,
    package: &str,
    days: u32,
    group_size: &str,
    best_season: &str,
    difficulty: &str,
    price: u64,
    route: &str,
    highlights: &[&str],
    includes: &[&str],
    rating: f64,
    reviews: u32,
    agent: Agent,
) -> PlannerPackage {
    PlannerPackage {
        id: id.to_string(),
        vendor: vendor.to_string(),
        package: package.to_string(),
        days,
        group_size: group_size.to_string(),
        best_season: best_season.to_string(),
        difficulty: difficulty.to_string(),
        price,
        route: route.to_string(),
        highlights: strings(highlights),
        includes: strings(includes),
        rating,
        reviews,
        agent,
    }
}

static PLANNER_PACKAGES: LazyLock<Vec<PlannerPackage>> = LazyLock::new(|| {
    vec![
        planner("p1", "Mountain Expeditions", "Himalayan Trek – Leh & Nubra Valley", 7,
            "6–20 People", "May – October", "Moderate", 35999,
            "Delhi → Manali → Leh → Nubra → Pangong → Delhi",
            &["Rohtang Pass", "Nubra Valley", "Pangong Lake", "Khardung La"],
            &["3-Star Hotels", "Meals Included", "Guide", "Transport", "Permits", "Camp Stay"],
            4.9, 892, Agent::new("Planner Desk", "+91 98765 11111")),
        planner("p2", "Heritage Tours", "Rajasthan Royal Heritage Circuit", 6,
            "4–16 People", "October – February", "Easy", 28999,
            "Jaipur → Udaipur → Jodhpur → Jaisalmer → Jaipur",
            &["Camel Safari", "Fort Visits", "Palace Stays", "Local Shows"],
            &["Heritage Hotels", "Breakfast & Dinner", "Transport", "Guided Tours"],
            5.0, 2134, Agent::new("Royal Desk", "+91 98765 22222")),
        planner("p3", "South India Tourism", "Kerala Backwaters & Hill Stations", 5,
            "4–14 People", "September – March", "Easy", 24999,
            "Cochin → Munnar → Alleppey → Cochin",
            &["Houseboat Stay", "Tea Gardens", "Backwaters"],
            &["3-Star Hotels", "Meals", "Boat Ride", "Transport"],
            4.8, 1189, Agent::new("South Desk", "+91 98765 33333")),
        planner("p4", "Island Adventures", "Andaman Islands – Beaches & Water Sports", 4,
            "2–10 People", "October – May", "Easy", 28999,
            "Port Blair → Havelock → Neil → Port Blair",
            &["Scuba Diving", "Coral Reefs", "Havelock Beach"],
            &["Resort Stay", "Breakfast", "Ferry Transfer", "Activities"],
            4.7, 964, Agent::new("Island Desk", "+91 98765 44444")),
        planner("p5", "Northeast Trails", "Meghalaya Explorer – Waterfalls & Caves", 6,
            "5–12 People", "September – April", "Moderate", 27999,
            "Guwahati → Shillong → Cherrapunji → Dawki",
            &["Umiam Lake", "Dawki River", "Living Root Bridge"],
            &["Hotels", "Travel", "Breakfast", "Guide"],
            4.9, 1568, Agent::new("NE Desk", "+91 98765 55555")),
    ]
});

pub fn vehicles() -> &'static [Vehicle] {
    &VEHICLES
}

pub fn tours() -> &'static [TourPackage] {
    &TOURS
}

pub fn ticket_platforms() -> &'static [TicketPlatform] {
    &TICKET_PLATFORMS
}

pub fn movers() -> &'static [Mover] {
    &MOVERS
}

pub fn wedding_cars() -> &'static [WeddingCar] {
    &WEDDING_CARS
}

pub fn planner_packages() -> &'static [PlannerPackage] {
    &PLANNER_PACKAGES
}

/// Booking parameters for entry `id` of a category. `mode` only matters
/// for self-drive.
pub fn booking_item(
    service: ServiceCategory,
    id: &str,
    mode: PriceMode,
) -> Result<BookingItem, CatalogError> {
    let item = match service {
        ServiceCategory::SelfDrive => vehicles()
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.priced(mode).booking_item()),
        ServiceCategory::Tours => tours().iter().find(|t| t.id == id).map(Bookable::booking_item),
        ServiceCategory::Tickets => ticket_platforms()
            .iter()
            .find(|t| t.id == id)
            .map(Bookable::booking_item),
        ServiceCategory::Movers => movers().iter().find(|m| m.id == id).map(Bookable::booking_item),
        ServiceCategory::Planner => planner_packages()
            .iter()
            .find(|p| p.id == id)
            .map(Bookable::booking_item),
        ServiceCategory::Wedding => wedding_cars()
            .iter()
            .find(|w| w.id == id)
            .map(Bookable::booking_item),
    };
    item.ok_or_else(|| CatalogError::NotFound(format!("{}/{}", service, id)))
}
