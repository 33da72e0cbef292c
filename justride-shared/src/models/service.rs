use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The bookable service lines offered by the marketplace
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    SelfDrive,
    Tours,
    Tickets,
    Movers,
    Planner,
    Wedding,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 6] = [
        ServiceCategory::SelfDrive,
        ServiceCategory::Tours,
        ServiceCategory::Tickets,
        ServiceCategory::Movers,
        ServiceCategory::Planner,
        ServiceCategory::Wedding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::SelfDrive => "self-drive",
            ServiceCategory::Tours => "tours",
            ServiceCategory::Tickets => "tickets",
            ServiceCategory::Movers => "movers",
            ServiceCategory::Planner => "planner",
            ServiceCategory::Wedding => "wedding",
        }
    }

    /// Ticket bookings never ask for a passenger count
    pub fn collects_passengers(&self) -> bool {
        !matches!(self, ServiceCategory::Tickets)
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown service category: {0}")]
pub struct UnknownServiceCategory(pub String);

impl FromStr for ServiceCategory {
    type Err = UnknownServiceCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownServiceCategory(s.to_string()))
    }
}
