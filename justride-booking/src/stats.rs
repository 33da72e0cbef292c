use serde::{Deserialize, Serialize};

use crate::models::{Booking, BookingStatus};

/// Dashboard summary over the whole ledger
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub confirmed: usize,
    pub completed: usize,
    /// Sum of every booking amount, cancelled ones included
    pub total_spent: u64,
}

impl DashboardStats {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        bookings.iter().fold(Self::default(), |mut stats, booking| {
            stats.total += 1;
            match booking.status {
                BookingStatus::Confirmed => stats.confirmed += 1,
                BookingStatus::Completed => stats.completed += 1,
                _ => {}
            }
            stats.total_spent = stats.total_spent.saturating_add(booking.total_amount);
            stats
        })
    }
}

/// Status + text filter for the dashboard ledger table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerFilter {
    #[serde(default)]
    pub status: Option<BookingStatus>,
    #[serde(default)]
    pub search: String,
}

impl LedgerFilter {
    /// Searches shorter than two characters are ignored.
    fn needle(&self) -> Option<String> {
        // Surrounding whitespace is dropped before matching, so " goa " finds "Goa Beach"
        let trimmed = self.search.trim();
        (trimmed.chars().count() > 1).then(|| trimmed.to_lowercase())
    }

    pub fn matches(&self, booking: &Booking) -> bool {
        if self.status.is_some_and(|status| status != booking.status) {
            return false;
        }
        match self.needle() {
            None => true,
            Some(needle) => [
                booking.item_name.as_str(),
                booking.agent_name.as_str(),
                booking.service_type.as_str(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle)),
        }
    }

    /// Matching bookings in ledger order
    pub fn apply<'a>(&self, bookings: &'a [Booking]) -> Vec<&'a Booking> {
        bookings.iter().filter(|b| self.matches(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingId;
    use justride_catalog::BookingItem;
    use justride_shared::ServiceCategory;

    fn booking(id: u64, category: ServiceCategory, name: &str, agent: &str, amount: u64) -> Booking {
        Booking::from_item(
            BookingId(id),
            &BookingItem {
                category,
                item_name: name.to_string(),
                details: String::new(),
                price: amount,
                agent_name: agent.to_string(),
                agent_phone: String::new(),
            },
        )
    }

    fn ledger() -> Vec<Booking> {
        let mut bookings = vec![
            booking(1, ServiceCategory::SelfDrive, "Honda City 2024", "Rajesh Kumar", 2499),
            booking(2, ServiceCategory::Tours, "Goa Beach Paradise", "Coastal Tours", 899),
            booking(3, ServiceCategory::Tickets, "IRCTC", "", 450),
        ];
        bookings[1].status = BookingStatus::Completed;
        bookings[2].status = BookingStatus::Cancelled;
        bookings
    }

    #[test]
    fn test_stats_two_confirmed() {
        let bookings = vec![
            booking(1, ServiceCategory::SelfDrive, "B1", "A", 2499),
            booking(2, ServiceCategory::Tours, "B2", "B", 899),
        ];
        let stats = DashboardStats::from_bookings(&bookings);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.confirmed, 2);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.total_spent, 3398);
    }

    #[test]
    fn test_stats_include_cancelled_amounts() {
        let stats = DashboardStats::from_bookings(&ledger());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.confirmed, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.total_spent, 2499 + 899 + 450);
    }

    #[test]
    fn test_filter_by_status() {
        let bookings = ledger();
        let filter = LedgerFilter {
            status: Some(BookingStatus::Cancelled),
            search: String::new(),
        };
        let ids: Vec<u64> = filter.apply(&bookings).iter().map(|b| b.id.0).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_search_matches_item_agent_and_service() {
        let bookings = ledger();
        let by = |search: &str| -> Vec<u64> {
            LedgerFilter {
                status: None,
                search: search.to_string(),
            }
            .apply(&bookings)
            .iter()
            .map(|b| b.id.0)
            .collect()
        };

        assert_eq!(by("GOA"), vec![2]);
        assert_eq!(by("rajesh"), vec![1]);
        assert_eq!(by("tickets"), vec![3]);
        assert_eq!(by("o"), vec![1, 2, 3]);
        assert_eq!(by("  "), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_ignores_surrounding_whitespace() {
        let bookings = ledger();
        let filter = LedgerFilter {
            status: None,
            search: "  goa  ".to_string(),
        };
        let ids: Vec<u64> = filter.apply(&bookings).iter().map(|b| b.id.0).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_total_spent_saturates() {
        let bookings = vec![
            booking(1, ServiceCategory::Planner, "Huge", "A", u64::MAX),
            booking(2, ServiceCategory::Movers, "Small", "B", 500),
        ];
        let stats = DashboardStats::from_bookings(&bookings);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.total_spent, u64::MAX);
    }
}
