use chrono::NaiveDate;
use justride_catalog::BookingItem;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::models::{Booking, BookingId, NewNotification, NotificationKind};
use crate::store::BookingStore;

pub const MAX_PASSENGERS: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Pickup date is required")]
    MissingPickupDate,

    #[error("Passengers must be between 1 and {max}, got {0}", max = MAX_PASSENGERS)]
    InvalidPassengers(u32),

    #[error("Booking already confirmed: {0}")]
    AlreadySubmitted(BookingId),
}

/// Trip details collected before confirming
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripForm {
    #[serde(default)]
    pub pickup_date: Option<NaiveDate>,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub special_requests: String,
}

fn default_passengers() -> u32 {
    1
}

impl Default for TripForm {
    fn default() -> Self {
        Self {
            pickup_date: None,
            passengers: default_passengers(),
            location: String::new(),
            special_requests: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "phase", content = "booking_id", rename_all = "lowercase")]
pub enum RequestPhase {
    Form,
    Confirmed(BookingId),
}

/// Confirmation form for one selected catalog item.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    item: BookingItem,
    form: TripForm,
    #[serde(flatten)]
    phase: RequestPhase,
}

impl BookingRequest {
    pub fn new(item: BookingItem) -> Self {
        Self {
            item,
            form: TripForm::default(),
            phase: RequestPhase::Form,
        }
    }

    pub fn item(&self) -> &BookingItem {
        &self.item
    }

    pub fn form(&self) -> &TripForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TripForm {
        &mut self.form
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    /// Tickets are booked without a passenger count
    pub fn collects_passengers(&self) -> bool {
        self.item.category.collects_passengers()
    }

    pub fn validate(&self) -> Result<NaiveDate, RequestError> {
        if let RequestPhase::Confirmed(id) = self.phase {
            return Err(RequestError::AlreadySubmitted(id));
        }
        let pickup_date = self.form.pickup_date.ok_or(RequestError::MissingPickupDate)?;
        if self.collects_passengers() && !(1..=MAX_PASSENGERS).contains(&self.form.passengers) {
            return Err(RequestError::InvalidPassengers(self.form.passengers));
        }
        Ok(pickup_date)
    }

    /// Record a confirmed booking and its paired notification. Nothing is
    /// written when validation fails.
    pub fn submit(&mut self, store: &mut BookingStore) -> Result<BookingId, RequestError> {
        let pickup_date = self.validate()?;

        let id = store.next_booking_id();
        let mut booking = Booking::from_item(id, &self.item);
        booking.pickup_date = Some(pickup_date);
        booking.passengers = self
            .collects_passengers()
            .then_some(self.form.passengers);
        booking.location = non_empty(&self.form.location);
        booking.special_requests = non_empty(&self.form.special_requests);

        let message = format!(
            "Your {} booking has been confirmed. Agent {} will contact you soon at {}.",
            self.item.item_name, self.item.agent_name, self.item.agent_phone
        );

        store.add_booking(booking);
        store.add_notification(
            NewNotification::new(NotificationKind::Booking, "Booking Confirmed!", message)
                .for_booking(id),
        );

        info!("Booking {} confirmed for {}", id, self.item.item_name);
        self.phase = RequestPhase::Confirmed(id);
        Ok(id)
    }

    /// Dismiss the confirmation, leaving an empty form behind
    pub fn close(&mut self) {
        self.form = TripForm::default();
        self.phase = RequestPhase::Form;
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;
    use justride_catalog::{data, Bookable, PriceMode};
    use justride_shared::ServiceCategory;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 12, 24).unwrap()
    }

    #[test]
    fn test_submit_creates_booking_then_notification() {
        let mut store = BookingStore::new();
        let item = data::vehicles()[0].priced(PriceMode::Daily).booking_item();
        let mut request = BookingRequest::new(item);
        request.form_mut().pickup_date = Some(date());
        request.form_mut().passengers = 3;
        request.form_mut().location = "  Koramangala ".to_string();

        let id = request.submit(&mut store).unwrap();

        let booking = store.booking(id).unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.total_amount, 2499);
        assert_eq!(booking.pickup_date, Some(date()));
        assert_eq!(booking.passengers, Some(3));
        assert_eq!(booking.location.as_deref(), Some("Koramangala"));
        assert!(booking.special_requests.is_none());

        let notification = &store.notifications()[0];
        assert_eq!(notification.kind, NotificationKind::Booking);
        assert_eq!(notification.booking_id, Some(id));
        assert_eq!(notification.title, "Booking Confirmed!");
        assert_eq!(
            notification.message,
            "Your Honda City 2024 booking has been confirmed. Agent Rajesh Kumar will contact you soon at +91 98765 43210."
        );
        assert_eq!(request.phase(), RequestPhase::Confirmed(id));
    }

    #[test]
    fn test_missing_date_writes_nothing() {
        let mut store = BookingStore::new();
        let mut request = BookingRequest::new(data::movers()[0].booking_item());

        assert_eq!(request.submit(&mut store), Err(RequestError::MissingPickupDate));
        assert!(store.bookings().is_empty());
        assert!(store.notifications().is_empty());
        assert_eq!(request.phase(), RequestPhase::Form);
    }

    #[test]
    fn test_passenger_bounds() {
        let mut store = BookingStore::new();
        let mut request = BookingRequest::new(data::tours()[0].booking_item());
        request.form_mut().pickup_date = Some(date());
        request.form_mut().passengers = 9;

        assert_eq!(request.submit(&mut store), Err(RequestError::InvalidPassengers(9)));

        request.form_mut().passengers = 0;
        assert_eq!(request.submit(&mut store), Err(RequestError::InvalidPassengers(0)));

        request.form_mut().passengers = 8;
        assert!(request.submit(&mut store).is_ok());
    }

    #[test]
    fn test_tickets_skip_passengers() {
        let mut store = BookingStore::new();
        let item = data::ticket_platforms()[0].booking_item();
        assert_eq!(item.category, ServiceCategory::Tickets);

        let mut request = BookingRequest::new(item);
        request.form_mut().pickup_date = Some(date());
        request.form_mut().passengers = 40;

        let id = request.submit(&mut store).unwrap();
        assert_eq!(store.booking(id).unwrap().passengers, None);
        assert!(!store.booking(id).unwrap().has_agent());
    }

    #[test]
    fn test_double_submit_is_rejected_until_closed() {
        let mut store = BookingStore::new();
        let mut request = BookingRequest::new(data::wedding_cars()[0].booking_item());
        request.form_mut().pickup_date = Some(date());
        let first = request.submit(&mut store).unwrap();

        assert_eq!(
            request.submit(&mut store),
            Err(RequestError::AlreadySubmitted(first))
        );
        assert_eq!(store.bookings().len(), 1);

        request.close();
        assert_eq!(request.phase(), RequestPhase::Form);
        assert_eq!(request.form(), &TripForm::default());

        request.form_mut().pickup_date = Some(date());
        let second = request.submit(&mut store).unwrap();
        assert_ne!(first, second);
        assert_eq!(store.bookings().len(), 2);
    }
}
