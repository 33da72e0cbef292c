use std::collections::VecDeque;

use chrono::Utc;
use justride_core::IdSequence;
use justride_shared::models::events::{
    BookingConfirmedEvent, BookingStatusChangedEvent, SessionKind, SessionStartedEvent,
};
use justride_shared::ServiceCategory;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::{
    Booking, BookingId, BookingStatus, NewNotification, Notification, NotificationId,
    NotificationKind, User,
};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    #[error("Notification not found: {0}")]
    NotificationNotFound(NotificationId),
}

/// Session state: the signed-in user, the booking ledger and the
/// notification feed. The only place these collections are mutated.
///
/// The ledger is kept in insertion order; the feed is kept newest first.
#[derive(Debug)]
pub struct BookingStore {
    user: Option<User>,
    bookings: Vec<Booking>,
    notifications: VecDeque<Notification>,
    sidebar_open: bool,
    booking_ids: IdSequence,
    notification_ids: IdSequence,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::with_sidebar(true)
    }

    pub fn with_sidebar(sidebar_open: bool) -> Self {
        Self {
            user: None,
            bookings: Vec::new(),
            notifications: VecDeque::new(),
            sidebar_open,
            booking_ids: IdSequence::new(),
            notification_ids: IdSequence::new(),
        }
    }

    /// Start a session. Credentials are not checked here.
    pub fn login(&mut self, email: &str, _password: &str, name: &str) -> User {
        let user = self.start_session(User::new(name, email, ""), SessionKind::Login);
        self.add_notification(NewNotification::new(
            NotificationKind::Confirmation,
            "Welcome!",
            format!("Welcome back, {}! Ready to book your next adventure?", name),
        ));
        user
    }

    /// Start a session for a new account, replacing any current user.
    pub fn register(&mut self, name: &str, email: &str, phone: &str, _password: &str) -> User {
        let user = self.start_session(User::new(name, email, phone), SessionKind::Register);
        self.add_notification(NewNotification::new(
            NotificationKind::Confirmation,
            "Account Created!",
            format!("Welcome to JustRide, {}! Your account is ready to use.", name),
        ));
        user
    }

    fn start_session(&mut self, user: User, kind: SessionKind) -> User {
        publish(
            "session.started",
            &SessionStartedEvent {
                user_id: user.id(),
                kind,
                timestamp: Utc::now().timestamp(),
            },
        );
        self.user = Some(user.clone());
        user
    }

    /// Drop the user together with the whole ledger and feed.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(
                "Session ended for {} ({} bookings, {} notifications discarded)",
                user.id(),
                self.bookings.len(),
                self.notifications.len()
            );
        }
        self.bookings.clear();
        self.notifications.clear();
    }

    /// Allocate an id for a booking about to be created
    pub fn next_booking_id(&mut self) -> BookingId {
        BookingId(self.booking_ids.next())
    }

    /// Append to the ledger as given. Ids are the caller's responsibility.
    pub fn add_booking(&mut self, booking: Booking) {
        publish(
            "booking.confirmed",
            &BookingConfirmedEvent {
                booking_id: booking.id.0,
                service_type: booking.service_type,
                item_name: booking.item_name.clone(),
                total_amount: booking.total_amount,
                timestamp: booking.booking_date.timestamp(),
            },
        );
        self.bookings.push(booking);
    }

    /// Assign an id and put the notification at the front of the feed.
    pub fn add_notification(&mut self, notification: NewNotification) -> NotificationId {
        let id = NotificationId(self.notification_ids.next());
        debug!("Notification {} added: {}", id, notification.title);
        self.notifications.push_front(notification.with_id(id));
        id
    }

    pub fn mark_notification_read(&mut self, id: NotificationId) -> StoreResult<()> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| {
                warn!("Cannot mark notification {} as read: not found", id);
                StoreError::NotificationNotFound(id)
            })?;
        notification.read = true;
        Ok(())
    }

    pub fn mark_all_notifications_read(&mut self) {
        for notification in self.notifications.iter_mut() {
            notification.read = true;
        }
    }

    /// Any status may be cancelled, including completed. No notification.
    pub fn cancel_booking(&mut self, id: BookingId) -> StoreResult<()> {
        self.transition(id, BookingStatus::Cancelled)?;
        Ok(())
    }

    /// Any status may be completed, including cancelled. Emits a completion
    /// notification pointing at the booking.
    pub fn complete_booking(&mut self, id: BookingId) -> StoreResult<()> {
        self.transition(id, BookingStatus::Completed)?;
        self.add_notification(
            NewNotification::new(
                NotificationKind::Completion,
                "Booking Completed!",
                "Your booking has been marked as completed. Thank you for using JustRide!",
            )
            .for_booking(id),
        );
        Ok(())
    }

    fn transition(&mut self, id: BookingId, to: BookingStatus) -> StoreResult<()> {
        let booking = self.booking_mut(id)?;
        let from = booking.set_status(to);
        publish(
            "booking.status_changed",
            &BookingStatusChangedEvent {
                booking_id: id.0,
                from: from.to_string(),
                to: to.to_string(),
                timestamp: Utc::now().timestamp(),
            },
        );
        Ok(())
    }

    fn booking_mut(&mut self, id: BookingId) -> StoreResult<&mut Booking> {
        self.bookings.iter_mut().find(|b| b.id == id).ok_or_else(|| {
            warn!("Booking {} not found", id);
            StoreError::BookingNotFound(id)
        })
    }

    pub fn bookings_by_service(&self, service: ServiceCategory) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.service_type == service)
            .collect()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn notifications(&self) -> &VecDeque<Notification> {
        &self.notifications
    }

    pub fn notification(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

fn publish<E: Serialize>(topic: &str, event: &E) {
    match serde_json::to_string(event) {
        Ok(payload) => info!("{}: {}", topic, payload),
        Err(e) => warn!("Failed to serialize {} event: {}", topic, e),
    }
}
