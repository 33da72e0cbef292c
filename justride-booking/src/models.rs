use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use justride_catalog::BookingItem;
use justride_shared::ServiceCategory;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session user. Only the store creates one.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    name: String,
    email: String,
    phone: String,
}

impl User {
    pub(crate) fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BookingId(pub u64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Booking status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(format!("Unknown booking status: {}", other)),
        }
    }
}

/// One entry in the session ledger. Item, details, agent and amount are
/// snapshots taken when the booking was made.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub service_type: ServiceCategory,
    pub item_name: String,
    pub booking_date: DateTime<Utc>,
    pub details: String,
    pub total_amount: u64,
    pub status: BookingStatus,
    pub agent_name: String,
    pub agent_phone: String,
    #[serde(default)]
    pub pickup_date: Option<NaiveDate>,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    pub passengers: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub special_requests: Option<String>,
}

impl Booking {
    /// Confirmed booking for a catalog selection, trip fields left empty
    pub fn from_item(id: BookingId, item: &BookingItem) -> Self {
        Self {
            id,
            service_type: item.category,
            item_name: item.item_name.clone(),
            booking_date: Utc::now(),
            details: item.details.clone(),
            total_amount: item.price,
            status: BookingStatus::Confirmed,
            agent_name: item.agent_name.clone(),
            agent_phone: item.agent_phone.clone(),
            pickup_date: None,
            return_date: None,
            passengers: None,
            location: None,
            special_requests: None,
        }
    }

    pub fn has_agent(&self) -> bool {
        !self.agent_name.is_empty()
    }

    pub(crate) fn set_status(&mut self, status: BookingStatus) -> BookingStatus {
        std::mem::replace(&mut self.status, status)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Booking,
    Confirmation,
    Reminder,
    Completion,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub booking_id: Option<BookingId>,
}

/// A notification before the store has assigned its id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub booking_id: Option<BookingId>,
}

impl NewNotification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            timestamp: Utc::now(),
            read: false,
            booking_id: None,
        }
    }

    pub fn for_booking(mut self, booking_id: BookingId) -> Self {
        self.booking_id = Some(booking_id);
        self
    }

    pub(crate) fn with_id(self, id: NotificationId) -> Notification {
        Notification {
            id,
            kind: self.kind,
            title: self.title,
            message: self.message,
            timestamp: self.timestamp,
            read: self.read,
            booking_id: self.booking_id,
        }
    }
}
