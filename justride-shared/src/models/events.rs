use crate::models::service::ServiceCategory;
use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Login,
    Register,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct SessionStartedEvent {
    pub user_id: Uuid,
    pub kind: SessionKind,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingConfirmedEvent {
    pub booking_id: u64,
    pub service_type: ServiceCategory,
    pub item_name: String,
    pub total_amount: u64,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingStatusChangedEvent {
    pub booking_id: u64,
    pub from: String,
    pub to: String,
    pub timestamp: i64,
}
