pub mod export;
pub mod models;
pub mod request;
pub mod stats;
pub mod store;

pub use export::{export_csv, parse_csv, CsvError, ExportOptions};
pub use models::{
    Booking, BookingId, BookingStatus, NewNotification, Notification, NotificationId,
    NotificationKind, User,
};
pub use request::{BookingRequest, RequestError, RequestPhase, TripForm};
pub use stats::{DashboardStats, LedgerFilter};
pub use store::{BookingStore, StoreError, StoreResult};
