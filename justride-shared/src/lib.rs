pub mod models;
pub mod pii;

pub use models::service::{ServiceCategory, UnknownServiceCategory};
pub use pii::Masked;
