pub mod identity;
pub mod ids;

pub use identity::{Authenticator, LoginForm, RegisterForm, SimulatedAuthenticator};
pub use ids::IdSequence;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
    #[error("Identity verification failed: {0}")]
    IdentityError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
