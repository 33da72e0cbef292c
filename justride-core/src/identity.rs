use std::time::Duration;

use async_trait::async_trait;
use justride_shared::Masked;
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

const MISSING_FIELDS: &str = "Please fill all fields";
const PASSWORD_MISMATCH: &str = "Passwords do not match";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: Masked<String>,
    pub name: String,
}

impl LoginForm {
    pub fn validate(&self) -> CoreResult<()> {
        if is_blank(&self.email) || is_blank(self.password.expose()) || is_blank(&self.name) {
            return Err(CoreError::ValidationError(MISSING_FIELDS.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: Masked<String>,
    pub password: Masked<String>,
    pub confirm_password: Masked<String>,
}

impl RegisterForm {
    pub fn validate(&self) -> CoreResult<()> {
        if is_blank(&self.name)
            || is_blank(&self.email)
            || is_blank(self.phone.expose())
            || is_blank(self.password.expose())
        {
            return Err(CoreError::ValidationError(MISSING_FIELDS.to_string()));
        }

        if self.password != self.confirm_password {
            return Err(CoreError::ValidationError(PASSWORD_MISMATCH.to_string()));
        }

        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Gate in front of session creation. Implementations decide whether a form
/// may open a session; the store itself never checks credentials.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate_login(&self, form: &LoginForm) -> CoreResult<()>;

    async fn authenticate_register(&self, form: &RegisterForm) -> CoreResult<()>;
}

/// Accepts every well-formed form after a fixed pause that stands in for a
/// network round trip.
pub struct SimulatedAuthenticator {
    latency: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn pause(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn authenticate_login(&self, form: &LoginForm) -> CoreResult<()> {
        form.validate()?;
        tracing::debug!("Simulating login round trip for {}", form.email);
        self.pause().await;
        Ok(())
    }

    async fn authenticate_register(&self, form: &RegisterForm) -> CoreResult<()> {
        form.validate()?;
        tracing::debug!("Simulating registration round trip for {}", form.email);
        self.pause().await;
        Ok(())
    }
}
