use std::sync::Arc;

use justride_booking::{
    BookingId, BookingRequest, BookingStore, DashboardStats, LedgerFilter, TripForm, User,
};
use justride_catalog::BookingItem;
use justride_core::{Authenticator, LoginForm, RegisterForm, SimulatedAuthenticator};
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::navigation::View;

/// Composition root for one session. Owns the store; every mutation goes
/// through `&mut self`, so writes are serialized even across the
/// authentication await.
pub struct AppState {
    store: BookingStore,
    authenticator: Arc<dyn Authenticator>,
    config: Config,
    view: View,
    request: Option<BookingRequest>,
}

impl AppState {
    pub fn new(config: Config, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            store: BookingStore::with_sidebar(config.session.sidebar_open),
            authenticator,
            config,
            view: View::default(),
            request: None,
        }
    }

    /// State wired with the simulated authenticator at the configured latency
    pub fn from_config(config: Config) -> Self {
        let authenticator = Arc::new(SimulatedAuthenticator::new(config.session.auth_latency()));
        Self::new(config, authenticator)
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BookingStore {
        &mut self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    pub fn request(&self) -> Option<&BookingRequest> {
        self.request.as_ref()
    }

    /// Validate and wait on the authenticator, then open the session.
    /// A rejected form leaves the store untouched.
    pub async fn login(&mut self, form: LoginForm) -> Result<User, AppError> {
        self.authenticator.authenticate_login(&form).await?;
        let user = self
            .store
            .login(&form.email, form.password.expose(), &form.name);
        self.view = View::Dashboard;
        Ok(user)
    }

    pub async fn register(&mut self, form: RegisterForm) -> Result<User, AppError> {
        self.authenticator.authenticate_register(&form).await?;
        let user = self.store.register(
            &form.name,
            &form.email,
            form.phone.expose(),
            form.password.expose(),
        );
        self.view = View::Dashboard;
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.store.logout();
        self.request = None;
        self.view = View::Landing;
    }

    /// Open the confirmation form for a catalog selection, replacing any
    /// form already open.
    pub fn start_booking(&mut self, item: BookingItem) -> &BookingRequest {
        info!("Booking form opened for {} ({})", item.item_name, item.category);
        self.request.insert(BookingRequest::new(item))
    }

    pub fn submit_booking(&mut self, form: TripForm) -> Result<BookingId, AppError> {
        let request = self
            .request
            .as_mut()
            .ok_or_else(|| AppError::ConflictError("No booking in progress".to_string()))?;
        *request.form_mut() = form;
        Ok(request.submit(&mut self.store)?)
    }

    /// Reset the open form so the same item can be booked again
    pub fn close_booking(&mut self) -> Result<(), AppError> {
        let request = self
            .request
            .as_mut()
            .ok_or_else(|| AppError::ConflictError("No booking in progress".to_string()))?;
        request.close();
        Ok(())
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_bookings(self.store.bookings())
    }

    pub fn export_csv(&self, filter: &LedgerFilter) -> Result<String, AppError> {
        Ok(justride_booking::export_csv(
            filter.apply(self.store.bookings()),
            &self.config.export,
        )?)
    }
}
