use justride_booking::{BookingId, LedgerFilter, NotificationId, TripForm};
use justride_catalog::{
    browse, browse_vehicles, data, Bookable, CatalogQuery, PriceMode, VehicleClass,
};
use justride_core::{LoginForm, RegisterForm};
use justride_shared::ServiceCategory;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::AppError;
use crate::navigation::View;
use crate::state::AppState;

/// One request to the session, as read by the command driver.
#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Session,
    Navigate(View),
    ToggleSidebar,
    Login(LoginForm),
    Register(RegisterForm),
    Logout,
    Browse {
        service: ServiceCategory,
        #[serde(default)]
        query: CatalogQuery,
        #[serde(default)]
        class: VehicleClass,
        #[serde(default)]
        mode: PriceMode,
    },
    StartBooking {
        service: ServiceCategory,
        item_id: String,
        #[serde(default)]
        mode: PriceMode,
    },
    SubmitBooking(TripForm),
    CloseBooking,
    Bookings {
        #[serde(default)]
        filter: LedgerFilter,
    },
    BookingsByService {
        service: ServiceCategory,
    },
    Stats,
    Notifications,
    MarkNotificationRead {
        id: NotificationId,
    },
    MarkAllNotificationsRead,
    CancelBooking {
        id: BookingId,
    },
    CompleteBooking {
        id: BookingId,
    },
    ExportCsv {
        #[serde(default)]
        filter: LedgerFilter,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Session => "session",
            Command::Navigate(_) => "navigate",
            Command::ToggleSidebar => "toggle_sidebar",
            Command::Login(_) => "login",
            Command::Register(_) => "register",
            Command::Logout => "logout",
            Command::Browse { .. } => "browse",
            Command::StartBooking { .. } => "start_booking",
            Command::SubmitBooking(_) => "submit_booking",
            Command::CloseBooking => "close_booking",
            Command::Bookings { .. } => "bookings",
            Command::BookingsByService { .. } => "bookings_by_service",
            Command::Stats => "stats",
            Command::Notifications => "notifications",
            Command::MarkNotificationRead { .. } => "mark_notification_read",
            Command::MarkAllNotificationsRead => "mark_all_notifications_read",
            Command::CancelBooking { .. } => "cancel_booking",
            Command::CompleteBooking { .. } => "complete_booking",
            Command::ExportCsv { .. } => "export_csv",
        }
    }
}

fn listing<T: Bookable + Serialize>(entries: Vec<&T>) -> Value {
    entries
        .into_iter()
        .map(|entry| {
            json!({
                "entry": entry,
                "details": entry.details(),
                "price": entry.price(),
            })
        })
        .collect()
}

fn browse_service(
    service: ServiceCategory,
    query: &CatalogQuery,
    class: VehicleClass,
    mode: PriceMode,
) -> Value {
    match service {
        ServiceCategory::SelfDrive => browse_vehicles(data::vehicles(), class, mode, query)
            .into_iter()
            .map(|priced| {
                json!({
                    "entry": priced.vehicle,
                    "details": priced.details(),
                    "price": priced.price(),
                    "price_label": priced.price_label(),
                })
            })
            .collect(),
        ServiceCategory::Tours => listing(browse(data::tours(), query)),
        ServiceCategory::Tickets => listing(browse(data::ticket_platforms(), query)),
        ServiceCategory::Movers => listing(browse(data::movers(), query)),
        ServiceCategory::Planner => listing(browse(data::planner_packages(), query)),
        ServiceCategory::Wedding => listing(browse(data::wedding_cars(), query)),
    }
}

impl AppState {
    fn session_snapshot(&self) -> Value {
        let store = self.store();
        json!({
            "user": store.user(),
            "authenticated": store.is_authenticated(),
            "view": self.view(),
            "shows_header": self.view().shows_header(),
            "sidebar_open": store.sidebar_open(),
            "unread": store.unread_count(),
            "booking_request": self.request(),
        })
    }

    /// Run one command and render its result as JSON.
    pub async fn dispatch(&mut self, command: Command) -> Result<Value, AppError> {
        debug!("Dispatching {}", command.name());

        let value = match command {
            Command::Session => self.session_snapshot(),
            Command::Navigate(view) => {
                self.navigate(view);
                self.session_snapshot()
            }
            Command::ToggleSidebar => json!({ "sidebar_open": self.store_mut().toggle_sidebar() }),
            Command::Login(form) => {
                let user = self.login(form).await?;
                json!({ "user": user, "view": self.view() })
            }
            Command::Register(form) => {
                let user = self.register(form).await?;
                json!({ "user": user, "view": self.view() })
            }
            Command::Logout => {
                self.logout();
                self.session_snapshot()
            }
            Command::Browse {
                service,
                query,
                class,
                mode,
            } => browse_service(service, &query, class, mode),
            Command::StartBooking {
                service,
                item_id,
                mode,
            } => {
                let item = data::booking_item(service, &item_id, mode)?;
                serde_json::to_value(self.start_booking(item))?
            }
            Command::SubmitBooking(form) => {
                let id = self.submit_booking(form)?;
                json!({ "booking": self.store().booking(id) })
            }
            Command::CloseBooking => {
                self.close_booking()?;
                json!({ "booking_request": self.request() })
            }
            Command::Bookings { filter } => {
                json!({ "bookings": filter.apply(self.store().bookings()) })
            }
            Command::BookingsByService { service } => {
                json!({ "bookings": self.store().bookings_by_service(service) })
            }
            Command::Stats => serde_json::to_value(self.stats())?,
            Command::Notifications => json!({
                "notifications": self.store().notifications(),
                "unread": self.store().unread_count(),
            }),
            Command::MarkNotificationRead { id } => {
                self.store_mut().mark_notification_read(id)?;
                json!({ "unread": self.store().unread_count() })
            }
            Command::MarkAllNotificationsRead => {
                self.store_mut().mark_all_notifications_read();
                json!({ "unread": self.store().unread_count() })
            }
            Command::CancelBooking { id } => {
                self.store_mut().cancel_booking(id)?;
                json!({ "booking": self.store().booking(id) })
            }
            Command::CompleteBooking { id } => {
                self.store_mut().complete_booking(id)?;
                json!({ "booking": self.store().booking(id) })
            }
            Command::ExportCsv { filter } => json!({ "csv": self.export_csv(&filter)? }),
        };

        Ok(value)
    }
}
