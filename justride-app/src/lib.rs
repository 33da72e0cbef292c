pub mod commands;
pub mod config;
pub mod error;
pub mod navigation;
pub mod state;

pub use commands::Command;
pub use error::AppError;
pub use navigation::View;
pub use state::AppState;

use serde_json::{json, Value};

/// Handle one JSON-lines request: parse it, dispatch it and render either
/// the result or an `{"error": ...}` body.
pub async fn respond(state: &mut AppState, line: &str) -> Value {
    let command: Command = match serde_json::from_str(line) {
        Ok(command) => command,
        Err(e) => {
            tracing::warn!("Rejected malformed command: {}", e);
            return json!({ "error": format!("Invalid command: {}", e) });
        }
    };

    match state.dispatch(command).await {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("Command failed ({}): {}", err.kind(), err);
            err.to_json()
        }
    }
}
