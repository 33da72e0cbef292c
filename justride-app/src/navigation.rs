use justride_shared::ServiceCategory;
use serde::{Deserialize, Serialize};

/// Top-level screen. Nothing about it is persisted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "view", content = "service", rename_all = "lowercase")]
pub enum View {
    #[default]
    Landing,
    Auth,
    Dashboard,
    Service(ServiceCategory),
}

impl View {
    /// The marketing header is hidden on the auth and dashboard screens
    pub fn shows_header(&self) -> bool {
        !matches!(self, View::Auth | View::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_wire_format() {
        let view: View = serde_json::from_str(r#"{"view":"service","service":"self-drive"}"#).unwrap();
        assert_eq!(view, View::Service(ServiceCategory::SelfDrive));

        let json = serde_json::to_value(View::Dashboard).unwrap();
        assert_eq!(json, serde_json::json!({"view": "dashboard"}));
    }

    #[test]
    fn test_header_visibility() {
        assert!(View::Landing.shows_header());
        assert!(View::Service(ServiceCategory::Movers).shows_header());
        assert!(!View::Auth.shows_header());
        assert!(!View::Dashboard.shows_header());
    }
}
