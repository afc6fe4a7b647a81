//! Kitchen workflow status of an order.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Where an order stands in the kitchen.
///
/// The four known stages get their own variants; any other label is kept verbatim in
/// [`OrderStatus::Other`]. Status changes are not validated against the known set and
/// no transition order is enforced, so the kitchen can move an order to any label at any time.
///
/// The textual form round-trips exactly: `"in_progress"` parses to [`OrderStatus::InProgress`]
/// and prints back as `"in_progress"`, while `"on_hold"` becomes `Other("on_hold")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    /// The stages offered by the kitchen view, in workflow order.
    pub const KNOWN: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Other(label) => label,
        }
    }

    /// `false` for labels outside the four known stages.
    pub fn is_known(&self) -> bool {
        !matches!(self, OrderStatus::Other(_))
    }
}

impl From<&str> for OrderStatus {
    fn from(label: &str) -> Self {
        match label {
            "pending" => OrderStatus::Pending,
            "in_progress" => OrderStatus::InProgress,
            "completed" => OrderStatus::Completed,
            "cancelled" => OrderStatus::Cancelled,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(label: String) -> Self {
        match OrderStatus::from(label.as_str()) {
            OrderStatus::Other(_) => OrderStatus::Other(label),
            known => known,
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_round_trip() {
        for status in OrderStatus::KNOWN {
            assert!(status.is_known());
            assert_eq!(OrderStatus::from(status.as_str()), status);
        }
        assert_eq!(OrderStatus::from("in_progress"), OrderStatus::InProgress);
        assert_eq!(OrderStatus::InProgress.to_string(), "in_progress");
    }

    #[test]
    fn test_unknown_labels_are_kept_verbatim() {
        let status = OrderStatus::from("Waiting on dessert");
        assert_eq!(status, OrderStatus::Other("Waiting on dessert".into()));
        assert!(!status.is_known());
        assert_eq!(String::from(status), "Waiting on dessert");

        // Matching is exact, so a differently cased label is not a known stage.
        assert!(!OrderStatus::from("Pending").is_known());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&OrderStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");

        let parsed: OrderStatus = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(parsed, OrderStatus::Other("on_hold".into()));
    }

    #[test]
    fn test_new_orders_default_to_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
