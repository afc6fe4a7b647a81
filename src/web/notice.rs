//! One-shot messages shown on the page a form redirects to.
//!
//! The redirect carries the notice as a query parameter (`/menu?notice=order_placed`) and the
//! target page renders it once. Unknown keys are ignored.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptySelection,
    OrderPlaced,
}

impl Notice {
    pub fn key(self) -> &'static str {
        match self {
            Notice::EmptySelection => "empty_selection",
            Notice::OrderPlaced => "order_placed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "empty_selection" => Some(Notice::EmptySelection),
            "order_placed" => Some(Notice::OrderPlaced),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::EmptySelection => "Please select at least one item to order.",
            Notice::OrderPlaced => "Your order has been placed successfully!",
        }
    }

    /// CSS class of the banner.
    pub fn category(self) -> &'static str {
        match self {
            Notice::EmptySelection => "warning",
            Notice::OrderPlaced => "success",
        }
    }

    /// `path` with this notice attached.
    pub fn location(self, path: &str) -> String {
        format!("{path}?notice={}", self.key())
    }
}
