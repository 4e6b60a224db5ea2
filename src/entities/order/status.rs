//! Order status lifecycle
//!
//! ```text
//!   pending ──► making ──► done
//!      │           │
//!      └─────┬─────┘
//!            ▼
//!        cancelled
//! ```
//!
//! The diagram is the `forward` policy. Under the default `open` policy any
//! status may move to any other one, including back from `done` or
//! `cancelled`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an order is in the kitchen workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Making,
    Done,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Making,
        OrderStatus::Done,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Making => "making",
            OrderStatus::Done => "done",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the forward workflow allows leaving this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Done | OrderStatus::Cancelled)
    }

    /// Check a move from `self` to `next` under `policy`
    ///
    /// Staying on the same status is always allowed.
    pub fn can_transition_to(&self, next: OrderStatus, policy: StatusPolicy) -> bool {
        if *self == next {
            return true;
        }

        match policy {
            StatusPolicy::Open => true,
            StatusPolicy::Forward => matches!(
                (self, next),
                (OrderStatus::Pending, OrderStatus::Making)
                    | (OrderStatus::Making, OrderStatus::Done)
                    | (OrderStatus::Pending, OrderStatus::Cancelled)
                    | (OrderStatus::Making, OrderStatus::Cancelled)
            ),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule set applied to status updates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Any status may move to any other status
    #[default]
    Open,
    /// pending → making → done, cancel before done, terminal done/cancelled
    Forward,
}
