//! Order model, line item snapshot and total calculation

use super::status::OrderStatus;
use crate::core::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of a menu item at the time it was ordered
///
/// `menu_item_id` is a plain reference: the order never re-reads the menu
/// item, so later menu edits or deletions leave past orders untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub menu_item_id: Uuid,
    pub name: String,
    pub price: f64,
    pub qty: u32,
}

impl LineItem {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

/// Sum of `price * qty` over the line items as submitted
pub fn order_total(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::subtotal).sum()
}

/// A customer order (collection `orders`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub items: Vec<LineItem>,
    pub total: f64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Build a pending order, computing its total from `items`
    pub fn new(customer_name: impl Into<String>, items: Vec<LineItem>, note: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer_name: customer_name.into(),
            total: order_total(&items),
            items,
            status: OrderStatus::Pending,
            note,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn label() -> &'static str {
        "Order"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Body of `POST /api/orders`
///
/// Client-supplied `total` and `status` are not part of the payload and are
/// ignored if sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_name: Option<String>,
    pub items: Option<Vec<LineItem>>,
    pub note: Option<String>,
}

/// Body of `PUT /api/orders/{id}`: only provided fields are replaced
///
/// `total` is never recomputed, even when `items` is replaced. `"note": null`
/// clears the note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    pub customer_name: Option<String>,
    pub items: Option<Vec<LineItem>>,
    pub status: Option<OrderStatus>,
    #[serde(
        default,
        deserialize_with = "crate::core::nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<Option<String>>,
}

impl OrderPatch {
    /// Copy every provided field onto `order`
    pub fn apply(self, order: &mut Order) {
        if let Some(customer_name) = self.customer_name {
            order.customer_name = customer_name;
        }
        if let Some(items) = self.items {
            order.items = items;
        }
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(note) = self.note {
            order.note = note;
        }
    }
}
