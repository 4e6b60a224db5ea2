//! Menu item model and request payloads

use crate::core::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Menu section a sellable item belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Coffee,
    Tea,
    Dessert,
    #[default]
    Other,
}

/// A sellable item on the café menu (collection `menuitems`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        price: f64,
        is_available: bool,
        description: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            price,
            is_available,
            description,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for MenuItem {
    fn resource_name() -> &'static str {
        "menuitems"
    }

    fn label() -> &'static str {
        "Menu item"
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

/// Body of `POST /api/menu-items`
///
/// Every field is optional at the wire level so that missing required
/// fields produce a `VALIDATION_ERROR` from the service instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<f64>,
    pub is_available: Option<bool>,
    pub description: Option<String>,
}

/// Body of `PUT /api/menu-items/{id}`: only provided fields are replaced
///
/// `"description": null` clears the description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<f64>,
    pub is_available: Option<bool>,
    #[serde(
        default,
        deserialize_with = "crate::core::nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}

impl MenuItemPatch {
    /// Copy every provided field onto `item`
    pub fn apply(self, item: &mut MenuItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(is_available) = self.is_available {
            item.is_available = is_available;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
    }
}
