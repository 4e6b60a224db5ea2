//! Menu item CRUD service

use super::model::{MenuItem, MenuItemPatch, NewMenuItem};
use crate::core::error::CafeResult;
use crate::core::validation::{FieldChecks, validators};
use crate::core::{CafeError, DataService, Entity};
use std::sync::Arc;
use uuid::Uuid;

/// Validation and CRUD for menu items over any [`DataService`] backend
#[derive(Clone)]
pub struct MenuItemService {
    store: Arc<dyn DataService<MenuItem>>,
}

impl MenuItemService {
    pub fn new(store: Arc<dyn DataService<MenuItem>>) -> Self {
        Self { store }
    }

    /// Create a menu item, applying the `other` category and available-by-default rules
    pub async fn create(&self, payload: NewMenuItem) -> CafeResult<MenuItem> {
        FieldChecks::new()
            .check("name", validators::non_blank("name", payload.name.as_deref()))
            .check("price", validators::positive("price", payload.price))
            .into_result("Name and price are required")?;

        let (Some(name), Some(price)) = (payload.name, payload.price) else {
            return Err(CafeError::validation("Name and price are required"));
        };

        let item = MenuItem::new(
            name,
            payload.category.unwrap_or_default(),
            price,
            payload.is_available.unwrap_or(true),
            payload.description,
        );

        let created = self.store.create(item).await?;
        tracing::info!(id = %created.id, name = %created.name, "menu item created");
        Ok(created)
    }

    /// All menu items, newest first
    pub async fn list(&self) -> CafeResult<Vec<MenuItem>> {
        Ok(self.store.list().await?)
    }

    pub async fn get_by_id(&self, id: &Uuid) -> CafeResult<MenuItem> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| CafeError::not_found::<MenuItem>(id))
    }

    /// Replace the provided fields and re-validate the result
    pub async fn update(&self, id: &Uuid, patch: MenuItemPatch) -> CafeResult<MenuItem> {
        let mut item = self.get_by_id(id).await?;

        FieldChecks::new()
            .check("name", match patch.name.as_deref() {
                Some(name) => validators::non_blank("name", Some(name)),
                None => Ok(()),
            })
            .check("price", match patch.price {
                Some(price) => validators::positive("price", Some(price)),
                None => Ok(()),
            })
            .into_result("Invalid menu item update")?;

        patch.apply(&mut item);
        item.touch();

        let updated = self
            .store
            .update(id, item)
            .await?
            .ok_or_else(|| CafeError::not_found::<MenuItem>(id))?;
        tracing::info!(id = %updated.id, "menu item updated");
        Ok(updated)
    }

    /// Remove a menu item. Orders keep their own snapshot of it.
    pub async fn delete(&self, id: &Uuid) -> CafeResult<()> {
        self.store
            .delete(id)
            .await?
            .ok_or_else(|| CafeError::not_found::<MenuItem>(id))?;
        tracing::info!(%id, "menu item deleted");
        Ok(())
    }
}
