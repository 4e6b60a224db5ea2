//! Order CRUD service

use super::model::{LineItem, NewOrder, Order, OrderPatch};
use super::status::StatusPolicy;
use crate::core::error::CafeResult;
use crate::core::validation::{FieldChecks, validators};
use crate::core::{CafeError, DataService, Entity};
use std::sync::Arc;
use uuid::Uuid;

/// Validation, total calculation and CRUD for orders over any [`DataService`] backend
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn DataService<Order>>,
    policy: StatusPolicy,
}

impl OrderService {
    pub fn new(store: Arc<dyn DataService<Order>>) -> Self {
        Self {
            store,
            policy: StatusPolicy::default(),
        }
    }

    /// Use `policy` for status updates
    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn status_policy(&self) -> StatusPolicy {
        self.policy
    }

    /// Create a pending order whose total is computed from the submitted items
    ///
    /// Prices and names are taken from the submitted snapshot as-is; the menu
    /// item store is not consulted.
    pub async fn create(&self, payload: NewOrder) -> CafeResult<Order> {
        FieldChecks::new()
            .check(
                "customerName",
                validators::non_blank("customerName", payload.customer_name.as_deref()),
            )
            .check(
                "items",
                validators::min_items("items", payload.items.as_ref().map(Vec::len), 1),
            )
            .into_result("Customer name and items are required")?;

        let (Some(customer_name), Some(items)) = (payload.customer_name, payload.items) else {
            return Err(CafeError::validation("Customer name and items are required"));
        };
        check_line_items(&items).into_result("Invalid order items")?;

        let order = Order::new(customer_name, items, payload.note);
        FieldChecks::new()
            .check("total", validators::non_negative("total", order.total))
            .into_result("Invalid order items")?;

        let created = self.store.create(order).await?;
        tracing::info!(
            id = %created.id,
            items = created.items.len(),
            total = created.total,
            "order created"
        );
        Ok(created)
    }

    /// All orders, newest first
    pub async fn list(&self) -> CafeResult<Vec<Order>> {
        Ok(self.store.list().await?)
    }

    pub async fn get_by_id(&self, id: &Uuid) -> CafeResult<Order> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| CafeError::not_found::<Order>(id))
    }

    /// Partial update, typically of `status` or `note`
    ///
    /// The total stays the one computed at creation.
    pub async fn update(&self, id: &Uuid, patch: OrderPatch) -> CafeResult<Order> {
        let mut order = self.get_by_id(id).await?;

        let mut checks = FieldChecks::new();
        if let Some(name) = patch.customer_name.as_deref() {
            checks = checks.check("customerName", validators::non_blank("customerName", Some(name)));
        }
        if let Some(items) = &patch.items {
            checks = checks
                .check("items", validators::min_items("items", Some(items.len()), 1))
                .merge(check_line_items(items));
        }
        checks.into_result("Invalid order update")?;

        if let Some(next) = patch.status {
            if !order.status.can_transition_to(next, self.policy) {
                return Err(CafeError::validation(format!(
                    "Cannot change order status from '{}' to '{}'",
                    order.status, next
                )));
            }
        }

        let previous = order.status;
        patch.apply(&mut order);
        order.touch();

        let updated = self
            .store
            .update(id, order)
            .await?
            .ok_or_else(|| CafeError::not_found::<Order>(id))?;

        if previous != updated.status {
            tracing::info!(id = %updated.id, from = %previous, to = %updated.status, "order status changed");
        } else {
            tracing::debug!(id = %updated.id, "order updated");
        }
        Ok(updated)
    }

    /// Remove an order. Menu items are not affected.
    pub async fn delete(&self, id: &Uuid) -> CafeResult<()> {
        self.store
            .delete(id)
            .await?
            .ok_or_else(|| CafeError::not_found::<Order>(id))?;
        tracing::info!(%id, "order deleted");
        Ok(())
    }
}

/// Per-item checks: a name, a non-negative price and at least one unit
fn check_line_items(items: &[LineItem]) -> FieldChecks {
    items
        .iter()
        .enumerate()
        .fold(FieldChecks::new(), |checks, (index, item)| {
            let item_checks = FieldChecks::new()
                .check("name", validators::non_blank("name", Some(&item.name)))
                .check("price", validators::non_negative("price", item.price))
                .check("qty", validators::min_value("qty", item.qty, 1));
            checks.nested(&format!("items[{}]", index), item_checks)
        })
}
