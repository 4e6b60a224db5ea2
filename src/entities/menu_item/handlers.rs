//! Menu item HTTP handlers

use super::{MenuItem, MenuItemPatch, MenuItemService, NewMenuItem};
use crate::core::{ApiResponse, CafeError, EntityId, Payload};
use axum::extract::State;

/// Menu-item-specific AppState
#[derive(Clone)]
pub struct MenuItemAppState {
    pub service: MenuItemService,
}

pub async fn create_menu_item(
    State(state): State<MenuItemAppState>,
    Payload(payload): Payload<NewMenuItem>,
) -> Result<ApiResponse<MenuItem>, CafeError> {
    let item = state.service.create(payload).await?;
    Ok(ApiResponse::created(item, "Menu item created successfully"))
}

pub async fn list_menu_items(
    State(state): State<MenuItemAppState>,
) -> Result<ApiResponse<Vec<MenuItem>>, CafeError> {
    Ok(ApiResponse::ok(state.service.list().await?))
}

pub async fn get_menu_item(
    State(state): State<MenuItemAppState>,
    id: EntityId<MenuItem>,
) -> Result<ApiResponse<MenuItem>, CafeError> {
    Ok(ApiResponse::ok(state.service.get_by_id(&id).await?))
}

pub async fn update_menu_item(
    State(state): State<MenuItemAppState>,
    id: EntityId<MenuItem>,
    Payload(patch): Payload<MenuItemPatch>,
) -> Result<ApiResponse<MenuItem>, CafeError> {
    let item = state.service.update(&id, patch).await?;
    Ok(ApiResponse::ok(item).with_message("Menu item updated"))
}

pub async fn delete_menu_item(
    State(state): State<MenuItemAppState>,
    id: EntityId<MenuItem>,
) -> Result<ApiResponse<()>, CafeError> {
    state.service.delete(&id).await?;
    Ok(ApiResponse::ok(()).with_message("Menu item deleted"))
}
