//! Axum extractors for request bodies and entity ids
//!
//! Both extractors reject with [`CafeError`], so a bad request still gets the
//! uniform error envelope instead of axum's plain-text rejection:
//! - [`Payload`] turns malformed or wrongly typed JSON into `VALIDATION_ERROR`
//! - [`EntityId`] turns an id that is not a UUID into `NOT_FOUND`, since such
//!   an id can never name a stored record

use crate::core::{CafeError, Entity};
use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use uuid::Uuid;

/// JSON body extractor with envelope-shaped rejections
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_menu_item(
///     State(state): State<MenuItemAppState>,
///     Payload(payload): Payload<NewMenuItem>,
/// ) -> Result<ApiResponse<MenuItem>, CafeError> {
///     // payload is well-formed JSON of the expected shape
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = CafeError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Payload(value)),
            Err(rejection) => Err(CafeError::validation(rejection.body_text())),
        }
    }
}

/// Path extractor for the `{id}` segment of an entity route
///
/// The type parameter only selects the label used in the not-found message.
pub struct EntityId<T>(pub Uuid, PhantomData<T>);

impl<T> EntityId<T> {
    pub fn new(id: Uuid) -> Self {
        Self(id, PhantomData)
    }

    /// Get the parsed id
    pub fn into_inner(self) -> Uuid {
        self.0
    }
}

impl<T> std::ops::Deref for EntityId<T> {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequestParts<S> for EntityId<T>
where
    S: Send + Sync,
    T: Entity,
{
    type Rejection = CafeError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| CafeError::not_found::<T>(""))?;

        Uuid::parse_str(&raw)
            .map(EntityId::new)
            .map_err(|_| CafeError::not_found::<T>(raw))
    }
}
