use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::ApiError;

/// A `Json<T>` wrapper that converts body deserialization failures into
/// [`ApiError::Internal`], so a malformed or incomplete create/update body
/// gets the same `{"error": ...}` / 500 treatment as any other failure.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Internal(e.body_text()))?;
        Ok(AppJson(value))
    }
}

/// Same contract for path segments: an id that fails to parse is reported
/// as the `{"error": ...}` body instead of a bare rejection.
#[derive(Debug)]
pub struct AppPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Internal(e.body_text()))?;
        Ok(AppPath(value))
    }
}

/// Deserializer for `Option<Option<T>>` fields in update bodies. Paired with
/// `#[serde(default)]` it keeps a key that is absent (`None`) apart from one
/// sent as an explicit JSON `null` (`Some(None)`), which must clear the column.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
