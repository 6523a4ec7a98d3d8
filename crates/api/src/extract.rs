//! Request extractors that turn path and body input into domain values.
//!
//! Axum's stock `Path<i64>` and `Json<T>` rejections produce their own
//! status codes and messages (and `Json` insists on a JSON content type).
//! These extractors report every failure as [`CoreError::InvalidArgument`]
//! instead, so the client always sees a 400 with a fixed message.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use roster_core::character::{parse_id, CharacterInput, INVALID_ID, INVALID_PAYLOAD};
use roster_core::error::CoreError;
use roster_core::types::DbId;

use crate::error::AppError;

/// Character id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct CharacterId(pub DbId);

impl<S> FromRequestParts<S> for CharacterId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Core(CoreError::InvalidArgument(INVALID_ID.to_string())))?;
        Ok(CharacterId(parse_id(&raw)?))
    }
}

/// Character payload decoded from the raw request body.
#[derive(Debug, Clone)]
pub struct CharacterPayload(pub CharacterInput);

impl<S> FromRequest<S> for CharacterPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::Core(CoreError::InvalidArgument(INVALID_PAYLOAD.to_string())))?;
        Ok(CharacterPayload(CharacterInput::from_slice(&body)?))
    }
}
