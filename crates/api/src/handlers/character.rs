//! Handlers for the `/characters` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roster_core::character::Character;

use crate::error::AppResult;
use crate::extract::{CharacterId, CharacterPayload};
use crate::state::AppState;

/// GET /characters
pub async fn list(State(state): State<AppState>) -> Json<Vec<Character>> {
    let store = state.store.read().await;
    Json(store.list().to_vec())
}

/// GET /characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    CharacterId(id): CharacterId,
) -> AppResult<Json<Character>> {
    let store = state.store.read().await;
    let character = store.get(id)?.clone();
    Ok(Json(character))
}

/// POST /characters
///
/// Responds 200 rather than 201; clients of the original service expect it.
pub async fn create(
    State(state): State<AppState>,
    CharacterPayload(input): CharacterPayload,
) -> Json<Character> {
    let character = state.store.write().await.create(input);
    tracing::info!(id = character.id, name = %character.name, "Character created");
    Json(character)
}

/// PUT /characters/{id}
///
/// Replaces every field; the path id wins over any id in the body.
pub async fn update(
    State(state): State<AppState>,
    CharacterId(id): CharacterId,
    CharacterPayload(input): CharacterPayload,
) -> AppResult<Json<Character>> {
    let character = state.store.write().await.update(id, input)?;
    tracing::info!(id, "Character updated");
    Ok(Json(character))
}

/// DELETE /characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    CharacterId(id): CharacterId,
) -> AppResult<StatusCode> {
    state.store.write().await.delete(id)?;
    tracing::info!(id, "Character deleted");
    Ok(StatusCode::NO_CONTENT)
}
