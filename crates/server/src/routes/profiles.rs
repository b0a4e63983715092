//! Profile CRUD routes
//!
//! Thin layer over the ProfileStore: decode the JSON payload into a
//! candidate, invoke the store, wrap the outcome in the API envelope. All
//! validation and id assignment happens in the store.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use rolodex_store::{Profile, ProfileData, ProfileStore};
use rolodex_utils::response::ApiResponse;

use crate::error::ApiError;

pub fn router() -> Router<ProfileStore> {
    Router::new()
        .route("/profiles", get(list_profiles).post(create_profile))
        .route("/profiles/{id}", get(get_profile).put(update_profile))
}

/// Create a new profile; the store assigns the id.
async fn create_profile(
    State(store): State<ProfileStore>,
    Json(payload): Json<ProfileData>,
) -> Result<ResponseJson<ApiResponse<Profile>>, ApiError> {
    let profile = store.create(&payload)?;
    Ok(ResponseJson(ApiResponse::success(profile)))
}

/// Replace all mutable fields of an existing profile.
async fn update_profile(
    State(store): State<ProfileStore>,
    Path(id): Path<i64>,
    Json(payload): Json<ProfileData>,
) -> Result<ResponseJson<ApiResponse<Profile>>, ApiError> {
    let profile = store.update(id, &payload)?;
    Ok(ResponseJson(ApiResponse::success(profile)))
}

/// Get a single profile by id.
async fn get_profile(
    State(store): State<ProfileStore>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<Profile>>, ApiError> {
    let profile = store.get_by_id(id)?;
    Ok(ResponseJson(ApiResponse::success(profile)))
}

/// List every stored profile in insertion order.
async fn list_profiles(
    State(store): State<ProfileStore>,
) -> Result<ResponseJson<ApiResponse<Vec<Profile>>>, ApiError> {
    let profiles = store.list_all()?;
    Ok(ResponseJson(ApiResponse::success(profiles)))
}
