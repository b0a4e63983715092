use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rolodex_store::ProfileError;
use rolodex_utils::response::ApiResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Profile(ProfileError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Profile(ProfileError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ApiError::Profile(ProfileError::Internal) => {
                tracing::error!("internal error while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}
