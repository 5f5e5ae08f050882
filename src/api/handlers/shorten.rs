//! Handler for the shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for the submitted origin URL.
///
/// # Endpoint
///
/// `POST /urls`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.google.co.kr/" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "localhost:3000/57Z4WQ" }
/// ```
///
/// # Errors
///
/// - 400 `WRONG_REQUEST` if the body is malformed, the URL does not match the
///   scheme pattern, or it is longer than 500 characters
/// - 500 `GENERIC` if no unique key could be found or storage fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;

    let record = state.url_service.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse {
        short_url: state.url_service.short_url(&record.short_key),
    }))
}
