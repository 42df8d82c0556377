use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use scoring::{ConversionRecord, dto::conversion::ConvertRequest};

use crate::{
    error::{WebError, WebResult},
    state::AppState,
};

use super::services;

#[utoipa::path(
    post,
    path = "/api/convert",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Score converted and added to the recent history", body = ConversionRecord),
        (status = 400, description = "Invalid score, fromCountry or toCountry, malformed JSON, or a converted score too large to represent"),
        (status = 500, description = "Internal server error")
    ),
    tag = "conversions"
)]
pub async fn convert_score(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(request) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;

    let request = request.validate()?;
    let record = services::convert(&state, request)?;

    Ok(Json(record).into_response())
}

#[utoipa::path(
    get,
    path = "/api/recent",
    responses(
        (status = 200, description = "Recent conversions, newest first", body = Vec<ConversionRecord>)
    ),
    tag = "conversions"
)]
pub async fn list_recent(State(state): State<AppState>) -> Json<Vec<ConversionRecord>> {
    Json(services::list_recent(&state))
}
