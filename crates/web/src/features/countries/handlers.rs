use axum::{Json, extract::State};
use scoring::dto::country::CountriesResponse;

use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/countries",
    responses(
        (status = 200, description = "Registered scoring ranges and the fallback range used for any other country", body = CountriesResponse)
    ),
    tag = "countries"
)]
pub async fn list_countries(State(state): State<AppState>) -> Json<CountriesResponse> {
    Json(services::list_countries(&state))
}
