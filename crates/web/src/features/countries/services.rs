use scoring::dto::country::CountriesResponse;

use crate::state::AppState;

pub fn list_countries(state: &AppState) -> CountriesResponse {
    CountriesResponse::from(state.ranges.as_ref())
}
