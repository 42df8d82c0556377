use axum::{Router, routing::get};

use super::handlers::list_countries;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/countries", get(list_countries))
}
