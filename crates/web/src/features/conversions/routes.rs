use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{convert_score, list_recent};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/convert", post(convert_score))
        .route("/recent", get(list_recent))
}
