use std::any::Any;
use std::time::Duration;

use axum::{
    Router,
    response::{IntoResponse, Response},
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;
pub mod state;

pub use state::AppState;

use error::WebError;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::conversions::handlers::convert_score,
        features::conversions::handlers::list_recent,
        features::countries::handlers::list_countries,
    ),
    components(
        schemas(
            scoring::dto::conversion::ConvertRequest,
            scoring::dto::country::CountriesResponse,
            scoring::dto::country::CountryRange,
            scoring::models::ConversionRecord,
            scoring::models::ScoreRange,
        )
    ),
    tags(
        (name = "conversions", description = "Credit score conversion and recent history"),
        (name = "countries", description = "Supported scoring ranges"),
    )
)]
pub struct ApiDoc;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(features::conversions::routes::routes())
        .merge(features::countries::routes::routes())
}

/// The `/api` routes plus Swagger UI. Panics inside a handler are answered with
/// a 500 instead of dropping the connection.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .nest("/api", api_routes())
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic".to_string()
    };

    WebError::InternalServerError(detail).into_response()
}
