use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use state::AppState;

pub fn create_app(app_state: AppState) -> Router {
    // ToDo: Tighten this up once the client origins are known
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::games::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
