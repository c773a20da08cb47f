//! Rutas HTTP
//!
//! Ensambla el router completo de la API con sus capas de middleware.

pub mod boarding_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Construir la aplicación con todas las rutas y capas
pub fn create_app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .nest("/boardings", boarding_routes::create_boarding_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(cors_origins))
        .with_state(state)
}
