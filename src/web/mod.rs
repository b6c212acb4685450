// src/web/mod.rs
// Web server layer for folio

pub mod api;
pub mod embedded;
pub mod error;
pub mod pages;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::web::state::AppState;

/// Create the web server router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes (REST)
    let api_router = Router::new()
        .route("/health", get(api::health))
        .route("/categories", get(api::categories))
        .route("/projects", get(api::list_projects))
        .route("/projects/{slug}", get(api::get_project))
        .route("/articles", get(api::list_articles))
        .route("/articles/{slug}", get(api::get_article))
        .route("/profile", get(api::profile))
        .route("/testimonials", get(api::testimonials))
        .route("/chat", post(api::chat));

    Router::new()
        // Pages
        .route("/", get(pages::home))
        .route("/projects/{slug}", get(pages::project))
        .route("/articles", get(pages::articles))
        .route("/articles/{slug}", get(pages::article))
        .route("/assets/{*path}", get(embedded::serve_asset))

        // Health check at root level
        .route("/health", get(api::health))

        .nest("/api", api_router)
        .fallback(pages::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
