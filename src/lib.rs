use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

/// Shared application state — cheap to clone (the pool is an Arc internally).
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::SqlitePool,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Plants CRUD ─────────────────────────────────────────────────────
        .route(
            "/plants",
            get(handlers::plants::list_plants).post(handlers::plants::create_plant),
        )
        .route(
            "/plants/:id",
            get(handlers::plants::get_plant)
                .patch(handlers::plants::update_plant_stock)
                .delete(handlers::plants::delete_plant),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
