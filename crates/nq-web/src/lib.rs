//! # nq-web
//!
//! The web routing and orchestration layer for NestQuest.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use actix_web::web;

pub use state::{AppData, AppState, RecommendationState};

/// Configures the routes for the marketplace.
///
/// Kept separate from server assembly so the main binary and the test
/// harness mount the exact same surface.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/login", web::get().to(handlers::login_page))
        .route("/login", web::post().to(handlers::login_submit))
        .route("/logout", web::post().to(handlers::logout))
        .route("/property/{id}", web::get().to(handlers::property_detail))
        .route(
            "/property/{id}/inquire",
            web::post().to(handlers::send_inquiry),
        )
        .route("/add-property", web::get().to(handlers::add_property_form))
        .route(
            "/add-property",
            web::post().to(handlers::add_property_submit),
        )
        .route(
            "/add-property/describe",
            web::post().to(handlers::describe_draft),
        )
        .default_service(web::to(handlers::fallback));
}
