use axum::{
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::auth::{self, ServerState};

pub mod menu;
pub mod user;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public menu routes plus the
/// basic-auth-protected image and user routes.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    // Public routes (menu listing/creation + health)
    let public = Router::new()
        .route("/health", get(health))
        .route("/menu", get(menu::get_menu).post(menu::create_menu_item));

    // Routes behind HTTP Basic auth
    let protected = Router::new()
        .route("/menu/image", get(menu::get_menu_image))
        .route("/user/current", get(user::current))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_basic_auth,
        ));

    public
        .merge(protected)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
