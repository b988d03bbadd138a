use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    headers::{authorization::Basic, Authorization},
    TypedHeader,
};

use service::menu::MenuService;

/// Single in-memory credential checked by HTTP Basic auth.
#[derive(Clone)]
pub struct BasicAuthConfig {
    pub username: String,
    pub password: String,
}

#[derive(Clone)]
pub struct ServerState {
    pub service: Arc<MenuService>,
    pub auth: BasicAuthConfig,
}

/// Name of the principal that passed basic auth, stashed in request
/// extensions for downstream handlers.
#[derive(Clone)]
pub struct AuthenticatedUser(pub String);

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic realm=\"pizza\"")],
    )
        .into_response()
}

/// Middleware: require valid HTTP Basic credentials on protected routes.
pub async fn require_basic_auth(
    State(state): State<ServerState>,
    creds: Option<TypedHeader<Authorization<Basic>>>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(TypedHeader(creds)) = creds else {
        return unauthorized();
    };
    if creds.username() != state.auth.username || creds.password() != state.auth.password {
        return unauthorized();
    }
    req.extensions_mut()
        .insert(AuthenticatedUser(creds.username().to_string()));
    next.run(req).await
}
