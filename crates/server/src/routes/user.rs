use axum::Extension;

use crate::auth::AuthenticatedUser;

/// GET /user/current: name of the authenticated principal.
pub async fn current(Extension(user): Extension<AuthenticatedUser>) -> String {
    user.0
}
