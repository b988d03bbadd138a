use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use service::menu::domain::Pizza;

use crate::auth::ServerState;
use crate::errors::ApiError;

/// GET /menu: the full catalog in backend order.
pub async fn get_menu(State(state): State<ServerState>) -> Result<Json<Vec<Pizza>>, ApiError> {
    let pizzas = state.service.get_all().await?;
    Ok(Json(pizzas))
}

#[derive(Deserialize)]
pub struct ImageQuery {
    pub name: String,
}

/// GET /menu/image?name=<s>: raw JPEG bytes, or 404 when no such item.
pub async fn get_menu_image(
    State(state): State<ServerState>,
    Query(query): Query<ImageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = state.service.get_image(&query.name).await?;
    Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes))
}

/// POST /menu: validate the payload at the boundary, then append. The
/// repositories never re-validate.
pub async fn create_menu_item(
    State(state): State<ServerState>,
    Json(pizza): Json<Pizza>,
) -> Result<StatusCode, ApiError> {
    pizza.validate()?;
    state.service.create(pizza).await?;
    Ok(StatusCode::OK)
}
