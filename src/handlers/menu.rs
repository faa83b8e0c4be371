//! Menu handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::models::{MenuCreate, MenuOut, MenuUpdate};
use crate::service;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MenuOut>>, AppError> {
    Ok(Json(service::menu::list(&state.pool).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<MenuCreate>,
) -> Result<(StatusCode, Json<MenuOut>), AppError> {
    let menu = service::menu::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(menu)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
) -> Result<Json<MenuOut>, AppError> {
    Ok(Json(service::menu::get(&state.pool, menu_id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
    Json(patch): Json<MenuUpdate>,
) -> Result<Json<MenuOut>, AppError> {
    Ok(Json(service::menu::update(&state.pool, menu_id, &patch).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    service::menu::delete(&state.pool, menu_id).await?;
    Ok(StatusCode::OK)
}
