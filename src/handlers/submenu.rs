//! Submenu handlers. The owning menu id comes from the path for list and
//! create; single-record operations resolve by submenu id alone.

use crate::error::AppError;
use crate::models::{SubmenuCreate, SubmenuOut, SubmenuUpdate};
use crate::service;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

pub async fn list(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
) -> Result<Json<Vec<SubmenuOut>>, AppError> {
    Ok(Json(service::submenu::list(&state.pool, menu_id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
    Json(input): Json<SubmenuCreate>,
) -> Result<(StatusCode, Json<SubmenuOut>), AppError> {
    let submenu = service::submenu::create(&state.pool, menu_id, &input).await?;
    Ok((StatusCode::CREATED, Json(submenu)))
}

pub async fn read(
    State(state): State<AppState>,
    Path((_menu_id, submenu_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SubmenuOut>, AppError> {
    Ok(Json(service::submenu::get(&state.pool, submenu_id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path((_menu_id, submenu_id)): Path<(Uuid, Uuid)>,
    Json(patch): Json<SubmenuUpdate>,
) -> Result<Json<SubmenuOut>, AppError> {
    Ok(Json(
        service::submenu::update(&state.pool, submenu_id, &patch).await?,
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((_menu_id, submenu_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    service::submenu::delete(&state.pool, submenu_id).await?;
    Ok(StatusCode::OK)
}
