//! Dish handlers, nested two levels deep under menus and submenus.

use crate::error::AppError;
use crate::models::{DishCreate, DishOut, DishUpdate};
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
    Path((_menu_id, submenu_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<DishOut>>, AppError> {
    Ok(Json(service::dish::list(&state.pool, submenu_id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Path((_menu_id, submenu_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<DishCreate>,
) -> Result<(StatusCode, Json<DishOut>), AppError> {
    let dish = service::dish::create(&state.pool, submenu_id, &input).await?;
    Ok((StatusCode::CREATED, Json(dish)))
}

pub async fn read(
    State(state): State<AppState>,
    Path((_menu_id, _submenu_id, dish_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<DishOut>, AppError> {
    Ok(Json(service::dish::get(&state.pool, dish_id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path((_menu_id, _submenu_id, dish_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(patch): Json<DishUpdate>,
) -> Result<Json<DishOut>, AppError> {
    Ok(Json(service::dish::update(&state.pool, dish_id, &patch).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((_menu_id, _submenu_id, dish_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    service::dish::delete(&state.pool, dish_id).await?;
    Ok(StatusCode::OK)
}
