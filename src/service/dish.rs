//! Dish queries. Dishes carry no derived counts, so every mutation is a
//! single statement with a full RETURNING row.

use crate::error::{AppError, EntityKind};
use crate::models::{DishCreate, DishOut, DishUpdate};
use sqlx::PgPool;
use uuid::Uuid;

const COLUMNS: &str = "id, title, description, price, submenu_id";

pub async fn list(pool: &PgPool, submenu_id: Uuid) -> Result<Vec<DishOut>, AppError> {
    let sql = format!("SELECT {COLUMNS} FROM dishes WHERE submenu_id = $1");
    tracing::debug!(sql = %sql, %submenu_id, "list dishes");
    let rows = sqlx::query_as::<_, DishOut>(&sql)
        .bind(submenu_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<DishOut, AppError> {
    let sql = format!("SELECT {COLUMNS} FROM dishes WHERE id = $1");
    sqlx::query_as::<_, DishOut>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound(EntityKind::Dish))
}

/// Insert under the submenu from the path. The NUMERIC(8,2) column rounds
/// the stored price to two fraction digits.
pub async fn create(
    pool: &PgPool,
    submenu_id: Uuid,
    input: &DishCreate,
) -> Result<DishOut, AppError> {
    let sql = format!(
        "INSERT INTO dishes (title, description, price, submenu_id) \
         VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
    );
    let row = sqlx::query_as::<_, DishOut>(&sql)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.price)
        .bind(submenu_id)
        .fetch_one(pool)
        .await?;
    Ok(row)
}

pub async fn update(pool: &PgPool, id: Uuid, patch: &DishUpdate) -> Result<DishOut, AppError> {
    let sql = format!(
        "UPDATE dishes SET title = COALESCE($2, title), \
         description = COALESCE($3, description), \
         price = COALESCE($4, price), updated_at = NOW() \
         WHERE id = $1 RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, DishOut>(&sql)
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(patch.price)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound(EntityKind::Dish))
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let deleted = sqlx::query("DELETE FROM dishes WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    if deleted.is_none() {
        return Err(AppError::NotFound(EntityKind::Dish));
    }
    Ok(())
}
