//! Submenu queries. List and create are scoped to the owning menu; single
//! reads resolve by submenu id alone.

use crate::error::{AppError, EntityKind};
use crate::models::{SubmenuCreate, SubmenuOut, SubmenuUpdate};
use sqlx::PgPool;
use uuid::Uuid;

const SELECT_WITH_COUNTS: &str = "SELECT s.id, s.title, s.description, s.menu_id, \
     (SELECT COUNT(*) FROM dishes d WHERE d.submenu_id = s.id) AS dishes_count \
     FROM submenus s";

pub async fn list(pool: &PgPool, menu_id: Uuid) -> Result<Vec<SubmenuOut>, AppError> {
    let sql = format!("{SELECT_WITH_COUNTS} WHERE s.menu_id = $1");
    tracing::debug!(sql = %sql, %menu_id, "list submenus");
    let rows = sqlx::query_as::<_, SubmenuOut>(&sql)
        .bind(menu_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<SubmenuOut, AppError> {
    let sql = format!("{SELECT_WITH_COUNTS} WHERE s.id = $1");
    sqlx::query_as::<_, SubmenuOut>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound(EntityKind::Submenu))
}

/// Insert under the menu from the path and re-read with counts in one
/// transaction. A missing parent menu surfaces as a foreign-key failure.
pub async fn create(
    pool: &PgPool,
    menu_id: Uuid,
    input: &SubmenuCreate,
) -> Result<SubmenuOut, AppError> {
    let mut tx = pool.begin().await?;
    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO submenus (title, description, menu_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(menu_id)
    .fetch_one(&mut *tx)
    .await?;
    let sql = format!("{SELECT_WITH_COUNTS} WHERE s.id = $1");
    let row = sqlx::query_as::<_, SubmenuOut>(&sql)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(row)
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    patch: &SubmenuUpdate,
) -> Result<SubmenuOut, AppError> {
    let mut tx = pool.begin().await?;
    let updated: Option<(Uuid,)> = sqlx::query_as(
        "UPDATE submenus SET title = COALESCE($2, title), \
         description = COALESCE($3, description), updated_at = NOW() \
         WHERE id = $1 RETURNING id",
    )
    .bind(id)
    .bind(&patch.title)
    .bind(&patch.description)
    .fetch_optional(&mut *tx)
    .await?;
    let Some((id,)) = updated else {
        return Err(AppError::NotFound(EntityKind::Submenu));
    };
    let sql = format!("{SELECT_WITH_COUNTS} WHERE s.id = $1");
    let row = sqlx::query_as::<_, SubmenuOut>(&sql)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(row)
}

/// Delete the submenu; the cascade removes its dishes.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let deleted = sqlx::query("DELETE FROM submenus WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    if deleted.is_none() {
        return Err(AppError::NotFound(EntityKind::Submenu));
    }
    Ok(())
}
