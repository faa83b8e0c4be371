//! Menu queries: list and single reads with derived counts, create,
//! partial update, cascading delete.

use crate::error::{AppError, EntityKind};
use crate::models::{MenuCreate, MenuOut, MenuUpdate};
use sqlx::PgPool;
use uuid::Uuid;

/// Counts are scalar subqueries so the entity and its counts come from one
/// statement snapshot. The dish count goes submenu -> dish scoped by
/// menu_id; joining menus a second time would multiply rows once a menu has
/// several submenus.
const SELECT_WITH_COUNTS: &str = "SELECT m.id, m.title, m.description, \
     (SELECT COUNT(*) FROM submenus s WHERE s.menu_id = m.id) AS submenus_count, \
     (SELECT COUNT(*) FROM dishes d JOIN submenus s ON s.id = d.submenu_id \
      WHERE s.menu_id = m.id) AS dishes_count \
     FROM menus m";

pub async fn list(pool: &PgPool) -> Result<Vec<MenuOut>, AppError> {
    tracing::debug!(sql = SELECT_WITH_COUNTS, "list menus");
    let rows = sqlx::query_as::<_, MenuOut>(SELECT_WITH_COUNTS)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<MenuOut, AppError> {
    let sql = format!("{SELECT_WITH_COUNTS} WHERE m.id = $1");
    sqlx::query_as::<_, MenuOut>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound(EntityKind::Menu))
}

/// Insert and re-read with counts in one transaction. A fresh menu always
/// reads back with both counts at zero.
pub async fn create(pool: &PgPool, input: &MenuCreate) -> Result<MenuOut, AppError> {
    let mut tx = pool.begin().await?;
    let (id,): (Uuid,) =
        sqlx::query_as("INSERT INTO menus (title, description) VALUES ($1, $2) RETURNING id")
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;
    let sql = format!("{SELECT_WITH_COUNTS} WHERE m.id = $1");
    let row = sqlx::query_as::<_, MenuOut>(&sql)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(row)
}

/// Overwrite only the provided fields; absent and null both mean "keep".
pub async fn update(pool: &PgPool, id: Uuid, patch: &MenuUpdate) -> Result<MenuOut, AppError> {
    let mut tx = pool.begin().await?;
    let updated: Option<(Uuid,)> = sqlx::query_as(
        "UPDATE menus SET title = COALESCE($2, title), \
         description = COALESCE($3, description), updated_at = NOW() \
         WHERE id = $1 RETURNING id",
    )
    .bind(id)
    .bind(&patch.title)
    .bind(&patch.description)
    .fetch_optional(&mut *tx)
    .await?;
    // Dropping the transaction on the error path rolls it back.
    let Some((id,)) = updated else {
        return Err(AppError::NotFound(EntityKind::Menu));
    };
    let sql = format!("{SELECT_WITH_COUNTS} WHERE m.id = $1");
    let row = sqlx::query_as::<_, MenuOut>(&sql)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(row)
}

/// Delete the menu; the storage-level cascade removes its submenus and
/// their dishes in the same statement.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let deleted = sqlx::query("DELETE FROM menus WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    if deleted.is_none() {
        return Err(AppError::NotFound(EntityKind::Menu));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dish_count_never_joins_menus() {
        // A second join through menus would turn the dish count into a
        // cartesian product once a menu has more than one submenu.
        let dish_count = SELECT_WITH_COUNTS
            .split("AS dishes_count")
            .next()
            .and_then(|s| s.split("submenus_count,").nth(1))
            .unwrap();
        assert!(dish_count.contains("JOIN submenus"));
        assert!(!dish_count.contains("JOIN menus"));
        assert!(dish_count.contains("s.menu_id = m.id"));
    }
}
