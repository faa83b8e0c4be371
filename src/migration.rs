//! Startup DDL for the menu hierarchy. Order follows foreign-key
//! dependencies: menus, then submenus, then dishes.

use crate::error::AppError;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Create the three tables and their indexes if missing. Cascade delete is
/// enforced at the storage level: dropping a menu removes its submenus and,
/// transitively, their dishes.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS menus (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS submenus (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            menu_id UUID NOT NULL REFERENCES menus (id) ON DELETE CASCADE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_submenus_menu_id ON submenus (menu_id)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dishes (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            price NUMERIC(8, 2) NOT NULL,
            submenu_id UUID NOT NULL REFERENCES submenus (id) ON DELETE CASCADE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_dishes_submenu_id ON dishes (submenu_id)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create the menu database when it does not exist yet. The configured URL
/// is re-pointed at the `postgres` maintenance database on the same server
/// for the CREATE DATABASE statement.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| AppError::BadRequest(format!("DATABASE_URL does not parse: {e}")))?;
    let Some(db_name) = opts.get_database().map(str::to_owned) else {
        // No explicit database in the URL; the server default will do.
        return Ok(());
    };
    if db_name == "postgres" {
        return Ok(());
    }
    let mut admin = opts.database("postgres").connect().await?;
    let known: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut admin)
            .await?;
    if !known {
        sqlx::query(&format!("CREATE DATABASE {}", quoted_database_name(&db_name)))
            .execute(&mut admin)
            .await?;
    }
    Ok(())
}

/// Identifier quoting for CREATE DATABASE (the name cannot be a bind
/// parameter). Embedded quotes are doubled per SQL rules.
fn quoted_database_name(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_database_name_from_url() {
        let opts =
            PgConnectOptions::from_str("postgres://u:p@localhost:5432/menus?sslmode=disable")
                .unwrap();
        assert_eq!(opts.get_database(), Some("menus"));
    }

    #[test]
    fn database_quoting_doubles_embedded_quotes() {
        assert_eq!(quoted_database_name("menus"), "\"menus\"");
        assert_eq!(quoted_database_name("me\"nus"), "\"me\"\"nus\"");
    }
}
