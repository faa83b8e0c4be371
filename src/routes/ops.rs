//! Operational routes: liveness, readiness, build info.
//!
//! Readiness goes beyond a ping: the service is only ready once the three
//! menu tables exist, so a deploy that skipped migrations reports 503 with
//! the per-table state instead of failing on the first real request.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Serialize, FromRow)]
struct TableStatus {
    menus: bool,
    submenus: bool,
    dishes: bool,
}

impl TableStatus {
    fn all_present(&self) -> bool {
        self.menus && self.submenus && self.dishes
    }
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tables: Option<TableStatus>,
}

async fn alive() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    let probed = sqlx::query_as::<_, TableStatus>(
        "SELECT to_regclass('menus') IS NOT NULL AS menus, \
         to_regclass('submenus') IS NOT NULL AS submenus, \
         to_regclass('dishes') IS NOT NULL AS dishes",
    )
    .fetch_one(&state.pool)
    .await;
    match probed {
        Ok(tables) if tables.all_present() => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "ok",
                tables: Some(tables),
            }),
        ),
        Ok(tables) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "migrations pending",
                tables: Some(tables),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "database unavailable",
                    tables: None,
                }),
            )
        }
    }
}

async fn build_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "api": "/api/v1"
    }))
}

pub fn ops_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(alive))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use tower::ServiceExt;

    fn unreachable_state() -> AppState {
        // Lazy pool; only /ready ever touches it.
        let pool = sqlx::postgres::PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(200))
            .connect_lazy("postgres://localhost:1/unreachable")
            .unwrap();
        AppState { pool }
    }

    #[tokio::test]
    async fn liveness_needs_no_database() {
        let app = ops_routes(unreachable_state());
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_degrades_without_a_database() {
        let app = ops_routes(unreachable_state());
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "database unavailable");
        assert!(body.get("tables").is_none());
    }
}
