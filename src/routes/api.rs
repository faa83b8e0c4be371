//! The /api/v1 menu hierarchy routes.
//!
//! Collection paths keep their trailing slash; that is the published
//! contract. Parameter names must match across overlapping routes or the
//! router rejects them at startup.

use crate::handlers::{dish, menu, submenu};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/menus/", get(menu::list).post(menu::create))
        .route(
            "/api/v1/menus/:menu_id",
            get(menu::read).patch(menu::update).delete(menu::delete),
        )
        .route(
            "/api/v1/menus/:menu_id/submenus/",
            get(submenu::list).post(submenu::create),
        )
        .route(
            "/api/v1/menus/:menu_id/submenus/:submenu_id",
            get(submenu::read)
                .patch(submenu::update)
                .delete(submenu::delete),
        )
        .route(
            "/api/v1/menus/:menu_id/submenus/:submenu_id/dishes/",
            get(dish::list).post(dish::create),
        )
        .route(
            "/api/v1/menus/:menu_id/submenus/:submenu_id/dishes/:dish_id",
            get(dish::read).patch(dish::update).delete(dish::delete),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        // Lazy pool: never connects unless a handler runs a query.
        let pool = sqlx::postgres::PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(200))
            .connect_lazy("postgres://localhost:1/unreachable")
            .unwrap();
        AppState { pool }
    }

    #[tokio::test]
    async fn unknown_paths_fall_through_to_404() {
        let app = api_routes(test_state());
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/nope")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn collection_routes_require_the_trailing_slash_form() {
        // Registered with a trailing slash; the handler is reached (and
        // fails on the unreachable pool) rather than the router 404ing.
        let app = api_routes(test_state());
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/menus/")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_ne!(resp.status(), StatusCode::NOT_FOUND);
    }
}
