//! Route definitions for the `/shoots` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::shoot;
use crate::state::AppState;

/// Routes mounted at `/shoots`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(shoot::list).post(shoot::create))
        .route(
            "/{id}",
            get(shoot::get_by_id)
                .put(shoot::update)
                .delete(shoot::delete),
        )
}
