//! Route definitions for the `/payments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// Routes mounted at `/payments`. No update route: a wrong payment is
/// deleted and re-entered rather than edited.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(payment::list).post(payment::create))
        .route("/{id}", get(payment::get_by_id).delete(payment::delete))
}
