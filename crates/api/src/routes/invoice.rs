//! Route definitions for the `/invoices` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::invoice;
use crate::state::AppState;

/// Routes mounted at `/invoices`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(invoice::list).post(invoice::create))
        .route(
            "/{id}",
            get(invoice::get_by_id)
                .put(invoice::update)
                .delete(invoice::delete),
        )
        .route("/{id}/summary", get(invoice::summary))
}
