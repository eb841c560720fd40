//! Route tree for the API.

pub mod client;
pub mod health;
pub mod invoice;
pub mod package;
pub mod payment;
pub mod report;
pub mod shoot;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /clients              list, create
/// /clients/{id}         get, update, delete
/// /shoots               list (filter: client_id), create
/// /shoots/{id}          get, update, delete
/// /packages             list, create
/// /packages/{id}        get, update, delete
/// /invoices             list (filters: shoot_id, status, date range), create
/// /invoices/{id}        get, update, delete
/// /invoices/{id}/summary totals and balance
/// /payments             list (filter: invoice_id), create
/// /payments/{id}        get, delete
/// /reports/invoices     joined report with balances
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", client::router())
        .nest("/shoots", shoot::router())
        .nest("/packages", package::router())
        .nest("/invoices", invoice::router())
        .nest("/payments", payment::router())
        .nest("/reports", report::router())
}
