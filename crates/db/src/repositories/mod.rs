//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Relationships are
//! explicit foreign-key lookups; there is no implicit traversal.

pub mod client_repo;
pub mod invoice_repo;
pub mod package_repo;
pub mod payment_repo;
pub mod report_repo;
pub mod shoot_repo;

pub use client_repo::ClientRepo;
pub use invoice_repo::InvoiceRepo;
pub use package_repo::PackageRepo;
pub use payment_repo::PaymentRepo;
pub use report_repo::ReportRepo;
pub use shoot_repo::ShootRepo;
