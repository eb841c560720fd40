//! Domain types, error taxonomy, and pure business rules for PhotoDesk.
//!
//! Nothing in this crate performs I/O; it holds the validation and
//! billing arithmetic shared by the repository and handler layers.

pub mod billing;
pub mod contact;
pub mod error;
pub mod types;
