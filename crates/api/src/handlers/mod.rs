//! HTTP handlers, one module per resource.

pub mod client;
pub mod invoice;
pub mod package;
pub mod payment;
pub mod report;
pub mod shoot;
