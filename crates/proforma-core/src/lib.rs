//! proforma-core
//!
//! Business logic and services for proforma income calculations.
//! Depends on proforma-domain. No CLI, no terminal I/O, no persistence.

pub mod error;
pub mod format;
pub mod revenue_service;
pub mod summary_service;
pub mod vacancy_service;

pub use error::CoreError;
pub use format::*;
pub use revenue_service::*;
pub use summary_service::*;
pub use vacancy_service::*;
