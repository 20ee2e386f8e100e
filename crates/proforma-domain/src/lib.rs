//! proforma-domain
//!
//! Pure domain models for proforma income calculations (IncomeLedger,
//! revenue/vacancy streams, derived summaries). No I/O, no CLI, no logging.

pub mod common;
pub mod ledger;
pub mod stream;

pub use common::*;
pub use ledger::*;
pub use stream::*;
