//! Helper functions for recording revenue streams.

use proforma_domain::{AmountBasis, IncomeLedger};
use uuid::Uuid;

use crate::CoreError;

/// Provides mutation helpers for the revenue side of an [`IncomeLedger`].
pub struct RevenueService;

impl RevenueService {
    /// Records a revenue stream under `name` and returns its id.
    pub fn add_stream(
        ledger: &mut IncomeLedger,
        name: impl Into<String>,
        basis: AmountBasis,
    ) -> Result<Uuid, CoreError> {
        let name = name.into();
        let id = ledger.add_revenue_stream(name.clone(), basis)?;
        tracing::debug!(
            stream = %name,
            total_units = ledger.total_units(),
            "revenue stream recorded"
        );
        Ok(id)
    }
}
