use proforma_domain::LedgerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),
}

impl From<LedgerError> for CoreError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::CapacityExceeded { .. } => CoreError::CapacityExceeded(err.to_string()),
            other => CoreError::InvalidInput(other.to_string()),
        }
    }
}
