//! Helper functions for recording economic vacancy.

use proforma_domain::{AmountBasis, IncomeLedger};
use uuid::Uuid;

use crate::CoreError;

/// Provides mutation helpers for the vacancy side of an [`IncomeLedger`].
pub struct VacancyService;

impl VacancyService {
    /// Records an itemized vacancy stream under `name` and returns its id.
    pub fn add_stream(
        ledger: &mut IncomeLedger,
        name: impl Into<String>,
        basis: AmountBasis,
    ) -> Result<Uuid, CoreError> {
        let name = name.into();
        let id = ledger.add_vacancy_stream(name.clone(), basis)?;
        tracing::debug!(
            stream = %name,
            vacant_units = ledger.itemized_vacancy_units(),
            "vacancy stream recorded"
        );
        Ok(id)
    }

    /// Switches the ledger to the aggregate vacancy form.
    pub fn set_aggregate_rate(ledger: &mut IncomeLedger, rate: f64) -> Result<(), CoreError> {
        ledger.set_aggregate_vacancy(rate)?;
        tracing::debug!(rate, "aggregate vacancy recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::VacancyService;
    use crate::{CoreError, RevenueService};
    use proforma_domain::{AmountBasis, IncomeLedger, ReportPeriod};

    fn ledger_with_units(units: u32) -> IncomeLedger {
        let mut ledger = IncomeLedger::new("Vacancy", ReportPeriod::Monthly);
        RevenueService::add_stream(
            &mut ledger,
            "flats",
            AmountBasis::Uniform {
                amount: 1000.0,
                units,
            },
        )
        .expect("revenue recorded");
        ledger
    }

    #[test]
    fn excess_units_surface_as_capacity_exceeded() {
        let mut ledger = ledger_with_units(2);
        let err = VacancyService::add_stream(
            &mut ledger,
            "flats",
            AmountBasis::Uniform {
                amount: 1000.0,
                units: 5,
            },
        )
        .expect_err("over capacity");
        assert!(matches!(err, CoreError::CapacityExceeded(_)));
    }

    #[test]
    fn aggregate_rate_applies_to_gpi() {
        let mut ledger = ledger_with_units(10);
        VacancyService::set_aggregate_rate(&mut ledger, 0.05).expect("rate recorded");
        assert!((ledger.total_economic_vacancy() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn mixing_vacancy_forms_is_invalid_input() {
        let mut ledger = ledger_with_units(10);
        VacancyService::add_stream(
            &mut ledger,
            "flats",
            AmountBasis::Uniform {
                amount: 1000.0,
                units: 1,
            },
        )
        .unwrap();
        let err = VacancyService::set_aggregate_rate(&mut ledger, 0.05)
            .expect_err("itemized streams exist");
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }
}
