//! Builds a sample multifamily proforma and prints its report.

use proforma_core::{
    format::{format_grouped, symbol_for, CurrencyFormatter},
    RevenueService, SummaryService, VacancyService,
};
use proforma_domain::{AmountBasis, IncomeLedger, ReportPeriod};

struct UsdFormatter;

impl CurrencyFormatter for UsdFormatter {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        let code = if currency.is_empty() { "USD" } else { currency };
        format!("{}{}", symbol_for(code), format_grouped(amount, 2))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = IncomeLedger::new("Sample multifamily", ReportPeriod::Monthly);

    // Unit-type rents, itemized or averaged per type.
    RevenueService::add_stream(
        &mut ledger,
        "studio",
        AmountBasis::Uniform {
            amount: 500.0,
            units: 5,
        },
    )?;
    RevenueService::add_stream(
        &mut ledger,
        "one_bedroom",
        AmountBasis::Listed(vec![600.0, 620.0, 610.0]),
    )?;
    RevenueService::add_stream(
        &mut ledger,
        "two_bedroom",
        AmountBasis::Listed(vec![600.0, 620.0, 610.0, 790.0]),
    )?;
    RevenueService::add_stream(
        &mut ledger,
        "three_bedroom",
        AmountBasis::Listed(vec![1600.0, 1620.0, 1610.0]),
    )?;

    // Ancillary income.
    RevenueService::add_stream(&mut ledger, "pet_fees", AmountBasis::Listed(vec![100.0]))?;
    RevenueService::add_stream(&mut ledger, "other_fees", AmountBasis::Listed(vec![3000.0]))?;

    // Unrented units per type.
    VacancyService::add_stream(
        &mut ledger,
        "studio",
        AmountBasis::Uniform {
            amount: 500.0,
            units: 5,
        },
    )?;
    VacancyService::add_stream(
        &mut ledger,
        "one_bedroom",
        AmountBasis::Listed(vec![600.0, 620.0, 1200.0, 1500.0]),
    )?;

    let summary = SummaryService::income_summary(&ledger);
    for line in SummaryService::report_lines(&summary, &UsdFormatter) {
        println!("{line}");
    }

    Ok(())
}
