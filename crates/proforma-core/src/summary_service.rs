//! Aggregation helpers for proforma summaries and report lines.

use proforma_domain::{IncomeLedger, IncomeSummary};

use crate::format::CurrencyFormatter;

/// Derives proforma totals and renders the canonical report lines.
///
/// See also: [`proforma_domain::IncomeSummary`] for the returned data model.
pub struct SummaryService;

impl SummaryService {
    /// Snapshots the ledger's current totals.
    pub fn income_summary(ledger: &IncomeLedger) -> IncomeSummary {
        ledger.summarize()
    }

    /// Renders the three canonical proforma lines for `summary`.
    pub fn report_lines(summary: &IncomeSummary, formatter: &dyn CurrencyFormatter) -> Vec<String> {
        let period = summary.period.label();
        vec![
            format!(
                "{period} Gross Potential Income: {}",
                formatter.format_amount(summary.gross_potential_income, "")
            ),
            format!(
                "{period} Total Economic Vacancy: {}",
                formatter.format_amount(summary.total_economic_vacancy, "")
            ),
            format!(
                "{period} Gross Operating Income (GOI): {}",
                formatter.format_amount(summary.gross_operating_income, "")
            ),
        ]
    }
}
