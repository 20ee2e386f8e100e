//! Report rendering commands.

use colored::Colorize;
use proforma_core::{CurrencyFormatter, SummaryService};
use proforma_domain::StreamTotal;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "report",
            "Print the proforma income report",
            "report [json]",
            cmd_report,
        ),
        CommandEntry::new(
            "streams",
            "List recorded revenue and vacancy lines",
            "streams",
            cmd_streams,
        ),
    ]
}

fn cmd_report(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let summary = SummaryService::income_summary(&context.ledger);

    if let Some(arg) = args.first() {
        if arg.eq_ignore_ascii_case("json") {
            let rendered = serde_json::to_string_pretty(&summary)
                .map_err(|err| CommandError::Command(err.to_string()))?;
            println!("{rendered}");
            return Ok(());
        }
        return Err(CommandError::Input(format!("unknown report mode `{arg}`")));
    }

    for line in SummaryService::report_lines(&summary, &context.formatters) {
        println!("{line}");
    }
    if let Some(occupancy) = summary.economic_occupancy {
        println!(
            "{}",
            format!("Economic occupancy: {occupancy:.1}%").dimmed()
        );
    }
    Ok(())
}

fn cmd_streams(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = SummaryService::income_summary(&context.ledger);
    if summary.revenue_lines.is_empty() && summary.vacancy_lines.is_empty() {
        output::info("No streams recorded yet.");
        return Ok(());
    }

    output::section("Revenue");
    for line in &summary.revenue_lines {
        println!("  {}", render_stream_line(context, line));
    }
    output::section("Vacancy");
    if summary.vacancy_lines.is_empty() {
        println!("  (none)");
    }
    for line in &summary.vacancy_lines {
        println!("  {}", render_stream_line(context, line));
    }
    Ok(())
}

fn render_stream_line(context: &ShellContext, line: &StreamTotal) -> String {
    let total = context.formatters.format_amount(line.total, "");
    match line.units {
        Some(units) => format!("{}: {} ({} units)", line.name, total, units),
        None => format!(
            "{}: {} ({:.2}% of GPI)",
            line.name,
            total,
            line.average * 100.0
        ),
    }
}
