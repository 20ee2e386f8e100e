//! Vacancy line-item commands.

use proforma_core::VacancyService;

use crate::cli::commands::revenue::parse_stream_args;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "vacancy",
        "Add a vacancy stream or set the aggregate rate",
        "vacancy <category> (--units N --average X | --amounts a,b,c) | vacancy --total F",
        cmd_vacancy,
    )]
}

fn cmd_vacancy(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if matches!(args.first(), Some(&"--total") | Some(&"-t")) {
        if args.len() != 2 {
            return Err(CommandError::Input(
                "--total takes a single fraction and no other arguments".into(),
            ));
        }
        let rate = args[1]
            .parse::<f64>()
            .map_err(|_| CommandError::Input(format!("invalid fraction `{}`", args[1])))?;
        VacancyService::set_aggregate_rate(&mut context.ledger, rate)?;
        output::success(format!(
            "Aggregate vacancy set to {:.2}% of GPI.",
            rate * 100.0
        ));
        return Ok(());
    }

    let (category, basis) = parse_stream_args(args)?;
    VacancyService::add_stream(&mut context.ledger, category.clone(), basis)?;
    output::success(format!(
        "Recorded vacancy stream `{category}` ({} of {} units vacant).",
        context.ledger.itemized_vacancy_units(),
        context.ledger.total_units()
    ));
    Ok(())
}
