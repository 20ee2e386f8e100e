//! Revenue line-item commands.

use proforma_core::RevenueService;
use proforma_domain::AmountBasis;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "revenue",
        "Add a revenue stream",
        "revenue <category> (--units N --average X | --amounts a,b,c)",
        cmd_revenue,
    )]
}

fn cmd_revenue(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (category, basis) = parse_stream_args(args)?;
    RevenueService::add_stream(&mut context.ledger, category.clone(), basis)?;
    output::success(format!(
        "Recorded revenue stream `{category}` ({} units total).",
        context.ledger.total_units()
    ));
    Ok(())
}

/// Parses `<category>` plus exactly one amount form: `--average` with
/// `--units`, or an `--amounts` list. Supplying both or neither is an input
/// error.
pub(crate) fn parse_stream_args(args: &[&str]) -> Result<(String, AmountBasis), CommandError> {
    let Some((category, flags)) = args.split_first() else {
        return Err(CommandError::Input("a category name is required".into()));
    };
    if category.starts_with("--") {
        return Err(CommandError::Input("a category name is required".into()));
    }

    let mut units: Option<u32> = None;
    let mut average: Option<f64> = None;
    let mut amounts: Option<Vec<f64>> = None;

    let mut iter = flags.iter();
    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| CommandError::Input(format!("`{flag}` expects a value")))?;
        match *flag {
            "--units" | "-u" => {
                let parsed = value
                    .parse::<u32>()
                    .map_err(|_| CommandError::Input(format!("invalid unit count `{value}`")))?;
                units = Some(parsed);
            }
            "--average" | "-a" => {
                let parsed = value
                    .parse::<f64>()
                    .map_err(|_| CommandError::Input(format!("invalid amount `{value}`")))?;
                average = Some(parsed);
            }
            "--amounts" | "-l" => {
                let parsed = value
                    .split(',')
                    .map(|piece| piece.trim().parse::<f64>())
                    .collect::<Result<Vec<f64>, _>>()
                    .map_err(|_| {
                        CommandError::Input(format!("invalid amounts list `{value}`"))
                    })?;
                amounts = Some(parsed);
            }
            other => {
                return Err(CommandError::Input(format!("unknown flag `{other}`")));
            }
        }
    }

    match (average, amounts) {
        (Some(_), Some(_)) => Err(CommandError::Input(
            "provide either --average or --amounts, not both".into(),
        )),
        (None, None) => Err(CommandError::Input(
            "provide either --average with --units, or --amounts".into(),
        )),
        (Some(amount), None) => {
            let units = units
                .ok_or_else(|| CommandError::Input("--average requires --units".into()))?;
            Ok((category.to_string(), AmountBasis::Uniform { amount, units }))
        }
        // an explicit list wins over any --units value, as with the ledger itself
        (None, Some(list)) => Ok((category.to_string(), AmountBasis::Listed(list))),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_stream_args;
    use proforma_domain::AmountBasis;

    #[test]
    fn parses_uniform_and_listed_forms() {
        let (name, basis) = parse_stream_args(&["studio", "--units", "5", "--average", "500"])
            .expect("uniform form");
        assert_eq!(name, "studio");
        assert_eq!(
            basis,
            AmountBasis::Uniform {
                amount: 500.0,
                units: 5,
            }
        );

        let (_, basis) =
            parse_stream_args(&["one_bedroom", "--amounts", "600,620,610"]).expect("listed form");
        assert_eq!(basis, AmountBasis::Listed(vec![600.0, 620.0, 610.0]));
    }

    #[test]
    fn rejects_both_and_neither_amount_specifications() {
        assert!(parse_stream_args(&["studio", "--average", "500", "--amounts", "1,2"]).is_err());
        assert!(parse_stream_args(&["studio"]).is_err());
        assert!(parse_stream_args(&["studio", "--average", "500"]).is_err());
    }
}
