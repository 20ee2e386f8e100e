//! Shell housekeeping commands.

use proforma_domain::{IncomeLedger, ReportPeriod};

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "period",
            "Set the report period label",
            "period <daily|weekly|monthly|yearly|custom:<label>>",
            cmd_period,
        ),
        CommandEntry::new(
            "reset",
            "Discard all recorded streams",
            "reset [name]",
            cmd_reset,
        ),
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_period(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(value) = args.first() else {
        return Err(CommandError::Input("a period name is required".into()));
    };
    let Some(period) = ReportPeriod::parse(value) else {
        return Err(CommandError::Input(format!("unknown period `{value}`")));
    };
    context.ledger.period = period.clone();
    context.ledger.touch();
    output::success(format!("Report period set to {}.", period.label()));
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = args.first().copied().unwrap_or("proforma");
    context.ledger = IncomeLedger::new(name, context.config.period.clone());
    output::success(format!("Started a fresh ledger `{name}`."));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        if let Some(entry) = context.registry.get(&name) {
            output::section(format!("Help: {}", entry.name));
            println!("  {}", entry.description);
            println!("  usage: {}", entry.usage);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    output::section("Available commands");
    for entry in context.registry.list() {
        println!("  {:<10} {}", entry.name, entry.description);
    }
    println!("  Use `help <command>` for details.");
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section(format!("Proforma CLI {}", env!("CARGO_PKG_VERSION")));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
