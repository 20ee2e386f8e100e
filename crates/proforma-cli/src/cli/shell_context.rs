//! Shared runtime state for shell interactions and command execution.

use proforma_domain::IncomeLedger;

use crate::cli::commands;
use crate::cli::core::{CliMode, CommandError, LoopControl};
use crate::cli::formatters::CliFormatters;
use crate::cli::output;
use crate::cli::registry::CommandRegistry;
use crate::config::CliConfig;

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: IncomeLedger,
    pub config: CliConfig,
    pub formatters: CliFormatters,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Self {
        let config = CliConfig::from_env();
        let formatters = CliFormatters::new(&config);
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        Self {
            mode,
            registry,
            ledger: IncomeLedger::new("proforma", config.period.clone()),
            config,
            formatters,
            last_command: None,
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        format!("proforma ({})> ", self.ledger.period.label().to_lowercase())
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Runs the named command, translating exit requests into loop control.
    pub fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    /// Prints the nearest known command for an unrecognized name.
    pub fn suggest_command(&self, unknown: &str) {
        let lowered = unknown.to_lowercase();
        let suggestion = self
            .registry
            .names()
            .map(|name| (strsim::levenshtein(name, &lowered), name))
            .min();
        match suggestion {
            Some((distance, name)) if distance <= 3 => {
                output::warning(format!(
                    "Unknown command `{unknown}`. Did you mean `{name}`?"
                ));
            }
            _ => output::warning(format!("Unknown command `{unknown}`. Try `help`.")),
        }
    }

    pub fn report_error(&mut self, err: CommandError) {
        output::error(err);
    }

    /// Confirms exit on Ctrl-C; script mode exits without prompting.
    pub fn confirm_exit(&self) -> bool {
        if self.mode != CliMode::Interactive {
            return true;
        }
        dialoguer::Confirm::new()
            .with_prompt("Exit the proforma shell?")
            .default(true)
            .interact()
            .unwrap_or(true)
    }
}
