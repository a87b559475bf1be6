use std::io;

use dialoguer::{theme::ColorfulTheme, Confirm};
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::cli::commands;
use crate::cli::output;
use crate::cli::registry::CommandRegistry;
use crate::config::{Config, ConfigManager};
use crate::core::services::{MonthlyReport, SummaryService};
use crate::currency::CurrencyFormatter;
use crate::errors::{FormErrors, TrackerError};
use crate::ledger::{TransactionId, TransactionStore};

/// Shell-level failures that end the session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

/// Failures of a single command; reported and then the shell carries on.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("No transaction matches `{0}`. Use `list` to see positions and ids.")]
    UnknownTransaction(String),
    #[error(transparent)]
    Form(#[from] FormErrors),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// State of one shell session. The session is the sole owner of the store.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) running: bool,
    pub(crate) store: TransactionStore,
    pub(crate) config: Config,
    pub(crate) config_manager: ConfigManager,
    pub(crate) registry: CommandRegistry,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Self {
        Self::with_config_manager(mode, ConfigManager::new())
    }

    pub fn with_config_manager(mode: CliMode, config_manager: ConfigManager) -> Self {
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                output::warning(format!(
                    "Ignoring unreadable preferences at {}: {err}",
                    config_manager.path().display()
                ));
                Config::default()
            }
        };
        output::set_color(config.color);

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        Self {
            mode,
            running: true,
            store: TransactionStore::new(),
            config,
            config_manager,
            registry,
        }
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn prompt(&self) -> String {
        format!("finance ({})> ", self.store.len())
    }

    pub(crate) fn formatter(&self) -> CurrencyFormatter {
        self.config.formatter()
    }

    pub(crate) fn report(&self) -> MonthlyReport {
        SummaryService::monthly_report(&self.store)
    }

    pub(crate) fn resolve(&self, selector: &str) -> Result<TransactionId, CommandError> {
        self.store
            .resolve(selector)
            .ok_or_else(|| CommandError::UnknownTransaction(selector.to_string()))
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenises and dispatches one input line.
    pub fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match shell_words::split(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));
        if let Some(best) = self.registry.suggest(input) {
            output::info(format!("Suggestion: `{best}`?"));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Form(errors) => {
                for error in errors.errors() {
                    output::error(format!("{}: {error}", error.field()));
                }
            }
            other => output::error(other),
        }
        Ok(())
    }

    /// Asks before a destructive action; script mode never prompts.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Exit shell? Transactions are not saved.")
            .default(true)
            .interact()
            .map_err(CliError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{FieldIssue, ValidationError};
    use tempfile::TempDir;

    fn script_context() -> (ShellContext, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path());
        let context = ShellContext::with_config_manager(CliMode::Script, manager);
        (context, dir)
    }

    #[test]
    fn add_edit_delete_flow_updates_store() {
        let (mut context, _dir) = script_context();

        context.process_line("add 100 Salary 2024-12-05").unwrap();
        context.process_line("add -20 'Dinner out' 2024-12-20").unwrap();
        assert_eq!(context.store().len(), 2);
        assert_eq!(context.store().list()[1].description, "Dinner out");

        context
            .process_line("edit #2 --amount -25.5 --date 2025-01-03")
            .unwrap();
        let edited = &context.store().list()[1];
        assert_eq!(edited.amount, -25.5);
        assert_eq!(edited.description, "Dinner out");
        assert_eq!(edited.date.to_string(), "2025-01-03");

        context.process_line("delete #1").unwrap();
        assert_eq!(context.store().len(), 1);
        assert_eq!(context.report().rows.len(), 1);
    }

    #[test]
    fn invalid_add_surfaces_form_errors() {
        let (mut context, _dir) = script_context();
        let err = context
            .process_line("add abc '' 2024-01-01")
            .expect_err("invalid form");
        match err {
            CommandError::Form(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(context.store().is_empty());
    }

    #[test]
    fn add_without_date_uses_today() {
        let (mut context, _dir) = script_context();
        let before = chrono::Local::now().date_naive();
        context.process_line("add 4.5 Coffee").unwrap();
        let after = chrono::Local::now().date_naive();

        let stored = &context.store().list()[0];
        assert_eq!(stored.description, "Coffee");
        assert!(stored.date == before || stored.date == after);
    }

    #[test]
    fn add_with_empty_date_is_still_missing() {
        let (mut context, _dir) = script_context();
        let err = context
            .process_line("add 4.5 Coffee ''")
            .expect_err("blank date");
        match err {
            CommandError::Form(errors) => assert_eq!(
                errors.errors(),
                &[ValidationError::InvalidDate(FieldIssue::Missing)]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(context.store().is_empty());
    }

    #[test]
    fn unknown_selector_is_reported() {
        let (mut context, _dir) = script_context();
        let err = context.process_line("delete #4").expect_err("nothing stored");
        assert!(matches!(err, CommandError::UnknownTransaction(ref s) if s == "#4"));
    }

    #[test]
    fn exit_stops_the_loop() {
        let (mut context, _dir) = script_context();
        assert_eq!(context.mode(), CliMode::Script);
        assert_eq!(context.process_line("exit").unwrap(), LoopControl::Exit);
        assert!(!context.running);
    }

    #[test]
    fn unknown_commands_and_blank_lines_continue() {
        let (mut context, _dir) = script_context();
        assert_eq!(context.process_line("lsit").unwrap(), LoopControl::Continue);
        assert_eq!(context.process_line("   ").unwrap(), LoopControl::Continue);
    }
}
