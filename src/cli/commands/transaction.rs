use crate::cli::chart::render_table;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::core::services::TransactionService;
use crate::ledger::RawTransactionInput;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Add a transaction; the date defaults to today",
            "add <amount> <description> [date]",
            cmd_add,
        ),
        CommandEntry::new(
            "edit",
            "Edit a transaction; omitted fields keep their current value",
            "edit <#N|id> [--amount A] [--description D] [--date YYYY-MM-DD]",
            cmd_edit,
        ),
        CommandEntry::new(
            "show",
            "Show the editable fields of a transaction",
            "show <#N|id>",
            cmd_show,
        ),
        CommandEntry::new(
            "delete",
            "Delete a transaction",
            "delete <#N|id>",
            cmd_delete,
        ),
        CommandEntry::new("list", "List transactions in entry order", "list", cmd_list),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let input = match args {
        [amount, description] => RawTransactionInput::dated_today(*amount, *description),
        [amount, description, date] => RawTransactionInput::new(*amount, *description, *date),
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: add <amount> <description> [date]".into(),
            ))
        }
    };
    let transaction = TransactionService::submit_new(&mut context.store, &input)?;
    output::success(format!(
        "Transaction added: {} ({})",
        transaction.id,
        context.formatter().format(transaction.amount)
    ));
    print_totals(context);
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((selector, flags)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: edit <#N|id> [--amount A] [--description D] [--date YYYY-MM-DD]".into(),
        ));
    };
    let id = context.resolve(selector)?;
    let mut input = TransactionService::prefill(&context.store, id)
        .ok_or_else(|| CommandError::UnknownTransaction(selector.to_string()))?;
    apply_field_overrides(&mut input, flags)?;

    if TransactionService::submit_edit(&mut context.store, id, &input)? {
        output::success(format!("Transaction {id} updated."));
    } else {
        output::warning(format!("Transaction {id} no longer exists; nothing changed."));
    }
    print_totals(context);
    Ok(())
}

fn cmd_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [selector] = args else {
        return Err(CommandError::InvalidArguments("usage: show <#N|id>".into()));
    };
    let id = context.resolve(selector)?;
    let input = TransactionService::prefill(&context.store, id)
        .ok_or_else(|| CommandError::UnknownTransaction(selector.to_string()))?;
    output::section(format!("Transaction {id}"));
    output::lines([
        format!("amount:      {}", input.amount),
        format!("description: {}", input.description),
        format!("date:        {}", input.date),
    ]);
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [selector] = args else {
        return Err(CommandError::InvalidArguments("usage: delete <#N|id>".into()));
    };
    let id = context.resolve(selector)?;
    if !context.confirm(&format!("Delete transaction {id}?"))? {
        output::info("Delete cancelled.");
        return Ok(());
    }
    if TransactionService::delete(&mut context.store, id) {
        output::success(format!("Transaction {id} deleted."));
    }
    print_totals(context);
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::InvalidArguments("usage: list".into()));
    }
    let formatter = context.formatter();
    output::section("Transaction History");
    output::lines(render_table(
        TransactionService::list(&context.store),
        &formatter,
    ));
    Ok(())
}

/// Applies `--field value` (or `--field=value`) pairs on top of pre-filled
/// form values.
fn apply_field_overrides(input: &mut RawTransactionInput, flags: &[&str]) -> CommandResult {
    let mut remaining = flags.iter();
    while let Some(flag) = remaining.next() {
        let (name, value) = match flag.split_once('=') {
            Some((name, value)) => (name, value.to_string()),
            None => {
                let value = remaining.next().ok_or_else(|| {
                    CommandError::InvalidArguments(format!("missing value for `{flag}`"))
                })?;
                (*flag, value.to_string())
            }
        };
        match name {
            "--amount" => input.amount = value,
            "--description" => input.description = value,
            "--date" => input.date = value,
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown option `{other}` (use --amount, --description or --date)"
                )))
            }
        }
    }
    Ok(())
}

/// Recomputes the monthly totals after a store change.
fn print_totals(context: &ShellContext) {
    let report = context.report();
    output::info(format!(
        "{} transaction(s) across {} month(s), net {}",
        context.store.len(),
        report.rows.len(),
        context.formatter().format(report.grand_total())
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_accept_split_and_joined_flags() {
        let mut input = RawTransactionInput::new("1", "One", "2024-01-01");
        apply_field_overrides(
            &mut input,
            &["--amount", "-2.5", "--description=Two words", "--date", "2024-02-02"],
        )
        .unwrap();
        assert_eq!(
            input,
            RawTransactionInput::new("-2.5", "Two words", "2024-02-02")
        );
    }

    #[test]
    fn overrides_reject_unknown_or_dangling_flags() {
        let mut input = RawTransactionInput::default();
        assert!(matches!(
            apply_field_overrides(&mut input, &["--category", "food"]),
            Err(CommandError::InvalidArguments(_))
        ));
        assert!(matches!(
            apply_field_overrides(&mut input, &["--amount"]),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn empty_description_override_is_left_to_validation() {
        let mut input = RawTransactionInput::new("1", "One", "2024-01-01");
        apply_field_overrides(&mut input, &["--description", ""]).unwrap();
        assert!(input.validate().is_err());
    }
}
