use crate::cli::chart::render_chart;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "chart",
        "Show monthly totals as a bar chart",
        "chart",
        cmd_chart,
    )]
}

fn cmd_chart(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::InvalidArguments("usage: chart".into()));
    }
    let report = context.report();
    output::section("Monthly Totals");
    output::lines(render_chart(
        &report,
        &context.formatter(),
        context.config.chart_width,
    ));
    Ok(())
}
