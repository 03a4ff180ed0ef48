//! Implementation of the `varfill check` command.

use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use varfill::check;

use super::input::{DataArgs, TemplateArgs};
use crate::output::table::format_unresolved_table;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub template: TemplateArgs,

    #[command(flatten)]
    pub data: DataArgs,

    /// Exit with non-zero code if any placeholder is unresolved
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let template = args.template.read()?;
    let data = args.data.var_stack()?.to_value();
    let options = args.data.options(&args.template);

    let report = check(&template, &data, &options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
    } else if report.is_complete() {
        println!(
            "{}",
            "All placeholders resolved".if_supports_color(Stream::Stdout, |t| t.green())
        );
    } else {
        println!("{}", format_unresolved_table(&report.unresolved));
        println!(
            "\n{} unresolved placeholder(s)",
            report
                .unresolved
                .len()
                .if_supports_color(Stream::Stdout, |t| t.yellow())
        );
    }

    if args.strict && !report.is_complete() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
