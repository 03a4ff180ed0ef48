//! Implementation of the `varfill render` command.

use miette::IntoDiagnostic;
use serde::Serialize;
use tracing::debug;
use varfill::{reset_placeholders, substitute};

use super::input::{DataArgs, TemplateArgs};

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub template: TemplateArgs,

    #[command(flatten)]
    pub data: DataArgs,

    /// Remove placeholders left unresolved
    #[arg(long)]
    pub reset: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
pub struct RenderResult {
    pub result: String,
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let template = args.template.read()?;
    let data = args.data.var_stack()?.to_value();
    let options = args.data.options(&args.template);

    let mut result = substitute(&template, &data, &options);
    if args.reset {
        result = reset_placeholders(&result, options.start_marker(), options.end_marker());
    }
    debug!(bytes = result.len(), "rendered template");

    if args.json {
        let output = RenderResult { result };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
