//! Implementation of the `varfill reset` command.

use varfill::reset_placeholders;

use super::input::TemplateArgs;

/// Arguments for the reset command.
#[derive(Debug, clap::Args)]
pub struct ResetArgs {
    #[command(flatten)]
    pub template: TemplateArgs,
}

/// Run the reset command.
pub fn run_reset(args: ResetArgs) -> miette::Result<i32> {
    let template = args.template.read()?;
    println!(
        "{}",
        reset_placeholders(&template, &args.template.start, &args.template.end)
    );
    Ok(exitcode::OK)
}
