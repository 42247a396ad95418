//! CLI argument definitions using clap.

use clap::Parser;
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "subgen")]
#[command(about = "Generate subtitle files from timed transcript segments")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub args: crate::r#gen::Args,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    crate::r#gen::execute(cli.args.try_into()?)
}
