//! `validate`: report parameter errors and warnings.

use anyhow::{bail, Result};
use clap::Args;
use dam_types::config::AppConfig;
use tracing::info;

use super::ParamArgs;

/// Checks the parameter file given with `--params` (required); per-field
/// flags override values from the file.
#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn execute(args: ValidateArgs, config: &AppConfig) -> Result<()> {
    if args.params.params.is_none() {
        bail!("validate needs a parameter file: --params FILE");
    }
    let params = args.params.resolve(config.defaults)?;

    if let Err(e) = params.validate() {
        println!("✗ {e}");
        bail!("parameter validation failed");
    }

    let warnings = params.warnings();
    for w in &warnings {
        println!("⚠ {w}");
    }

    if args.strict && !warnings.is_empty() {
        bail!("{} warning(s) in strict mode", warnings.len());
    }

    info!("parameters valid ({} warning(s))", warnings.len());
    println!("✓ parameters valid");
    Ok(())
}
