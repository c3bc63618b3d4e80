//! `sweep`: stability against bottom width.

use anyhow::{bail, Result};
use clap::Args;
use dam_engineering::rounding::round_to;
use dam_engineering::scanner::{minimum_safe_bottom_width, sweep_bottom_width};
use dam_types::config::AppConfig;

use super::ParamArgs;

#[derive(Args)]
pub struct SweepArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Smallest bottom width [m]
    #[arg(long, default_value_t = 10.0)]
    pub min: f64,

    /// Largest bottom width [m]
    #[arg(long, default_value_t = 100.0)]
    pub max: f64,

    /// Number of sweep points
    #[arg(long, default_value_t = 10)]
    pub steps: usize,

    /// Bisection tolerance for the minimum safe width [m]
    #[arg(long, default_value_t = 0.01)]
    pub tolerance: f64,
}

pub fn execute(args: SweepArgs, config: &AppConfig) -> Result<()> {
    if !(args.min > 0.0 && args.max >= args.min) {
        bail!("need 0 < min <= max, got min={} max={}", args.min, args.max);
    }
    let base = args.params.resolve(config.defaults)?;
    base.validate()?;

    println!(
        "{:>12} {:>14} {:>16} {:>10}",
        "bottom [m]", "concrete [m³]", "stability", "status"
    );
    for point in sweep_bottom_width(&base, args.min, args.max, args.steps) {
        println!(
            "{:>12.2} {:>14.2} {:>16.2} {:>10}",
            point.bottom_width,
            point.results.concrete_needed,
            point.results.stability_factor,
            point.results.safety_status
        );
    }

    match minimum_safe_bottom_width(&base, args.min, args.max, args.tolerance) {
        Some(width) => println!("\nminimum safe bottom width: {} m", round_to(width, 2)),
        None => println!("\nno safe bottom width up to {} m", args.max),
    }
    Ok(())
}
