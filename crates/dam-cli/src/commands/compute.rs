//! `compute`: one parameter set in, rounded metrics out.

use anyhow::Result;
use clap::Args;
use dam_engineering::{compute_detailed, rounded};
use dam_types::config::AppConfig;
use serde::Serialize;
use tracing::{debug, warn};

use super::{print_parameters, print_results, ParamArgs};

#[derive(Args)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Skip display rounding
    #[arg(long)]
    pub raw: bool,

    /// Also print dam weight, centroid and restoring moment
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComputeOutput {
    parameters: dam_types::DamParameters,
    results: dam_types::DamResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    intermediates: Option<Intermediates>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Intermediates {
    dam_weight: f64,
    centroid_from_toe: f64,
    restoring_moment: f64,
}

pub fn execute(args: ComputeArgs, config: &AppConfig) -> Result<()> {
    let params = args.params.resolve(config.defaults)?;
    params.validate()?;
    for w in params.warnings() {
        warn!("{w}");
    }

    let breakdown = compute_detailed(&params);
    debug!(
        stability_factor = breakdown.results.stability_factor,
        status = %breakdown.results.safety_status,
        "computed"
    );

    let results = if args.raw {
        breakdown.results
    } else {
        rounded(&breakdown.results)
    };

    if args.json {
        let output = ComputeOutput {
            parameters: params,
            results,
            intermediates: args.verbose.then(|| Intermediates {
                dam_weight: breakdown.dam_weight,
                centroid_from_toe: breakdown.centroid_from_toe,
                restoring_moment: breakdown.restoring_moment,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_parameters(&params);
    println!();
    print_results(&results);
    if args.verbose {
        println!();
        println!("Intermediates");
        println!("  dam weight         {:>14.0} N", breakdown.dam_weight);
        println!("  centroid from toe  {:>14.3} m", breakdown.centroid_from_toe);
        println!("  restoring moment   {:>14.0} N·m", breakdown.restoring_moment);
    }
    Ok(())
}
