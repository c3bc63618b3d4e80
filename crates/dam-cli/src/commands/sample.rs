//! `sample`: Monte Carlo designs and their Pareto frontier.

use anyhow::Result;
use clap::Args;
use dam_engineering::scanner::{find_pareto_frontier, sample_designs, DesignBounds};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

#[derive(Args)]
pub struct SampleArgs {
    /// Number of designs to draw
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub count: usize,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: SampleArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let designs = sample_designs(&DesignBounds::default(), args.count, &mut rng);
    let mut pareto = find_pareto_frontier(&designs);
    pareto.sort_by(|a, b| a.results.concrete_needed.total_cmp(&b.results.concrete_needed));
    info!("{} designs sampled, {} on the frontier", designs.len(), pareto.len());

    println!(
        "{:>8} {:>8} {:>8} {:>8} {:>14} {:>10}",
        "top", "bottom", "height", "depth", "concrete [m³]", "stability"
    );
    for d in &pareto {
        println!(
            "{:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>14.0} {:>10.2}",
            d.params.top_width,
            d.params.bottom_width,
            d.params.height,
            d.params.water_depth,
            d.results.concrete_needed,
            d.results.stability_factor
        );
    }
    Ok(())
}
