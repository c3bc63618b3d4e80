//! Subcommands and the parameter plumbing they share.

pub mod compute;
pub mod records;
pub mod sample;
pub mod sweep;
pub mod validate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dam_types::{DamParameters, DamResults};

/// Parameter source: config defaults, then `--params`, then per-field flags.
#[derive(Args, Debug, Default)]
pub struct ParamArgs {
    /// JSON parameter file (camelCase fields)
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Crest width [m]
    #[arg(long)]
    pub top_width: Option<f64>,
    /// Base width [m]
    #[arg(long)]
    pub bottom_width: Option<f64>,
    /// Dam height [m]
    #[arg(long)]
    pub height: Option<f64>,
    /// Crest length [m]
    #[arg(long)]
    pub length: Option<f64>,
    /// Reservoir length [m]
    #[arg(long)]
    pub reservoir_length: Option<f64>,
    /// Water depth [m]
    #[arg(long)]
    pub water_depth: Option<f64>,
    /// Turbine flow rate [m³/s]
    #[arg(long)]
    pub flow_rate: Option<f64>,
    /// Efficiency, fraction in (0, 1]
    #[arg(long)]
    pub efficiency: Option<f64>,
}

impl ParamArgs {
    /// Merge the sources over `base`. Does not validate.
    pub fn resolve(&self, base: DamParameters) -> Result<DamParameters> {
        let mut p = match &self.params {
            Some(path) => {
                let path = path.to_string_lossy();
                DamParameters::from_file(&path)
                    .with_context(|| format!("reading parameters from {path}"))?
            }
            None => base,
        };

        let overrides = [
            (self.top_width, &mut p.top_width),
            (self.bottom_width, &mut p.bottom_width),
            (self.height, &mut p.height),
            (self.length, &mut p.length),
            (self.reservoir_length, &mut p.reservoir_length),
            (self.water_depth, &mut p.water_depth),
            (self.flow_rate, &mut p.flow_rate),
            (self.efficiency, &mut p.efficiency),
        ];
        for (value, slot) in overrides {
            if let Some(v) = value {
                *slot = v;
            }
        }
        Ok(p)
    }
}

pub fn print_parameters(p: &DamParameters) {
    println!("Parameters");
    println!("  top width          {:>14.2} m", p.top_width);
    println!("  bottom width       {:>14.2} m", p.bottom_width);
    println!("  height             {:>14.2} m", p.height);
    println!("  length             {:>14.2} m", p.length);
    println!("  reservoir length   {:>14.2} m", p.reservoir_length);
    println!("  water depth        {:>14.2} m", p.water_depth);
    println!("  flow rate          {:>14.2} m³/s", p.flow_rate);
    println!("  efficiency         {:>14.2}", p.efficiency);
}

/// Print an already-rounded result set.
pub fn print_results(r: &DamResults) {
    println!("Results");
    println!("  cross-section      {:>14} m²", r.cross_sectional_area);
    println!("  dam volume         {:>14} m³", r.dam_volume);
    println!("  concrete needed    {:>14} m³", r.concrete_needed);
    println!("  reservoir volume   {:>14} m³", r.reservoir_volume);
    println!("  head               {:>14} m", r.head_pressure);
    println!("  theoretical power  {:>14} W", r.theoretical_power);
    println!("  actual power       {:>14} W", r.actual_power);
    println!("  annual energy      {:>14} kWh", r.annual_energy);
    println!("  hydrostatic force  {:>14} N", r.hydrostatic_force);
    println!("  overturning moment {:>14} N·m", r.overturning_moment);
    println!("  stability factor   {:>14}", r.stability_factor);
    println!("  safety status      {:>14}", r.safety_status);
}
