//! `records`: list, create, show and delete stored simulations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use dam_engineering::rounded;
use dam_records::{JsonFileStore, RecordId, RecordStore, SimulationRecord};
use dam_types::config::AppConfig;

use super::{print_parameters, print_results, ParamArgs};

#[derive(Subcommand)]
pub enum RecordsCommand {
    /// List a user's records, newest first
    List(OwnerArgs),
    /// Compute and store a new record
    Create(CreateArgs),
    /// Show one record
    Show(IdArgs),
    /// Delete one of a user's records
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct OwnerArgs {
    /// Owning user id
    #[arg(short, long)]
    pub user: String,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Owning user id
    #[arg(short, long)]
    pub user: String,

    /// Record name
    #[arg(long)]
    pub name: String,

    #[command(flatten)]
    pub params: ParamArgs,
}

#[derive(Args)]
pub struct IdArgs {
    /// Record id (UUID)
    pub id: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Owning user id
    #[arg(short, long)]
    pub user: String,

    /// Record id (UUID)
    pub id: String,
}

pub fn execute(cmd: RecordsCommand, config: &AppConfig) -> Result<()> {
    let store = JsonFileStore::open(&config.store.path)
        .with_context(|| format!("opening record store {}", config.store.path))?;
    run(cmd, &store, config)
}

fn run(cmd: RecordsCommand, store: &dyn RecordStore, config: &AppConfig) -> Result<()> {
    match cmd {
        RecordsCommand::List(args) => {
            let records = store.list_by_user(&args.user)?;
            if records.is_empty() {
                println!("no records for user '{}'", args.user);
            }
            for r in &records {
                print_summary(r);
            }
        }
        RecordsCommand::Create(args) => {
            let params = args.params.resolve(config.defaults)?;
            let record = store.create(&args.user, &args.name, params)?;
            println!("created {}", record.id());
            print_summary(&record);
        }
        RecordsCommand::Show(args) => {
            let id: RecordId = args.id.parse()?;
            let record = store.get(id)?;
            println!(
                "{} '{}' (user {}, {})",
                record.id(),
                record.name(),
                record.user_id(),
                record.created_at().to_rfc3339()
            );
            print_parameters(record.parameters());
            println!();
            print_results(&rounded(record.results()));
        }
        RecordsCommand::Delete(args) => {
            let id: RecordId = args.id.parse()?;
            store.delete(&args.user, id)?;
            println!("deleted {id}");
        }
    }
    Ok(())
}

fn print_summary(r: &SimulationRecord) {
    let results = rounded(r.results());
    println!(
        "{}  {:<24} {}  SF {:>8}  {}",
        r.id(),
        r.name(),
        r.created_at().format("%Y-%m-%d %H:%M"),
        results.stability_factor,
        results.safety_status
    );
}
