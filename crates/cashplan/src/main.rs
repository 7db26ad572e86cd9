//! Command-line front end for the cashplan projection engine.
//!
//! Loads a plan file (JSON), runs the monthly projection, and prints the
//! result as a table or as JSON for downstream tooling.

mod report;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, eyre};
use tracing_subscriber::EnvFilter;

use cashplan_core::Plan;
use cashplan_core::month_math::month_index;

#[derive(Debug, Parser)]
#[command(
    name = "cashplan",
    version,
    about = "Project a household's cash position month by month"
)]
struct Cli {
    /// Plan file (JSON)
    plan: PathBuf,

    /// Override the plan's projection horizon in months
    #[arg(long)]
    months: Option<u32>,

    /// Project up to this calendar date (requires the plan to set `start`)
    #[arg(long, conflicts_with = "months")]
    until: Option<jiff::civil::Date>,

    /// Print one row per year instead of per month
    #[arg(long)]
    yearly: bool,

    /// Emit the full result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cashplan=info,cashplan_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.plan)
        .wrap_err_with(|| format!("reading plan file {}", cli.plan.display()))?;
    let mut plan: Plan =
        serde_json::from_str(&raw).wrap_err("plan file is not a valid plan")?;

    if let Some(months) = cli.months {
        plan.months = months;
    }
    if let Some(until) = cli.until {
        let start = plan
            .start
            .ok_or_else(|| eyre!("--until requires the plan to set a start date"))?;
        let months = month_index(start, until);
        if months <= 0 {
            return Err(eyre!(
                "--until {until} is not after the plan's start month {start}"
            ));
        }
        plan.months = months as u32;
    }

    tracing::info!(months = plan.months, records = plan.records.len(), "running projection");

    let setup = plan.build()?;
    let result = setup.run()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if cli.yearly {
        report::print_yearly(&result, plan.start);
    } else {
        report::print_monthly(&result, plan.start);
    }

    Ok(())
}
