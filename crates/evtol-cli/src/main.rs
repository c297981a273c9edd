//! Fleet simulator CLI: load a scenario, run the fleet, print the report.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use evtol_cli::{render_profiles, render_report, Scenario};
use evtol_sim::FleetSimulation;

#[derive(Parser, Debug)]
#[command(name = "evtol-fleet")]
#[command(about = "Simulate an eVTOL fleet contending for charger slots")]
struct Args {
    /// Path to the scenario JSON file
    scenario: PathBuf,

    /// Print the parsed roster and exit without simulating
    #[arg(long)]
    dump_roster: bool,

    /// Emit the report as JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("evtol_sim=info".parse()?)
                .add_directive("evtol_cli=info".parse()?)
                .add_directive("evtol_fleet=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let scenario = Scenario::load(&args.scenario)?;
    let roster = scenario.roster()?;
    tracing::info!(
        companies = roster.len(),
        units = scenario.evtols_count,
        charger_slots = scenario.max_chargers,
        "loaded scenario from {}",
        args.scenario.display()
    );

    if args.dump_roster {
        print!("{}", render_profiles(roster.profiles()));
        return Ok(());
    }

    let simulation = FleetSimulation::new(roster, scenario.params())?;
    let report = simulation.run().await?;
    tracing::info!(units = report.per_unit.len(), "simulation complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}
