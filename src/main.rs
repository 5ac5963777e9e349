//! Demo binary: spawns a fleet, hits every member and reports the outcome.
use std::path::{Path, PathBuf};

use alien::{
    aliens_created, init_logging, spawn_shielded_fleet, survivors, Combatant, FleetConfig,
    DEFAULT_DAMAGE,
};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

/// Spawn a fleet of aliens and put their shields to the test
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON fleet description; defaults to two unshielded aliens
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hits dealt to every fleet member
    #[arg(long, default_value_t = 0)]
    hits: u32,

    /// Damage per hit
    #[arg(long, default_value_t = DEFAULT_DAMAGE, allow_negative_numbers = true)]
    damage: i32,
}

fn load_config(path: Option<&Path>) -> Result<FleetConfig> {
    path.map_or_else(
        || Ok(FleetConfig::default()),
        |file| {
            FleetConfig::load(file)
                .with_context(|| format!("could not use fleet config {}", file.display()))
        },
    )
}

#[expect(
    clippy::print_stdout,
    reason = "The fleet report is the program's output, not diagnostics."
)]
fn report(fleet: &[Box<dyn Combatant>]) {
    for (index, member) in fleet.iter().enumerate() {
        let state = if member.is_alive() { "alive" } else { "dead" };
        println!(
            "alien {index}: ({}, {}) health {} {state}",
            member.x(),
            member.y(),
            member.health()
        );
    }
    println!(
        "{} of {} survive; {} aliens created",
        survivors(fleet),
        fleet.len(),
        aliens_created()
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;
    let mut fleet = spawn_shielded_fleet(&config);
    info!(
        "dealing {} hits of {} damage to {} aliens",
        args.hits,
        args.damage,
        fleet.len()
    );
    for member in &mut fleet {
        for _ in 0..args.hits {
            member.hit(args.damage);
        }
    }

    report(&fleet);
    Ok(())
}
