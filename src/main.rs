//! Pet Synergy - Entry Point
//!
//! Loads a catalog directory, builds a team from `--pet` ids and prints the
//! team score, suggested additions and bestiary recommendations.

use clap::Parser;
use pet_synergy::catalog::{load_catalog, TraitCategory};
use pet_synergy::core::error::Result;
use pet_synergy::core::{EngineConfig, Playstyle};
use pet_synergy::engine::NO_TEAM_MESSAGE;
use pet_synergy::team::TeamSelection;
use pet_synergy::{Recommendation, SynergyEngine, TeamReport};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Score a pet team and recommend bestiary pages
#[derive(Parser, Debug)]
#[command(name = "pet-synergy")]
#[command(about = "Score a pet team and recommend additions and bestiary traits")]
struct Args {
    /// Directory holding pets.json and the bestiary_*.json files
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Pet id to put on the team (repeatable, pick order kept)
    #[arg(long = "pet")]
    pets: Vec<String>,

    /// aoe_far, single_target or anything else for balanced
    #[arg(long, default_value = "balanced")]
    playstyle: String,

    /// Bestiary points per category (overrides the config file)
    #[arg(long)]
    budget: Option<u32>,

    /// Engine config in TOML
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// List the catalog's pets and exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pet_synergy=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(budget) = args.budget {
        config.allocation_budget = budget;
    }

    let catalog = load_catalog(&args.data)?;
    tracing::info!(
        "Catalog ready: {} pets, {} bestiary traits",
        catalog.pets().len(),
        catalog.trait_count()
    );

    if args.list {
        for pet in catalog.pets() {
            println!(
                "{:<20} {:<24} {:<8} slots {}",
                pet.id,
                pet.name,
                String::from(pet.class.clone()),
                pet.slots
            );
        }
        return Ok(());
    }

    let mut selection = TeamSelection::new();
    for id in &args.pets {
        if let Err(e) = selection.add(id, &catalog, &config) {
            tracing::warn!("Skipping '{}': {}", id, e);
        }
    }

    let playstyle = Playstyle::parse(&args.playstyle);
    let engine = SynergyEngine::new(catalog, config);
    let recommendation = engine.recommend(&selection, playstyle);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
        return Ok(());
    }

    match recommendation {
        Recommendation::NoTeamSelected => println!("{}", NO_TEAM_MESSAGE),
        Recommendation::Ready(report) => print_report(&engine, &report),
    }

    Ok(())
}

fn print_report(engine: &SynergyEngine, report: &TeamReport<'_>) {
    let limit = engine.config().suggestion_limit;

    println!();
    println!("=== Selected Team ===");
    println!("{}", report.member_names());
    println!("Team score ({}): {}", report.playstyle, report.team_score);

    println!();
    println!("=== Suggested Additions ===");
    if report.additions.is_empty() {
        println!("  (no free slots or nothing fits)");
    }
    for candidate in &report.additions {
        println!(
            "  {} [{} slots] (score {})",
            candidate.subject.name, candidate.subject.slots, candidate.score
        );
    }

    for category in TraitCategory::ALL {
        let Some(section) = report.category(category) else {
            continue;
        };

        println!();
        println!("=== {} Bestiary Suggestions ===", category);
        println!("Top pages for this team & playstyle");
        for scored in section.ranked.iter().take(limit) {
            println!(
                "  {} (score {}, rank {})",
                scored.entry.name,
                scored.score,
                scored.tier.points()
            );
            if !scored.entry.description.is_empty() {
                println!("      {}", scored.entry.description);
            }
        }

        println!(
            "  Point plan ({}/{}):",
            section.allocated_points,
            engine.config().allocation_budget
        );
        for entry in &section.allocation {
            println!("    {:>2}  {}", entry.points, entry.name);
        }
    }
}
