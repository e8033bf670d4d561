//! Console tournament simulator: loads the group roster and exhibition
//! history from JSON, runs the full tournament, prints standings, the
//! knockout bracket and the medal table.
//! Run with: cargo run --bin simulate [groups.json] [exhibitions.json]
//! (defaults: data/groups.json, data/exhibitions.json).
//! Set SEED=<u64> in the environment for a reproducible run; without it
//! the generator is seeded from entropy.

use fiba_sim::{
    run_tournament, ExhibitionHistory, GroupRoster, KnockoutResult, TournamentReport,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;

fn load_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, Box<dyn Error>> {
    let file = File::open(path).map_err(|e| format!("cannot open {}: {}", path, e))?;
    let value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("cannot parse {}: {}", path, e))?;
    Ok(value)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let groups_path = args.next().unwrap_or_else(|| "data/groups.json".to_string());
    let exhibitions_path = args
        .next()
        .unwrap_or_else(|| "data/exhibitions.json".to_string());

    let groups: GroupRoster = load_json(&groups_path)?;
    let exhibitions: ExhibitionHistory = load_json(&exhibitions_path)?;

    let mut rng = match std::env::var("SEED") {
        Ok(seed) => StdRng::seed_from_u64(seed.parse()?),
        Err(_) => StdRng::from_entropy(),
    };

    let report = run_tournament(&groups, &exhibitions, &mut rng)?;
    render(&report);
    Ok(())
}

fn render(report: &TournamentReport) {
    println!("Group stage results:");
    for (group_id, entries) in &report.group_standings {
        println!("Group {}:", group_id);
        for entry in entries {
            println!(
                "  {} - points: {}, scored: {}, conceded: {}",
                entry.team.name, entry.points, entry.scored, entry.conceded
            );
            for summary in &entry.matches {
                println!("      {}", summary);
            }
        }
        println!();
    }

    println!("Teams advancing to the knockout stage:");
    for entry in &report.qualifiers {
        let rank = entry.global_rank.unwrap_or_default();
        println!("  {}. {}", rank, entry.team.name);
    }

    render_round("Quarter-finals:", &report.quarter_finals);
    render_round("Semi-finals:", &report.semi_finals);
    render_round("Third place game:", std::slice::from_ref(&report.third_place));
    render_round("Final:", std::slice::from_ref(&report.final_game));

    println!("\nMedals:");
    println!("  1. {}", report.medals.gold.name);
    println!("  2. {}", report.medals.silver.name);
    println!("  3. {}", report.medals.bronze.name);
}

fn render_round(title: &str, results: &[KnockoutResult]) {
    println!("\n{}", title);
    for result in results {
        println!("  {}", result.summary);
    }
}
