//! # STRATA Demo
//!
//! Generates and meshes one terrain, then prints what came out.
//!
//! Usage: `strata_demo [--config <settings.toml>] [--seed <n>]`

use std::path::Path;
use std::process::ExitCode;

use strata::{build_terrain_seeded, TerrainSettings};

fn main() -> ExitCode {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         STRATA TERRAIN DEMO                                      ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Usage: strata_demo [--config <settings.toml>] [--seed <n>]");
        println!();
        println!("Options:");
        println!("  --config <path>  Load generation and meshing settings");
        println!("  --seed <n>       Override the generation seed");
        return ExitCode::SUCCESS;
    }

    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1));

    let seed = match args.iter().position(|a| a == "--seed") {
        Some(i) => match args.get(i + 1).map(|s| s.parse::<u64>()) {
            Some(Ok(seed)) => Some(seed),
            _ => {
                println!("Error: --seed expects an unsigned integer");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let mut settings = match config_path {
        Some(path) => {
            println!("Loading settings: {path}");
            match TerrainSettings::from_file(Path::new(path)) {
                Ok(settings) => settings,
                Err(e) => {
                    println!("Error: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        None => TerrainSettings::default(),
    };

    if let Some(seed) = seed {
        settings.generation.seed = seed;
    }

    let terrain = match build_terrain_seeded(&settings) {
        Ok(terrain) => terrain,
        Err(e) => {
            println!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("┌─ TERRAIN ────────────────────────────────────────────────────────┐");
    println!("│ Dimensions:   {}", terrain.grid.dimensions());
    println!("│ Seed:         {}", settings.generation.seed);
    println!("│ Liquid:       {:?} at {:.0}%", settings.generation.liquid, settings.generation.liquid_level * 100.0);
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();
    println!("┌─ BLOCKS ─────────────────────────────────────────────────────────┐");
    println!("{}", terrain.stats);
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();
    println!("┌─ MESH ───────────────────────────────────────────────────────────┐");
    println!("│ Name:         {}", terrain.mesh.name);
    println!("│ Vertices:     {}", terrain.mesh.vertex_count());
    println!("│ Triangles:    {}", terrain.mesh.triangle_count());
    if let Some(bounds) = terrain.mesh.bounds() {
        println!("│ Bounds:       {:?} .. {:?}", bounds.min, bounds.max);
    }
    println!("└──────────────────────────────────────────────────────────────────┘");

    ExitCode::SUCCESS
}
