//! # Pipeline Tests
//!
//! End-to-end checks on generated terrain: determinism and the layering
//! every painted column must satisfy.

use strata_core::{BlockType, GridDimensions, VoxelGrid};
use strata_procedural::{
    GenerationConfig, GenerationStats, LiquidKind, OreRule, SeededRandom, TerrainGenerator,
};

fn generator(seed: u64, dims: GridDimensions) -> TerrainGenerator {
    let mut config = GenerationConfig::with_dimensions(dims);
    config.seed = seed;
    TerrainGenerator::new(config).unwrap()
}

fn column(grid: &VoxelGrid, x: i32, z: i32) -> Vec<BlockType> {
    (0..grid.height() as i32)
        .map(|y| grid.get(x, y, z).unwrap())
        .collect()
}

/// Test: identical seeds give identical terrain, different seeds differ.
#[test]
fn test_generation_is_deterministic() {
    let dims = GridDimensions::new(24, 16, 24);

    let a = generator(42, dims).generate_seeded().unwrap();
    let b = generator(42, dims).generate_seeded().unwrap();
    let c = generator(43, dims).generate_seeded().unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

/// Test: explicit sources with the same seed match `generate_seeded`.
#[test]
fn test_explicit_source_matches_seeded() {
    let gen = generator(9, GridDimensions::new(16, 12, 16));
    let mut source = SeededRandom::from_u64(9);
    assert_eq!(gen.generate(&mut source).unwrap(), gen.generate_seeded().unwrap());
}

/// Test: at most one grass block per column, and never beneath liquid.
#[test]
fn test_grass_at_most_once_per_column() {
    for seed in 0..8 {
        let grid = generator(seed, GridDimensions::new(20, 16, 20)).generate_seeded().unwrap();

        for x in 0..20 {
            for z in 0..20 {
                let col = column(&grid, x, z);
                let grass = col.iter().filter(|b| **b == BlockType::Grass).count();
                assert!(grass <= 1, "column ({x}, {z}) has {grass} grass blocks");

                if let Some(y) = col.iter().position(|b| *b == BlockType::Grass) {
                    assert!(
                        col[y + 1..].iter().all(|b| b.is_air()),
                        "grass at ({x}, {y}, {z}) is covered"
                    );
                }
            }
        }
    }
}

/// Test: dirt sits directly under grass, `dirt_depth` deep.
#[test]
fn test_dirt_beneath_grass() {
    let mut config = GenerationConfig::with_dimensions(GridDimensions::new(16, 20, 16));
    config.seed = 5;
    config.dirt_depth = 3;
    config.ores = Vec::new();
    let grid = TerrainGenerator::new(config).unwrap().generate_seeded().unwrap();

    for x in 0..16 {
        for z in 0..16 {
            let col = column(&grid, x, z);
            let Some(y) = col.iter().position(|b| *b == BlockType::Grass) else {
                continue;
            };
            for below in 1..=3 {
                if y >= below {
                    assert_eq!(col[y - below], BlockType::Dirt, "column ({x}, {z})");
                }
            }
        }
    }
}

/// Test: nothing solid rises to `max_height` or above.
#[test]
fn test_terrain_respects_max_height() {
    let mut config = GenerationConfig::with_dimensions(GridDimensions::new(16, 20, 16));
    config.max_height = Some(8);
    config.liquid_level = 0.0;
    let grid = TerrainGenerator::new(config).unwrap().generate_seeded().unwrap();

    for x in 0..16 {
        for z in 0..16 {
            if let Some(top) = grid.column_top(x, z) {
                assert!(top < 8, "column ({x}, {z}) reaches {top}");
            }
        }
    }
}

/// Test: liquid only ever sits at or below the configured level.
#[test]
fn test_liquid_below_level() {
    let mut config = GenerationConfig::with_dimensions(GridDimensions::new(20, 20, 20));
    config.liquid = LiquidKind::Lava;
    config.liquid_level = 0.5;
    config.seed = 3;
    let grid = TerrainGenerator::new(config).unwrap().generate_seeded().unwrap();

    assert_eq!(grid.count(BlockType::Water), 0);
    for (pos, block) in grid.iter() {
        if block == BlockType::Lava {
            assert!(pos.y <= 10, "lava above level at {pos}");
        }
    }
}

/// Test: ore only replaces what used to be stone.
#[test]
fn test_ore_preserves_layering() {
    let dims = GridDimensions::new(16, 16, 16);
    let mut plain = GenerationConfig::with_dimensions(dims);
    plain.seed = 21;
    plain.ores = Vec::new();
    let mut rich = plain.clone();
    rich.ores = vec![OreRule::scattered(BlockType::OreDiamond, 0.2)];

    let before = TerrainGenerator::new(plain).unwrap().generate_seeded().unwrap();
    let after = TerrainGenerator::new(rich).unwrap().generate_seeded().unwrap();

    let stats = GenerationStats::from_grid(&after);
    assert!(stats.count(BlockType::OreDiamond) > 0);

    for ((pos, old), (_, new)) in before.iter().zip(after.iter()) {
        if old != new {
            assert_eq!(old, BlockType::Stone, "non-stone replaced at {pos}");
            assert_eq!(new, BlockType::OreDiamond);
        }
    }
}
