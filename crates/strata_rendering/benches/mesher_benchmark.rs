//! Benchmark for combined cube meshing.
//!
//! Run with: cargo bench --package strata_rendering --bench mesher_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use strata_core::{BlockType, GridDimensions, VoxelGrid};
use strata_rendering::VoxelMesher;

fn half_filled(size: u32) -> VoxelGrid {
    let mut grid = VoxelGrid::filled_with_air(GridDimensions::new(size, size, size)).unwrap();
    for y in 0..(size / 2) as i32 {
        for x in 0..size as i32 {
            for z in 0..size as i32 {
                let block = if (x + z) % 7 == 0 { BlockType::OreIron } else { BlockType::Stone };
                grid.set(x, y, z, block);
            }
        }
    }
    grid
}

fn benchmark_mesh_32(c: &mut Criterion) {
    let mesher = VoxelMesher::default();
    let grid = half_filled(32);

    let mut group = c.benchmark_group("mesher");
    group.throughput(Throughput::Elements(32 * 32 * 16));
    group.bench_function("32_cubed_half_solid", |b| {
        b.iter(|| black_box(mesher.build(black_box(&grid))));
    });
    group.finish();
}

fn benchmark_vertex_interleave(c: &mut Criterion) {
    let mesher = VoxelMesher::default();
    let mesh = mesher.build(&half_filled(16)).unwrap();

    c.bench_function("interleave_16_cubed", |b| {
        b.iter(|| black_box(mesh.vertices()));
    });
}

criterion_group!(benches, benchmark_mesh_32, benchmark_vertex_interleave);
criterion_main!(benches);
