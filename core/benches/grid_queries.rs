use criterion::{Criterion, criterion_group, criterion_main};
use fightgrid_core::{Direction, Grid, MAX_SIDE_LENGTH, Square};
use std::hint::black_box;

fn bench_projection(c: &mut Criterion) {
    let grid = Grid::new(MAX_SIDE_LENGTH).unwrap();
    let origin = Square::new(MAX_SIDE_LENGTH / 2, MAX_SIDE_LENGTH / 2);

    c.bench_function("projected_from_compass", |b| {
        b.iter(|| {
            Direction::COMPASS
                .iter()
                .filter_map(|&dir| grid.projected_from(black_box(&origin), dir, black_box(7)))
                .count()
        })
    });
}

fn bench_neighbours(c: &mut Criterion) {
    let grid = Grid::new(MAX_SIDE_LENGTH).unwrap();

    c.bench_function("reticle_squares_full_board", |b| {
        b.iter(|| {
            grid.iter()
                .map(|sq| grid.reticle_squares(black_box(sq)).len())
                .sum::<usize>()
        })
    });

    c.bench_function("surrounding_squares_full_board", |b| {
        b.iter(|| {
            grid.iter()
                .map(|sq| grid.surrounding_squares(black_box(sq)).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_projection, bench_neighbours);
criterion_main!(benches);
