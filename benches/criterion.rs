use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sudoku_patterns::{generator, variants, Geometry, Grid};

const CLASSIC: &str = "\
...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...
..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..
4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

fn read_sudokus(geometry: &Geometry, sudokus_str: &str) -> Vec<Grid> {
    sudokus_str
        .lines()
        .map(|line| {
            geometry
                .parse_grid(line)
                .unwrap_or_else(|err| panic!("{:?}", err))
        })
        .collect()
}

fn classic_solve_one(c: &mut Criterion) {
    let geometry = variants::classic();
    geometry.patterns();
    let sudokus = read_sudokus(&geometry, CLASSIC);
    let mut iter = sudokus.iter().cycle();
    c.bench_function("classic_solve_one", |b| {
        b.iter(|| geometry.solve_one(iter.next().unwrap()))
    });
}

fn classic_solve_unique(c: &mut Criterion) {
    let geometry = variants::classic();
    geometry.patterns();
    let sudokus = read_sudokus(&geometry, CLASSIC);
    let mut iter = sudokus.iter().cycle();
    c.bench_function("classic_solve_unique", |b| {
        b.iter(|| geometry.solve_unique(iter.next().unwrap()))
    });
}

fn classic_patterns(c: &mut Criterion) {
    c.bench_function("classic_patterns", |b| {
        b.iter(|| variants::classic().patterns().len())
    });
}

fn anti_knight_patterns(c: &mut Criterion) {
    c.bench_function("anti_knight_patterns", |b| {
        b.iter(|| variants::anti_knight(9, 3, 3).unwrap().patterns().len())
    });
}

fn generate_filled(c: &mut Criterion) {
    let geometry = variants::classic();
    geometry.patterns();
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("generate_filled", |b| {
        b.iter(|| generator::generate_filled(&geometry, &mut rng))
    });
}

fn generate_unique_6x6(c: &mut Criterion) {
    let geometry = variants::square(6).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("generate_unique_6x6", |b| {
        b.iter(|| generator::generate_unique(&geometry, &mut rng))
    });
}

criterion_group!(
    benches,
    classic_solve_one,
    classic_solve_unique,
    classic_patterns,
    anti_knight_patterns,
    generate_filled,
    generate_unique_6x6,
);
criterion_main!(benches);
