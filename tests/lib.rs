use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use sudoku_patterns::{generator, render, variants, Candidate, Digit, Geometry, Grid, Shading};

const README_SOLUTION: &str =
    "854219763397865421261473985785126394649538172132947856926384517513792648478651239";

const SIX_PUZZLE: &str = ".2.4.....1.3....6.3.5....31.....25..";
const SIX_SOLUTION: &str = "123456456123214365365214531642642531";

fn read_puzzles(geometry: &Geometry, text: &str) -> Vec<Grid> {
    text.lines()
        .map(|line| {
            geometry
                .parse_grid(line)
                .unwrap_or_else(|err| panic!("{:?}", err))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, EnumIter)]
enum Preset {
    Classic,
    Six,
    Four,
    AntiKnight,
    AntiKing,
    Diagonal,
    Latin,
}

impl Preset {
    fn geometry(self) -> Geometry {
        match self {
            Preset::Classic => variants::classic(),
            Preset::Six => variants::square(6).unwrap(),
            Preset::Four => variants::square(4).unwrap(),
            Preset::AntiKnight => variants::anti_knight(9, 3, 3).unwrap(),
            Preset::AntiKing => variants::anti_king(6, 2, 3).unwrap(),
            Preset::Diagonal => variants::diagonal_4x4(),
            Preset::Latin => variants::latin_square(5).unwrap(),
        }
    }
}

#[test]
fn readme() {
    let sudoku_str = "\
___|2__|_63
3__|__5|4_1
__1|__3|98_
---+---+---
___|___|_9_
___|538|___
_3_|___|___
---+---+---
_26|3__|5__
5_3|7__|__8
47_|__1|___";

    let sudoku_str2 = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";

    let geometry = variants::classic();
    let sudoku = geometry
        .solve_unique(&geometry.parse_grid(sudoku_str).unwrap())
        .unwrap();
    let sudoku2 = geometry
        .solve_unique(&geometry.parse_grid(sudoku_str2).unwrap())
        .unwrap();
    println!("{}", sudoku);
    assert!(sudoku == sudoku2);
    assert_eq!(sudoku.to_line(), README_SOLUTION);
    assert!(geometry.is_solution(&sudoku));
}

#[test]
#[should_panic]
fn wrong_format() {
    let sudoku_str = "___2___63
3____54_1
__1__398_
_______9_
___538___
_3_______
_263__5__
5_37____8";

    variants::classic().parse_grid(sudoku_str).unwrap();
}

#[test]
fn uniqueness_test() {
    let geometry = variants::classic();
    let puzzle = geometry.parse_grid(&README_SOLUTION[..]).unwrap();
    assert_eq!(geometry.count_at_most(&puzzle, 2), 1);

    // an empty grid
    let empty = geometry.open_grid();
    assert_eq!(geometry.count_at_most(&empty, 2), 2);
    assert!(geometry.solve_unique(&empty).is_none());
    assert!(geometry.solve_one(&empty).is_some());
}

#[test]
fn solutionless_sudokus() {
    let geometry = variants::classic();
    let duplicate_in_row = "11".to_string() + &".".repeat(79);
    let duplicate_in_col = "3".to_string() + &".".repeat(8) + "3" + &".".repeat(71);
    let duplicate_in_box = ".2".to_string() + &".".repeat(8) + "2" + &".".repeat(70);
    let puzzles = read_puzzles(
        &geometry,
        &[duplicate_in_row, duplicate_in_col, duplicate_in_box].join("\n"),
    );
    for puzzle in puzzles {
        assert!(geometry.normalize(&puzzle).is_err());
        assert_eq!(geometry.solve(&puzzle, 2).count(), 0);
    }
}

#[test]
fn six_by_six() {
    let geometry = variants::square(6).unwrap();
    let puzzle = geometry.parse_grid(SIX_PUZZLE).unwrap();
    let solution = geometry.solve_unique(&puzzle).unwrap();
    assert_eq!(solution.to_line(), SIX_SOLUTION);
    assert!(solution.is_subset(&puzzle));
    assert_eq!(geometry.parse_grid(&solution.to_line()).unwrap(), solution);
}

#[test]
fn anti_knight_has_fewer_solutions() {
    let classic = variants::classic();
    let anti_knight = variants::anti_knight(9, 3, 3).unwrap();
    let solution = classic.parse_grid(README_SOLUTION).unwrap();
    // the readme solution has two equal digits a knight's move apart somewhere
    let clash = (0..81).any(|cell| {
        anti_knight
            .constraints()
            .iter()
            .filter(|pair| pair.contains(cell))
            .flat_map(|pair| pair.iter())
            .any(|other| other != cell && solution.mask(other) == solution.mask(cell))
    });
    assert_eq!(anti_knight.is_solution(&solution), !clash);
    assert!(clash);
}

#[test]
fn presets_are_consistent() {
    for preset in Preset::iter() {
        let geometry = preset.geometry();
        for cell in 0..geometry.cells() {
            assert!(!geometry.excludes(cell, cell), "{:?}", preset);
            for other in geometry.exclusions_of(cell).iter() {
                assert!(geometry.excludes(other, cell), "{:?}", preset);
            }
        }
        for digit in Digit::all(geometry.digits()) {
            let exclusion = geometry.exclusion(Candidate { cell: 0, digit });
            assert!(!exclusion.contains(Candidate { cell: 0, digit }));
        }
        assert!(geometry.is_connected(geometry.all()), "{:?}", preset);
    }
}

#[test]
fn presets_have_solutions() {
    for preset in Preset::iter() {
        let geometry = preset.geometry();
        let solution = geometry.solve_one(&geometry.open_grid()).unwrap();
        assert!(geometry.is_solution(&solution), "{:?}", preset);
    }
}

#[test]
fn generated_puzzles_are_unique() {
    let geometry = variants::square(6).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..3 {
        let puzzle = generator::generate_unique(&geometry, &mut rng).unwrap();
        let solution = geometry.solve_unique(&puzzle).unwrap();
        assert!(solution.is_subset(&puzzle));
    }
}

#[test]
fn irregular_regions_from_generator() {
    let latin = variants::latin_square(6).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let regions = generator::make_regions(&latin, &mut rng, 1000).unwrap();
    let geometry = variants::irregular(6, &regions).unwrap();
    for pattern in geometry.patterns() {
        for region in &regions {
            assert_eq!((*region & *pattern).len(), 1);
        }
    }

    let drawing = render::regions(6, &Grid::from_regions(&regions), None);
    assert_eq!(drawing.lines().count(), 13);
    assert!(drawing.starts_with('┌'));
    assert!(drawing.ends_with('┘'));
}

#[test]
fn candidate_table_of_a_puzzle() {
    let geometry = variants::square(4).unwrap();
    let puzzle = geometry.parse_grid("1...3..2..4....1").unwrap();
    let normalized = geometry.normalize(&puzzle).unwrap();
    let table = normalized.candidate_table(4);
    assert_eq!(table.get(0), Some(normalized.mask(0)));
    assert_eq!(table.to_string().lines().count(), 6);
}

fn six_solution() -> Grid {
    Grid::parse(SIX_SOLUTION, 36, 6).unwrap()
}

proptest! {
    #[test]
    fn solutions_respect_givens(keep in proptest::collection::vec(any::<bool>(), 36)) {
        let geometry = variants::square(6).unwrap();
        let solution = six_solution();
        let mut puzzle = geometry.open_grid();
        for (cell, _) in keep.iter().enumerate().filter(|(_, &keep)| keep) {
            puzzle.set_mask(cell, solution.mask(cell));
        }

        let solutions = geometry.solve_at_most(&puzzle, 5);
        prop_assert!(!solutions.is_empty());
        for found in &solutions {
            prop_assert!(geometry.is_solution(found));
            prop_assert!(found.is_subset(&puzzle));
        }
        if solutions.len() < 5 {
            prop_assert!(solutions.contains(&solution));
        }
    }

    #[test]
    fn normalize_is_idempotent(keep in proptest::collection::vec(any::<bool>(), 36)) {
        let geometry = variants::square(6).unwrap();
        let solution = six_solution();
        let mut puzzle = geometry.open_grid();
        for (cell, _) in keep.iter().enumerate().filter(|(_, &keep)| keep) {
            puzzle.set_mask(cell, solution.mask(cell));
        }
        let once = geometry.normalize(&puzzle).unwrap();
        prop_assert_eq!(geometry.normalize(&once).unwrap(), once.clone());
        prop_assert!(solution.is_subset(&once));
    }

    #[test]
    fn periphery_keeps_regions_connected(cells in proptest::collection::vec(0..36usize, 1..12)) {
        let geometry = variants::latin_square(6).unwrap();
        let region = Shading::from_cells(36, cells).unwrap();
        for cell in geometry.periphery_of(region) {
            let mut rest = region;
            rest.remove(cell);
            prop_assert!(geometry.is_connected(rest));
        }
        let parts = geometry.connected_components(region);
        prop_assert_eq!(parts.len() == 1, geometry.is_connected(region));
        prop_assert_eq!(parts.iter().map(Shading::len).sum::<usize>(), region.len());
    }
}
