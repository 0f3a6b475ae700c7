//! Exhaustive checks over every small board against a pairwise definition of conflict.

use queens_board::board::Board;
use queens_board::core::coord::Coord;

fn board_from_bits(n: usize, bits: u32) -> Board {
    let rows: Vec<Vec<u8>> = (0..n)
        .map(|r| (0..n).map(|c| ((bits >> (r * n + c)) & 1) as u8).collect())
        .collect();
    Board::from_matrix(&rows).unwrap()
}

fn same_row(a: Coord, b: Coord) -> bool {
    a.row == b.row
}

fn same_col(a: Coord, b: Coord) -> bool {
    a.col == b.col
}

fn same_major(a: Coord, b: Coord) -> bool {
    a.major_diagonal() == b.major_diagonal()
}

fn same_minor(a: Coord, b: Coord) -> bool {
    a.minor_diagonal() == b.minor_diagonal()
}

fn any_pair(pieces: &[Coord], shares: impl Fn(Coord, Coord) -> bool) -> bool {
    for (i, &a) in pieces.iter().enumerate() {
        for &b in &pieces[i + 1..] {
            if shares(a, b) {
                return true;
            }
        }
    }
    false
}

/// Whether the line through `at` (as defined by `shares`) holds at least two pieces.
fn line_through_has_two(pieces: &[Coord], at: Coord, shares: impl Fn(Coord, Coord) -> bool) -> bool {
    pieces.iter().filter(|&&p| shares(p, at)).count() > 1
}

#[test]
fn aggregates_match_pairwise_definition() {
    for n in 0..=4usize {
        for bits in 0..(1u32 << (n * n)) {
            let b = board_from_bits(n, bits);
            let pieces: Vec<Coord> = b.occupied().collect();

            let rows = any_pair(&pieces, same_row);
            let cols = any_pair(&pieces, same_col);
            let major = any_pair(&pieces, same_major);
            let minor = any_pair(&pieces, same_minor);

            assert_eq!(b.has_any_row_conflicts(), rows, "n={n} bits={bits:#b}");
            assert_eq!(b.has_any_col_conflicts(), cols, "n={n} bits={bits:#b}");
            assert_eq!(b.has_any_major_diagonal_conflicts(), major, "n={n} bits={bits:#b}");
            assert_eq!(b.has_any_minor_diagonal_conflicts(), minor, "n={n} bits={bits:#b}");
            assert_eq!(b.has_any_rooks_conflicts(), rows || cols);
            assert_eq!(b.has_any_queens_conflicts(), rows || cols || major || minor);
        }
    }
}

#[test]
fn queen_conflicts_on_cell_match_pairwise_definition() {
    for n in 1..=3usize {
        for bits in 0..(1u32 << (n * n)) {
            let b = board_from_bits(n, bits);
            let pieces: Vec<Coord> = b.occupied().collect();
            for row in 0..n {
                for col in 0..n {
                    let at = Coord::new(row, col);
                    let expected = line_through_has_two(&pieces, at, same_row)
                        || line_through_has_two(&pieces, at, same_col)
                        || line_through_has_two(&pieces, at, same_major)
                        || line_through_has_two(&pieces, at, same_minor);
                    assert_eq!(
                        b.has_any_queen_conflicts_on(row, col),
                        expected,
                        "n={n} bits={bits:#b} at={at}"
                    );
                }
            }
        }
    }
}

#[test]
fn line_counts_are_piece_counts() {
    let n = 3;
    for bits in 0..(1u32 << (n * n)) {
        let b = board_from_bits(n, bits);
        let pieces: Vec<Coord> = b.occupied().collect();
        for i in 0..n {
            assert_eq!(b.row_count(i), pieces.iter().filter(|p| p.row == i).count());
            assert_eq!(b.col_count(i), pieces.iter().filter(|p| p.col == i).count());
            assert_eq!(b.has_row_conflict_at(i), b.row_count(i) >= 2);
        }
        for d in -(n as isize - 1)..=(n as isize - 1) {
            let expected = pieces.iter().filter(|p| p.major_diagonal() == d).count();
            assert_eq!(b.major_diagonal_count(d), expected);
        }
        for d in 0..=(2 * n as isize - 2) {
            let expected = pieces.iter().filter(|p| p.minor_diagonal() == d).count();
            assert_eq!(b.minor_diagonal_count(d), expected);
        }
    }
}

#[test]
fn symmetric_boards_have_equal_row_and_col_answers() {
    for n in 0..=4usize {
        for bits in 0..(1u32 << (n * n)) {
            let b = board_from_bits(n, bits);
            let symmetric = b.occupied().all(|c| b.is_occupied(c.transposed()));
            if symmetric {
                assert_eq!(b.has_any_row_conflicts(), b.has_any_col_conflicts());
            }
        }
    }
}

#[test]
fn double_toggle_restores_every_cell() {
    let n = 3;
    for bits in (0..(1u32 << (n * n))).step_by(7) {
        let original = board_from_bits(n, bits);
        for row in 0..n {
            for col in 0..n {
                let mut b = original.clone();
                let first = b.toggle_piece(row, col).unwrap();
                assert_eq!(first, !original.is_occupied(Coord::new(row, col)));
                b.toggle_piece(row, col).unwrap();
                assert_eq!(b, original);
            }
        }
    }
}
