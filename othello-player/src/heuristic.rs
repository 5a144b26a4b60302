//! One-ply scoring functions: each rates a resulting position for one side.
//! Higher is better for `me`. All of them are pure.

use othello_rules::{Board, Color, Coordinate, EDGE_LENGTH};

/// The scoring functions the greedy strategies maximize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Number of own disks.
    DiskCount,
    /// Own disks weighted by corner, edge and interior.
    WeightedPosition,
    /// Own minus opponent disks, weighted by [`STATIC_TABLE`].
    StaticTable,
}

impl Heuristic {
    pub fn score(self, board: &Board, me: Color) -> i32 {
        match self {
            Heuristic::DiskCount => disk_count(board, me),
            Heuristic::WeightedPosition => weighted_position(board, me),
            Heuristic::StaticTable => static_table(board, me),
        }
    }
}

/// Weight of an interior, edge and corner square.
const POSITION_WEIGHTS: [i32; 3] = [1, 2, 4];

/// Square values for one triangle of the board, by [`table_class`]:
/// the corner first, then along the edge, then inwards.
pub const STATIC_TABLE: [i32; 10] = [100, -20, 10, 5, -50, -2, -2, -1, -1, -1];

pub fn disk_count(board: &Board, me: Color) -> i32 {
    board.disks(me).count_occupied() as i32
}

pub fn weighted_position(board: &Board, me: Color) -> i32 {
    board.disks(me).squares().map(position_weight).sum()
}

pub fn static_table(board: &Board, me: Color) -> i32 {
    let side_total = |color| -> i32 {
        board
            .disks(color)
            .squares()
            .map(|coord| STATIC_TABLE[table_class(coord)])
            .sum()
    };
    side_total(me) - side_total(!me)
}

fn position_weight(coord: Coordinate) -> i32 {
    let on_edge = |value: usize| value == 0 || value == EDGE_LENGTH - 1;
    let edges = on_edge(coord.row()) as usize + on_edge(coord.col()) as usize;
    POSITION_WEIGHTS[edges]
}

/// Fold a square into the triangle `row <= col < 4` using the board's mirror and
/// diagonal symmetries, then number the triangle row by row (0 = corner, 9 = center).
pub fn table_class(coord: Coordinate) -> usize {
    let fold = |value: usize| value.min(EDGE_LENGTH - 1 - value);
    let (row, col) = (fold(coord.row()), fold(coord.col()));
    let (near, far) = (row.min(col), row.max(col));
    near * (9 - near) / 2 + far - near
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sq(name: &str) -> Coordinate {
        Coordinate::from_str(name).unwrap()
    }

    #[test]
    fn table_class_covers_triangle() {
        assert_eq!(table_class(sq("a8")), 0);
        assert_eq!(table_class(sq("h1")), 0);
        assert_eq!(table_class(sq("b8")), 1);
        assert_eq!(table_class(sq("a7")), 1);
        assert_eq!(table_class(sq("d8")), 3);
        assert_eq!(table_class(sq("b7")), 4);
        assert_eq!(table_class(sq("g2")), 4);
        assert_eq!(table_class(sq("c6")), 7);
        assert_eq!(table_class(sq("d5")), 9);
        assert_eq!(table_class(sq("e4")), 9);

        let mut seen = [false; 10];
        for coord in Coordinate::all() {
            seen[table_class(coord)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn table_class_is_symmetric() {
        for coord in Coordinate::all() {
            let (row, col) = coord.to_coords();
            let mirrored = Coordinate::from_coords(row, EDGE_LENGTH - 1 - col);
            let transposed = Coordinate::from_coords(col, row);
            assert_eq!(table_class(coord), table_class(mirrored));
            assert_eq!(table_class(coord), table_class(transposed));
        }
    }

    #[test]
    fn initial_scores() {
        let board = Board::initial();
        assert_eq!(disk_count(&board, Color::Black), 2);
        assert_eq!(weighted_position(&board, Color::White), 2);
        assert_eq!(static_table(&board, Color::Black), 0);
    }

    #[test]
    fn position_weights_favor_corners_then_edges() {
        let board: Board = "
            X..X....
            ........
            ........
            ...X....
            ........
            ........
            ........
            .......O
            X"
        .parse()
        .unwrap();
        assert_eq!(weighted_position(&board, Color::Black), 4 + 2 + 1);
        assert_eq!(weighted_position(&board, Color::White), 4);
        assert_eq!(
            Heuristic::StaticTable.score(&board, Color::Black),
            100 + 5 - 1 - 100
        );
        assert_eq!(Heuristic::StaticTable.score(&board, Color::White), -4);
    }
}
