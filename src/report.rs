//! Serializable summary of every conflict on a board.

use serde::Serialize;

use crate::board::lines::{Line, LineFamily};
use crate::board::Board;
use crate::chess::piece::PieceKind;

/// Conflicting lines of one family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyConflicts {
    pub family: LineFamily,
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    pub size: usize,
    pub pieces: usize,
    pub piece: PieceKind,
    pub has_conflicts: bool,
    /// One entry per family the piece attacks along, in [`PieceKind::line_families`] order.
    pub families: Vec<FamilyConflicts>,
}

impl ConflictReport {
    pub fn new(board: &Board, piece: PieceKind) -> Self {
        let families: Vec<FamilyConflicts> = piece
            .line_families()
            .iter()
            .map(|&family| FamilyConflicts {
                family,
                lines: board.conflicting_lines(family),
            })
            .collect();
        let has_conflicts = families.iter().any(|f| !f.lines.is_empty());

        Self {
            size: board.size(),
            pieces: board.piece_count(),
            piece,
            has_conflicts,
            families,
        }
    }

    /// All conflicting lines across families.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.families.iter().flat_map(|f| f.lines.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_report_ignores_diagonals() {
        let b = Board::from_matrix(&[[1u8, 0, 0], [0, 1, 0], [0, 0, 1]]).unwrap();

        let rooks = ConflictReport::new(&b, PieceKind::Rook);
        assert!(!rooks.has_conflicts);
        assert_eq!(rooks.families.len(), 2);
        assert_eq!(rooks.lines().count(), 0);

        let queens = ConflictReport::new(&b, PieceKind::Queen);
        assert!(queens.has_conflicts);
        assert_eq!(queens.pieces, 3);
        assert_eq!(queens.lines().collect::<Vec<_>>(), vec![Line::MajorDiagonal(0)]);
    }

    #[test]
    fn serializes_lines_with_family_tags() {
        let b = Board::from_matrix(&[[1u8, 1], [0, 0]]).unwrap();
        let report = ConflictReport::new(&b, PieceKind::Rook);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["piece"], "rook");
        assert_eq!(json["has_conflicts"], true);
        assert_eq!(json["families"][0]["family"], "row");
        assert_eq!(
            json["families"][0]["lines"][0],
            serde_json::json!({ "family": "row", "index": 0 })
        );
        assert_eq!(json["families"][1]["lines"], serde_json::json!([]));
    }
}
