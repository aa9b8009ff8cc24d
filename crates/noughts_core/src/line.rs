//! The eight winning lines of a 3x3 board.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Which kind of line a [`Line`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Horizontal line, 1-based row number.
    Row(u8),
    /// Vertical line, 1-based column number.
    Column(u8),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Row(n) => write!(f, "row {}", n),
            LineKind::Column(n) => write!(f, "column {}", n),
            LineKind::Diagonal => write!(f, "diagonal"),
            LineKind::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// A row, column or diagonal: three positions in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    cells: [Position; 3],
}

impl Line {
    /// All lines in evaluation order: rows top to bottom, columns left to
    /// right, then the diagonal and the anti-diagonal.
    pub const ALL: [Line; 8] = [
        Line::new(
            LineKind::Row(1),
            [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
        ),
        Line::new(
            LineKind::Row(2),
            [Position::MIDDLE_LEFT, Position::CENTER, Position::MIDDLE_RIGHT],
        ),
        Line::new(
            LineKind::Row(3),
            [Position::BOTTOM_LEFT, Position::BOTTOM_CENTER, Position::BOTTOM_RIGHT],
        ),
        Line::new(
            LineKind::Column(1),
            [Position::TOP_LEFT, Position::MIDDLE_LEFT, Position::BOTTOM_LEFT],
        ),
        Line::new(
            LineKind::Column(2),
            [Position::TOP_CENTER, Position::CENTER, Position::BOTTOM_CENTER],
        ),
        Line::new(
            LineKind::Column(3),
            [Position::TOP_RIGHT, Position::MIDDLE_RIGHT, Position::BOTTOM_RIGHT],
        ),
        Line::new(
            LineKind::Diagonal,
            [Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
        ),
        Line::new(
            LineKind::AntiDiagonal,
            [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
        ),
    ];

    const fn new(kind: LineKind, cells: [Position; 3]) -> Self {
        Self { kind, cells }
    }

    /// The kind of line.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three positions, in order.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// Returns true if the position lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}
