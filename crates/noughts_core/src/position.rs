//! Validated board coordinates.

use super::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell position, 1-based `(row, col)` with both in `1..=3`.
///
/// Positions can only be built from in-range coordinates, so every
/// `Position` in circulation addresses a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Top-left corner.
    pub const TOP_LEFT: Position = Position::at(1, 1);
    /// Top edge, middle column.
    pub const TOP_CENTER: Position = Position::at(1, 2);
    /// Top-right corner.
    pub const TOP_RIGHT: Position = Position::at(1, 3);
    /// Middle row, left column.
    pub const MIDDLE_LEFT: Position = Position::at(2, 1);
    /// Center cell.
    pub const CENTER: Position = Position::at(2, 2);
    /// Middle row, right column.
    pub const MIDDLE_RIGHT: Position = Position::at(2, 3);
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Position = Position::at(3, 1);
    /// Bottom edge, middle column.
    pub const BOTTOM_CENTER: Position = Position::at(3, 2);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Position = Position::at(3, 3);

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TOP_LEFT,
        Position::TOP_CENTER,
        Position::TOP_RIGHT,
        Position::MIDDLE_LEFT,
        Position::CENTER,
        Position::MIDDLE_RIGHT,
        Position::BOTTOM_LEFT,
        Position::BOTTOM_CENTER,
        Position::BOTTOM_RIGHT,
    ];

    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a position from 1-based coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidPosition`] if either coordinate is
    /// outside `1..=3`. Coordinates are never clamped.
    #[instrument]
    pub fn new(row: u8, col: u8) -> Result<Self, MoveError> {
        if (1..=3).contains(&row) && (1..=3).contains(&col) {
            Ok(Self::at(row, col))
        } else {
            Err(MoveError::InvalidPosition { row, col })
        }
    }

    /// Row, 1-based.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column, 1-based.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Converts position to row-major board index (0-8).
    pub fn to_index(self) -> usize {
        usize::from(self.row - 1) * 3 + usize::from(self.col - 1)
    }

    /// Creates position from row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "top-left",
            "top-center",
            "top-right",
            "middle-left",
            "center",
            "middle-right",
            "bottom-left",
            "bottom-center",
            "bottom-right",
        ];
        LABELS[self.to_index()]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Unvalidated wire form; deserialization goes through [`Position::new`].
#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = MoveError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.col)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = MoveError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}
