//! The 3x3 cell grid
//!
//! Cells are laid out row-major on the y = 0 plane, centered at the origin:
//!
//! ```text
//!   0 1 2      (-z, "top")
//!   3 4 5
//!   6 7 8      (+z, "bottom")
//! ```

use glam::Vec3;

use crate::consts::CELL_SPACING;

/// Number of cells in the grid
pub const CELL_COUNT: usize = 9;

const S: f32 = CELL_SPACING;

/// Grid coordinate of every cell, indexed by cell index
pub const CELL_POSITIONS: [Vec3; CELL_COUNT] = [
    Vec3::new(-S, 0.0, -S),
    Vec3::new(0.0, 0.0, -S),
    Vec3::new(S, 0.0, -S),
    Vec3::new(-S, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(S, 0.0, 0.0),
    Vec3::new(-S, 0.0, S),
    Vec3::new(0.0, 0.0, S),
    Vec3::new(S, 0.0, S),
];

/// Index of one of the nine grid cells (always in 0..9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(u8);

impl CellIndex {
    /// The center cell, where the ball and tile start every round
    pub const CENTER: CellIndex = CellIndex(4);

    /// All cells in row-major order
    pub const ALL: [CellIndex; CELL_COUNT] = [
        CellIndex(0),
        CellIndex(1),
        CellIndex(2),
        CellIndex(3),
        CellIndex(4),
        CellIndex(5),
        CellIndex(6),
        CellIndex(7),
        CellIndex(8),
    ];

    pub fn new(index: u8) -> Option<Self> {
        ((index as usize) < CELL_COUNT).then_some(Self(index))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Grid coordinate of this cell
    #[inline]
    pub fn position(self) -> Vec3 {
        CELL_POSITIONS[self.index()]
    }
}

impl Default for CellIndex {
    fn default() -> Self {
        Self::CENTER
    }
}
