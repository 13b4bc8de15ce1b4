//! The player's catching tile

use glam::Vec3;

use super::grid::CellIndex;
use crate::consts::BALL_RADIUS;
use crate::input::InputSymbol;

/// Select symbol -> cell, row-major from top-left
const SELECT_TABLE: [(InputSymbol, u8); 9] = [
    (InputSymbol::TopLeft, 0),
    (InputSymbol::TopCenter, 1),
    (InputSymbol::TopRight, 2),
    (InputSymbol::CenterLeft, 3),
    (InputSymbol::Center, 4),
    (InputSymbol::CenterRight, 5),
    (InputSymbol::BottomLeft, 6),
    (InputSymbol::BottomCenter, 7),
    (InputSymbol::BottomRight, 8),
];

/// Cell selected by an input symbol, if it is one of the nine select symbols
fn cell_for_symbol(symbol: InputSymbol) -> Option<CellIndex> {
    SELECT_TABLE
        .iter()
        .find(|(s, _)| *s == symbol)
        .and_then(|&(_, cell)| CellIndex::new(cell))
}

/// A tile occupying one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub cell: CellIndex,
}

impl Tile {
    pub fn set_cell(&mut self, cell: CellIndex) {
        self.cell = cell;
    }

    /// Move to the cell bound to `symbol`; non-select symbols are ignored
    pub fn set_cell_from_input(&mut self, symbol: InputSymbol) {
        if let Some(cell) = cell_for_symbol(symbol) {
            self.cell = cell;
        }
    }

    /// Render position, one ball radius below the cell plane
    pub fn position(&self) -> Vec3 {
        self.cell.position() + Vec3::new(0.0, -BALL_RADIUS, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_center() {
        assert_eq!(Tile::default().cell, CellIndex::CENTER);
    }

    #[test]
    fn test_select_table_is_row_major() {
        for (i, (symbol, _)) in SELECT_TABLE.iter().enumerate() {
            let mut tile = Tile::default();
            tile.set_cell_from_input(*symbol);
            assert_eq!(tile.cell.index(), i);
        }
    }

    #[test]
    fn test_start_symbol_is_ignored() {
        let mut tile = Tile::default();
        tile.set_cell(CellIndex::ALL[2]);
        tile.set_cell_from_input(InputSymbol::Start);
        assert_eq!(tile.cell.index(), 2);
    }

    #[test]
    fn test_position_below_cell() {
        let tile = Tile { cell: CellIndex::ALL[8] };
        assert_eq!(tile.position(), Vec3::new(2.0, -BALL_RADIUS, 2.0));
    }
}
