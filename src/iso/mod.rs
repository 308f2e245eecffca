//! Isometric projection between grid cells and screen positions.
//!
//! Pure math, no `egui` types. The forward transform places the top vertex of
//! a cell's diamond; the inverse is its algebraic solution floored to whole
//! cells, so every point inside a drawn diamond maps back to that cell.

// ---------------------------------------------------------------------------
// Core value types
// ---------------------------------------------------------------------------

/// Integer cell position on the map. May lie outside the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub col: i32,
    pub row: i32,
}

impl GridCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Position on the rendering surface, in logical points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPos {
    pub x: f32,
    pub y: f32,
}

/// Map dimensions. A [`GridCoord`] is valid iff it lies inside these bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub cols: i32,
    pub rows: i32,
}

impl GridBounds {
    pub fn contains(&self, cell: GridCoord) -> bool {
        cell.col >= 0 && cell.col < self.cols && cell.row >= 0 && cell.row < self.rows
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// 2:1 diamond projection with a fixed screen offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoProjection {
    pub half_width: f32,
    pub half_height: f32,
    pub origin: ScreenPos,
}

impl IsoProjection {
    /// Screen position of the top vertex of `cell`'s diamond.
    pub fn to_screen(&self, cell: GridCoord) -> ScreenPos {
        let col = cell.col as f32;
        let row = cell.row as f32;
        ScreenPos {
            x: (col - row) * self.half_width + self.origin.x,
            y: (col + row) * self.half_height + self.origin.y,
        }
    }

    /// Center of `cell`'s diamond, half a tile below [`Self::to_screen`].
    pub fn cell_center(&self, cell: GridCoord) -> ScreenPos {
        let top = self.to_screen(cell);
        ScreenPos {
            x: top.x,
            y: top.y + self.half_height,
        }
    }

    /// Cell under a surface position. Points exactly on a diamond edge land on
    /// whichever side `floor` picks.
    pub fn to_grid(&self, pos: ScreenPos) -> GridCoord {
        let x = (pos.x - self.origin.x) / self.half_width;
        let y = (pos.y - self.origin.y) / self.half_height;

        let u = (x + y) / 2.0;
        let v = (y - x) / 2.0;

        GridCoord {
            col: u.floor() as i32,
            row: v.floor() as i32,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
