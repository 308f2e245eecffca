//! Tile catalog and the fixed map grid.
//!
//! The map is a rectangle of single-character tile keys, each resolved
//! through a [`TileCatalog`]. Both are built once at startup and never change.

use crate::config::Rgb;
use crate::iso::{GridBounds, GridCoord};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// The map the application ships with.
pub const DEFAULT_MAP: [&str; 5] = ["WWWWW", "WFFFW", "WFWFW", "WFFFW", "WWWWW"];

pub const WALL: TileKey = TileKey('W');
pub const FLOOR: TileKey = TileKey('F');

// ---------------------------------------------------------------------------
// Tiles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey(pub char);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileKind {
    pub display_name: &'static str,
    pub color: Rgb,
    /// Carried for the map's own semantics. Placement does not consult it.
    pub walkable: bool,
}

/// Map from tile keys to their kinds.
#[derive(Debug, Clone, Default)]
pub struct TileCatalog {
    kinds: FxHashMap<TileKey, TileKind>,
}

impl TileCatalog {
    /// Walls and floors.
    pub fn standard() -> Self {
        let mut catalog = Self::default();
        catalog.insert(
            WALL,
            TileKind {
                display_name: "Wall",
                color: Rgb::from_hex(0x8B4513),
                walkable: false,
            },
        );
        catalog.insert(
            FLOOR,
            TileKind {
                display_name: "Floor",
                color: Rgb::from_hex(0x90EE90),
                walkable: true,
            },
        );
        catalog
    }

    pub fn insert(&mut self, key: TileKey, kind: TileKind) -> Option<TileKind> {
        self.kinds.insert(key, kind)
    }

    pub fn get(&self, key: TileKey) -> Option<&TileKind> {
        self.kinds.get(&key)
    }

    pub fn contains(&self, key: TileKey) -> bool {
        self.kinds.contains_key(&key)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map has no tiles")]
    Empty,
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile key {key:?} at column {col}, row {row}")]
    UnknownTile { key: char, col: usize, row: usize },
    #[error("map of {cols}x{rows} tiles is too large")]
    TooLarge { cols: usize, rows: usize },
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// Row-major rectangle of tile keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: GridBounds,
    cells: Vec<TileKey>,
}

impl Grid {
    /// Parse one string per row. Every row must be the same width and every
    /// key must be known to `catalog`.
    ///
    /// # Errors
    /// Returns a [`MapError`] describing the first malformed row or tile.
    pub fn parse<S: AsRef<str>>(rows: &[S], catalog: &TileCatalog) -> Result<Self, MapError> {
        let mut cells = Vec::new();
        let mut width = None;

        for (row, line) in rows.iter().enumerate() {
            let start = cells.len();
            for (col, key) in line.as_ref().chars().enumerate() {
                if !catalog.contains(TileKey(key)) {
                    return Err(MapError::UnknownTile { key, col, row });
                }
                cells.push(TileKey(key));
            }

            let found = cells.len() - start;
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(MapError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
        }

        let cols = width.unwrap_or(0);
        if cols == 0 {
            return Err(MapError::Empty);
        }

        let too_large = || MapError::TooLarge {
            cols,
            rows: rows.len(),
        };
        let bounds = GridBounds {
            cols: i32::try_from(cols).map_err(|_e| too_large())?,
            rows: i32::try_from(rows.len()).map_err(|_e| too_large())?,
        };

        Ok(Self { bounds, cells })
    }

    /// The shipped 5x5 map against the standard catalog.
    ///
    /// # Errors
    /// Only if `catalog` lacks the wall or floor kinds.
    pub fn default_map(catalog: &TileCatalog) -> Result<Self, MapError> {
        Self::parse(&DEFAULT_MAP, catalog)
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Tile key at `cell`, or `None` outside the map.
    pub fn get(&self, cell: GridCoord) -> Option<TileKey> {
        if !self.bounds.contains(cell) {
            return None;
        }
        let index = usize::try_from(cell.row * self.bounds.cols + cell.col).ok()?;
        self.cells.get(index).copied()
    }

    /// Every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, TileKey)> + '_ {
        let cols = self.bounds.cols.max(1);
        (0..).zip(self.cells.iter()).map(move |(i, key)| {
            (
                GridCoord {
                    col: i % cols,
                    row: i / cols,
                },
                *key,
            )
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
