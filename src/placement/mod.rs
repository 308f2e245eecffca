//! Pointer tracking and building placement.
//!
//! [`PlacementController`] owns the hover slot, the single preview visual and
//! the append-only list of placed buildings. Pointer input arrives as
//! [`PointerAction`]s; every action returns the [`PlacementEvent`]s it caused
//! so the shell can log them. Invalid clicks are silent no-ops, not errors.

use crate::iso::{GridBounds, GridCoord, IsoProjection, ScreenPos};
use crate::scene::{Diamond, DiamondStyle, Scene, ShapeHandle};

// ---------------------------------------------------------------------------
// Actions & events
// ---------------------------------------------------------------------------

/// Pointer input, already in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Moved(ScreenPos),
    /// Primary button pressed. Acts on the last hovered cell.
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No pointer movement seen yet.
    NoHover,
    OutOfBounds,
    Occupied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementEvent {
    Hovered { cell: GridCoord, placeable: bool },
    Placed { cell: GridCoord, visual: ShapeHandle },
    Rejected {
        cell: Option<GridCoord>,
        reason: Rejection,
    },
}

// ---------------------------------------------------------------------------
// Placed buildings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedBuilding {
    pub cell: GridCoord,
    pub visual: ShapeHandle,
}

/// Append-only list of buildings. No two entries share a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacedBuildings(Vec<PlacedBuilding>);

impl PlacedBuildings {
    /// Linear scan; the list stays small.
    pub fn is_occupied(&self, cell: GridCoord) -> bool {
        self.0.iter().any(|b| b.cell == cell)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlacedBuilding> {
        self.0.iter()
    }

    fn push(&mut self, building: PlacedBuilding) {
        debug_assert!(
            !self.is_occupied(building.cell),
            "cell {:?} already has a building",
            building.cell
        );
        self.0.push(building);
    }
}

impl<'a> IntoIterator for &'a PlacedBuildings {
    type Item = &'a PlacedBuilding;
    type IntoIter = std::slice::Iter<'a, PlacedBuilding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct PlacementController {
    projection: IsoProjection,
    bounds: GridBounds,
    preview_style: DiamondStyle,
    building_style: DiamondStyle,

    hover: Option<GridCoord>,
    preview: Option<ShapeHandle>,
    buildings: PlacedBuildings,
}

impl PlacementController {
    pub fn new(
        projection: IsoProjection,
        bounds: GridBounds,
        preview_style: DiamondStyle,
        building_style: DiamondStyle,
    ) -> Self {
        Self {
            projection,
            bounds,
            preview_style,
            building_style,
            hover: None,
            preview: None,
            buildings: PlacedBuildings::default(),
        }
    }

    pub fn hover(&self) -> Option<GridCoord> {
        self.hover
    }

    pub fn preview(&self) -> Option<ShapeHandle> {
        self.preview
    }

    pub fn buildings(&self) -> &PlacedBuildings {
        &self.buildings
    }

    /// Apply a single pointer action and return what happened.
    pub fn apply(&mut self, scene: &mut Scene, action: &PointerAction) -> Vec<PlacementEvent> {
        match action {
            PointerAction::Moved(pos) => vec![self.pointer_moved(scene, *pos)],
            PointerAction::Down => vec![self.pointer_down(scene)],
        }
    }

    /// Track the hovered cell and rebuild the preview for it.
    pub fn pointer_moved(&mut self, scene: &mut Scene, pos: ScreenPos) -> PlacementEvent {
        let cell = self.projection.to_grid(pos);
        self.hover = Some(cell);

        if let Some(handle) = self.preview.take() {
            scene.remove(handle);
        }

        let placeable = self.check(cell).is_ok();
        if placeable {
            self.preview = Some(scene.add(self.diamond_at(cell, self.preview_style)));
        }

        PlacementEvent::Hovered { cell, placeable }
    }

    /// Place a building on the hovered cell if it is valid and empty.
    pub fn pointer_down(&mut self, scene: &mut Scene) -> PlacementEvent {
        let Some(cell) = self.hover else {
            return PlacementEvent::Rejected {
                cell: None,
                reason: Rejection::NoHover,
            };
        };

        if let Err(reason) = self.check(cell) {
            log::debug!("ignoring click on {cell:?}: {reason:?}");
            return PlacementEvent::Rejected {
                cell: Some(cell),
                reason,
            };
        }

        // No preview may sit on an occupied cell.
        if let Some(handle) = self.preview.take() {
            scene.remove(handle);
        }

        let visual = scene.add(self.diamond_at(cell, self.building_style));
        self.buildings.push(PlacedBuilding { cell, visual });
        log::debug!("placed building #{} at {cell:?}", self.buildings.len());

        PlacementEvent::Placed { cell, visual }
    }

    fn check(&self, cell: GridCoord) -> Result<(), Rejection> {
        if !self.bounds.contains(cell) {
            Err(Rejection::OutOfBounds)
        } else if self.buildings.is_occupied(cell) {
            Err(Rejection::Occupied)
        } else {
            Ok(())
        }
    }

    fn diamond_at(&self, cell: GridCoord, style: DiamondStyle) -> Diamond {
        Diamond {
            center: self.projection.cell_center(cell),
            half_width: self.projection.half_width,
            half_height: self.projection.half_height,
            style,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
