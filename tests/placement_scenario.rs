//! End-to-end placement on the shipped 5x5 map.

use iso_builder::config::SceneConfig;
use iso_builder::iso::{GridCoord, ScreenPos};
use iso_builder::map::{FLOOR, Grid, TileCatalog, WALL};
use iso_builder::placement::{PlacementController, PlacementEvent, PointerAction, Rejection};
use iso_builder::scene::Scene;
use iso_builder::ui;

struct World {
    config: SceneConfig,
    grid: Grid,
    scene: Scene,
    placement: PlacementController,
}

fn world() -> World {
    let config = SceneConfig::default();
    let catalog = TileCatalog::standard();
    let grid = Grid::default_map(&catalog).expect("default map parses");

    let mut scene = Scene::default();
    ui::render_map(&grid, &catalog, &config.projection(), &config, &mut scene);

    let placement = PlacementController::new(
        config.projection(),
        grid.bounds(),
        config.preview_style(),
        config.building_style(),
    );

    World {
        config,
        grid,
        scene,
        placement,
    }
}

impl World {
    fn screen_of(&self, col: i32, row: i32) -> ScreenPos {
        self.config.projection().cell_center(GridCoord::new(col, row))
    }

    fn click_at(&mut self, pos: ScreenPos) -> Vec<PlacementEvent> {
        let mut events = self
            .placement
            .apply(&mut self.scene, &PointerAction::Moved(pos));
        events.extend(self.placement.apply(&mut self.scene, &PointerAction::Down));
        events
    }

    fn placed_cells(&self) -> Vec<GridCoord> {
        self.placement.buildings().iter().map(|b| b.cell).collect()
    }
}

#[test]
fn floor_click_places_once() {
    let mut w = world();
    assert_eq!(w.grid.get(GridCoord::new(1, 1)), Some(FLOOR));

    let pos = w.screen_of(1, 1);
    w.click_at(pos);
    assert_eq!(w.placed_cells(), vec![GridCoord::new(1, 1)]);
    let shapes = w.scene.len();

    let events = w.click_at(pos);
    assert_eq!(
        events.last(),
        Some(&PlacementEvent::Rejected {
            cell: Some(GridCoord::new(1, 1)),
            reason: Rejection::Occupied
        })
    );
    assert_eq!(w.placed_cells(), vec![GridCoord::new(1, 1)]);
    assert_eq!(w.scene.len(), shapes, "no second visual");
}

#[test]
fn wall_tiles_accept_buildings() {
    let mut w = world();
    assert_eq!(w.grid.get(GridCoord::new(2, 2)), Some(WALL));

    let pos = w.screen_of(2, 2);
    let events = w.click_at(pos);
    assert!(matches!(
        events.last(),
        Some(PlacementEvent::Placed { cell, .. }) if *cell == GridCoord::new(2, 2)
    ));
}

#[test]
fn scene_counts_track_preview_and_buildings() {
    let mut w = world();
    assert_eq!(w.scene.len(), 25);

    let pos = w.screen_of(3, 3);
    w.placement.pointer_moved(&mut w.scene, pos);
    assert_eq!(w.scene.len(), 26, "map plus preview");

    w.placement.pointer_down(&mut w.scene);
    assert_eq!(w.scene.len(), 26, "building replaces the preview");
    assert!(w.placement.preview().is_none());

    w.placement.pointer_moved(&mut w.scene, pos);
    assert_eq!(w.scene.len(), 26, "no preview over an occupied cell");
}

#[test]
fn clicks_off_the_map_never_place() {
    let mut w = world();
    let off_map = [
        ScreenPos { x: 0.0, y: 0.0 },
        ScreenPos { x: 799.0, y: 599.0 },
        w.screen_of(-1, 2),
        w.screen_of(5, 2),
        w.screen_of(2, -1),
        w.screen_of(2, 5),
    ];
    for pos in off_map {
        w.click_at(pos);
    }
    assert!(w.placed_cells().is_empty());
    assert_eq!(w.scene.len(), 25);
}

#[test]
fn filling_the_map_places_every_cell_exactly_once() {
    let mut w = world();
    for _ in 0..2 {
        for row in 0..5 {
            for col in 0..5 {
                let pos = w.screen_of(col, row);
                w.click_at(pos);
            }
        }
    }

    let mut cells = w.placed_cells();
    assert_eq!(cells.len(), 25);
    cells.sort_by_key(|c| (c.row, c.col));
    cells.dedup();
    assert_eq!(cells.len(), 25, "no cell holds two buildings");
}
