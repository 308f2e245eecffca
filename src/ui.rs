//! UI / rendering helpers.
//!
//! Turns the map into scene primitives and paints the scene with `egui`.
//! No placement logic lives here.

use crate::config::SceneConfig;
use crate::iso::{GridCoord, IsoProjection};
use crate::map::{Grid, TileCatalog};
use crate::scene::{Diamond, Scene};

/// Add one diamond per map cell, row by row.
///
/// Each call adds a fresh set of primitives; it never clears what is already
/// in `scene`.
pub fn render_map(
    grid: &Grid,
    catalog: &TileCatalog,
    projection: &IsoProjection,
    config: &SceneConfig,
    scene: &mut Scene,
) {
    for (cell, key) in grid.iter() {
        let Some(kind) = catalog.get(key) else {
            log::warn!("no tile kind for {key:?} at {cell:?}, skipping");
            continue;
        };
        scene.add(Diamond {
            center: projection.cell_center(cell),
            half_width: projection.half_width,
            half_height: projection.half_height,
            style: config.tile_style(kind.color),
        });
    }
}

/// Paint every live primitive, oldest first, shifted by `offset`.
pub fn paint(scene: &Scene, painter: &egui::Painter, offset: egui::Vec2) {
    painter.extend(scene.iter().map(|(_, diamond)| diamond.to_shape(offset)));
}

/// One-line readout of the hovered cell and the building count.
pub fn status_line(
    hover: Option<GridCoord>,
    grid: &Grid,
    catalog: &TileCatalog,
    buildings: usize,
) -> String {
    let tile = hover
        .and_then(|cell| grid.get(cell))
        .and_then(|key| catalog.get(key));

    match (hover, tile) {
        (Some(cell), Some(kind)) => format!(
            "({}, {}) {}  |  buildings: {buildings}",
            cell.col, cell.row, kind.display_name
        ),
        _ => format!("-  |  buildings: {buildings}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::FLOOR;

    fn setup() -> (Grid, TileCatalog, SceneConfig) {
        let catalog = TileCatalog::standard();
        let grid = Grid::default_map(&catalog).expect("valid map");
        (grid, catalog, SceneConfig::default())
    }

    #[test]
    fn render_map_adds_one_diamond_per_cell_in_row_major_order() {
        let (grid, catalog, config) = setup();
        let projection = config.projection();
        let mut scene = Scene::default();

        render_map(&grid, &catalog, &projection, &config, &mut scene);
        assert_eq!(scene.len(), 25);

        let centers: Vec<_> = scene.iter().map(|(_, d)| d.center).collect();
        let expected: Vec<_> = (0..5)
            .flat_map(|row| (0..5).map(move |col| GridCoord::new(col, row)))
            .map(|cell| projection.cell_center(cell))
            .collect();
        assert_eq!(centers, expected);
    }

    #[test]
    fn tiles_use_kind_color_and_fixed_border() {
        let (grid, catalog, config) = setup();
        let mut scene = Scene::default();
        render_map(&grid, &catalog, &config.projection(), &config, &mut scene);

        let floor = catalog.get(FLOOR).expect("floor kind");
        // Index 6 in row-major order is col 1, row 1.
        let (_, tile) = scene.iter().nth(6).expect("25 tiles");
        assert_eq!(tile.style.fill, floor.color);
        assert_eq!(tile.style.border, config.tile_border);
        assert_eq!(tile.style.border_width, config.border_width);
        assert_eq!(tile.style.opacity, 1.0);
    }

    #[test]
    fn render_map_twice_adds_twice() {
        let (grid, catalog, config) = setup();
        let mut scene = Scene::default();
        render_map(&grid, &catalog, &config.projection(), &config, &mut scene);
        render_map(&grid, &catalog, &config.projection(), &config, &mut scene);
        assert_eq!(scene.len(), 50);
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let (grid, _, config) = setup();
        let mut scene = Scene::default();
        render_map(&grid, &TileCatalog::default(), &config.projection(), &config, &mut scene);
        assert!(scene.is_empty());
    }

    #[test]
    fn status_line_names_hovered_tile() {
        let (grid, catalog, _) = setup();
        let line = status_line(Some(GridCoord::new(1, 1)), &grid, &catalog, 3);
        assert_eq!(line, "(1, 1) Floor  |  buildings: 3");

        let off_map = status_line(Some(GridCoord::new(9, 9)), &grid, &catalog, 0);
        assert_eq!(off_map, "-  |  buildings: 0");
        assert_eq!(status_line(None, &grid, &catalog, 0), off_map);
    }
}
