//! Application shell: wires the map, the scene and placement together.

use crate::config::SceneConfig;
use crate::iso::ScreenPos;
use crate::map::{Grid, MapError, TileCatalog};
use crate::placement::{PlacementController, PlacementEvent, PointerAction};
use crate::scene::Scene;
use crate::ui;

use egui::{Align2, Color32, FontId};

pub struct IsoApp {
    config: SceneConfig,
    catalog: TileCatalog,
    grid: Grid,

    scene: Scene,
    placement: PlacementController,
}

impl IsoApp {
    /// Called once before the first frame. Builds the map and draws it.
    ///
    /// # Errors
    /// Fails if the built-in map does not parse against the tile catalog.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SceneConfig) -> Result<Self, MapError> {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::with_config(config)
    }

    /// Everything [`Self::new`] does that does not need a window.
    ///
    /// # Errors
    /// Fails if the built-in map does not parse against the tile catalog.
    pub fn with_config(config: SceneConfig) -> Result<Self, MapError> {
        let catalog = TileCatalog::standard();
        let grid = Grid::default_map(&catalog)?;
        let projection = config.projection();

        let mut scene = Scene::default();
        ui::render_map(&grid, &catalog, &projection, &config, &mut scene);
        log::info!(
            "rendered {}x{} map ({} tiles)",
            grid.cols(),
            grid.rows(),
            scene.len()
        );

        let placement = PlacementController::new(
            projection,
            grid.bounds(),
            config.preview_style(),
            config.building_style(),
        );

        Ok(Self {
            config,
            catalog,
            grid,
            scene,
            placement,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn placement(&self) -> &PlacementController {
        &self.placement
    }

    /// Feed pointer actions through placement, in order.
    pub fn handle(&mut self, actions: &[PointerAction]) {
        for action in actions {
            for event in self.placement.apply(&mut self.scene, action) {
                if let PlacementEvent::Placed { cell, .. } = event {
                    log::info!("building placed at ({}, {})", cell.col, cell.row);
                }
            }
        }
    }
}

impl eframe::App for IsoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = egui::Frame::NONE.fill(self.config.background.into());

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click());
            let canvas = response.rect;

            // Collect input → pointer actions, in surface coordinates
            let actions = ctx.input(|i| pointer_actions(&i.events, canvas.min));
            self.handle(&actions);

            ui::paint(&self.scene, &painter, canvas.min.to_vec2());

            let status = ui::status_line(
                self.placement.hover(),
                &self.grid,
                &self.catalog,
                self.placement.buildings().len(),
            );
            painter.text(
                canvas.min + egui::vec2(8.0, 8.0),
                Align2::LEFT_TOP,
                status,
                FontId::monospace(14.0),
                Color32::WHITE,
            );
        });
    }
}

/// Translate raw `egui` events into placement actions relative to `origin`.
fn pointer_actions(events: &[egui::Event], origin: egui::Pos2) -> Vec<PointerAction> {
    let to_surface = |pos: egui::Pos2| ScreenPos {
        x: pos.x - origin.x,
        y: pos.y - origin.y,
    };

    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::PointerMoved(pos) => Some(PointerAction::Moved(to_surface(*pos))),
            egui::Event::PointerButton {
                button: egui::PointerButton::Primary,
                pressed: true,
                ..
            } => Some(PointerAction::Down),
            _ => None,
        })
        .collect()
}
