//! Retained draw list of diamond primitives.
//!
//! Tiles, the placement preview and placed buildings are all [`Diamond`]s.
//! The [`Scene`] keeps them in insertion order and hands out a
//! [`ShapeHandle`] per primitive so individual shapes can be removed later.

use crate::config::Rgb;
use crate::iso::ScreenPos;
use egui::{Color32, Shape, Stroke};

/// Fill, outline and opacity of a diamond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiamondStyle {
    pub fill: Rgb,
    pub border: Rgb,
    pub border_width: f32,
    /// `1.0` is fully opaque.
    pub opacity: f32,
}

/// A bordered diamond centered on `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diamond {
    pub center: ScreenPos,
    pub half_width: f32,
    pub half_height: f32,
    pub style: DiamondStyle,
}

impl Diamond {
    /// Corners in the order top, right, bottom, left.
    pub fn vertices(&self) -> [ScreenPos; 4] {
        let ScreenPos { x, y } = self.center;
        [
            ScreenPos {
                x,
                y: y - self.half_height,
            },
            ScreenPos {
                x: x + self.half_width,
                y,
            },
            ScreenPos {
                x,
                y: y + self.half_height,
            },
            ScreenPos {
                x: x - self.half_width,
                y,
            },
        ]
    }

    /// Closed, filled `egui` polygon, translated by `offset` into painter space.
    pub fn to_shape(&self, offset: egui::Vec2) -> Shape {
        let fill = Color32::from(self.style.fill).gamma_multiply(self.style.opacity);
        let border = Color32::from(self.style.border).gamma_multiply(self.style.opacity);
        let points = self
            .vertices()
            .iter()
            .map(|p| egui::pos2(p.x, p.y) + offset)
            .collect();
        Shape::convex_polygon(points, fill, Stroke::new(self.style.border_width, border))
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Identifier of a primitive in a [`Scene`]. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeHandle(u64);

#[derive(Debug, Default)]
pub struct Scene {
    /// Bumped on every add, including each preview rebuild; `u64` never wraps
    /// at pointer-event rates.
    last_handle: u64,
    shapes: Vec<(ShapeHandle, Diamond)>,
}

impl Scene {
    pub fn add(&mut self, diamond: Diamond) -> ShapeHandle {
        self.last_handle += 1;
        let handle = ShapeHandle(self.last_handle);
        self.shapes.push((handle, diamond));
        handle
    }

    /// Remove a primitive, keeping the draw order of the rest.
    pub fn remove(&mut self, handle: ShapeHandle) -> Option<Diamond> {
        let index = self.shapes.iter().position(|(h, _)| *h == handle)?;
        Some(self.shapes.remove(index).1)
    }

    pub fn get(&self, handle: ShapeHandle) -> Option<&Diamond> {
        self.shapes
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, d)| d)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Live primitives, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeHandle, &Diamond)> {
        self.shapes.iter().map(|(h, d)| (*h, d))
    }
}
