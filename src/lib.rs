//! Isometric map renderer with click-to-place buildings.
#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod iso;
pub mod map;
pub mod placement;
pub mod scene;
pub mod ui;

mod app;
pub use app::IsoApp;
