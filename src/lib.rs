#![warn(clippy::all, rust_2018_idioms)]

//! Freehand drawing on a 2D overlay: stroke capture, Bézier smoothing,
//! bounded undo/redo and a radial color picker.
//!
//! The host feeds pointer and command input into a [`Canvas`] and reads
//! [`Canvas::strokes`], [`Canvas::current_stroke`] and the picker's
//! [`ColorPicker::swatches`] back once per frame. Nothing here draws.

pub mod brush;
pub mod canvas;
pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod interpolate;
pub mod smoothing;
pub mod stroke;
pub mod widgets;

pub use brush::BrushSettings;
pub use canvas::{Canvas, DrawingState};
pub use command::{Command, History};
pub use config::CanvasConfig;
pub use error::{ConfigError, ConfigResult};
pub use geometry::{Argb, DrawPoint, Point};
pub use interpolate::interpolate;
pub use smoothing::CurveSmoother;
pub use stroke::Stroke;
pub use widgets::{ColorPicker, Swatch};
