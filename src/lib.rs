#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod dialogs;
pub mod input;
pub mod panels;
pub mod text;
pub mod tool;

pub use app::PaintApp;
pub use canvas::{CanvasBuffer, CanvasError};
pub use dialogs::{DialogAction, Dialogs};
pub use input::{StrokeSegment, StrokeTracker};
pub use text::FontStore;
pub use tool::{BrushSettings, Tool};
