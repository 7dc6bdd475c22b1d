#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod codegen;
pub mod color;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod layer;
pub mod panels;
pub mod presets;
pub mod state;

pub use app::ShadowApp;
pub use codegen::OutputFormat;
pub use command::Update;
pub use error::UpdateError;
pub use document::{BoxProperties, Document};
pub use layer::{BackgroundLayer, ColorStop, GradientKind, RadialShape, RadialSize, ShadowLayer};
pub use presets::Preset;
pub use state::CombinedState;
