//! Pure projections of a [`Document`] into code. Same document in, same text out.

mod css;
mod flutter;
mod tailwind;

pub use css::{background_css, css_rules, layer_css, shadow_css, shadow_term};
pub use flutter::{
    RADIAL_RADIUS, alignment_coordinate, color_literal, flutter_code, layer_flutter,
    rotation_radians,
};
pub use tailwind::{arbitrary_value, layer_tailwind, tailwind_classes};

use crate::document::Document;

/// The output tabs of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Css,
    Flutter,
    Tailwind,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Css,
        OutputFormat::Flutter,
        OutputFormat::Tailwind,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Css => "CSS",
            OutputFormat::Flutter => "Flutter",
            OutputFormat::Tailwind => "Tailwind",
        }
    }

    /// The text shown in this tab, which is also what gets copied.
    pub fn generate(&self, document: &Document) -> String {
        match self {
            OutputFormat::Css => css_rules(document),
            OutputFormat::Flutter => flutter_code(document),
            OutputFormat::Tailwind => tailwind_classes(document),
        }
    }
}
