mod background_panel;
mod central_panel;
mod layers_panel;

pub use background_panel::background_panel;
pub use central_panel::{CopyFeedback, OutputPanel, central_panel};
pub use layers_panel::layers_panel;

use crate::color::{Rgb, hex_to_rgb, rgb_to_hex};
use egui::Color32;

/// Opaque egui color for a hex string, `fallback` if it does not parse.
pub(crate) fn color32(hex: &str, fallback: Color32) -> Color32 {
    hex_to_rgb(hex)
        .map(|Rgb { r, g, b }| Color32::from_rgb(r, g, b))
        .unwrap_or(fallback)
}

/// A color button; returns the new hex value when the user picked one.
pub(crate) fn color_button(ui: &mut egui::Ui, hex: &str) -> Option<String> {
    let Rgb { r, g, b } = hex_to_rgb(hex).unwrap_or(Rgb::BLACK);
    let mut rgb = [r, g, b];
    if ui.color_edit_button_srgb(&mut rgb).changed() {
        Some(rgb_to_hex(Rgb::new(rgb[0], rgb[1], rgb[2])))
    } else {
        None
    }
}
