use crate::color::hex_to_rgba;
use crate::document::Document;
use crate::layer::{BackgroundLayer, GradientKind, ShadowLayer};

/// The `box-shadow` value: one term per shadow layer, in layer order.
pub fn shadow_css(document: &Document) -> String {
    document
        .shadow_layers()
        .iter()
        .map(shadow_term)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `{h}px {v}px {blur}px {spread}px rgba(...)`, plus ` inset` when set.
pub fn shadow_term(layer: &ShadowLayer) -> String {
    let color = hex_to_rgba(&layer.color, layer.opacity);
    let mut term = format!(
        "{}px {}px {}px {}px {}",
        layer.horizontal, layer.vertical, layer.blur, layer.spread, color
    );
    if layer.inset {
        term.push_str(" inset");
    }
    term
}

/// The `background` value: every gradient layer (first listed is drawn on
/// top) followed by the solid base color. Without gradient layers this is
/// just the base color.
pub fn background_css(document: &Document) -> String {
    let mut images: Vec<String> = document.background_layers().iter().map(layer_css).collect();
    images.push(document.box_properties().background_color.clone());
    images.join(", ")
}

/// A single `linear-gradient(...)` or `radial-gradient(...)` image.
pub fn layer_css(layer: &BackgroundLayer) -> String {
    let stops = layer
        .sorted_stops()
        .iter()
        .map(|stop| format!("{} {}%", stop.color, stop.position))
        .collect::<Vec<_>>()
        .join(", ");

    match layer.kind {
        GradientKind::Linear => format!("linear-gradient({}deg, {})", layer.angle, stops),
        GradientKind::Radial => {
            // Leave the extent out when it is the one browsers assume anyway
            let extent = if layer.size.is_browser_default() {
                String::new()
            } else {
                format!(" {}", layer.size)
            };
            format!(
                "radial-gradient({}{} at {}% {}%, {})",
                layer.shape.as_css(),
                extent,
                layer.pos_x,
                layer.pos_y,
                stops
            )
        }
    }
}

/// Ready-to-paste declarations for the CSS tab.
pub fn css_rules(document: &Document) -> String {
    let shadow = shadow_css(document);
    let mut rules = format!(
        "box-shadow: {shadow};\n-webkit-box-shadow: {shadow};\n-moz-box-shadow: {shadow};\nbackground: {};",
        background_css(document)
    );
    let radius = document.box_properties().border_radius;
    if radius > 0 {
        rules.push_str(&format!("\nborder-radius: {}px;", radius));
    }
    rules
}
