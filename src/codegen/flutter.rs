//! Flutter `BoxDecoration` output.
//!
//! Flutter has no way to stack several gradients in one decoration, so only
//! the first (topmost) background layer is rendered; the rest are dropped.
//! Linear gradients are approximated as a `GradientRotation` around a fixed
//! top-left to bottom-right axis, which lines up with the CSS angle exactly
//! only for some angles. Radial gradients always use a radius of 0.5.

use crate::color::{Rgb, hex_to_color_components, hex_to_rgb};
use crate::document::Document;
use crate::layer::{BackgroundLayer, GradientKind, ShadowLayer};

const INDENT: &str = "  ";

/// Radius of every emitted `RadialGradient`
pub const RADIAL_RADIUS: f64 = 0.5;

#[derive(Default)]
struct Snippet {
    out: String,
}

impl Snippet {
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn finish(mut self) -> String {
        if self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}

/// The decoration (or bare shadow list) for the whole document.
pub fn flutter_code(document: &Document) -> String {
    let props = document.box_properties();
    let decorated = props.border_radius > 0
        || !document.background_layers().is_empty()
        || !props.background_color.is_empty();

    let mut code = Snippet::default();
    let depth = if decorated {
        code.line(0, "decoration: BoxDecoration(");
        if props.border_radius > 0 {
            code.line(
                1,
                &format!("borderRadius: BorderRadius.circular({}),", props.border_radius),
            );
        }
        match document.background_layers().first() {
            Some(layer) => write_gradient(&mut code, 1, "gradient: ", "),", layer),
            None => code.line(1, &format!("color: {},", color_literal(&props.background_color))),
        }
        1
    } else {
        0
    };

    code.line(depth, "boxShadow: [");
    for layer in document.shadow_layers() {
        write_shadow(&mut code, depth + 1, layer);
    }
    code.line(depth, "],");

    if decorated {
        code.line(0, "),");
    }
    code.finish()
}

/// A single `LinearGradient(...)` / `RadialGradient(...)` expression.
pub fn layer_flutter(layer: &BackgroundLayer) -> String {
    let mut code = Snippet::default();
    write_gradient(&mut code, 0, "", ")", layer);
    code.finish()
}

/// `Color(0xFFRRGGBB)`. Alpha is always fully opaque here.
pub fn color_literal(hex: &str) -> String {
    format!("Color(0xFF{})", hex_to_color_components(hex).hex)
}

/// CSS degrees to the radians `GradientRotation` takes.
pub fn rotation_radians(angle: u32) -> f64 {
    f64::from(angle) * std::f64::consts::PI / 180.0
}

/// Maps a 0..=100 percentage onto Flutter's -1..=1 alignment space.
pub fn alignment_coordinate(percent: u32) -> f64 {
    (f64::from(percent) / 100.0) * 2.0 - 1.0
}

fn write_shadow(code: &mut Snippet, depth: usize, layer: &ShadowLayer) {
    let Rgb { r, g, b } = hex_to_rgb(&layer.color).unwrap_or(Rgb::BLACK);

    code.line(depth, "BoxShadow(");
    code.line(
        depth + 1,
        &format!("color: Color.fromRGBO({}, {}, {}, {}),", r, g, b, layer.opacity),
    );
    code.line(
        depth + 1,
        &format!("offset: Offset({}, {}),", layer.horizontal, layer.vertical),
    );
    code.line(depth + 1, &format!("blurRadius: {},", layer.blur));
    code.line(depth + 1, &format!("spreadRadius: {},", layer.spread));
    if layer.inset {
        code.line(depth + 1, "// inset: true (BoxShadow has no inset support)");
    }
    code.line(depth, "),");
}

fn write_gradient(
    code: &mut Snippet,
    depth: usize,
    prefix: &str,
    terminator: &str,
    layer: &BackgroundLayer,
) {
    let stops = layer.sorted_stops();
    let colors = stops
        .iter()
        .map(|stop| color_literal(&stop.color))
        .collect::<Vec<_>>()
        .join(", ");
    let positions = stops
        .iter()
        .map(|stop| format!("{:.2}", f64::from(stop.position) / 100.0))
        .collect::<Vec<_>>()
        .join(", ");

    match layer.kind {
        GradientKind::Linear => {
            code.line(depth, &format!("{prefix}LinearGradient("));
            code.line(depth + 1, "begin: Alignment.topLeft,");
            code.line(depth + 1, "end: Alignment.bottomRight,");
            code.line(
                depth + 1,
                &format!("transform: GradientRotation({:.3}),", rotation_radians(layer.angle)),
            );
        }
        GradientKind::Radial => {
            code.line(depth, &format!("{prefix}RadialGradient("));
            code.line(
                depth + 1,
                &format!(
                    "center: Alignment({:.2}, {:.2}),",
                    alignment_coordinate(layer.pos_x),
                    alignment_coordinate(layer.pos_y)
                ),
            );
            code.line(depth + 1, &format!("radius: {},", RADIAL_RADIUS));
        }
    }
    code.line(depth + 1, &format!("colors: [{}],", colors));
    code.line(depth + 1, &format!("stops: [{}],", positions));
    code.line(depth, terminator);
}
