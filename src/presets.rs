//! Ready-made looks. Each one is just a scripted sequence of reset, add and
//! update calls on the document, nothing a user could not do by hand.

use crate::command::{BackgroundField, BoxProperty, ShadowField, Update};
use crate::document::Document;
use crate::layer::{ColorStop, GradientKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Soft,
    Neumorphism,
    Cristal,
}

struct ShadowSpec {
    horizontal: i32,
    vertical: i32,
    blur: u32,
    spread: i32,
    color: &'static str,
    opacity: f64,
    inset: bool,
}

impl ShadowSpec {
    fn updates(&self) -> [Update; 7] {
        [
            Update::Shadow(ShadowField::Horizontal(self.horizontal)),
            Update::Shadow(ShadowField::Vertical(self.vertical)),
            Update::Shadow(ShadowField::Blur(self.blur)),
            Update::Shadow(ShadowField::Spread(self.spread)),
            Update::Shadow(ShadowField::Color(self.color.to_string())),
            Update::Shadow(ShadowField::Opacity(self.opacity)),
            Update::Shadow(ShadowField::Inset(self.inset)),
        ]
    }
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Soft, Preset::Neumorphism, Preset::Cristal];

    pub fn label(&self) -> &'static str {
        match self {
            Preset::Soft => "Soft",
            Preset::Neumorphism => "Neumorphism",
            Preset::Cristal => "Cristal",
        }
    }

    /// Replaces the document contents with this preset.
    pub fn apply(&self, document: &mut Document) {
        log::info!("Applying preset {}", self.label());
        document.reset();

        match self {
            Preset::Soft => {
                set_box(document, 12, "#ffffff", "#f3f4f6");
                set_shadows(
                    document,
                    &[
                        ShadowSpec {
                            horizontal: 0,
                            vertical: 10,
                            blur: 30,
                            spread: -5,
                            color: "#000000",
                            opacity: 0.15,
                            inset: false,
                        },
                        ShadowSpec {
                            horizontal: 0,
                            vertical: 4,
                            blur: 6,
                            spread: -2,
                            color: "#000000",
                            opacity: 0.1,
                            inset: false,
                        },
                    ],
                );
            }
            Preset::Neumorphism => {
                set_box(document, 20, "#e0e5ec", "#e0e5ec");
                set_shadows(
                    document,
                    &[
                        ShadowSpec {
                            horizontal: 9,
                            vertical: 9,
                            blur: 16,
                            spread: 0,
                            color: "#a3b1c6",
                            opacity: 0.6,
                            inset: false,
                        },
                        ShadowSpec {
                            horizontal: -9,
                            vertical: -9,
                            blur: 16,
                            spread: 0,
                            color: "#ffffff",
                            opacity: 0.5,
                            inset: false,
                        },
                    ],
                );
            }
            Preset::Cristal => {
                set_box(document, 16, "#ffffff", "#6366f1");
                set_shadows(
                    document,
                    &[
                        ShadowSpec {
                            horizontal: 0,
                            vertical: 8,
                            blur: 32,
                            spread: 0,
                            color: "#1f2687",
                            opacity: 0.37,
                            inset: false,
                        },
                        ShadowSpec {
                            horizontal: 0,
                            vertical: 1,
                            blur: 0,
                            spread: 0,
                            color: "#ffffff",
                            opacity: 0.4,
                            inset: true,
                        },
                    ],
                );
                document.add_background_layer(GradientKind::Linear);
                document.apply(Update::Background(BackgroundField::Angle(135)));
                document.apply(Update::Background(BackgroundField::Stops(vec![
                    ColorStop::new("#ffffff", 0),
                    ColorStop::new("#dbeafe", 100),
                ])));
            }
        }
    }
}

fn set_box(document: &mut Document, radius: u32, background: &str, canvas: &str) {
    document.apply(Update::Box(BoxProperty::BorderRadius(radius)));
    document.apply(Update::Box(BoxProperty::BackgroundColor(background.to_string())));
    document.apply(Update::Box(BoxProperty::CanvasColor(canvas.to_string())));
}

/// The first spec edits the existing layer, each further one adds a layer.
/// The first layer is left selected.
fn set_shadows(document: &mut Document, specs: &[ShadowSpec]) {
    for (index, spec) in specs.iter().enumerate() {
        if index > 0 {
            document.add_shadow_layer();
        }
        for update in spec.updates() {
            document.apply(update);
        }
    }
    document.select_shadow_layer(0);
}
