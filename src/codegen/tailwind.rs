use super::css::{background_css, layer_css, shadow_css};
use crate::document::Document;
use crate::layer::BackgroundLayer;

/// Makes a CSS value usable inside a Tailwind `[...]` class: list separators
/// lose their space and every remaining space becomes `_`.
pub fn arbitrary_value(css: &str) -> String {
    css.replace(", ", ",").replace(' ', "_")
}

/// `shadow-[...] bg-[...]` for the whole document.
pub fn tailwind_classes(document: &Document) -> String {
    format!(
        "shadow-[{}] bg-[{}]",
        arbitrary_value(&shadow_css(document)),
        arbitrary_value(&background_css(document))
    )
}

/// `bg-[...]` for one gradient layer on its own.
pub fn layer_tailwind(layer: &BackgroundLayer) -> String {
    format!("bg-[{}]", arbitrary_value(&layer_css(layer)))
}
