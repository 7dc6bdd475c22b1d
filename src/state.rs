use crate::document::{BoxProperties, Document};
use crate::layer::{BackgroundLayer, ShadowLayer};
use serde::{Serialize, Serializer};

/// Read view handed to the UI: box properties and the active shadow layer
/// flattened side by side, plus what the layer lists need to render.
///
/// Editing controls always target "whatever is active", so this is all a
/// view needs to populate them. Serialized, the keys are camelCase and
/// `currentBgLayerIndex` is `-1` when nothing is selected.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedState<'a> {
    #[serde(flatten)]
    pub box_properties: &'a BoxProperties,
    #[serde(flatten)]
    pub shadow: &'a ShadowLayer,
    pub layer_count: usize,
    pub current_layer_index: usize,
    pub background_layers: &'a [BackgroundLayer],
    #[serde(serialize_with = "index_or_none")]
    pub current_bg_layer_index: Option<usize>,
    pub current_bg_layer: Option<&'a BackgroundLayer>,
}

impl<'a> CombinedState<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            box_properties: document.box_properties(),
            shadow: document.active_shadow(),
            layer_count: document.shadow_layers().len(),
            current_layer_index: document.active_shadow_index(),
            background_layers: document.background_layers(),
            current_bg_layer_index: document.active_background_index(),
            current_bg_layer: document.active_background(),
        }
    }
}

fn index_or_none<S: Serializer>(index: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
    match index {
        Some(index) => serializer.serialize_u64(*index as u64),
        None => serializer.serialize_i64(-1),
    }
}
