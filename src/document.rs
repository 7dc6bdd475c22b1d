use crate::command::{BackgroundField, BoxProperty, ShadowField, Update, UpdateError};
use crate::layer::{BackgroundLayer, GradientKind, MIN_STOPS, ShadowLayer};
use crate::state::CombinedState;
use serde::{Deserialize, Serialize};

/// Scalar, non-layered properties of the preview box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxProperties {
    /// Corner radius in px
    pub border_radius: u32,
    /// Solid fill under every gradient layer
    pub background_color: String,
    /// Color of the workspace around the box
    pub canvas_color: String,
}

impl Default for BoxProperties {
    fn default() -> Self {
        Self {
            border_radius: 0,
            background_color: "#ffdd00".to_string(),
            canvas_color: "#ffffff".to_string(),
        }
    }
}

/// The whole editable document: shadow layers, background layers and the box.
///
/// There is always at least one shadow layer and the active shadow index
/// always points at one of them. The active background index may be `None`
/// (nothing selected, the base color is being edited) and is not bounds
/// checked on selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    shadow_layers: Vec<ShadowLayer>,
    active_shadow_index: usize,
    background_layers: Vec<BackgroundLayer>,
    active_background_index: Option<usize>,
    box_properties: BoxProperties,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            shadow_layers: vec![ShadowLayer::initial()],
            active_shadow_index: 0,
            background_layers: Vec::new(),
            active_background_index: None,
            box_properties: BoxProperties::default(),
        }
    }

    /// Restores the exact configuration of [`Document::new`].
    pub fn reset(&mut self) {
        log::debug!("Resetting document");
        *self = Self::new();
    }

    pub fn shadow_layers(&self) -> &[ShadowLayer] {
        &self.shadow_layers
    }

    pub fn active_shadow_index(&self) -> usize {
        self.active_shadow_index
    }

    pub fn active_shadow(&self) -> &ShadowLayer {
        &self.shadow_layers[self.active_shadow_index]
    }

    pub fn background_layers(&self) -> &[BackgroundLayer] {
        &self.background_layers
    }

    pub fn active_background_index(&self) -> Option<usize> {
        self.active_background_index
    }

    /// The selected background layer, if the selection points at one.
    pub fn active_background(&self) -> Option<&BackgroundLayer> {
        self.active_background_index
            .and_then(|index| self.background_layers.get(index))
    }

    pub fn box_properties(&self) -> &BoxProperties {
        &self.box_properties
    }

    // Shadow layers

    /// Appends a default shadow layer and makes it active.
    pub fn add_shadow_layer(&mut self) {
        self.shadow_layers.push(ShadowLayer::default());
        self.active_shadow_index = self.shadow_layers.len() - 1;
        log::debug!("Added shadow layer {}", self.active_shadow_index);
    }

    /// Removes the shadow layer at `index`. The last remaining layer is kept.
    pub fn remove_shadow_layer(&mut self, index: usize) {
        if self.shadow_layers.len() <= 1 {
            log::warn!("Refusing to remove the only shadow layer");
            return;
        }
        if index >= self.shadow_layers.len() {
            log::warn!("No shadow layer at index {}", index);
            return;
        }

        self.shadow_layers.remove(index);
        if self.active_shadow_index >= self.shadow_layers.len() {
            self.active_shadow_index = self.shadow_layers.len() - 1;
        }
        log::debug!(
            "Removed shadow layer {}, active is now {}",
            index,
            self.active_shadow_index
        );
    }

    /// Selects the shadow layer at `index`; out-of-range indices are ignored.
    pub fn select_shadow_layer(&mut self, index: usize) {
        if index < self.shadow_layers.len() {
            self.active_shadow_index = index;
        }
    }

    // Background layers

    /// Appends a background layer of `kind` and makes it active.
    pub fn add_background_layer(&mut self, kind: GradientKind) {
        self.background_layers.push(BackgroundLayer::new(kind));
        let index = self.background_layers.len() - 1;
        self.active_background_index = Some(index);
        log::debug!("Added {:?} background layer {}", kind, index);
    }

    /// Removes the background layer at `index`.
    ///
    /// Any number of layers may be removed, down to zero. Afterwards the
    /// selection moves to the first layer, whichever one was removed, or to
    /// nothing when the list is empty.
    pub fn remove_background_layer(&mut self, index: usize) {
        if index < self.background_layers.len() {
            self.background_layers.remove(index);
        }
        self.active_background_index = if self.background_layers.is_empty() {
            None
        } else {
            Some(0)
        };
        log::debug!(
            "Removed background layer {}, active is now {:?}",
            index,
            self.active_background_index
        );
    }

    /// Selects a background layer without bounds checking. An index past the
    /// end leaves [`Document::active_background`] resolving to `None`.
    pub fn select_background_layer(&mut self, index: Option<usize>) {
        self.active_background_index = index;
    }

    // Mutation

    /// Applies one edit to the box, the active shadow layer or the active
    /// background layer. Background edits without a resolvable active layer
    /// are ignored.
    pub fn apply(&mut self, update: Update) {
        log::debug!("Applying {:?}", update);
        match update {
            Update::Box(property) => self.apply_box(property),
            Update::Shadow(field) => self.apply_shadow(field),
            Update::Background(field) => self.apply_background(field),
        }
    }

    /// String-keyed form of [`Document::apply`], see [`Update::from_key`].
    /// A rejected key or value leaves the document untouched.
    pub fn update(&mut self, key: &str, value: serde_json::Value) -> Result<(), UpdateError> {
        let update = Update::from_key(key, value).inspect_err(|err| {
            log::warn!("Rejected update: {}", err);
        })?;
        self.apply(update);
        Ok(())
    }

    fn apply_box(&mut self, property: BoxProperty) {
        let props = &mut self.box_properties;
        match property {
            BoxProperty::BorderRadius(radius) => props.border_radius = radius,
            BoxProperty::BackgroundColor(color) => props.background_color = color,
            BoxProperty::CanvasColor(color) => props.canvas_color = color,
        }
    }

    fn apply_shadow(&mut self, field: ShadowField) {
        let layer = &mut self.shadow_layers[self.active_shadow_index];
        match field {
            ShadowField::Horizontal(value) => layer.horizontal = value,
            ShadowField::Vertical(value) => layer.vertical = value,
            ShadowField::Blur(value) => layer.blur = value,
            ShadowField::Spread(value) => layer.spread = value,
            ShadowField::Color(color) => layer.color = color,
            ShadowField::Opacity(value) => layer.opacity = value,
            ShadowField::Inset(value) => layer.inset = value,
        }
    }

    fn apply_background(&mut self, field: BackgroundField) {
        let Some(layer) = self
            .active_background_index
            .and_then(|index| self.background_layers.get_mut(index))
        else {
            log::debug!("No active background layer, ignoring {:?}", field);
            return;
        };

        match field {
            BackgroundField::Type(kind) => layer.kind = kind,
            BackgroundField::Angle(angle) => layer.angle = angle,
            BackgroundField::Shape(shape) => layer.shape = shape,
            BackgroundField::PosX(x) => layer.pos_x = x,
            BackgroundField::PosY(y) => layer.pos_y = y,
            BackgroundField::Size(size) => layer.size = size,
            BackgroundField::Stops(stops) => {
                if stops.len() < MIN_STOPS {
                    log::warn!(
                        "A gradient needs at least {} stops, got {}",
                        MIN_STOPS,
                        stops.len()
                    );
                    return;
                }
                layer.stops = stops;
            }
            BackgroundField::Opacity(opacity) => layer.opacity = opacity,
        }
    }

    // Read view

    /// The flattened view the UI reads its controls from.
    pub fn combined_state(&self) -> CombinedState<'_> {
        CombinedState::new(self)
    }
}
