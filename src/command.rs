use crate::layer::{ColorStop, GradientKind, RadialShape, RadialSize};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use crate::error::UpdateError;

/// Key prefix that routes an update to the active background layer.
pub const BACKGROUND_KEY_PREFIX: &str = "bgLayer";

/// A scalar property of the preview box itself.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxProperty {
    BorderRadius(u32),
    BackgroundColor(String),
    CanvasColor(String),
}

/// A field of whichever shadow layer is active.
#[derive(Debug, Clone, PartialEq)]
pub enum ShadowField {
    Horizontal(i32),
    Vertical(i32),
    Blur(u32),
    Spread(i32),
    Color(String),
    /// Already normalized to 0.0 ..= 1.0
    Opacity(f64),
    Inset(bool),
}

/// A field of whichever background layer is active.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundField {
    Type(GradientKind),
    Angle(u32),
    Shape(RadialShape),
    PosX(u32),
    PosY(u32),
    Size(RadialSize),
    /// Replaces the whole stop list
    Stops(Vec<ColorStop>),
    Opacity(f64),
}

/// A single edit of the document, routed by what it targets.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    Box(BoxProperty),
    Shadow(ShadowField),
    Background(BackgroundField),
}

impl Update {
    /// Resolves a string-keyed edit.
    ///
    /// `borderRadius`, `backgroundColor` and `canvasColor` target the box.
    /// Keys starting with `bgLayer` target the active background layer, the
    /// field name being the remainder with its first letter lowercased
    /// (`bgLayerPosX` is `posX`). Every other key names a shadow field.
    /// Values must already be in model units: integers for px/degrees/percent
    /// fields and a 0..=1 float for opacity.
    pub fn from_key(key: &str, value: Value) -> Result<Self, UpdateError> {
        match key {
            "borderRadius" => Ok(Update::Box(BoxProperty::BorderRadius(unsigned(key, &value)?))),
            "backgroundColor" => Ok(Update::Box(BoxProperty::BackgroundColor(string(key, &value)?))),
            "canvasColor" => Ok(Update::Box(BoxProperty::CanvasColor(string(key, &value)?))),
            _ => match key.strip_prefix(BACKGROUND_KEY_PREFIX) {
                Some(rest) => {
                    let field = lowercase_first(rest);
                    background_field(key, &field, value).map(Update::Background)
                }
                None => shadow_field(key, value).map(Update::Shadow),
            },
        }
    }
}

fn shadow_field(key: &str, value: Value) -> Result<ShadowField, UpdateError> {
    let field = match key {
        "horizontal" => ShadowField::Horizontal(signed(key, &value)?),
        "vertical" => ShadowField::Vertical(signed(key, &value)?),
        "blur" => ShadowField::Blur(unsigned(key, &value)?),
        "spread" => ShadowField::Spread(signed(key, &value)?),
        "color" => ShadowField::Color(string(key, &value)?),
        "opacity" => ShadowField::Opacity(unit_interval(key, &value)?),
        "inset" => ShadowField::Inset(
            value.as_bool().ok_or_else(|| invalid(key, "a boolean"))?,
        ),
        _ => return Err(UpdateError::UnknownKey(key.to_string())),
    };
    Ok(field)
}

fn background_field(key: &str, field: &str, value: Value) -> Result<BackgroundField, UpdateError> {
    let field = match field {
        "type" => BackgroundField::Type(typed(key, value, "\"linear\" or \"radial\"")?),
        "angle" => BackgroundField::Angle(unsigned(key, &value)?),
        "shape" => BackgroundField::Shape(typed(key, value, "\"circle\" or \"ellipse\"")?),
        "posX" => BackgroundField::PosX(unsigned(key, &value)?),
        "posY" => BackgroundField::PosY(unsigned(key, &value)?),
        "size" => BackgroundField::Size(typed(key, value, "a radial extent keyword")?),
        "stops" => BackgroundField::Stops(typed(key, value, "a list of {color, position} stops")?),
        "opacity" => BackgroundField::Opacity(unit_interval(key, &value)?),
        _ => return Err(UpdateError::UnknownKey(key.to_string())),
    };
    Ok(field)
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn invalid(key: &str, expected: &'static str) -> UpdateError {
    UpdateError::InvalidValue {
        key: key.to_string(),
        expected,
    }
}

fn signed(key: &str, value: &Value) -> Result<i32, UpdateError> {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| invalid(key, "an integer"))
}

fn unsigned(key: &str, value: &Value) -> Result<u32, UpdateError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| invalid(key, "a non-negative integer"))
}

fn unit_interval(key: &str, value: &Value) -> Result<f64, UpdateError> {
    value
        .as_f64()
        .filter(|n| (0.0..=1.0).contains(n))
        .ok_or_else(|| invalid(key, "a number between 0 and 1"))
}

fn string(key: &str, value: &Value) -> Result<String, UpdateError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(key, "a string"))
}

fn typed<T: DeserializeOwned>(key: &str, value: Value, expected: &'static str) -> Result<T, UpdateError> {
    serde_json::from_value(value).map_err(|_| invalid(key, expected))
}
