use serde::{Deserialize, Serialize};
use std::fmt;

/// Opacity of the shadow a fresh (or freshly reset) document starts with.
pub const INITIAL_SHADOW_OPACITY: f64 = 0.2;

/// Opacity of every shadow layer added after the first.
pub const NEW_SHADOW_OPACITY: f64 = 0.5;

/// A background layer never has fewer stops than this.
pub const MIN_STOPS: usize = 2;

/// Color given to a stop appended from the stop editor.
pub const ADDED_STOP_COLOR: &str = "#888888";

/// One drop shadow, contributing one comma-separated term to `box-shadow`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowLayer {
    /// Horizontal offset in px
    pub horizontal: i32,
    /// Vertical offset in px
    pub vertical: i32,
    /// Blur radius in px
    pub blur: u32,
    /// Spread radius in px
    pub spread: i32,
    /// Hex color, with or without `#`
    pub color: String,
    /// 0.0 ..= 1.0
    pub opacity: f64,
    pub inset: bool,
}

impl Default for ShadowLayer {
    fn default() -> Self {
        Self {
            horizontal: 5,
            vertical: 5,
            blur: 10,
            spread: 3,
            color: "#000000".to_string(),
            opacity: NEW_SHADOW_OPACITY,
            inset: false,
        }
    }
}

impl ShadowLayer {
    /// The layer a new or reset document starts with: the defaults, but fainter.
    pub fn initial() -> Self {
        Self {
            opacity: INITIAL_SHADOW_OPACITY,
            ..Self::default()
        }
    }
}

/// A (color, position) pair along a gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: String,
    /// Percentage, 0 ..= 100
    pub position: u32,
}

impl ColorStop {
    pub fn new(color: &str, position: u32) -> Self {
        Self {
            color: color.to_string(),
            position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

impl GradientKind {
    pub const ALL: [GradientKind; 2] = [GradientKind::Linear, GradientKind::Radial];

    pub fn label(&self) -> &'static str {
        match self {
            GradientKind::Linear => "Linear",
            GradientKind::Radial => "Radial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadialShape {
    #[default]
    Circle,
    Ellipse,
}

impl RadialShape {
    pub const ALL: [RadialShape; 2] = [RadialShape::Circle, RadialShape::Ellipse];

    pub fn as_css(&self) -> &'static str {
        match self {
            RadialShape::Circle => "circle",
            RadialShape::Ellipse => "ellipse",
        }
    }
}

/// CSS extent keyword of a radial gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadialSize {
    #[default]
    FarthestCorner,
    ClosestSide,
    ClosestCorner,
    FarthestSide,
}

impl RadialSize {
    pub const ALL: [RadialSize; 4] = [
        RadialSize::FarthestCorner,
        RadialSize::ClosestSide,
        RadialSize::ClosestCorner,
        RadialSize::FarthestSide,
    ];

    pub fn as_css(&self) -> &'static str {
        match self {
            RadialSize::FarthestCorner => "farthest-corner",
            RadialSize::ClosestSide => "closest-side",
            RadialSize::ClosestCorner => "closest-corner",
            RadialSize::FarthestSide => "farthest-side",
        }
    }

    /// `farthest-corner` is what browsers assume when the keyword is left out.
    pub fn is_browser_default(&self) -> bool {
        *self == RadialSize::FarthestCorner
    }
}

impl fmt::Display for RadialSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// One gradient image in the stacked `background` declaration.
///
/// Fields for both kinds are always present, so flipping `kind` keeps the
/// angle or the radial settings the user had before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundLayer {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    /// Degrees, 0 ..= 360 (linear only)
    pub angle: u32,
    pub shape: RadialShape,
    /// Center in percent, 0 ..= 100 (radial only)
    pub pos_x: u32,
    pub pos_y: u32,
    pub size: RadialSize,
    /// Storage order; generators read them through [`BackgroundLayer::sorted_stops`].
    pub stops: Vec<ColorStop>,
    /// Carried along for compatibility, no generator reads it.
    pub opacity: f64,
}

impl BackgroundLayer {
    pub fn new(kind: GradientKind) -> Self {
        Self {
            kind,
            angle: 90,
            shape: RadialShape::default(),
            pos_x: 50,
            pos_y: 50,
            size: RadialSize::default(),
            stops: vec![ColorStop::new("#ffffff", 0), ColorStop::new("#000000", 100)],
            opacity: 1.0,
        }
    }

    /// Stops ordered by position. Ties keep their storage order.
    pub fn sorted_stops(&self) -> Vec<&ColorStop> {
        let mut stops: Vec<&ColorStop> = self.stops.iter().collect();
        stops.sort_by_key(|stop| stop.position);
        stops
    }

    /// The stop list with one more stop appended at the end of the gradient.
    pub fn with_added_stop(&self) -> Vec<ColorStop> {
        let mut stops = self.stops.clone();
        stops.push(ColorStop::new(ADDED_STOP_COLOR, 100));
        stops
    }

    /// The stop list without the stop at `index`, or `None` when that would
    /// leave fewer than [`MIN_STOPS`] stops or the index does not exist.
    pub fn with_removed_stop(&self, index: usize) -> Option<Vec<ColorStop>> {
        if self.stops.len() <= MIN_STOPS || index >= self.stops.len() {
            return None;
        }
        let mut stops = self.stops.clone();
        stops.remove(index);
        Some(stops)
    }
}

impl Default for BackgroundLayer {
    fn default() -> Self {
        Self::new(GradientKind::default())
    }
}
