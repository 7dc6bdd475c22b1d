//! Conversions between hex color strings and the color syntaxes the
//! generators emit.
//!
//! Nothing in here fails loudly. Input that does not look like a 3 or 6 digit
//! hex color degrades to black, keeping whatever alpha the caller asked for.

/// An opaque RGB triple parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Hex digits of a color in the form the Flutter literal needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorComponents {
    /// Six uppercase hex digits, no leading `#`.
    pub hex: String,
}

/// Strips an optional leading `#` and expands `abc` into `aabbcc`.
/// Anything that is not exactly three hex digits is returned untouched.
fn expand_shorthand(hex: &str) -> String {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    }
}

/// Parses `#rgb`, `rgb`, `#rrggbb` or `rrggbb` (case-insensitive).
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = expand_shorthand(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Formats `hex` as a CSS `rgba(...)` color with the given alpha.
///
/// Unparseable input yields `rgba(0,0,0,<alpha>)`. The fallback is written
/// without spaces, exactly as the editor has always emitted it.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    match hex_to_rgb(hex) {
        Some(Rgb { r, g, b }) => format!("rgba({r}, {g}, {b}, {alpha})"),
        None => format!("rgba(0,0,0,{alpha})"),
    }
}

/// Normalizes a hex color to six uppercase digits for `Color(0xFF......)`.
///
/// Only the leading `#` is stripped and shorthand expanded; the rest of the
/// string is uppercased as given. Opacity is never encoded here, callers pass
/// it separately.
pub fn hex_to_color_components(hex: &str) -> ColorComponents {
    ColorComponents {
        hex: expand_shorthand(hex).to_uppercase(),
    }
}

/// Lowercase `#rrggbb` for a color picked in the UI.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Reverse conversion from a CSS `rgba(...)` string.
///
/// Not implemented: always answers black. Nothing in the editor reads CSS
/// back into the model, so this only exists to keep the codec surface
/// complete.
pub fn rgba_to_hex(_rgba: &str) -> String {
    "#000000".to_string()
}
