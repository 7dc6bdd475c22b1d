use thiserror::Error;

/// Errors produced while turning a `(key, value)` pair into an edit
#[derive(Debug, Error, PartialEq)]
pub enum UpdateError {
    /// The key names no box property, shadow field or background field
    #[error("unknown property key: {0}")]
    UnknownKey(String),

    /// The key is known but the value has the wrong type or range
    #[error("invalid value for {key}: expected {expected}")]
    InvalidValue { key: String, expected: &'static str },
}
