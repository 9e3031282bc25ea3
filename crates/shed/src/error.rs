//! Error types for theme building and prop resolution.
//!
//! Two enums cover the whole crate:
//!
//! - [`ThemeError`]: raised while turning a [`ThemeConfig`](crate::ThemeConfig)
//!   into a [`Theme`](crate::Theme). These are configuration mistakes.
//! - [`ResolveError`]: raised while resolving shorthand props against a theme.
//!   These surface at render time and point at the offending prop.
//!
//! A falsy prop value is never an error; it resolves as a no-op.

use thiserror::Error;

/// Errors that can occur when building a theme from configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    /// The named modular scale does not exist.
    #[error("unknown modular scale '{name}', expected one of: {expected}")]
    UnknownScale { name: String, expected: String },

    /// The step count is not a non-negative integer.
    #[error("steps must be a non-negative integer, not {0}")]
    InvalidSteps(String),

    /// The sizes section is neither a scale name nor a mapping.
    #[error(
        "sizes must be a modular scale name (e.g. 'major second') or a mapping of step to length, not {0}"
    )]
    InvalidSizes(String),

    /// The fonts section is not a mapping of name to font-family string.
    #[error("fonts must be provided as a mapping of font name to css font-family string (e.g. {{ sans: 'sans-serif' }}), not {0}")]
    InvalidFonts(String),

    /// The colors section is not a mapping of name to color string.
    #[error("colors must be provided as a mapping of color name to css color string (e.g. {{ black: '#000000', cyan: 'cyan' }}), not {0}")]
    InvalidColors(String),

    /// The configuration text could not be parsed.
    #[error("failed to parse theme config: {0}")]
    Parse(String),
}

impl From<serde_yaml::Error> for ThemeError {
    fn from(err: serde_yaml::Error) -> Self {
        ThemeError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        ThemeError::Parse(err.to_string())
    }
}

/// Errors that can occur when resolving shorthand props.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// The value is neither a string nor a number.
    #[error("invalid value for the {prop} prop: expected a number or string, not {value} ({kind})")]
    InvalidValue {
        prop: &'static str,
        value: String,
        kind: &'static str,
    },

    /// The value is outside the prop's keyword vocabulary.
    #[error("invalid value for the {prop} prop: expected one of {expected}, not {value}")]
    UnrecognizedKeyword {
        prop: &'static str,
        expected: String,
        value: String,
    },

    /// No theme size matches the value.
    #[error("invalid value for the size prop, no theme size matches {value}")]
    NoSize { value: String },

    /// An alpha color refers to a color the theme does not define.
    #[error("theme has no color named '{name}' (from {value})")]
    UnknownColor { name: String, value: String },

    /// A theme color could not be parsed to apply an alpha channel.
    #[error("cannot apply alpha to theme color '{name}': unparseable color '{color}'")]
    UnparseableColor { name: String, color: String },

    /// Opacity parsed to an integer outside `[0, 1]`.
    #[error("invalid value for the opacity prop: expected a number between 0 and 1, or i/init/unset, not {value}")]
    InvalidOpacity { value: String },
}

/// Result type for resolution operations.
pub type Result<T, E = ResolveError> = std::result::Result<T, E>;
