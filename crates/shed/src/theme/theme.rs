//! The finalized theme and the builder that produces it.
//!
//! # Construction Methods
//!
//! ## Programmatic (Builder API)
//!
//! ```rust
//! use shed::{Theme, ThemeConfig};
//!
//! let theme = Theme::from_config(
//!     &ThemeConfig::new()
//!         .scale("major third")
//!         .steps(12)
//!         .color("red", "#ff0000"),
//! )
//! .unwrap();
//!
//! assert_eq!(theme.color("red"), Some("#ff0000"));
//! assert_eq!(theme.font("sans"), Some("sans-serif"));
//! ```
//!
//! ## From YAML
//!
//! ```rust
//! use shed::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! sizes:
//!   1: 4px
//!   2: 8px
//! colors:
//!   ink: "#111111"
//! "##).unwrap();
//!
//! assert_eq!(theme.size("z2").map(|s| s.to_string()), Some("8px".to_string()));
//! assert_eq!(theme.size("z0").map(|s| s.to_string()), Some("0".to_string()));
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::config::{
    SizesConfig, ThemeConfig, DEFAULT_COLORS, DEFAULT_FONTS, DEFAULT_SCALE, DEFAULT_STEPS,
};
use super::scale::ModularScale;
use crate::error::ThemeError;
use crate::value::CssValue;

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| {
    create_theme(&ThemeConfig::default()).expect("default theme configuration is valid")
});

/// Size, font and color tokens used to resolve shorthand props.
///
/// A theme is immutable once built. The `sizes` mapping always contains
/// `z0 = 0` and never contains `z.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    sizes: BTreeMap<String, CssValue>,
    fonts: BTreeMap<String, String>,
    colors: BTreeMap<String, String>,
}

impl Theme {
    /// Builds a theme from configuration. Same as [`create_theme`].
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        create_theme(config)
    }

    /// Builds a theme from YAML configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the YAML is malformed, a section has the
    /// wrong shape, or the scale name is unknown.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        create_theme(&ThemeConfig::from_yaml(yaml)?)
    }

    /// Builds a theme from JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        create_theme(&ThemeConfig::from_json(json)?)
    }

    /// The shared default theme, built on first use.
    pub fn default_ref() -> &'static Theme {
        &DEFAULT_THEME
    }

    /// Looks up a size token, e.g. `z2` or `z-.1`.
    pub fn size(&self, token: &str) -> Option<&CssValue> {
        self.sizes.get(token)
    }

    /// Looks up a font-family by token.
    pub fn font(&self, token: &str) -> Option<&str> {
        self.fonts.get(token).map(String::as_str)
    }

    /// Looks up a color by token.
    pub fn color(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(String::as_str)
    }

    pub fn sizes(&self) -> &BTreeMap<String, CssValue> {
        &self.sizes
    }

    pub fn fonts(&self) -> &BTreeMap<String, String> {
        &self.fonts
    }

    pub fn colors(&self) -> &BTreeMap<String, String> {
        &self.colors
    }
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME.clone()
    }
}

/// Builds a [`Theme`] from configuration.
///
/// Omitted sections take their value from [`ThemeConfig::default`].
///
/// # Errors
///
/// Returns [`ThemeError::UnknownScale`] when `sizes` names a scale that does
/// not exist.
pub fn create_theme(config: &ThemeConfig) -> Result<Theme, ThemeError> {
    let sizes = match &config.sizes {
        Some(SizesConfig::Scale(name)) => scale_sizes(name, config.steps)?,
        Some(SizesConfig::Explicit(explicit)) => explicit_sizes(explicit),
        None => scale_sizes(DEFAULT_SCALE, config.steps)?,
    };

    let fonts = config.fonts.clone().unwrap_or_else(|| {
        DEFAULT_FONTS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    });

    let colors = config.colors.clone().unwrap_or_else(|| {
        DEFAULT_COLORS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    });

    log::debug!(
        "built theme with {} sizes, {} fonts, {} colors",
        sizes.len(),
        fonts.len(),
        colors.len()
    );

    Ok(Theme {
        sizes,
        fonts,
        colors,
    })
}

fn scale_sizes(name: &str, steps: Option<u32>) -> Result<BTreeMap<String, CssValue>, ThemeError> {
    let steps = steps.unwrap_or(DEFAULT_STEPS);
    log::debug!("generating {} steps of the '{}' scale", steps, name);
    Ok(ModularScale::named(name)?.sizes(steps))
}

fn explicit_sizes(explicit: &BTreeMap<String, CssValue>) -> BTreeMap<String, CssValue> {
    let mut sizes: BTreeMap<String, CssValue> = explicit
        .iter()
        .map(|(step, size)| (format!("z{}", step), size.clone()))
        .collect();

    if !sizes.get("z0").is_some_and(CssValue::is_truthy) {
        sizes.insert("z0".to_string(), CssValue::Number(0.0));
    }
    // `.0` would shadow `0`
    sizes.remove("z.0");

    sizes
}
