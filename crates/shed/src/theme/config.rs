//! Theme configuration: the input to [`create_theme`](super::create_theme).
//!
//! Every section is optional. A section that is left out falls back to the
//! matching part of [`ThemeConfig::default`], which is the default theme
//! expressed as ordinary configuration.
//!
//! ```yaml
//! sizes: major third      # a scale name, or a mapping of step -> length
//! steps: 12
//! colors:
//!   red: "#ff0000"
//!   ink: rgb(20, 20, 30)
//! fonts:
//!   sans: "Inter, sans-serif"
//! ```

use std::collections::BTreeMap;

use serde_yaml::Value;

use crate::error::ThemeError;
use crate::value::{format_number, CssValue};

/// Scale used when the sizes section is omitted.
pub const DEFAULT_SCALE: &str = "major second";

/// Step count used when `steps` is omitted.
pub const DEFAULT_STEPS: u32 = 20;

/// Colors used when the colors section is omitted.
pub const DEFAULT_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("cyan", "cyan"),
    ("magenta", "magenta"),
    ("yellow", "yellow"),
];

/// Fonts used when the fonts section is omitted.
pub const DEFAULT_FONTS: &[(&str, &str)] = &[
    ("sans", "sans-serif"),
    ("serif", "serif"),
    ("mono", "monospace"),
];

/// Where a theme's sizes come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SizesConfig {
    /// Generate sizes from a named modular scale.
    Scale(String),
    /// Use these sizes; keys are step names without the `z` prefix.
    Explicit(BTreeMap<String, CssValue>),
}

/// User-supplied theme configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    pub sizes: Option<SizesConfig>,
    pub steps: Option<u32>,
    pub fonts: Option<BTreeMap<String, String>>,
    pub colors: Option<BTreeMap<String, String>>,
}

impl ThemeConfig {
    /// Creates an empty configuration. Every section falls back to the default.
    pub fn new() -> Self {
        Self {
            sizes: None,
            steps: None,
            fonts: None,
            colors: None,
        }
    }

    /// Uses the named modular scale for sizes.
    pub fn scale(mut self, name: impl Into<String>) -> Self {
        self.sizes = Some(SizesConfig::Scale(name.into()));
        self
    }

    /// Sets the step count for scale-generated sizes.
    pub fn steps(mut self, steps: u32) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Uses an explicit size mapping instead of a scale.
    pub fn sizes<K, V, I>(mut self, sizes: I) -> Self
    where
        K: Into<String>,
        V: Into<CssValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.sizes = Some(SizesConfig::Explicit(
            sizes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ));
        self
    }

    /// Adds a font, starting an empty fonts section if needed.
    pub fn font(mut self, name: impl Into<String>, family: impl Into<String>) -> Self {
        self.fonts
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), family.into());
        self
    }

    /// Adds a color, starting an empty colors section if needed.
    pub fn color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Replaces the fonts section.
    pub fn fonts<K, V, I>(mut self, fonts: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.fonts = Some(collect_strings(fonts));
        self
    }

    /// Replaces the colors section.
    pub fn colors<K, V, I>(mut self, colors: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.colors = Some(collect_strings(colors));
        self
    }

    /// Parses configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] for malformed YAML, or the section error
    /// for a section with the wrong shape.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(&value)
    }

    /// Parses configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let json: serde_json::Value = serde_json::from_str(json)?;
        let value = serde_yaml::to_value(json)?;
        Self::from_value(&value)
    }

    /// Reads configuration from an already parsed YAML value.
    pub fn from_value(value: &Value) -> Result<Self, ThemeError> {
        let map = match value {
            Value::Null => return Ok(Self::new()),
            Value::Mapping(map) => map,
            other => {
                return Err(ThemeError::Parse(format!(
                    "theme config must be a mapping, not {}",
                    describe(other)
                )))
            }
        };

        let mut config = Self::new();
        for (key, section) in map {
            match key.as_str() {
                Some("sizes") => config.sizes = parse_sizes(section)?,
                Some("steps") => config.steps = parse_steps(section)?,
                Some("fonts") => {
                    config.fonts = parse_string_map(section).map_err(ThemeError::InvalidFonts)?
                }
                Some("colors") => {
                    config.colors =
                        parse_string_map(section).map_err(ThemeError::InvalidColors)?
                }
                _ => log::debug!("ignoring unknown theme config key {}", describe(key)),
            }
        }
        Ok(config)
    }
}

impl Default for ThemeConfig {
    /// The default theme as configuration.
    fn default() -> Self {
        Self::new()
            .scale(DEFAULT_SCALE)
            .steps(DEFAULT_STEPS)
            .colors(DEFAULT_COLORS.iter().copied())
            .fonts(DEFAULT_FONTS.iter().copied())
    }
}

fn collect_strings<K, V, I>(items: I) -> BTreeMap<String, String>
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    items
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

fn describe(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
}

/// Stringifies a mapping key; numeric keys print like numbers (`0.5`, `1`).
fn key_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_f64().map(format_number),
        _ => None,
    }
}

fn parse_sizes(value: &Value) -> Result<Option<SizesConfig>, ThemeError> {
    match value {
        Value::Null => Ok(None),
        Value::String(name) => Ok(Some(SizesConfig::Scale(name.clone()))),
        Value::Mapping(map) => {
            let mut sizes = BTreeMap::new();
            for (key, size) in map {
                let key = key_string(key).ok_or_else(|| ThemeError::InvalidSizes(describe(key)))?;
                let size = match size {
                    Value::String(s) => CssValue::Text(s.clone()),
                    Value::Number(n) => n
                        .as_f64()
                        .map(CssValue::Number)
                        .ok_or_else(|| ThemeError::InvalidSizes(describe(size)))?,
                    other => return Err(ThemeError::InvalidSizes(describe(other))),
                };
                sizes.insert(key, size);
            }
            Ok(Some(SizesConfig::Explicit(sizes)))
        }
        other => Err(ThemeError::InvalidSizes(describe(other))),
    }
}

fn parse_steps(value: &Value) -> Result<Option<u32>, ThemeError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| ThemeError::InvalidSteps(n.to_string())),
        other => Err(ThemeError::InvalidSteps(describe(other))),
    }
}

fn parse_string_map(value: &Value) -> Result<Option<BTreeMap<String, String>>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Mapping(map) => {
            let mut out = BTreeMap::new();
            for (key, entry) in map {
                let key = key_string(key).ok_or_else(|| describe(key))?;
                let entry = entry.as_str().ok_or_else(|| describe(entry))?;
                out.insert(key, entry.to_string());
            }
            Ok(Some(out))
        }
        other => Err(describe(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(
            config.sizes,
            Some(SizesConfig::Scale("major second".to_string()))
        );
        assert_eq!(config.steps, Some(20));
        let colors = config.colors.unwrap();
        assert_eq!(colors["black"], "#000000");
        assert_eq!(colors.len(), 5);
        let fonts = config.fonts.unwrap();
        assert_eq!(fonts["mono"], "monospace");
    }

    #[test]
    fn test_new_is_empty() {
        let config = ThemeConfig::new();
        assert!(config.sizes.is_none());
        assert!(config.steps.is_none());
        assert!(config.fonts.is_none());
        assert!(config.colors.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ThemeConfig::new()
            .scale("golden")
            .steps(8)
            .color("red", "#ff0000")
            .font("sans", "Inter");
        assert_eq!(config.sizes, Some(SizesConfig::Scale("golden".into())));
        assert_eq!(config.steps, Some(8));
        assert_eq!(config.colors.unwrap()["red"], "#ff0000");
        assert_eq!(config.fonts.unwrap()["sans"], "Inter");
    }

    #[test]
    fn test_from_yaml_scale() {
        let config = ThemeConfig::from_yaml(
            r##"
sizes: perfect fifth
steps: 10
colors:
  red: "#ff0000"
"##,
        )
        .unwrap();
        assert_eq!(
            config.sizes,
            Some(SizesConfig::Scale("perfect fifth".into()))
        );
        assert_eq!(config.steps, Some(10));
        assert_eq!(config.colors.unwrap()["red"], "#ff0000");
        assert!(config.fonts.is_none());
    }

    #[test]
    fn test_from_yaml_explicit_sizes_numeric_keys() {
        let config = ThemeConfig::from_yaml(
            r#"
sizes:
  1: 1rem
  2: 2rem
  0.5: 0.5rem
"#,
        )
        .unwrap();
        match config.sizes {
            Some(SizesConfig::Explicit(sizes)) => {
                assert_eq!(sizes["1"], CssValue::from("1rem"));
                assert_eq!(sizes["0.5"], CssValue::from("0.5rem"));
            }
            other => panic!("expected explicit sizes, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_fonts_not_a_mapping() {
        let err = ThemeConfig::from_yaml("fonts: arial").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidFonts(_)));
    }

    #[test]
    fn test_from_yaml_colors_not_a_mapping() {
        let err = ThemeConfig::from_yaml("colors: [red, blue]").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColors(_)));
    }

    #[test]
    fn test_from_yaml_colors_reports_bad_entry() {
        let err = ThemeConfig::from_yaml("colors:\n  red: \"#f00\"\n  blue: [0, 0, 255]\n")
            .unwrap_err();
        match err {
            ThemeError::InvalidColors(found) => assert_eq!(found, "[0,0,255]"),
            other => panic!("expected InvalidColors, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_bad_steps() {
        let err = ThemeConfig::from_yaml("steps: -3").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidSteps(_)));
    }

    #[test]
    fn test_from_yaml_bad_sizes() {
        let err = ThemeConfig::from_yaml("sizes: true").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidSizes(_)));
    }

    #[test]
    fn test_from_yaml_empty_document() {
        assert_eq!(ThemeConfig::from_yaml("").unwrap(), ThemeConfig::new());
    }

    #[test]
    fn test_from_json() {
        let config =
            ThemeConfig::from_json(r##"{"colors": {"red": "#f00"}, "steps": 4}"##).unwrap();
        assert_eq!(config.steps, Some(4));
        assert_eq!(config.colors.unwrap()["red"], "#f00");
    }

    #[test]
    fn test_from_json_malformed() {
        let err = ThemeConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }
}
