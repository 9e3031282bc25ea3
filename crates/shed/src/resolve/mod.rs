//! Prop resolver: shorthand props in, style declarations out.
//!
//! [`resolve_style`] takes a flat map of shorthand props and a [`Theme`] and
//! produces a [`ResolvedStyle`] keyed by standard (camel-cased) property
//! names.
//!
//! ```rust
//! use shed::{resolve_style, ShorthandProps, Theme};
//!
//! let props = ShorthandProps::new()
//!     .set("mx", "a")
//!     .set("w", "1of2")
//!     .set("d", "f")
//!     .set("flxd", "c");
//!
//! let style = resolve_style(&props, &Theme::default()).unwrap();
//! assert_eq!(style.get("marginLeft").unwrap().to_string(), "auto");
//! assert_eq!(style.get("width").unwrap().to_string(), "50%");
//! assert_eq!(style.get("flexDirection").unwrap().to_string(), "column");
//! ```
//!
//! # Resolution order
//!
//! 1. Margin and padding shorthands, in the order the props were given.
//! 2. The single-property shorthands, in table order.
//! 3. Border-radius shorthands, in the order the props were given.
//! 4. `va` (vertical-align), then `pos` (position).
//!
//! A property set by a later step replaces the earlier value but keeps its
//! original place. So `pos: c` wins over `top: 2`, and `pos: r` wins over the
//! `position` set by `va: c`.
//!
//! # Raw fallback
//!
//! A single-property shorthand whose resolver produces nothing (or a falsy
//! value) keeps the raw prop value. `bg: "#fff"` is not a theme color, so
//! `backgroundColor` is `"#fff"`. Falsy props are never errors: they pass
//! through as given, and multi-property shorthands with a falsy value set
//! nothing.

mod keyword;
mod layout;
mod paint;
mod size;
mod spacing;
mod typography;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::theme::Theme;
use crate::value::{raw_to_css, validate, CssValue, Raw};
use keyword::Keywords;

pub use size::FRACTIONS;
pub use spacing::{FULL_BLEED, RADIUS, SPACING};
pub use typography::strip_unit;

pub(crate) type Declarations = Vec<(&'static str, CssValue)>;

/// Shorthand props as given by the caller, in insertion order.
///
/// Values are JSON values so that anything a caller might pass can be
/// represented; only strings and numbers resolve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShorthandProps {
    values: IndexMap<String, Value>,
}

impl ShorthandProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a prop, builder style.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a prop, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parses props from a JSON object.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parses props from a YAML mapping.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

impl<K, V> FromIterator<(K, V)> for ShorthandProps
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Style declarations keyed by property name.
///
/// Every single-property shorthand has an entry once any prop is given; an
/// entry is `None` when its shorthand was absent. Serializes as a JSON object
/// with `null` for those entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyle {
    properties: IndexMap<&'static str, Option<CssValue>>,
}

impl ResolvedStyle {
    /// Returns the value of a property, if it is set.
    pub fn get(&self, property: &str) -> Option<&CssValue> {
        self.properties.get(property).and_then(Option::as_ref)
    }

    /// Whether the property has a value.
    pub fn is_set(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Whether the property has an entry, set or not.
    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&CssValue>)> {
        self.properties.iter().map(|(k, v)| (*k, v.as_ref()))
    }

    /// Iterates only the properties that have a value.
    pub fn declared(&self) -> impl Iterator<Item = (&'static str, &CssValue)> {
        self.properties
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (*k, v)))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn insert(&mut self, property: &'static str, value: Option<CssValue>) {
        self.properties.insert(property, value);
    }

    fn declare(&mut self, declarations: Declarations) {
        for (property, value) in declarations {
            self.insert(property, Some(value));
        }
    }
}

/// How a single-property shorthand turns its value into CSS.
enum Rule {
    /// Used as given.
    Raw,
    Size,
    Color,
    Keywords(&'static Keywords),
    /// Theme font token. Unknown tokens set nothing.
    FontFamily,
    LetterSpacing,
    LineHeight,
    Opacity,
    FlexBasis,
}

struct Entry {
    shorthand: &'static str,
    property: &'static str,
    /// Prop name used in error messages. Keyword props use their table's.
    label: &'static str,
    rule: Rule,
}

impl Entry {
    fn label(&self) -> &'static str {
        match self.rule {
            Rule::Keywords(table) => table.prop,
            _ => self.label,
        }
    }
}

const fn entry(
    shorthand: &'static str,
    property: &'static str,
    label: &'static str,
    rule: Rule,
) -> Entry {
    Entry {
        shorthand,
        property,
        label,
        rule,
    }
}

const fn keywords(
    shorthand: &'static str,
    property: &'static str,
    table: &'static Keywords,
) -> Entry {
    entry(shorthand, property, "", Rule::Keywords(table))
}

static SINGLE: &[Entry] = &[
    entry("c", "color", "color", Rule::Color),
    entry("bg", "backgroundColor", "color", Rule::Color),
    entry("f", "fontSize", "size", Rule::Size),
    entry("fw", "fontWeight", "font-weight", Rule::Raw),
    keywords("fs", "fontStyle", &keyword::FONT_STYLE),
    entry("ff", "fontFamily", "font-family", Rule::FontFamily),
    entry("ls", "letterSpacing", "letter-spacing", Rule::LetterSpacing),
    entry("lh", "lineHeight", "line-height", Rule::LineHeight),
    keywords("tt", "textTransform", &keyword::TEXT_TRANSFORM),
    keywords("ta", "textAlign", &keyword::TEXT_ALIGN),
    keywords("td", "textDecoration", &keyword::TEXT_DECORATION),
    entry("tdc", "textDecorationColor", "color", Rule::Color),
    keywords("d", "display", &keyword::DISPLAY),
    entry("w", "width", "size", Rule::Size),
    entry("mw", "maxWidth", "size", Rule::Size),
    entry("h", "height", "size", Rule::Size),
    entry("op", "opacity", "opacity", Rule::Opacity),
    keywords("cur", "cursor", &keyword::CURSOR),
    entry("flxg", "flexGrow", "flex-grow", Rule::Raw),
    entry("flxs", "flexShrink", "flex-shrink", Rule::Raw),
    keywords("jc", "justifyContent", &keyword::JUSTIFY_CONTENT),
    keywords("ac", "alignContent", &keyword::ALIGN_CONTENT),
    keywords("ai", "alignItems", &keyword::ALIGN_ITEMS),
    keywords("as", "alignSelf", &keyword::ALIGN_SELF),
    keywords("flxw", "flexWrap", &keyword::FLEX_WRAP),
    keywords("flxd", "flexDirection", &keyword::FLEX_DIRECTION),
    entry("flxb", "flexBasis", "flex-basis", Rule::FlexBasis),
    keywords("fl", "float", &keyword::FLOAT),
    entry("top", "top", "size", Rule::Size),
    entry("bottom", "bottom", "size", Rule::Size),
    entry("right", "right", "size", Rule::Size),
    entry("left", "left", "size", Rule::Size),
    keywords("o", "overflow", &keyword::OVERFLOW),
    keywords("ox", "overflowX", &keyword::OVERFLOW),
    keywords("oy", "overflowY", &keyword::OVERFLOW),
    entry("zi", "zIndex", "z-index", Rule::Raw),
    keywords("ws", "whiteSpace", &keyword::WHITE_SPACE),
    keywords("lst", "listStyleType", &keyword::LIST_STYLE_TYPE),
];

/// Resolves shorthand props against a theme.
///
/// Resolution is pure: the same props and theme always give the same style.
/// An empty prop map resolves to an empty style.
///
/// # Errors
///
/// Returns the first [`ResolveError`](crate::ResolveError) met, in resolution
/// order: a value that is neither a string nor a number, a keyword outside a
/// prop's vocabulary, a size missing from the theme, or an alpha color the
/// theme cannot supply.
pub fn resolve_style(props: &ShorthandProps, theme: &Theme) -> Result<ResolvedStyle> {
    let mut style = ResolvedStyle::default();
    if props.is_empty() {
        return Ok(style);
    }

    for (key, value) in props.iter() {
        if let Some(properties) = spacing::lookup(SPACING, key) {
            if let Some(raw) = validate("margin / padding", value)? {
                let resolved = spacing::spacing_value(key, raw, theme)?;
                log::trace!("{}: {} -> {}", key, value, resolved);
                style.declare(spacing::expand(properties, resolved));
            }
        }
    }

    for entry in SINGLE {
        let resolved = match props.get(entry.shorthand) {
            Some(value) => resolve_single(entry, value, theme)?,
            None => None,
        };
        style.insert(entry.property, resolved);
    }

    for (key, value) in props.iter() {
        if let Some(properties) = spacing::lookup(RADIUS, key) {
            if let Some(raw) = validate("border-radius", value)? {
                let resolved = size::get_size(raw, theme)?;
                log::trace!("{}: {} -> {}", key, value, resolved);
                style.declare(spacing::expand(properties, resolved));
            }
        }
    }

    if let Some(value) = props.get("va") {
        if let Some(raw) = validate("vertical-align", value)? {
            style.declare(layout::vertical_align(raw)?);
        }
    }

    if let Some(value) = props.get("pos") {
        if let Some(raw) = validate("position", value)? {
            style.declare(layout::position(raw)?);
        }
    }

    Ok(style)
}

fn resolve_single(entry: &Entry, value: &Value, theme: &Theme) -> Result<Option<CssValue>> {
    let Some(raw) = validate(entry.label(), value)? else {
        return Ok(match entry.rule {
            Rule::FontFamily => None,
            _ => raw_to_css(value),
        });
    };

    let resolved = match entry.rule {
        Rule::Raw => None,
        Rule::Size => Some(size::get_size(raw, theme)?),
        Rule::Color => paint::get_color(raw, theme)?,
        Rule::Keywords(table) => Some(table.resolve(raw)?),
        Rule::FontFamily => {
            let font = theme.font(&raw.text()).map(CssValue::from);
            if font.is_none() {
                log::debug!("theme has no font named {}", raw.json());
            }
            return Ok(font);
        }
        Rule::LetterSpacing => Some(typography::letter_spacing(raw, theme)?),
        Rule::LineHeight => Some(typography::line_height(raw, theme)?),
        Rule::Opacity => Some(layout::opacity(raw)?),
        Rule::FlexBasis => Some(layout::flex_basis(raw, theme)?),
    };

    log::trace!(
        "{}: {} -> {}",
        entry.shorthand,
        value,
        resolved.as_ref().map_or_else(|| "(raw)".to_string(), ToString::to_string)
    );

    Ok(Some(or_raw(resolved, raw)))
}

fn or_raw(resolved: Option<CssValue>, raw: Raw<'_>) -> CssValue {
    match resolved {
        Some(value) if value.is_truthy() => value,
        _ => raw.to_css(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::theme::ThemeConfig;
    use serde_json::json;

    fn theme() -> Theme {
        Theme::from_config(
            &ThemeConfig::new()
                .color("red", "#ff0000")
                .color("black", "#000000")
                .font("sans", "Inter, sans-serif"),
        )
        .unwrap()
    }

    fn resolve(props: ShorthandProps) -> ResolvedStyle {
        resolve_style(&props, &theme()).unwrap()
    }

    #[test]
    fn test_empty_props_resolve_to_empty_style() {
        let style = resolve(ShorthandProps::new());
        assert!(style.is_empty());
    }

    #[test]
    fn test_every_single_property_has_an_entry() {
        let style = resolve(ShorthandProps::new().set("d", "b"));
        assert_eq!(style.len(), SINGLE.len());
        assert!(style.contains("color"));
        assert!(!style.is_set("color"));
        assert_eq!(style.declared().count(), 1);
    }

    #[test]
    fn test_margin_auto() {
        let style = resolve(ShorthandProps::new().set("m", "a"));
        assert_eq!(style.get("margin"), Some(&CssValue::from("auto")));
    }

    #[test]
    fn test_full_bleed_margin() {
        let style = resolve(ShorthandProps::new().set("mx", "r"));
        assert_eq!(style.get("marginLeft"), Some(&CssValue::from(FULL_BLEED)));
        assert_eq!(style.get("marginRight"), Some(&CssValue::from(FULL_BLEED)));
    }

    #[test]
    fn test_spacing_follows_prop_order() {
        let style = resolve(ShorthandProps::new().set("mx", 2).set("ml", "a"));
        assert_eq!(style.get("marginLeft"), Some(&CssValue::from("auto")));
        assert_eq!(style.get("marginRight"), Some(&CssValue::from("1.125rem")));

        let style = resolve(ShorthandProps::new().set("ml", "a").set("mx", 2));
        assert_eq!(style.get("marginLeft"), Some(&CssValue::from("1.125rem")));
    }

    #[test]
    fn test_color_and_raw_fallback() {
        let style = resolve(
            ShorthandProps::new()
                .set("c", "red")
                .set("bg", "#fafafa")
                .set("tdc", "red.5"),
        );
        assert_eq!(style.get("color"), Some(&CssValue::from("#ff0000")));
        assert_eq!(style.get("backgroundColor"), Some(&CssValue::from("#fafafa")));
        assert_eq!(
            style.get("textDecorationColor"),
            Some(&CssValue::from("rgba(255, 0, 0, .5)"))
        );
    }

    #[test]
    fn test_raw_props_pass_through() {
        let style = resolve(
            ShorthandProps::new()
                .set("fw", 600)
                .set("flxg", "1")
                .set("zi", 10),
        );
        assert_eq!(style.get("fontWeight"), Some(&CssValue::Number(600.0)));
        assert_eq!(style.get("flexGrow"), Some(&CssValue::from("1")));
        assert_eq!(style.get("zIndex"), Some(&CssValue::Number(10.0)));
    }

    #[test]
    fn test_font_family() {
        let style = resolve(ShorthandProps::new().set("ff", "sans"));
        assert_eq!(
            style.get("fontFamily"),
            Some(&CssValue::from("Inter, sans-serif"))
        );

        let style = resolve(ShorthandProps::new().set("ff", "Georgia"));
        assert!(style.contains("fontFamily"));
        assert!(!style.is_set("fontFamily"));
    }

    #[test]
    fn test_zero_size_keeps_raw_value() {
        let style = resolve(ShorthandProps::new().set("w", "0").set("m", "0"));
        assert_eq!(style.get("width"), Some(&CssValue::from("0")));
        assert_eq!(style.get("margin"), Some(&CssValue::Number(0.0)));
    }

    #[test]
    fn test_falsy_values_pass_through() {
        let style = resolve(
            ShorthandProps::new()
                .set("d", "")
                .set("w", 0)
                .set("c", Value::Null)
                .set("m", false)
                .set("pos", ""),
        );
        assert_eq!(style.get("display"), Some(&CssValue::from("")));
        assert_eq!(style.get("width"), Some(&CssValue::Number(0.0)));
        assert!(!style.is_set("color"));
        assert!(!style.contains("margin"));
        assert!(!style.contains("position"));
    }

    #[test]
    fn test_invalid_value_type() {
        let err = resolve_style(&ShorthandProps::new().set("d", json!(["b"])), &theme())
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidValue {
                prop: "display",
                kind: "array",
                ..
            }
        ));

        let err = resolve_style(&ShorthandProps::new().set("p", true), &theme()).unwrap_err();
        assert!(err.to_string().contains("margin / padding"));
    }

    #[test]
    fn test_position_overrides_sides() {
        let style = resolve(ShorthandProps::new().set("top", 2).set("pos", "c"));
        assert_eq!(style.get("top"), Some(&CssValue::from("0px")));
        assert_eq!(style.get("position"), Some(&CssValue::from("absolute")));
    }

    #[test]
    fn test_position_overrides_vertical_align() {
        let style = resolve(ShorthandProps::new().set("va", "c").set("pos", "a"));
        assert_eq!(style.get("position"), Some(&CssValue::from("absolute")));
        assert_eq!(style.get("top"), Some(&CssValue::from("50%")));
        assert_eq!(
            style.get("transform"),
            Some(&CssValue::from("translateY(-50%)"))
        );
    }

    #[test]
    fn test_overridden_key_keeps_its_place() {
        let style = resolve(ShorthandProps::new().set("top", 2).set("pos", "c"));
        let keys: Vec<_> = style.iter().map(|(k, _)| k).collect();
        let top = keys.iter().position(|k| *k == "top").unwrap();
        let left = keys.iter().position(|k| *k == "left").unwrap();
        assert!(top < left);
        assert_eq!(keys.last(), Some(&"position"));
    }

    #[test]
    fn test_border_radius() {
        let style = resolve(ShorthandProps::new().set("brt", 1).set("brx", 2));
        assert_eq!(style.get("borderTopLeftRadius"), Some(&CssValue::from("1rem")));
        assert_eq!(style.get("borderTopRightRadius"), Some(&CssValue::from("1rem")));
        assert!(!style.contains("borderRadius"));
    }

    #[test]
    fn test_axis_radius_is_checked_but_sets_nothing() {
        let style = resolve(ShorthandProps::new().set("brx", 2).set("bry", "a"));
        assert!(style.declared().all(|(p, _)| !p.contains("Radius")));
        let err = resolve_style(&ShorthandProps::new().set("brx", "nope"), &theme()).unwrap_err();
        assert!(matches!(err, ResolveError::NoSize { .. }));
        let err = resolve_style(&ShorthandProps::new().set("bry", json!([1])), &theme())
            .unwrap_err();
        assert!(matches!(err, ResolveError::InvalidValue { prop: "border-radius", .. }));
    }

    #[test]
    fn test_first_error_wins() {
        let err = resolve_style(
            &ShorthandProps::new().set("d", "zz").set("m", "nope"),
            &theme(),
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::NoSize { .. }));
    }

    #[test]
    fn test_props_from_json_keep_order() {
        let props = ShorthandProps::from_json(r#"{"pl": 1, "p": 2, "c": "red"}"#).unwrap();
        let keys: Vec<_> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["pl", "p", "c"]);
    }

    #[test]
    fn test_props_from_yaml() {
        let props = ShorthandProps::from_yaml("m: a\nop: 0.5\n").unwrap();
        let style = resolve(props);
        assert_eq!(style.get("margin"), Some(&CssValue::from("auto")));
        assert_eq!(style.get("opacity"), Some(&CssValue::Number(0.5)));
    }

    #[test]
    fn test_style_serializes_nulls() {
        let style = resolve(ShorthandProps::new().set("d", "f"));
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["display"], "flex");
        assert!(json["color"].is_null());
    }

    #[test]
    fn test_props_from_iterator() {
        let props: ShorthandProps = [("m", "a"), ("d", "b")].into_iter().collect();
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("d"), Some(&json!("b")));
    }
}
