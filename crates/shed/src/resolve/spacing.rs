//! Margin, padding and border-radius shorthands.
//!
//! These expand one shorthand into one or more longhand properties that all
//! share the resolved value: `mx: 2` sets both `marginLeft` and `marginRight`.

use super::size::get_size;
use super::Declarations;
use crate::error::Result;
use crate::theme::Theme;
use crate::value::{CssValue, Raw};

type Expansion = (&'static str, &'static [&'static str]);

/// Margin and padding shorthands, in the order they are recognized.
pub const SPACING: &[Expansion] = &[
    ("m", &["margin"]),
    ("mx", &["marginLeft", "marginRight"]),
    ("my", &["marginTop", "marginBottom"]),
    ("mt", &["marginTop"]),
    ("mr", &["marginRight"]),
    ("mb", &["marginBottom"]),
    ("ml", &["marginLeft"]),
    ("p", &["padding"]),
    ("px", &["paddingLeft", "paddingRight"]),
    ("py", &["paddingTop", "paddingBottom"]),
    ("pt", &["paddingTop"]),
    ("pr", &["paddingRight"]),
    ("pb", &["paddingBottom"]),
    ("pl", &["paddingLeft"]),
];

/// Border-radius shorthands. `brx` and `bry` are checked like the others but
/// set nothing.
pub const RADIUS: &[Expansion] = &[
    ("br", &["borderRadius"]),
    ("brl", &["borderTopLeftRadius", "borderBottomLeftRadius"]),
    ("brr", &["borderTopRightRadius", "borderBottomRightRadius"]),
    ("brt", &["borderTopLeftRadius", "borderTopRightRadius"]),
    ("brb", &["borderBottomLeftRadius", "borderBottomRightRadius"]),
    ("brtr", &["borderTopRightRadius"]),
    ("brtl", &["borderTopLeftRadius"]),
    ("brbr", &["borderBottomRightRadius"]),
    ("brbl", &["borderBottomLeftRadius"]),
    ("brx", &[]),
    ("bry", &[]),
];

/// Full-bleed margin for `mx: r`.
pub const FULL_BLEED: &str = "calc(-50vw + 50%)";

pub(crate) fn lookup(table: &'static [Expansion], key: &str) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(shorthand, _)| *shorthand == key)
        .map(|(_, properties)| *properties)
}

/// Resolves a margin or padding value for `key`.
///
/// `a` is `auto` everywhere. `r` is the full-bleed margin on `mx` and is
/// left as the literal `r` on every other key.
pub(crate) fn spacing_value(key: &str, raw: Raw<'_>, theme: &Theme) -> Result<CssValue> {
    if raw.is("a") {
        Ok(CssValue::from("auto"))
    } else if raw.is("r") {
        if key == "mx" {
            Ok(CssValue::from(FULL_BLEED))
        } else {
            Ok(raw.to_css())
        }
    } else {
        get_size(raw, theme)
    }
}

pub(crate) fn expand(properties: &'static [&'static str], value: CssValue) -> Declarations {
    properties.iter().map(|p| (*p, value.clone())).collect()
}
