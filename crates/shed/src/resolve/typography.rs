//! Letter-spacing and line-height.
//!
//! Both accept a few keywords and otherwise borrow a step from the size
//! scale with its unit removed, so `lh: 3` on the default theme gives
//! `1.265625` rather than `1.265625rem`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::keyword::unrecognized;
use crate::error::{ResolveError, Result};
use crate::theme::Theme;
use crate::value::{CssValue, Raw};

static UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(r?em|px|pc|ex|ch|ic|lh|rlh|vh|vw|vi|vb|vmin|vmax|mm|q|cm|in|pt)")
        .expect("unit pattern is valid")
});

/// Removes the first CSS unit from a length. Numbers are returned unchanged.
pub fn strip_unit(value: &CssValue) -> CssValue {
    match value {
        CssValue::Text(text) => CssValue::Text(UNIT.replace(text, "").into_owned()),
        CssValue::Number(_) => value.clone(),
    }
}

/// Looks up `z{raw}` and strips its unit. Empty and zero sizes don't count.
fn scale_step(raw: Raw<'_>, theme: &Theme) -> Option<CssValue> {
    theme
        .size(&format!("z{}", raw.text()))
        .filter(|size| size.is_truthy())
        .map(strip_unit)
}

pub(crate) fn letter_spacing(raw: Raw<'_>, theme: &Theme) -> Result<CssValue> {
    let keyword = match raw {
        Raw::Str("n") => Some("normal"),
        Raw::Str("t") => Some("-0.05em"),
        Raw::Str("l") => Some(".3em"),
        _ => None,
    };
    if let Some(keyword) = keyword {
        return Ok(CssValue::from(keyword));
    }
    scale_step(raw, theme)
        .ok_or_else(|| unrecognized("letter-spacing", "n, t, l".to_string(), raw))
}

pub(crate) fn line_height(raw: Raw<'_>, theme: &Theme) -> Result<CssValue> {
    let keyword = match raw {
        Raw::Str("d") => Some("1"),
        Raw::Str("n") => Some("normal"),
        Raw::Str("i") => Some("inherit"),
        Raw::Str("init") => Some("initial"),
        Raw::Str("t") => return fixed_step("z2", raw, theme),
        Raw::Str("l") => return fixed_step("z4", raw, theme),
        _ => None,
    };
    if let Some(keyword) = keyword {
        return Ok(CssValue::from(keyword));
    }
    scale_step(raw, theme).ok_or_else(|| {
        unrecognized(
            "line-height",
            "[scale value], d, t, l, n, i, init".to_string(),
            raw,
        )
    })
}

/// Tight and loose line-heights come from fixed scale steps.
fn fixed_step(token: &str, raw: Raw<'_>, theme: &Theme) -> Result<CssValue> {
    theme
        .size(token)
        .map(strip_unit)
        .ok_or_else(|| ResolveError::NoSize { value: raw.json() })
}
