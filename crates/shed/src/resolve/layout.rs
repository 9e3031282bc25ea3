//! Flex-basis, opacity, position and vertical-align.

use super::keyword::{unrecognized, Keywords, Unknown, FLEX_BASIS};
use super::size::get_size;
use super::Declarations;
use crate::error::{ResolveError, Result};
use crate::theme::Theme;
use crate::value::{parse_int, CssValue, Raw};

/// `c` on `pos` is checked before lookup; its entry here only keeps it in the
/// list of accepted codes.
static POSITION: Keywords = Keywords {
    prop: "position",
    entries: &[
        ("a", "absolute"),
        ("r", "relative"),
        ("f", "fixed"),
        ("s", "static"),
        ("stick", "sticky"),
        ("c", "absolute"),
        ("i", "inherit"),
        ("init", "initial"),
    ],
    unknown: Unknown::Reject,
};

static VERTICAL_ALIGN: Keywords = Keywords {
    prop: "vertical-align",
    entries: &[
        ("t", "top"),
        ("b", "bottom"),
        ("m", "middle"),
        ("bl", "baseline"),
        ("i", "inherit"),
        ("init", "initial"),
    ],
    unknown: Unknown::Reject,
};

/// Resolves `flxb`.
///
/// Only the keywords in [`FLEX_BASIS`] resolve. Any other value is still run
/// through the size scale, so an unknown step reports a size error, but a
/// known step is rejected all the same.
pub(crate) fn flex_basis(raw: Raw<'_>, theme: &Theme) -> Result<CssValue> {
    if let Some(keyword) = FLEX_BASIS.lookup(raw) {
        return Ok(CssValue::from(keyword));
    }
    get_size(raw, theme)?;
    Err(unrecognized(
        FLEX_BASIS.prop,
        format!("[scale value], {}", FLEX_BASIS.codes()),
        raw,
    ))
}

/// Resolves `op`.
///
/// The value is checked on its integer part only: `2` and `-1` are rejected,
/// while `0.5`, `1.9` and keywords like `init` pass through as given.
pub(crate) fn opacity(raw: Raw<'_>) -> Result<CssValue> {
    let integer = match raw {
        Raw::Num(n) if n.is_finite() => Some(n.trunc() as i64),
        Raw::Num(_) => None,
        Raw::Str(s) => parse_int(s),
    };
    match integer {
        Some(i) if !(0..=1).contains(&i) => Err(ResolveError::InvalidOpacity { value: raw.json() }),
        _ => Ok(raw.to_css()),
    }
}

/// Resolves `pos`. `c` covers the containing block.
pub(crate) fn position(raw: Raw<'_>) -> Result<Declarations> {
    if raw.is("c") {
        return Ok(vec![
            ("position", CssValue::from("absolute")),
            ("top", CssValue::from("0px")),
            ("right", CssValue::from("0px")),
            ("bottom", CssValue::from("0px")),
            ("left", CssValue::from("0px")),
        ]);
    }
    Ok(vec![("position", POSITION.resolve(raw)?)])
}

/// Resolves `va`. `c` centers vertically with a transform instead.
pub(crate) fn vertical_align(raw: Raw<'_>) -> Result<Declarations> {
    if raw.is("c") {
        return Ok(vec![
            ("position", CssValue::from("relative")),
            ("top", CssValue::from("50%")),
            ("transform", CssValue::from("translateY(-50%)")),
        ]);
    }
    match VERTICAL_ALIGN.lookup(raw) {
        Some(keyword) => Ok(vec![("verticalAlign", CssValue::from(keyword))]),
        None => Err(unrecognized(
            VERTICAL_ALIGN.prop,
            "t, b, m, bl, c, i, init".to_string(),
            raw,
        )),
    }
}
