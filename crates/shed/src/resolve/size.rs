//! Size resolution against the theme's scale.
//!
//! A size value is one of:
//!
//! - a viewport length like `50vw` or `100vmin`, passed through untouched
//! - a fraction token, `1of3` or `1/3`, rendered as a percentage
//! - `full` (`100%`) or `a` (`auto`)
//! - a scale step (`2`, `.5`, `-1`, `0.5`), looked up as `z{step}`
//!
//! Only the fractions in [`FRACTIONS`] are recognized. Anything else is read
//! as a scale step from its leading number, so `5of7` resolves to `z5`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ResolveError, Result};
use crate::theme::Theme;
use crate::value::{format_number, parse_float, CssValue, Raw};

static VIEWPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+v(min|max|h|w)$").expect("viewport pattern is valid"));

/// Fractions accepted as `NofM` or `N/M`.
pub const FRACTIONS: &[(u32, u32)] = &[
    (1, 12),
    (1, 10),
    (1, 8),
    (1, 6),
    (2, 12),
    (1, 5),
    (2, 10),
    (1, 4),
    (2, 8),
    (3, 12),
    (3, 10),
    (1, 3),
    (2, 6),
    (4, 12),
    (3, 8),
    (2, 5),
    (4, 10),
    (5, 12),
    (1, 2),
    (2, 4),
    (3, 6),
    (4, 8),
    (5, 10),
    (6, 12),
    (7, 12),
    (3, 5),
    (6, 10),
    (5, 8),
    (2, 3),
    (4, 6),
    (8, 12),
    (7, 10),
    (3, 4),
    (6, 8),
    (9, 12),
    (4, 5),
    (8, 10),
    (9, 10),
    (11, 12),
];

/// Resolves a size value to CSS.
///
/// # Errors
///
/// Returns [`ResolveError::NoSize`] when the value normalizes to a step the
/// theme does not define, or whose size is empty.
pub(crate) fn get_size(raw: Raw<'_>, theme: &Theme) -> Result<CssValue> {
    if let Raw::Str(s) = raw {
        if VIEWPORT.is_match(s) {
            return Ok(raw.to_css());
        }
        if let Some(percent) = fraction(s) {
            return Ok(CssValue::Text(percent));
        }
        match s {
            "full" => return Ok(CssValue::from("100%")),
            "a" => return Ok(CssValue::from("auto")),
            _ => {}
        }
    }

    let token = format!("z{}", normalize(raw));
    match theme.size(&token) {
        Some(size) if !matches!(size, CssValue::Text(t) if t.is_empty()) => Ok(size.clone()),
        _ => Err(ResolveError::NoSize { value: raw.json() }),
    }
}

/// Renders a fraction token as a percentage, e.g. `1of4` as `25%`.
fn fraction(code: &str) -> Option<String> {
    let (n, d) = code.split_once("of").or_else(|| code.split_once('/'))?;
    let (num, den) = (canonical_u32(n)?, canonical_u32(d)?);
    FRACTIONS
        .iter()
        .any(|&(n, d)| n == num && d == den)
        .then(|| format!("{}%", format_number((num as f64 / den as f64) * 100.0)))
}

/// Parses digits with no sign or leading zero.
fn canonical_u32(s: &str) -> Option<u32> {
    let n: u32 = s.parse().ok()?;
    (n.to_string() == s).then_some(n)
}

/// Maps a step to its token suffix: `0.5` and `.5` both become `.5`, `2.0`
/// becomes `2`.
fn normalize(raw: Raw<'_>) -> String {
    let text = raw.text();
    let parsed = match raw {
        Raw::Num(n) => n,
        Raw::Str(s) => parse_float(s),
    };
    if parsed < 1.0 {
        text.replacen("0.", ".", 1)
    } else {
        format_number(parsed)
    }
}
