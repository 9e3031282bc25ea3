//! Color props: `c`, `bg` and `tdc`.
//!
//! A color value is a theme color token (`black`), one of the literals
//! `transparent`, `currentColor` or `inherit`, or a token with an alpha suffix
//! (`black.5`). Alpha colors are rendered as `rgba(...)` with the suffix kept
//! verbatim as the alpha channel.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::color::Rgba;
use crate::error::{ResolveError, Result};
use crate::theme::Theme;
use crate::value::{CssValue, Raw};

const LITERALS: &[&str] = &["transparent", "currentColor", "inherit"];

static ALPHA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.+)(\.[0-9])").expect("alpha color pattern is valid"));

/// Resolves a color value.
///
/// Returns `Ok(None)` for a token the theme does not define, so the raw value
/// is used as-is.
///
/// # Errors
///
/// An alpha color whose base token is missing from the theme, or whose theme
/// color cannot be parsed, is an error.
pub(crate) fn get_color(raw: Raw<'_>, theme: &Theme) -> Result<Option<CssValue>> {
    let text = raw.text();

    if let Some(literal) = LITERALS.iter().find(|l| raw.is(l)) {
        return Ok(Some(CssValue::from(*literal)));
    }

    if let Some(caps) = ALPHA.captures(&text) {
        let (name, alpha) = (&caps[1], &caps[2]);
        let base = theme.color(name).ok_or_else(|| ResolveError::UnknownColor {
            name: name.to_string(),
            value: raw.json(),
        })?;
        let rgba = Rgba::parse(base).map_err(|err| {
            log::debug!("theme color '{}' ({}) did not parse: {}", name, base, err);
            ResolveError::UnparseableColor {
                name: name.to_string(),
                color: base.to_string(),
            }
        })?;
        return Ok(Some(CssValue::Text(rgba.to_rgb_string(Some(alpha)))));
    }

    Ok(theme.color(&text).map(CssValue::from))
}
