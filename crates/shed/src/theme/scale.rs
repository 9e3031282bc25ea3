//! Modular scales and the size tokens generated from them.
//!
//! A modular scale is a geometric progression: step `n` is `ratio^n` (base 1).
//! A theme built from a scale exposes each step as a `rem` length under a
//! token following this convention:
//!
//! | token | value |
//! |-------|-------|
//! | `z0` | `0` |
//! | `z{i}` | `ms(i - 1)rem` for `i` in `1..steps` |
//! | `z.{n}` | `ms(-n)rem` for `n` in `1..=steps` |
//! | `z-{i}` | `-ms(i - 1)rem` for `i` in `0..steps` |
//! | `z-.{n}` | `-ms(-n)rem` for `n` in `1..=steps` |
//!
//! So with the default `major second` scale `z1` is `1rem`, `z2` is `1.125rem`
//! and `z.1` is `1.125^-1`, roughly `0.889rem`.

use std::collections::BTreeMap;

use crate::error::ThemeError;
use crate::value::{format_number, CssValue};

/// Named ratios, in ascending order.
pub const SCALES: &[(&str, f64)] = &[
    ("minor second", 16.0 / 15.0),
    ("major second", 9.0 / 8.0),
    ("minor third", 6.0 / 5.0),
    ("major third", 5.0 / 4.0),
    ("perfect fourth", 4.0 / 3.0),
    ("augmented fourth", std::f64::consts::SQRT_2),
    ("perfect fifth", 3.0 / 2.0),
    ("minor sixth", 8.0 / 5.0),
    ("golden", 1.61803398875),
    ("phi", 1.61803398875),
    ("major sixth", 5.0 / 3.0),
    ("minor seventh", 16.0 / 9.0),
    ("major seventh", 15.0 / 8.0),
    ("octave", 2.0),
    ("major tenth", 5.0 / 2.0),
    ("major eleventh", 8.0 / 3.0),
    ("major twelfth", 3.0),
    ("double octave", 4.0),
];

/// A geometric size progression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModularScale {
    ratio: f64,
}

impl ModularScale {
    /// Looks up a named scale such as `"major second"` or `"golden"`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownScale`] when the name is not in [`SCALES`].
    pub fn named(name: &str) -> Result<Self, ThemeError> {
        SCALES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, ratio)| Self { ratio: *ratio })
            .ok_or_else(|| ThemeError::UnknownScale {
                name: name.to_string(),
                expected: SCALES
                    .iter()
                    .map(|(n, _)| *n)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// A scale with an arbitrary ratio.
    pub fn with_ratio(ratio: f64) -> Self {
        Self { ratio }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// The value at `step`: `ratio^step`.
    pub fn step(&self, step: i64) -> f64 {
        self.ratio.powf(step as f64)
    }

    /// Generates the size tokens for `steps` steps of this scale.
    ///
    /// `z0` is always present and always the number zero.
    pub fn sizes(&self, steps: u32) -> BTreeMap<String, CssValue> {
        let steps = steps as i64;
        let rem = |step: i64| format!("{}rem", format_number(self.step(step)));
        let neg_rem = |step: i64| format!("-{}rem", format_number(self.step(step)));

        let mut sizes = BTreeMap::new();
        for i in 0..steps {
            let fraction = steps - i;
            sizes.insert(format!("z{}", i), CssValue::Text(rem(i - 1)));
            sizes.insert(format!("z.{}", fraction), CssValue::Text(rem(i - steps)));
            sizes.insert(format!("z-{}", i), CssValue::Text(neg_rem(i - 1)));
            sizes.insert(
                format!("z-.{}", fraction),
                CssValue::Text(neg_rem(i - steps)),
            );
        }
        sizes.insert("z0".to_string(), CssValue::Number(0.0));
        sizes
    }
}
