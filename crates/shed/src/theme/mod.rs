//! Theme builder: size scales, fonts and colors.
//!
//! A [`Theme`] is built once from a [`ThemeConfig`] and then shared read-only
//! by every resolution. Sizes come either from a named modular scale (see
//! [`scale`]) or from an explicit mapping; fonts and colors are plain token
//! mappings.
//!
//! ```rust
//! use shed::{create_theme, ThemeConfig};
//!
//! let theme = create_theme(&ThemeConfig::default()).unwrap();
//! assert_eq!(theme.size("z1").unwrap().to_string(), "1rem");
//! ```

mod config;
pub mod scale;
#[allow(clippy::module_inception)]
mod theme;

pub use config::{
    SizesConfig, ThemeConfig, DEFAULT_COLORS, DEFAULT_FONTS, DEFAULT_SCALE, DEFAULT_STEPS,
};
pub use scale::ModularScale;
pub use theme::{create_theme, Theme};
