//! # Shed - Shorthand Style Props
//!
//! `shed` turns terse shorthand style props (`m`, `p`, `bg`, `flxd`, ...) into
//! standard style declarations (`margin`, `padding`, `backgroundColor`,
//! `flexDirection`, ...), using a themeable scale for sizes, colors and fonts.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: immutable size, font and color tokens, built once
//! - [`ThemeConfig`]: partial theme configuration; omitted sections use defaults
//! - [`ShorthandProps`]: the flat prop map a caller provides
//! - [`resolve_style`]: resolves props against a theme into a [`ResolvedStyle`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shed::{resolve_style, ShorthandProps, Theme, ThemeConfig};
//!
//! let theme = Theme::from_config(
//!     &ThemeConfig::new()
//!         .scale("major third")
//!         .color("brand", "#3355ff"),
//! )
//! .unwrap();
//!
//! let props = ShorthandProps::new()
//!     .set("p", 2)
//!     .set("bg", "brand.5")
//!     .set("ta", "c");
//!
//! let style = resolve_style(&props, &theme).unwrap();
//! assert_eq!(style.get("padding").unwrap().to_string(), "1.25rem");
//! assert_eq!(
//!     style.get("backgroundColor").unwrap().to_string(),
//!     "rgba(51, 85, 255, .5)"
//! );
//! assert_eq!(style.get("textAlign").unwrap().to_string(), "center");
//! ```
//!
//! ## Sizes
//!
//! Numeric props index the theme's size scale: `2` is the token `z2`, `.5`
//! is `z.5`, `-1` is `z-1`. A named modular scale generates `steps` sizes in
//! each direction; an explicit `sizes` mapping is used as given. Fractions
//! (`1of3`, `3/4`), `full`, `a` and viewport lengths (`50vw`) bypass the
//! scale.
//!
//! ## YAML Themes
//!
//! ```rust
//! use shed::{resolve_style, ShorthandProps, Theme};
//!
//! let theme = Theme::from_yaml(r##"
//! sizes:
//!   1: 4px
//!   2: 8px
//! colors:
//!   ink: "#111"
//! "##).unwrap();
//!
//! let props = ShorthandProps::from_yaml("my: 2\nc: ink").unwrap();
//! let style = resolve_style(&props, &theme).unwrap();
//! assert_eq!(style.get("marginTop").unwrap().to_string(), "8px");
//! assert_eq!(style.get("color").unwrap().to_string(), "#111");
//! ```
//!
//! ## Errors
//!
//! Theme problems surface as [`ThemeError`] when the theme is built.
//! Resolution problems surface as [`ResolveError`] naming the offending prop.
//! Falsy prop values (`null`, `false`, `""`, `0`) are never errors.

pub mod color;
mod error;
pub mod prelude;
pub mod resolve;
pub mod theme;
mod value;

// Error types
pub use error::{ResolveError, Result, ThemeError};

// Theme builder exports
pub use theme::{create_theme, ModularScale, SizesConfig, Theme, ThemeConfig};

// Resolver exports
pub use resolve::{resolve_style, ResolvedStyle, ShorthandProps};

// Value exports
pub use value::{format_number, is_falsy, CssValue};
