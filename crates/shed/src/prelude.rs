//! Prelude for convenient imports.
//!
//! ```rust
//! use shed::prelude::*;
//!
//! let style = resolve_style(&ShorthandProps::new().set("d", "i-b"), &Theme::default())?;
//! assert_eq!(style.get("display"), Some(&CssValue::from("inline-block")));
//! # Ok::<(), ResolveError>(())
//! ```

pub use crate::{
    create_theme, resolve_style, CssValue, ResolveError, ResolvedStyle, ShorthandProps, Theme,
    ThemeConfig, ThemeError,
};
