//! Keyword vocabularies for the enumerated props.
//!
//! Each [`Keywords`] table maps the short codes a prop accepts (`f-s`, `nw`,
//! `i-b`, ...) to the CSS keyword they stand for. Lookup is exact and only
//! applies to string values; a numeric value never matches a code.
//!
//! What happens on an unknown code is part of the table: most props reject it
//! with an error listing every valid code, `cursor` answers with the literal
//! `"value"`, and `list-style-type` passes the value through.
//!
//! A few tables map `init` to `inherit` rather than `initial` (font-style,
//! float, text-transform, flex-basis). That is how those props have always
//! behaved and callers may depend on it.

use crate::error::{ResolveError, Result};
use crate::value::{CssValue, Raw};

/// What a table does with a code it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unknown {
    /// Reject with [`ResolveError::UnrecognizedKeyword`].
    Reject,
    /// Answer with this literal.
    Literal(&'static str),
    /// Pass the value through unchanged.
    PassThrough,
}

/// A prop's keyword vocabulary.
#[derive(Debug)]
pub struct Keywords {
    /// Prop label used in error messages.
    pub prop: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
    pub unknown: Unknown,
}

impl Keywords {
    /// Returns the CSS keyword for a code.
    pub(crate) fn lookup(&self, raw: Raw<'_>) -> Option<&'static str> {
        match raw {
            Raw::Str(code) => self
                .entries
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, keyword)| *keyword),
            Raw::Num(_) => None,
        }
    }

    /// Comma-separated list of accepted codes.
    pub fn codes(&self) -> String {
        self.entries
            .iter()
            .map(|(code, _)| *code)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolves a code, applying the table's unknown-code policy.
    pub(crate) fn resolve(&self, raw: Raw<'_>) -> Result<CssValue> {
        if let Some(keyword) = self.lookup(raw) {
            return Ok(CssValue::from(keyword));
        }
        match self.unknown {
            Unknown::Reject => Err(unrecognized(self.prop, self.codes(), raw)),
            Unknown::Literal(literal) => Ok(CssValue::from(literal)),
            Unknown::PassThrough => Ok(raw.to_css()),
        }
    }
}

/// Builds the error for a value outside a prop's vocabulary.
pub(crate) fn unrecognized(prop: &'static str, expected: String, raw: Raw<'_>) -> ResolveError {
    ResolveError::UnrecognizedKeyword {
        prop,
        expected,
        value: raw.json(),
    }
}

pub static DISPLAY: Keywords = Keywords {
    prop: "display",
    entries: &[
        ("b", "block"),
        ("i-b", "inline-block"),
        ("i", "inline"),
        ("f", "flex"),
        ("i-f", "inline-flex"),
        ("t", "table"),
        ("t-c", "table-cell"),
        ("t-r", "table-row"),
        ("n", "none"),
        ("init", "initial"),
    ],
    unknown: Unknown::Reject,
};

pub static CURSOR: Keywords = Keywords {
    prop: "cursor",
    entries: &[
        ("h", "help"),
        ("n-a", "not-allowed"),
        ("g", "grab"),
        ("gg", "grabbing"),
        ("p", "pointer"),
        ("d", "default"),
        ("a", "auto"),
        ("n", "none"),
        ("init", "initial"),
    ],
    // Long-standing behavior: unknown cursors become the word "value".
    unknown: Unknown::Literal("value"),
};

pub static FONT_STYLE: Keywords = Keywords {
    prop: "font-style",
    entries: &[
        ("n", "normal"),
        ("i", "italic"),
        ("o", "oblique"),
        ("inh", "inherit"),
        ("init", "inherit"),
    ],
    unknown: Unknown::Reject,
};

pub static ALIGN_CONTENT: Keywords = Keywords {
    prop: "align-content",
    entries: &[
        ("f-s", "flex-start"),
        ("f-e", "flex-end"),
        ("c", "center"),
        ("s", "stretch"),
        ("s-b", "space-between"),
        ("s-e", "space-evenly"),
        ("s-a", "space-around"),
        ("i", "inherit"),
        ("init", "initial"),
    ],
    unknown: Unknown::Reject,
};

pub static JUSTIFY_CONTENT: Keywords = Keywords {
    prop: "justify-content",
    entries: &[
        ("f-s", "flex-start"),
        ("f-e", "flex-end"),
        ("c", "center"),
        ("s-b", "space-between"),
        ("s-e", "space-evenly"),
        ("s-a", "space-around"),
        ("i", "inherit"),
        ("init", "initial"),
    ],
    unknown: Unknown::Reject,
};

pub static ALIGN_ITEMS: Keywords = Keywords {
    prop: "align-items",
    entries: &[
        ("f-s", "flex-start"),
        ("f-e", "flex-end"),
        ("c", "center"),
        ("b", "baseline"),
        ("s", "stretch"),
        ("i", "inherit"),
        ("init", "initial"),
    ],
    unknown: Unknown::Reject,
};

pub static ALIGN_SELF: Keywords = Keywords {
    prop: "align-self",
    entries: &[
        ("a", "auto"),
        ("f-s", "flex-start"),
        ("f-e", "flex-end"),
        ("c", "center"),
        ("b", "baseline"),
        ("s", "stretch"),
        ("i", "inherit"),
        ("init", "initial"),
    ],
    unknown: Unknown::Reject,
};

pub static FLEX_WRAP: Keywords = Keywords {
    prop: "flex-wrap",
    entries: &[
        ("nw", "nowrap"),
        ("w", "wrap"),
        ("wr", "wrap-reverse"),
        ("i", "inherit"),
        ("init", "initial"),
    ],
    unknown: Unknown::Reject,
};

pub static FLEX_DIRECTION: Keywords = Keywords {
    prop: "flex-direction",
    entries: &[
        ("r", "row"),
        ("rw", "row-reverse"),
        ("c", "column"),
        ("cr", "column-reverse"),
        ("i", "inherit"),
        ("init", "initial"),
    ],
    unknown: Unknown::Reject,
};

/// Keyword half of flex-basis; sizes are handled in `layout`.
pub static FLEX_BASIS: Keywords = Keywords {
    prop: "flex-basis",
    entries: &[
        ("a", "auto"),
        ("f", "fill"),
        ("max-c", "max-content"),
        ("min-c", "min-content"),
        ("fit-c", "fit-content"),
        ("c", "content"),
        ("i", "inherit"),
        ("init", "inherit"),
    ],
    unknown: Unknown::Reject,
};

pub static FLOAT: Keywords = Keywords {
    prop: "float",
    entries: &[
        ("l", "left"),
        ("r", "right"),
        ("n", "none"),
        ("i", "inherit"),
        ("init", "inherit"),
    ],
    unknown: Unknown::Reject,
};

pub static OVERFLOW: Keywords = Keywords {
    prop: "overflow",
    entries: &[
        ("a", "auto"),
        ("h", "hidden"),
        ("s", "scroll"),
        ("v", "visible"),
    ],
    unknown: Unknown::Reject,
};

pub static TEXT_TRANSFORM: Keywords = Keywords {
    prop: "text-transform",
    entries: &[
        ("u", "uppercase"),
        ("c", "capitalize"),
        ("l", "lowercase"),
        ("n", "none"),
        ("i", "inherit"),
        ("init", "inherit"),
    ],
    unknown: Unknown::Reject,
};

pub static TEXT_ALIGN: Keywords = Keywords {
    prop: "text-align",
    entries: &[
        ("c", "center"),
        ("l", "left"),
        ("r", "right"),
        ("j", "justify"),
    ],
    unknown: Unknown::Reject,
};

pub static TEXT_DECORATION: Keywords = Keywords {
    prop: "text-decoration",
    entries: &[
        ("u", "underline"),
        ("o", "overline"),
        ("b", "blink"),
        ("l-t", "line-through"),
        ("n", "none"),
        ("i", "inherit"),
        ("init", "initial"),
    ],
    unknown: Unknown::Reject,
};

pub static WHITE_SPACE: Keywords = Keywords {
    prop: "white-space",
    entries: &[
        ("n", "normal"),
        ("nw", "nowrap"),
        ("p", "pre"),
        ("p-w", "pre-wrap"),
        ("p-l", "pre-line"),
        ("i", "inherit"),
        ("init", "initial"),
    ],
    unknown: Unknown::Reject,
};

pub static LIST_STYLE_TYPE: Keywords = Keywords {
    prop: "list-style-type",
    entries: &[
        ("d", "disc"),
        ("c", "circle"),
        ("s", "square"),
        ("dec", "decimal"),
        ("g", "georgian"),
        ("cjk-i", "cjk-ideographic"),
        ("k", "kannada"),
        ("inherit", "inherit"),
        ("initial", "initial"),
        ("unset", "unset"),
        ("n", "none"),
    ],
    unknown: Unknown::PassThrough,
};
