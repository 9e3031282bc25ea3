//! End-to-end resolution against default and custom themes.

use serde_json::json;
use shed::{
    create_theme, resolve_style, CssValue, ResolveError, ShorthandProps, Theme, ThemeConfig,
};

fn text(s: &str) -> CssValue {
    CssValue::from(s)
}

fn brand_theme() -> Theme {
    create_theme(
        &ThemeConfig::new()
            .color("red", "#ff0000")
            .color("ink", "#111")
            .font("mono", "JetBrains Mono, monospace"),
    )
    .unwrap()
}

// ============================================================================
// Sizes
// ============================================================================

#[test]
fn fractions_resolve_to_percentages() {
    let props = ShorthandProps::new().set("w", "1of2").set("h", "3/4");
    let style = resolve_style(&props, &Theme::default()).unwrap();
    assert_eq!(style.get("width"), Some(&text("50%")));
    assert_eq!(style.get("height"), Some(&text("75%")));
}

#[test]
fn scale_steps_resolve_through_theme() {
    let props = ShorthandProps::new()
        .set("f", 3)
        .set("mw", "full")
        .set("left", "-2")
        .set("top", "20vh");
    let theme = Theme::default();
    let style = resolve_style(&props, &theme).unwrap();
    assert_eq!(style.get("fontSize"), theme.size("z3"));
    assert_eq!(style.get("maxWidth"), Some(&text("100%")));
    assert_eq!(style.get("left"), theme.size("z-2"));
    assert_eq!(style.get("top"), Some(&text("20vh")));
}

#[test]
fn explicit_theme_sizes() {
    let theme = Theme::from_yaml("sizes:\n  1: 4px\n  2: 8px\n  '.5': 2px\n").unwrap();
    let props = ShorthandProps::new().set("p", ".5").set("m", "0.5").set("brb", 2);
    let style = resolve_style(&props, &theme).unwrap();
    assert_eq!(style.get("padding"), Some(&text("2px")));
    assert_eq!(style.get("margin"), Some(&text("2px")));
    assert_eq!(style.get("borderBottomLeftRadius"), Some(&text("8px")));
    assert_eq!(style.get("borderBottomRightRadius"), Some(&text("8px")));
}

#[test]
fn missing_size_is_an_error() {
    let theme = Theme::from_yaml("sizes:\n  1: 4px\n").unwrap();
    let err = resolve_style(&ShorthandProps::new().set("w", 7), &theme).unwrap_err();
    assert_eq!(
        err,
        ResolveError::NoSize {
            value: "7".to_string()
        }
    );
}

// ============================================================================
// Spacing
// ============================================================================

#[test]
fn margin_auto() {
    let style = resolve_style(&ShorthandProps::new().set("m", "a"), &Theme::default()).unwrap();
    assert_eq!(style.get("margin"), Some(&text("auto")));
}

#[test]
fn horizontal_margin_full_bleed() {
    let style = resolve_style(&ShorthandProps::new().set("mx", "r"), &Theme::default()).unwrap();
    assert_eq!(style.get("marginLeft"), Some(&text("calc(-50vw + 50%)")));
    assert_eq!(style.get("marginRight"), Some(&text("calc(-50vw + 50%)")));
}

#[test]
fn padding_axes_expand() {
    let theme = Theme::default();
    let style = resolve_style(&ShorthandProps::new().set("py", 1), &theme).unwrap();
    assert_eq!(style.get("paddingTop"), Some(&text("1rem")));
    assert_eq!(style.get("paddingBottom"), Some(&text("1rem")));
    assert!(!style.contains("paddingLeft"));
}

// ============================================================================
// Colors and fonts
// ============================================================================

#[test]
fn alpha_theme_color() {
    let style = resolve_style(&ShorthandProps::new().set("c", "red.5"), &brand_theme()).unwrap();
    assert_eq!(style.get("color"), Some(&text("rgba(255, 0, 0, .5)")));
}

#[test]
fn short_hex_alpha_color() {
    let style = resolve_style(&ShorthandProps::new().set("bg", "ink.8"), &brand_theme()).unwrap();
    assert_eq!(style.get("backgroundColor"), Some(&text("rgba(17, 17, 17, .8)")));
}

#[test]
fn unknown_color_falls_back_to_raw() {
    let style = resolve_style(
        &ShorthandProps::new().set("c", "rebeccapurple"),
        &brand_theme(),
    )
    .unwrap();
    assert_eq!(style.get("color"), Some(&text("rebeccapurple")));
}

#[test]
fn alpha_on_unknown_color_is_an_error() {
    let err = resolve_style(&ShorthandProps::new().set("c", "teal.5"), &brand_theme())
        .unwrap_err();
    assert!(matches!(err, ResolveError::UnknownColor { .. }));
}

#[test]
fn font_family_from_theme() {
    let style = resolve_style(&ShorthandProps::new().set("ff", "mono"), &brand_theme()).unwrap();
    assert_eq!(
        style.get("fontFamily"),
        Some(&text("JetBrains Mono, monospace"))
    );
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn flex_container() {
    let props = ShorthandProps::new()
        .set("d", "f")
        .set("flxd", "c")
        .set("flxw", "w")
        .set("jc", "s-b")
        .set("ai", "c")
        .set("ac", "s-a")
        .set("as", "f-e");
    let style = resolve_style(&props, &Theme::default()).unwrap();
    assert_eq!(style.get("display"), Some(&text("flex")));
    assert_eq!(style.get("flexDirection"), Some(&text("column")));
    assert_eq!(style.get("flexWrap"), Some(&text("wrap")));
    assert_eq!(style.get("justifyContent"), Some(&text("space-between")));
    assert_eq!(style.get("alignItems"), Some(&text("center")));
    assert_eq!(style.get("alignContent"), Some(&text("space-around")));
    assert_eq!(style.get("alignSelf"), Some(&text("flex-end")));
}

#[test]
fn text_props() {
    let props = ShorthandProps::new()
        .set("tt", "u")
        .set("ta", "j")
        .set("td", "l-t")
        .set("ws", "nw")
        .set("fs", "i")
        .set("fw", 700)
        .set("lst", "dec");
    let style = resolve_style(&props, &Theme::default()).unwrap();
    assert_eq!(style.get("textTransform"), Some(&text("uppercase")));
    assert_eq!(style.get("textAlign"), Some(&text("justify")));
    assert_eq!(style.get("textDecoration"), Some(&text("line-through")));
    assert_eq!(style.get("whiteSpace"), Some(&text("nowrap")));
    assert_eq!(style.get("fontStyle"), Some(&text("italic")));
    assert_eq!(style.get("fontWeight"), Some(&CssValue::Number(700.0)));
    assert_eq!(style.get("listStyleType"), Some(&text("decimal")));
}

#[test]
fn unknown_display_lists_valid_codes() {
    let err = resolve_style(&ShorthandProps::new().set("d", "zz"), &Theme::default())
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("display"), "{}", msg);
    assert!(msg.contains("b, i-b, i, f, i-f, t, t-c, t-r, n, init"), "{}", msg);
    assert!(msg.contains("\"zz\""), "{}", msg);
}

#[test]
fn overflow_axes() {
    let props = ShorthandProps::new().set("o", "h").set("ox", "s").set("oy", "a");
    let style = resolve_style(&props, &Theme::default()).unwrap();
    assert_eq!(style.get("overflow"), Some(&text("hidden")));
    assert_eq!(style.get("overflowX"), Some(&text("scroll")));
    assert_eq!(style.get("overflowY"), Some(&text("auto")));
}

#[test]
fn typography_from_scale() {
    let theme = Theme::default();
    let props = ShorthandProps::new().set("lh", "t").set("ls", "t");
    let style = resolve_style(&props, &theme).unwrap();
    assert_eq!(style.get("lineHeight"), Some(&text("1.125")));
    assert_eq!(style.get("letterSpacing"), Some(&text("-0.05em")));
}

// ============================================================================
// Position and vertical alignment
// ============================================================================

#[test]
fn cover_position() {
    let style = resolve_style(&ShorthandProps::new().set("pos", "c"), &Theme::default()).unwrap();
    assert_eq!(style.get("position"), Some(&text("absolute")));
    for side in ["top", "right", "bottom", "left"] {
        assert_eq!(style.get(side), Some(&text("0px")), "{}", side);
    }
}

#[test]
fn vertical_center() {
    let style = resolve_style(&ShorthandProps::new().set("va", "c"), &Theme::default()).unwrap();
    assert_eq!(style.get("position"), Some(&text("relative")));
    assert_eq!(style.get("top"), Some(&text("50%")));
    assert_eq!(style.get("transform"), Some(&text("translateY(-50%)")));
    assert!(!style.contains("verticalAlign"));
}

// ============================================================================
// General behavior
// ============================================================================

#[test]
fn resolution_is_idempotent() {
    let theme = brand_theme();
    let props = ShorthandProps::from_json(
        r#"{"m": 2, "px": "a", "c": "red.5", "d": "i-b", "w": "1/3", "pos": "r", "va": "m"}"#,
    )
    .unwrap();
    let first = resolve_style(&props, &theme).unwrap();
    let second = resolve_style(&props, &theme).unwrap();
    assert_eq!(first, second);
}

#[test]
fn falsy_values_are_no_ops() {
    let props = ShorthandProps::new()
        .set("d", "")
        .set("c", json!(null))
        .set("w", 0)
        .set("fl", false)
        .set("m", "")
        .set("va", 0);
    let style = resolve_style(&props, &Theme::default()).unwrap();
    assert_eq!(style.get("display"), Some(&text("")));
    assert_eq!(style.get("width"), Some(&CssValue::Number(0.0)));
    assert!(!style.is_set("color"));
    assert!(!style.is_set("float"));
    assert!(!style.contains("margin"));
    assert!(!style.contains("verticalAlign"));
}

#[test]
fn non_scalar_values_are_rejected() {
    let err = resolve_style(
        &ShorthandProps::new().set("w", json!({"a": 1})),
        &Theme::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ResolveError::InvalidValue { kind: "object", .. }));
}

#[test]
fn style_serializes_to_json() {
    let style = resolve_style(
        &ShorthandProps::new().set("m", "a").set("d", "n").set("fw", 600),
        &Theme::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&style).unwrap();
    assert_eq!(json["fontWeight"].to_string(), "600");
    assert_eq!(json["margin"], "auto");
    assert_eq!(json["display"], "none");
    assert_eq!(json["cursor"], serde_json::Value::Null);
}
