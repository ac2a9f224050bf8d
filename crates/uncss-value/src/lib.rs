//! Layered value resolution for atomic CSS utility tokens.
//!
//! This crate turns the raw suffix of a utility token (the `4` in
//! `translate-x-4`, the `[50%]` in `scale-[50%]`, the `$offset` in
//! `translate-$offset`) into a typed value ready for declaration emission.
//!
//! Resolution is layered: the caller supplies an ordered list of
//! [`ValueKind`]s and the first layer that accepts the input wins. If every
//! layer declines, [`resolve`] returns `None` and the caller is expected to
//! decline as a whole — no partial output, so an outer matcher can fall
//! through to a later rule.
//!
//! # Example
//!
//! ```rust
//! use uncss_value::{resolve, ResolvedValue, ValueKind};
//!
//! let kinds = &[ValueKind::NoneKeyword, ValueKind::Number, ValueKind::Fraction];
//!
//! assert_eq!(resolve("4", kinds), Some(ResolvedValue::Number(4.0)));
//! assert_eq!(resolve("1/2", kinds), Some(ResolvedValue::Css("50%".into())));
//! assert_eq!(resolve("none", kinds), Some(ResolvedValue::None));
//! assert_eq!(resolve("bogus", kinds), None);
//! ```
//!
//! # Value syntax
//!
//! | Layer | Input | Output |
//! |-------|-------|--------|
//! | `NoneKeyword` | `none` | the `none` keyword |
//! | `Number` | `4`, `2.5`, `-12` | bare number (unit policy is the caller's) |
//! | `Fraction` | `1/2`, `2/3` | percentage (`50%`, `66.6667%`) |
//! | `Percent` | `50%`, `150` | percentage string |
//! | `Degree` | `45`, `0.5turn` | angle string (`45deg`, `0.5turn`) |
//! | `Px` | `800`, `10px` | pixel string |
//! | `NumberWithUnit` | `3rem`, `10vh` | passed through unchanged |
//! | `Bracket` | `[calc(100%-1rem)]`, `[10px_20px]` | bracket content, `_` → space |
//! | `CssVar` | `$my-var` | `var(--my-var)` |

use cssparser::{Parser, ParserInput, Token};

/// A resolved utility value.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue {
    /// A bare number. The unit policy (spacing multiple, scale factor, ...)
    /// belongs to the caller.
    Number(f64),
    /// The `none` keyword.
    None,
    /// A finished CSS value string, already unit-qualified.
    Css(String),
}

impl ResolvedValue {
    /// Returns the value as a CSS expression string, formatting bare numbers
    /// as-is and `none` as the keyword.
    pub fn to_css(&self) -> String {
        match self {
            ResolvedValue::Number(n) => format_number(*n),
            ResolvedValue::None => "none".to_string(),
            ResolvedValue::Css(s) => s.clone(),
        }
    }
}

/// One layer of the value resolver.
///
/// Layers are tried in the order the caller lists them; the first to accept
/// the raw input wins. See the crate docs for the syntax each layer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// The literal keyword `none`.
    NoneKeyword,
    /// A bare finite number.
    Number,
    /// An integer fraction `a/b`, resolved to a percentage.
    Fraction,
    /// A percentage: explicit `%` suffix, or a bare number promoted to one.
    Percent,
    /// An angle: bare numbers become degrees, explicit angle units pass through.
    Degree,
    /// A pixel length: bare numbers become `px`, explicit `px` passes through.
    Px,
    /// A number with an explicit known length unit, passed through unchanged.
    NumberWithUnit,
    /// An arbitrary bracketed value: `[...]`.
    Bracket,
    /// A CSS variable reference: `$name` → `var(--name)`.
    CssVar,
}

/// Resolves a raw token suffix through the given layers, in order.
///
/// Returns `None` when every layer declines. Callers must treat that as
/// "this rule does not apply" and produce no output.
pub fn resolve(raw: &str, kinds: &[ValueKind]) -> Option<ResolvedValue> {
    if raw.is_empty() {
        return None;
    }
    for kind in kinds {
        let value = match kind {
            ValueKind::NoneKeyword => resolve_none(raw),
            ValueKind::Number => resolve_number(raw),
            ValueKind::Fraction => resolve_fraction(raw),
            ValueKind::Percent => resolve_percent(raw),
            ValueKind::Degree => resolve_degree(raw),
            ValueKind::Px => resolve_px(raw),
            ValueKind::NumberWithUnit => resolve_number_with_unit(raw),
            ValueKind::Bracket => resolve_bracket(raw),
            ValueKind::CssVar => resolve_cssvar(raw),
        };
        if value.is_some() {
            return value;
        }
    }
    None
}

fn resolve_none(raw: &str) -> Option<ResolvedValue> {
    (raw == "none").then_some(ResolvedValue::None)
}

fn resolve_number(raw: &str) -> Option<ResolvedValue> {
    parse_number(raw).map(ResolvedValue::Number)
}

fn resolve_fraction(raw: &str) -> Option<ResolvedValue> {
    let (num, den) = raw.split_once('/')?;
    let num: i64 = num.parse().ok()?;
    let den: i64 = den.parse().ok()?;
    if den <= 0 {
        return None;
    }
    let pct = num as f64 / den as f64 * 100.0;
    Some(ResolvedValue::Css(format!("{}%", format_number(pct))))
}

fn resolve_percent(raw: &str) -> Option<ResolvedValue> {
    if let Some(body) = raw.strip_suffix('%') {
        parse_number(body)?;
        return Some(ResolvedValue::Css(raw.to_string()));
    }
    let n = parse_number(raw)?;
    Some(ResolvedValue::Css(format!("{}%", format_number(n))))
}

/// Angle units accepted with an explicit suffix.
const ANGLE_UNITS: &[&str] = &["deg", "grad", "rad", "turn"];

fn resolve_degree(raw: &str) -> Option<ResolvedValue> {
    if let Some(n) = parse_number(raw) {
        return Some(ResolvedValue::Css(format!("{}deg", format_number(n))));
    }
    let (body, unit) = split_unit(raw)?;
    if ANGLE_UNITS.contains(&unit) {
        parse_number(body)?;
        return Some(ResolvedValue::Css(raw.to_string()));
    }
    None
}

fn resolve_px(raw: &str) -> Option<ResolvedValue> {
    if let Some(n) = parse_number(raw) {
        return Some(ResolvedValue::Css(format!("{}px", format_number(n))));
    }
    let (body, unit) = split_unit(raw)?;
    if unit == "px" {
        parse_number(body)?;
        return Some(ResolvedValue::Css(raw.to_string()));
    }
    None
}

/// Length units accepted by [`ValueKind::NumberWithUnit`].
const LENGTH_UNITS: &[&str] = &[
    "px", "em", "rem", "ex", "ch", "vw", "vh", "vmin", "vmax", "pt", "pc", "cm", "mm", "in", "q",
    "cap", "ic", "lh", "rlh", "svw", "svh", "lvw", "lvh", "dvw", "dvh",
];

fn resolve_number_with_unit(raw: &str) -> Option<ResolvedValue> {
    let (body, unit) = split_unit(raw)?;
    if LENGTH_UNITS.contains(&unit) {
        parse_number(body)?;
        return Some(ResolvedValue::Css(raw.to_string()));
    }
    None
}

fn resolve_bracket(raw: &str) -> Option<ResolvedValue> {
    let inner = raw.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() {
        return None;
    }
    let expanded = unescape_underscores(inner);
    if !is_balanced(&expanded) || !tokenizes_as_value(&expanded) {
        return None;
    }
    Some(ResolvedValue::Css(expanded))
}

fn resolve_cssvar(raw: &str) -> Option<ResolvedValue> {
    let name = raw.strip_prefix('$')?;
    if name.is_empty() || !is_css_ident(name) {
        return None;
    }
    Some(ResolvedValue::Css(format!("var(--{name})")))
}

/// Splits a value string on top-level commas only.
///
/// Commas nested inside parentheses or square brackets are not split points,
/// so `calc(1px,2px)` stays one component. Components are trimmed; empty
/// components are dropped.
pub fn split_top_level_commas(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in value.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);
    parts.iter().map(|p| p.trim()).filter(|p| !p.is_empty()).collect()
}

/// Formats a number with trailing zeros trimmed (`50` not `50.0000`,
/// `33.3333` for thirds).
pub fn format_number(n: f64) -> String {
    if n == n.trunc() && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }
    let s = format!("{n:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Parses a finite number literal. Rejects `inf`/`NaN` spellings that
/// `f64::from_str` would otherwise accept.
fn parse_number(raw: &str) -> Option<f64> {
    let first = raw.chars().next()?;
    if !(first.is_ascii_digit() || first == '-' || first == '+' || first == '.') {
        return None;
    }
    let n: f64 = raw.parse().ok()?;
    n.is_finite().then_some(n)
}

/// Splits a numeric body from a trailing alphabetic unit: `10px` → (`10`, `px`).
fn split_unit(raw: &str) -> Option<(&str, &str)> {
    let unit_start = raw.find(|c: char| c.is_ascii_alphabetic())?;
    if unit_start == 0 {
        return None;
    }
    Some((&raw[..unit_start], &raw[unit_start..]))
}

fn is_css_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '-' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Maps `_` to space inside bracket values; `\_` escapes a literal underscore.
fn unescape_underscores(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'_') => {
                chars.next();
                out.push('_');
            }
            '_' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

fn is_balanced(s: &str) -> bool {
    let mut stack = Vec::new();
    for c in s.chars() {
        match c {
            '(' | '[' => stack.push(c),
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// Checks that the content tokenizes as a plain CSS value: no semicolons,
/// curly blocks, stray close tokens, or bad strings/urls. Uses the same
/// tokenizer the stylesheet layer is built on.
fn tokenizes_as_value(s: &str) -> bool {
    let mut input = ParserInput::new(s);
    let mut parser = Parser::new(&mut input);
    loop {
        match parser.next() {
            Ok(token) => match token {
                Token::Semicolon
                | Token::CurlyBracketBlock
                | Token::BadString(_)
                | Token::BadUrl(_)
                | Token::CloseParenthesis
                | Token::CloseSquareBracket
                | Token::CloseCurlyBracket => return false,
                _ => {}
            },
            Err(_) => return true, // end of input
        }
    }
}
