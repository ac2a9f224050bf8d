//! Transform utilities: translate, rotate, scale, skew, origin, perspective.
//!
//! # Design
//!
//! Each transform axis is written to its own CSS custom property
//! (`--un-translate-x`, `--un-skew-y`, ...), and the final `translate`,
//! `scale`, or `transform` property is recomposed from those variables on
//! every emission. Because every emission also carries identity defaults for
//! the variables it references, independently-matched utilities compose:
//! `skew-x-12` and `skew-y-6` can land in either order and the shared
//! `transform` chain picks up both.
//!
//! Per-axis rotation and skew share one chain on the literal `transform`
//! property (they compose as transform functions, not shorthands), while
//! translate and scale recompose their dedicated shorthand properties.
//! Axis-less `rotate-45` never touches variables at all: it short-circuits
//! to the `rotate` shorthand.

use once_cell::sync::Lazy;
use uncss_value::{format_number, resolve, split_top_level_commas, ResolvedValue, ValueKind};

use crate::declaration::{CssEntry, Group, GroupFlag, PropertyDefault, RuleOutput};

use super::pattern::{AxisShape, Captures, Direction, UtilityPattern};
use super::{global_keyword_rules, Rule, RuleContext, RuleSet};

/// The transform-function chain shared by per-axis rotate and skew.
const TRANSFORM_CHAIN: &str =
    "var(--un-rotate-x) var(--un-rotate-y) var(--un-rotate-z) var(--un-skew-x) var(--un-skew-y)";

const TRANSLATE_DEFAULTS: [PropertyDefault; 3] = [
    PropertyDefault {
        name: "--un-translate-x",
        syntax: "<length-percentage>",
        initial_value: "0",
    },
    PropertyDefault {
        name: "--un-translate-y",
        syntax: "<length-percentage>",
        initial_value: "0",
    },
    PropertyDefault {
        name: "--un-translate-z",
        syntax: "<length-percentage>",
        initial_value: "0",
    },
];

const SCALE_DEFAULTS: [PropertyDefault; 3] = [
    PropertyDefault {
        name: "--un-scale-x",
        syntax: "<number> | <percentage>",
        initial_value: "1",
    },
    PropertyDefault {
        name: "--un-scale-y",
        syntax: "<number> | <percentage>",
        initial_value: "1",
    },
    PropertyDefault {
        name: "--un-scale-z",
        syntax: "<number> | <percentage>",
        initial_value: "1",
    },
];

// The chain holds whole transform functions, so identity defaults are
// identity functions. Rotate and skew share the chain and always register
// the full set together.
const ROTATE_SKEW_DEFAULTS: [PropertyDefault; 5] = [
    PropertyDefault {
        name: "--un-rotate-x",
        syntax: "*",
        initial_value: "rotateX(0deg)",
    },
    PropertyDefault {
        name: "--un-rotate-y",
        syntax: "*",
        initial_value: "rotateY(0deg)",
    },
    PropertyDefault {
        name: "--un-rotate-z",
        syntax: "*",
        initial_value: "rotateZ(0deg)",
    },
    PropertyDefault {
        name: "--un-skew-x",
        syntax: "*",
        initial_value: "skewX(0deg)",
    },
    PropertyDefault {
        name: "--un-skew-y",
        syntax: "*",
        initial_value: "skewY(0deg)",
    },
];

const XYZ: &[Direction] = &[Direction::X, Direction::Y, Direction::Z];
const XY: &[Direction] = &[Direction::X, Direction::Y];

const TRANSLATE_VALUES: &[ValueKind] = &[
    ValueKind::NoneKeyword,
    ValueKind::Number,
    ValueKind::Fraction,
    ValueKind::Percent,
    ValueKind::NumberWithUnit,
    ValueKind::Bracket,
    ValueKind::CssVar,
];
const SCALE_VALUES: &[ValueKind] = &[
    ValueKind::NoneKeyword,
    ValueKind::Fraction,
    ValueKind::Percent,
    ValueKind::Bracket,
    ValueKind::CssVar,
];
const ROTATE_VALUES: &[ValueKind] = &[
    ValueKind::NoneKeyword,
    ValueKind::Degree,
    ValueKind::Bracket,
    ValueKind::CssVar,
];
const SKEW_VALUES: &[ValueKind] = &[ValueKind::Degree, ValueKind::Bracket, ValueKind::CssVar];
const PERSPECTIVE_VALUES: &[ValueKind] =
    &[ValueKind::Bracket, ValueKind::CssVar, ValueKind::Px];
const ORIGIN_VALUES: &[ValueKind] = &[ValueKind::Bracket, ValueKind::CssVar];

/// The transform rule table, in matching order.
pub fn transform_rules() -> Vec<Rule> {
    let mut rules = vec![
        Rule::dynamic(
            UtilityPattern::new(true, &["origin"], AxisShape::NoAxis),
            handle_origin,
        )
        .autocomplete(&["(transform-)origin-<position>"]),
        // Tried before the perspective-origin rule on purpose: a token like
        // `perspective-origin-top` structurally matches here, fails to
        // resolve, and falls through.
        Rule::dynamic(
            UtilityPattern::new(true, &["perspective", "perspect"], AxisShape::NoAxis),
            handle_perspective,
        )
        .autocomplete(&["(transform-)perspective-<num>"]),
        Rule::dynamic(
            UtilityPattern::new(
                true,
                &["perspective-origin", "perspect-origin"],
                AxisShape::NoAxis,
            ),
            handle_perspective_origin,
        )
        .autocomplete(&["(transform-)perspective-origin-<position>"]),
        // Axis-specific before axis-less keeps the shapes exclusive.
        Rule::dynamic(
            UtilityPattern::new(true, &["translate"], AxisShape::Xyz),
            handle_translate,
        )
        .autocomplete(&["(transform-)translate-(x|y|z)-<num>"]),
        Rule::dynamic(
            UtilityPattern::new(true, &["translate"], AxisShape::NoAxis),
            handle_translate,
        )
        .autocomplete(&["(transform-)translate-<num>"]),
        Rule::dynamic(
            UtilityPattern::new(true, &["rotate"], AxisShape::Xyz),
            handle_rotate,
        )
        .autocomplete(&["(transform-)rotate-(x|y|z)-<num>"]),
        Rule::dynamic(
            UtilityPattern::new(true, &["rotate"], AxisShape::NoAxis),
            handle_rotate,
        )
        .autocomplete(&["(transform-)rotate-<num>"]),
        Rule::dynamic(
            UtilityPattern::new(true, &["skew"], AxisShape::Xy),
            handle_skew,
        )
        .autocomplete(&["(transform-)skew-(x|y)-<num>"]),
        Rule::dynamic(
            UtilityPattern::new(true, &["skew"], AxisShape::NoAxis),
            handle_skew,
        )
        .autocomplete(&["(transform-)skew-<num>"]),
        Rule::dynamic(
            UtilityPattern::new(true, &["scale"], AxisShape::Xyz),
            handle_scale,
        )
        .autocomplete(&["(transform-)scale-(x|y|z)-<percent>"]),
        Rule::dynamic(
            UtilityPattern::new(true, &["scale"], AxisShape::NoAxis),
            handle_scale,
        )
        .autocomplete(&["(transform-)scale-<percent>"]),
        Rule::fixed(
            "transform-3d",
            vec![CssEntry::new("transform-style", "preserve-3d")],
        ),
        Rule::fixed(
            "transform-flat",
            vec![CssEntry::new("transform-style", "flat")],
        ),
        Rule::dynamic(
            UtilityPattern::new(false, &["transform-box"], AxisShape::NoAxis),
            handle_transform_box,
        )
        .autocomplete(&["transform-box-(border|content|fill|stroke|view)"]),
        Rule::fixed("transform", vec![CssEntry::new("transform", TRANSFORM_CHAIN)]),
        Rule::fixed(
            "transform-cpu",
            vec![CssEntry::new("transform", TRANSFORM_CHAIN)],
        ),
        Rule::fixed(
            "transform-gpu",
            vec![CssEntry::new(
                "transform",
                format!("translateZ(0) {TRANSFORM_CHAIN}"),
            )],
        ),
        Rule::fixed("transform-none", vec![CssEntry::new("transform", "none")]),
    ];
    rules.extend(global_keyword_rules("transform"));
    rules
}

static TRANSFORMS: Lazy<RuleSet> = Lazy::new(|| RuleSet::new(transform_rules()));

/// The shared default transform rule set.
pub fn transforms() -> &'static RuleSet {
    &TRANSFORMS
}

/// Expands a direction and value to per-axis components.
///
/// An explicit axis gets the value as-is. No axis with a single value fans
/// out to every axis the family owns. No axis with a top-level comma list
/// assigns positionally in x, y, z order: extras beyond the family's axes
/// are dropped, missing axes stay at their registered default.
fn expand_axes<'v>(
    direction: Direction,
    value: &'v str,
    family_axes: &'static [Direction],
) -> Vec<(Direction, &'v str)> {
    if direction == Direction::None {
        let parts = split_top_level_commas(value);
        if parts.len() > 1 {
            return family_axes.iter().copied().zip(parts).collect();
        }
        return family_axes.iter().map(|&axis| (axis, value)).collect();
    }
    vec![(direction, value)]
}

fn handle_translate(caps: &Captures, ctx: &RuleContext) -> Option<RuleOutput> {
    let expr = match resolve(caps.value, TRANSLATE_VALUES)? {
        ResolvedValue::None => {
            return Some(RuleOutput::literal(vec![CssEntry::new("translate", "none")]));
        }
        ResolvedValue::Number(n) => {
            ctx.tracker.track("spacing", "DEFAULT");
            format!("calc(var(--spacing) * {})", format_number(n))
        }
        ResolvedValue::Css(css) => css,
    };

    let assignments = expand_axes(caps.direction, &expr, XYZ)
        .into_iter()
        .map(|(axis, component)| {
            CssEntry::new(format!("--un-translate-{}", axis.letter()), component)
        })
        .collect();

    // 3-value shorthand only when z was explicitly touched.
    let aggregate = if caps.direction == Direction::Z {
        "var(--un-translate-x) var(--un-translate-y) var(--un-translate-z)"
    } else {
        "var(--un-translate-x) var(--un-translate-y)"
    };

    Some(RuleOutput::Composite {
        groups: vec![
            Group::new(assignments),
            Group::flagged(
                vec![CssEntry::new("translate", aggregate)],
                GroupFlag::NoNegative,
            ),
        ],
        defaults: TRANSLATE_DEFAULTS.to_vec(),
    })
}

fn handle_rotate(caps: &Captures, _ctx: &RuleContext) -> Option<RuleOutput> {
    let resolved = resolve(caps.value, ROTATE_VALUES)?;
    if resolved == ResolvedValue::None {
        return Some(RuleOutput::literal(vec![CssEntry::new("rotate", "none")]));
    }
    let value = resolved.to_css();

    // Axis-less rotation is the plain shorthand; no variable composition.
    if caps.direction == Direction::None {
        return Some(RuleOutput::literal(vec![CssEntry::new("rotate", value)]));
    }

    let letter = caps.direction.letter();
    Some(RuleOutput::Composite {
        groups: vec![
            Group::new(vec![CssEntry::new(
                format!("--un-rotate-{letter}"),
                fold_function("rotate", letter, &value),
            )]),
            Group::new(vec![CssEntry::new("transform", TRANSFORM_CHAIN)]),
        ],
        defaults: ROTATE_SKEW_DEFAULTS.to_vec(),
    })
}

fn handle_skew(caps: &Captures, _ctx: &RuleContext) -> Option<RuleOutput> {
    let value = resolve(caps.value, SKEW_VALUES)?.to_css();

    let assignments = expand_axes(caps.direction, &value, XY)
        .into_iter()
        .map(|(axis, component)| {
            CssEntry::new(
                format!("--un-skew-{}", axis.letter()),
                fold_function("skew", axis.letter(), component),
            )
        })
        .collect();

    Some(RuleOutput::Composite {
        groups: vec![
            Group::new(assignments),
            Group::new(vec![CssEntry::new("transform", TRANSFORM_CHAIN)]),
        ],
        defaults: ROTATE_SKEW_DEFAULTS.to_vec(),
    })
}

fn handle_scale(caps: &Captures, _ctx: &RuleContext) -> Option<RuleOutput> {
    let resolved = resolve(caps.value, SCALE_VALUES)?;
    if resolved == ResolvedValue::None {
        return Some(RuleOutput::literal(vec![CssEntry::new("scale", "none")]));
    }
    let value = resolved.to_css();

    let assignments = expand_axes(caps.direction, &value, XYZ)
        .into_iter()
        .map(|(axis, component)| CssEntry::new(format!("--un-scale-{}", axis.letter()), component))
        .collect();

    let aggregate = if caps.direction == Direction::Z {
        "var(--un-scale-x) var(--un-scale-y) var(--un-scale-z)"
    } else {
        "var(--un-scale-x) var(--un-scale-y)"
    };

    Some(RuleOutput::Composite {
        groups: vec![
            Group::new(assignments),
            Group::new(vec![CssEntry::new("scale", aggregate)]),
        ],
        defaults: SCALE_DEFAULTS.to_vec(),
    })
}

fn handle_origin(caps: &Captures, _ctx: &RuleContext) -> Option<RuleOutput> {
    let value = position_value(caps.value)
        .or_else(|| resolve(caps.value, ORIGIN_VALUES).map(|v| v.to_css()))?;
    Some(RuleOutput::literal(vec![CssEntry::new(
        "transform-origin",
        value,
    )]))
}

fn handle_perspective(caps: &Captures, ctx: &RuleContext) -> Option<RuleOutput> {
    if ctx.theme.perspective(caps.value).is_some() {
        ctx.tracker.track("perspective", caps.value);
        return Some(RuleOutput::literal(vec![CssEntry::new(
            "perspective",
            crate::theme::generate_theme_variable("perspective", caps.value),
        )]));
    }
    let value = resolve(caps.value, PERSPECTIVE_VALUES)?.to_css();
    Some(RuleOutput::literal(vec![CssEntry::new("perspective", value)]))
}

fn handle_perspective_origin(caps: &Captures, _ctx: &RuleContext) -> Option<RuleOutput> {
    let value = resolve(caps.value, ORIGIN_VALUES)
        .map(|v| v.to_css())
        .or_else(|| {
            // Short shorthands like `tl` are too ambiguous next to arbitrary
            // values here; only spelled-out positions resolve.
            (caps.value.len() >= 3)
                .then(|| position_value(caps.value))
                .flatten()
        })?;
    Some(RuleOutput::literal(vec![CssEntry::new(
        "perspective-origin",
        value,
    )]))
}

fn handle_transform_box(caps: &Captures, _ctx: &RuleContext) -> Option<RuleOutput> {
    matches!(caps.value, "border" | "content" | "fill" | "stroke" | "view").then(|| {
        RuleOutput::literal(vec![CssEntry::new(
            "transform-box",
            format!("{}-box", caps.value),
        )])
    })
}

/// Folds an angle into the per-axis transform function (`rotateX(45deg)`).
/// Non-angle values (var()/calc() references, full functions from bracket
/// values) pass through raw.
fn fold_function(family: &str, letter: &str, value: &str) -> String {
    if is_angle(value) {
        format!("{family}{}({value})", letter.to_ascii_uppercase())
    } else {
        value.to_string()
    }
}

fn is_angle(value: &str) -> bool {
    for unit in ["deg", "grad", "rad", "turn"] {
        if let Some(body) = value.strip_suffix(unit) {
            return !body.is_empty() && body.parse::<f64>().is_ok();
        }
    }
    false
}

/// Resolves position keywords and their shorthands: `top-left` → `top left`,
/// `tl` → `top left`, `c` → `center`.
fn position_value(s: &str) -> Option<String> {
    let words: Option<Vec<&str>> = if !s.is_empty()
        && s.len() <= 2
        && s.chars().all(|c| matches!(c, 't' | 'b' | 'l' | 'r' | 'c'))
    {
        s.chars().map(position_letter).collect()
    } else {
        s.split('-').map(position_word).collect()
    };
    words.map(|w| w.join(" "))
}

fn position_letter(c: char) -> Option<&'static str> {
    match c {
        't' => Some("top"),
        'b' => Some("bottom"),
        'l' => Some("left"),
        'r' => Some("right"),
        'c' => Some("center"),
        _ => None,
    }
}

fn position_word(w: &str) -> Option<&'static str> {
    match w {
        "top" => Some("top"),
        "bottom" => Some("bottom"),
        "left" => Some("left"),
        "right" => Some("right"),
        "center" => Some("center"),
        _ => None,
    }
}
