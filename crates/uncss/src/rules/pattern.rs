//! Structural matching of utility tokens.
//!
//! Tokens are decomposed by prefix/stem/axis shape rather than a textual
//! pattern language: an optional `transform-` prefix, a family stem (with
//! aliases, e.g. `perspective`/`perspect`), an optional axis letter, and the
//! remaining value. Patterns with different shapes are mutually exclusive by
//! construction; where two rules could both structurally match a token, the
//! rule registered first wins.

/// Which axis variable slots a matched token writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// No explicit axis: the value applies to every axis the family owns,
    /// or positionally when it is a top-level comma list.
    None,
    X,
    Y,
    Z,
}

impl Direction {
    /// The axis letter, as used in CSS variable names.
    pub fn letter(&self) -> &'static str {
        match self {
            Direction::None => "",
            Direction::X => "x",
            Direction::Y => "y",
            Direction::Z => "z",
        }
    }
}

/// The axis segment a pattern expects between stem and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisShape {
    /// No axis letter: `translate-4`.
    NoAxis,
    /// A required `x` or `y`: `skew-x-12`.
    Xy,
    /// A required `x`, `y`, or `z`: `translate-z-4`.
    Xyz,
}

/// Capture groups from a structural match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captures<'a> {
    pub direction: Direction,
    pub value: &'a str,
}

/// A structural token pattern: optional `transform-` prefix, one of several
/// stem spellings, an axis shape, and a non-empty value.
#[derive(Debug, Clone, Copy)]
pub struct UtilityPattern {
    transform_prefix: bool,
    stems: &'static [&'static str],
    axis: AxisShape,
}

impl UtilityPattern {
    pub const fn new(
        transform_prefix: bool,
        stems: &'static [&'static str],
        axis: AxisShape,
    ) -> Self {
        Self {
            transform_prefix,
            stems,
            axis,
        }
    }

    /// Matches a token against this pattern, returning the captured axis and
    /// value. Purely structural: whether the value resolves is the handler's
    /// concern.
    pub fn matches<'a>(&self, token: &'a str) -> Option<Captures<'a>> {
        let token = if self.transform_prefix {
            token.strip_prefix("transform-").unwrap_or(token)
        } else {
            token
        };

        let rest = self
            .stems
            .iter()
            .find_map(|stem| token.strip_prefix(stem).and_then(|r| r.strip_prefix('-')))?;

        match self.axis {
            AxisShape::NoAxis => (!rest.is_empty()).then_some(Captures {
                direction: Direction::None,
                value: rest,
            }),
            AxisShape::Xy | AxisShape::Xyz => {
                let axis = rest.get(..2)?;
                let value = &rest[2..];
                let direction = match axis {
                    "x-" => Direction::X,
                    "y-" => Direction::Y,
                    "z-" if self.axis == AxisShape::Xyz => Direction::Z,
                    _ => return None,
                };
                (!value.is_empty()).then_some(Captures { direction, value })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSLATE_AXIS: UtilityPattern =
        UtilityPattern::new(true, &["translate"], AxisShape::Xyz);
    const TRANSLATE_BARE: UtilityPattern =
        UtilityPattern::new(true, &["translate"], AxisShape::NoAxis);
    const SKEW_AXIS: UtilityPattern = UtilityPattern::new(true, &["skew"], AxisShape::Xy);

    #[test]
    fn test_axis_match() {
        let caps = TRANSLATE_AXIS.matches("translate-x-4").unwrap();
        assert_eq!(caps.direction, Direction::X);
        assert_eq!(caps.value, "4");

        let caps = TRANSLATE_AXIS.matches("translate-z-[10px]").unwrap();
        assert_eq!(caps.direction, Direction::Z);
        assert_eq!(caps.value, "[10px]");
    }

    #[test]
    fn test_optional_prefix() {
        let caps = TRANSLATE_AXIS.matches("transform-translate-y-2").unwrap();
        assert_eq!(caps.direction, Direction::Y);
        assert_eq!(caps.value, "2");
    }

    #[test]
    fn test_bare_match() {
        let caps = TRANSLATE_BARE.matches("translate-4").unwrap();
        assert_eq!(caps.direction, Direction::None);
        assert_eq!(caps.value, "4");
    }

    #[test]
    fn test_axis_shapes_are_exclusive() {
        // The axis pattern requires the letter; the bare pattern sees it as
        // part of the value (and its handler then declines on resolution).
        assert!(TRANSLATE_AXIS.matches("translate-4").is_none());
        let caps = TRANSLATE_BARE.matches("translate-x-4").unwrap();
        assert_eq!(caps.value, "x-4");
    }

    #[test]
    fn test_xy_rejects_z() {
        assert!(SKEW_AXIS.matches("skew-z-12").is_none());
        assert!(SKEW_AXIS.matches("skew-x-12").is_some());
    }

    #[test]
    fn test_no_value_no_match() {
        assert!(TRANSLATE_BARE.matches("translate-").is_none());
        assert!(TRANSLATE_BARE.matches("translate").is_none());
        assert!(TRANSLATE_AXIS.matches("translate-x-").is_none());
        assert!(TRANSLATE_AXIS.matches("translate-x").is_none());
    }

    #[test]
    fn test_stem_aliases() {
        let pat = UtilityPattern::new(true, &["perspective", "perspect"], AxisShape::NoAxis);
        assert_eq!(pat.matches("perspective-800").unwrap().value, "800");
        assert_eq!(pat.matches("perspect-800").unwrap().value, "800");
        assert!(pat.matches("perspectives-800").is_none());
    }
}
