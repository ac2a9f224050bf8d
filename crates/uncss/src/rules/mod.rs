//! Rule table and first-match-wins resolution.
//!
//! A [`RuleSet`] is an ordered list of rules. Each rule is either *static*
//! (a fixed token name mapped to fixed declarations) or *dynamic* (a
//! structural [`UtilityPattern`] plus a handler). Resolution scans the list
//! top to bottom; a dynamic rule whose handler declines does not stop the
//! scan, so later rules can claim the token. A token no rule accepts yields
//! `None` and the surrounding engine decides how to report it.
//!
//! Rules carry autocomplete metadata: human-readable shape templates for
//! editor tooling. The templates are suggestions only, never consulted
//! during matching.

pub mod pattern;
pub mod transforms;

use crate::declaration::{CssEntry, RuleOutput};
use crate::theme::{Theme, ThemeTracker};

pub use pattern::{AxisShape, Captures, Direction, UtilityPattern};

/// Read-only context handed to dynamic rule handlers.
pub struct RuleContext<'a> {
    pub theme: &'a Theme,
    pub tracker: &'a ThemeTracker,
}

/// Handler for a dynamic rule. Returning `None` means "this pattern does not
/// apply to this token value" and the matcher falls through.
pub type RuleHandler = fn(&Captures, &RuleContext) -> Option<RuleOutput>;

/// Autocomplete metadata attached to a rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleMeta {
    /// Utility shape templates, e.g. `"translate-(x|y|z)-<num>"`.
    pub autocomplete: &'static [&'static str],
}

enum RuleKind {
    Static {
        name: String,
        entries: Vec<CssEntry>,
    },
    Dynamic {
        pattern: UtilityPattern,
        handler: RuleHandler,
    },
}

/// One entry of the ordered rule table.
pub struct Rule {
    kind: RuleKind,
    meta: RuleMeta,
}

impl Rule {
    /// A static rule: fixed token, fixed declarations, no resolution.
    pub fn fixed(name: impl Into<String>, entries: Vec<CssEntry>) -> Self {
        Self {
            kind: RuleKind::Static {
                name: name.into(),
                entries,
            },
            meta: RuleMeta::default(),
        }
    }

    /// A dynamic rule: structural pattern plus handler.
    pub fn dynamic(pattern: UtilityPattern, handler: RuleHandler) -> Self {
        Self {
            kind: RuleKind::Dynamic { pattern, handler },
            meta: RuleMeta::default(),
        }
    }

    /// Attaches autocomplete templates (builder style).
    pub fn autocomplete(mut self, templates: &'static [&'static str]) -> Self {
        self.meta.autocomplete = templates;
        self
    }
}

/// Ordered, first-match-wins rule table.
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Resolves a token against the table. First structural match whose
    /// handler produces output wins; handler declines fall through.
    pub fn apply(&self, token: &str, ctx: &RuleContext) -> Option<RuleOutput> {
        for rule in &self.rules {
            match &rule.kind {
                RuleKind::Static { name, entries } if name == token => {
                    return Some(RuleOutput::Literal(entries.clone()));
                }
                RuleKind::Static { .. } => {}
                RuleKind::Dynamic { pattern, handler } => {
                    if let Some(captures) = pattern.matches(token) {
                        if let Some(output) = handler(&captures, ctx) {
                            return Some(output);
                        }
                    }
                }
            }
        }
        None
    }

    /// All autocomplete templates, in rule order.
    pub fn autocomplete(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .flat_map(|r| r.meta.autocomplete.iter().copied())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Static-rule factory: the CSS-wide keyword variants of a property
/// (`transform-inherit`, `transform-initial`, ...).
pub fn global_keyword_rules(property: &'static str) -> Vec<Rule> {
    ["inherit", "initial", "revert", "revert-layer", "unset"]
        .into_iter()
        .map(|keyword| {
            Rule::fixed(
                format!("{property}-{keyword}"),
                vec![CssEntry::new(property, keyword)],
            )
        })
        .collect()
}
