//! Declaration model: what a matched rule emits.
//!
//! A rule produces one of three things:
//!
//! - **Nothing** — the handler declines (`None` at the call site) and the
//!   matcher falls through to the next rule.
//! - **A literal mapping** — fixed property/value pairs, e.g.
//!   `{ transform: none }`.
//! - **A composite** — groups of CSS variable assignments plus the default
//!   registrations for every custom property the emission references, so
//!   unset axes degrade to an identity transform instead of invalid CSS.
//!
//! The output pipeline that merges and serializes these lives outside this
//! crate; everything here is plain data.

use std::fmt;

/// One CSS declaration: a property name and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssEntry {
    pub property: String,
    pub value: String,
}

impl CssEntry {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for CssEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Validation flag carried on a group, passed downstream uninterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupFlag {
    /// The consuming pipeline must reject or clamp negative final values for
    /// this group's properties. Whether that happens at parse time or at
    /// output is the pipeline's contract, not this crate's.
    NoNegative,
}

/// A group of declarations emitted together, optionally tagged with a
/// validation flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub entries: Vec<CssEntry>,
    pub flag: Option<GroupFlag>,
}

impl Group {
    pub fn new(entries: Vec<CssEntry>) -> Self {
        Self { entries, flag: None }
    }

    pub fn flagged(entries: Vec<CssEntry>, flag: GroupFlag) -> Self {
        Self {
            entries,
            flag: Some(flag),
        }
    }
}

/// Default registration for a CSS custom property.
///
/// Every emission that references an axis variable carries the registration
/// for that variable. Registrations for the same name are attribute-identical
/// by construction (they come from shared constants), so downstream
/// deduplication is a plain keyed insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDefault {
    pub name: &'static str,
    pub syntax: &'static str,
    pub initial_value: &'static str,
}

impl fmt::Display for PropertyDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@property {} {{ syntax: \"{}\"; inherits: false; initial-value: {}; }}",
            self.name, self.syntax, self.initial_value
        )
    }
}

/// Everything a matched rule hands to the output pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutput {
    /// A flat property → value mapping.
    Literal(Vec<CssEntry>),
    /// Variable-assignment groups plus default registrations.
    Composite {
        groups: Vec<Group>,
        defaults: Vec<PropertyDefault>,
    },
}

impl RuleOutput {
    pub fn literal(entries: Vec<CssEntry>) -> Self {
        RuleOutput::Literal(entries)
    }

    /// Iterates every declaration in order, flattening composite groups.
    pub fn entries(&self) -> Box<dyn Iterator<Item = &CssEntry> + '_> {
        match self {
            RuleOutput::Literal(entries) => Box::new(entries.iter()),
            RuleOutput::Composite { groups, .. } => {
                Box::new(groups.iter().flat_map(|g| g.entries.iter()))
            }
        }
    }

    /// Looks up the value emitted for a property, if any.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries()
            .find(|e| e.property == property)
            .map(|e| e.value.as_str())
    }

    /// The default registrations carried by this output.
    pub fn defaults(&self) -> &[PropertyDefault] {
        match self {
            RuleOutput::Literal(_) => &[],
            RuleOutput::Composite { defaults, .. } => defaults,
        }
    }
}
