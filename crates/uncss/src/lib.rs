//! # uncss - Atomic CSS Rule Engine
//!
//! `uncss` resolves atomic utility tokens (`translate-x-4`, `rotate-45`,
//! `scale-[1.5]`) into structured CSS declaration sets. Its centerpiece is
//! the transform rule family: independent utilities for translate, rotate,
//! scale, and skew that compose into one coherent result through `--un-*`
//! CSS custom properties, so one axis's utility never clobbers another's.
//!
//! ## Core Concepts
//!
//! - [`RuleSet`]: ordered rule table, first-match-wins with decline
//!   fallthrough
//! - [`RuleOutput`]: what a matched rule emits — a literal mapping, or
//!   variable-assignment groups plus default registrations
//! - [`Theme`]: read-only design values consulted during matching, loadable
//!   from YAML
//! - [`ThemeTracker`]: records which theme values a generation depended on
//! - [`transforms`]: the built-in transform rule table
//!
//! ## Quick Start
//!
//! ```rust
//! use uncss::{transforms, RuleContext, Theme, ThemeTracker};
//!
//! let theme = Theme::default();
//! let tracker = ThemeTracker::new();
//! let ctx = RuleContext { theme: &theme, tracker: &tracker };
//!
//! let out = transforms().apply("translate-x-4", &ctx).unwrap();
//! assert_eq!(
//!     out.get("--un-translate-x"),
//!     Some("calc(var(--spacing) * 4)")
//! );
//! assert_eq!(
//!     out.get("translate"),
//!     Some("var(--un-translate-x) var(--un-translate-y)")
//! );
//!
//! // Tokens no rule accepts resolve to None; reporting is the caller's.
//! assert!(transforms().apply("translate-x-bogus", &ctx).is_none());
//! ```
//!
//! ## Composition Model
//!
//! Handlers never write the final transform value directly. They assign the
//! per-axis custom properties and recompose the aggregate property
//! (`translate`, `scale`, or `transform`) as a `var()` expression over all
//! axes, carrying identity defaults for every variable referenced. Unset
//! axes therefore degrade to a neutral transform instead of invalid CSS,
//! and utilities for different axes merge cleanly regardless of order.
//!
//! Matching is synchronous and pure: a handler is a function of the token
//! captures and a read-only theme snapshot. Failure is expressed as decline
//! (`None`), never as an error — the surrounding engine decides how to
//! report unrecognized utilities.

pub mod declaration;
pub mod error;
pub mod rules;
pub mod theme;

pub use declaration::{CssEntry, Group, GroupFlag, PropertyDefault, RuleOutput};
pub use error::ThemeError;
pub use rules::transforms::{transform_rules, transforms};
pub use rules::{
    global_keyword_rules, AxisShape, Captures, Direction, Rule, RuleContext, RuleHandler,
    RuleMeta, RuleSet, UtilityPattern,
};
pub use theme::{generate_theme_variable, Theme, ThemeTracker};
