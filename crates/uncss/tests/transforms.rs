//! End-to-end behavior of the transform rule table: composition across
//! independently matched tokens, theme-driven resolution, and dependency
//! tracking.

use std::collections::HashMap;

use uncss::{transforms, PropertyDefault, RuleContext, RuleOutput, Theme, ThemeTracker};

fn ctx<'a>(theme: &'a Theme, tracker: &'a ThemeTracker) -> RuleContext<'a> {
    RuleContext { theme, tracker }
}

/// Minimal downstream consolidation: merge declaration sets and deduplicate
/// default registrations by property name, the way the output pipeline is
/// expected to.
fn consolidate(outputs: &[RuleOutput]) -> (HashMap<String, String>, HashMap<&'static str, PropertyDefault>) {
    let mut declarations = HashMap::new();
    let mut defaults: HashMap<&'static str, PropertyDefault> = HashMap::new();
    for output in outputs {
        for entry in output.entries() {
            declarations.insert(entry.property.clone(), entry.value.clone());
        }
        for default in output.defaults() {
            if let Some(existing) = defaults.get(default.name) {
                // Registrations for one name are attribute-identical.
                assert_eq!(existing, default);
            }
            defaults.insert(default.name, *default);
        }
    }
    (declarations, defaults)
}

#[test]
fn test_skew_axes_compose_order_independently() {
    let theme = Theme::default();
    let tracker = ThemeTracker::new();
    let ctx = ctx(&theme, &tracker);

    let forward = [
        transforms().apply("skew-x-12", &ctx).unwrap(),
        transforms().apply("skew-y-12", &ctx).unwrap(),
    ];
    let backward = [
        transforms().apply("skew-y-12", &ctx).unwrap(),
        transforms().apply("skew-x-12", &ctx).unwrap(),
    ];

    let (decls_fwd, defaults_fwd) = consolidate(&forward);
    let (decls_bwd, defaults_bwd) = consolidate(&backward);

    assert_eq!(decls_fwd, decls_bwd);
    assert_eq!(decls_fwd["--un-skew-x"], "skewX(12deg)");
    assert_eq!(decls_fwd["--un-skew-y"], "skewY(12deg)");
    // Both axes flow through the shared transform chain.
    let chain = &decls_fwd["transform"];
    assert!(chain.contains("var(--un-skew-x)"));
    assert!(chain.contains("var(--un-skew-y)"));
    // Setting one axis never unregisters the other's default.
    assert_eq!(defaults_fwd["--un-skew-y"].initial_value, "skewY(0deg)");
    assert_eq!(defaults_fwd, defaults_bwd);
}

#[test]
fn test_rotate_and_skew_share_one_chain() {
    let theme = Theme::default();
    let tracker = ThemeTracker::new();
    let ctx = ctx(&theme, &tracker);

    let outputs = [
        transforms().apply("rotate-x-45", &ctx).unwrap(),
        transforms().apply("skew-y-6", &ctx).unwrap(),
    ];
    let (decls, defaults) = consolidate(&outputs);

    assert_eq!(decls["--un-rotate-x"], "rotateX(45deg)");
    assert_eq!(decls["--un-skew-y"], "skewY(6deg)");
    // One aggregate `transform`, referencing both families.
    assert!(decls["transform"].contains("var(--un-rotate-x)"));
    assert!(decls["transform"].contains("var(--un-skew-y)"));
    // Identity defaults cover every referenced variable.
    for name in [
        "--un-rotate-x",
        "--un-rotate-y",
        "--un-rotate-z",
        "--un-skew-x",
        "--un-skew-y",
    ] {
        assert!(defaults.contains_key(name), "missing default for {name}");
    }
}

#[test]
fn test_translate_axes_do_not_clobber() {
    let theme = Theme::default();
    let tracker = ThemeTracker::new();
    let ctx = ctx(&theme, &tracker);

    let outputs = [
        transforms().apply("translate-x-4", &ctx).unwrap(),
        transforms().apply("translate-y-1/2", &ctx).unwrap(),
    ];
    let (decls, _) = consolidate(&outputs);

    assert_eq!(decls["--un-translate-x"], "calc(var(--spacing) * 4)");
    assert_eq!(decls["--un-translate-y"], "50%");
    assert_eq!(decls["translate"], "var(--un-translate-x) var(--un-translate-y)");
}

#[test]
fn test_shorthand_paths_have_no_variable_side_effects() {
    let theme = Theme::default();
    let tracker = ThemeTracker::new();
    let ctx = ctx(&theme, &tracker);

    for (token, property) in [
        ("translate-none", "translate"),
        ("rotate-none", "rotate"),
        ("scale-none", "scale"),
        ("rotate-45", "rotate"),
    ] {
        let out = transforms().apply(token, &ctx).unwrap();
        assert!(matches!(out, RuleOutput::Literal(_)), "{token} should be literal");
        assert!(out.get(property).is_some());
        assert!(out.defaults().is_empty());
        assert_eq!(out.entries().count(), 1, "{token} leaked extra declarations");
    }
}

#[test]
fn test_theme_from_yaml_drives_perspective() {
    let theme = Theme::from_yaml(
        r#"
perspective:
  cinematic: 80px
"#,
    )
    .unwrap();
    let tracker = ThemeTracker::new();
    let ctx = ctx(&theme, &tracker);

    let out = transforms().apply("perspective-cinematic", &ctx).unwrap();
    assert_eq!(out.get("perspective"), Some("var(--un-perspective-cinematic)"));

    // The built-in scale is not implied by a loaded theme; unknown keys fall
    // back to value resolution, and `near` is not numeric.
    assert!(transforms().apply("perspective-near", &ctx).is_none());

    assert_eq!(
        tracker.used(),
        vec![("perspective".to_string(), "cinematic".to_string())]
    );
}

#[test]
fn test_tracker_accumulates_across_tokens() {
    let theme = Theme::default();
    let tracker = ThemeTracker::new();
    let ctx = ctx(&theme, &tracker);

    transforms().apply("perspective-near", &ctx).unwrap();
    transforms().apply("translate-x-4", &ctx).unwrap();
    transforms().apply("translate-x-1/2", &ctx).unwrap();

    assert_eq!(
        tracker.used(),
        vec![
            ("perspective".to_string(), "near".to_string()),
            ("spacing".to_string(), "DEFAULT".to_string()),
        ]
    );
}
