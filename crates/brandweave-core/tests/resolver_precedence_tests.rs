// Test suite for hierarchy precedence enforcement
// Later (more specific) levels override earlier ones for the same token key;
// priority breaks ties within a level.

mod common;

use brandweave_core::{resolve_branding, HierarchyLevel, TokenValue};
use common::{test_context, test_layer};

#[test]
fn test_full_precedence_ladder() {
    let context = test_context("tenant-1")
        .with_partner("partner-1")
        .with_suite("crm")
        .with_component("login");

    // One layer per level, every layer supplying the same key
    let layers = vec![
        test_layer("l-system", HierarchyLevel::System, 0).with_token("color.primary", "system"),
        test_layer("l-partner", HierarchyLevel::Partner, 0)
            .with_partner("partner-1")
            .with_token("color.primary", "partner"),
        test_layer("l-tenant", HierarchyLevel::Tenant, 0)
            .with_tenant("tenant-1")
            .with_token("color.primary", "tenant"),
        test_layer("l-suite", HierarchyLevel::Suite, 0)
            .with_suite("crm")
            .with_token("color.primary", "suite"),
        test_layer("l-component", HierarchyLevel::Component, 0)
            .with_component("login")
            .with_token("color.primary", "component"),
        test_layer("l-contextual", HierarchyLevel::Contextual, 0)
            .with_token("color.primary", "contextual"),
    ];

    let resolved = resolve_branding(&context, &layers).unwrap();

    let token = &resolved.tokens["color.primary"];
    assert_eq!(token.value, TokenValue::from("contextual"));
    assert_eq!(token.source_level, HierarchyLevel::Contextual);
    assert_eq!(token.source_layer, "l-contextual");
    assert_eq!(resolved.applied_layers.len(), 6);
}

#[test]
fn test_each_level_beats_all_less_specific_ones() {
    let context = test_context("tenant-1")
        .with_partner("partner-1")
        .with_suite("crm")
        .with_component("login");

    let ladder = [
        ("l-system", HierarchyLevel::System),
        ("l-partner", HierarchyLevel::Partner),
        ("l-tenant", HierarchyLevel::Tenant),
        ("l-suite", HierarchyLevel::Suite),
        ("l-component", HierarchyLevel::Component),
        ("l-contextual", HierarchyLevel::Contextual),
    ];

    // Grow the layer set one level at a time; the newest level must win each time
    let mut layers = Vec::new();
    for (id, level) in ladder {
        let mut layer = test_layer(id, level, 0).with_token("k", id);
        match level {
            HierarchyLevel::Partner => layer = layer.with_partner("partner-1"),
            HierarchyLevel::Tenant => layer = layer.with_tenant("tenant-1"),
            HierarchyLevel::Suite => layer = layer.with_suite("crm"),
            HierarchyLevel::Component => layer = layer.with_component("login"),
            _ => {}
        }
        layers.push(layer);

        let resolved = resolve_branding(&context, &layers).unwrap();
        assert_eq!(resolved.tokens["k"].value, TokenValue::from(id));
        assert_eq!(resolved.tokens["k"].source_level, level);
    }
}

#[test]
fn test_tenant_wins_over_system_when_only_those_present() {
    let context = test_context("tenant-1");
    let layers = vec![
        test_layer("l-system", HierarchyLevel::System, 0).with_token("logo.url", "default.svg"),
        test_layer("l-tenant", HierarchyLevel::Tenant, 0)
            .with_tenant("tenant-1")
            .with_token("logo.url", "acme.svg"),
    ];

    let resolved = resolve_branding(&context, &layers).unwrap();
    assert_eq!(resolved.tokens["logo.url"].value, TokenValue::from("acme.svg"));
    assert_eq!(resolved.tokens["logo.url"].source_level, HierarchyLevel::Tenant);
}

#[test]
fn test_priority_breaks_ties_within_a_level() {
    let context = test_context("tenant-1");
    // Same level, same scope, differing only in priority; input order reversed
    // to prove the sort (not the input) decides
    let layers = vec![
        test_layer("l-high", HierarchyLevel::System, 10).with_token("spacing.base", 8),
        test_layer("l-low", HierarchyLevel::System, 1).with_token("spacing.base", 4),
    ];

    let resolved = resolve_branding(&context, &layers).unwrap();
    assert_eq!(resolved.tokens["spacing.base"].value, TokenValue::from(8));
    assert_eq!(resolved.tokens["spacing.base"].source_layer, "l-high");
    // Lower priority applies first
    assert_eq!(resolved.applied_layers, vec!["l-low", "l-high"]);
}

#[test]
fn test_level_beats_priority() {
    let context = test_context("tenant-1");
    let layers = vec![
        test_layer("l-system", HierarchyLevel::System, 1000).with_token("k", "system"),
        test_layer("l-contextual", HierarchyLevel::Contextual, 0).with_token("k", "contextual"),
    ];

    let resolved = resolve_branding(&context, &layers).unwrap();
    // Hierarchy level is the primary key; priority only breaks ties within one
    assert_eq!(resolved.tokens["k"].value, TokenValue::from("contextual"));
}

#[test]
fn test_non_overlapping_keys_all_survive() {
    let context = test_context("tenant-1");
    let layers = vec![
        test_layer("l1", HierarchyLevel::System, 0)
            .with_token("color.primary", "#000000")
            .with_token("color.secondary", "#ffffff"),
        test_layer("l2", HierarchyLevel::Contextual, 0).with_token("color.primary", "#123456"),
    ];

    let resolved = resolve_branding(&context, &layers).unwrap();
    assert_eq!(resolved.tokens.len(), 2);
    assert_eq!(resolved.tokens["color.primary"].value, TokenValue::from("#123456"));
    // Keys the winning layer does not supply keep their earlier value
    assert_eq!(
        resolved.tokens["color.secondary"].value,
        TokenValue::from("#ffffff")
    );
    assert_eq!(resolved.tokens["color.secondary"].source_layer, "l1");
}
