/// Variant resolution integration tests — built-in schemas, presets and RON schemas.

use post_composer::core::theme::ThemeRegistry;
use post_composer::core::variants::{CompoundVariant, VariantResolver, VariantSchema};
use post_composer::schema::config::{partial, selection, ConfigValue, Selection};
use post_composer::schema::style::{EmojiLevel, PostType, Structure};
use post_composer::{ComposablePost, Theme};
use indexmap::IndexMap;
use std::path::Path;

#[test]
fn explicit_selection_beats_base_and_theme() {
    let schema = VariantSchema {
        base: partial(&[("emoji_level", "none")]),
        variants: IndexMap::from([(
            "g".to_string(),
            IndexMap::from([("o".to_string(), partial(&[("emoji_level", "minimal")]))]),
        )]),
        compound_variants: Vec::new(),
        default_variant: Selection::new(),
    };
    let theme = Theme::new("t", "T").with_emoji_level(EmojiLevel::Heavy);

    let chosen = VariantResolver::resolve(&schema, &selection(&[("g", "o")]), Some(&theme));
    assert_eq!(chosen.get_str("emoji_level"), Some("minimal"));

    let unchosen = VariantResolver::resolve(&schema, &Selection::new(), Some(&theme));
    assert_eq!(unchosen.get_str("emoji_level"), Some("heavy"));
}

#[test]
fn multiple_compounds_apply_in_declaration_order() {
    let mut schema = VariantSchema::text_post();
    schema.compound_variants.push(CompoundVariant {
        conditions: selection(&[("style", "story")]),
        applies: partial(&[("cta_style", "direct")]),
    });

    let config = VariantResolver::resolve(
        &schema,
        &selection(&[("style", "story"), ("tone", "inspiring")]),
        None,
    );
    assert_eq!(config.get_str("cta_style"), Some("direct"));
    assert_eq!(config.get_str("vulnerability_level"), Some("raw"));
}

#[test]
fn preset_theme_fills_unselected_keys() {
    let registry = ThemeRegistry::with_presets().unwrap();
    let storyteller = registry.require("storyteller").unwrap();
    let schema = VariantResolver::all_variants(PostType::Text);

    let config = VariantResolver::resolve(
        &schema,
        &selection(&[("length", "short")]),
        Some(storyteller.as_ref()),
    );
    assert_eq!(config.get_str("line_break_style"), Some("relaxed"));
    assert_eq!(config.get_str("hook_style"), Some("story"));
    assert_eq!(config.get_str("cta_style"), Some("soft"));
    assert_eq!(config.get_str("type"), Some("text"));
    assert_eq!(config.get_int("max_length"), Some(3000));
}

#[test]
fn suggested_selection_drives_body_structure() {
    let schema = VariantSchema::text_post();
    let selected = VariantResolver::suggest_variants(PostType::Text, "community");
    let config = VariantResolver::resolve(&schema, &selected, None);
    assert_eq!(config.parse::<Structure>("structure"), Some(Structure::StoryArc));

    let mut post = ComposablePost::new(PostType::Text).with_config(config);
    post.add_body("Start.\n\nMiddle.\n\nEnd.", None);
    assert_eq!(post.compose().unwrap(), "Start.\n\nMiddle.\n\nEnd.");
}

#[test]
fn poll_and_document_defaults() {
    let poll = VariantResolver::resolve_defaults(&VariantSchema::poll_post(), None);
    assert_eq!(poll.get_str("question_style"), Some("provocative"));
    assert_eq!(poll.get_int("options_count"), Some(2));
    assert_eq!(poll.get_int("duration_days"), Some(3));

    let document = VariantResolver::resolve_defaults(&VariantSchema::document_post(), None);
    assert_eq!(document.get_str("layout"), Some("educational"));
    assert_eq!(document.get("visual_ratio"), Some(&ConfigValue::Float(0.4)));
    assert_eq!(document.get_bool("branding"), Some(true));
}

#[test]
fn ron_schema_resolves_like_builtin() {
    let schema = VariantSchema::load_from_ron(Path::new("tests/fixtures/test_schema.ron")).unwrap();
    let defaults = VariantResolver::resolve_defaults(&schema, None);
    assert_eq!(defaults.get_str("structure"), Some("listicle"));
    assert!(!defaults.contains_key("bonus"));

    let story = VariantResolver::resolve(&schema, &selection(&[("style", "story")]), None);
    assert_eq!(story.get("ideal_length").and_then(ConfigValue::as_range), Some((1000, 2000)));
    assert!(!story.contains_key("bonus"));
}
