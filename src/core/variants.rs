/// Variant schemas and the resolver that flattens a selection into one config.
///
/// Resolution is layered and order-sensitive:
///
/// 1. the schema's `base`,
/// 2. each selected `(group, option)` in caller order (later groups win),
/// 3. every compound rule whose conditions all match, in declaration order,
/// 4. theme-derived properties, only for keys steps 2 and 3 did not set.
///
/// Explicit caller intent therefore always beats ambient theme preference.
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::theme::Theme;
use crate::schema::config::{selection, ConfigValue, PartialConfig, ResolvedConfig, Selection};
use crate::schema::style::PostType;

#[derive(Debug, Error)]
pub enum VariantError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Extra properties applied when a specific combination of options is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundVariant {
    pub conditions: Selection,
    pub applies: PartialConfig,
}

impl CompoundVariant {
    /// True when every condition is present and equal in `selected`.
    /// Selections for groups the rule does not mention are ignored.
    pub fn matches(&self, selected: &Selection) -> bool {
        self.conditions
            .iter()
            .all(|(group, option)| selected.get(group) == Some(option))
    }
}

/// Declarative description of one post type's configuration space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSchema {
    pub base: PartialConfig,
    /// group → option → properties
    pub variants: IndexMap<String, IndexMap<String, PartialConfig>>,
    #[serde(default)]
    pub compound_variants: Vec<CompoundVariant>,
    #[serde(default)]
    pub default_variant: Selection,
}

macro_rules! config {
    ($($key:literal => $value:expr),* $(,)?) => {{
        let mut partial = PartialConfig::new();
        $( partial.insert($key.to_string(), ConfigValue::from($value)); )*
        partial
    }};
}

fn group(options: Vec<(&str, PartialConfig)>) -> IndexMap<String, PartialConfig> {
    options
        .into_iter()
        .map(|(name, partial)| (name.to_string(), partial))
        .collect()
}

impl VariantSchema {
    /// Load a schema from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<VariantSchema, VariantError> {
        let contents = std::fs::read_to_string(path)?;
        let schema = Self::parse_ron(&contents)?;
        log::info!(
            "loaded variant schema with {} groups from {}",
            schema.variants.len(),
            path.display()
        );
        Ok(schema)
    }

    pub fn parse_ron(input: &str) -> Result<VariantSchema, VariantError> {
        Ok(ron::from_str(input)?)
    }

    pub fn for_post_type(post_type: PostType) -> VariantSchema {
        match post_type {
            PostType::Text => Self::text_post(),
            PostType::Poll => Self::poll_post(),
            PostType::Document => Self::document_post(),
        }
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.variants.keys().map(String::as_str).collect()
    }

    pub fn options(&self, group: &str) -> Vec<&str> {
        self.variants
            .get(group)
            .map(|options| options.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn text_post() -> VariantSchema {
        let style = group(vec![
            (
                "story",
                config! {
                    "structure" => "story_arc",
                    "emoji_level" => "moderate",
                    "line_break_style" => "generous",
                    "paragraph_length" => "tight",
                    "ideal_length" => (1000, 2000),
                    "hook_style" => "story",
                    "vulnerability_required" => true,
                },
            ),
            (
                "insight",
                config! {
                    "structure" => "framework",
                    "emoji_level" => "minimal",
                    "line_break_style" => "relaxed",
                    "paragraph_length" => "standard",
                    "ideal_length" => (300, 800),
                    "hook_style" => "stat",
                    "credibility_markers" => true,
                },
            ),
            (
                "question",
                config! {
                    "structure" => "question_based",
                    "emoji_level" => "moderate",
                    "line_break_style" => "relaxed",
                    "paragraph_length" => "tight",
                    "ideal_length" => (50, 200),
                    "hook_style" => "question",
                    "requires_cta" => true,
                },
            ),
            (
                "listicle",
                config! {
                    "structure" => "listicle",
                    "emoji_level" => "minimal",
                    "line_break_style" => "relaxed",
                    "paragraph_length" => "tight",
                    "ideal_length" => (200, 600),
                    "hook_style" => "list",
                    "numbered" => true,
                },
            ),
            (
                "hot_take",
                config! {
                    "structure" => "linear",
                    "emoji_level" => "minimal",
                    "line_break_style" => "generous",
                    "paragraph_length" => "tight",
                    "ideal_length" => (100, 400),
                    "hook_style" => "controversy",
                    "controversy_level" => "bold",
                },
            ),
        ]);

        let tone = group(vec![
            (
                "professional",
                config! {
                    "formality" => "formal",
                    "emoji_level" => "none",
                    "humor_level" => "none",
                    "vulnerability_level" => "guarded",
                },
            ),
            (
                "conversational",
                config! {
                    "formality" => "conversational",
                    "emoji_level" => "moderate",
                    "humor_level" => "subtle",
                    "vulnerability_level" => "selective",
                },
            ),
            (
                "casual",
                config! {
                    "formality" => "friendly",
                    "emoji_level" => "moderate",
                    "humor_level" => "moderate",
                    "vulnerability_level" => "open",
                },
            ),
            (
                "inspiring",
                config! {
                    "formality" => "friendly",
                    "emoji_level" => "expressive",
                    "humor_level" => "subtle",
                    "vulnerability_level" => "open",
                    "emotion" => "warm",
                },
            ),
            (
                "humorous",
                config! {
                    "formality" => "casual",
                    "emoji_level" => "expressive",
                    "humor_level" => "frequent",
                    "vulnerability_level" => "open",
                },
            ),
        ]);

        let length = group(vec![
            (
                "micro",
                config! {
                    "ideal_length" => (50, 150),
                    "line_break_style" => "standard",
                    "paragraph_length" => "tight",
                    "hook_required" => true,
                },
            ),
            (
                "short",
                config! {
                    "ideal_length" => (150, 300),
                    "line_break_style" => "relaxed",
                    "paragraph_length" => "tight",
                },
            ),
            (
                "medium",
                config! {
                    "ideal_length" => (300, 800),
                    "line_break_style" => "relaxed",
                    "paragraph_length" => "standard",
                },
            ),
            (
                "long",
                config! {
                    "ideal_length" => (800, 1500),
                    "line_break_style" => "generous",
                    "paragraph_length" => "standard",
                    "structure_required" => true,
                },
            ),
            (
                "story",
                config! {
                    "ideal_length" => (1000, 3000),
                    "line_break_style" => "extreme",
                    "paragraph_length" => "loose",
                    "structure" => "story_arc",
                },
            ),
        ]);

        VariantSchema {
            base: config! {
                "type" => "text",
                "max_length" => 3000,
                "has_media" => false,
            },
            variants: IndexMap::from([
                ("style".to_string(), style),
                ("tone".to_string(), tone),
                ("length".to_string(), length),
            ]),
            compound_variants: vec![
                CompoundVariant {
                    conditions: selection(&[("style", "story"), ("tone", "inspiring")]),
                    applies: config! {
                        "emoji_level" => "expressive",
                        "line_break_style" => "extreme",
                        "vulnerability_level" => "raw",
                        "cta_style" => "soft",
                    },
                },
                CompoundVariant {
                    conditions: selection(&[("style", "hot_take"), ("tone", "professional")]),
                    applies: config! {
                        "emoji_level" => "none",
                        "line_break_style" => "generous",
                        "controversy_level" => "mild",
                        "cta_style" => "curiosity",
                    },
                },
                CompoundVariant {
                    conditions: selection(&[("style", "listicle"), ("length", "long")]),
                    applies: config! {
                        "numbered" => true,
                        "visual_symbols" => true,
                        "line_break_style" => "relaxed",
                        "paragraph_length" => "tight",
                    },
                },
                CompoundVariant {
                    conditions: selection(&[("tone", "humorous"), ("length", "micro")]),
                    applies: config! {
                        "structure" => "linear",
                        "hook_style" => "curiosity",
                        "cta_style" => "share",
                    },
                },
            ],
            default_variant: selection(&[
                ("style", "insight"),
                ("tone", "conversational"),
                ("length", "medium"),
            ]),
        }
    }

    pub fn poll_post() -> VariantSchema {
        let purpose = group(vec![
            (
                "engagement",
                config! {
                    "question_style" => "provocative",
                    "duration_days" => 3,
                    "commentary_length" => "short",
                    "follow_up_required" => true,
                },
            ),
            (
                "research",
                config! {
                    "question_style" => "neutral",
                    "duration_days" => 7,
                    "commentary_length" => "medium",
                    "results_post_required" => true,
                },
            ),
            (
                "decision",
                config! {
                    "question_style" => "help_seeking",
                    "duration_days" => 3,
                    "commentary_length" => "medium",
                    "vulnerability_level" => "open",
                },
            ),
            (
                "fun",
                config! {
                    "question_style" => "playful",
                    "duration_days" => 1,
                    "commentary_length" => "micro",
                    "emoji_level" => "expressive",
                },
            ),
        ]);

        let question_type = group(vec![
            (
                "binary",
                config! {
                    "options_count" => 2,
                    "controversy_potential" => "high",
                },
            ),
            (
                "multiple_choice",
                config! {
                    "options_count" => (3, 4),
                    "include_other" => true,
                },
            ),
        ]);

        VariantSchema {
            base: config! {
                "type" => "poll",
                "options_range" => (2, 4),
                "duration_days" => (1, 14),
            },
            variants: IndexMap::from([
                ("purpose".to_string(), purpose),
                ("question_type".to_string(), question_type),
            ]),
            compound_variants: Vec::new(),
            default_variant: selection(&[("purpose", "engagement"), ("question_type", "binary")]),
        }
    }

    pub fn document_post() -> VariantSchema {
        let content_type = group(vec![
            (
                "guide",
                config! {
                    "slide_count" => (7, 10),
                    "layout" => "educational",
                    "text_density" => "medium",
                    "visual_ratio" => 0.4,
                },
            ),
            (
                "checklist",
                config! {
                    "slide_count" => (5, 8),
                    "layout" => "list_based",
                    "text_density" => "low",
                    "visual_ratio" => 0.3,
                    "checkboxes" => true,
                },
            ),
            (
                "stats",
                config! {
                    "slide_count" => (5, 7),
                    "layout" => "data_focused",
                    "text_density" => "low",
                    "visual_ratio" => 0.7,
                    "charts_required" => true,
                },
            ),
            (
                "report",
                config! {
                    "slide_count" => (8, 10),
                    "layout" => "professional",
                    "text_density" => "high",
                    "visual_ratio" => 0.5,
                    "credibility_markers" => true,
                },
            ),
        ]);

        let design_style = group(vec![
            (
                "minimal",
                config! {
                    "color_count" => 2,
                    "font_count" => 1,
                    "decoration" => "none",
                    "white_space" => "high",
                },
            ),
            (
                "professional",
                config! {
                    "color_count" => 3,
                    "font_count" => 2,
                    "decoration" => "subtle",
                    "white_space" => "medium",
                    "branding" => true,
                },
            ),
            (
                "vibrant",
                config! {
                    "color_count" => 5,
                    "font_count" => 2,
                    "decoration" => "bold",
                    "white_space" => "low",
                    "gradients" => true,
                },
            ),
        ]);

        VariantSchema {
            base: config! {
                "type" => "document",
                "format" => "pdf",
                "slide_limit" => (5, 10),
            },
            variants: IndexMap::from([
                ("content_type".to_string(), content_type),
                ("design_style".to_string(), design_style),
            ]),
            compound_variants: Vec::new(),
            default_variant: selection(&[
                ("content_type", "guide"),
                ("design_style", "professional"),
            ]),
        }
    }
}

/// Stateless resolution and lookup over variant schemas.
pub struct VariantResolver;

impl VariantResolver {
    /// Flatten `selected` against `schema`, backfilling from `theme`.
    ///
    /// Unknown groups or options are skipped; resolution never fails.
    pub fn resolve(
        schema: &VariantSchema,
        selected: &Selection,
        theme: Option<&Theme>,
    ) -> ResolvedConfig {
        let mut result = ResolvedConfig::from(schema.base.clone());
        let mut explicit: FxHashSet<&str> = FxHashSet::default();

        for (group, option) in selected {
            match schema.variants.get(group).and_then(|opts| opts.get(option)) {
                Some(partial) => {
                    for (key, value) in partial {
                        result.insert(key.clone(), value.clone());
                        explicit.insert(key.as_str());
                    }
                }
                None => log::debug!("ignoring unknown variant selection {}={}", group, option),
            }
        }

        for compound in &schema.compound_variants {
            if compound.matches(selected) {
                log::debug!("applying compound variant {:?}", compound.conditions);
                for (key, value) in &compound.applies {
                    result.insert(key.clone(), value.clone());
                    explicit.insert(key.as_str());
                }
            }
        }

        if let Some(theme) = theme {
            for (key, value) in theme.derived_properties() {
                if !explicit.contains(key) {
                    result.insert(key.to_string(), ConfigValue::from(value));
                }
            }
        }

        result
    }

    /// Resolve the schema's own default selection.
    pub fn resolve_defaults(schema: &VariantSchema, theme: Option<&Theme>) -> ResolvedConfig {
        Self::resolve(schema, &schema.default_variant, theme)
    }

    /// Recommended selection for a goal. Unknown goals yield an empty selection.
    pub fn suggest_variants(post_type: PostType, goal: &str) -> Selection {
        let pairs: &[(&str, &str)] = match (post_type, goal) {
            (PostType::Text, "authority") => {
                &[("style", "insight"), ("tone", "professional"), ("length", "medium")]
            }
            (PostType::Text, "engagement") => {
                &[("style", "question"), ("tone", "conversational"), ("length", "short")]
            }
            (PostType::Text, "virality") => {
                &[("style", "hot_take"), ("tone", "conversational"), ("length", "micro")]
            }
            (PostType::Text, "community") => {
                &[("style", "story"), ("tone", "inspiring"), ("length", "long")]
            }
            (PostType::Document, "authority") => {
                &[("content_type", "report"), ("design_style", "professional")]
            }
            (PostType::Document, "engagement") => {
                &[("content_type", "checklist"), ("design_style", "vibrant")]
            }
            (PostType::Document, "education") => {
                &[("content_type", "guide"), ("design_style", "professional")]
            }
            (PostType::Poll, "engagement") => {
                &[("purpose", "engagement"), ("question_type", "binary")]
            }
            (PostType::Poll, "research") => {
                &[("purpose", "research"), ("question_type", "multiple_choice")]
            }
            (PostType::Poll, "community") => {
                &[("purpose", "decision"), ("question_type", "multiple_choice")]
            }
            _ => &[],
        };
        selection(pairs)
    }

    pub fn all_variants(post_type: PostType) -> VariantSchema {
        VariantSchema::for_post_type(post_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::style::{EmojiLevel, HookType};

    fn tiny_schema() -> VariantSchema {
        VariantSchema {
            base: config! { "emoji_level" => "none", "kept" => 1 },
            variants: IndexMap::from([
                (
                    "g".to_string(),
                    group(vec![("o", config! { "emoji_level" => "moderate" })]),
                ),
                (
                    "h".to_string(),
                    group(vec![("p", config! { "emoji_level" => "minimal", "extra" => true })]),
                ),
            ]),
            compound_variants: Vec::new(),
            default_variant: selection(&[("g", "o")]),
        }
    }

    #[test]
    fn base_is_cloned_when_nothing_selected() {
        let config = VariantResolver::resolve(&tiny_schema(), &Selection::new(), None);
        assert_eq!(config.get_str("emoji_level"), Some("none"));
        assert_eq!(config.get_int("kept"), Some(1));
    }

    #[test]
    fn explicit_selection_beats_theme() {
        let theme = Theme::new("t", "T").with_emoji_level(EmojiLevel::Heavy);
        let config =
            VariantResolver::resolve(&tiny_schema(), &selection(&[("g", "o")]), Some(&theme));
        assert_eq!(config.get_str("emoji_level"), Some("moderate"));
    }

    #[test]
    fn theme_fills_keys_selection_did_not_touch() {
        let theme = Theme::new("t", "T")
            .with_emoji_level(EmojiLevel::Heavy)
            .with_hook_style(HookType::Story);
        let config = VariantResolver::resolve(&tiny_schema(), &Selection::new(), Some(&theme));
        assert_eq!(config.get_str("emoji_level"), Some("heavy"));
        assert_eq!(config.get_str("hook_style"), Some("story"));
        assert_eq!(config.get_str("formality"), Some("conversational"));
    }

    #[test]
    fn last_selected_group_wins() {
        let schema = tiny_schema();
        let gh = VariantResolver::resolve(&schema, &selection(&[("g", "o"), ("h", "p")]), None);
        assert_eq!(gh.get_str("emoji_level"), Some("minimal"));
        let hg = VariantResolver::resolve(&schema, &selection(&[("h", "p"), ("g", "o")]), None);
        assert_eq!(hg.get_str("emoji_level"), Some("moderate"));
        assert_eq!(hg.get_bool("extra"), Some(true));
    }

    #[test]
    fn unknown_selections_are_ignored() {
        let schema = tiny_schema();
        let config = VariantResolver::resolve(
            &schema,
            &selection(&[("nope", "o"), ("g", "missing")]),
            None,
        );
        assert_eq!(config, ResolvedConfig::from(schema.base.clone()));
    }

    #[test]
    fn compound_requires_every_condition() {
        let schema = VariantSchema::text_post();
        let both = VariantResolver::resolve(
            &schema,
            &selection(&[("style", "story"), ("tone", "inspiring")]),
            None,
        );
        assert_eq!(both.get_str("cta_style"), Some("soft"));
        assert_eq!(both.get_str("vulnerability_level"), Some("raw"));
        assert_eq!(both.get_str("line_break_style"), Some("extreme"));

        let other_tone = VariantResolver::resolve(
            &schema,
            &selection(&[("style", "story"), ("tone", "casual")]),
            None,
        );
        assert_eq!(other_tone.get_str("cta_style"), None);

        let other_style = VariantResolver::resolve(
            &schema,
            &selection(&[("style", "insight"), ("tone", "inspiring")]),
            None,
        );
        assert_eq!(other_style.get_str("cta_style"), None);
    }

    #[test]
    fn compound_ignores_unrelated_groups() {
        let schema = VariantSchema::text_post();
        let config = VariantResolver::resolve(
            &schema,
            &selection(&[("length", "micro"), ("style", "story"), ("tone", "inspiring")]),
            None,
        );
        assert_eq!(config.get_str("cta_style"), Some("soft"));
    }

    #[test]
    fn compound_keys_shield_from_theme() {
        let schema = VariantSchema::text_post();
        let theme = Theme::new("t", "T");
        let config = VariantResolver::resolve(
            &schema,
            &selection(&[("style", "story"), ("tone", "inspiring")]),
            Some(&theme),
        );
        assert_eq!(config.get_str("cta_style"), Some("soft"));
        assert_eq!(config.get_str("emoji_level"), Some("expressive"));
    }

    #[test]
    fn defaults_resolve() {
        let config = VariantResolver::resolve_defaults(&VariantSchema::text_post(), None);
        assert_eq!(config.get_str("structure"), Some("framework"));
        assert_eq!(config.get_str("formality"), Some("conversational"));
        assert_eq!(config.get("ideal_length").and_then(ConfigValue::as_range), Some((300, 800)));
    }

    #[test]
    fn suggestions_are_lookups() {
        let authority = VariantResolver::suggest_variants(PostType::Text, "authority");
        assert_eq!(authority.get("style").map(String::as_str), Some("insight"));
        assert_eq!(authority.len(), 3);

        let poll = VariantResolver::suggest_variants(PostType::Poll, "research");
        assert_eq!(poll.get("question_type").map(String::as_str), Some("multiple_choice"));

        assert!(VariantResolver::suggest_variants(PostType::Poll, "virality").is_empty());
        assert!(VariantResolver::suggest_variants(PostType::Text, "unknown").is_empty());
    }

    #[test]
    fn every_suggestion_names_real_options() {
        for post_type in PostType::ALL {
            let schema = VariantResolver::all_variants(*post_type);
            for goal in ["authority", "engagement", "virality", "community", "research", "education"] {
                for (group, option) in VariantResolver::suggest_variants(*post_type, goal) {
                    assert!(
                        schema.options(&group).contains(&option.as_str()),
                        "{post_type}/{goal}: {group}={option}"
                    );
                }
            }
        }
    }

    #[test]
    fn schema_introspection() {
        let schema = VariantSchema::document_post();
        assert_eq!(schema.group_names(), vec!["content_type", "design_style"]);
        assert_eq!(schema.options("design_style"), vec!["minimal", "professional", "vibrant"]);
        assert!(schema.options("missing").is_empty());
    }

    #[test]
    fn load_schema_from_ron_file() {
        let schema =
            VariantSchema::load_from_ron(Path::new("tests/fixtures/test_schema.ron")).unwrap();
        assert_eq!(schema.group_names(), vec!["style", "tone"]);
        let config = VariantResolver::resolve(
            &schema,
            &selection(&[("style", "story"), ("tone", "warm")]),
            None,
        );
        assert_eq!(config.get_str("structure"), Some("story_arc"));
        assert_eq!(config.get_bool("bonus"), Some(true));
    }

    #[test]
    fn ron_round_trip() {
        let schema = VariantSchema::poll_post();
        let text = ron::to_string(&schema).unwrap();
        assert_eq!(VariantSchema::parse_ron(&text).unwrap(), schema);
    }
}
