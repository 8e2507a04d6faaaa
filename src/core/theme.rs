/// Theme system — immutable "voice" records and the registry that serves them.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::schema::style::{
    ControversyLevel, CtaType, EmojiLevel, Formality, HashtagStrategy, HookType, LineBreakStyle,
    VulnerabilityLevel,
};

/// Presets compiled into the crate.
const PRESETS_RON: &str = include_str!("../../theme_data/presets.ron");

/// Theme consulted when no registered theme matches a goal.
pub const FALLBACK_THEME: &str = "thought_leader";

/// A voice: how emphatic, airy and provocative rendered text should be.
///
/// Themes are built once at configuration time and then shared behind an
/// `Arc`; nothing in the crate mutates one after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Registry key, e.g. `thought_leader`.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Goal this voice serves best (authority, engagement, community, ...).
    #[serde(default)]
    pub primary_goal: String,
    pub formality: Formality,
    pub emoji_level: EmojiLevel,
    pub line_break_style: LineBreakStyle,
    pub hook_style: HookType,
    pub cta_style: CtaType,
    pub hashtag_strategy: HashtagStrategy,
    pub controversy_level: ControversyLevel,
    pub vulnerability_level: VulnerabilityLevel,
}

impl Theme {
    /// A neutral, conversational theme to customize from.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            primary_goal: String::new(),
            formality: Formality::Conversational,
            emoji_level: EmojiLevel::Minimal,
            line_break_style: LineBreakStyle::Standard,
            hook_style: HookType::Question,
            cta_style: CtaType::Curiosity,
            hashtag_strategy: HashtagStrategy::Optimal,
            controversy_level: ControversyLevel::Safe,
            vulnerability_level: VulnerabilityLevel::Selective,
        }
    }

    pub fn with_emoji_level(mut self, level: EmojiLevel) -> Self {
        self.emoji_level = level;
        self
    }

    pub fn with_line_break_style(mut self, style: LineBreakStyle) -> Self {
        self.line_break_style = style;
        self
    }

    pub fn with_hook_style(mut self, hook: HookType) -> Self {
        self.hook_style = hook;
        self
    }

    pub fn with_cta_style(mut self, cta: CtaType) -> Self {
        self.cta_style = cta;
        self
    }

    pub fn with_hashtag_strategy(mut self, strategy: HashtagStrategy) -> Self {
        self.hashtag_strategy = strategy;
        self
    }

    pub fn with_controversy_level(mut self, level: ControversyLevel) -> Self {
        self.controversy_level = level;
        self
    }

    pub fn with_formality(mut self, formality: Formality) -> Self {
        self.formality = formality;
        self
    }

    /// Properties a theme may backfill into a resolved variant config, as
    /// `(key, value)` pairs.
    pub fn derived_properties(&self) -> [(&'static str, &'static str); 5] {
        [
            ("emoji_level", self.emoji_level.as_str()),
            ("line_break_style", self.line_break_style.as_str()),
            ("formality", self.formality.as_str()),
            ("hook_style", self.hook_style.as_str()),
            ("cta_style", self.cta_style.as_str()),
        ]
    }
}

/// Registry of named themes. Constructed explicitly and passed to whoever
/// needs it; there is no global instance.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Arc<Theme>>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self {
            themes: IndexMap::new(),
        }
    }

    /// A registry holding the built-in presets.
    pub fn with_presets() -> Result<Self, ThemeError> {
        let mut registry = Self::new();
        for theme in Self::parse_ron(PRESETS_RON)? {
            registry.register(theme);
        }
        Ok(registry)
    }

    /// Register a theme under its id, replacing any theme with the same id.
    pub fn register(&mut self, theme: Theme) -> Arc<Theme> {
        let theme = Arc::new(theme);
        self.themes.insert(theme.id.clone(), Arc::clone(&theme));
        theme
    }

    pub fn get(&self, id: &str) -> Option<Arc<Theme>> {
        self.themes.get(id).cloned()
    }

    pub fn require(&self, id: &str) -> Result<Arc<Theme>, ThemeError> {
        self.get(id)
            .ok_or_else(|| ThemeError::NotFound(id.to_string()))
    }

    /// Theme ids in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.themes.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Ids of themes whose primary goal matches `goal` (case-insensitive),
    /// or the fallback theme when none do.
    pub fn recommend(&self, goal: &str) -> Vec<&str> {
        let goal = goal.to_lowercase();
        let matches: Vec<&str> = self
            .themes
            .iter()
            .filter(|(_, theme)| theme.primary_goal == goal)
            .map(|(id, _)| id.as_str())
            .collect();
        if matches.is_empty() {
            vec![FALLBACK_THEME]
        } else {
            matches
        }
    }

    /// Parse a RON list of themes.
    pub fn parse_ron(input: &str) -> Result<Vec<Theme>, ThemeError> {
        Ok(ron::from_str(input)?)
    }

    /// Load themes from a RON file. The file should contain a list of Theme definitions.
    pub fn load_from_ron(&mut self, path: &Path) -> Result<usize, ThemeError> {
        let contents = std::fs::read_to_string(path)?;
        let themes = Self::parse_ron(&contents)?;
        let count = themes.len();
        for theme in themes {
            self.register(theme);
        }
        log::info!("loaded {} themes from {}", count, path.display());
        Ok(count)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("theme not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_theme() -> Theme {
        Theme::new("bold_founder", "Bold Founder")
            .with_emoji_level(EmojiLevel::Expressive)
            .with_controversy_level(ControversyLevel::Provocative)
            .with_hook_style(HookType::Controversy)
    }

    #[test]
    fn register_and_get() {
        let mut registry = ThemeRegistry::new();
        registry.register(make_theme());
        assert!(registry.get("bold_founder").is_some());
        assert!(registry.get("missing").is_none());
        assert!(matches!(
            registry.require("missing"),
            Err(ThemeError::NotFound(id)) if id == "missing"
        ));
    }

    #[test]
    fn register_replaces_same_id() {
        let mut registry = ThemeRegistry::new();
        registry.register(make_theme());
        registry.register(make_theme().with_emoji_level(EmojiLevel::None));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("bold_founder").unwrap().emoji_level,
            EmojiLevel::None
        );
    }

    #[test]
    fn shared_theme_is_the_same_allocation() {
        let mut registry = ThemeRegistry::new();
        let registered = registry.register(make_theme());
        let fetched = registry.get("bold_founder").unwrap();
        assert!(Arc::ptr_eq(&registered, &fetched));
    }

    #[test]
    fn presets_load() {
        let registry = ThemeRegistry::with_presets().unwrap();
        assert_eq!(registry.len(), 10);
        let storyteller = registry.get("storyteller").unwrap();
        assert_eq!(storyteller.hook_style, HookType::Story);
        assert_eq!(storyteller.vulnerability_level, VulnerabilityLevel::Raw);
        let technical = registry.get("technical_expert").unwrap();
        assert_eq!(technical.emoji_level, EmojiLevel::None);
    }

    #[test]
    fn recommend_by_goal() {
        let registry = ThemeRegistry::with_presets().unwrap();
        let authority = registry.recommend("Authority");
        assert!(authority.contains(&"thought_leader"));
        assert!(authority.contains(&"technical_expert"));
        assert_eq!(registry.recommend("world_domination"), vec![FALLBACK_THEME]);
    }

    #[test]
    fn derived_properties_cover_resolver_keys() {
        let theme = make_theme();
        let props = theme.derived_properties();
        assert!(props.contains(&("emoji_level", "expressive")));
        assert!(props.contains(&("hook_style", "controversy")));
        assert!(props.iter().any(|(k, _)| *k == "formality"));
    }

    #[test]
    fn ron_round_trip() {
        let theme = make_theme();
        let serialized = ron::to_string(&vec![theme.clone()]).unwrap();
        let parsed = ThemeRegistry::parse_ron(&serialized).unwrap();
        assert_eq!(parsed, vec![theme]);
    }

    #[test]
    fn load_themes_from_ron_file() {
        let path = std::path::PathBuf::from("tests/fixtures/test_themes.ron");
        let mut registry = ThemeRegistry::new();
        let count = registry.load_from_ron(&path).unwrap();
        assert_eq!(count, 2);
        let quiet = registry.get("quiet_analyst").unwrap();
        assert_eq!(quiet.emoji_level, EmojiLevel::None);
        assert_eq!(quiet.hashtag_strategy, HashtagStrategy::Minimal);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let mut registry = ThemeRegistry::new();
        let err = registry
            .load_from_ron(Path::new("tests/fixtures/does_not_exist.ron"))
            .unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }
}
