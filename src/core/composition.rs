/// Post composition — ordered components, budget enforcement and previews.
///
/// A `ComposablePost` owns its component list and resolved config and
/// borrows a shared theme. `compose` is a pure read: it can be called any
/// number of times and always yields the same text for the same post.
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::core::body::Body;
use crate::core::charts::{BarChart, ComparisonChart, MetricsChart, ProgressChart, RankingChart};
use crate::core::component::{Block, Component};
use crate::core::content::{CallToAction, Hashtags, Hook, Separator};
use crate::core::features::{
    BeforeAfter, BigStat, Checklist, ChecklistItem, FeatureItem, FeatureList, KeyTakeaway,
    NumberedList, PollPreview, ProCon, Quote, StatsGrid, Timeline, TipBox,
};
use crate::core::theme::Theme;
use crate::core::tokens::{self, char_len, take_chars};
use crate::schema::config::ResolvedConfig;
use crate::schema::style::{
    CtaType, HashtagPlacement, HookType, NumberStyle, PostType, SeparatorStyle, Structure,
    TakeawayStyle, TimelineStyle, TipStyle,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("post is {length} characters, over the {limit} character limit")]
    PostTooLong { length: usize, limit: usize },
}

/// One rendered component in a `PostSummary`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentSummary {
    pub kind: &'static str,
    pub content: String,
}

/// Serializable snapshot of a composed post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    pub post_type: PostType,
    pub theme: Option<String>,
    pub components: Vec<ComponentSummary>,
    pub final_text: String,
    pub character_count: usize,
    pub preview: String,
}

/// An ordered, append-only sequence of components rendered under one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposablePost {
    post_type: PostType,
    theme: Option<Arc<Theme>>,
    config: ResolvedConfig,
    components: Vec<Component>,
}

impl Default for ComposablePost {
    fn default() -> Self {
        Self::new(PostType::Text)
    }
}

impl ComposablePost {
    pub fn new(post_type: PostType) -> Self {
        Self {
            post_type,
            theme: None,
            config: ResolvedConfig::default(),
            components: Vec::new(),
        }
    }

    pub fn with_theme(mut self, theme: Arc<Theme>) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_config(mut self, config: ResolvedConfig) -> Self {
        self.config = config;
        self
    }

    pub fn post_type(&self) -> PostType {
        self.post_type
    }

    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_deref()
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Append any block. The post's theme is attached to it.
    pub fn add(&mut self, block: impl Into<Block>) -> &mut Self {
        let component = Component::new(block).with_theme(self.theme.clone());
        self.components.push(component);
        self
    }

    pub fn add_hook(&mut self, hook_type: HookType, content: impl Into<String>) -> &mut Self {
        self.add(Hook::new(hook_type, content))
    }

    /// Append a body. Without an explicit structure the resolved config's
    /// `structure` is used when it names a known one, else linear.
    pub fn add_body(&mut self, content: impl Into<String>, structure: Option<Structure>) -> &mut Self {
        let structure = structure
            .or_else(|| self.config.parse::<Structure>("structure"))
            .unwrap_or_default();
        self.add(Body::new(content, structure))
    }

    pub fn add_cta(&mut self, cta_type: CtaType, text: impl Into<String>) -> &mut Self {
        self.add(CallToAction::new(cta_type, text))
    }

    pub fn add_hashtags<I, S>(&mut self, tags: I, placement: HashtagPlacement) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = tags.into_iter().map(Into::into).collect();
        self.add(Hashtags::new(tags, placement))
    }

    pub fn add_separator(&mut self, style: SeparatorStyle) -> &mut Self {
        self.add(Separator::new(style))
    }

    pub fn add_quote(&mut self, text: impl Into<String>, author: impl Into<String>) -> &mut Self {
        self.add(Quote::new(text, author))
    }

    pub fn add_big_stat(&mut self, number: impl Into<String>, label: impl Into<String>) -> &mut Self {
        self.add(BigStat::new(number, label))
    }

    pub fn add_timeline(&mut self, steps: IndexMap<String, String>, style: TimelineStyle) -> &mut Self {
        self.add(Timeline::new(steps, style))
    }

    pub fn add_key_takeaway(&mut self, message: impl Into<String>, style: TakeawayStyle) -> &mut Self {
        self.add(KeyTakeaway::new(message, style))
    }

    pub fn add_pro_con(&mut self, pros: Vec<String>, cons: Vec<String>) -> &mut Self {
        self.add(ProCon::new(pros, cons))
    }

    pub fn add_checklist(&mut self, items: Vec<ChecklistItem>) -> &mut Self {
        self.add(Checklist::new(items))
    }

    pub fn add_before_after(&mut self, before: Vec<String>, after: Vec<String>) -> &mut Self {
        self.add(BeforeAfter::new(before, after))
    }

    pub fn add_tip_box(&mut self, message: impl Into<String>, style: TipStyle) -> &mut Self {
        self.add(TipBox::new(message, style))
    }

    pub fn add_stats_grid(&mut self, stats: IndexMap<String, String>) -> &mut Self {
        self.add(StatsGrid::new(stats))
    }

    pub fn add_poll_preview(&mut self, question: impl Into<String>, options: Vec<String>) -> &mut Self {
        self.add(PollPreview::new(question, options))
    }

    pub fn add_feature_list(&mut self, features: Vec<FeatureItem>) -> &mut Self {
        self.add(FeatureList::new(features))
    }

    pub fn add_numbered_list(&mut self, items: Vec<String>, style: NumberStyle) -> &mut Self {
        self.add(NumberedList::new(items, style))
    }

    pub fn add_bar_chart(&mut self, data: IndexMap<String, u32>) -> &mut Self {
        self.add(BarChart::new(data))
    }

    pub fn add_metrics_chart(&mut self, data: IndexMap<String, String>) -> &mut Self {
        self.add(MetricsChart::new(data))
    }

    pub fn add_comparison_chart(&mut self, sides: IndexMap<String, Vec<String>>) -> &mut Self {
        self.add(ComparisonChart::new(sides))
    }

    pub fn add_progress_chart(&mut self, data: IndexMap<String, u32>) -> &mut Self {
        self.add(ProgressChart::new(data))
    }

    pub fn add_ranking_chart(&mut self, data: IndexMap<String, String>) -> &mut Self {
        self.add(RankingChart::new(data))
    }

    /// Render each valid component in order and return the joined text.
    ///
    /// Components failing `validate` are skipped. Fails only when the joined
    /// text exceeds the platform ceiling; nothing is ever truncated.
    pub fn compose(&self) -> Result<String, ComposeError> {
        let sections = self.rendered_sections();
        self.finish(&sections)
    }

    /// The first `chars` characters of the composed text, with an ellipsis
    /// appended when anything was cut.
    pub fn get_preview(&self, chars: usize) -> Result<String, ComposeError> {
        let text = self.compose()?;
        Ok(preview_of(&text, chars))
    }

    /// Ensure the post opens with a hook and closes with a call-to-action,
    /// synthesized from the theme's preferred styles. Does nothing without
    /// a theme, and never adds a second hook or CTA.
    pub fn optimize_for_engagement(&mut self) -> &mut Self {
        let Some(theme) = self.theme.clone() else {
            return self;
        };

        if !self.components.iter().any(Component::is_hook) {
            let hook = Hook::new(theme.hook_style, tokens::stock_hook(theme.hook_style));
            self.components
                .insert(0, Component::new(hook).with_theme(Some(Arc::clone(&theme))));
        }

        if !self.components.iter().any(Component::is_call_to_action) {
            let cta = CallToAction::new(theme.cta_style, tokens::stock_cta(theme.cta_style));
            self.components
                .push(Component::new(cta).with_theme(Some(theme)));
        }

        self
    }

    /// Compose and export everything a caller might persist or display.
    pub fn summary(&self) -> Result<PostSummary, ComposeError> {
        let sections = self.rendered_sections();
        let final_text = self.finish(&sections)?;
        let components = sections
            .into_iter()
            .map(|(kind, content)| ComponentSummary { kind, content })
            .collect();

        Ok(PostSummary {
            post_type: self.post_type,
            theme: self.theme.as_ref().map(|t| t.id.clone()),
            components,
            character_count: char_len(&final_text),
            preview: preview_of(&final_text, tokens::TRUNCATION_POINT),
            final_text,
        })
    }

    /// Join already rendered sections and enforce the length ceiling.
    fn finish(&self, sections: &[(&'static str, String)]) -> Result<String, ComposeError> {
        let text = join_sections(sections.iter().map(|(_, text)| text.as_str()));
        let length = char_len(&text);
        log::debug!(
            "composed {} post: {} components, {} chars",
            self.post_type,
            sections.len(),
            length
        );
        if length > tokens::MAX_POST_LENGTH {
            return Err(ComposeError::PostTooLong {
                length,
                limit: tokens::MAX_POST_LENGTH,
            });
        }
        Ok(text)
    }

    fn rendered_sections(&self) -> Vec<(&'static str, String)> {
        let theme = self.theme();
        self.components
            .iter()
            .filter(|component| {
                let valid = component.validate();
                if !valid {
                    log::warn!("skipping invalid {} component", component.kind());
                }
                valid
            })
            .map(|component| (component.kind(), component.render(theme)))
            .filter(|(_, text)| !text.is_empty())
            .collect()
    }
}

/// Join rendered sections so that at least one blank line separates each
/// pair. Newlines a section already carries at the seam count toward it.
fn join_sections<'a>(sections: impl IntoIterator<Item = &'a str>) -> String {
    let mut text = String::new();
    for section in sections {
        if !text.is_empty() {
            let present = trailing_newlines(&text) + leading_newlines(section);
            for _ in present..2 {
                text.push('\n');
            }
        }
        text.push_str(section);
    }
    text
}

fn trailing_newlines(text: &str) -> usize {
    text.chars().rev().take_while(|&c| c == '\n').count()
}

fn leading_newlines(text: &str) -> usize {
    text.chars().take_while(|&c| c == '\n').count()
}

fn preview_of(text: &str, chars: usize) -> String {
    if char_len(text) <= chars {
        text.to_string()
    } else {
        format!("{}{}", take_chars(text, chars), tokens::ELLIPSIS)
    }
}
