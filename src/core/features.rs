/// Structured feature blocks: quotes, stats, timelines, lists and boxes.
///
/// None of these consult the theme today; they accept one so that every
/// block shares the same render contract.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::component::PostComponent;
use crate::core::theme::Theme;
use crate::core::tokens::{self, char_len};
use crate::schema::style::{NumberStyle, TakeawayStyle, TimelineStyle, TipStyle};

/// Push an upper-cased `"{glyph} {TITLE}:"` header followed by a blank line.
pub(crate) fn push_title(lines: &mut Vec<String>, glyph: &str, title: Option<&str>) {
    if let Some(title) = title {
        lines.push(format!("{} {}:", glyph, title.to_uppercase()));
        lines.push(String::new());
    }
}

fn all_filled(items: &[String]) -> bool {
    items.iter().all(|item| !item.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub source: Option<String>,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl PostComponent for Quote {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let attribution = match &self.source {
            Some(source) => format!("   — {}, {}", self.author, source),
            None => format!("   — {}", self.author),
        };
        format!("{} \"{}\"\n{}", tokens::QUOTE_GLYPH, self.text, attribution)
    }

    fn validate(&self) -> bool {
        !self.text.is_empty()
            && char_len(&self.text) <= tokens::QUOTE_MAX_LENGTH
            && !self.author.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BigStat {
    pub number: String,
    pub label: String,
    pub context: Option<String>,
}

impl BigStat {
    pub fn new(number: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            label: label.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl PostComponent for BigStat {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let mut lines = vec![
            format!("{} {}", tokens::METRICS_GLYPH, self.number),
            self.label.clone(),
        ];
        if let Some(context) = &self.context {
            lines.push(String::new());
            lines.push(context.clone());
        }
        lines.join("\n")
    }

    fn validate(&self) -> bool {
        !self.number.is_empty() && !self.label.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    /// Step label → description, in display order.
    pub steps: IndexMap<String, String>,
    pub title: Option<String>,
    pub style: TimelineStyle,
}

impl Timeline {
    pub fn new(steps: IndexMap<String, String>, style: TimelineStyle) -> Self {
        Self {
            steps,
            title: None,
            style,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl PostComponent for Timeline {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let mut lines = Vec::new();
        push_title(&mut lines, tokens::CALENDAR_GLYPH, self.title.as_deref());

        for (idx, (key, value)) in self.steps.iter().enumerate() {
            lines.push(match self.style {
                TimelineStyle::Arrow => format!("{} {} {}", key, tokens::ARROW, value),
                TimelineStyle::Numbered => format!("{}. {}: {}", idx + 1, key, value),
                TimelineStyle::Dated => format!("{} | {}", key, value),
            });
        }
        lines.join("\n")
    }

    fn validate(&self) -> bool {
        self.steps.len() >= 2
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyTakeaway {
    pub message: String,
    pub title: String,
    pub style: TakeawayStyle,
}

impl KeyTakeaway {
    pub const DEFAULT_TITLE: &'static str = "KEY TAKEAWAY";

    pub fn new(message: impl Into<String>, style: TakeawayStyle) -> Self {
        Self {
            message: message.into(),
            title: Self::DEFAULT_TITLE.to_string(),
            style,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl PostComponent for KeyTakeaway {
    fn render(&self, _theme: Option<&Theme>) -> String {
        match self.style {
            TakeawayStyle::Box => format!(
                "{} {}:\n\n{}",
                tokens::INSIGHT_GLYPH,
                self.title,
                self.message
            ),
            TakeawayStyle::Highlight => format!("{} {}", tokens::INSIGHT_GLYPH, self.message),
            TakeawayStyle::Simple => self.message.clone(),
        }
    }

    fn validate(&self) -> bool {
        !self.message.is_empty() && char_len(&self.message) <= tokens::TAKEAWAY_MAX_LENGTH
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProCon {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub title: Option<String>,
}

impl ProCon {
    pub fn new(pros: Vec<String>, cons: Vec<String>) -> Self {
        Self {
            pros,
            cons,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl PostComponent for ProCon {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let mut lines = Vec::new();
        push_title(&mut lines, tokens::BALANCE_GLYPH, self.title.as_deref());

        lines.push(format!("{} PROS:", tokens::ACCEPT));
        lines.extend(self.pros.iter().map(|p| format!("{} {}", tokens::BULLET, p)));
        lines.push(String::new());
        lines.push(format!("{} CONS:", tokens::REJECT));
        lines.extend(self.cons.iter().map(|c| format!("{} {}", tokens::BULLET, c)));
        lines.join("\n")
    }

    fn validate(&self) -> bool {
        !self.pros.is_empty() && !self.cons.is_empty() && all_filled(&self.pros) && all_filled(&self.cons)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    #[serde(default)]
    pub checked: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>, checked: bool) -> Self {
        Self {
            text: text.into(),
            checked,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Checklist {
    pub items: Vec<ChecklistItem>,
    pub title: Option<String>,
    pub show_progress: bool,
}

impl Checklist {
    pub fn new(items: Vec<ChecklistItem>) -> Self {
        Self {
            items,
            title: None,
            show_progress: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

impl PostComponent for Checklist {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let mut lines = Vec::new();
        push_title(&mut lines, tokens::CHECKLIST_GLYPH, self.title.as_deref());

        if self.show_progress {
            let done = self.items.iter().filter(|item| item.checked).count();
            lines.push(format!("Progress: {}/{} complete", done, self.items.len()));
            lines.push(String::new());
        }

        for item in &self.items {
            let mark = if item.checked {
                tokens::CHECKED
            } else {
                tokens::UNCHECKED
            };
            lines.push(format!("{} {}", mark, item.text));
        }
        lines.join("\n")
    }

    fn validate(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| !item.text.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BeforeAfter {
    pub before: Vec<String>,
    pub after: Vec<String>,
    pub title: Option<String>,
    pub before_label: String,
    pub after_label: String,
}

impl BeforeAfter {
    pub fn new(before: Vec<String>, after: Vec<String>) -> Self {
        Self {
            before,
            after,
            title: None,
            before_label: "BEFORE".to_string(),
            after_label: "AFTER".to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_labels(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before_label = before.into();
        self.after_label = after.into();
        self
    }
}

impl PostComponent for BeforeAfter {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let mut lines = Vec::new();
        push_title(&mut lines, tokens::TRANSFORM_GLYPH, self.title.as_deref());

        lines.push(format!("{} {}:", tokens::REJECT, self.before_label));
        lines.extend(self.before.iter().map(|b| format!("{} {}", tokens::BULLET, b)));
        lines.push(String::new());
        lines.push(format!("{} {}:", tokens::ACCEPT, self.after_label));
        lines.extend(self.after.iter().map(|a| format!("{} {}", tokens::BULLET, a)));
        lines.join("\n")
    }

    fn validate(&self) -> bool {
        !self.before.is_empty()
            && !self.after.is_empty()
            && all_filled(&self.before)
            && all_filled(&self.after)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TipBox {
    pub message: String,
    pub title: Option<String>,
    pub style: TipStyle,
}

impl TipBox {
    pub fn new(message: impl Into<String>, style: TipStyle) -> Self {
        Self {
            message: message.into(),
            title: None,
            style,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl PostComponent for TipBox {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let title = self
            .title
            .as_deref()
            .unwrap_or_else(|| tokens::tip_title(self.style));
        format!(
            "{} {}:\n\n{}",
            tokens::tip_emoji(self.style),
            title.to_uppercase(),
            self.message
        )
    }

    fn validate(&self) -> bool {
        !self.message.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsGrid {
    pub stats: IndexMap<String, String>,
    pub title: Option<String>,
    pub columns: usize,
}

impl StatsGrid {
    pub const DEFAULT_COLUMNS: usize = 2;

    pub fn new(stats: IndexMap<String, String>) -> Self {
        Self {
            stats,
            title: None,
            columns: Self::DEFAULT_COLUMNS,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }
}

impl PostComponent for StatsGrid {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let mut lines = Vec::new();
        push_title(&mut lines, tokens::STATS_GLYPH, self.title.as_deref());

        let cells: Vec<String> = self
            .stats
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        for row in cells.chunks(self.columns.max(1)) {
            lines.push(row.join("  |  "));
        }
        lines.join("\n")
    }

    fn validate(&self) -> bool {
        self.stats.len() >= 2
            && (1..=4).contains(&self.columns)
            && self
                .stats
                .iter()
                .all(|(label, value)| !label.trim().is_empty() && !value.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PollPreview {
    pub question: String,
    pub options: Vec<String>,
}

impl PollPreview {
    pub fn new(question: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            question: question.into(),
            options,
        }
    }
}

impl PostComponent for PollPreview {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let mut lines = vec![
            format!("{} POLL:", tokens::STATS_GLYPH),
            String::new(),
            self.question.clone(),
            String::new(),
        ];
        lines.extend(self.options.iter().map(|o| format!("{} {}", tokens::RADIO, o)));
        lines.push(String::new());
        lines.push(format!("{} Vote in the poll below!", tokens::QUOTE_GLYPH));
        lines.join("\n")
    }

    fn validate(&self) -> bool {
        !self.question.trim().is_empty()
            && (2..=4).contains(&self.options.len())
            && all_filled(&self.options)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    #[serde(default)]
    pub icon: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl FeatureItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            icon: None,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureList {
    pub features: Vec<FeatureItem>,
    pub title: Option<String>,
}

impl FeatureList {
    pub fn new(features: Vec<FeatureItem>) -> Self {
        Self {
            features,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl PostComponent for FeatureList {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let mut lines = Vec::new();
        push_title(&mut lines, tokens::FEATURES_GLYPH, self.title.as_deref());

        for feature in &self.features {
            let icon = feature.icon.as_deref().unwrap_or(tokens::BULLET);
            lines.push(format!("{} {}", icon, feature.title));
            if let Some(description) = feature.description.as_deref().filter(|d| !d.is_empty()) {
                lines.push(format!("   {}", description));
            }
        }
        lines.join("\n")
    }

    fn validate(&self) -> bool {
        !self.features.is_empty() && self.features.iter().all(|f| !f.title.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberedList {
    pub items: Vec<String>,
    pub title: Option<String>,
    pub style: NumberStyle,
    pub start: u32,
}

impl NumberedList {
    pub fn new(items: Vec<String>, style: NumberStyle) -> Self {
        Self {
            items,
            title: None,
            style,
            start: 1,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn starting_at(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    fn prefix(&self, number: u64) -> String {
        match self.style {
            NumberStyle::EmojiNumbers => usize::try_from(number)
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|idx| tokens::EMOJI_NUMBERS.get(idx))
                .map(|emoji| emoji.to_string())
                .unwrap_or_else(|| format!("{}.", number)),
            NumberStyle::BoldNumbers => format!("[{}]", number),
            NumberStyle::Numbers => format!("{}.", number),
        }
    }
}

impl PostComponent for NumberedList {
    fn render(&self, _theme: Option<&Theme>) -> String {
        let mut lines = Vec::new();
        push_title(&mut lines, tokens::LIST_GLYPH, self.title.as_deref());

        // Widened so a start near u32::MAX cannot overflow.
        for (number, item) in (u64::from(self.start)..).zip(&self.items) {
            lines.push(format!("{} {}", self.prefix(number), item));
        }
        lines.join("\n")
    }

    fn validate(&self) -> bool {
        !self.items.is_empty() && all_filled(&self.items) && self.start >= 1
    }
}
