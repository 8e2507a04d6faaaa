/// Body text — the main content block and its five layout structures.
///
/// Raw content uses two sub-delimiters: a blank line (`\n\n`) between
/// paragraphs for `linear` and `story_arc`, and `||` between parts for
/// `framework` and `comparison`. `listicle` reads one item per line.
use crate::core::component::PostComponent;
use crate::core::theme::Theme;
use crate::core::tokens::{self, char_len};
use crate::schema::style::{EmojiLevel, LineBreakStyle, Structure};

const PARAGRAPH_BREAK: &str = "\n\n";

/// Narrative pacing never drops below this break size when a theme is set.
const STORY_ARC_FLOOR: LineBreakStyle = LineBreakStyle::Relaxed;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub content: String,
    pub structure: Structure,
}

impl Body {
    pub fn new(content: impl Into<String>, structure: Structure) -> Self {
        Self {
            content: content.into(),
            structure,
        }
    }

    pub fn linear(content: impl Into<String>) -> Self {
        Self::new(content, Structure::Linear)
    }

    fn render_linear(&self, theme: Option<&Theme>) -> String {
        match theme {
            Some(t) => self
                .content
                .split(PARAGRAPH_BREAK)
                .collect::<Vec<_>>()
                .join(&t.line_break_style.paragraph_break()),
            None => self.content.clone(),
        }
    }

    fn render_listicle(&self, theme: Option<&Theme>) -> String {
        let symbol = match theme.map(|t| t.emoji_level) {
            Some(EmojiLevel::None) => tokens::HYPHEN,
            _ => tokens::ARROW,
        };

        self.content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                if starts_with_bullet(line) {
                    line.to_string()
                } else {
                    format!("{} {}", symbol, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_framework(&self, theme: Option<&Theme>) -> String {
        let symbol = match theme.map(|t| t.emoji_level) {
            Some(EmojiLevel::None | EmojiLevel::Minimal) => tokens::BULLET,
            _ => tokens::PIN,
        };

        self.content
            .split(tokens::PART_DELIMITER)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| format!("{} {}", symbol, part))
            .collect::<Vec<_>>()
            .join(PARAGRAPH_BREAK)
    }

    fn render_story_arc(&self, theme: Option<&Theme>) -> String {
        let separator = match theme {
            Some(t) if t.line_break_style.blank_lines() >= STORY_ARC_FLOOR.blank_lines() => {
                t.line_break_style.paragraph_break()
            }
            Some(_) => STORY_ARC_FLOOR.paragraph_break(),
            None => PARAGRAPH_BREAK.to_string(),
        };

        self.content
            .split(PARAGRAPH_BREAK)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// Anything other than exactly two parts falls back to the raw content.
    fn render_comparison(&self) -> String {
        let parts: Vec<&str> = self.content.split(tokens::PART_DELIMITER).collect();
        match parts.as_slice() {
            [before, after] => format!(
                "{} {}\n\n{} {}",
                tokens::REJECT,
                before.trim(),
                tokens::ACCEPT,
                after.trim()
            ),
            _ => self.content.clone(),
        }
    }
}

fn starts_with_bullet(line: &str) -> bool {
    tokens::RECOGNIZED_BULLETS
        .iter()
        .any(|bullet| line.starts_with(bullet))
}

impl PostComponent for Body {
    fn render(&self, theme: Option<&Theme>) -> String {
        match self.structure {
            Structure::Linear => self.render_linear(theme),
            Structure::Listicle => self.render_listicle(theme),
            Structure::Framework => self.render_framework(theme),
            Structure::StoryArc => self.render_story_arc(theme),
            Structure::Comparison => self.render_comparison(),
        }
    }

    fn validate(&self) -> bool {
        !self.content.trim().is_empty() && char_len(&self.content) <= tokens::BODY_MAX_LENGTH
    }
}
