/// Basic text blocks: hooks, calls-to-action, hashtags and separators.
use crate::core::component::PostComponent;
use crate::core::theme::Theme;
use crate::core::tokens::{self, char_len};
use crate::schema::style::{ControversyLevel, CtaType, HashtagPlacement, HookType, SeparatorStyle};

/// Opening line of a post.
#[derive(Debug, Clone, PartialEq)]
pub struct Hook {
    pub hook_type: HookType,
    pub content: String,
}

impl Hook {
    pub fn new(hook_type: HookType, content: impl Into<String>) -> Self {
        Self {
            hook_type,
            content: content.into(),
        }
    }
}

impl PostComponent for Hook {
    fn render(&self, theme: Option<&Theme>) -> String {
        let alarmed = matches!(
            theme.map(|t| t.controversy_level),
            Some(ControversyLevel::Bold | ControversyLevel::Provocative)
        );
        if alarmed && self.hook_type == HookType::Controversy {
            format!("{} {}", tokens::ALARM, self.content)
        } else {
            self.content.clone()
        }
    }

    fn validate(&self) -> bool {
        !self.content.trim().is_empty() && char_len(&self.content) <= tokens::HOOK_MAX_LENGTH
    }
}

/// Closing engagement prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct CallToAction {
    pub cta_type: CtaType,
    pub text: String,
}

impl CallToAction {
    pub fn new(cta_type: CtaType, text: impl Into<String>) -> Self {
        Self {
            cta_type,
            text: text.into(),
        }
    }
}

impl PostComponent for CallToAction {
    fn render(&self, theme: Option<&Theme>) -> String {
        match theme {
            Some(t) if t.emoji_level.uses_emoji_accents() => {
                format!("{} {}", tokens::cta_emoji(self.cta_type), self.text)
            }
            _ => self.text.clone(),
        }
    }

    fn validate(&self) -> bool {
        !self.text.trim().is_empty() && char_len(&self.text) <= tokens::CTA_MAX_LENGTH
    }
}

/// Hashtag line, capped by the theme's hashtag strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Hashtags {
    pub tags: Vec<String>,
    pub placement: HashtagPlacement,
}

impl Hashtags {
    pub fn new(tags: Vec<String>, placement: HashtagPlacement) -> Self {
        Self { tags, placement }
    }

    fn bare(tag: &str) -> &str {
        tag.trim().trim_start_matches('#')
    }
}

impl PostComponent for Hashtags {
    fn render(&self, theme: Option<&Theme>) -> String {
        let cap = theme
            .map(|t| t.hashtag_strategy.max_tags())
            .unwrap_or(tokens::DEFAULT_MAX_HASHTAGS);
        let line = self
            .tags
            .iter()
            .take(cap)
            .map(|tag| format!("#{}", Self::bare(tag)))
            .collect::<Vec<_>>()
            .join(" ");

        match self.placement {
            HashtagPlacement::Inline => line,
            _ => format!("\n\n{}", line),
        }
    }

    fn validate(&self) -> bool {
        !self.tags.is_empty() && self.tags.iter().all(|tag| !Self::bare(tag).is_empty())
    }
}

/// Visual break between sections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Separator {
    pub style: SeparatorStyle,
}

impl Separator {
    pub fn new(style: SeparatorStyle) -> Self {
        Self { style }
    }
}

impl PostComponent for Separator {
    fn render(&self, _theme: Option<&Theme>) -> String {
        tokens::separator(self.style).to_string()
    }

    fn validate(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::style::{EmojiLevel, HashtagStrategy};

    #[test]
    fn controversy_hook_gets_alarm_only_when_bold() {
        let hook = Hook::new(HookType::Controversy, "Meetings are a tax.");
        let safe = Theme::new("safe", "Safe");
        let bold = Theme::new("bold", "Bold").with_controversy_level(ControversyLevel::Bold);

        assert_eq!(hook.render(Some(&safe)), "Meetings are a tax.");
        assert_eq!(hook.render(Some(&bold)), "🚨 Meetings are a tax.");
        assert_eq!(hook.render(None), "Meetings are a tax.");

        let question = Hook::new(HookType::Question, "Why?");
        assert_eq!(question.render(Some(&bold)), "Why?");
    }

    #[test]
    fn hook_length_ceiling() {
        assert!(Hook::new(HookType::Stat, "x".repeat(200)).validate());
        assert!(!Hook::new(HookType::Stat, "x".repeat(201)).validate());
        assert!(!Hook::new(HookType::Stat, "").validate());
        assert!(!Hook::new(HookType::Stat, "   ").validate());
    }

    #[test]
    fn cta_emoji_follows_emoji_level() {
        let cta = CallToAction::new(CtaType::Direct, "Comment below");
        let quiet = Theme::new("q", "Quiet").with_emoji_level(EmojiLevel::Minimal);
        let loud = Theme::new("l", "Loud").with_emoji_level(EmojiLevel::Moderate);
        assert_eq!(cta.render(Some(&quiet)), "Comment below");
        assert_eq!(cta.render(Some(&loud)), "👇 Comment below");
        assert_eq!(cta.render(None), "Comment below");
    }

    #[test]
    fn cta_length_ceiling() {
        assert!(!CallToAction::new(CtaType::Soft, "y".repeat(201)).validate());
        assert!(CallToAction::new(CtaType::Soft, "Thoughts?").validate());
    }

    #[test]
    fn hashtags_cap_and_placement() {
        let tags: Vec<String> = ["a", "b", "c", "d", "e", "f", "g", "h"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let end = Hashtags::new(tags.clone(), HashtagPlacement::End);
        let minimal = Theme::new("m", "M").with_hashtag_strategy(HashtagStrategy::Minimal);
        let maximal = Theme::new("x", "X").with_hashtag_strategy(HashtagStrategy::Maximal);

        assert_eq!(end.render(Some(&minimal)), "\n\n#a #b #c");
        assert_eq!(end.render(None), "\n\n#a #b #c #d #e");
        assert_eq!(end.render(Some(&maximal)).matches('#').count(), 7);

        let inline = Hashtags::new(tags, HashtagPlacement::Inline);
        assert_eq!(inline.render(Some(&minimal)), "#a #b #c");
    }

    #[test]
    fn hashtags_do_not_double_the_hash() {
        let tags = Hashtags::new(vec!["#Rust".to_string()], HashtagPlacement::Inline);
        assert_eq!(tags.render(None), "#Rust");
    }

    #[test]
    fn hashtags_validation() {
        assert!(!Hashtags::new(vec![], HashtagPlacement::End).validate());
        assert!(!Hashtags::new(vec!["ok".into(), "#".into()], HashtagPlacement::End).validate());
        assert!(Hashtags::new(vec!["ok".into()], HashtagPlacement::End).validate());
    }

    #[test]
    fn separator_renders_divider() {
        assert_eq!(Separator::default().render(None), "\n\n---\n\n");
        assert_eq!(Separator::new(SeparatorStyle::Dots).render(None), "\n\n• • •\n\n");
        assert!(Separator::new(SeparatorStyle::Wave).validate());
    }
}
