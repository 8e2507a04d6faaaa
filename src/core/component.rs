/// The component contract and the closed set of block kinds.
use std::sync::Arc;

use crate::core::body::Body;
use crate::core::charts::{BarChart, ComparisonChart, MetricsChart, ProgressChart, RankingChart};
use crate::core::content::{CallToAction, Hashtags, Hook, Separator};
use crate::core::features::{
    BeforeAfter, BigStat, Checklist, FeatureList, KeyTakeaway, NumberedList, PollPreview, ProCon,
    Quote, StatsGrid, Timeline, TipBox,
};
use crate::core::theme::Theme;

/// Render/validate contract every block implements.
///
/// Both methods are pure: no I/O, no hidden state, identical output for
/// identical inputs. `render` never fails on invalid content; only
/// `validate` reports it.
pub trait PostComponent {
    fn render(&self, theme: Option<&Theme>) -> String;
    fn validate(&self) -> bool;
}

macro_rules! blocks {
    ($($variant:ident => $kind:literal),+ $(,)?) => {
        /// One renderable content block.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Block {
            $($variant($variant)),+
        }

        impl Block {
            /// Stable snake_case name of the block kind.
            pub fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $kind),+
                }
            }
        }

        impl PostComponent for Block {
            fn render(&self, theme: Option<&Theme>) -> String {
                match self {
                    $(Self::$variant(block) => block.render(theme)),+
                }
            }

            fn validate(&self) -> bool {
                match self {
                    $(Self::$variant(block) => block.validate()),+
                }
            }
        }

        $(
            impl From<$variant> for Block {
                fn from(block: $variant) -> Self {
                    Self::$variant(block)
                }
            }
        )+
    };
}

blocks! {
    Hook => "hook",
    Body => "body",
    CallToAction => "call_to_action",
    Hashtags => "hashtags",
    Separator => "separator",
    Quote => "quote",
    BigStat => "big_stat",
    Timeline => "timeline",
    KeyTakeaway => "key_takeaway",
    ProCon => "pro_con",
    Checklist => "checklist",
    BeforeAfter => "before_after",
    TipBox => "tip_box",
    StatsGrid => "stats_grid",
    PollPreview => "poll_preview",
    FeatureList => "feature_list",
    NumberedList => "numbered_list",
    BarChart => "bar_chart",
    MetricsChart => "metrics_chart",
    ComparisonChart => "comparison_chart",
    ProgressChart => "progress_chart",
    RankingChart => "ranking_chart",
}

/// A block plus the theme it was built with.
///
/// A theme passed to `render` takes precedence for that call only; the
/// stored theme is never replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    block: Block,
    theme: Option<Arc<Theme>>,
}

impl Component {
    pub fn new(block: impl Into<Block>) -> Self {
        Self {
            block: block.into(),
            theme: None,
        }
    }

    pub fn with_theme(mut self, theme: Option<Arc<Theme>>) -> Self {
        self.theme = theme;
        self
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_deref()
    }

    pub fn kind(&self) -> &'static str {
        self.block.kind()
    }

    pub fn is_hook(&self) -> bool {
        matches!(self.block, Block::Hook(_))
    }

    pub fn is_call_to_action(&self) -> bool {
        matches!(self.block, Block::CallToAction(_))
    }

    /// Render with `theme_override` if given, else with the stored theme.
    pub fn render(&self, theme_override: Option<&Theme>) -> String {
        self.block.render(theme_override.or(self.theme()))
    }

    pub fn validate(&self) -> bool {
        self.block.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::style::{CtaType, EmojiLevel, HookType, Structure};

    #[test]
    fn kinds_are_stable() {
        assert_eq!(Component::new(Hook::new(HookType::Stat, "x")).kind(), "hook");
        assert_eq!(
            Component::new(Body::new("x", Structure::Linear)).kind(),
            "body"
        );
        assert_eq!(Component::new(Separator::default()).kind(), "separator");
    }

    #[test]
    fn override_wins_for_one_call_only() {
        let stored = Arc::new(Theme::new("plain", "Plain").with_emoji_level(EmojiLevel::None));
        let loud = Theme::new("loud", "Loud").with_emoji_level(EmojiLevel::Heavy);
        let cta = Component::new(CallToAction::new(CtaType::Share, "Pass it on"))
            .with_theme(Some(Arc::clone(&stored)));

        assert_eq!(cta.render(None), "Pass it on");
        assert_eq!(cta.render(Some(&loud)), "🔄 Pass it on");
        assert_eq!(cta.render(None), "Pass it on");
        assert_eq!(cta.theme(), Some(stored.as_ref()));
    }

    #[test]
    fn block_dispatch_matches_inner_block() {
        let body = Body::new("one||two", Structure::Comparison);
        let block = Block::from(body.clone());
        assert_eq!(block.render(None), body.render(None));
        assert_eq!(block.validate(), body.validate());
    }

    #[test]
    fn predicates() {
        let hook = Component::new(Hook::new(HookType::Question, "Why?"));
        let cta = Component::new(CallToAction::new(CtaType::Soft, "Thoughts?"));
        assert!(hook.is_hook() && !hook.is_call_to_action());
        assert!(cta.is_call_to_action() && !cta.is_hook());
    }
}
