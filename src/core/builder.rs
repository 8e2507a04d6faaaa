/// Canned post patterns built from plain `ComposablePost` calls.
use std::sync::Arc;

use crate::core::composition::ComposablePost;
use crate::core::theme::Theme;
use crate::core::tokens::PART_DELIMITER;
use crate::schema::style::{
    CtaType, HashtagPlacement, HookType, PostType, SeparatorStyle, Structure,
};

pub struct PostBuilder;

impl PostBuilder {
    /// Stat hook, named framework, conclusion and a curiosity CTA.
    pub fn thought_leadership_post(
        hook_stat: &str,
        framework_name: &str,
        framework_parts: &[&str],
        conclusion: &str,
        theme: Option<Arc<Theme>>,
    ) -> ComposablePost {
        let mut post = Self::text_post(theme);
        post.add_hook(HookType::Stat, hook_stat)
            .add_body(format!("Here's the {framework_name}:"), Some(Structure::Linear))
            .add_body(framework_parts.join(PART_DELIMITER), Some(Structure::Framework))
            .add_separator(SeparatorStyle::Line)
            .add_body(conclusion, Some(Structure::Linear))
            .add_cta(CtaType::Curiosity, "Which resonates most with you?")
            .add_hashtags(
                [framework_name.replace(' ', ""), "Leadership".into(), "Strategy".into()],
                HashtagPlacement::End,
            );
        post
    }

    pub fn story_post(
        hook: &str,
        problem: &str,
        journey: &str,
        solution: &str,
        lesson: &str,
        theme: Option<Arc<Theme>>,
    ) -> ComposablePost {
        let mut post = Self::text_post(theme);
        post.add_hook(HookType::Story, hook)
            .add_body(
                format!("{problem}\n\n{journey}\n\n{solution}"),
                Some(Structure::StoryArc),
            )
            .add_separator(SeparatorStyle::Dots)
            .add_body(format!("The lesson: {lesson}"), Some(Structure::Linear))
            .add_cta(CtaType::Soft, "Have you experienced something similar?");
        post
    }

    pub fn listicle_post(
        hook: &str,
        items: &[&str],
        conclusion: &str,
        theme: Option<Arc<Theme>>,
    ) -> ComposablePost {
        let mut post = Self::text_post(theme);
        post.add_hook(HookType::List, hook)
            .add_body(items.join("\n"), Some(Structure::Listicle))
            .add_separator(SeparatorStyle::Wave)
            .add_body(conclusion, Some(Structure::Linear))
            .add_cta(CtaType::Action, "Save this for later");
        post
    }

    pub fn comparison_post(
        hook: &str,
        option_a: &str,
        option_b: &str,
        recommendation: &str,
        theme: Option<Arc<Theme>>,
    ) -> ComposablePost {
        let mut post = Self::text_post(theme);
        post.add_hook(HookType::Question, hook)
            .add_body(
                format!("{option_a}{PART_DELIMITER}{option_b}"),
                Some(Structure::Comparison),
            )
            .add_separator(SeparatorStyle::Line)
            .add_body(format!("My take: {recommendation}"), Some(Structure::Linear))
            .add_cta(CtaType::Curiosity, "Which would you choose?");
        post
    }

    fn text_post(theme: Option<Arc<Theme>>) -> ComposablePost {
        let post = ComposablePost::new(PostType::Text);
        match theme {
            Some(theme) => post.with_theme(theme),
            None => post,
        }
    }
}
