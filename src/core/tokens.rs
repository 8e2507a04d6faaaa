/// Platform limits and the glyph tables shared by every block.
use crate::schema::style::{CtaType, HookType, SeparatorStyle, TipStyle};

/// Hard platform ceiling for a composed post, in characters.
pub const MAX_POST_LENGTH: usize = 3000;
/// Where the platform folds a post behind "see more".
pub const TRUNCATION_POINT: usize = 210;
pub const ELLIPSIS: &str = "...";

pub const HOOK_MAX_LENGTH: usize = 200;
pub const CTA_MAX_LENGTH: usize = 200;
pub const BODY_MAX_LENGTH: usize = 2800;
pub const QUOTE_MAX_LENGTH: usize = 500;
pub const TAKEAWAY_MAX_LENGTH: usize = 500;

/// Hashtag cap when no theme is in effect.
pub const DEFAULT_MAX_HASHTAGS: usize = 5;

/// Marker separating parts of framework and comparison bodies.
pub const PART_DELIMITER: &str = "||";

pub const ARROW: &str = "→";
pub const BULLET: &str = "•";
pub const HYPHEN: &str = "-";
pub const PIN: &str = "📌";
pub const REJECT: &str = "❌";
pub const ACCEPT: &str = "✅";
pub const ALARM: &str = "🚨";

/// Line prefixes already treated as list bullets.
pub const RECOGNIZED_BULLETS: &[&str] = &[
    "→", "➜", "►", "▶", "•", "◦", "▪", "▸", "✓", "✅", "☑", "-", "*",
];

pub const BAR_COLORS: &[&str] = &["🟦", "🟩", "🟨", "🟧", "🟥", "🟪"];
pub const PROGRESS_FILLED: &str = "█";
pub const PROGRESS_EMPTY: &str = "░";
pub const PROGRESS_CELLS: u32 = 10;
pub const MEDALS: &[&str] = &["🥇", "🥈", "🥉"];
pub const EMOJI_NUMBERS: &[&str] = &[
    "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟",
];
pub const CHECKED: &str = "✅";
pub const UNCHECKED: &str = "☐";
pub const RADIO: &str = "◯";

// Title glyphs for feature and chart blocks.
pub const QUOTE_GLYPH: &str = "💬";
pub const METRICS_GLYPH: &str = "📈";
pub const CALENDAR_GLYPH: &str = "📅";
pub const INSIGHT_GLYPH: &str = "💡";
pub const BALANCE_GLYPH: &str = "⚖️";
pub const CHECKLIST_GLYPH: &str = "✓";
pub const TRANSFORM_GLYPH: &str = "🔄";
pub const STATS_GLYPH: &str = "📊";
pub const FEATURES_GLYPH: &str = "✨";
pub const LIST_GLYPH: &str = "📝";
pub const TIME_GLYPH: &str = "⏱️";
pub const RANKING_GLYPH: &str = "🏆";

/// The literal divider, including its surrounding blank lines.
pub fn separator(style: SeparatorStyle) -> &'static str {
    match style {
        SeparatorStyle::Line => "\n\n---\n\n",
        SeparatorStyle::Dots => "\n\n• • •\n\n",
        SeparatorStyle::Wave => "\n\n~\n\n",
        SeparatorStyle::Heavy => "\n\n━━━\n\n",
        SeparatorStyle::Double => "\n\n===\n\n",
        SeparatorStyle::Minimal => "\n\n",
    }
}

pub fn cta_emoji(cta: CtaType) -> &'static str {
    match cta {
        CtaType::Direct => "👇",
        CtaType::Curiosity => "🤔",
        CtaType::Action => "⚡",
        CtaType::Share => "🔄",
        CtaType::Soft => "💭",
    }
}

pub fn tip_emoji(style: TipStyle) -> &'static str {
    match style {
        TipStyle::Info => "ℹ️",
        TipStyle::Tip => "💡",
        TipStyle::Warning => "⚠️",
        TipStyle::Success => "✅",
    }
}

pub fn tip_title(style: TipStyle) -> &'static str {
    match style {
        TipStyle::Info => "INFO",
        TipStyle::Tip => "PRO TIP",
        TipStyle::Warning => "WARNING",
        TipStyle::Success => "SUCCESS",
    }
}

/// Opening line used when a hook has to be synthesized.
pub fn stock_hook(hook: HookType) -> &'static str {
    match hook {
        HookType::Question => "What would you do differently?",
        HookType::Stat => "New data shows a shift worth noticing.",
        HookType::Story => "Here's what happened.",
        HookType::Controversy => "Unpopular opinion:",
        HookType::List => "Here's what actually works:",
        HookType::Curiosity => "What nobody tells you:",
    }
}

/// Closing line used when a call-to-action has to be synthesized.
pub fn stock_cta(cta: CtaType) -> &'static str {
    match cta {
        CtaType::Direct => "Let me know in the comments.",
        CtaType::Curiosity => "What do you think?",
        CtaType::Action => "Save this for later.",
        CtaType::Share => "Who else needs this?",
        CtaType::Soft => "Thoughts?",
    }
}

/// Character count as the platform measures it.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// The first `n` characters of `text`.
pub fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_carry_their_own_blank_lines() {
        for style in SeparatorStyle::ALL {
            let divider = separator(*style);
            assert!(divider.starts_with("\n\n"), "{style}");
            assert!(divider.ends_with("\n\n"), "{style}");
        }
    }

    #[test]
    fn char_len_counts_scalar_values() {
        assert_eq!(char_len("→ A"), 3);
        assert_eq!(char_len("📌"), 1);
    }

    #[test]
    fn take_chars_respects_boundaries() {
        assert_eq!(take_chars("→→→→", 2), "→→");
        assert_eq!(take_chars("abc", 10), "abc");
        assert_eq!(take_chars("abc", 0), "");
    }

    #[test]
    fn stock_lines_fit_their_ceilings() {
        for hook in HookType::ALL {
            assert!(char_len(stock_hook(*hook)) <= HOOK_MAX_LENGTH);
        }
        for cta in CtaType::ALL {
            assert!(char_len(stock_cta(*cta)) <= CTA_MAX_LENGTH);
        }
    }
}
