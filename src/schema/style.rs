/// Closed vocabularies for themes, components and variant selections.
///
/// Every value has a canonical snake_case spelling shared by `as_str`,
/// `FromStr` and the serde representation, so theme files, resolved configs
/// and component constructors all speak the same strings.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string did not name any member of the expected vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: '{value}'")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $text ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok(Self::$variant), )+
                    other => Err(UnknownValue {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// How liberally emoji accents are used.
    EmojiLevel {
        None => "none",
        Minimal => "minimal",
        Moderate => "moderate",
        Expressive => "expressive",
        Heavy => "heavy",
    }
}

impl EmojiLevel {
    /// Moderate and above decorate text with emoji glyphs.
    pub fn uses_emoji_accents(&self) -> bool {
        matches!(self, Self::Moderate | Self::Expressive | Self::Heavy)
    }
}

string_enum! {
    /// Vertical whitespace between paragraphs.
    LineBreakStyle {
        Tight => "tight",
        Standard => "standard",
        Relaxed => "relaxed",
        Generous => "generous",
        Extreme => "extreme",
    }
}

impl LineBreakStyle {
    /// Number of empty lines placed between two paragraphs.
    pub fn blank_lines(&self) -> usize {
        match self {
            Self::Tight | Self::Standard => 1,
            Self::Relaxed | Self::Generous => 2,
            Self::Extreme => 3,
        }
    }

    /// The newline run that produces `blank_lines()` empty lines.
    pub fn paragraph_break(&self) -> String {
        "\n".repeat(self.blank_lines() + 1)
    }
}

string_enum! {
    HashtagStrategy {
        Minimal => "minimal",
        Optimal => "optimal",
        Maximal => "maximal",
    }
}

impl HashtagStrategy {
    pub fn max_tags(&self) -> usize {
        match self {
            Self::Minimal => 3,
            Self::Optimal => 5,
            Self::Maximal => 7,
        }
    }
}

string_enum! {
    ControversyLevel {
        Safe => "safe",
        Mild => "mild",
        Bold => "bold",
        Provocative => "provocative",
    }
}

string_enum! {
    VulnerabilityLevel {
        Guarded => "guarded",
        Selective => "selective",
        Open => "open",
        Raw => "raw",
    }
}

string_enum! {
    Formality {
        Formal => "formal",
        Conversational => "conversational",
        Friendly => "friendly",
        Casual => "casual",
    }
}

string_enum! {
    /// Opening-line archetypes.
    HookType {
        Question => "question",
        Stat => "stat",
        Story => "story",
        Controversy => "controversy",
        List => "list",
        Curiosity => "curiosity",
    }
}

string_enum! {
    /// Closing call-to-action archetypes.
    CtaType {
        Direct => "direct",
        Curiosity => "curiosity",
        Action => "action",
        Share => "share",
        Soft => "soft",
    }
}

string_enum! {
    /// Layout of a body block's raw content.
    Structure {
        Linear => "linear",
        Listicle => "listicle",
        Framework => "framework",
        StoryArc => "story_arc",
        Comparison => "comparison",
    }
}

impl Default for Structure {
    fn default() -> Self {
        Self::Linear
    }
}

string_enum! {
    HashtagPlacement {
        Inline => "inline",
        Mid => "mid",
        End => "end",
        FirstComment => "first_comment",
    }
}

impl Default for HashtagPlacement {
    fn default() -> Self {
        Self::End
    }
}

string_enum! {
    SeparatorStyle {
        Line => "line",
        Dots => "dots",
        Wave => "wave",
        Heavy => "heavy",
        Double => "double",
        Minimal => "minimal",
    }
}

impl Default for SeparatorStyle {
    fn default() -> Self {
        Self::Line
    }
}

string_enum! {
    TimelineStyle {
        Arrow => "arrow",
        Numbered => "numbered",
        Dated => "dated",
    }
}

string_enum! {
    TakeawayStyle {
        Box => "box",
        Highlight => "highlight",
        Simple => "simple",
    }
}

string_enum! {
    TipStyle {
        Info => "info",
        Tip => "tip",
        Warning => "warning",
        Success => "success",
    }
}

string_enum! {
    NumberStyle {
        Numbers => "numbers",
        EmojiNumbers => "emoji_numbers",
        BoldNumbers => "bold_numbers",
    }
}

string_enum! {
    /// Post formats that carry their own variant schema.
    PostType {
        Text => "text",
        Poll => "poll",
        Document => "document",
    }
}
