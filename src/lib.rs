//! Post Composer — themed, length-safe composition of professional social posts.
//!
//! Posts are built from an ordered list of typed content blocks (hooks,
//! bodies, calls-to-action, feature blocks, text charts), rendered under an
//! immutable voice theme, and joined into plain text that never exceeds the
//! platform's character ceiling. Variant schemas flatten a caller's style
//! choices into one resolved config before composition.

pub mod core;
pub mod schema;

pub use crate::core::builder::PostBuilder;
pub use crate::core::component::{Block, Component, PostComponent};
pub use crate::core::composition::{ComposablePost, ComposeError, PostSummary};
pub use crate::core::theme::{Theme, ThemeError, ThemeRegistry};
pub use crate::core::variants::{VariantError, VariantResolver, VariantSchema};
pub use crate::schema::config::{ConfigValue, PartialConfig, ResolvedConfig, Selection};
