pub mod body;
pub mod builder;
pub mod charts;
pub mod component;
pub mod composition;
pub mod content;
pub mod features;
pub mod theme;
pub mod tokens;
pub mod variants;
