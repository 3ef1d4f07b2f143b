//! Error types for template inference and expansion.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template requires at least one segment")]
    NoSegments,

    #[error("template requires at least one alternate")]
    NoAlternates,

    #[error("segment '{scid}' has no '{prop}' text")]
    MissingProperty { scid: String, prop: String },

    #[error("unsupported pattern: segment '{scid}' is the only elided segment and cannot be aligned")]
    UnsupportedPattern { scid: String },

    #[error("nothing to expand: '{text}' contains no alternate")]
    Expansion { text: String },

    #[error("invalid alternate pattern")]
    Pattern(#[from] regex::Error),
}
