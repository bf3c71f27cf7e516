//! Content loading errors.

use thiserror::Error;

/// Result type alias for content loading.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Problems found while loading or validating site content.
///
/// Content is authored by hand and embedded at compile time, so every variant
/// here is an authoring mistake rather than a runtime condition.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to parse site content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{owner} links to '{link}', which is not an absolute site path")]
    InvalidLink { owner: String, link: String },

    #[error("Service id '{0}' is declared more than once")]
    DuplicateService(String),

    #[error("A service entry has an empty id")]
    EmptyServiceId,

    #[error("Image override targets unknown service '{0}'")]
    UnknownOverride(String),
}
