//! Pipeline error taxonomy.

/// Errors produced by the generation pipeline.
///
/// Each variant corresponds to one pipeline stage so the HTTP boundary
/// can map failures to distinct status codes instead of a blanket 500.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Malformed or unsupported request parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Content cannot be represented at the requested robustness level.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Unsupported output format or invalid size.
    #[error("render error: {0}")]
    Render(String),
}
