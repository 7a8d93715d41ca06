//! Error types for sample profile generation.

use thiserror::Error;

/// Errors that can occur while generating sample profiles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No generated name could be turned into an email address.
    #[error("failed to generate a usable name after {max_attempts} attempts")]
    NameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}
