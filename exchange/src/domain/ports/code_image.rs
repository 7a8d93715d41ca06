//! Ports for turning canonical text into a scannable image and back.
//!
//! The image generation and camera decoding engines are external. These
//! traits are the seam; the image type stays opaque to the domain.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by code image adapters.
    pub enum AdapterError {
        /// The payload does not fit in a single scannable code.
        CapacityExceeded {
            /// Payload length in bytes.
            length: usize,
            /// Largest payload the adapter can encode.
            capacity: usize,
        } => "cannot generate code: {length} bytes exceeds capacity of {capacity}",
        /// The underlying engine is missing or failed.
        Unavailable {
            /// Engine-specific failure description.
            message: String,
        } => "code engine unavailable: {message}",
    }
}

/// Renders canonical text as a scannable image.
#[cfg_attr(test, mockall::automock(type Image = String;))]
pub trait CodeImageGenerator {
    /// Image handed to the UI; opaque to the domain.
    type Image;

    /// Render `text` verbatim as the code payload.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::CapacityExceeded`] when `text` is too long,
    /// or [`AdapterError::Unavailable`] when the engine fails.
    fn generate(&self, text: &str) -> Result<Self::Image, AdapterError>;
}

/// What a finished scan interaction produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A code was read; carries its raw text payload.
    Scanned(String),
    /// The user backed out. Not an error.
    Cancelled,
    /// The interaction ended without reading any code.
    NoResult,
}

/// Drives one camera scan interaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeScanner: Send + Sync {
    /// Suspend until the scan interaction completes.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Unavailable`] when no scanning engine can be
    /// started.
    async fn scan(&self) -> Result<ScanOutcome, AdapterError>;
}

/// Generator producing the payload itself as the "image".
///
/// Enforces a byte capacity so capacity failures can be exercised without a
/// real engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureCodeImageGenerator {
    capacity: usize,
}

impl FixtureCodeImageGenerator {
    /// Generator accepting payloads up to `capacity` bytes.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for FixtureCodeImageGenerator {
    fn default() -> Self {
        Self::with_capacity(crate::domain::codec::MAX_PAYLOAD_BYTES)
    }
}

impl CodeImageGenerator for FixtureCodeImageGenerator {
    type Image = String;

    fn generate(&self, text: &str) -> Result<Self::Image, AdapterError> {
        if text.len() > self.capacity {
            return Err(AdapterError::capacity_exceeded(text.len(), self.capacity));
        }
        Ok(text.to_owned())
    }
}

/// Scanner replaying a fixed outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCodeScanner {
    outcome: Result<ScanOutcome, AdapterError>,
}

impl FixtureCodeScanner {
    /// Scanner that always reads `text`.
    pub fn scanned(text: impl Into<String>) -> Self {
        Self::replaying(Ok(ScanOutcome::Scanned(text.into())))
    }

    /// Scanner that always returns `outcome`.
    #[must_use]
    pub const fn replaying(outcome: Result<ScanOutcome, AdapterError>) -> Self {
        Self { outcome }
    }
}

#[async_trait]
impl CodeScanner for FixtureCodeScanner {
    async fn scan(&self) -> Result<ScanOutcome, AdapterError> {
        self.outcome.clone()
    }
}
