//! Service behind the "scan a profile" screen.
//!
//! A scan ends in exactly one [`ScanResolution`]. A successful scan yields a
//! [`ScannedProfile`] that the caller hands to the viewer directly; no scan
//! result is kept anywhere else.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::codec::{self, DecodeError, MAX_PAYLOAD_BYTES};
use crate::domain::ports::{AdapterError, CodeScanner, ScanOutcome};
use crate::domain::{ProfileCard, ProfileRecord};

/// A profile read from someone else's code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedProfile {
    record: ProfileRecord,
}

impl ScannedProfile {
    /// The decoded, validated profile.
    #[must_use]
    pub const fn record(&self) -> &ProfileRecord {
        &self.record
    }

    /// Take ownership of the decoded profile.
    #[must_use]
    pub fn into_record(self) -> ProfileRecord {
        self.record
    }

    /// Lay the profile out for the viewer.
    #[must_use]
    pub fn card(&self) -> ProfileCard {
        ProfileCard::from_record(&self.record)
    }
}

/// Why a scan did not produce a profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanRejection {
    /// The code was read but is not a valid profile.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The scanning engine failed.
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

/// How a scan interaction ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResolution {
    /// A valid profile was read.
    Profile(ScannedProfile),
    /// The user cancelled; show nothing.
    Cancelled,
    /// No code was read; the UI may offer to scan again.
    NoResult,
    /// Something was read or attempted but failed; show the message.
    Rejected(ScanRejection),
}

impl ScanResolution {
    /// Resolve a finished scan outcome.
    ///
    /// Only [`ScanOutcome::Scanned`] text is decoded. Text longer than
    /// [`MAX_PAYLOAD_BYTES`] cannot have come from a genuine code and is
    /// rejected without parsing.
    #[must_use]
    pub fn resolve(outcome: ScanOutcome) -> Self {
        match outcome {
            ScanOutcome::Scanned(text) => match decode_scanned(&text) {
                Ok(record) => Self::Profile(ScannedProfile { record }),
                Err(err) => {
                    warn!(error = %err, payload_bytes = text.len(), "scanned code rejected");
                    Self::Rejected(ScanRejection::Decode(err))
                }
            },
            ScanOutcome::Cancelled => Self::Cancelled,
            ScanOutcome::NoResult => Self::NoResult,
        }
    }
}

fn decode_scanned(text: &str) -> Result<ProfileRecord, DecodeError> {
    if text.len() > MAX_PAYLOAD_BYTES {
        return Err(DecodeError::malformed(format!(
            "payload of {} bytes exceeds the {MAX_PAYLOAD_BYTES} byte limit",
            text.len()
        )));
    }
    codec::decode(text)
}

const fn outcome_kind(outcome: &ScanOutcome) -> &'static str {
    match outcome {
        ScanOutcome::Scanned(_) => "scanned",
        ScanOutcome::Cancelled => "cancelled",
        ScanOutcome::NoResult => "no_result",
    }
}

/// Scan service over a code scanner.
#[derive(Clone)]
pub struct ScanService<C> {
    scanner: Arc<C>,
}

impl<C> ScanService<C> {
    /// Create a service over `scanner`.
    pub const fn new(scanner: Arc<C>) -> Self {
        Self { scanner }
    }
}

impl<C> ScanService<C>
where
    C: CodeScanner,
{
    /// Run one scan interaction and resolve its outcome.
    pub async fn scan(&self) -> ScanResolution {
        match self.scanner.scan().await {
            Ok(outcome) => {
                debug!(outcome = outcome_kind(&outcome), "scan finished");
                ScanResolution::resolve(outcome)
            }
            Err(err) => {
                warn!(error = %err, "scanner failed");
                ScanResolution::Rejected(ScanRejection::Adapter(err))
            }
        }
    }
}

#[cfg(test)]
#[path = "scan_service_tests.rs"]
mod tests;
