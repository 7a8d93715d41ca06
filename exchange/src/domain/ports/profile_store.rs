//! Port for persisting the device owner's own profile.
//!
//! The store holds at most one record. Only one local writer exists, so the
//! contract carries no concurrency semantics and the trait is synchronous.

use std::cell::RefCell;

use crate::domain::ProfileRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by profile store adapters.
    pub enum ProfileStoreError {
        /// Reading or writing the underlying storage failed.
        Io {
            /// Adapter-specific failure description.
            message: String,
        } => "profile store I/O failed: {message}",
        /// Stored contents exist but no longer decode into a profile.
        Corrupt {
            /// Why the stored contents were rejected.
            message: String,
        } => "stored profile is unreadable: {message}",
    }
}

/// Port for loading and replacing the owner's profile.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileStore {
    /// Load the stored profile.
    ///
    /// Returns `Ok(None)` when no profile has been saved yet. Callers must
    /// treat that as "not configured" rather than inventing a profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileStoreError`] when storage cannot be read or holds
    /// unreadable contents.
    fn load_own_profile(&self) -> Result<Option<ProfileRecord>, ProfileStoreError>;

    /// Replace the stored profile with `record`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileStoreError::Io`] when the write fails; the previous
    /// profile is then left untouched.
    fn save_own_profile(&self, record: &ProfileRecord) -> Result<(), ProfileStoreError>;
}

/// In-memory store for previews and tests.
///
/// Uses a `RefCell`, matching the single-threaded access model of the
/// store; it is deliberately not `Sync`.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profile: RefCell<Option<ProfileRecord>>,
}

impl InMemoryProfileStore {
    /// An empty store, as on first launch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `record`.
    #[must_use]
    pub const fn with_profile(record: ProfileRecord) -> Self {
        Self {
            profile: RefCell::new(Some(record)),
        }
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn load_own_profile(&self) -> Result<Option<ProfileRecord>, ProfileStoreError> {
        Ok(self.profile.borrow().clone())
    }

    fn save_own_profile(&self, record: &ProfileRecord) -> Result<(), ProfileStoreError> {
        self.profile.replace(Some(record.clone()));
        Ok(())
    }
}
