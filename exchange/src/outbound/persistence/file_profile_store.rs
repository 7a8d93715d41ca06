//! File-backed profile store.
//!
//! The profile lives in one file holding its canonical text encoding, inside
//! a capability-scoped directory. Writes replace the file atomically.

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::{debug, warn};

use crate::config::ExchangeSettings;
use crate::domain::ports::{ProfileStore, ProfileStoreError};
use crate::domain::{ProfileRecord, codec};

use super::atomic_io::replace_file;

/// [`ProfileStore`] persisting one file in a directory.
#[derive(Debug)]
pub struct FileProfileStore {
    dir: Dir,
    file_name: Utf8PathBuf,
}

impl FileProfileStore {
    /// Store the profile as `file_name` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileStoreError::Io`] when `file_name` is not a plain
    /// file name.
    pub fn new(dir: Dir, file_name: impl Into<Utf8PathBuf>) -> Result<Self, ProfileStoreError> {
        let name = file_name.into();
        let mut components = name.components();
        let (Some(Utf8Component::Normal(_)), None) = (components.next(), components.next()) else {
            return Err(ProfileStoreError::io(format!(
                "profile file must be a plain file name, got {name}"
            )));
        };
        Ok(Self {
            dir,
            file_name: name,
        })
    }

    /// Open the store described by `settings`, creating the data directory
    /// when missing.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileStoreError::Io`] when the directory cannot be
    /// created or opened, or the configured file name is not plain.
    pub fn open(settings: &ExchangeSettings) -> Result<Self, ProfileStoreError> {
        let data_dir = settings.data_dir();
        Dir::create_ambient_dir_all(&data_dir, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(&data_dir, ambient_authority()))
            .map_err(|err| {
                ProfileStoreError::io(format!(
                    "cannot open data directory {}: {err}",
                    data_dir.display()
                ))
            })
            .and_then(|dir| Self::new(dir, settings.profile_file()))
    }

    /// Name of the profile file within the data directory.
    #[must_use]
    pub fn file_name(&self) -> &Utf8Path {
        &self.file_name
    }
}

impl ProfileStore for FileProfileStore {
    fn load_own_profile(&self) -> Result<Option<ProfileRecord>, ProfileStoreError> {
        let text = match self.dir.read_to_string(&self.file_name) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(file = %self.file_name, "no stored profile");
                return Ok(None);
            }
            Err(err) => {
                return Err(ProfileStoreError::io(format!(
                    "cannot read {}: {err}",
                    self.file_name
                )));
            }
        };

        codec::decode(&text).map(Some).map_err(|err| {
            warn!(file = %self.file_name, error = %err, "stored profile is unreadable");
            ProfileStoreError::corrupt(err.to_string())
        })
    }

    fn save_own_profile(&self, record: &ProfileRecord) -> Result<(), ProfileStoreError> {
        let text = codec::encode(record);
        replace_file(&self.dir, self.file_name.as_str(), &text).map_err(|err| {
            ProfileStoreError::io(format!("cannot write {}: {err}", self.file_name))
        })?;
        debug!(file = %self.file_name, bytes = text.len(), "stored own profile");
        Ok(())
    }
}
