//! Services behind the "my profile" screen.
//!
//! Loading, replacing, previewing and rendering the owner's profile. When no profile has
//! been saved yet the service says so; it never substitutes a placeholder.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::ports::{AdapterError, CodeImageGenerator, ProfileStore, ProfileStoreError};
use crate::domain::{AssemblyError, ProfileForm, ProfileRecord, codec, form};

/// The owner's profile as the UI should present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnProfile {
    /// A profile has been saved.
    Configured(ProfileRecord),
    /// Nothing saved yet; the UI should prompt the owner to create one.
    NotConfigured,
}

/// A rendered code ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnCode<I> {
    heading: String,
    payload: String,
    image: I,
}

impl<I> OwnCode<I> {
    /// Heading shown above the code; the owner's full name.
    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Canonical text embedded in the image.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The generated image.
    #[must_use]
    pub const fn image(&self) -> &I {
        &self.image
    }

    /// Take ownership of the generated image.
    #[must_use]
    pub fn into_image(self) -> I {
        self.image
    }
}

/// Why the owner's code could not be shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    /// No profile has been saved.
    #[error("no profile configured")]
    NotConfigured,
    /// The stored profile could not be loaded.
    #[error(transparent)]
    Store(#[from] ProfileStoreError),
    /// The image engine rejected the payload.
    #[error(transparent)]
    Generate(#[from] AdapterError),
}

/// Why a profile update was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileUpdateError {
    /// The form contents do not make a valid profile.
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
    /// The assembled profile could not be saved.
    #[error(transparent)]
    Store(#[from] ProfileStoreError),
}

/// Why a form could not be previewed as a code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// The form contents do not make a valid profile.
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
    /// The image engine rejected the payload.
    #[error(transparent)]
    Generate(#[from] AdapterError),
}

/// Owner profile service over a store and a code image generator.
#[derive(Clone)]
pub struct OwnProfileService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
}

impl<S, G> OwnProfileService<S, G> {
    /// Create a service over `store` and `generator`.
    pub const fn new(store: Arc<S>, generator: Arc<G>) -> Self {
        Self { store, generator }
    }
}

impl<S, G> OwnProfileService<S, G>
where
    S: ProfileStore,
    G: CodeImageGenerator,
{
    /// Current owner profile.
    ///
    /// # Errors
    ///
    /// Propagates [`ProfileStoreError`] from the store.
    pub fn own_profile(&self) -> Result<OwnProfile, ProfileStoreError> {
        Ok(self
            .store
            .load_own_profile()?
            .map_or(OwnProfile::NotConfigured, OwnProfile::Configured))
    }

    /// Assemble `form` and make it the stored profile.
    ///
    /// Nothing is written when assembly fails.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileUpdateError::Assembly`] for incomplete or invalid
    /// forms and [`ProfileUpdateError::Store`] when saving fails.
    pub fn replace_own_profile(
        &self,
        profile_form: &ProfileForm,
    ) -> Result<ProfileRecord, ProfileUpdateError> {
        let record = form::assemble(profile_form)?;
        self.store.save_own_profile(&record)?;
        info!(
            has_discord = record.social_networks().discord_tag().is_some(),
            has_instagram = record.social_networks().instagram_username().is_some(),
            "own profile saved"
        );
        Ok(record)
    }

    /// Load, encode and render the owner's profile as a code.
    ///
    /// The generator is only invoked once a stored profile exists.
    ///
    /// # Errors
    ///
    /// - [`DisplayError::NotConfigured`] when nothing has been saved.
    /// - [`DisplayError::Store`] when loading fails.
    /// - [`DisplayError::Generate`] when the payload cannot be rendered.
    pub fn render_own_code(&self) -> Result<OwnCode<G::Image>, DisplayError> {
        let record = self
            .store
            .load_own_profile()?
            .ok_or(DisplayError::NotConfigured)?;

        self.code_for(&record).map_err(DisplayError::from)
    }

    /// Render `profile_form` as a code without saving it.
    ///
    /// # Errors
    ///
    /// - [`PreviewError::Assembly`] for incomplete or invalid forms; the
    ///   generator is not called.
    /// - [`PreviewError::Generate`] when the payload cannot be rendered.
    pub fn preview_code(
        &self,
        profile_form: &ProfileForm,
    ) -> Result<OwnCode<G::Image>, PreviewError> {
        let record = form::assemble(profile_form)?;
        self.code_for(&record).map_err(PreviewError::from)
    }

    fn code_for(&self, record: &ProfileRecord) -> Result<OwnCode<G::Image>, AdapterError> {
        let payload = codec::encode(record);
        debug!(payload_bytes = payload.len(), "rendering profile code");
        let image = self.generator.generate(&payload)?;

        Ok(OwnCode {
            heading: record.name().to_string(),
            payload,
            image,
        })
    }
}

#[cfg(test)]
#[path = "own_profile_service_tests.rs"]
mod tests;
