//! Form assembly: free-text field values into a [`ProfileRecord`].
//!
//! The form is keyed by [`ProfileField`], never by display labels, and
//! assembly is a pure function of its contents.

use std::collections::BTreeMap;

use thiserror::Error;

use super::{
    DiscordTag, EmailAddress, PersonName, PhoneNumber, ProfileField, ProfileRecord,
    ProfileValidationError, SocialNetworks, UnknownProfileField,
};

/// Errors returned by [`assemble`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// A required field is absent or blank.
    #[error("missing field: {field}")]
    MissingField {
        /// First missing field in canonical order.
        field: ProfileField,
    },
    /// A field is present but breaks a profile invariant.
    #[error("invalid field {field}: {reason}")]
    InvalidField {
        /// Field holding the invalid value.
        field: ProfileField,
        /// The violated invariant.
        reason: ProfileValidationError,
    },
}

impl From<ProfileValidationError> for AssemblyError {
    fn from(reason: ProfileValidationError) -> Self {
        Self::InvalidField {
            field: reason.field(),
            reason,
        }
    }
}

/// User-entered field values, as typed.
///
/// # Examples
/// ```
/// use profile_exchange::domain::{ProfileField, ProfileForm, form};
///
/// let mut form = ProfileForm::new();
/// form.set(ProfileField::FirstName, "Jane");
/// form.set(ProfileField::LastName, "Doe");
/// form.set(ProfileField::Email, "jane@doe.com");
/// form.set(ProfileField::PhoneNumber, "555-1234");
///
/// let record = form::assemble(&form).expect("complete form");
/// assert_eq!(record.name().to_string(), "Jane Doe");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    values: BTreeMap<ProfileField, String>,
}

impl ProfileForm {
    /// An empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form from canonical identifier and value pairs.
    ///
    /// Later pairs overwrite earlier ones for the same field.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownProfileField`] for the first key that is not a
    /// canonical identifier.
    pub fn from_identifiers<I, K, V>(pairs: I) -> Result<Self, UnknownProfileField>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::new();
        for (key, value) in pairs {
            let field = key.as_ref().parse::<ProfileField>()?;
            form.set(field, value);
        }
        Ok(form)
    }

    /// Pre-fill a form from an existing record, for editing.
    ///
    /// Absent handles and empty notes are left unset. Values are copied
    /// verbatim, so a record holding untrimmed text (possible for decoded
    /// scans) comes back from [`assemble`] with that text trimmed. Records
    /// that were themselves assembled round-trip unchanged.
    #[must_use]
    pub fn from_record(record: &ProfileRecord) -> Self {
        let mut form = Self::new();
        form.set(ProfileField::FirstName, record.name().first_name());
        form.set(ProfileField::LastName, record.name().last_name());
        form.set(ProfileField::Email, record.email().as_ref());
        form.set(ProfileField::PhoneNumber, record.phone_number().as_ref());

        let social = record.social_networks();
        if let Some(tag) = social.discord_tag() {
            form.set(ProfileField::DiscordTag, tag.as_ref());
        }
        if let Some(username) = social.instagram_username() {
            form.set(ProfileField::InstagramUsername, username);
        }
        if !record.notes().is_empty() {
            form.set(ProfileField::Notes, record.notes());
        }
        form
    }

    /// Record the text currently entered for `field`.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Clear whatever was entered for `field`.
    pub fn clear(&mut self, field: ProfileField) {
        self.values.remove(&field);
    }

    /// Text entered for `field`, verbatim.
    #[must_use]
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Entered values in canonical field order.
    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &str)> {
        self.values
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }

    fn trimmed(&self, field: ProfileField) -> Option<&str> {
        self.get(field)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    fn required(&self, field: ProfileField) -> Result<&str, AssemblyError> {
        self.trimmed(field)
            .ok_or(AssemblyError::MissingField { field })
    }
}

/// Assemble a validated record from form contents.
///
/// Required fields are checked for presence first, in canonical order, so
/// the reported [`AssemblyError::MissingField`] is deterministic. Values are
/// trimmed; blank optional handles become absent. Notes are kept verbatim
/// and default to empty.
///
/// # Errors
///
/// - [`AssemblyError::MissingField`] naming the first absent or blank
///   required field.
/// - [`AssemblyError::InvalidField`] when a present value fails validation.
pub fn assemble(form: &ProfileForm) -> Result<ProfileRecord, AssemblyError> {
    let first_name = form.required(ProfileField::FirstName)?;
    let last_name = form.required(ProfileField::LastName)?;
    let email = form.required(ProfileField::Email)?;
    let phone_number = form.required(ProfileField::PhoneNumber)?;

    let name = PersonName::new(first_name, last_name)?;
    let email_address = EmailAddress::new(email)?;
    let phone = PhoneNumber::new(phone_number)?;
    let discord_tag = form
        .trimmed(ProfileField::DiscordTag)
        .map(DiscordTag::new)
        .transpose()?;
    let instagram_username = form
        .trimmed(ProfileField::InstagramUsername)
        .map(str::to_owned);
    let notes = form.get(ProfileField::Notes).unwrap_or_default().to_owned();

    Ok(ProfileRecord::new(
        name,
        email_address,
        phone,
        SocialNetworks::new(discord_tag, instagram_username),
        notes,
    ))
}
