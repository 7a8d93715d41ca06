//! Contact profile data model.
//!
//! Construction is the only validation gate: every value object checks its
//! invariants in `new`, and a [`ProfileRecord`] can only be built from
//! validated parts. Fields are private; replacing a profile means building
//! a new record.

use std::fmt;

use thiserror::Error;

use super::ProfileField;

/// Validation errors raised while constructing profile value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileValidationError {
    /// First name is empty once trimmed.
    #[error("first name must not be empty")]
    EmptyFirstName,
    /// Last name is empty once trimmed.
    #[error("last name must not be empty")]
    EmptyLastName,
    /// Email is empty once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email has no `@` separator.
    #[error("email must contain an @")]
    EmailMissingAt,
    /// Email has more than one `@`.
    #[error("email must contain exactly one @")]
    EmailMultipleAt,
    /// Nothing before the `@`.
    #[error("email is missing the part before the @")]
    EmailEmptyLocalPart,
    /// Nothing after the `@`.
    #[error("email is missing the domain after the @")]
    EmailEmptyDomain,
    /// Phone number is empty once trimmed.
    #[error("phone number must not be empty")]
    EmptyPhoneNumber,
    /// Discord tag is present but empty once trimmed.
    #[error("discord tag must not be empty")]
    EmptyDiscordTag,
}

impl ProfileValidationError {
    /// Canonical field the violated invariant belongs to.
    #[must_use]
    pub const fn field(&self) -> ProfileField {
        match self {
            Self::EmptyFirstName => ProfileField::FirstName,
            Self::EmptyLastName => ProfileField::LastName,
            Self::EmptyEmail
            | Self::EmailMissingAt
            | Self::EmailMultipleAt
            | Self::EmailEmptyLocalPart
            | Self::EmailEmptyDomain => ProfileField::Email,
            Self::EmptyPhoneNumber => ProfileField::PhoneNumber,
            Self::EmptyDiscordTag => ProfileField::DiscordTag,
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Given and family name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName {
    first_name: String,
    last_name: String,
}

impl PersonName {
    /// Validate and construct a [`PersonName`].
    ///
    /// # Errors
    ///
    /// Returns [`ProfileValidationError::EmptyFirstName`] or
    /// [`ProfileValidationError::EmptyLastName`] when either part is blank.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, ProfileValidationError> {
        let first = first_name.into();
        if is_blank(&first) {
            return Err(ProfileValidationError::EmptyFirstName);
        }
        let last = last_name.into();
        if is_blank(&last) {
            return Err(ProfileValidationError::EmptyLastName);
        }
        Ok(Self {
            first_name: first,
            last_name: last,
        })
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Email address with a deliberately minimal shape check.
///
/// ## Invariants
/// - exactly one `@`;
/// - non-empty text on both sides of it.
///
/// Nothing else is checked; addresses are stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    ///
    /// # Errors
    ///
    /// Returns the [`ProfileValidationError`] email variant describing the
    /// first violated rule.
    pub fn new(email: impl Into<String>) -> Result<Self, ProfileValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, ProfileValidationError> {
        if is_blank(&email) {
            return Err(ProfileValidationError::EmptyEmail);
        }

        let Some((local, domain)) = email.split_once('@') else {
            return Err(ProfileValidationError::EmailMissingAt);
        };
        if domain.contains('@') {
            return Err(ProfileValidationError::EmailMultipleAt);
        }
        if local.is_empty() {
            return Err(ProfileValidationError::EmailEmptyLocalPart);
        }
        if domain.is_empty() {
            return Err(ProfileValidationError::EmailEmptyDomain);
        }

        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ProfileValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Phone number, free-form and displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and construct a [`PhoneNumber`].
    ///
    /// # Errors
    ///
    /// Returns [`ProfileValidationError::EmptyPhoneNumber`] when blank.
    pub fn new(phone_number: impl Into<String>) -> Result<Self, ProfileValidationError> {
        Self::from_owned(phone_number.into())
    }

    fn from_owned(phone_number: String) -> Result<Self, ProfileValidationError> {
        if is_blank(&phone_number) {
            return Err(ProfileValidationError::EmptyPhoneNumber);
        }
        Ok(Self(phone_number))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ProfileValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Discord handle such as `jane#1234`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscordTag(String);

impl DiscordTag {
    /// Validate and construct a [`DiscordTag`].
    ///
    /// # Errors
    ///
    /// Returns [`ProfileValidationError::EmptyDiscordTag`] when blank.
    pub fn new(tag: impl Into<String>) -> Result<Self, ProfileValidationError> {
        Self::from_owned(tag.into())
    }

    fn from_owned(tag: String) -> Result<Self, ProfileValidationError> {
        if is_blank(&tag) {
            return Err(ProfileValidationError::EmptyDiscordTag);
        }
        Ok(Self(tag))
    }
}

impl AsRef<str> for DiscordTag {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DiscordTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DiscordTag> for String {
    fn from(value: DiscordTag) -> Self {
        value.0
    }
}

impl TryFrom<String> for DiscordTag {
    type Error = ProfileValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Optional social network handles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SocialNetworks {
    discord_tag: Option<DiscordTag>,
    instagram_username: Option<String>,
}

impl SocialNetworks {
    /// Build from already validated handles.
    #[must_use]
    pub const fn new(discord_tag: Option<DiscordTag>, instagram_username: Option<String>) -> Self {
        Self {
            discord_tag,
            instagram_username,
        }
    }

    /// Discord tag, when the owner shared one.
    #[must_use]
    pub const fn discord_tag(&self) -> Option<&DiscordTag> {
        self.discord_tag.as_ref()
    }

    /// Instagram username, when the owner shared one.
    #[must_use]
    pub fn instagram_username(&self) -> Option<&str> {
        self.instagram_username.as_deref()
    }
}

/// A validated contact profile, the unit of exchange and storage.
///
/// ## Invariants
/// - both name parts are non-empty once trimmed;
/// - `email` has exactly one `@` with text on both sides;
/// - `phone_number` is non-empty once trimmed;
/// - a present Discord tag is non-empty once trimmed.
///
/// Equality is structural, including whether optional handles are present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileRecord {
    name: PersonName,
    email: EmailAddress,
    phone_number: PhoneNumber,
    social_networks: SocialNetworks,
    notes: String,
}

impl ProfileRecord {
    /// Build a record from validated components.
    #[must_use]
    pub const fn new(
        name: PersonName,
        email: EmailAddress,
        phone_number: PhoneNumber,
        social_networks: SocialNetworks,
        notes: String,
    ) -> Self {
        Self {
            name,
            email,
            phone_number,
            social_networks,
            notes,
        }
    }

    /// Fallible constructor validating every field from raw strings.
    ///
    /// Prefer [`ProfileRecord::new`] when components are already validated.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProfileValidationError`] in canonical field
    /// order.
    pub fn try_from_parts(parts: ProfileParts) -> Result<Self, ProfileValidationError> {
        let ProfileParts {
            first_name,
            last_name,
            email,
            phone_number,
            discord_tag,
            instagram_username,
            notes,
        } = parts;

        let name = PersonName::new(first_name, last_name)?;
        let email_address = EmailAddress::new(email)?;
        let phone = PhoneNumber::new(phone_number)?;
        let discord = discord_tag.map(DiscordTag::new).transpose()?;

        Ok(Self::new(
            name,
            email_address,
            phone,
            SocialNetworks::new(discord, instagram_username),
            notes,
        ))
    }

    /// Owner's name.
    #[must_use]
    pub const fn name(&self) -> &PersonName {
        &self.name
    }

    /// Owner's email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Owner's phone number.
    #[must_use]
    pub const fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    /// Shared social handles.
    #[must_use]
    pub const fn social_networks(&self) -> &SocialNetworks {
        &self.social_networks
    }

    /// Free-form notes; may be empty.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Break the record back into raw strings.
    #[must_use]
    pub fn into_parts(self) -> ProfileParts {
        let Self {
            name,
            email,
            phone_number,
            social_networks,
            notes,
        } = self;
        ProfileParts {
            first_name: name.first_name,
            last_name: name.last_name,
            email: email.into(),
            phone_number: phone_number.into(),
            discord_tag: social_networks.discord_tag.map(String::from),
            instagram_username: social_networks.instagram_username,
            notes,
        }
    }
}

/// Unvalidated profile fields as plain strings.
///
/// This is the shape shared by the codec and any host that keeps profiles
/// as loose data; [`ProfileRecord::try_from_parts`] is the way back in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileParts {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone_number: String,
    /// Discord tag, `None` when not shared.
    pub discord_tag: Option<String>,
    /// Instagram username, `None` when not shared.
    pub instagram_username: Option<String>,
    /// Free-form notes.
    pub notes: String,
}

impl TryFrom<ProfileParts> for ProfileRecord {
    type Error = ProfileValidationError;

    fn try_from(value: ProfileParts) -> Result<Self, Self::Error> {
        Self::try_from_parts(value)
    }
}
