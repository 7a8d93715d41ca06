//! Canonical text encoding of a [`ProfileRecord`].
//!
//! The encoding is a single-line JSON object whose keys are the canonical
//! field identifiers, prefixed by a version marker:
//!
//! ```text
//! {"v":1,"firstName":"Jane","lastName":"Doe","email":"jane@doe.com","phoneNumber":"555-1234","discordTag":"jane#1234"}
//! ```
//!
//! Optional handles are omitted when absent and written (possibly as `""`)
//! when present; `notes` is omitted when empty. The text is the whole
//! payload of a scannable code, so it carries no external schema reference.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::{ProfileField, ProfileParts, ProfileRecord, ProfileValidationError};

/// Version marker written into every encoding.
pub const ENCODING_VERSION: u32 = 1;

/// Byte capacity of the largest scannable code at the lowest
/// error-correction level.
///
/// [`decode`] does not enforce it: stored profiles may be longer than any
/// code can carry. Image generators and scan handling apply it instead.
pub const MAX_PAYLOAD_BYTES: usize = 2953;

const VERSION_KEY: &str = "v";

/// Errors returned by [`decode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The text is not a well-formed canonical encoding.
    #[error("invalid code: {message}")]
    Malformed {
        /// What made the text unreadable.
        message: String,
    },
    /// The text is well-formed but a field breaks a profile invariant.
    #[error("invalid code: {reason}")]
    InvalidField {
        /// Field holding the invalid value.
        field: ProfileField,
        /// The violated invariant.
        reason: ProfileValidationError,
    },
}

impl DecodeError {
    /// Build a [`DecodeError::Malformed`].
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

impl From<ProfileValidationError> for DecodeError {
    fn from(reason: ProfileValidationError) -> Self {
        Self::InvalidField {
            field: reason.field(),
            reason,
        }
    }
}

/// Encode a record into its canonical text form.
///
/// Total and deterministic: equal records always produce identical text.
///
/// # Examples
/// ```
/// use profile_exchange::domain::{ProfileParts, ProfileRecord, codec};
///
/// let record = ProfileRecord::try_from_parts(ProfileParts {
///     first_name: "Jane".to_owned(),
///     last_name: "Doe".to_owned(),
///     email: "jane@doe.com".to_owned(),
///     phone_number: "555-1234".to_owned(),
///     ..ProfileParts::default()
/// })
/// .expect("valid profile");
///
/// assert_eq!(
///     codec::encode(&record),
///     r#"{"v":1,"firstName":"Jane","lastName":"Doe","email":"jane@doe.com","phoneNumber":"555-1234"}"#
/// );
/// ```
#[must_use]
pub fn encode(record: &ProfileRecord) -> String {
    let mut object = Map::new();
    object.insert(VERSION_KEY.to_owned(), Value::from(ENCODING_VERSION));
    insert_text(&mut object, ProfileField::FirstName, record.name().first_name());
    insert_text(&mut object, ProfileField::LastName, record.name().last_name());
    insert_text(&mut object, ProfileField::Email, record.email().as_ref());
    insert_text(
        &mut object,
        ProfileField::PhoneNumber,
        record.phone_number().as_ref(),
    );

    let social = record.social_networks();
    if let Some(tag) = social.discord_tag() {
        insert_text(&mut object, ProfileField::DiscordTag, tag.as_ref());
    }
    if let Some(username) = social.instagram_username() {
        insert_text(&mut object, ProfileField::InstagramUsername, username);
    }
    if !record.notes().is_empty() {
        insert_text(&mut object, ProfileField::Notes, record.notes());
    }

    Value::Object(object).to_string()
}

fn insert_text(object: &mut Map<String, Value>, field: ProfileField, value: &str) {
    object.insert(field.as_str().to_owned(), Value::from(value));
}

/// Decode canonical text back into a validated record.
///
/// Any input is accepted without panicking; everything that is not a
/// version-1 encoding of a valid profile is reported as a [`DecodeError`].
///
/// # Errors
///
/// - [`DecodeError::Malformed`] for non-JSON, truncated or
///   structurally wrong text, unknown keys, and unsupported versions.
/// - [`DecodeError::InvalidField`] when a field fails profile validation.
///
/// # Examples
/// ```
/// use profile_exchange::domain::codec::{self, DecodeError};
///
/// assert!(matches!(codec::decode("{garbage"), Err(DecodeError::Malformed { .. })));
/// ```
pub fn decode(text: &str) -> Result<ProfileRecord, DecodeError> {
    let payload: ProfilePayload =
        serde_json::from_str(text).map_err(|err| DecodeError::malformed(err.to_string()))?;
    if payload.v != ENCODING_VERSION {
        return Err(DecodeError::malformed(format!(
            "unsupported encoding version {}",
            payload.v
        )));
    }

    ProfileRecord::try_from_parts(payload.into()).map_err(DecodeError::from)
}

/// Wire shape read by [`decode`]; validation happens after parsing so
/// structural and semantic failures stay distinguishable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ProfilePayload {
    v: u32,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    #[serde(default)]
    discord_tag: Option<String>,
    #[serde(default)]
    instagram_username: Option<String>,
    #[serde(default)]
    notes: String,
}

impl From<ProfilePayload> for ProfileParts {
    fn from(value: ProfilePayload) -> Self {
        let ProfilePayload {
            v: _,
            first_name,
            last_name,
            email,
            phone_number,
            discord_tag,
            instagram_username,
            notes,
        } = value;
        Self {
            first_name,
            last_name,
            email,
            phone_number,
            discord_tag,
            instagram_username,
            notes,
        }
    }
}
