//! Canonical profile field identifiers.
//!
//! Identifiers are stable and language-neutral. The UI supplies localised
//! display labels; everything below the UI keys on [`ProfileField`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Stable identifier for each user-editable profile field.
///
/// The declaration order is the canonical order: required fields first,
/// then optional social handles, then notes. `Ord` follows that order, so
/// ordered collections keyed by [`ProfileField`] iterate canonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileField {
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Email address.
    Email,
    /// Phone number, free-form.
    PhoneNumber,
    /// Optional Discord tag.
    DiscordTag,
    /// Optional Instagram username.
    InstagramUsername,
    /// Free-form notes.
    Notes,
}

impl ProfileField {
    /// Every field in canonical order.
    pub const ALL: [Self; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::PhoneNumber,
        Self::DiscordTag,
        Self::InstagramUsername,
        Self::Notes,
    ];

    /// Fields that must be present and non-blank, in the order they are
    /// checked.
    pub const REQUIRED: [Self; 4] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::PhoneNumber,
    ];

    /// Canonical identifier, also used as the key in the text encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::DiscordTag => "discordTag",
            Self::InstagramUsername => "instagramUsername",
            Self::Notes => "notes",
        }
    }

    /// Whether the form assembler rejects a record without this field.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            Self::FirstName | Self::LastName | Self::Email | Self::PhoneNumber
        )
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a canonical field identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown profile field: {identifier}")]
pub struct UnknownProfileField {
    /// The identifier that did not match any field.
    pub identifier: String,
}

impl FromStr for ProfileField {
    type Err = UnknownProfileField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| UnknownProfileField {
                identifier: value.to_owned(),
            })
    }
}
