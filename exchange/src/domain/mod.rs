//! Contact profile domain.
//!
//! Purpose: validated profile types and the two pipelines built on them.
//! The display path assembles or loads a profile, encodes it and renders a
//! code; the scan path decodes scanned text back into a profile.
//!
//! Public surface:
//! - ProfileRecord (alias to `profile::ProfileRecord`): validated profile.
//! - ProfileField (alias to `field::ProfileField`): canonical identifiers.
//! - `codec`: canonical text encoding and decoding.
//! - `form`: free-text form assembly.
//! - ProfileCard (alias to `card::ProfileCard`): viewer model.
//! - OwnProfileService and ScanService: screen-level services.
//! - `ports`: storage and code image seams.

pub mod card;
pub mod codec;
pub mod field;
pub mod form;
pub mod own_profile_service;
pub mod ports;
pub mod profile;
pub mod scan_service;

pub use self::card::{CardEntry, CardLabel, ProfileCard};
pub use self::codec::{DecodeError, MAX_PAYLOAD_BYTES};
pub use self::field::{ProfileField, UnknownProfileField};
pub use self::form::{AssemblyError, ProfileForm};
pub use self::own_profile_service::{
    DisplayError, OwnCode, OwnProfile, OwnProfileService, PreviewError, ProfileUpdateError,
};
pub use self::profile::{
    DiscordTag, EmailAddress, PersonName, PhoneNumber, ProfileParts, ProfileRecord,
    ProfileValidationError, SocialNetworks,
};
pub use self::scan_service::{ScanRejection, ScanResolution, ScanService, ScannedProfile};
