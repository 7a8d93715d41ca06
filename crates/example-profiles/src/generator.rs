//! Deterministic profile generation.
//!
//! The same seed always produces identical output.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::profile::ExampleProfile;

/// Maximum number of attempts to generate a name usable in an address.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Domain used for every generated email address.
const EMAIL_DOMAIN: &str = "example.com";

/// Probability of sharing a Discord tag (3 in 5).
const DISCORD_NUMERATOR: u32 = 3;
const DISCORD_DENOMINATOR: u32 = 5;

/// Probability of sharing an Instagram username (1 in 2).
const INSTAGRAM_NUMERATOR: u32 = 1;
const INSTAGRAM_DENOMINATOR: u32 = 2;

/// Probability of having notes (1 in 4).
const NOTES_NUMERATOR: u32 = 1;
const NOTES_DENOMINATOR: u32 = 4;

const NOTES: &[&str] = &[
    "Met at the Rust meetup",
    "Ask about the bouldering gym",
    "Prefers email over calls",
    "Board game night on Thursdays",
    "Works on the mapping team",
];

/// Generates `count` sample profiles from `seed`.
///
/// Every profile has:
///
/// - a first and last name from the English name corpus;
/// - an email address derived from the name at `example.com`;
/// - a phone number in the `555-NNNN` fictional range;
/// - a Discord tag (~60%), an Instagram username (~50%) and notes (~25%).
///
/// # Errors
///
/// Returns [`GenerationError::NameGenerationFailed`] if no usable name is
/// produced within the retry limit.
pub fn generate_example_profiles(
    seed: u64,
    count: usize,
) -> Result<Vec<ExampleProfile>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut profiles = Vec::with_capacity(count);

    for _ in 0..count {
        profiles.push(generate_single_profile(&mut rng)?);
    }

    Ok(profiles)
}

fn generate_single_profile(rng: &mut ChaCha8Rng) -> Result<ExampleProfile, GenerationError> {
    let (first_name, last_name, handle) = generate_name(rng)?;

    let phone_number = format!("555-{:04}", rng.random_range(0..10_000_u32));
    let discord_tag = rng
        .random_ratio(DISCORD_NUMERATOR, DISCORD_DENOMINATOR)
        .then(|| format!("{handle}#{:04}", rng.random_range(1..10_000_u32)));
    let instagram_username = rng
        .random_ratio(INSTAGRAM_NUMERATOR, INSTAGRAM_DENOMINATOR)
        .then(|| handle.clone());
    let notes = if rng.random_ratio(NOTES_NUMERATOR, NOTES_DENOMINATOR) {
        NOTES.choose(rng).copied().unwrap_or_default().to_owned()
    } else {
        String::new()
    };

    Ok(ExampleProfile {
        email: format!("{handle}@{EMAIL_DOMAIN}"),
        first_name,
        last_name,
        phone_number,
        discord_tag,
        instagram_username,
        notes,
    })
}

/// Generates a name and the lowercase `first.last` handle derived from it.
///
/// Retries when either part has no ASCII letters to build a handle from.
fn generate_name(rng: &mut ChaCha8Rng) -> Result<(String, String, String), GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);

        let first_slug = slug(&first);
        let last_slug = slug(&last);
        if !first_slug.is_empty() && !last_slug.is_empty() {
            let handle = format!("{first_slug}.{last_slug}");
            return Ok((first, last, handle));
        }
    }

    Err(GenerationError::NameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

fn slug(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
