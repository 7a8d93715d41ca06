//! Deterministic sample contact profiles for previews and tests.
//!
//! Profiles are produced from a numeric seed, so the same seed always yields
//! the same people. The crate is independent of the exchange domain types;
//! each profile exposes its values keyed by the canonical field identifiers
//! so it can be fed through form assembly like user input.
//!
//! # Example
//!
//! ```
//! use example_profiles::generate_example_profiles;
//!
//! let profiles = generate_example_profiles(7, 3).expect("generation succeeds");
//! assert_eq!(profiles.len(), 3);
//! assert_eq!(profiles, generate_example_profiles(7, 3).expect("generation succeeds"));
//! ```

mod error;
mod generator;
mod profile;

pub use error::GenerationError;
pub use generator::generate_example_profiles;
pub use profile::ExampleProfile;
