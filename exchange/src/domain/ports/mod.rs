//! Domain ports: the seams to storage and to the code image engines.

mod code_image;
mod macros;
mod profile_store;

pub(crate) use macros::define_port_error;

pub use code_image::{
    AdapterError, CodeImageGenerator, CodeScanner, FixtureCodeImageGenerator, FixtureCodeScanner,
    ScanOutcome,
};
pub use profile_store::{InMemoryProfileStore, ProfileStore, ProfileStoreError};

#[cfg(test)]
pub use code_image::{MockCodeImageGenerator, MockCodeScanner};
#[cfg(test)]
pub use profile_store::MockProfileStore;
