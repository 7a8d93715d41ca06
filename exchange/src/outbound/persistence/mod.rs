//! Profile store adapters.

mod atomic_io;
mod file_profile_store;

pub use file_profile_store::FileProfileStore;
