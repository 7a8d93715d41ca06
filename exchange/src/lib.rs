//! Contact profile exchange core.
//!
//! A user keeps one profile of their own, shows it as a scannable code and
//! scans other users' codes to view theirs. This crate holds everything
//! below the UI:
//!
//! - [`domain`]: validated profile types, the canonical text codec, form
//!   assembly, the viewer card and the screen-level services;
//! - [`domain::ports`]: seams to storage and to the external code image
//!   engines;
//! - [`outbound`]: a file-backed profile store;
//! - [`config`] and [`telemetry`]: host-facing setup.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod telemetry;

pub use config::ExchangeSettings;
