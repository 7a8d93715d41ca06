//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: profile stores backed by a capability-scoped
//!   directory.
//!
//! Adapters translate between domain types and storage; they hold no
//! business rules.

pub mod persistence;
