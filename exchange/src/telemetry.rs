//! Tracing bootstrap for embedding hosts.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Install a JSON `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one is kept and the failure is logged through it.
#[must_use]
pub fn init_tracing() -> bool {
    match fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "tracing init failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn second_initialisation_is_tolerated() {
        let _first = init_tracing();
        assert!(!init_tracing());
    }
}
