//! Opt-in tracing setup for hosts embedding the chart engine.
//!
//! The engine itself only emits `tracing` events (rebuilds, reveal/conceal,
//! label lifecycle, not-found warnings). Hosts that do not run their own
//! subscriber can call one of the helpers below.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "animated_line_chart=info";

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Returns `false` when the `telemetry` feature is disabled or when a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACING_FILTER)
}

/// Installs a compact subscriber with `fallback_filter` used when `RUST_LOG`
/// is absent or unparsable.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
