//! Per-target error taxonomy.

use thiserror::Error;

/// Failure attached to a single target. Collected on the target as display
/// strings so one bad URL never aborts the rest of a batch run.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Network, DNS, or TLS failure with a diagnostic from the transport.
    #[error("Request Failed: {0}")]
    Transport(String),
    /// Transport failure that produced no diagnostic string at all.
    #[error("Request Failed: unknown")]
    UnknownTransport,
    /// Invocation with no target URL supplied.
    #[error("No URL Specified")]
    NoTarget,
}
