use thiserror::Error;

/// Faults that cannot be handled as ordinary rule rejections.
///
/// Rule violations (insufficient points, category caps, revoking a policy that
/// is not active) are *not* errors — they come back as rejected
/// [`ActionOutcome`](crate::model::ActionOutcome) values. This enum covers the
/// cases that indicate broken state or broken configuration and must surface to
/// the caller as failures.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A policy or command was referenced by a name the catalog does not know.
    #[error("no catalog entry named '{name}'")]
    CatalogLookup { name: String },

    /// Stored state or catalog data failed to decode.
    #[error("failed to decode stored state: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading or writing a snapshot failed.
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
