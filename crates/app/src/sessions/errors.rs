//! Session store errors.

use thiserror::Error;

/// Session store error variants.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// A session attribute could not be encoded or decoded.
    #[error("failed to (de)serialize session attribute `{attribute}`")]
    Serialization {
        /// Attribute being read or written.
        attribute: &'static str,

        /// Underlying codec failure.
        #[source]
        source: serde_json::Error,
    },
}
