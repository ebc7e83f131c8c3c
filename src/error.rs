//! Error types for the transducer protocol.

use thiserror::Error;

/// Errors that can occur when using the transformer contract.
#[derive(Debug, Error)]
pub enum Error {
    /// `init` was called on a transformer that has no default accumulator.
    ///
    /// Transformers built from bare step functions via [`wrap`](crate::wrap)
    /// carry no notion of a starting value; callers must pass an explicit
    /// seed to [`reduce`](crate::reduce) or [`transduce`](crate::transduce).
    #[error("init is not supported here; pass an explicit seed to the driver")]
    InitUnsupported,
}
