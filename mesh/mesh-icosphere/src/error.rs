//! Error types for icosphere generation.

use thiserror::Error;

/// Errors that can occur while generating an icosphere.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IcosphereError {
    /// Requested subdivision order is above the supported maximum.
    #[error("Max order is {max}, but given {order}.")]
    InvalidArgument {
        /// The order that was requested.
        order: u32,
        /// The largest supported order.
        max: u32,
    },

    /// UV seam/pole duplication produced more vertices than the pre-computed bound.
    ///
    /// This indicates a defect in the bound, never bad input.
    #[error("UV duplication exceeded its bound of {bound} vertices at order {order}")]
    InternalInconsistency {
        /// Subdivision order being processed.
        order: u32,
        /// Pre-computed duplicate bound that was exceeded.
        bound: usize,
    },
}

/// Result type for icosphere operations.
pub type IcosphereResult<T> = std::result::Result<T, IcosphereError>;
