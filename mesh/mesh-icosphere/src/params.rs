//! Icosphere generation parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IcosphereError, IcosphereResult};

/// Largest supported subdivision order.
///
/// Counts grow as `4^order`; order 10 already yields about ten million vertices.
pub const MAX_ORDER: u32 = 10;

/// Parameters for icosphere generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IcosphereParams {
    /// Number of subdivision passes applied to the base icosahedron.
    pub order: u32,

    /// Whether to compute texture coordinates (with seam and pole duplication).
    pub with_uv: bool,
}

impl Default for IcosphereParams {
    fn default() -> Self {
        Self {
            order: 4,
            with_uv: false,
        }
    }
}

impl IcosphereParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subdivision order.
    #[must_use]
    pub const fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Set whether texture coordinates are generated.
    #[must_use]
    pub const fn with_uv(mut self, with_uv: bool) -> Self {
        self.with_uv = with_uv;
        self
    }

    /// Check that the order is within `0..=MAX_ORDER`.
    ///
    /// # Errors
    ///
    /// Returns [`IcosphereError::InvalidArgument`] if the order exceeds [`MAX_ORDER`].
    pub const fn validate(&self) -> IcosphereResult<()> {
        if self.order > MAX_ORDER {
            return Err(IcosphereError::InvalidArgument {
                order: self.order,
                max: MAX_ORDER,
            });
        }
        Ok(())
    }

    /// Vertex count after subdivision, before any UV duplication: `10 * 4^order + 2`.
    #[must_use]
    pub const fn expected_vertices(&self) -> usize {
        10 * subdivision_factor(self.order) + 2
    }

    /// Triangle count after subdivision: `20 * 4^order`.
    #[must_use]
    pub const fn expected_triangles(&self) -> usize {
        20 * subdivision_factor(self.order)
    }

    /// Upper bound on the vertices added by UV seam and pole duplication.
    ///
    /// Zero when UVs are disabled, 3 at order 0 and `3 * 2^order + 9` above
    /// that: one duplicate per seam vertex and per seam-crossing edge, plus
    /// five for each pole.
    #[must_use]
    pub const fn duplicate_bound(&self) -> usize {
        if !self.with_uv {
            0
        } else if self.order == 0 {
            3
        } else {
            3 * (1 << self.order) + 9
        }
    }
}

/// `4^order`, the per-face triangle multiplier.
const fn subdivision_factor(order: u32) -> usize {
    1 << (2 * order)
}
