//! Geodesic sphere (icosphere) generation.
//!
//! An icosphere is built by repeatedly splitting every face of a regular
//! icosahedron into four and projecting the vertices onto the unit sphere.
//! The result is a closed, low-distortion triangulation with roughly equal
//! triangle areas.
//!
//! - **Subdivision**: each pass shares edge midpoints between the two
//!   triangles of an edge, so the mesh never cracks
//! - **Compact indices**: triangles use 16-bit indices until the buffer
//!   outgrows them, then switch to 32-bit
//! - **Texture coordinates**: optional equirectangular UVs, with vertices
//!   duplicated along the longitude seam and at the poles
//!
//! # Counts
//!
//! After `order` passes the mesh has `10 * 4^order + 2` vertices and
//! `20 * 4^order` triangles. Orders above [`MAX_ORDER`] are rejected.
//!
//! # Examples
//!
//! Basic generation:
//!
//! ```
//! use mesh_icosphere::generate;
//!
//! let mesh = generate(3, false)?;
//!
//! assert_eq!(mesh.vertex_count(), 642);
//! assert_eq!(mesh.triangle_count(), 1280);
//! assert!(mesh.triangles.is_narrow());
//! # Ok::<(), mesh_icosphere::IcosphereError>(())
//! ```
//!
//! With texture coordinates:
//!
//! ```
//! use mesh_icosphere::{generate_icosphere, validate_icosphere, IcosphereParams};
//!
//! let params = IcosphereParams::new().with_order(4).with_uv(true);
//! let mesh = generate_icosphere(&params)?;
//!
//! assert!(mesh.has_uv());
//! assert!(mesh.duplicate_count() <= params.duplicate_bound());
//! assert!(validate_icosphere(&mesh).is_valid());
//! # Ok::<(), mesh_icosphere::IcosphereError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod base;
mod error;
mod generate;
mod indices;
mod normalize;
mod params;
mod result;
mod subdivide;
mod uv;
mod validate;

pub use base::{ICOSAHEDRON_TRIANGLES, ICOSAHEDRON_VERTEX_COUNT, icosahedron_vertices};
pub use error::{IcosphereError, IcosphereResult};
pub use generate::{generate, generate_icosphere};
pub use indices::TriangleIndices;
pub use normalize::{DEGENERATE_EPSILON, normalize_vertices};
pub use params::{IcosphereParams, MAX_ORDER};
pub use result::MeshResult;
pub use uv::sphere_uv;
pub use validate::{
    IcosphereReport, ValidationOptions, validate_icosphere, validate_icosphere_with_options,
};
