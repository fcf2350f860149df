//! Icosphere generation entry points.

use tracing::debug;

use crate::base::build_icosahedron;
use crate::error::IcosphereResult;
use crate::normalize::normalize_vertices;
use crate::params::IcosphereParams;
use crate::result::MeshResult;
use crate::subdivide::subdivide;
use crate::uv::assign_uv;

/// Generate an icosphere of the given subdivision order.
///
/// Shorthand for [`generate_icosphere`] with
/// `IcosphereParams::new().with_order(order).with_uv(with_uv)`.
///
/// # Errors
///
/// Returns [`IcosphereError::InvalidArgument`](crate::IcosphereError::InvalidArgument)
/// if `order` exceeds [`MAX_ORDER`](crate::MAX_ORDER).
///
/// # Examples
///
/// ```
/// use mesh_icosphere::generate;
///
/// let mesh = generate(2, false)?;
/// assert_eq!(mesh.vertex_count(), 162);
/// assert_eq!(mesh.triangle_count(), 320);
/// # Ok::<(), mesh_icosphere::IcosphereError>(())
/// ```
pub fn generate(order: u32, with_uv: bool) -> IcosphereResult<MeshResult> {
    generate_icosphere(
        &IcosphereParams::new()
            .with_order(order)
            .with_uv(with_uv),
    )
}

/// Generate an icosphere from parameters.
///
/// Builds the icosahedron, subdivides it `params.order` times, projects the
/// vertices onto the unit sphere and, if requested, assigns texture
/// coordinates. All caches live only for the duration of this call, so
/// concurrent calls are independent.
///
/// # Errors
///
/// Returns an error if:
/// - The order exceeds [`MAX_ORDER`](crate::MAX_ORDER) (checked before allocating)
/// - UV duplication needs more vertices than
///   [`IcosphereParams::duplicate_bound`] allows
///
/// # Examples
///
/// ```
/// use mesh_icosphere::{generate_icosphere, IcosphereParams};
///
/// let params = IcosphereParams::new().with_order(3).with_uv(true);
/// let mesh = generate_icosphere(&params)?;
///
/// let uv = mesh.uv.as_ref().unwrap();
/// assert_eq!(uv.len(), 2 * mesh.vertex_count());
/// assert!(mesh.vertex_count() > params.expected_vertices());
/// # Ok::<(), mesh_icosphere::IcosphereError>(())
/// ```
pub fn generate_icosphere(params: &IcosphereParams) -> IcosphereResult<MeshResult> {
    params.validate()?;

    let vertex_capacity = params.expected_vertices() + params.duplicate_bound();
    debug!(
        "Generating icosphere: order {}, uv {}, {} vertices / {} triangles",
        params.order,
        params.with_uv,
        params.expected_vertices(),
        params.expected_triangles()
    );

    let (mut vertices, base) = build_icosahedron(vertex_capacity);
    let mut triangles = subdivide(&mut vertices, base, params.order);
    normalize_vertices(&mut vertices);

    let uv = if params.with_uv {
        Some(assign_uv(
            &mut vertices,
            &mut triangles,
            params.duplicate_bound(),
            params.order,
        )?)
    } else {
        None
    };

    Ok(MeshResult {
        vertices,
        triangles,
        uv,
        order: params.order,
    })
}
