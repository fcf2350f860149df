//! Icosphere validation and health reporting.
//!
//! Checks a generated mesh against the properties every icosphere must have:
//! expected counts, vertices on the unit sphere, a closed manifold surface and,
//! with UVs, no triangle stretched across the texture seam.

use hashbrown::HashMap;

use crate::params::IcosphereParams;
use crate::result::MeshResult;

/// Report of icosphere validation results.
#[derive(Debug, Clone, Default)]
pub struct IcosphereReport {
    /// Total number of vertices, including UV duplicates.
    pub vertex_count: usize,
    /// Total number of triangles.
    pub triangle_count: usize,
    /// Vertex count expected for the mesh's order, before UV duplication.
    pub expected_vertex_count: usize,
    /// Triangle count expected for the mesh's order.
    pub expected_triangle_count: usize,

    /// Largest distance from the unit sphere over all vertices.
    pub max_radius_error: f64,
    /// Vertices farther than the tolerance from the unit sphere.
    pub off_sphere_count: usize,

    /// Unique edges after welding duplicates by position.
    pub edge_count: usize,
    /// Edges with only one adjacent triangle.
    pub boundary_edge_count: usize,
    /// Edges with more than two adjacent triangles.
    pub non_manifold_edge_count: usize,

    /// Triangles whose `u` coordinates span more than the allowed window.
    pub seam_split_count: usize,
    /// Triangles with more than one corner at a pole.
    pub multi_pole_triangle_count: usize,

    /// Total surface area relative to the unit sphere.
    pub area_ratio: f64,
}

impl IcosphereReport {
    /// Whether vertex and triangle counts match the order.
    ///
    /// UV duplicates may only add vertices.
    #[must_use]
    pub const fn counts_match(&self) -> bool {
        self.triangle_count == self.expected_triangle_count
            && self.vertex_count >= self.expected_vertex_count
    }

    /// Whether the surface is closed (no boundary edges).
    #[must_use]
    pub const fn is_watertight(&self) -> bool {
        self.boundary_edge_count == 0
    }

    /// Whether every edge has exactly two adjacent triangles.
    #[must_use]
    pub const fn is_manifold(&self) -> bool {
        self.boundary_edge_count == 0 && self.non_manifold_edge_count == 0
    }

    /// Whether all checks passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.counts_match()
            && self.off_sphere_count == 0
            && self.is_manifold()
            && self.seam_split_count == 0
            && self.multi_pole_triangle_count == 0
            && self.area_ratio < 1.0
    }
}

impl std::fmt::Display for IcosphereReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Icosphere Report:")?;
        writeln!(
            f,
            "  Vertices: {} (expected {})",
            self.vertex_count, self.expected_vertex_count
        )?;
        writeln!(
            f,
            "  Triangles: {} (expected {})",
            self.triangle_count, self.expected_triangle_count
        )?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(f, "  Max radius error: {:.2e}", self.max_radius_error)?;
        writeln!(f, "  Area ratio: {:.6}", self.area_ratio)?;
        writeln!(
            f,
            "  Manifold: {}",
            if self.is_manifold() { "Yes" } else { "No" }
        )?;

        if self.off_sphere_count > 0 {
            writeln!(f, "  Off-sphere vertices: {}", self.off_sphere_count)?;
        }
        if self.seam_split_count > 0 {
            writeln!(f, "  Seam-split triangles: {}", self.seam_split_count)?;
        }
        if self.multi_pole_triangle_count > 0 {
            writeln!(
                f,
                "  Multi-pole triangles: {}",
                self.multi_pole_triangle_count
            )?;
        }

        Ok(())
    }
}

/// Options for icosphere validation.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Allowed deviation of a vertex's length from 1.
    pub radius_tolerance: f64,
    /// Largest allowed spread of `u` within one triangle.
    pub uv_window: f32,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            radius_tolerance: 1e-5,
            uv_window: 0.5,
        }
    }
}

/// Validate an icosphere with default options.
///
/// # Example
///
/// ```
/// use mesh_icosphere::{generate, validate_icosphere};
///
/// let mesh = generate(2, true)?;
/// let report = validate_icosphere(&mesh);
/// assert!(report.is_valid(), "{report}");
/// # Ok::<(), mesh_icosphere::IcosphereError>(())
/// ```
#[must_use]
pub fn validate_icosphere(mesh: &MeshResult) -> IcosphereReport {
    validate_icosphere_with_options(mesh, &ValidationOptions::default())
}

/// Validate an icosphere and return a report of any issues.
#[must_use]
pub fn validate_icosphere_with_options(
    mesh: &MeshResult,
    options: &ValidationOptions,
) -> IcosphereReport {
    let params = IcosphereParams::new().with_order(mesh.order);
    let mut report = IcosphereReport {
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
        expected_vertex_count: params.expected_vertices(),
        expected_triangle_count: params.expected_triangles(),
        area_ratio: mesh.area_ratio(),
        ..IcosphereReport::default()
    };

    for v in mesh.vertices.chunks_exact(3) {
        let len = v
            .iter()
            .map(|&c| f64::from(c) * f64::from(c))
            .sum::<f64>()
            .sqrt();
        let err = (len - 1.0).abs();
        report.max_radius_error = report.max_radius_error.max(err);
        if err > options.radius_tolerance {
            report.off_sphere_count += 1;
        }
    }

    count_edges(mesh, &mut report);

    if let Some(uv) = &mesh.uv {
        for [a, b, c] in mesh.triangles.triangles() {
            let corners = [a as usize, b as usize, c as usize];
            let u = corners.map(|i| uv[2 * i]);
            let span = u.iter().copied().fold(f32::NEG_INFINITY, f32::max)
                - u.iter().copied().fold(f32::INFINITY, f32::min);
            if span > options.uv_window + 1e-6 {
                report.seam_split_count += 1;
            }

            let poles = corners
                .iter()
                .filter(|&&i| uv[2 * i + 1] <= 0.0 || uv[2 * i + 1] >= 1.0)
                .count();
            if poles > 1 {
                report.multi_pole_triangle_count += 1;
            }
        }
    }

    report
}

/// Count edge usage with UV duplicates welded back onto their originals.
fn count_edges(mesh: &MeshResult, report: &mut IcosphereReport) {
    // Duplicates copy their source position bit for bit
    let mut first_at: HashMap<[u32; 3], u32> = HashMap::with_capacity(mesh.vertex_count());
    let welded: Vec<u32> = (0..mesh.vertex_count())
        .map(|i| {
            let key = mesh.vertex(i).map(f32::to_bits);
            #[allow(clippy::cast_possible_truncation)]
            let index = i as u32;
            *first_at.entry(key).or_insert(index)
        })
        .collect();

    let mut edges: HashMap<(u32, u32), u32> =
        HashMap::with_capacity(mesh.triangle_count() * 3 / 2);
    for tri in mesh.triangles.triangles() {
        let tri = tri.map(|i| welded[i as usize]);
        for k in 0..3 {
            let (a, b) = (tri[k], tri[(k + 1) % 3]);
            *edges.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
    }

    report.edge_count = edges.len();
    for &count in edges.values() {
        match count {
            1 => report.boundary_edge_count += 1,
            2 => {}
            _ => report.non_manifold_edge_count += 1,
        }
    }
}
