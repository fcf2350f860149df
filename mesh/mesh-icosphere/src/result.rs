//! Generated icosphere mesh.

// Vertex and triangle counts are far below f64's integer range
#![allow(clippy::cast_precision_loss)]

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::indices::TriangleIndices;
use crate::params::IcosphereParams;

/// Result of icosphere generation.
///
/// Buffers are flat: vertex `i` occupies `vertices[3 * i..3 * i + 3]` and,
/// when present, `uv[2 * i..2 * i + 2]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshResult {
    /// Unit-sphere vertex positions, three floats per vertex.
    pub vertices: Vec<f32>,

    /// Triangle vertex indices, three per triangle.
    pub triangles: TriangleIndices,

    /// Texture coordinates, two floats per vertex, when requested.
    pub uv: Option<Vec<f32>>,

    /// Subdivision order the mesh was generated with.
    pub order: u32,
}

impl MeshResult {
    /// Number of vertices, including any UV seam/pole duplicates.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.triangle_count()
    }

    /// Whether texture coordinates were generated.
    #[must_use]
    pub const fn has_uv(&self) -> bool {
        self.uv.is_some()
    }

    /// Position of vertex `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.vertex_count()`.
    #[must_use]
    pub fn vertex(&self, i: usize) -> [f32; 3] {
        [
            self.vertices[3 * i],
            self.vertices[3 * i + 1],
            self.vertices[3 * i + 2],
        ]
    }

    /// Vertex indices of triangle `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t >= self.triangle_count()`.
    #[must_use]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        self.triangles.triangle(t)
    }

    /// Texture coordinate of vertex `i`, or `None` without UVs.
    #[must_use]
    pub fn uv_at(&self, i: usize) -> Option<[f32; 2]> {
        self.uv
            .as_ref()
            .and_then(|uv| Some([*uv.get(2 * i)?, *uv.get(2 * i + 1)?]))
    }

    /// Vertices added by UV seam/pole duplication.
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        let base = IcosphereParams::new()
            .with_order(self.order)
            .expected_vertices();
        self.vertex_count().saturating_sub(base)
    }

    /// Total area of the (flat) triangles.
    ///
    /// Always below the unit sphere's `4π` and approaching it as the order grows.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles
            .triangles()
            .map(|[a, b, c]| {
                let pa = self.position(a);
                let ab = self.position(b) - pa;
                let ac = self.position(c) - pa;
                ab.cross(&ac).norm() * 0.5
            })
            .sum()
    }

    /// Surface area as a fraction of the unit sphere's area.
    #[must_use]
    pub fn area_ratio(&self) -> f64 {
        self.surface_area() / (4.0 * std::f64::consts::PI)
    }

    /// Raw bytes of the vertex buffer in native endianness.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the UV buffer, empty without UVs.
    #[must_use]
    pub fn uv_bytes(&self) -> &[u8] {
        match &self.uv {
            Some(uv) => bytemuck::cast_slice(uv),
            None => &[],
        }
    }

    /// Split into `(vertices, triangles, uv)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f32>, TriangleIndices, Option<Vec<f32>>) {
        (self.vertices, self.triangles, self.uv)
    }

    fn position(&self, i: u32) -> Vector3<f64> {
        let [x, y, z] = self.vertex(i as usize);
        Vector3::new(f64::from(x), f64::from(y), f64::from(z))
    }
}

impl std::fmt::Display for MeshResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Icosphere (order {}): {} vertices / {} triangles, {}-bit indices",
            self.order,
            self.vertex_count(),
            self.triangle_count(),
            if self.triangles.is_narrow() { 16 } else { 32 }
        )?;
        if self.has_uv() {
            write!(f, ", uv ({} duplicates)", self.duplicate_count())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn single_triangle() -> MeshResult {
        let mut triangles = TriangleIndices::with_capacity(3);
        triangles.push_triangle([0, 1, 2]);
        MeshResult {
            vertices: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            triangles,
            uv: None,
            order: 0,
        }
    }

    #[test]
    fn test_accessors() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex(1), [1.0, 0.0, 0.0]);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
        assert!(!mesh.has_uv());
        assert_eq!(mesh.uv_at(0), None);
        assert_eq!(mesh.duplicate_count(), 0);
    }

    #[test]
    fn test_surface_area() {
        let mesh = single_triangle();
        assert_relative_eq!(mesh.surface_area(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_uv_lookup() {
        let mut mesh = single_triangle();
        mesh.uv = Some(vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(mesh.uv_at(1), Some([1.0, 0.0]));
        assert_eq!(mesh.uv_at(3), None);
        assert_eq!(mesh.uv_bytes().len(), 24);
    }

    #[test]
    fn test_byte_views() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_bytes().len(), 36);
        assert!(mesh.uv_bytes().is_empty());
        assert_eq!(mesh.triangles.as_bytes().len(), 6);
    }

    #[test]
    fn test_display() {
        let mesh = single_triangle();
        let display = format!("{mesh}");
        assert!(display.contains("order 0"));
        assert!(display.contains("3 vertices"));
        assert!(display.contains("1 triangles"));
        assert!(display.contains("16-bit"));
        assert!(!display.contains("uv"));
    }
}
