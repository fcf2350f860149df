//! Equirectangular texture coordinates with seam and pole repair.
//!
//! Longitude wraps from 1 back to 0 along one meridian, so triangles that
//! straddle it would interpolate across the whole texture. Those corners are
//! shifted by -1 and redirected to duplicate vertices carrying the shifted
//! coordinate. Pole vertices have no meaningful longitude; each triangle
//! touching a pole gets a pole vertex whose longitude is the mean of its two
//! other corners.

// Vertex counts stay below 2^32 for every supported order
#![allow(clippy::cast_possible_truncation)]

use std::f64::consts::{PI, TAU};

use hashbrown::{HashMap, HashSet};
use tracing::debug;

use crate::error::{IcosphereError, IcosphereResult};
use crate::indices::TriangleIndices;

/// Longitude/latitude coordinate of a unit vector, both mapped to `[0, 1]`.
#[must_use]
pub fn sphere_uv(x: f32, y: f32, z: f32) -> [f32; 2] {
    let (x, y, z) = (f64::from(x), f64::from(y), f64::from(z));
    let u = z.atan2(x) / TAU + 0.5;
    let v = y.clamp(-1.0, 1.0).asin() / PI + 0.5;
    [u as f32, v as f32]
}

/// A corner sits on a pole when its latitude is exactly at either end.
#[allow(clippy::float_cmp)]
fn is_pole(v: f32) -> bool {
    v == 0.0 || v == 1.0
}

/// Appends duplicates of existing vertices together with their UVs.
struct Duplicator<'a> {
    vertices: &'a mut Vec<f32>,
    uv: &'a mut Vec<f32>,
    seam_duplicates: HashMap<u32, u32>,
    created: usize,
    bound: usize,
    order: u32,
}

impl Duplicator<'_> {
    /// Duplicate vertex `i` with texture coordinate `[u, v]`.
    ///
    /// Seam duplicates are shared by every triangle that shifts the same
    /// vertex; pole duplicates are always fresh.
    fn duplicate(&mut self, i: u32, u: f32, v: f32, shared: bool) -> IcosphereResult<u32> {
        if shared {
            if let Some(&dup) = self.seam_duplicates.get(&i) {
                return Ok(dup);
            }
        }
        if self.created >= self.bound {
            return Err(IcosphereError::InternalInconsistency {
                order: self.order,
                bound: self.bound,
            });
        }

        let dup = (self.vertices.len() / 3) as u32;
        let src = 3 * i as usize;
        self.vertices.extend_from_within(src..src + 3);
        self.uv.extend_from_slice(&[u, v]);
        self.created += 1;

        if shared {
            self.seam_duplicates.insert(i, dup);
        }
        Ok(dup)
    }
}

/// Compute UVs for a normalized mesh, duplicating seam and pole vertices.
///
/// `bound` is the maximum number of duplicates allowed; the vertex buffer is
/// expected to have spare capacity for them. Returns the UV buffer, parallel
/// to the enlarged vertex buffer.
///
/// # Errors
///
/// Returns [`IcosphereError::InternalInconsistency`] if more than `bound`
/// duplicates are needed.
#[allow(clippy::float_cmp)]
pub(crate) fn assign_uv(
    vertices: &mut Vec<f32>,
    triangles: &mut TriangleIndices,
    bound: usize,
    order: u32,
) -> IcosphereResult<Vec<f32>> {
    let original_count = vertices.len() / 3;
    let mut uv = Vec::with_capacity(2 * (original_count + bound));
    for p in vertices.chunks_exact(3) {
        uv.extend_from_slice(&sphere_uv(p[0], p[1], p[2]));
    }

    let mut claimed_poles = HashSet::new();
    let created = {
        let mut dup = Duplicator {
            vertices,
            uv: &mut uv,
            seam_duplicates: HashMap::new(),
            created: 0,
            bound,
            order,
        };

        for t in 0..triangles.triangle_count() {
            let corners = triangles.triangle(t);
            let mut u = corners.map(|c| dup.uv[2 * c as usize]);
            let v = corners.map(|c| dup.uv[2 * c as usize + 1]);
            let pole = v.map(is_pole);

            // Seam: pull the high side of a wrapped triangle below zero
            let (lo, hi) = (0..3)
                .filter(|&k| !pole[k])
                .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), k| {
                    (lo.min(u[k]), hi.max(u[k]))
                });
            if hi - lo > 0.5 {
                for k in 0..3 {
                    if !pole[k] && u[k] > 0.5 {
                        u[k] -= 1.0;
                    }
                }
            }

            if let Some(p) = pole.iter().position(|&is_p| is_p) {
                let (o1, o2) = ((p + 1) % 3, (p + 2) % 3);
                u[p] = (u[o1] + u[o2]) * 0.5;

                let c = corners[p];
                if claimed_poles.insert(c) {
                    dup.uv[2 * c as usize] = u[p];
                } else {
                    let d = dup.duplicate(c, u[p], v[p], false)?;
                    triangles.set(3 * t + p, d);
                }
            }

            for k in 0..3 {
                let c = corners[k];
                if !pole[k] && u[k] != dup.uv[2 * c as usize] {
                    let d = dup.duplicate(c, u[k], v[k], true)?;
                    triangles.set(3 * t + k, d);
                }
            }
        }

        dup.created
    };

    debug!(
        "UV assignment: {} duplicates (bound {}), {} poles",
        created,
        bound,
        claimed_poles.len()
    );

    Ok(uv)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_uv_landmarks() {
        // +X faces the texture center
        assert_eq!(sphere_uv(1.0, 0.0, 0.0), [0.5, 0.5]);
        // -X sits on the seam at u = 1
        assert_eq!(sphere_uv(-1.0, 0.0, 0.0), [1.0, 0.5]);
        assert_eq!(sphere_uv(0.0, 0.0, 1.0), [0.75, 0.5]);
        assert_eq!(sphere_uv(0.0, 0.0, -1.0), [0.25, 0.5]);
        // Poles
        assert_eq!(sphere_uv(0.0, 1.0, 0.0)[1], 1.0);
        assert_eq!(sphere_uv(0.0, -1.0, 0.0)[1], 0.0);
    }

    #[test]
    fn test_sphere_uv_clamps_overshoot() {
        let [_, v] = sphere_uv(0.0, 1.000_000_1, 0.0);
        assert_eq!(v, 1.0);
    }

    #[test]
    fn test_seam_triangle_gets_shifted_duplicate() {
        // One corner on the seam (u = 1), two just past it (u near 0)
        let mut vertices = vec![
            -1.0, 0.0, 0.0, //
            -0.99, 0.0, -0.1, //
            -0.99, 0.1, -0.1,
        ];
        let mut triangles = TriangleIndices::with_capacity(3);
        triangles.push_triangle([0, 1, 2]);

        let uv = assign_uv(&mut vertices, &mut triangles, 1, 0).unwrap();

        assert_eq!(vertices.len(), 12);
        assert_eq!(uv.len(), 8);
        assert_eq!(triangles.triangle(0), [3, 1, 2]);
        assert_eq!(vertices[9..12], vertices[0..3]);
        assert_eq!(uv[6], 0.0);
        assert_eq!(uv[7], 0.5);
    }

    #[test]
    fn test_seam_duplicate_is_shared() {
        let mut vertices = vec![
            -1.0, 0.0, 0.0, //
            -0.99, 0.0, -0.1, //
            -0.99, 0.1, -0.1, //
            -0.99, -0.1, -0.1,
        ];
        let mut triangles = TriangleIndices::with_capacity(6);
        triangles.push_triangle([0, 1, 2]);
        triangles.push_triangle([0, 3, 1]);

        let uv = assign_uv(&mut vertices, &mut triangles, 1, 0).unwrap();

        assert_eq!(uv.len(), 10);
        assert_eq!(triangles.triangle(0)[0], 4);
        assert_eq!(triangles.triangle(1)[0], 4);
    }

    #[test]
    fn test_pole_longitude_is_neighbor_mean() {
        let mut vertices = vec![
            0.0, 1.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, //
            -1.0, 0.0, 0.0,
        ];
        let mut triangles = TriangleIndices::with_capacity(6);
        triangles.push_triangle([0, 1, 2]);
        triangles.push_triangle([0, 2, 3]);

        let uv = assign_uv(&mut vertices, &mut triangles, 1, 1).unwrap();

        // First triangle claims the original pole vertex
        assert_eq!(triangles.triangle(0), [0, 1, 2]);
        assert_relative_eq!(uv[0], 0.625);
        // Second triangle gets its own pole copy
        assert_eq!(triangles.triangle(1), [4, 2, 3]);
        assert_relative_eq!(uv[8], 0.875);
        assert_eq!(uv[9], 1.0);
    }

    #[test]
    fn test_bound_exceeded_is_an_error() {
        let mut vertices = vec![
            -1.0, 0.0, 0.0, //
            -0.99, 0.0, -0.1, //
            -0.99, 0.1, -0.1,
        ];
        let mut triangles = TriangleIndices::with_capacity(3);
        triangles.push_triangle([0, 1, 2]);

        let err = assign_uv(&mut vertices, &mut triangles, 0, 2).unwrap_err();
        assert_eq!(
            err,
            IcosphereError::InternalInconsistency { order: 2, bound: 0 }
        );
    }
}
