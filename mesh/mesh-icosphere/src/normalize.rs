//! Projection of vertices onto the unit sphere.

use nalgebra::Vector3;

/// Squared length below which a vertex is treated as degenerate and left as is.
pub const DEGENERATE_EPSILON: f64 = 1e-6;

/// Scale every `xyz` triple in `vertices` to unit length.
///
/// The scale factor is computed in double precision, so points on a
/// coordinate axis land exactly on `±1.0`. Vertices whose squared length is
/// below [`DEGENERATE_EPSILON`] are left untouched rather than blown up to
/// non-finite values. A trailing partial triple is ignored.
///
/// # Example
///
/// ```
/// use mesh_icosphere::normalize_vertices;
///
/// let mut vertices = vec![0.0, 3.0, 4.0, 0.0, 0.0, 0.0];
/// normalize_vertices(&mut vertices);
///
/// assert!((vertices[1] - 0.6).abs() < 1e-6);
/// assert!((vertices[2] - 0.8).abs() < 1e-6);
/// assert_eq!(&vertices[3..], &[0.0, 0.0, 0.0]);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn normalize_vertices(vertices: &mut [f32]) {
    for v in vertices.chunks_exact_mut(3) {
        let p = Vector3::new(f64::from(v[0]), f64::from(v[1]), f64::from(v[2]));
        let len_sq = p.norm_squared();
        if len_sq < DEGENERATE_EPSILON {
            continue;
        }
        let unit = p / len_sq.sqrt();
        v[0] = unit.x as f32;
        v[1] = unit.y as f32;
        v[2] = unit.z as f32;
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_length() {
        let mut vertices = vec![1.0, 2.0, 3.0, -5.0, 0.5, 7.0];
        normalize_vertices(&mut vertices);

        for v in vertices.chunks_exact(3) {
            let len = v.iter().map(|c| c * c).sum::<f32>().sqrt();
            assert_relative_eq!(len, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_axis_points_are_exact() {
        let golden = f64::midpoint(1.0, 5.0_f64.sqrt());
        #[allow(clippy::cast_possible_truncation)]
        let f = golden as f32;
        let mut vertices = vec![0.0, f, 0.0, 0.0, -f, 0.0];
        normalize_vertices(&mut vertices);

        assert_eq!(vertices, vec![0.0, 1.0, 0.0, 0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_degenerate_left_untouched() {
        let mut vertices = vec![1e-4, 0.0, 0.0, 0.0, 0.0, 0.0];
        normalize_vertices(&mut vertices);

        assert_eq!(vertices, vec![1e-4, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(vertices.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_direction_preserved() {
        let mut vertices = vec![2.0, -2.0, 1.0];
        normalize_vertices(&mut vertices);

        assert_relative_eq!(vertices[0], 2.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(vertices[1], -2.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(vertices[2], 1.0 / 3.0, epsilon = 1e-6);
    }
}
