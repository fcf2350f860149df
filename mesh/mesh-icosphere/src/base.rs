//! Base icosahedron.

use crate::indices::TriangleIndices;

/// Number of vertices of the icosahedron.
pub const ICOSAHEDRON_VERTEX_COUNT: usize = 12;

/// Triangles of the base icosahedron, in generation order.
///
/// Winding is consistent across all faces, and every subdivision pass keeps it.
pub const ICOSAHEDRON_TRIANGLES: [[u16; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [11, 10, 2],
    [5, 11, 4],
    [1, 5, 9],
    [7, 1, 8],
    [10, 7, 6],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [9, 8, 1],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
];

/// Unnormalized icosahedron vertices: sign patterns of `(±1, ±f, 0)` with
/// `f` the golden ratio, cycled through the three axes.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn icosahedron_vertices() -> [[f32; 3]; ICOSAHEDRON_VERTEX_COUNT] {
    let f = f64::midpoint(1.0, 5.0_f64.sqrt()) as f32;
    [
        [-1.0, f, 0.0],
        [1.0, f, 0.0],
        [-1.0, -f, 0.0],
        [1.0, -f, 0.0],
        [0.0, -1.0, f],
        [0.0, 1.0, f],
        [0.0, -1.0, -f],
        [0.0, 1.0, -f],
        [f, 0.0, -1.0],
        [f, 0.0, 1.0],
        [-f, 0.0, -1.0],
        [-f, 0.0, 1.0],
    ]
}

/// Write the icosahedron into fresh buffers.
///
/// `vertex_capacity` is the final vertex count the caller expects, so the
/// buffer never reallocates while subdivision appends to it.
pub(crate) fn build_icosahedron(vertex_capacity: usize) -> (Vec<f32>, TriangleIndices) {
    let mut vertices = Vec::with_capacity(3 * vertex_capacity.max(ICOSAHEDRON_VERTEX_COUNT));
    for v in icosahedron_vertices() {
        vertices.extend_from_slice(&v);
    }

    let mut triangles = TriangleIndices::with_capacity(3 * ICOSAHEDRON_TRIANGLES.len());
    for [a, b, c] in ICOSAHEDRON_TRIANGLES {
        triangles.push_triangle([u32::from(a), u32::from(b), u32::from(c)]);
    }

    (vertices, triangles)
}
