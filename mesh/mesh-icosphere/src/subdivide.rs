//! Edge-midpoint subdivision of the base solid.

// Vertex counts stay below 2^32 for every supported order
#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashMap;
use tracing::debug;

use crate::indices::TriangleIndices;

/// Cache of edge midpoints created during subdivision.
///
/// Each edge of a closed mesh is visited by exactly two triangles. The first
/// visit creates the midpoint vertex and stores its index, the second visit
/// takes it back out, so the cache only ever holds edges that are half done.
#[derive(Debug)]
pub(crate) struct MidpointCache {
    midpoints: HashMap<u64, u32>,
}

impl MidpointCache {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            midpoints: HashMap::with_capacity(capacity),
        }
    }

    /// Index of the midpoint of edge `(a, b)`, appending it to `vertices` on
    /// first request.
    pub(crate) fn get_or_create(&mut self, a: u32, b: u32, vertices: &mut Vec<f32>) -> u32 {
        let key = edge_key(a, b);
        if let Some(index) = self.midpoints.remove(&key) {
            return index;
        }

        let index = (vertices.len() / 3) as u32;
        let (pa, pb) = (3 * a as usize, 3 * b as usize);
        for k in 0..3 {
            let mid = (vertices[pa + k] + vertices[pb + k]) * 0.5;
            vertices.push(mid);
        }
        self.midpoints.insert(key, index);
        index
    }

    pub(crate) fn len(&self) -> usize {
        self.midpoints.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }
}

/// Cantor pairing of the sorted endpoints. Order-independent and injective
/// for any pair of `u32` indices.
pub(crate) fn edge_key(a: u32, b: u32) -> u64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let sum = u64::from(lo) + u64::from(hi);
    sum * (sum + 1) / 2 + u64::from(lo)
}

/// Apply `order` passes of 1-to-4 subdivision.
///
/// Each parent `(v1, v2, v3)` with edge midpoints `a = (v1, v2)`,
/// `b = (v2, v3)`, `c = (v3, v1)` becomes `(v1, a, c)`, `(v2, b, a)`,
/// `(v3, c, b)` and `(a, b, c)`, all with the parent's winding.
pub(crate) fn subdivide(
    vertices: &mut Vec<f32>,
    base: TriangleIndices,
    order: u32,
) -> TriangleIndices {
    let mut cache = MidpointCache::with_capacity(base.triangle_count() * 3 / 2);
    let mut triangles = base;

    for pass in 0..order {
        let parent_count = triangles.triangle_count();
        let mut next = TriangleIndices::with_capacity(triangles.len() * 4);
        cache.midpoints.reserve(parent_count * 3 / 2);

        for [v1, v2, v3] in triangles.triangles() {
            let a = cache.get_or_create(v1, v2, vertices);
            let b = cache.get_or_create(v2, v3, vertices);
            let c = cache.get_or_create(v3, v1, vertices);

            // Corner triangles
            next.push_triangle([v1, a, c]);
            next.push_triangle([v2, b, a]);
            next.push_triangle([v3, c, b]);
            // Center triangle
            next.push_triangle([a, b, c]);
        }

        debug_assert!(cache.is_empty(), "{} unmatched edges", cache.len());
        triangles = next;

        debug!(
            "Subdivision pass {}: {} triangles, {} vertices ({}-bit indices)",
            pass + 1,
            triangles.triangle_count(),
            vertices.len() / 3,
            if triangles.is_narrow() { 16 } else { 32 }
        );
    }

    triangles
}
