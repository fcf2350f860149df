//! Triangle index buffer with narrow-to-wide promotion.
//!
//! Small icospheres fit their indices in 16 bits, which halves the index
//! memory and matches what GPU index buffers prefer. The buffer starts narrow
//! and is promoted to 32-bit storage once it grows past what a `u16` buffer
//! should hold, or when an index value itself no longer fits.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flattened triangle index triples, stored as `u16` or `u32`.
///
/// Every three consecutive entries form one triangle.
///
/// # Example
///
/// ```
/// use mesh_icosphere::TriangleIndices;
///
/// let mut indices = TriangleIndices::with_capacity(3);
/// indices.push_triangle([0, 1, 2]);
/// assert!(indices.is_narrow());
///
/// indices.push_triangle([2, 1, 70_000]);
/// assert!(!indices.is_narrow());
/// assert_eq!(indices.triangle(1), [2, 1, 70_000]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TriangleIndices {
    /// 16-bit indices.
    Narrow(Vec<u16>),
    /// 32-bit indices.
    Wide(Vec<u32>),
}

impl Default for TriangleIndices {
    fn default() -> Self {
        Self::Narrow(Vec::new())
    }
}

impl TriangleIndices {
    /// Largest buffer length kept in 16-bit storage.
    pub const NARROW_LIMIT: usize = u16::MAX as usize;

    /// Create an empty buffer sized for `len` indices.
    ///
    /// The width is chosen from the projected length: narrow while
    /// `len <= NARROW_LIMIT`, wide otherwise.
    #[must_use]
    pub fn with_capacity(len: usize) -> Self {
        if len > Self::NARROW_LIMIT {
            Self::Wide(Vec::with_capacity(len))
        } else {
            Self::Narrow(Vec::with_capacity(len))
        }
    }

    /// Number of indices (three per triangle).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Narrow(v) => v.len(),
            Self::Wide(v) => v.len(),
        }
    }

    /// Returns true if the buffer holds no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.len() / 3
    }

    /// Returns true if indices are stored as `u16`.
    #[must_use]
    pub const fn is_narrow(&self) -> bool {
        matches!(self, Self::Narrow(_))
    }

    /// Index at flat position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn get(&self, i: usize) -> u32 {
        match self {
            Self::Narrow(v) => u32::from(v[i]),
            Self::Wide(v) => v[i],
        }
    }

    /// Vertex indices of triangle `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t >= self.triangle_count()`.
    #[must_use]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        [self.get(3 * t), self.get(3 * t + 1), self.get(3 * t + 2)]
    }

    /// Overwrite the index at flat position `i`, promoting to wide storage if
    /// `value` does not fit in 16 bits.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn set(&mut self, i: usize, value: u32) {
        if let Self::Narrow(v) = self {
            if let Ok(narrow) = u16::try_from(value) {
                v[i] = narrow;
                return;
            }
            self.promote();
        }
        if let Self::Wide(v) = self {
            v[i] = value;
        }
    }

    /// Append one triangle, promoting to wide storage if any index does not fit.
    pub fn push_triangle(&mut self, tri: [u32; 3]) {
        if let Self::Narrow(v) = self {
            if let (Ok(a), Ok(b), Ok(c)) = (
                u16::try_from(tri[0]),
                u16::try_from(tri[1]),
                u16::try_from(tri[2]),
            ) {
                v.extend_from_slice(&[a, b, c]);
                return;
            }
            self.promote();
        }
        if let Self::Wide(v) = self {
            v.extend_from_slice(&tri);
        }
    }

    /// Iterate over all indices, widened to `u32`.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }

    /// Iterate over triangles.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        (0..self.triangle_count()).map(move |t| self.triangle(t))
    }

    /// Copy all indices into a `u32` vector.
    #[must_use]
    pub fn to_u32_vec(&self) -> Vec<u32> {
        match self {
            Self::Narrow(v) => v.iter().copied().map(u32::from).collect(),
            Self::Wide(v) => v.clone(),
        }
    }

    /// Raw bytes of the index buffer in native endianness, ready for upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Narrow(v) => bytemuck::cast_slice(v),
            Self::Wide(v) => bytemuck::cast_slice(v),
        }
    }

    /// Switch to 32-bit storage, preserving contents and spare capacity.
    fn promote(&mut self) {
        if let Self::Narrow(v) = self {
            let mut wide = Vec::with_capacity(v.capacity().max(v.len() + 3));
            wide.extend(v.iter().copied().map(u32::from));
            *self = Self::Wide(wide);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_from_projected_len() {
        assert!(TriangleIndices::with_capacity(60).is_narrow());
        assert!(TriangleIndices::with_capacity(TriangleIndices::NARROW_LIMIT).is_narrow());
        assert!(!TriangleIndices::with_capacity(TriangleIndices::NARROW_LIMIT + 1).is_narrow());
    }

    #[test]
    fn test_push_and_read() {
        let mut indices = TriangleIndices::with_capacity(6);
        indices.push_triangle([0, 11, 5]);
        indices.push_triangle([0, 5, 1]);

        assert_eq!(indices.len(), 6);
        assert_eq!(indices.triangle_count(), 2);
        assert_eq!(indices.get(1), 11);
        assert_eq!(indices.triangle(1), [0, 5, 1]);
        assert_eq!(indices.to_u32_vec(), vec![0, 11, 5, 0, 5, 1]);
        assert_eq!(
            indices.triangles().collect::<Vec<_>>(),
            vec![[0, 11, 5], [0, 5, 1]]
        );
    }

    #[test]
    fn test_set_promotes_on_large_value() {
        let mut indices = TriangleIndices::with_capacity(3);
        indices.push_triangle([1, 2, 3]);
        indices.set(1, 42);
        assert!(indices.is_narrow());

        indices.set(2, 65_536);
        assert!(!indices.is_narrow());
        assert_eq!(indices.to_u32_vec(), vec![1, 42, 65_536]);
    }

    #[test]
    fn test_push_promotes_and_keeps_contents() {
        let mut indices = TriangleIndices::with_capacity(6);
        indices.push_triangle([7, 8, 9]);
        indices.push_triangle([65_535, 65_536, 0]);

        assert!(!indices.is_narrow());
        assert_eq!(indices.to_u32_vec(), vec![7, 8, 9, 65_535, 65_536, 0]);
    }

    #[test]
    fn test_as_bytes_width() {
        let mut indices = TriangleIndices::with_capacity(3);
        indices.push_triangle([1, 2, 3]);
        assert_eq!(indices.as_bytes().len(), 6);

        indices.set(0, 100_000);
        assert_eq!(indices.as_bytes().len(), 12);
    }

    #[test]
    fn test_empty() {
        let indices = TriangleIndices::default();
        assert!(indices.is_empty());
        assert!(indices.is_narrow());
        assert_eq!(indices.triangle_count(), 0);
    }
}
