//! # Scene
//!
//! GPU-ready surface buffers with styling, produced once per mesh.

use serde::Serialize;

use crate::colormap::Colormap;

/// A rendered surface: flattened buffers plus presentation metadata.
///
/// All geometry is f64 in the mesh. Export to f32 only happens here, at
/// the rendering boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Scene title.
    pub title: String,
    /// Axis labels in X, Y, Z order.
    pub axis_labels: [String; 3],
    /// Vertex positions as `[x, y, z, x, y, z, ...]`, row-major over the grid.
    pub vertices: Vec<f32>,
    /// Triangle indices as `[i0, i1, i2, ...]`.
    pub indices: Vec<u32>,
    /// Per-vertex colors as `[r, g, b, a, ...]`.
    pub colors: Vec<f32>,
    /// Wireframe edge color (RGBA).
    pub edge_color: [f32; 4],
    /// Surface opacity in `[0, 1]`.
    pub opacity: f32,
    /// Colormap used for `colors`.
    pub colormap: Colormap,
    /// Samples per axis of the source mesh.
    pub resolution: usize,
}

impl Scene {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the scene has no geometry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex at `index` as `[x, y, z]`.
    pub fn vertex(&self, index: usize) -> Option<[f32; 3]> {
        let start = index.checked_mul(3)?;
        self.vertices
            .get(start..start.checked_add(3)?)
            .map(|v| [v[0], v[1], v[2]])
    }

    /// Returns the triangle at `index`.
    pub fn triangle(&self, index: usize) -> Option<[u32; 3]> {
        let start = index.checked_mul(3)?;
        self.indices
            .get(start..start.checked_add(3)?)
            .map(|t| [t[0], t[1], t[2]])
    }

    /// Validates the buffers for correctness.
    ///
    /// Checks:
    /// - Buffer lengths agree with the vertex count
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex index
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.vertices.len() % 3 != 0 || self.indices.len() % 3 != 0 {
            return false;
        }
        if self.colors.len() != self.vertex_count() * 4 {
            return false;
        }
        let vertex_count = self.vertex_count() as u32;
        self.indices.chunks_exact(3).all(|tri| {
            tri.iter().all(|&i| i < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::Renderer;
    use mobius_mesh::construct;

    fn small_scene() -> crate::Scene {
        Renderer::default().render(&construct(1.0, 0.3, 3).unwrap())
    }

    #[test]
    fn test_vertex_lookup_bounds() {
        let scene = small_scene();
        assert_eq!(scene.vertex_count(), 9);
        assert!(scene.vertex(8).is_some());
        assert_eq!(scene.vertex(9), None);
    }

    #[test]
    fn test_huge_index_returns_none() {
        let scene = small_scene();
        assert_eq!(scene.vertex(usize::MAX / 2), None);
        assert_eq!(scene.vertex(usize::MAX), None);
        assert_eq!(scene.triangle(usize::MAX / 3), None);
        assert_eq!(scene.triangle(usize::MAX), None);
    }

    #[test]
    fn test_triangle_lookup_matches_indices() {
        let scene = small_scene();
        assert_eq!(scene.triangle_count(), 8);
        let last = scene.triangle(7).unwrap();
        assert_eq!(&last[..], &scene.indices[21..24]);
        assert_eq!(scene.triangle(8), None);
    }
}
