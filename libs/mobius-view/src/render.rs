//! # Renderer
//!
//! Turns a mesh into a static [`Scene`]: every grid cell becomes two
//! triangles and each vertex is colored by its normalized height.

use config::constants::{approx_equal, DEFAULT_EDGE_COLOR, DEFAULT_SURFACE_OPACITY, SCENE_TITLE};
use mobius_mesh::Mesh;

use crate::colormap::Colormap;
use crate::error::{ViewError, ViewResult};
use crate::scene::Scene;

/// Static surface renderer.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::construct;
/// use mobius_view::{Colormap, Renderer};
///
/// let mesh = construct(1.0, 0.2, 10).unwrap();
/// let scene = Renderer::new(Colormap::Plasma).render(&mesh);
/// assert_eq!(scene.vertex_count(), 100);
/// assert_eq!(scene.triangle_count(), 2 * 9 * 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    colormap: Colormap,
    opacity: f32,
    edge_color: [f32; 4],
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Colormap::default())
    }
}

impl Renderer {
    /// Creates an opaque renderer with black edges.
    pub fn new(colormap: Colormap) -> Self {
        Self {
            colormap,
            opacity: DEFAULT_SURFACE_OPACITY,
            edge_color: DEFAULT_EDGE_COLOR,
        }
    }

    /// Sets the surface opacity.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidSettings`] unless `opacity` is in `(0, 1]`.
    pub fn with_opacity(mut self, opacity: f32) -> ViewResult<Self> {
        if !(opacity > 0.0 && opacity <= 1.0) {
            return Err(ViewError::invalid_settings(format!(
                "opacity must be in (0, 1], got {}",
                opacity
            )));
        }
        self.opacity = opacity;
        Ok(self)
    }

    /// Sets the wireframe edge color.
    pub fn with_edge_color(mut self, edge_color: [f32; 4]) -> Self {
        self.edge_color = edge_color;
        self
    }

    /// Colormap in use.
    #[inline]
    pub fn colormap(&self) -> Colormap {
        self.colormap
    }

    /// Renders the mesh. The mesh is only read.
    pub fn render(&self, mesh: &Mesh) -> Scene {
        let n = mesh.resolution();
        let vertices = mesh
            .points()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect();
        let indices = grid_triangles(n);
        let colors = height_colors(mesh, self.colormap);

        log::debug!(
            "Rendered {}x{} Möbius mesh into {} triangles ({})",
            n,
            n,
            indices.len() / 3,
            self.colormap
        );

        Scene {
            title: SCENE_TITLE.to_string(),
            axis_labels: ["X".to_string(), "Y".to_string(), "Z".to_string()],
            vertices,
            indices,
            colors,
            edge_color: self.edge_color,
            opacity: self.opacity,
            colormap: self.colormap,
            resolution: n,
        }
    }
}

/// Triangulates an `n × n` row-major vertex grid, two triangles per cell.
///
/// # Example
///
/// ```rust
/// use mobius_view::render::grid_triangles;
///
/// assert_eq!(grid_triangles(2), vec![0, 2, 3, 0, 3, 1]);
/// ```
pub fn grid_triangles(n: usize) -> Vec<u32> {
    if n < 2 {
        return Vec::new();
    }
    let cells = (n - 1) * (n - 1);
    let mut indices = Vec::with_capacity(cells * 6);
    for i in 0..n - 1 {
        for j in 0..n - 1 {
            let a = (i * n + j) as u32;
            let b = a + 1;
            let c = a + n as u32;
            let d = c + 1;
            indices.extend_from_slice(&[a, c, d, a, d, b]);
        }
    }
    indices
}

/// Colors each vertex by its Z value scaled to `[0, 1]`.
fn height_colors(mesh: &Mesh, colormap: Colormap) -> Vec<f32> {
    let z = mesh.z();
    let (lo, hi) = z.min_max().unwrap_or((0.0, 0.0));
    let flat = approx_equal(lo, hi);
    z.as_slice()
        .iter()
        .flat_map(|&value| {
            let t = if flat { 0.5 } else { (value - lo) / (hi - lo) };
            colormap.sample(t)
        })
        .collect()
}
