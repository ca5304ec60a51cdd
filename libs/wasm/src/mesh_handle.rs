//! # Strip Handle
//!
//! WASM-friendly wrapper for a rendered strip that can be transferred to
//! JavaScript.

use mobius_mesh::Mesh;
use mobius_view::Scene;
use wasm_bindgen::prelude::*;

/// A handle to strip data that can be accessed from JavaScript.
///
/// Carries both the triangle buffers of the rendered scene and the raw
/// coordinate grids of the mesh.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const strip = build_strip(1.0, 0.3, 150);
///
/// // Buffers for Three.js
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(strip.vertices(), 3));
/// geometry.setAttribute('color', new THREE.BufferAttribute(strip.colors(), 4));
/// geometry.setIndex(new THREE.BufferAttribute(strip.indices(), 1));
///
/// // Grids for surface plots, row-major resolution x resolution
/// const xs = strip.grid_x();
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct StripHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex colors as [r, g, b, a, ...]
    colors: Vec<f32>,
    /// Row-major coordinate grids
    grid_x: Vec<f64>,
    grid_y: Vec<f64>,
    grid_z: Vec<f64>,
    /// Samples per axis
    resolution: u32,
    /// Surface opacity
    opacity: f32,
    /// Largest mismatch of the u = 0 / u = 2π columns (rows reversed)
    seam_gap: f64,
    /// Whether the seam gap is rounding noise
    seam_closed: bool,
}

#[wasm_bindgen]
impl StripHandle {
    /// Returns the number of samples per axis.
    #[wasm_bindgen(getter)]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / 3) as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    /// Returns the surface opacity.
    #[wasm_bindgen(getter)]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Returns how far the closing seam column is from the opening one.
    #[wasm_bindgen(getter)]
    pub fn seam_gap(&self) -> f64 {
        self.seam_gap
    }

    /// Returns true when the closing seam column duplicates the opening one.
    #[wasm_bindgen(getter)]
    pub fn seam_closed(&self) -> bool {
        self.seam_closed
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    /// Length: triangle_count * 3
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the vertex colors as a Float32Array.
    ///
    /// Format: [r, g, b, a, r, g, b, a, ...]
    /// Length: vertex_count * 4
    #[wasm_bindgen]
    pub fn colors(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.colors[..])
    }

    /// Returns the X grid as a row-major Float64Array.
    #[wasm_bindgen]
    pub fn grid_x(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(&self.grid_x[..])
    }

    /// Returns the Y grid as a row-major Float64Array.
    #[wasm_bindgen]
    pub fn grid_y(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(&self.grid_y[..])
    }

    /// Returns the Z grid as a row-major Float64Array.
    #[wasm_bindgen]
    pub fn grid_z(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(&self.grid_z[..])
    }

    /// Returns true if the strip has no vertices.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl StripHandle {
    /// Creates a StripHandle from a mesh and its rendered scene.
    pub fn from_parts(mesh: &Mesh, scene: Scene) -> Self {
        let (x, y, z) = mesh.coordinates();
        let seam = mesh.seam();
        Self {
            vertices: scene.vertices,
            indices: scene.indices,
            colors: scene.colors,
            grid_x: x.as_slice().to_vec(),
            grid_y: y.as_slice().to_vec(),
            grid_z: z.as_slice().to_vec(),
            resolution: mesh.resolution() as u32,
            opacity: scene.opacity,
            seam_gap: seam.reversed_gap,
            seam_closed: seam.is_closed(),
        }
    }

    /// Host-side view of the vertex buffer.
    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    /// Host-side view of the index buffer.
    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    /// Host-side view of the color buffer.
    pub fn color_buffer(&self) -> &[f32] {
        &self.colors
    }

    /// Host-side view of the Z grid.
    pub fn z_grid(&self) -> &[f64] {
        &self.grid_z
    }
}
