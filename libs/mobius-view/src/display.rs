//! # Display Documents
//!
//! Terminal sink that packages a scene or animation into JSON for an
//! embedding page. Nothing here feeds back into the mesh.

use serde::Serialize;

use crate::animate::Animation;
use crate::camera::CameraView;
use crate::error::ViewResult;
use crate::scene::Scene;

/// Format version written into every document.
pub const DOCUMENT_VERSION: u32 = 1;

/// Serializable presentation of a rendering.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::construct;
/// use mobius_view::{DisplayDocument, Renderer};
///
/// let mesh = construct(1.0, 0.2, 4).unwrap();
/// let doc = DisplayDocument::from_scene(Renderer::default().render(&mesh));
/// let json = doc.to_json().unwrap();
/// assert!(json.contains("\"kind\":\"static\""));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayDocument {
    version: u32,
    #[serde(flatten)]
    content: DisplayContent,
}

/// What a document shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayContent {
    /// A single static rendering.
    Static {
        /// The rendering.
        scene: Scene,
    },
    /// A rendering played under a camera sweep.
    Animation {
        /// The rendering shared by all frames.
        scene: Scene,
        /// View shown before playback.
        initial_view: CameraView,
        /// One view per frame.
        frames: Vec<CameraView>,
        /// Delay between frames in milliseconds.
        interval_ms: u32,
    },
}

impl DisplayDocument {
    /// Wraps a static scene.
    pub fn from_scene(scene: Scene) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            content: DisplayContent::Static { scene },
        }
    }

    /// Wraps an animation.
    pub fn from_animation(animation: Animation) -> Self {
        let Animation {
            scene,
            initial_view,
            frames,
            interval_ms,
        } = animation;
        Self {
            version: DOCUMENT_VERSION,
            content: DisplayContent::Animation {
                scene,
                initial_view,
                frames,
                interval_ms,
            },
        }
    }

    /// Document content.
    pub fn content(&self) -> &DisplayContent {
        &self.content
    }

    /// The scene being displayed.
    pub fn scene(&self) -> &Scene {
        match &self.content {
            DisplayContent::Static { scene } | DisplayContent::Animation { scene, .. } => scene,
        }
    }

    /// Serializes to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ViewError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> ViewResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes to indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ViewError::Serialization`] if encoding fails.
    pub fn to_json_pretty(&self) -> ViewResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
