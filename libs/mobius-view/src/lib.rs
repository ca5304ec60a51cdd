//! # Möbius View
//!
//! Presentation collaborators for [`mobius_mesh::Mesh`]. Everything here takes
//! a finished mesh by reference and produces plain data; the core never
//! depends on this crate.
//!
//! ## Architecture
//!
//! ```text
//! Mesh → Renderer → Scene ─────────────┐
//! Mesh → Animator → Animation ─────────┴→ DisplayDocument → JSON
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use mobius_mesh::construct;
//! use mobius_view::{AnimationSettings, Animator, DisplayDocument};
//!
//! let mesh = construct(1.0, 0.3, 30)?;
//! let animation = Animator::new(AnimationSettings::default())?.animate(&mesh);
//! let json = DisplayDocument::from_animation(animation).to_json()?;
//! assert!(json.starts_with('{'));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod animate;
pub mod camera;
pub mod colormap;
pub mod display;
pub mod error;
pub mod render;
pub mod scene;

pub use animate::{Animation, AnimationSettings, Animator};
pub use camera::CameraView;
pub use colormap::Colormap;
pub use display::{DisplayContent, DisplayDocument};
pub use error::{ViewError, ViewResult};
pub use render::Renderer;
pub use scene::Scene;
