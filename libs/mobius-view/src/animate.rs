//! # Animator
//!
//! Camera sweep around a fixed scene. The mesh is rendered once; frames only
//! carry viewpoints, so per-frame work never touches mesh data.

use config::constants::{
    ANIMATED_SURFACE_OPACITY, DEFAULT_ANIMATION_FRAMES, DEFAULT_CAMERA_DISTANCE,
    DEFAULT_CAMERA_ELEVATION_DEG, DEFAULT_FRAME_INTERVAL_MS,
};
use mobius_mesh::Mesh;
use serde::Serialize;

use crate::camera::CameraView;
use crate::colormap::Colormap;
use crate::error::{ViewError, ViewResult};
use crate::render::Renderer;
use crate::scene::Scene;

/// Animation timing and camera settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    /// Number of frames; frame `k` is viewed from azimuth `k` degrees.
    pub frames: u32,
    /// Delay between frames in milliseconds.
    pub interval_ms: u32,
    /// Fixed camera elevation in degrees.
    pub elevation_deg: f64,
    /// Camera distance from the scene center.
    pub distance: f64,
    /// Surface colormap.
    pub colormap: Colormap,
    /// Surface opacity.
    pub opacity: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            frames: DEFAULT_ANIMATION_FRAMES,
            interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            elevation_deg: DEFAULT_CAMERA_ELEVATION_DEG,
            distance: DEFAULT_CAMERA_DISTANCE,
            colormap: Colormap::Viridis,
            opacity: ANIMATED_SURFACE_OPACITY,
        }
    }
}

impl AnimationSettings {
    /// Default settings with the given frame count and interval.
    pub fn new(frames: u32, interval_ms: u32) -> Self {
        Self {
            frames,
            interval_ms,
            ..Self::default()
        }
    }

    /// Checks every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidSettings`] for zero frames or interval,
    /// an elevation outside `(-90, 90)` degrees, or a non-positive distance.
    pub fn validate(&self) -> ViewResult<()> {
        if self.frames == 0 {
            return Err(ViewError::invalid_settings("frames must be at least 1"));
        }
        if self.interval_ms == 0 {
            return Err(ViewError::invalid_settings("interval_ms must be at least 1"));
        }
        if !(self.elevation_deg > -90.0 && self.elevation_deg < 90.0) {
            return Err(ViewError::invalid_settings(format!(
                "elevation_deg must be in (-90, 90), got {}",
                self.elevation_deg
            )));
        }
        if !(self.distance.is_finite() && self.distance > 0.0) {
            return Err(ViewError::invalid_settings(format!(
                "distance must be positive, got {}",
                self.distance
            )));
        }
        Ok(())
    }
}

/// A rendered scene plus the camera sequence to play over it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    /// The single rendering shared by every frame.
    pub scene: Scene,
    /// View before the first frame (azimuth 0).
    pub initial_view: CameraView,
    /// One view per frame.
    pub frames: Vec<CameraView>,
    /// Delay between frames in milliseconds.
    pub interval_ms: u32,
}

impl Animation {
    /// Number of frames.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Total playback time in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.frames.len() as u64 * u64::from(self.interval_ms)
    }
}

/// Builds camera sweep animations.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::construct;
/// use mobius_view::{AnimationSettings, Animator};
///
/// let mesh = construct(1.0, 0.3, 20).unwrap();
/// let animation = Animator::new(AnimationSettings::new(120, 100))
///     .unwrap()
///     .animate(&mesh);
/// assert_eq!(animation.frame_count(), 120);
/// assert_eq!(animation.frames[45].azimuth_deg, 45.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animator {
    settings: AnimationSettings,
    renderer: Renderer,
}

impl Animator {
    /// Creates an animator from validated settings.
    ///
    /// # Errors
    ///
    /// See [`AnimationSettings::validate`] and [`Renderer::with_opacity`].
    pub fn new(settings: AnimationSettings) -> ViewResult<Self> {
        settings.validate()?;
        let renderer = Renderer::new(settings.colormap).with_opacity(settings.opacity)?;
        Ok(Self { settings, renderer })
    }

    /// Settings in use.
    #[inline]
    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    /// Renders the mesh once and generates the camera sweep.
    pub fn animate(&self, mesh: &Mesh) -> Animation {
        let settings = &self.settings;
        let scene = self.renderer.render(mesh);

        let (min, max) = mesh.bounding_box();
        let target = (min + max) / 2.0;
        let view_at = |azimuth_deg: f64| {
            CameraView::orbit(settings.elevation_deg, azimuth_deg, settings.distance, target)
        };

        let frames: Vec<CameraView> = (0..settings.frames)
            .map(|frame| {
                let view = view_at(f64::from(frame));
                log::trace!("frame {}: azimuth {}", frame, view.azimuth_deg);
                view
            })
            .collect();

        log::debug!(
            "Animated Möbius mesh: {} frames at {} ms, elevation {}",
            frames.len(),
            settings.interval_ms,
            settings.elevation_deg
        );

        Animation {
            scene,
            initial_view: view_at(0.0),
            frames,
            interval_ms: settings.interval_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobius_mesh::construct;

    #[test]
    fn test_default_settings_match_reference() {
        let settings = AnimationSettings::default();
        assert_eq!(settings.frames, 90);
        assert_eq!(settings.interval_ms, 100);
        assert_eq!(settings.elevation_deg, 30.0);
        assert_eq!(settings.colormap, Colormap::Viridis);
        assert_eq!(settings.opacity, 0.8);
    }

    #[test]
    fn test_frames_sweep_azimuth() {
        let mesh = construct(1.0, 0.3, 12).unwrap();
        let animation = Animator::new(AnimationSettings::new(10, 50)).unwrap().animate(&mesh);
        let azimuths: Vec<f64> = animation.frames.iter().map(|f| f.azimuth_deg).collect();
        assert_eq!(azimuths, (0..10).map(f64::from).collect::<Vec<_>>());
        assert!(animation.frames.iter().all(|f| f.elevation_deg == 30.0));
        assert_eq!(animation.initial_view.azimuth_deg, 0.0);
        assert_eq!(animation.duration_ms(), 500);
    }

    #[test]
    fn test_scene_rendered_once_from_mesh() {
        let mesh = construct(1.0, 0.3, 12).unwrap();
        let animation = Animator::new(AnimationSettings::default()).unwrap().animate(&mesh);
        let expected = Renderer::new(Colormap::Viridis)
            .with_opacity(0.8)
            .unwrap()
            .render(&mesh);
        assert_eq!(animation.scene, expected);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        assert!(Animator::new(AnimationSettings::new(0, 100)).is_err());
        assert!(Animator::new(AnimationSettings::new(10, 0)).is_err());
        let steep = AnimationSettings {
            elevation_deg: 90.0,
            ..AnimationSettings::default()
        };
        assert!(Animator::new(steep).is_err());
        let close = AnimationSettings {
            distance: 0.0,
            ..AnimationSettings::default()
        };
        assert!(Animator::new(close).is_err());
        let invisible = AnimationSettings {
            opacity: 0.0,
            ..AnimationSettings::default()
        };
        assert!(Animator::new(invisible).is_err());
    }
}
