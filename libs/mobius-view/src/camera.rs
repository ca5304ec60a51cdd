//! # Camera
//!
//! Orbit viewpoints given as elevation/azimuth angles around a target.

use glam::{DMat4, DVec3};
use serde::Serialize;

/// A camera placed on a sphere around `target`, looking at it with +Z up.
///
/// Azimuth is measured from +X toward +Y in the XY plane; elevation is the
/// angle above that plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraView {
    /// Degrees above the XY plane.
    pub elevation_deg: f64,
    /// Degrees around +Z, from +X.
    pub azimuth_deg: f64,
    /// Camera position.
    pub eye: DVec3,
    /// Point the camera looks at.
    pub target: DVec3,
    /// Right-handed world-to-view matrix.
    pub view_matrix: DMat4,
}

impl CameraView {
    /// Places the camera `distance` units from `target`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use mobius_view::CameraView;
    ///
    /// let view = CameraView::orbit(0.0, 0.0, 4.0, DVec3::ZERO);
    /// assert!((view.eye - DVec3::new(4.0, 0.0, 0.0)).length() < 1e-12);
    /// ```
    pub fn orbit(elevation_deg: f64, azimuth_deg: f64, distance: f64, target: DVec3) -> Self {
        let (sin_el, cos_el) = elevation_deg.to_radians().sin_cos();
        let (sin_az, cos_az) = azimuth_deg.to_radians().sin_cos();
        let direction = DVec3::new(cos_el * cos_az, cos_el * sin_az, sin_el);
        let eye = target + direction * distance;
        Self {
            elevation_deg,
            azimuth_deg,
            eye,
            target,
            view_matrix: DMat4::look_at_rh(eye, target, DVec3::Z),
        }
    }

    /// Distance between eye and target.
    pub fn distance(&self) -> f64 {
        self.eye.distance(self.target)
    }

    /// Transforms a world-space point into view space.
    pub fn to_view_space(&self, point: DVec3) -> DVec3 {
        self.view_matrix.transform_point3(point)
    }
}
