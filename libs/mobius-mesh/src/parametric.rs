//! # Parametric Mapping
//!
//! Closed-form Möbius strip equations:
//!
//! ```text
//! x = (R + v·cos(u/2))·cos(u)
//! y = (R + v·cos(u/2))·sin(u)
//! z = v·sin(u/2)
//! ```
//!
//! The half-angle terms rotate the transverse cross-section by π while `u`
//! runs over `[0, 2π]`. That half-twist is what makes the surface one-sided.

use glam::DVec3;

/// Maps `(u, v)` parameter pairs to points on a strip of a fixed radius.
///
/// The mapping is total over all real inputs.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::MobiusMapper;
///
/// let mapper = MobiusMapper::new(1.0);
/// let p = mapper.map(0.0, -0.1);
/// assert!((p.x - 0.9).abs() < 1e-12);
/// assert_eq!(p.y, 0.0);
/// assert_eq!(p.z, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusMapper {
    radius: f64,
}

impl MobiusMapper {
    /// Creates a mapper for a strip whose midline has the given radius.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Midline radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Evaluates the strip at circumferential `u` and transverse `v`.
    #[inline]
    pub fn map(&self, u: f64, v: f64) -> DVec3 {
        let (sin_half, cos_half) = (u / 2.0).sin_cos();
        let (sin_u, cos_u) = u.sin_cos();
        let ring = self.radius + v * cos_half;
        DVec3::new(ring * cos_u, ring * sin_u, v * sin_half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_origin_of_parameter_domain() {
        let p = MobiusMapper::new(1.0).map(0.0, -0.1);
        assert_relative_eq!(p.x, 0.9, epsilon = 1e-12);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_centerline_is_circle() {
        let mapper = MobiusMapper::new(2.5);
        for k in 0..16 {
            let u = TAU * k as f64 / 16.0;
            let p = mapper.map(u, 0.0);
            assert_eq!(p.z, 0.0);
            assert_relative_eq!(p.x.hypot(p.y), 2.5, epsilon = 1e-12);
            assert_relative_eq!(p.x, 2.5 * u.cos(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_z_antisymmetric_in_v() {
        let mapper = MobiusMapper::new(1.0);
        for k in 0..12 {
            let u = TAU * k as f64 / 11.0;
            let a = mapper.map(u, 0.07);
            let b = mapper.map(u, -0.07);
            assert_relative_eq!(a.z, -b.z, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_twist_part_of_radial_term_antisymmetric() {
        // Subtracting the centerline leaves only the v-proportional part
        let mapper = MobiusMapper::new(1.0);
        let u = 1.3;
        let center = mapper.map(u, 0.0);
        let plus = mapper.map(u, 0.05) - center;
        let minus = mapper.map(u, -0.05) - center;
        assert_relative_eq!(plus.x, -minus.x, epsilon = 1e-12);
        assert_relative_eq!(plus.y, -minus.y, epsilon = 1e-12);
    }

    #[test]
    fn test_half_twist_at_pi() {
        // Cross-section is vertical halfway around the strip
        let p = MobiusMapper::new(1.0).map(PI, 0.1);
        assert_relative_eq!(p.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_full_turn_reverses_transverse_direction() {
        let mapper = MobiusMapper::new(1.0);
        let start = mapper.map(0.0, 0.1);
        let end = mapper.map(TAU, -0.1);
        assert!(start.distance(end) < 1e-12);
    }
}
