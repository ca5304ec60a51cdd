//! # Configuration Constants
//!
//! Centralized constants for the Möbius strip pipeline. Strip parameter
//! defaults, sampling limits, precision values and presentation defaults are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Strip Parameters**: Default radius, width and resolution
//! - **Limits**: Bounds on resolution and parallel evaluation
//! - **Presentation**: Camera, animation and surface styling defaults

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance below which a coordinate difference is rounding noise.
///
/// The mesh treats its `u = 0` / `u = 2π` seam as closed when the reversed
/// column gap is under this bound, and the renderer treats a height range
/// under it as flat. Trigonometric residues at `2π` sit near `1e-16`.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// let seam_residue = (2.0 * std::f64::consts::PI).sin().abs();
/// assert!(seam_residue < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// STRIP PARAMETER DEFAULTS
// =============================================================================

/// Default distance from the strip's center to its midline.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RADIUS;
///
/// let user_radius: Option<f64> = None;
/// assert_eq!(user_radius.unwrap_or(DEFAULT_RADIUS), 1.0);
/// ```
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default strip width, measured across the transverse coordinate.
///
/// The transverse coordinate spans `[-width / 2, width / 2]`.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_WIDTH;
///
/// let half = DEFAULT_WIDTH / 2.0;
/// assert!((half - 0.1).abs() < 1e-12);
/// ```
pub const DEFAULT_WIDTH: f64 = 0.2;

/// Default number of samples along each parameter axis.
///
/// The mesh holds `DEFAULT_RESOLUTION * DEFAULT_RESOLUTION` points.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RESOLUTION;
///
/// assert_eq!(DEFAULT_RESOLUTION * DEFAULT_RESOLUTION, 10_000);
/// ```
pub const DEFAULT_RESOLUTION: usize = 100;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum samples per axis.
///
/// A single sample cannot define an evenly spaced axis: the step
/// `(end - start) / (n - 1)` is undefined for `n = 1`.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_RESOLUTION;
///
/// let requested = 1;
/// assert!(requested < MIN_RESOLUTION);
/// ```
pub const MIN_RESOLUTION: usize = 2;

/// Maximum samples per axis.
///
/// Safety limit to prevent memory exhaustion: three `f64` grids of
/// `MAX_RESOLUTION²` cells is roughly 2.4 GB.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_RESOLUTION;
///
/// let requested = 20_000;
/// assert!(requested > MAX_RESOLUTION);
/// ```
pub const MAX_RESOLUTION: usize = 10_000;

/// Resolution from which mesh rows are evaluated in parallel.
///
/// Below this, thread dispatch costs more than the trigonometry it spreads.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_RESOLUTION, PARALLEL_ROW_THRESHOLD};
///
/// let parallel = DEFAULT_RESOLUTION >= PARALLEL_ROW_THRESHOLD;
/// assert!(!parallel);
/// ```
pub const PARALLEL_ROW_THRESHOLD: usize = 256;

// =============================================================================
// PRESENTATION CONSTANTS
// =============================================================================

/// Default number of frames in a camera sweep animation.
///
/// Frame `k` is viewed from azimuth `k` degrees.
pub const DEFAULT_ANIMATION_FRAMES: u32 = 90;

/// Default delay between animation frames, in milliseconds.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_ANIMATION_FRAMES, DEFAULT_FRAME_INTERVAL_MS};
///
/// let total_ms = DEFAULT_ANIMATION_FRAMES as u64 * DEFAULT_FRAME_INTERVAL_MS as u64;
/// assert_eq!(total_ms, 9_000);
/// ```
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 100;

/// Default camera elevation above the XY plane, in degrees.
pub const DEFAULT_CAMERA_ELEVATION_DEG: f64 = 30.0;

/// Default camera distance from the origin, in model units.
pub const DEFAULT_CAMERA_DISTANCE: f64 = 4.0;

/// Surface opacity for static renderings.
pub const DEFAULT_SURFACE_OPACITY: f32 = 1.0;

/// Surface opacity for animated renderings.
pub const ANIMATED_SURFACE_OPACITY: f32 = 0.8;

/// Wireframe edge color (RGBA, black).
pub const DEFAULT_EDGE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Title attached to every rendered scene.
pub const SCENE_TITLE: &str = "Möbius Strip";

// =============================================================================
// DEMONSTRATION CONSTANTS
// =============================================================================

/// Radius of the demonstration strip.
pub const DEMO_RADIUS: f64 = 1.0;

/// Width of the demonstration strip.
pub const DEMO_WIDTH: f64 = 0.3;

/// Resolution of the demonstration strip.
pub const DEMO_RESOLUTION: usize = 150;

/// Frame count of the demonstration animation.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_ANIMATION_FRAMES, DEMO_ANIMATION_FRAMES};
///
/// assert!(DEMO_ANIMATION_FRAMES > DEFAULT_ANIMATION_FRAMES);
/// ```
pub const DEMO_ANIMATION_FRAMES: u32 = 120;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// True when `a` and `b` differ by less than [`EPSILON`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// True when `value` is within [`EPSILON`] of zero.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
