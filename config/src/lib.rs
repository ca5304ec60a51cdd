//! # Config Crate
//!
//! Centralized configuration constants for the Möbius strip pipeline.
//! Parameter defaults, safety limits, tolerances and presentation defaults
//! are defined here so the mesh core and its consumers never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, DEFAULT_RADIUS, DEFAULT_RESOLUTION, DEFAULT_WIDTH};
//!
//! // Defaults used when the caller does not pick a strip explicitly
//! assert_eq!(DEFAULT_RADIUS, 1.0);
//! assert_eq!(DEFAULT_WIDTH, 0.2);
//! assert_eq!(DEFAULT_RESOLUTION, 100);
//!
//! // Use EPSILON-based helpers for floating-point comparisons
//! assert!(approx_zero(1e-11));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Reference Compatible**: Defaults match the reference visualization
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
