//! Centralized configuration values shared across the p-norm surface crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use thiserror::Error;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Magnitude below which a coordinate or norm is treated as exactly zero.
///
/// Unit-sphere components smaller than this are snapped to `0.0` before
/// exponentiation, and norms smaller than this skip the division.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_EPSILON;
/// assert!(DEGENERATE_EPSILON < 1.0e-6);
/// ```
pub const DEGENERATE_EPSILON: f64 = 1.0e-9;

/// Checks if a value is within [`DEGENERATE_EPSILON`] of zero.
///
/// # Examples
/// ```
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1.0e-12));
/// assert!(approx_zero(-6.1e-17));
/// assert!(!approx_zero(1.0e-3));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < DEGENERATE_EPSILON
}

// =============================================================================
// SURFACE CONSTANTS
// =============================================================================

/// Exponent at and above which the p-norm ball is replaced by its limiting cube.
///
/// # Examples
/// ```
/// use config::constants::{CUBE_EXPONENT_THRESHOLD, MAX_EXPONENT};
/// assert!(CUBE_EXPONENT_THRESHOLD <= MAX_EXPONENT);
/// ```
pub const CUBE_EXPONENT_THRESHOLD: f64 = 10.0;

/// Smallest segment count the tessellator accepts. Lower requests are raised.
///
/// # Examples
/// ```
/// use config::constants::MIN_TESSELLATION_SEGMENTS;
/// let requested: u32 = 0;
/// assert_eq!(requested.max(MIN_TESSELLATION_SEGMENTS), 2);
/// ```
pub const MIN_TESSELLATION_SEGMENTS: u32 = 2;

/// Lower bound on latitude bands so the grid always spans both poles and an
/// equator row.
pub const MIN_THETA_SEGMENTS: u32 = 2;

// =============================================================================
// CONTROL RANGES
// =============================================================================

/// Lower bound of the exponent slider.
pub const MIN_EXPONENT: f64 = 0.25;

/// Upper bound of the exponent slider.
pub const MAX_EXPONENT: f64 = 10.0;

/// Lower bound of the radius slider.
pub const MIN_RADIUS: f64 = 0.5;

/// Upper bound of the radius slider.
pub const MAX_RADIUS: f64 = 5.0;

/// Lower bound of the segment slider.
pub const MIN_SEGMENTS: u32 = 8;

/// Upper bound of the segment slider.
///
/// # Examples
/// ```
/// use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
/// assert!(MIN_SEGMENTS < MAX_SEGMENTS);
/// ```
pub const MAX_SEGMENTS: u32 = 128;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Exponent shown at startup (the Euclidean sphere).
pub const DEFAULT_EXPONENT: f64 = 2.0;

/// Radius shown at startup.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Segment count used at startup.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_SEGMENTS, MAX_SEGMENTS, MIN_SEGMENTS};
/// assert!((MIN_SEGMENTS..=MAX_SEGMENTS).contains(&DEFAULT_SEGMENTS));
/// ```
pub const DEFAULT_SEGMENTS: u32 = 64;

/// Material opacity used at startup.
pub const DEFAULT_OPACITY: f32 = 1.0;

/// Whether the surface starts in wireframe mode.
pub const DEFAULT_WIREFRAME: bool = false;

/// Surface color (RGBA, components in `[0.0, 1.0]`).
pub const DEFAULT_COLOR: [f32; 4] = [0.0, 0.53, 1.0, 1.0];

// =============================================================================
// CONTROL RANGES STRUCT
// =============================================================================

/// Slider bounds a parameter source exposes to the user.
///
/// Keeping the bounds in one value lets hosts clamp incoming values before they
/// reach the generator.
///
/// # Examples
/// ```
/// use config::constants::ControlRanges;
/// let ranges = ControlRanges::default();
/// assert_eq!(ranges.clamp_segments(4), 8);
/// assert_eq!(ranges.clamp_exponent(42.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRanges {
    /// Inclusive exponent bounds.
    pub exponent: (f64, f64),
    /// Inclusive radius bounds.
    pub radius: (f64, f64),
    /// Inclusive segment bounds.
    pub segments: (u32, u32),
}

impl ControlRanges {
    /// Builds ranges, rejecting empty or non-positive intervals.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ControlRanges;
    /// let ranges = ControlRanges::new((0.5, 4.0), (1.0, 2.0), (8, 64)).expect("valid ranges");
    /// assert_eq!(ranges.segments.1, 64);
    /// assert!(ControlRanges::new((0.0, 4.0), (1.0, 2.0), (8, 64)).is_err());
    /// ```
    pub fn new(
        exponent: (f64, f64),
        radius: (f64, f64),
        segments: (u32, u32),
    ) -> Result<Self, ConfigError> {
        if !(exponent.0 > 0.0 && exponent.0 <= exponent.1) {
            return Err(ConfigError::InvalidExponentRange(exponent.0, exponent.1));
        }
        if !(radius.0 > 0.0 && radius.0 <= radius.1) {
            return Err(ConfigError::InvalidRadiusRange(radius.0, radius.1));
        }
        if segments.0 < MIN_TESSELLATION_SEGMENTS || segments.0 > segments.1 {
            return Err(ConfigError::InvalidSegmentRange(segments.0, segments.1));
        }
        Ok(Self {
            exponent,
            radius,
            segments,
        })
    }

    /// Clamps an exponent into the slider range.
    pub fn clamp_exponent(&self, p: f64) -> f64 {
        p.clamp(self.exponent.0, self.exponent.1)
    }

    /// Clamps a radius into the slider range.
    pub fn clamp_radius(&self, radius: f64) -> f64 {
        radius.clamp(self.radius.0, self.radius.1)
    }

    /// Clamps a segment count into the slider range.
    pub fn clamp_segments(&self, segments: u32) -> u32 {
        segments.clamp(self.segments.0, self.segments.1)
    }
}

impl Default for ControlRanges {
    fn default() -> Self {
        Self {
            exponent: (MIN_EXPONENT, MAX_EXPONENT),
            radius: (MIN_RADIUS, MAX_RADIUS),
            segments: (MIN_SEGMENTS, MAX_SEGMENTS),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Raised when the exponent interval is empty or not strictly positive.
    #[error("exponent range must satisfy 0 < min <= max: [{0}, {1}]")]
    InvalidExponentRange(f64, f64),
    /// Raised when the radius interval is empty or not strictly positive.
    #[error("radius range must satisfy 0 < min <= max: [{0}, {1}]")]
    InvalidRadiusRange(f64, f64),
    /// Raised when the segment interval is empty or below the tessellation minimum.
    #[error("segment range must satisfy 2 <= min <= max: [{0}, {1}]")]
    InvalidSegmentRange(u32, u32),
}
