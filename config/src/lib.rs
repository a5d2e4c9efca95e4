//! # Config Crate
//!
//! Centralized configuration constants for the p-norm surface explorer.
//! Numerical tolerances, slider ranges, and startup defaults are defined here
//! so the generator, the WASM host bindings, and the CLI agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, DEFAULT_EXPONENT, DEGENERATE_EPSILON};
//!
//! // Components below DEGENERATE_EPSILON are snapped to zero
//! let component: f64 = 6.1e-17; // cos(PI / 2)
//! assert!(approx_zero(component));
//! assert!(DEGENERATE_EPSILON > 0.0);
//!
//! // The startup surface is the Euclidean sphere
//! assert_eq!(DEFAULT_EXPONENT, 2.0);
//! ```
//!
//! ## Categories
//!
//! - **Precision**: snapping and division tolerances
//! - **Surface**: cube threshold and tessellation minimums
//! - **Controls**: slider ranges and startup defaults

pub mod constants;
