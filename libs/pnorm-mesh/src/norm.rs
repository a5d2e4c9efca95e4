//! # P-Norm Evaluation
//!
//! Magnitude of a direction vector under a generalized p-norm, plus the
//! component snapping that keeps fractional exponents away from trig noise.

use config::constants::approx_zero;
use glam::DVec3;

/// A vector norm from the p-norm family.
///
/// # Example
///
/// ```rust
/// use pnorm_mesh::Norm;
/// use glam::DVec3;
///
/// let v = DVec3::new(3.0, 4.0, 0.0);
/// assert!((Norm::Finite(2.0).magnitude(v) - 5.0).abs() < 1e-12);
/// assert_eq!(Norm::Finite(1.0).magnitude(v), 7.0);
/// assert_eq!(Norm::Chebyshev.magnitude(v), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Norm {
    /// `(|x|^p + |y|^p + |z|^p)^(1/p)`
    Finite(f64),
    /// `max(|x|, |y|, |z|)`, the limit as p goes to infinity
    Chebyshev,
}

impl Norm {
    /// Maps an exponent to a norm; infinite exponents select [`Norm::Chebyshev`].
    pub fn from_exponent(p: f64) -> Self {
        if p.is_infinite() && p > 0.0 {
            Norm::Chebyshev
        } else {
            Norm::Finite(p)
        }
    }

    /// Returns the exponent, `f64::INFINITY` for Chebyshev.
    pub fn exponent(&self) -> f64 {
        match self {
            Norm::Finite(p) => *p,
            Norm::Chebyshev => f64::INFINITY,
        }
    }

    /// Evaluates the norm of `v`.
    pub fn magnitude(&self, v: DVec3) -> f64 {
        let a = v.abs();
        match self {
            Norm::Chebyshev => a.max_element(),
            Norm::Finite(p) => (a.x.powf(*p) + a.y.powf(*p) + a.z.powf(*p)).powf(1.0 / p),
        }
    }
}

/// Replaces every component within `DEGENERATE_EPSILON` of zero by exactly `0.0`.
///
/// `sin(PI)` and `cos(PI / 2)` land around `1e-16` instead of zero; snapping
/// them keeps poles and seams bit-identical across columns.
///
/// # Example
///
/// ```rust
/// use pnorm_mesh::norm::snap_to_zero;
/// use glam::DVec3;
///
/// let v = DVec3::new(std::f64::consts::PI.sin(), -1e-12, 0.5);
/// assert_eq!(snap_to_zero(v), DVec3::new(0.0, 0.0, 0.5));
/// ```
pub fn snap_to_zero(v: DVec3) -> DVec3 {
    let snap = |c: f64| if approx_zero(c) { 0.0 } else { c };
    DVec3::new(snap(v.x), snap(v.y), snap(v.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_exponent_selects_chebyshev_only_for_positive_infinity() {
        assert_eq!(Norm::from_exponent(f64::INFINITY), Norm::Chebyshev);
        assert_eq!(Norm::from_exponent(3.5), Norm::Finite(3.5));
        assert_eq!(Norm::from_exponent(10.0), Norm::Finite(10.0));
    }

    #[test]
    fn exponent_round_trips_through_from_exponent() {
        assert_eq!(Norm::Chebyshev.exponent(), f64::INFINITY);
        assert_eq!(Norm::from_exponent(0.25).exponent(), 0.25);
    }

    #[test]
    fn magnitude_ignores_component_signs() {
        let norm = Norm::Finite(3.0);
        let v = DVec3::new(0.2, -0.7, 0.4);
        assert_relative_eq!(norm.magnitude(v), norm.magnitude(-v), epsilon = 1e-15);
        assert_relative_eq!(
            norm.magnitude(v),
            norm.magnitude(DVec3::new(-0.2, 0.7, 0.4)),
            epsilon = 1e-15
        );
    }

    #[test]
    fn magnitude_of_axis_vector_is_one_for_every_exponent() {
        for p in [0.25, 0.5, 1.0, 2.0, 7.5] {
            assert_relative_eq!(Norm::Finite(p).magnitude(DVec3::Y), 1.0);
        }
        assert_eq!(Norm::Chebyshev.magnitude(DVec3::NEG_Z), 1.0);
    }

    #[test]
    fn small_exponent_inflates_diagonal_magnitude() {
        // (3 * (1/sqrt(3))^0.5)^2 = 3 * sqrt(3)
        let diagonal = DVec3::ONE.normalize();
        assert_relative_eq!(
            Norm::Finite(0.5).magnitude(diagonal),
            3.0 * 3f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn large_exponent_approaches_chebyshev() {
        let v = DVec3::new(0.3, 0.8, 0.52);
        let finite = Norm::Finite(200.0).magnitude(v);
        assert_relative_eq!(finite, Norm::Chebyshev.magnitude(v), epsilon = 1e-3);
    }

    #[test]
    fn snap_keeps_components_above_epsilon() {
        let v = DVec3::new(2e-9, -2e-9, 1.0);
        assert_eq!(snap_to_zero(v), v);
    }

    #[test]
    fn snap_produces_positive_zero() {
        let snapped = snap_to_zero(DVec3::new(-1e-17, 0.0, 0.0));
        assert!(snapped.x.is_sign_positive());
    }
}
