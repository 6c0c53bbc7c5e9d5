use crate::hull::{HullParameters, RHO_SEAWATER};
use crate::Mat3;

/// Mass (rigid body + added mass) and linear damping at one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelMatrices {
    pub mass: Mat3,
    pub damping: Mat3,
}

/// Produces the linearized maneuvering matrices for a hull at speed `U`.
///
/// Implementations must be deterministic; the loop calls this once per step.
pub trait HydrodynamicModel {
    fn matrices(&self, speed: f64, hull: &HullParameters) -> ModelMatrices;
}

impl<F> HydrodynamicModel for F
where
    F: Fn(f64, &HullParameters) -> ModelMatrices,
{
    fn matrices(&self, speed: f64, hull: &HullParameters) -> ModelMatrices {
        self(speed, hull)
    }
}

/// Non-dimensional sway/yaw derivatives from Clarke, Gedling & Hine (1983).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClarkeDerivatives {
    pub y_vdot: f64,
    pub y_rdot: f64,
    pub n_vdot: f64,
    pub n_rdot: f64,
    pub y_v: f64,
    pub y_r: f64,
    pub n_v: f64,
    pub n_r: f64,
}

impl ClarkeDerivatives {
    pub fn for_hull(hull: &HullParameters) -> Self {
        let l = hull.length;
        let b = hull.beam;
        let t = hull.draft;
        let cb = hull.block_coefficient;
        let s = std::f64::consts::PI * (t / l).powi(2);
        Self {
            y_vdot: -s * (1.0 + 0.16 * cb * b / t - 5.1 * (b / l).powi(2)),
            y_rdot: -s * (0.67 * b / l - 0.0033 * (b / t).powi(2)),
            n_vdot: -s * (1.1 * b / l - 0.041 * b / t),
            n_rdot: -s * (1.0 / 12.0 + 0.017 * cb * b / t - 0.33 * b / l),
            y_v: -s * (1.0 + 0.4 * cb * b / t),
            y_r: -s * (-0.5 + 2.2 * b / l - 0.08 * b / t),
            n_v: -s * (0.5 + 2.4 * t / l),
            n_r: -s * (0.25 + 0.039 * b / t - 0.56 * b / l),
        }
    }
}

/// Surge added mass as a fraction of displaced mass.
const SURGE_ADDED_MASS_RATIO: f64 = 0.05;

/// Linear maneuvering model built from main dimensions only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clarke83;

impl HydrodynamicModel for Clarke83 {
    fn matrices(&self, speed: f64, hull: &HullParameters) -> ModelMatrices {
        debug_assert!(speed >= 0.0, "speed must be non-negative, got {}", speed);
        let l = hull.length;
        let q = 0.5 * RHO_SEAWATER;
        let d = ClarkeDerivatives::for_hull(hull);

        // Prime-system rigid-body terms
        let m = hull.mass();
        let m_p = m / (q * l.powi(3));
        let xg_p = hull.xg / l;
        let iz_p = hull.yaw_inertia() / (q * l.powi(5));

        let m11 = (1.0 + SURGE_ADDED_MASS_RATIO) * m;
        #[rustfmt::skip]
        let mass = Mat3::new(
            m11, 0.0, 0.0,
            0.0, q * l.powi(3) * (m_p - d.y_vdot), q * l.powi(4) * (m_p * xg_p - d.y_rdot),
            0.0, q * l.powi(4) * (m_p * xg_p - d.n_vdot), q * l.powi(5) * (iz_p - d.n_rdot),
        );

        // Sway/yaw damping scales with U and vanishes at rest
        let u = speed;
        #[rustfmt::skip]
        let damping = Mat3::new(
            m11 / hull.surge_time_constant(), 0.0, 0.0,
            0.0, q * l.powi(2) * u * -d.y_v, q * l.powi(3) * u * (m_p - d.y_r),
            0.0, q * l.powi(3) * u * -d.n_v, q * l.powi(4) * u * (m_p * xg_p - d.n_r),
        );

        ModelMatrices { mass, damping }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hulls::reference_ship;

    #[test]
    fn rest_damping_is_surge_only() {
        let hull = reference_ship();
        let ModelMatrices { mass, damping } = Clarke83.matrices(0.0, &hull);
        // 1.05 * 16.4e6 kg, time constant L = 100 s
        assert!((mass[(0, 0)] - 17_220_000.0).abs() < 1e-3);
        assert!((damping[(0, 0)] - 172_200.0).abs() < 1e-6);
        for (i, j) in [(1, 1), (1, 2), (2, 1), (2, 2), (0, 1), (1, 0)] {
            assert_eq!(damping[(i, j)], 0.0, "damping[{},{}] should vanish at rest", i, j);
        }
    }

    #[test]
    fn mass_matrix_is_positive_and_invertible() {
        let hull = reference_ship();
        let ModelMatrices { mass, .. } = Clarke83.matrices(5.0, &hull);
        assert!(mass[(0, 0)] > 0.0 && mass[(1, 1)] > 0.0 && mass[(2, 2)] > 0.0);
        // Added mass makes the sway/yaw entries exceed the rigid-body values
        assert!(mass[(1, 1)] > hull.mass());
        assert!(mass[(2, 2)] > hull.yaw_inertia());
        assert!(mass.determinant() > 0.0);
        assert!(mass.try_inverse().is_some());
    }

    #[test]
    fn damping_scales_linearly_with_speed() {
        let hull = reference_ship();
        let d1 = Clarke83.matrices(2.0, &hull).damping;
        let d2 = Clarke83.matrices(4.0, &hull).damping;
        for i in 1..3 {
            for j in 1..3 {
                let expected = 2.0 * d1[(i, j)];
                assert!(
                    (d2[(i, j)] - expected).abs() <= 1e-9 * expected.abs(),
                    "damping[{},{}] not linear in U: {} vs {}",
                    i,
                    j,
                    d2[(i, j)],
                    expected
                );
            }
        }
        // Surge damping does not depend on U
        assert_eq!(d1[(0, 0)], d2[(0, 0)]);
        // Yaw damping opposes yaw rate
        assert!(d1[(2, 2)] > 0.0 && d1[(1, 1)] > 0.0);
    }

    #[test]
    fn surge_time_constant_override() {
        let hull = reference_ship().with_surge_time_constant(50.0);
        let d = Clarke83.matrices(0.0, &hull).damping;
        assert!((d[(0, 0)] - 17_220_000.0 / 50.0).abs() < 1e-6);
    }
}
