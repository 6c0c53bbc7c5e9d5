use std::f64::consts::{PI, TAU};

use nalgebra::{Matrix3, Rotation3, Vector3};

pub type Vec3 = Vector3<f64>;
pub type Mat3 = Matrix3<f64>;

/// Wrap an angle to the half-open interval (−π, π].
///
/// `−π` maps to `π`. Non-finite input comes back unchanged so a NaN heading
/// is still visible to the divergence guard.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = PI - (PI - angle).rem_euclid(TAU);
    // rem_euclid can round up to TAU just above odd multiples of π
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Body → inertial rotation for Euler angles in zyx order.
pub fn rotation_zyx(roll: f64, pitch: f64, yaw: f64) -> Mat3 {
    Rotation3::from_euler_angles(roll, pitch, yaw).into_inner()
}

/// Yaw-only rotation mapping body-fixed (u, v, r) to (ẋ, ẏ, ψ̇).
#[inline]
pub fn yaw_rotation(psi: f64) -> Mat3 {
    rotation_zyx(0.0, 0.0, psi)
}
