//! Wave-glider propulsion: thrust generated by oscillating hydrofoils
//! reacting against heave motion, and yaw moment generated by the rudder.
//!
//! Ref: Wang, Tian, Lu, Hu, Luo, "Dynamic modeling and simulations of the
//! wave glider".

use asv_geometry::RHO_SEA_WATER;
use std::f64::consts::PI;

const COUNT_HYDROFOILS: f64 = 6.0;
const HYDROFOIL_AREA: f64 = 0.113; // m^2
const ALPHA_K: f64 = 18.0 * PI / 180.0;
const ASSUMED_ANGLE_OF_ATTACK: f64 = 45.0 * PI / 180.0;
const SWEEPBACK: f64 = 7.0 * PI / 180.0;
const ASPECT_RATIO: f64 = 2.0;
const CROSS_FLOW_DRAG_COEFFICIENT: f64 = 0.6;
const ZERO_LIFT_DRAG_COEFFICIENT: f64 = 0.008;

fn lift_coefficient() -> f64 {
    (1.8 * PI * ASPECT_RATIO * ALPHA_K)
        / (SWEEPBACK.cos() * (ASPECT_RATIO * ASPECT_RATIO / SWEEPBACK.cos().powi(4) + 4.0).sqrt() + 1.8)
        + (CROSS_FLOW_DRAG_COEFFICIENT / ASPECT_RATIO) * ALPHA_K * ALPHA_K
}

fn drag_coefficient(lift_coefficient: f64) -> f64 {
    ZERO_LIFT_DRAG_COEFFICIENT + lift_coefficient * lift_coefficient / (0.9 * PI * ASPECT_RATIO)
}

/// Surge thrust (N) generated by the hydrofoils reacting to heave velocity
/// `v_heave` (m/s), scaled by `tuning_factor`.
pub fn hydrofoil_thrust(v_heave: f64, tuning_factor: f64) -> f64 {
    let c_l = lift_coefficient();
    let c_d = drag_coefficient(c_l);
    let lift = 0.5 * RHO_SEA_WATER * c_l * HYDROFOIL_AREA * v_heave * v_heave;
    let drag = 0.5 * RHO_SEA_WATER * c_d * HYDROFOIL_AREA * v_heave * v_heave;
    let per_foil = lift * ASSUMED_ANGLE_OF_ATTACK.sin() - drag * ASSUMED_ANGLE_OF_ATTACK.cos();
    COUNT_HYDROFOILS * per_foil * tuning_factor
}

/// Yaw moment (N*m) generated by the rudder at angle `rudder_angle`
/// (radians, sign determines turn direction) at surge speed `v_surge`
/// (m/s), for a hull of waterline length `l_wl`.
pub fn rudder_yaw_moment(rudder_angle: f64, v_surge: f64, l_wl: f64) -> f64 {
    let alpha_f = rudder_angle.abs();
    let c_l = lift_coefficient();
    let lift = 0.5 * RHO_SEA_WATER * c_l * HYDROFOIL_AREA * v_surge * v_surge;
    let moment = lift * alpha_f.sin() * (l_wl / 2.0);
    if rudder_angle < 0.0 {
        -moment
    } else {
        moment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_heave_velocity_produces_zero_thrust() {
        assert_eq!(hydrofoil_thrust(0.0, 1.0), 0.0);
    }

    #[test]
    fn thrust_scales_with_tuning_factor() {
        let base = hydrofoil_thrust(1.0, 1.0);
        let doubled = hydrofoil_thrust(1.0, 2.0);
        assert!((doubled - 2.0 * base).abs() < 1e-9);
    }

    #[test]
    fn rudder_moment_sign_follows_rudder_direction() {
        let left = rudder_yaw_moment(0.2, 1.0, 2.1);
        let right = rudder_yaw_moment(-0.2, 1.0, 2.1);
        assert!(left > 0.0);
        assert!(right < 0.0);
    }

    #[test]
    fn zero_rudder_angle_produces_zero_moment() {
        assert_eq!(rudder_yaw_moment(0.0, 1.0, 2.1), 0.0);
    }
}
