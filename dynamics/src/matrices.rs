//! Constant mass, drag-coefficient and stiffness matrices, derived once at
//! construction from the hull idealisation: an elliptical cylinder with
//! semi-axes `a = L_wl/2`, `b = B_wl/2` and submerged depth `c = T`.

use crate::spec::AsvSpec;
use asv_geometry::{SixDof, G, RHO_SEA_WATER};
use std::f64::consts::PI;

const ADDED_MASS_COEFFICIENT: f64 = 1.0;
const DRAG_COEFFICIENT: f64 = 1.9;

/// Diagonal rigid + added mass matrix (kg for translations, kg*m^2 for
/// rotations). Added rotational inertia is deliberately omitted: the
/// original implementation computes it and then discards it, keeping only
/// the rigid-body moment of inertia — a behaviour this port preserves.
pub fn mass_matrix(spec: &AsvSpec) -> SixDof {
    let a = spec.semi_major();
    let b = spec.semi_minor();
    let c = spec.submerged_depth();
    let mass = spec.displacement * RHO_SEA_WATER;

    let ar_surge = PI * b * b;
    let ar_sway = PI * a * a;
    let ar_heave = PI * a * b;

    let added_surge = RHO_SEA_WATER * ADDED_MASS_COEFFICIENT * ar_surge * (2.0 * a);
    let added_sway = RHO_SEA_WATER * ADDED_MASS_COEFFICIENT * ar_sway * (2.0 * b);
    let added_heave = RHO_SEA_WATER * ADDED_MASS_COEFFICIENT * ar_heave * c;

    SixDof {
        surge: mass + added_surge,
        sway: mass + added_sway,
        heave: mass + added_heave,
        roll: mass * spec.r_roll * spec.r_roll,
        pitch: mass * spec.r_pitch * spec.r_pitch,
        yaw: mass * spec.r_yaw * spec.r_yaw,
    }
}

/// Diagonal quadratic-drag coefficient matrix.
pub fn drag_coefficient_matrix(spec: &AsvSpec) -> SixDof {
    let c_ds = DRAG_COEFFICIENT;
    let surge = 0.5 * RHO_SEA_WATER * c_ds * spec.b_wl * spec.t;
    let sway = 0.5 * RHO_SEA_WATER * c_ds * spec.l_wl * spec.t;
    let heave = 0.5 * RHO_SEA_WATER * c_ds * spec.l_wl * spec.b_wl;
    SixDof {
        surge,
        sway,
        heave,
        roll: heave,
        pitch: heave,
        yaw: heave,
    }
}

/// Diagonal hydrostatic stiffness matrix. Surge, sway and yaw stiffness are
/// zero: a floating hull has no restoring moment in those DOFs.
pub fn stiffness_matrix(spec: &AsvSpec) -> SixDof {
    let a = spec.semi_major();
    let b = spec.semi_minor();
    let waterplane_area = PI * a * b;
    let i_xx = (PI / 4.0) * a * b.powi(3);
    let i_yy = (PI / 4.0) * a.powi(3) * b;

    SixDof {
        surge: 0.0,
        sway: 0.0,
        heave: waterplane_area * RHO_SEA_WATER * G,
        roll: i_xx * RHO_SEA_WATER * G,
        pitch: i_yy * RHO_SEA_WATER * G,
        yaw: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_spec() -> AsvSpec {
        AsvSpec {
            l_wl: 2.1,
            b_wl: 0.6,
            d: 0.25,
            t: 0.15,
            displacement: 0.05,
            max_speed: 2.0,
            cog: asv_geometry::Vector::new(0.0, 0.0, 0.0),
            r_roll: 0.2,
            r_pitch: 0.6,
            r_yaw: 0.6,
        }
    }

    #[test]
    fn mass_matrix_is_positive() {
        let m = mass_matrix(&test_spec());
        for dof in asv_geometry::DOF::all() {
            assert!(m.get(dof) > 0.0, "{:?}", dof);
        }
    }

    #[test]
    fn stiffness_surge_sway_yaw_are_zero() {
        let k = stiffness_matrix(&test_spec());
        assert_eq!(k.surge, 0.0);
        assert_eq!(k.sway, 0.0);
        assert_eq!(k.yaw, 0.0);
        assert!(k.heave > 0.0);
    }

    #[test]
    fn drag_rotational_dofs_match_heave() {
        let c = drag_coefficient_matrix(&test_spec());
        assert_eq!(c.roll, c.heave);
        assert_eq!(c.pitch, c.heave);
        assert_eq!(c.yaw, c.heave);
    }
}
