//! Hydrostatic restoring forces.

use asv_geometry::SixDof;

/// Heave, roll and pitch restoring force. Surge, sway and yaw restoring is
/// zero: a floating hull has no horizontal or yaw righting moment.
///
/// `cog_z` and `surface_elevation_at_cog` are both in the global frame;
/// `still_water_cog_z` is the body-frame z-offset of the COG at equilibrium.
#[allow(clippy::too_many_arguments)]
pub fn restoring_force(
    stiffness: &SixDof,
    depth: f64,
    still_water_cog_z: f64,
    cog_z: f64,
    surface_elevation_at_cog: f64,
    roll: f64,
    pitch: f64,
) -> SixDof {
    let current_relative_cog_z = cog_z - surface_elevation_at_cog;
    let displacement = (still_water_cog_z - current_relative_cog_z).clamp(-depth, depth);

    SixDof {
        surge: 0.0,
        sway: 0.0,
        heave: stiffness.heave * displacement,
        roll: -stiffness.roll * roll,
        pitch: -stiffness.pitch * pitch,
        yaw: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heave_restoring_opposes_displacement() {
        let k = SixDof { heave: 100.0, roll: 50.0, pitch: 50.0, ..SixDof::zero() };
        // COG sits above still-water level -> negative displacement -> positive restoring? check sign.
        let f = restoring_force(&k, 1.0, 0.0, 0.5, 0.0, 0.0, 0.0);
        // still_water_cog_z=0, current_relative_cog_z=0.5 -> displacement = -0.5
        assert!(f.heave < 0.0);
    }

    #[test]
    fn heave_restoring_is_clamped_by_depth() {
        let k = SixDof { heave: 100.0, ..SixDof::zero() };
        let f = restoring_force(&k, 0.2, 0.0, -10.0, 0.0, 0.0, 0.0);
        assert_eq!(f.heave, 100.0 * 0.2);
    }

    #[test]
    fn roll_and_pitch_oppose_attitude() {
        let k = SixDof { roll: 10.0, pitch: 10.0, ..SixDof::zero() };
        let f = restoring_force(&k, 1.0, 0.0, 0.0, 0.0, 0.3, -0.2);
        assert!(f.roll < 0.0);
        assert!(f.pitch > 0.0);
    }
}
