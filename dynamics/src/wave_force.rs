//! Wave excitation force: pressure integrated over five sample points on an
//! idealised ellipsoidal hull.

use crate::encounter::encounter_frequency;
use crate::spec::AsvSpec;
use crate::unit_pressure::UnitPressureTable;
use crate::Result;
use asv_geometry::{normalise_angle_2pi, Point, SixDof};
use asv_waves::SeaSurface;

/// Net wave excitation force and moment at the current instant.
///
/// Yaw is held at zero: wave-induced yaw forcing is intentionally
/// suppressed, not merely negligible in this model.
pub fn wave_force(
    spec: &AsvSpec,
    bound: Option<(&SeaSurface, &UnitPressureTable)>,
    cog: Point,
    yaw: f64,
    surge_velocity: f64,
    time: f64,
) -> Result<SixDof> {
    let Some((sea_surface, table)) = bound else {
        return Ok(SixDof::zero());
    };

    let a = spec.semi_major();
    let b = spec.semi_minor();
    let c = spec.submerged_depth();
    let a_trans = (std::f64::consts::PI / 2.0) * b * c;
    let a_profile = (std::f64::consts::PI / 2.0) * a * c;
    let a_waterplane = std::f64::consts::PI * a * b;

    let waves = sea_surface.component_waves();
    let count_waves = waves.len() as f64;

    let mut force = SixDof::zero();
    for wave in waves {
        let angle = normalise_angle_2pi(wave.heading() - yaw);
        let encounter_freq = encounter_frequency(wave.frequency(), surge_velocity, angle);
        let pressure = table.pressure_at(encounter_freq)?;

        let scale = (2.0 * wave.amplitude()).min(spec.d) / count_waves;

        let point_aft = Point::new(cog.x - (a / 4.0) * yaw.sin(), cog.y - (a / 4.0) * yaw.cos(), cog.z);
        let point_fore = Point::new(cog.x + (a / 4.0) * yaw.sin(), cog.y + (a / 4.0) * yaw.cos(), cog.z);
        let point_ps = Point::new(cog.x - (b / 4.0) * yaw.cos(), cog.y + (b / 4.0) * yaw.sin(), cog.z);
        let point_sb = Point::new(cog.x + (b / 4.0) * yaw.cos(), cog.y - (b / 4.0) * yaw.sin(), cog.z);

        let phase_cog = wave.phase(&cog, time)?;
        let phase_aft = wave.phase(&point_aft, time)?;
        let phase_fore = wave.phase(&point_fore, time)?;
        let phase_ps = wave.phase(&point_ps, time)?;
        let phase_sb = wave.phase(&point_sb, time)?;

        let p_diff_long = pressure * (phase_fore.cos() - phase_aft.cos());
        let p_diff_trans = pressure * (phase_sb.cos() - phase_ps.cos());

        force.heave += scale * (pressure * phase_cog.cos()) * a_waterplane;
        force.surge += scale * p_diff_long * a_trans;
        force.sway += scale * p_diff_trans * a_profile;
        force.roll += scale * p_diff_trans * (a_waterplane / 2.0) * (b / 4.0);
        force.pitch += scale * p_diff_long * (a_waterplane / 2.0) * (a / 4.0);
        force.yaw += scale * p_diff_long * (a_profile / 2.0) * (a / 4.0) * 0.0; // CONSTRAIN YAW MOTION
    }

    Ok(force)
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
    fn no_sea_surface_means_zero_wave_force() {
        let spec = test_spec();
        let force = wave_force(&spec, None, Point::origin(), 0.0, 0.0, 0.0).unwrap();
        assert_eq!(force.surge, 0.0);
        assert_eq!(force.heave, 0.0);
    }

    #[test]
    fn yaw_wave_force_is_always_zero() {
        let spec = test_spec();
        let sea = SeaSurface::new(3.5, 0.0, 1, 15).unwrap();
        let table = UnitPressureTable::build(&spec, &sea).unwrap();
        let force = wave_force(&spec, Some((&sea, &table)), Point::origin(), 0.3, 1.0, 10.0).unwrap();
        assert_eq!(force.yaw, 0.0);
    }
}
