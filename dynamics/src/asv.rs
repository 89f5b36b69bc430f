//! The ASV itself: construction, sea-surface binding, and the per-step
//! integrator.

use crate::drag::drag_force;
use crate::matrices::{drag_coefficient_matrix, mass_matrix, stiffness_matrix};
use crate::restoring::restoring_force;
use crate::spec::AsvSpec;
use crate::thruster::{thruster_force, Thruster};
use crate::unit_pressure::UnitPressureTable;
use crate::wave_force::wave_force;
use crate::wave_glider::{hydrofoil_thrust, rudder_yaw_moment};
use crate::{DynamicsError, Result};
use asv_geometry::{normalise_angle_2pi, Point, SixDof, Vector};
use asv_waves::SeaSurface;
use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

/// How the ASV is propelled.
pub enum PropulsionMode {
    /// A fixed arrangement of thrusters, each independently commanded.
    Thrusters(Vec<Thruster>),
    /// Wave-induced hydrofoil propulsion steered by a rudder.
    WaveGlider { tuning_factor_thrust: f64 },
}

/// The command given to [`Asv::step`].
pub enum StepCommand {
    /// Use the thrust magnitudes already set on the ASV's thrusters.
    Thrusters,
    /// Wave-glider mode: the rudder angle for this step (radians).
    Rudder(f64),
}

/// Attitude of the hull: roll and pitch about the horizontal axes, yaw
/// (heading) about the vertical. Roll and pitch are unconstrained; yaw is
/// always kept in [0, 2*pi).
#[derive(Debug, Clone, Copy, Default)]
pub struct Attitude {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

/// A single autonomous surface vehicle and its dynamic state.
pub struct Asv {
    spec: AsvSpec,
    mass: SixDof,
    drag_coefficients: SixDof,
    stiffness: SixDof,

    sea_surface: Option<Arc<SeaSurface>>,
    unit_pressure_table: Option<UnitPressureTable>,

    propulsion: PropulsionMode,

    time: f64,
    origin: Point,
    cog: Point,
    attitude: Attitude,
    velocity: SixDof,
    acceleration: SixDof,
    deflection: SixDof,

    f_wave: SixDof,
    f_thrust: SixDof,
    f_drag: SixDof,
    f_restoring: SixDof,
    f_net: SixDof,

    zonal_current: f64,
    meridional_current: f64,
}

impl Asv {
    /// Construct an ASV at rest at `origin`, with the given initial
    /// `attitude` (roll, pitch, yaw in radians), not yet bound to a sea
    /// surface.
    pub fn new(spec: AsvSpec, origin: Point, attitude: Vector, propulsion: PropulsionMode) -> Self {
        let attitude = Attitude {
            roll: attitude.x,
            pitch: attitude.y,
            yaw: normalise_angle_2pi(attitude.z),
        };
        let cog = cog_from_origin(origin, attitude.yaw, spec.cog);
        let mass = mass_matrix(&spec);
        let drag_coefficients = drag_coefficient_matrix(&spec);
        let stiffness = stiffness_matrix(&spec);

        log::info!(
            "constructed ASV: L_wl={:.2} B_wl={:.2} D={:.2} T={:.2} disp={:.3}",
            spec.l_wl, spec.b_wl, spec.d, spec.t, spec.displacement
        );

        Self {
            spec,
            mass,
            drag_coefficients,
            stiffness,
            sea_surface: None,
            unit_pressure_table: None,
            propulsion,
            time: 0.0,
            origin,
            cog,
            attitude,
            velocity: SixDof::zero(),
            acceleration: SixDof::zero(),
            deflection: SixDof::zero(),
            f_wave: SixDof::zero(),
            f_thrust: SixDof::zero(),
            f_drag: SixDof::zero(),
            f_restoring: SixDof::zero(),
            f_net: SixDof::zero(),
            zonal_current: 0.0,
            meridional_current: 0.0,
        }
    }

    /// Bind (or rebind) the ASV to a sea surface, recomputing the unit-wave
    /// pressure table. Clears any stale table from a previous binding.
    pub fn set_sea_surface(&mut self, sea_surface: Arc<SeaSurface>) -> Result<()> {
        let table = UnitPressureTable::build(&self.spec, &sea_surface)?;
        self.unit_pressure_table = Some(table);
        self.sea_surface = Some(sea_surface);
        Ok(())
    }

    pub fn set_ocean_current(&mut self, zonal: f64, meridional: f64) {
        self.zonal_current = zonal;
        self.meridional_current = meridional;
    }

    pub fn spec(&self) -> &AsvSpec {
        &self.spec
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn cog(&self) -> Point {
        self.cog
    }

    pub fn attitude(&self) -> Attitude {
        self.attitude
    }

    pub fn velocity(&self) -> SixDof {
        self.velocity
    }

    pub fn acceleration(&self) -> SixDof {
        self.acceleration
    }

    pub fn net_force(&self) -> SixDof {
        self.f_net
    }

    pub fn wave_force(&self) -> SixDof {
        self.f_wave
    }

    pub fn propulsion_mut(&mut self) -> &mut PropulsionMode {
        &mut self.propulsion
    }

    /// Advance the ASV by exactly one time step of `dt_ms` milliseconds.
    ///
    /// Ordering is fixed: clock, wave force, thrust, drag, restoring, net
    /// force, acceleration, velocity, deflection, attitude, position. On
    /// `InvalidRudderAngle` the ASV's state is left entirely unchanged.
    pub fn step(&mut self, command: StepCommand, dt_ms: f64) -> Result<()> {
        if dt_ms <= 0.0 {
            return Err(DynamicsError::NonPositiveStep { dt_ms });
        }
        if let StepCommand::Rudder(angle) = command {
            if angle.abs() > FRAC_PI_2 {
                return Err(DynamicsError::InvalidRudderAngle { angle });
            }
        }

        let dt = dt_ms / 1000.0;
        self.time += dt;

        let bound = match (&self.sea_surface, &self.unit_pressure_table) {
            (Some(sea), Some(table)) => Some((sea.as_ref(), table)),
            _ => None,
        };
        self.f_wave = wave_force(&self.spec, bound, self.cog, self.attitude.yaw, self.velocity.surge, self.time)?;

        self.f_thrust = match (&self.propulsion, &command) {
            (PropulsionMode::Thrusters(thrusters), StepCommand::Thrusters) => {
                thruster_force(thrusters, self.spec.cog)
            }
            (PropulsionMode::WaveGlider { tuning_factor_thrust }, StepCommand::Rudder(rudder_angle)) => {
                let mut f = SixDof::zero();
                f.surge = hydrofoil_thrust(self.velocity.heave, *tuning_factor_thrust);
                f.yaw = rudder_yaw_moment(*rudder_angle, self.velocity.surge, self.spec.l_wl);
                f
            }
            _ => SixDof::zero(),
        };

        self.f_drag = drag_force(&self.drag_coefficients, &self.velocity);

        let surface_elevation = match &self.sea_surface {
            Some(sea) => sea.elevation(&self.cog, self.time)?,
            None => 0.0,
        };
        self.f_restoring = restoring_force(
            &self.stiffness,
            self.spec.d,
            self.spec.cog.z,
            self.cog.z,
            surface_elevation,
            self.attitude.roll,
            self.attitude.pitch,
        );

        self.f_net = self.f_wave + self.f_thrust + self.f_drag + self.f_restoring;

        for dof in asv_geometry::DOF::all() {
            let a = self.f_net.get(dof) / self.mass.get(dof);
            self.acceleration.set(dof, a);
            self.velocity.set(dof, self.velocity.get(dof) + a * dt);
            self.deflection.set(dof, self.velocity.get(dof) * dt);
        }

        self.attitude.yaw = normalise_angle_2pi(self.attitude.yaw + self.deflection.yaw);
        self.attitude.roll += self.deflection.roll;
        self.attitude.pitch += self.deflection.pitch;

        let yaw = self.attitude.yaw;
        let dx = self.deflection.surge * yaw.sin() - self.deflection.sway * yaw.cos() + self.zonal_current * dt;
        let dy = self.deflection.surge * yaw.cos() + self.deflection.sway * yaw.sin() + self.meridional_current * dt;
        let dz = self.deflection.heave;

        self.cog = Point::new(self.cog.x + dx, self.cog.y + dy, self.cog.z + dz);
        self.origin = origin_from_cog(self.cog, yaw, self.spec.cog);

        Ok(())
    }
}

fn cog_from_origin(origin: Point, yaw: f64, cog_offset: Vector) -> Point {
    let l = (cog_offset.x * cog_offset.x + cog_offset.y * cog_offset.y).sqrt();
    Point::new(origin.x + l * yaw.sin(), origin.y + l * yaw.cos(), origin.z + cog_offset.z)
}

fn origin_from_cog(cog: Point, yaw: f64, cog_offset: Vector) -> Point {
    let l = (cog_offset.x * cog_offset.x + cog_offset.y * cog_offset.y).sqrt();
    Point::new(cog.x - l * yaw.sin(), cog.y - l * yaw.cos(), cog.z - cog_offset.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_water_spec() -> AsvSpec {
        AsvSpec {
            l_wl: 2.1,
            b_wl: 0.6,
            d: 0.25,
            t: 0.15,
            displacement: 0.05,
            max_speed: 2.0,
            cog: Vector::zeros(),
            r_roll: 0.2,
            r_pitch: 0.6,
            r_yaw: 0.6,
        }
    }

    #[test]
    fn still_water_station_keeping() {
        let mut asv = Asv::new(
            still_water_spec(),
            Point::origin(),
            Vector::zeros(),
            PropulsionMode::Thrusters(vec![]),
        );
        for _ in 0..(60_000 / 40) {
            asv.step(StepCommand::Thrusters, 40.0).unwrap();
        }
        assert!((asv.cog().x).abs() < 1e-6);
        assert!((asv.cog().y).abs() < 1e-6);
        assert!((asv.cog().z).abs() < 1e-6);
        assert_eq!(asv.velocity(), SixDof::zero());
    }

    #[test]
    fn rudder_angle_out_of_range_is_rejected_and_state_unchanged() {
        let mut asv = Asv::new(
            still_water_spec(),
            Point::origin(),
            Vector::zeros(),
            PropulsionMode::WaveGlider { tuning_factor_thrust: 1.0 },
        );
        let before = asv.cog();
        let result = asv.step(StepCommand::Rudder(2.0), 40.0);
        assert!(result.is_err());
        assert_eq!(asv.cog(), before);
        assert_eq!(asv.time(), 0.0);
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let mut asv = Asv::new(
            still_water_spec(),
            Point::origin(),
            Vector::zeros(),
            PropulsionMode::Thrusters(vec![]),
        );
        assert!(asv.step(StepCommand::Thrusters, 0.0).is_err());
        assert!(asv.step(StepCommand::Thrusters, -1.0).is_err());
    }

    #[test]
    fn heave_restoring_force_opposes_displacement() {
        let mut asv = Asv::new(
            still_water_spec(),
            Point::new(0.0, 0.0, 0.1),
            Vector::zeros(),
            PropulsionMode::Thrusters(vec![]),
        );
        asv.step(StepCommand::Thrusters, 40.0).unwrap();
        assert!(asv.net_force().heave < 0.0);
    }

    #[test]
    fn rebinding_sea_surface_refreshes_unit_pressure_table() {
        let mut asv = Asv::new(
            still_water_spec(),
            Point::origin(),
            Vector::zeros(),
            PropulsionMode::Thrusters(vec![]),
        );
        let sea1 = Arc::new(SeaSurface::new(1.0, 0.0, 1, 15).unwrap());
        asv.set_sea_surface(sea1).unwrap();
        let table1 = asv.unit_pressure_table.clone().unwrap();

        let sea2 = Arc::new(SeaSurface::new(8.0, 0.0, 1, 15).unwrap());
        asv.set_sea_surface(sea2).unwrap();
        let table2 = asv.unit_pressure_table.clone().unwrap();

        assert_ne!(table1.freq_min(), table2.freq_min());
    }
}
