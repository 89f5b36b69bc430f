//! Multi-ASV simulation driver: per-ASV nodes, waypoint sequencing and the
//! two scheduling modes.

use crate::config::{AsvConfig, ScenarioConfig};
use crate::telemetry::{TelemetryBuffer, TelemetrySample};
use crate::{Result, SimError};
use asv_control::PidController;
use asv_dynamics::{Asv, PropulsionMode, StepCommand, Thruster};
use asv_geometry::Point;
use asv_waves::SeaSurface;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Planar distance (m) within which a waypoint counts as reached.
const WAYPOINT_PROXIMITY_M: f64 = 5.0;

/// How the driver advances multiple ASVs through time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleMode {
    /// One concurrent task per ASV per step, joined before the next step.
    /// Required once ASVs interact; the only mode spec-mandated ordering
    /// guarantees apply to.
    TimeSynchronised,
    /// One task per ASV, run to completion without inter-ASV barriers.
    Independent,
}

/// A single ASV's simulation state: its dynamics, controller, waypoint
/// list, telemetry buffer and any error that ended its run.
struct SimulationNode {
    id: String,
    asv: Asv,
    pid: PidController,
    waypoints: Vec<Point>,
    current_waypoint_index: usize,
    telemetry: TelemetryBuffer,
    error: Option<SimError>,
}

impl SimulationNode {
    fn is_done(&self) -> bool {
        self.current_waypoint_index >= self.waypoints.len()
    }

    fn output_path(&self, out_dir: Option<&Path>) -> Option<PathBuf> {
        out_dir.map(|dir| dir.join(format!("{}.txt", self.id)))
    }

    /// Advance this ASV by one time step: compute a control command from
    /// its current waypoint, integrate, record telemetry and advance the
    /// waypoint index on proximity. A no-op once the ASV is done or has
    /// already recorded an error.
    fn step(&mut self, sea_surface: &Arc<SeaSurface>, dt_ms: f64, out_dir: Option<&Path>) {
        if self.is_done() || self.error.is_some() {
            return;
        }

        let origin = self.asv.origin();
        let yaw = self.asv.attitude().yaw;
        let waypoint = self.waypoints[self.current_waypoint_index];

        let command = {
            let pid = &mut self.pid;
            match self.asv.propulsion_mut() {
                PropulsionMode::WaveGlider { .. } => StepCommand::Rudder(pid.step_rudder(origin, yaw, waypoint)),
                PropulsionMode::Thrusters(thrusters) => {
                    let cmd = pid.step_thrusters(origin, yaw, waypoint);
                    if let Ok(layout) = <&mut [Thruster; 4]>::try_from(thrusters.as_mut_slice()) {
                        cmd.apply(layout);
                    }
                    StepCommand::Thrusters
                }
            }
        };

        if let Err(e) = self.asv.step(command, dt_ms) {
            log::error!("asv {} step failed: {e}", self.id);
            self.error = Some(e.into());
            return;
        }

        let elevation = sea_surface.elevation(&self.asv.cog(), self.asv.time()).unwrap_or(0.0);
        let attitude = self.asv.attitude();
        let cog = self.asv.cog();
        let sample = TelemetrySample {
            time: self.asv.time(),
            significant_wave_height: sea_surface.significant_wave_height(),
            wave_heading_deg: sea_surface.heading().to_degrees(),
            wave_elevation: elevation,
            surge_force: self.asv.net_force().surge,
            surge_acceleration: self.asv.acceleration().surge,
            surge_velocity: self.asv.velocity().surge,
            cog_x: cog.x,
            cog_y: cog.y,
            cog_z: cog.z,
            heel_deg: attitude.roll.to_degrees(),
            trim_deg: attitude.pitch.to_degrees(),
            heading_deg: attitude.yaw.to_degrees(),
        };

        let full = self.telemetry.push(sample);
        if full {
            match self.output_path(out_dir) {
                Some(path) => {
                    if let Err(e) = self.telemetry.flush(&path) {
                        self.error = Some(e);
                        return;
                    }
                }
                None => {
                    self.error = Some(SimError::NoOutputDirectory);
                    return;
                }
            }
        }

        let diff = cog - waypoint;
        let distance = (diff.x * diff.x + diff.y * diff.y).sqrt();
        if distance <= WAYPOINT_PROXIMITY_M {
            self.current_waypoint_index += 1;
        }
    }
}

/// A fleet of ASVs sharing one sea surface and simulation clock.
pub struct Simulation {
    sea_surface: Arc<SeaSurface>,
    dt_ms: f64,
    nodes: Vec<SimulationNode>,
}

impl Simulation {
    /// Create an empty simulation bound to `sea_surface`, stepping in
    /// increments of `dt_ms` milliseconds.
    pub fn new(sea_surface: Arc<SeaSurface>, dt_ms: f64) -> Result<Self> {
        if dt_ms <= 0.0 {
            return Err(asv_dynamics::DynamicsError::NonPositiveStep { dt_ms }.into());
        }
        Ok(Self { sea_surface, dt_ms, nodes: Vec::new() })
    }

    /// Build a simulation from a parsed [`ScenarioConfig`]: one sea surface,
    /// one node per configured ASV.
    pub fn from_config(config: &ScenarioConfig) -> Result<Self> {
        let sea_surface = Arc::new(SeaSurface::new(
            config.sea_state.significant_wave_height,
            config.sea_state.heading.to_radians(),
            config.sea_state.seed,
            config.sea_state.component_waves,
        )?);
        let mut simulation = Self::new(sea_surface, config.clock.time_step_size)?;
        for asv_config in &config.asvs {
            simulation.add_asv(asv_config)?;
        }
        Ok(simulation)
    }

    /// Add an ASV node from its configuration, returning its handle for use
    /// with [`Simulation::set_waypoints`], [`Simulation::pid_mut`] and
    /// [`Simulation::get_asv_position_at`].
    pub fn add_asv(&mut self, config: &AsvConfig) -> Result<usize> {
        let propulsion = if config.thrusters.is_empty() {
            PropulsionMode::WaveGlider { tuning_factor_thrust: config.tuning_factor_thrust }
        } else {
            PropulsionMode::Thrusters(config.thrusters()?)
        };

        let mut asv = Asv::new(config.spec()?, config.initial_position(), config.initial_attitude(), propulsion);
        asv.set_sea_surface(Arc::clone(&self.sea_surface))?;

        self.nodes.push(SimulationNode {
            id: config.id.clone(),
            asv,
            pid: PidController::new(),
            waypoints: config.waypoints(),
            current_waypoint_index: 0,
            telemetry: TelemetryBuffer::new(),
            error: None,
        });

        log::info!("added asv '{}', node {} of {}", config.id, self.nodes.len() - 1, self.nodes.len());
        Ok(self.nodes.len() - 1)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, index: usize) -> Result<&SimulationNode> {
        self.nodes.get(index).ok_or(SimError::IndexOutOfRange { index, len: self.nodes.len() })
    }

    /// Mutable access to a node's controller, for setting PID gains before
    /// a run.
    pub fn pid_mut(&mut self, index: usize) -> Result<&mut PidController> {
        let len = self.nodes.len();
        self.nodes.get_mut(index).map(|n| &mut n.pid).ok_or(SimError::IndexOutOfRange { index, len })
    }

    /// Attach (or replace) a waypoint polyline for the ASV at `index`,
    /// resetting it to the first waypoint.
    pub fn set_waypoints(&mut self, index: usize, waypoints: Vec<Point>) -> Result<()> {
        let len = self.nodes.len();
        let node = self.nodes.get_mut(index).ok_or(SimError::IndexOutOfRange { index, len })?;
        node.waypoints = waypoints;
        node.current_waypoint_index = 0;
        Ok(())
    }

    pub fn time(&self, index: usize) -> Result<f64> {
        Ok(self.node(index)?.asv.time())
    }

    pub fn cog(&self, index: usize) -> Result<Point> {
        Ok(self.node(index)?.asv.cog())
    }

    /// Every node that ended its run with an error, paired with its id.
    pub fn errors(&self) -> Vec<(&str, &SimError)> {
        self.nodes.iter().filter_map(|n| n.error.as_ref().map(|e| (n.id.as_str(), e))).collect()
    }

    /// Query a recorded telemetry sample's global position.
    pub fn get_asv_position_at(&self, index: usize, sample_index: usize) -> Result<Point> {
        let node = self.node(index)?;
        let sample = node.telemetry.get(sample_index)?;
        Ok(Point::new(sample.cog_x, sample.cog_y, sample.cog_z))
    }

    /// Advance every ASV by exactly one time step.
    pub fn run_a_timestep(&mut self, out_dir: Option<&Path>) {
        let dt_ms = self.dt_ms;
        let sea_surface = Arc::clone(&self.sea_surface);
        rayon::scope(|s| {
            for node in self.nodes.iter_mut() {
                let sea = Arc::clone(&sea_surface);
                s.spawn(move |_| node.step(&sea, dt_ms, out_dir));
            }
        });
    }

    /// Drive all ASVs until each has reached its final waypoint.
    pub fn run_upto_waypoint(&mut self, mode: ScheduleMode, out_dir: Option<&Path>) -> Result<()> {
        self.run_until(mode, out_dir, f64::INFINITY)
    }

    /// Drive all ASVs until simulated time reaches `t_max_s`. A node that
    /// has already reached its final waypoint stays frozen rather than
    /// continuing to integrate.
    pub fn run_upto_time(&mut self, t_max_s: f64, mode: ScheduleMode, out_dir: Option<&Path>) -> Result<()> {
        self.run_until(mode, out_dir, t_max_s)
    }

    fn run_until(&mut self, mode: ScheduleMode, out_dir: Option<&Path>, t_max_s: f64) -> Result<()> {
        fn active(nodes: &[SimulationNode], t_max_s: f64) -> bool {
            nodes.iter().any(|n| !n.is_done() && n.error.is_none() && n.asv.time() < t_max_s)
        }

        match mode {
            ScheduleMode::TimeSynchronised => {
                while active(&self.nodes, t_max_s) {
                    self.run_a_timestep(out_dir);
                }
            }
            ScheduleMode::Independent => {
                let dt_ms = self.dt_ms;
                let sea_surface = Arc::clone(&self.sea_surface);
                rayon::scope(|s| {
                    for node in self.nodes.iter_mut() {
                        let sea = Arc::clone(&sea_surface);
                        s.spawn(move |_| {
                            while !node.is_done() && node.error.is_none() && node.asv.time() < t_max_s {
                                node.step(&sea, dt_ms, out_dir);
                            }
                        });
                    }
                });
            }
        }

        log::info!("simulation run complete: {} node(s), {} error(s)", self.nodes.len(), self.errors().len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn glider_config(id: &str) -> AsvConfig {
        AsvConfig {
            id: id.to_string(),
            l_wl: 2.1,
            b_wl: 0.6,
            d: 0.25,
            t: 0.15,
            displacement: 0.05,
            max_speed: 2.0,
            cog: [0.0, 0.0, 0.0],
            radius_of_gyration: [0.2, 0.6, 0.6],
            asv_position: [100.0, 100.0],
            asv_attitude: [0.0, 0.0, 0.0],
            thrusters: Vec::new(),
            waypoints: vec![[100.0, 300.0]],
            tuning_factor_thrust: 1.0,
        }
    }

    fn sea() -> Arc<SeaSurface> {
        Arc::new(SeaSurface::new(1.0, 0.0, 1, 15).unwrap())
    }

    #[test]
    fn rejects_non_positive_step() {
        assert!(Simulation::new(sea(), 0.0).is_err());
    }

    #[test]
    fn waypoint_run_advances_the_waypoint_index_on_proximity() {
        let mut sim = Simulation::new(sea(), 40.0).unwrap();
        let handle = sim.add_asv(&glider_config("glider-1")).unwrap();
        sim.pid_mut(handle).unwrap().set_gains_heading(2.0, 0.1, 0.2);

        let dir = tempdir().unwrap();
        sim.run_upto_time(600.0, ScheduleMode::TimeSynchronised, Some(dir.path())).unwrap();

        assert!(sim.time(handle).unwrap() > 0.0);
        assert!(sim.errors().is_empty());
    }

    #[test]
    fn running_without_an_output_directory_succeeds_while_the_buffer_has_room() {
        let mut sim = Simulation::new(sea(), 40.0).unwrap();
        let mut config = glider_config("glider-1");
        config.waypoints = vec![[100.0, 100.001]]; // already at the waypoint
        sim.add_asv(&config).unwrap();
        sim.run_upto_time(1.0, ScheduleMode::TimeSynchronised, None).unwrap();
        assert!(sim.errors().is_empty());
    }

    #[test]
    fn index_out_of_range_is_reported() {
        let sim = Simulation::new(sea(), 40.0).unwrap();
        assert!(matches!(sim.time(0), Err(SimError::IndexOutOfRange { index: 0, len: 0 })));
    }

    #[test]
    fn thruster_asv_runs_without_error_toward_a_waypoint() {
        let mut config = glider_config("thrust-1");
        config.thrusters = vec![[0.5, -0.2, 0.0], [0.5, 0.2, 0.0], [-0.5, -0.2, 0.0], [-0.5, 0.2, 0.0]];
        config.waypoints = vec![[100.0, 150.0]];

        let mut sim = Simulation::new(sea(), 40.0).unwrap();
        let handle = sim.add_asv(&config).unwrap();
        sim.pid_mut(handle).unwrap().set_gains_position(2.0, 0.0, 0.5);
        sim.pid_mut(handle).unwrap().set_gains_heading(2.0, 0.0, 0.5);

        let dir = tempdir().unwrap();
        sim.run_upto_time(300.0, ScheduleMode::TimeSynchronised, Some(dir.path())).unwrap();
        assert!(sim.errors().is_empty());
    }
}
