//! Scenario configuration: the TOML-deserializable description of a
//! simulation run, consumed by the driver, tests and the `demos` binary.

use crate::{Result, SimError};
use asv_dynamics::{AsvSpec, Thruster};
use asv_geometry::{Point, Vector};
use serde::Deserialize;

fn default_time_step_size() -> f64 {
    40.0
}

fn default_component_waves() -> usize {
    15
}

fn default_tuning_factor_thrust() -> f64 {
    1.0
}

/// Simulation clock. `time_step_size` is in milliseconds.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_time_step_size")]
    pub time_step_size: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { time_step_size: default_time_step_size() }
    }
}

/// Sea state shared by every ASV in the scenario. `heading` is in degrees.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SeaStateConfig {
    pub significant_wave_height: f64,
    pub heading: f64,
    pub seed: i64,
    #[serde(default = "default_component_waves")]
    pub component_waves: usize,
}

/// One ASV entry: hull geometry, initial pose, thruster layout and
/// waypoint list. Field names match the legacy configuration file's TOML
/// keys (`L_wl`, `B_wl`, `D`, `T`) rather than Rust naming conventions, since
/// this struct's sole purpose is to mirror the on-disk schema.
#[derive(Debug, Clone, Deserialize)]
pub struct AsvConfig {
    pub id: String,

    #[serde(rename = "L_wl")]
    pub l_wl: f64,
    #[serde(rename = "B_wl")]
    pub b_wl: f64,
    #[serde(rename = "D")]
    pub d: f64,
    #[serde(rename = "T")]
    pub t: f64,
    pub displacement: f64,
    pub max_speed: f64,

    /// Centre of gravity offset, body frame (m): [x, y, z].
    pub cog: [f64; 3],
    /// Radii of gyration (m): [roll, pitch, yaw].
    pub radius_of_gyration: [f64; 3],
    /// Initial global position (m): [x, y].
    pub asv_position: [f64; 2],
    /// Initial attitude (degrees): [heel, trim, heading].
    pub asv_attitude: [f64; 3],

    /// Thruster mounting positions (m), body frame. Empty means wave-glider
    /// propulsion; exactly 4 means the four-thruster layout.
    #[serde(default)]
    pub thrusters: Vec<[f64; 3]>,
    /// Waypoint polyline (m): [x, y] pairs, visited in order.
    #[serde(default)]
    pub waypoints: Vec<[f64; 2]>,
    /// Hydrofoil thrust tuning factor, used only in wave-glider propulsion.
    #[serde(default = "default_tuning_factor_thrust")]
    pub tuning_factor_thrust: f64,
}

impl AsvConfig {
    /// Build the hull spec, checking the data-model invariants this crate is
    /// the entry point for: `L_wl`, `B_wl`, `D`, `T` positive and `T <= D`.
    pub fn spec(&self) -> Result<AsvSpec> {
        if self.l_wl <= 0.0 || self.b_wl <= 0.0 || self.d <= 0.0 || self.t <= 0.0 {
            return Err(SimError::InvalidHullGeometry {
                l_wl: self.l_wl,
                b_wl: self.b_wl,
                d: self.d,
                t: self.t,
            });
        }
        if self.t > self.d {
            return Err(SimError::InvalidHullGeometry {
                l_wl: self.l_wl,
                b_wl: self.b_wl,
                d: self.d,
                t: self.t,
            });
        }
        Ok(AsvSpec {
            l_wl: self.l_wl,
            b_wl: self.b_wl,
            d: self.d,
            t: self.t,
            displacement: self.displacement,
            max_speed: self.max_speed,
            cog: Vector::new(self.cog[0], self.cog[1], self.cog[2]),
            r_roll: self.radius_of_gyration[0],
            r_pitch: self.radius_of_gyration[1],
            r_yaw: self.radius_of_gyration[2],
        })
    }

    pub fn initial_position(&self) -> Point {
        Point::new(self.asv_position[0], self.asv_position[1], 0.0)
    }

    /// Initial attitude in radians: (roll, pitch, yaw).
    pub fn initial_attitude(&self) -> Vector {
        Vector::new(
            self.asv_attitude[0].to_radians(),
            self.asv_attitude[1].to_radians(),
            self.asv_attitude[2].to_radians(),
        )
    }

    pub fn waypoints(&self) -> Vec<Point> {
        self.waypoints.iter().map(|w| Point::new(w[0], w[1], 0.0)).collect()
    }

    /// Thrusters built from the configured mounting positions, at rest. An
    /// empty list means the ASV uses wave-glider propulsion instead.
    pub fn thrusters(&self) -> Result<Vec<Thruster>> {
        if self.thrusters.is_empty() {
            return Ok(Vec::new());
        }
        if self.thrusters.len() != 4 {
            return Err(SimError::InvalidThrusterLayout { count: self.thrusters.len() });
        }
        Ok(self.thrusters.iter().map(|p| Thruster::new(Vector::new(p[0], p[1], p[2]))).collect())
    }
}

/// A complete scenario: sea state, clock and one or more ASVs.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub clock: ClockConfig,
    pub sea_state: SeaStateConfig,
    #[serde(rename = "asv")]
    pub asvs: Vec<AsvConfig>,
}

impl ScenarioConfig {
    /// Parse a scenario from TOML text, surfacing any malformed input as
    /// [`SimError::ConfigMalformed`] rather than the raw `toml` error type.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SimError::ConfigMalformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [clock]
        time_step_size = 40.0

        [sea_state]
        significant_wave_height = 3.5
        heading = 60.0
        seed = 1

        [[asv]]
        id = "glider-1"
        L_wl = 2.1
        B_wl = 0.6
        D = 0.25
        T = 0.15
        displacement = 0.05
        max_speed = 2.0
        cog = [0.0, 0.0, 0.0]
        radius_of_gyration = [0.2, 0.6, 0.6]
        asv_position = [100.0, 100.0]
        asv_attitude = [0.0, 0.0, 90.0]
        waypoints = [[300.0, 300.0], [300.0, 100.0]]
    "#;

    #[test]
    fn parses_a_complete_scenario() {
        let config = ScenarioConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.asvs.len(), 1);
        assert_eq!(config.clock.time_step_size, 40.0);
        assert_eq!(config.asvs[0].waypoints().len(), 2);
        assert!(config.asvs[0].spec().is_ok());
    }

    #[test]
    fn draft_exceeding_depth_is_rejected() {
        let mut config = ScenarioConfig::from_toml_str(SAMPLE).unwrap();
        config.asvs[0].t = config.asvs[0].d + 0.01;
        assert!(matches!(config.asvs[0].spec(), Err(SimError::InvalidHullGeometry { .. })));
    }

    #[test]
    fn non_positive_hull_dimension_is_rejected() {
        let mut config = ScenarioConfig::from_toml_str(SAMPLE).unwrap();
        config.asvs[0].b_wl = 0.0;
        assert!(matches!(config.asvs[0].spec(), Err(SimError::InvalidHullGeometry { .. })));
    }

    #[test]
    fn attitude_heading_converts_degrees_to_radians() {
        let config = ScenarioConfig::from_toml_str(SAMPLE).unwrap();
        let attitude = config.asvs[0].initial_attitude();
        assert!((attitude.z - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn missing_clock_section_falls_back_to_default_step() {
        let without_clock = SAMPLE.replacen("[clock]\n        time_step_size = 40.0\n", "", 1);
        let config = ScenarioConfig::from_toml_str(&without_clock).unwrap();
        assert_eq!(config.clock.time_step_size, 40.0);
    }

    #[test]
    fn malformed_toml_is_reported_as_config_malformed() {
        let result = ScenarioConfig::from_toml_str("not valid toml [[[");
        assert!(matches!(result, Err(SimError::ConfigMalformed(_))));
    }

    #[test]
    fn thruster_layout_must_be_four_or_empty() {
        let mut config = ScenarioConfig::from_toml_str(SAMPLE).unwrap();
        config.asvs[0].thrusters = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
        assert!(matches!(config.asvs[0].thrusters(), Err(SimError::InvalidThrusterLayout { count: 2 })));
    }
}
