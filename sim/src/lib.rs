//! # ASV Sim
//!
//! Multi-ASV simulation driver: owns the sea surface, the fleet of ASVs and
//! their controllers, waypoint sequencing, and the bounded telemetry ring
//! buffer, with both time-synchronised and independent scheduling.
//!
//! ## Example
//!
//! ```rust
//! use asv_sim::config::ScenarioConfig;
//!
//! let toml = r#"
//! [clock]
//! time_step_size = 40.0
//!
//! [sea_state]
//! significant_wave_height = 3.5
//! heading = 60.0
//! seed = 1
//!
//! [[asv]]
//! id = "glider-1"
//! L_wl = 2.1
//! B_wl = 0.6
//! D = 0.25
//! T = 0.15
//! displacement = 0.05
//! max_speed = 2.0
//! cog = [0.0, 0.0, 0.0]
//! radius_of_gyration = [0.2, 0.6, 0.6]
//! asv_position = [100.0, 100.0]
//! asv_attitude = [0.0, 0.0, 0.0]
//! waypoints = [[300.0, 300.0]]
//! "#;
//! let config = ScenarioConfig::from_toml_str(toml).unwrap();
//! assert_eq!(config.asvs.len(), 1);
//! ```

pub mod config;
pub mod driver;
pub mod telemetry;

pub use config::ScenarioConfig;
pub use driver::{ScheduleMode, Simulation};
pub use telemetry::TelemetrySample;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("configuration malformed: {0}")]
    ConfigMalformed(String),

    #[error("index {index} out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no output directory configured for telemetry flush")]
    NoOutputDirectory,

    #[error("thruster propulsion requires exactly 4 thrusters, got {count}")]
    InvalidThrusterLayout { count: usize },

    #[error("invalid hull geometry: L_wl={l_wl} B_wl={b_wl} D={d} T={t} (need all > 0 and T <= D)")]
    InvalidHullGeometry { l_wl: f64, b_wl: f64, d: f64, t: f64 },

    #[error(transparent)]
    Dynamics(#[from] asv_dynamics::DynamicsError),

    #[error(transparent)]
    Control(#[from] asv_control::ControlError),

    #[error(transparent)]
    Wave(#[from] asv_waves::WaveError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
