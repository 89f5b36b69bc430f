//! # ASV Dynamics
//!
//! The 6-DOF rigid-body integrator at the centre of the simulation: per
//! step, computes wave excitation force, thrust, quadratic drag and
//! hydrostatic restoring force, then advances acceleration, velocity,
//! body-frame deflection, attitude and global position.
//!
//! ## Example
//!
//! ```rust
//! use asv_dynamics::{Asv, AsvSpec, PropulsionMode, StepCommand};
//! use asv_geometry::{Point, Vector};
//!
//! let spec = AsvSpec {
//!     l_wl: 2.1, b_wl: 0.6, d: 0.25, t: 0.15,
//!     displacement: 0.05, max_speed: 2.0,
//!     cog: Vector::zeros(), r_roll: 0.2, r_pitch: 0.6, r_yaw: 0.6,
//! };
//! let mut asv = Asv::new(spec, Point::origin(), Vector::zeros(), PropulsionMode::Thrusters(vec![]));
//! asv.step(StepCommand::Thrusters, 40.0).unwrap();
//! ```

pub mod asv;
pub mod drag;
pub mod encounter;
pub mod matrices;
pub mod restoring;
pub mod spec;
pub mod thruster;
pub mod unit_pressure;
pub mod wave_force;
pub mod wave_glider;

pub use asv::{Asv, PropulsionMode, StepCommand};
pub use spec::AsvSpec;
pub use thruster::Thruster;
pub use unit_pressure::UnitPressureTable;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DynamicsError {
    #[error("time step must be positive, got {dt_ms} ms")]
    NonPositiveStep { dt_ms: f64 },

    #[error("rudder angle must lie within +/- pi/2, got {angle}")]
    InvalidRudderAngle { angle: f64 },

    #[error("encounter-frequency bin {bin} out of range for a table of length {table_len}")]
    EncounterBinOutOfRange { bin: i64, table_len: usize },

    #[error(transparent)]
    Wave(#[from] asv_waves::WaveError),
}

pub type Result<T> = std::result::Result<T, DynamicsError>;
