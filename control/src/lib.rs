//! # ASV Control
//!
//! PID navigation control driving an ASV toward a sequence of waypoints,
//! plus the offline gain-tuning search (local gradient descent and
//! exhaustive grid) used to select PID gains before a mission.
//!
//! ## Example
//!
//! ```rust
//! use asv_control::PidController;
//! use asv_geometry::Point;
//!
//! let mut pid = PidController::new();
//! pid.set_gains_heading(1.0, 0.1, 0.05);
//! let rudder_angle = pid.step_rudder(Point::origin(), 0.0, Point::new(100.0, 200.0, 0.0));
//! assert!(rudder_angle.abs() <= std::f64::consts::FRAC_PI_6 + 1e-12);
//! ```

pub mod pid;
pub mod tuning;

pub use pid::{Gains, PidController, ThrusterCommand};
pub use tuning::{tune_exhaustive_grid, tune_local_descent, GainBounds, TuningResult, TuningStep};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControlError {
    #[error("gain neighbourhood evaluated to no candidates")]
    EmptyNeighbourhood,

    #[error(transparent)]
    Dynamics(#[from] asv_dynamics::DynamicsError),

    #[error(transparent)]
    Wave(#[from] asv_waves::WaveError),
}

pub type Result<T> = std::result::Result<T, ControlError>;
