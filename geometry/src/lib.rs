//! # ASV Geometry
//!
//! 3-vector and 6-degree-of-freedom primitives shared by the wave, dynamics
//! and control crates: the global east-north-up coordinate convention, the
//! body-frame degree-of-freedom axes, and angle normalisation.
//!
//! ## Example
//!
//! ```rust
//! use asv_geometry::{normalise_angle_2pi, SixDof, DOF};
//!
//! let heading = normalise_angle_2pi(-std::f64::consts::FRAC_PI_2);
//! assert!(heading >= 0.0 && heading < std::f64::consts::TAU);
//!
//! let mut forces = SixDof::zero();
//! forces.set(DOF::Surge, 12.0);
//! assert_eq!(forces.get(DOF::Surge), 12.0);
//! ```

pub mod angle;
pub mod dof;
pub mod sixdof;

pub use angle::{normalise_angle_2pi, normalise_angle_pi};
pub use dof::DOF;
pub use sixdof::SixDof;

use nalgebra::{Point3, Vector3};

/// 3-D point in the global east-north-up frame.
pub type Point = Point3<f64>;

/// 3-D vector in the global east-north-up frame, or a body-frame direction.
pub type Vector = Vector3<f64>;

/// Standard gravitational acceleration (m/s^2).
pub const G: f64 = 9.81;

/// Density of sea water (kg/m^3).
pub const RHO_SEA_WATER: f64 = 1025.0;
