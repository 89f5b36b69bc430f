//! Static hull geometry and mass distribution of an ASV.

use asv_geometry::Vector;

/// The time-invariant description of an ASV hull, independent of any
/// particular sea state or dynamic state.
#[derive(Debug, Clone)]
pub struct AsvSpec {
    /// Waterline length (m).
    pub l_wl: f64,
    /// Waterline beam (m).
    pub b_wl: f64,
    /// Depth (m).
    pub d: f64,
    /// Draft (m), must not exceed `d`.
    pub t: f64,
    /// Displacement volume (m^3).
    pub displacement: f64,
    /// Maximum operational speed (m/s).
    pub max_speed: f64,
    /// Centre of gravity offset from the origin, in the body frame (m).
    pub cog: Vector,
    /// Roll radius of gyration (m).
    pub r_roll: f64,
    /// Pitch radius of gyration (m).
    pub r_pitch: f64,
    /// Yaw radius of gyration (m).
    pub r_yaw: f64,
}

impl AsvSpec {
    /// Semi-axis along the body x-axis of the idealised elliptical-cylinder
    /// hull (half the waterline length).
    pub fn semi_major(&self) -> f64 {
        self.l_wl / 2.0
    }

    /// Semi-axis along the body y-axis of the idealised hull (half the
    /// waterline beam).
    pub fn semi_minor(&self) -> f64 {
        self.b_wl / 2.0
    }

    /// Submerged depth of the idealised hull (the draft).
    pub fn submerged_depth(&self) -> f64 {
        self.t
    }
}
