//! Fixed thrusters: position and orientation in the body frame, scalar
//! thrust magnitude.

use asv_geometry::{SixDof, Vector};

/// A single thruster mounted on the hull.
#[derive(Debug, Clone)]
pub struct Thruster {
    /// Position in the body frame (m).
    pub position: Vector,
    /// Orientation (roll, pitch, yaw) of the thrust vector in the body
    /// frame (radians). Only pitch (y) and yaw (z) are used: pitch tilts
    /// thrust out of the horizontal plane, yaw steers it.
    pub orientation: Vector,
    /// Thrust magnitude (N).
    pub thrust: f64,
}

impl Thruster {
    pub fn new(position: Vector) -> Self {
        Self {
            position,
            orientation: Vector::zeros(),
            thrust: 0.0,
        }
    }

    pub fn set_thrust(&mut self, orientation: Vector, magnitude: f64) {
        self.orientation = orientation;
        self.thrust = magnitude;
    }
}

/// Sum the force and moment contribution of every thruster about `cog`.
pub fn thruster_force(thrusters: &[Thruster], cog: Vector) -> SixDof {
    let mut force = SixDof::zero();
    for thruster in thrusters {
        let f_x = thruster.thrust * thruster.orientation.z.cos();
        let f_y = thruster.thrust * thruster.orientation.z.sin();
        let f_z = thruster.thrust * thruster.orientation.y.sin();

        let x = cog.x - thruster.position.x;
        let y = cog.y - thruster.position.y;
        let z = thruster.position.z - cog.z;

        force.surge += f_x;
        force.sway += f_y;
        force.heave += f_z;
        force.roll += f_y * z + f_z * y;
        force.pitch += f_x * z + f_z * x;
        force.yaw += f_x * y + f_y * x;
    }
    force
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_thruster_at_cog_produces_pure_surge() {
        let mut t = Thruster::new(Vector::zeros());
        t.set_thrust(Vector::zeros(), 10.0);
        let f = thruster_force(&[t], Vector::zeros());
        assert_eq!(f.surge, 10.0);
        assert_eq!(f.sway, 0.0);
        assert_eq!(f.roll, 0.0);
    }

    #[test]
    fn offset_thruster_produces_moment() {
        let mut t = Thruster::new(Vector::new(0.0, 1.0, 0.0));
        t.set_thrust(Vector::zeros(), 10.0);
        let f = thruster_force(&[t], Vector::zeros());
        assert_ne!(f.yaw, 0.0);
    }
}
