//! PID steering control: position and heading error accumulation, and the
//! two output mappings (rudder angle for wave-glider ASVs, differential
//! thruster commands for thruster-propelled ASVs).

use asv_dynamics::Thruster;
use asv_geometry::{normalise_angle_pi, Point, Vector};
use std::f64::consts::FRAC_PI_6;

/// Rate at which past error decays in the integral term. 1.0 never forgets
/// the past; 0.0 always ignores it.
const GAMMA: f64 = 0.9;

/// Maximum thrust a single thruster can deliver (N), per the SMARTY
/// platform's physical thrusters.
const THRUSTER_LIMIT: f64 = 5.0;

/// Three PID gain scalars applied to (error, integral error, derivative
/// error).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gains {
    pub p: f64,
    pub i: f64,
    pub d: f64,
}

impl Gains {
    pub fn new(p: f64, i: f64, d: f64) -> Self {
        Self { p, i, d }
    }

    fn apply(&self, error: f64, integral: f64, derivative: f64) -> f64 {
        self.p * error + self.i * integral + self.d * derivative
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ErrorState {
    last: f64,
    integral: f64,
}

impl ErrorState {
    /// Fold in a new error sample, returning (integral, derivative) computed
    /// against the state *before* this sample overwrote it.
    fn update(&mut self, error: f64) -> (f64, f64) {
        let integral = error + GAMMA * self.integral;
        let derivative = error - self.last;
        self.last = error;
        self.integral = integral;
        (integral, derivative)
    }
}

/// Signed heading error (radians) between the ASV's forward direction and
/// the bearing to `waypoint`, via the two-argument arctangent of the cross
/// and dot products of the two direction vectors. Positive values lie in
/// (-pi, pi].
pub fn heading_error(origin: Point, yaw: f64, waypoint: Point) -> f64 {
    let forward = Vector::new(yaw.sin(), yaw.cos(), 0.0);
    let to_waypoint = Vector::new(waypoint.x - origin.x, waypoint.y - origin.y, 0.0);
    let cross = to_waypoint.x * forward.y - to_waypoint.y * forward.x;
    let dot = forward.x * to_waypoint.x + forward.y * to_waypoint.y;
    normalise_angle_pi(cross.atan2(dot))
}

/// Signed planar distance from `origin` to `waypoint`: negative when the
/// waypoint lies behind the line through `origin` perpendicular to the
/// ASV's forward axis (the vehicle has overshot along its heading).
pub fn position_error(origin: Point, yaw: f64, waypoint: Point) -> f64 {
    let forward = Vector::new(yaw.sin(), yaw.cos(), 0.0);
    let to_waypoint = Vector::new(waypoint.x - origin.x, waypoint.y - origin.y, 0.0);
    let distance = (to_waypoint.x * to_waypoint.x + to_waypoint.y * to_waypoint.y).sqrt();
    let ahead = forward.x * to_waypoint.x + forward.y * to_waypoint.y;
    if ahead < 0.0 {
        -distance
    } else {
        distance
    }
}

/// Thrust commands for the four-thruster layout: fore and aft thrusters on
/// each side, one idle depending on the sign of that side's command.
///
/// ```text
/// Fore PS        Fore SB
/// [0] -----------[1]
///  |              |
///  |              |
/// [2] -----------[3]
/// Aft PS         Aft SB
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThrusterCommand {
    pub fore_port: f64,
    pub fore_starboard: f64,
    pub aft_port: f64,
    pub aft_starboard: f64,
}

impl ThrusterCommand {
    /// Apply this command to a four-thruster layout in `[fore_port,
    /// fore_starboard, aft_port, aft_starboard]` order: the active thruster
    /// (fore for a negative side, aft for a non-negative one) takes the
    /// signed value, the other is set to zero thrust.
    pub fn apply(&self, thrusters: &mut [Thruster; 4]) {
        let orientation = Vector::zeros();
        let port = self.aft_port + self.fore_port; // exactly one of the two is non-zero
        let starboard = self.aft_starboard + self.fore_starboard;
        if port >= 0.0 {
            thrusters[2].set_thrust(orientation, port);
            thrusters[0].set_thrust(orientation, 0.0);
        } else {
            thrusters[2].set_thrust(orientation, 0.0);
            thrusters[0].set_thrust(orientation, port);
        }
        if starboard >= 0.0 {
            thrusters[3].set_thrust(orientation, starboard);
            thrusters[1].set_thrust(orientation, 0.0);
        } else {
            thrusters[3].set_thrust(orientation, 0.0);
            thrusters[1].set_thrust(orientation, starboard);
        }
    }
}

/// PID controller: holds both gain vectors (position and heading) and the
/// running error accumulators. Does not own the ASV it drives; callers pass
/// the ASV's current origin and yaw in each step.
#[derive(Debug, Clone, Copy, Default)]
pub struct PidController {
    gains_position: Gains,
    gains_heading: Gains,
    position_state: ErrorState,
    heading_state: ErrorState,
}

impl PidController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_gains_position(&mut self, p: f64, i: f64, d: f64) {
        self.gains_position = Gains::new(p, i, d);
    }

    pub fn set_gains_heading(&mut self, p: f64, i: f64, d: f64) {
        self.gains_heading = Gains::new(p, i, d);
    }

    pub fn gains_position(&self) -> Gains {
        self.gains_position
    }

    pub fn gains_heading(&self) -> Gains {
        self.gains_heading
    }

    /// Rudder angle for wave-glider propulsion, clamped to +/- pi/6.
    /// Heading error only: the hydrofoils generate thrust from wave motion,
    /// not from the rudder.
    pub fn step_rudder(&mut self, origin: Point, yaw: f64, waypoint: Point) -> f64 {
        let error = heading_error(origin, yaw, waypoint);
        let (integral, derivative) = self.heading_state.update(error);
        self.gains_heading.apply(error, integral, derivative).clamp(-FRAC_PI_6, FRAC_PI_6)
    }

    /// Differential thrust commands for a four-thruster ASV: combines
    /// independently-accumulated position and heading error.
    pub fn step_thrusters(&mut self, origin: Point, yaw: f64, waypoint: Point) -> ThrusterCommand {
        let e_heading = heading_error(origin, yaw, waypoint);
        let (i_heading, d_heading) = self.heading_state.update(e_heading);
        let heading_thrust = self.gains_heading.apply(e_heading, i_heading, d_heading);

        let e_position = position_error(origin, yaw, waypoint);
        let (i_position, d_position) = self.position_state.update(e_position);
        let position_thrust = self.gains_position.apply(e_position, i_position, d_position);

        let mut port = position_thrust + heading_thrust;
        let mut starboard = position_thrust - heading_thrust;

        let max_magnitude = port.abs().max(starboard.abs());
        if max_magnitude > THRUSTER_LIMIT {
            let ratio = THRUSTER_LIMIT / max_magnitude;
            port *= ratio;
            starboard *= ratio;
        }

        if port >= 0.0 {
            ThrusterCommand { fore_port: 0.0, aft_port: port, fore_starboard: 0.0, aft_starboard: 0.0 }
                .with_starboard(starboard)
        } else {
            ThrusterCommand { fore_port: port, aft_port: 0.0, fore_starboard: 0.0, aft_starboard: 0.0 }
                .with_starboard(starboard)
        }
    }
}

impl ThrusterCommand {
    fn with_starboard(mut self, starboard: f64) -> Self {
        if starboard >= 0.0 {
            self.aft_starboard = starboard;
        } else {
            self.fore_starboard = starboard;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_error_is_zero_when_waypoint_is_straight_ahead() {
        let origin = Point::origin();
        let yaw = 0.0; // facing north
        let waypoint = Point::new(0.0, 100.0, 0.0);
        assert!(heading_error(origin, yaw, waypoint).abs() < 1e-9);
    }

    #[test]
    fn heading_error_sign_follows_side_of_waypoint() {
        let origin = Point::origin();
        let yaw = 0.0;
        let to_the_east = heading_error(origin, yaw, Point::new(100.0, 100.0, 0.0));
        let to_the_west = heading_error(origin, yaw, Point::new(-100.0, 100.0, 0.0));
        assert!(to_the_east * to_the_west < 0.0);
    }

    #[test]
    fn position_error_is_negative_behind_the_asv() {
        let origin = Point::origin();
        let yaw = 0.0; // facing north
        assert!(position_error(origin, yaw, Point::new(0.0, -50.0, 0.0)) < 0.0);
        assert!(position_error(origin, yaw, Point::new(0.0, 50.0, 0.0)) > 0.0);
    }

    #[test]
    fn rudder_angle_is_clamped() {
        let mut pid = PidController::new();
        pid.set_gains_heading(1000.0, 0.0, 0.0);
        let angle = pid.step_rudder(Point::origin(), 0.0, Point::new(100.0, 0.0, 0.0));
        assert!(angle.abs() <= FRAC_PI_6 + 1e-12);
    }

    #[test]
    fn step_is_idempotent_with_zeroed_accumulators() {
        let mut a = PidController::new();
        a.set_gains_heading(1.0, 0.5, 0.2);
        let origin = Point::origin();
        let waypoint = Point::new(50.0, 100.0, 0.0);
        let first = a.step_rudder(origin, 0.1, waypoint);

        let mut b = PidController::new();
        b.set_gains_heading(1.0, 0.5, 0.2);
        let second = b.step_rudder(origin, 0.1, waypoint);

        assert_eq!(first, second);
    }

    #[test]
    fn thruster_command_never_exceeds_limit() {
        let mut pid = PidController::new();
        pid.set_gains_position(100.0, 0.0, 0.0);
        pid.set_gains_heading(100.0, 0.0, 0.0);
        let cmd = pid.step_thrusters(Point::origin(), 0.0, Point::new(500.0, 500.0, 0.0));
        assert!(cmd.fore_port.abs() <= THRUSTER_LIMIT + 1e-9);
        assert!(cmd.fore_starboard.abs() <= THRUSTER_LIMIT + 1e-9);
        assert!(cmd.aft_port.abs() <= THRUSTER_LIMIT + 1e-9);
        assert!(cmd.aft_starboard.abs() <= THRUSTER_LIMIT + 1e-9);
    }

    #[test]
    fn thruster_command_idles_the_inactive_side() {
        let mut pid = PidController::new();
        pid.set_gains_position(1.0, 0.0, 0.0);
        let cmd = pid.step_thrusters(Point::origin(), 0.0, Point::new(0.0, 100.0, 0.0));
        assert_eq!(cmd.fore_port, 0.0);
        assert_eq!(cmd.fore_starboard, 0.0);
    }
}
