//! Offline gain-tuning search: local gradient descent and exhaustive grid,
//! both scoring a candidate gain vector by the RMS heading error of a
//! wave-glider ASV across a matrix of sea states, run to completion in
//! parallel.

use crate::pid::{Gains, PidController};
use crate::{ControlError, Result};
use asv_dynamics::{Asv, AsvSpec, PropulsionMode, StepCommand};
use asv_geometry::{Point, Vector};
use asv_waves::SeaSurface;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::f64::consts::TAU;
use std::sync::Arc;

/// Inclusive lower/upper bound for each gain during a search.
#[derive(Debug, Clone, Copy)]
pub struct GainBounds {
    pub lower: f64,
    pub upper: f64,
}

const SIM_DT_MS: f64 = 40.0;
const SIM_DURATION_S: f64 = 120.0;
const RNG_SEED_SEA_STATE: i64 = 1;
const COMPONENT_WAVES: usize = 15;
const START: (f64, f64, f64) = (100.0, 100.0, 0.0);
const TARGET_WAYPOINT: (f64, f64, f64) = (100.0, 10_000.0, 0.0);

fn sea_state_matrix() -> Vec<(f64, f64)> {
    let heights = (0..5).map(|i| 1.0 + 2.0 * i as f64);
    heights
        .flat_map(|h| (0..8).map(move |j| (h, j as f64 * TAU / 8.0)))
        .collect()
}

/// RMS heading error of a wave-glider ASV steered by `gains`, starting at
/// heading `asv_heading` in a sea of height `sig_wave_height`, run for
/// [`SIM_DURATION_S`] simulated seconds toward a waypoint due north.
fn simulate_wave_glider_cost(gains: Gains, spec: &AsvSpec, sig_wave_height: f64, asv_heading: f64) -> Result<f64> {
    let sea = Arc::new(SeaSurface::new(sig_wave_height, 0.0, RNG_SEED_SEA_STATE, COMPONENT_WAVES)?);
    let mut asv = Asv::new(
        spec.clone(),
        Point::new(START.0, START.1, START.2),
        Vector::new(0.0, 0.0, asv_heading),
        PropulsionMode::WaveGlider { tuning_factor_thrust: 1.0 },
    );
    asv.set_sea_surface(sea)?;

    let mut pid = PidController::new();
    pid.set_gains_heading(gains.p, gains.i, gains.d);
    let waypoint = Point::new(TARGET_WAYPOINT.0, TARGET_WAYPOINT.1, TARGET_WAYPOINT.2);

    let steps = (SIM_DURATION_S * 1000.0 / SIM_DT_MS).round() as usize;
    let mut sum_squared_error = 0.0;
    for _ in 0..steps {
        let rudder_angle = pid.step_rudder(asv.origin(), asv.attitude().yaw, waypoint);
        asv.step(StepCommand::Rudder(rudder_angle), SIM_DT_MS)?;
        let error = crate::pid::heading_error(asv.origin(), asv.attitude().yaw, waypoint);
        sum_squared_error += error * error;
    }
    Ok((sum_squared_error / steps as f64).sqrt())
}

/// Average RMS heading error across the full 5-wave-height x 8-heading
/// matrix, each simulation run on its own task.
fn evaluate_gains(gains: Gains, spec: &AsvSpec) -> Result<f64> {
    let costs: Result<Vec<f64>> = sea_state_matrix()
        .into_par_iter()
        .map(|(h, heading)| simulate_wave_glider_cost(gains, spec, h, heading))
        .collect();
    let costs = costs?;
    Ok(costs.iter().sum::<f64>() / costs.len() as f64)
}

/// One iteration's outcome, kept for the caller to inspect convergence.
#[derive(Debug, Clone, Copy)]
pub struct TuningStep {
    pub gains: Gains,
    pub cost: f64,
}

/// Result of a tuning search: the best gains found and the cost at each
/// iteration (local descent) or each candidate (exhaustive grid would be
/// impractically large to record in full, so only the running best is kept
/// there).
#[derive(Debug, Clone)]
pub struct TuningResult {
    pub gains: Gains,
    pub cost: f64,
    pub history: Vec<TuningStep>,
}

/// Local gradient-descent search: starting from a random integer gain
/// vector in `bounds`, each of 30 iterations evaluates the 27 neighbours
/// (each gain -delta, unchanged, +delta) and steps to the lowest-cost one.
/// `seed` drives only the random starting point, so repeated calls with the
/// same seed and bounds are deterministic.
pub fn tune_local_descent(spec: &AsvSpec, bounds: GainBounds, delta: f64, seed: u64) -> Result<TuningResult> {
    const ITERATIONS: usize = 30;
    tune_local_descent_n(spec, bounds, delta, seed, ITERATIONS)
}

/// Same search as [`tune_local_descent`] with an explicit iteration count,
/// so tests can exercise the seeded-start determinism without paying for
/// the full 30-iteration search.
fn tune_local_descent_n(
    spec: &AsvSpec,
    bounds: GainBounds,
    delta: f64,
    seed: u64,
    iterations: usize,
) -> Result<TuningResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    let lower = bounds.lower as i64;
    let upper = bounds.upper as i64;
    let mut current = Gains::new(
        rng.gen_range(lower..=upper) as f64,
        rng.gen_range(lower..=upper) as f64,
        rng.gen_range(lower..=upper) as f64,
    );

    let mut history = Vec::with_capacity(iterations);
    let mut best_cost = evaluate_gains(current, spec)?;

    for _ in 0..iterations {
        let mut neighbours = Vec::with_capacity(27);
        for dp in [-delta, 0.0, delta] {
            for di in [-delta, 0.0, delta] {
                for dd in [-delta, 0.0, delta] {
                    neighbours.push(Gains::new(
                        (current.p + dp).max(0.0),
                        (current.i + di).max(0.0),
                        (current.d + dd).max(0.0),
                    ));
                }
            }
        }

        let evaluated: Result<Vec<(Gains, f64)>> = neighbours
            .into_par_iter()
            .map(|g| evaluate_gains(g, spec).map(|cost| (g, cost)))
            .collect();
        let evaluated = evaluated?;

        let (best_gains, cost) = evaluated
            .into_iter()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or(ControlError::EmptyNeighbourhood)?;

        current = best_gains;
        best_cost = cost;
        history.push(TuningStep { gains: current, cost: best_cost });
        log::info!("tuning iteration: P={:.3} I={:.3} D={:.3} cost={:.6}", current.p, current.i, current.d, best_cost);
    }

    Ok(TuningResult { gains: current, cost: best_cost, history })
}

/// Exhaustive grid search over the Cartesian product of `(lower, upper,
/// step)` for all three gains. Deterministic: no randomness enters the
/// search itself (only the sea-surface RNG inside each simulation, which is
/// reseeded identically for every candidate).
pub fn tune_exhaustive_grid(spec: &AsvSpec, lower: f64, upper: f64, step: f64) -> Result<TuningResult> {
    let mut axis = Vec::new();
    let mut v = lower;
    while v < upper {
        axis.push(v);
        v += step;
    }

    let mut candidates = Vec::with_capacity(axis.len().pow(3));
    for &p in &axis {
        for &i in &axis {
            for &d in &axis {
                candidates.push(Gains::new(p, i, d));
            }
        }
    }

    log::info!("exhaustive tuning grid: {} candidates", candidates.len());

    let evaluated: Result<Vec<(Gains, f64)>> =
        candidates.into_par_iter().map(|g| evaluate_gains(g, spec).map(|cost| (g, cost))).collect();
    let evaluated = evaluated?;

    let (gains, cost) =
        evaluated.iter().copied().min_by(|a, b| a.1.total_cmp(&b.1)).ok_or(ControlError::EmptyNeighbourhood)?;

    let history = evaluated.into_iter().map(|(gains, cost)| TuningStep { gains, cost }).collect();
    Ok(TuningResult { gains, cost, history })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave_glider_spec() -> AsvSpec {
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
    fn sea_state_matrix_has_forty_combinations() {
        assert_eq!(sea_state_matrix().len(), 40);
    }

    #[test]
    fn exhaustive_grid_is_deterministic_given_the_same_bounds() {
        let spec = wave_glider_spec();
        let a = tune_exhaustive_grid(&spec, 0.0, 2.0, 2.0).unwrap();
        let b = tune_exhaustive_grid(&spec, 0.0, 2.0, 2.0).unwrap();
        assert_eq!(a.gains, b.gains);
        assert!((a.cost - b.cost).abs() < 1e-12);
    }

    #[test]
    fn local_descent_is_deterministic_given_the_same_seed() {
        let spec = wave_glider_spec();
        let bounds = GainBounds { lower: 0.0, upper: 2.0 };
        let a = tune_local_descent_n(&spec, bounds, 0.5, 7, 1).unwrap();
        let b = tune_local_descent_n(&spec, bounds, 0.5, 7, 1).unwrap();
        assert_eq!(a.gains, b.gains);
        assert!((a.cost - b.cost).abs() < 1e-12);
    }
}
