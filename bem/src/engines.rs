//! BEM solver engines

use super::*;
use crate::problems::BEMProblem;
use crate::results::BEMResult;

/// BEM solver engine trait
pub trait BEMEngine {
    fn solve(&self, problem: &BEMProblem) -> Result<BEMResult>;
}

/// Standard BEM engine implementation
pub struct StandardBEMEngine {
    tolerance: f64,
    max_iterations: usize,
}

impl StandardBEMEngine {
    pub fn new() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 1000,
        }
    }
}

impl BEMEngine for StandardBEMEngine {
    fn solve(&self, _problem: &BEMProblem) -> Result<BEMResult> {
        // Simplified implementation - would contain actual BEM solving logic
        let solution = vec![0.0; 100]; // Placeholder
        Ok(BEMResult::new(_problem.clone(), solution))
    }
}
