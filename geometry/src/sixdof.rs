//! A six-component vector indexed by [`DOF`], used for forces, accelerations,
//! velocities and per-step deflections alike.

use crate::DOF;
use std::ops::{Add, AddAssign, Index, IndexMut};

/// A quantity with one scalar component per degree of freedom.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SixDof {
    pub surge: f64,
    pub sway: f64,
    pub heave: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl SixDof {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, dof: DOF) -> f64 {
        self[dof]
    }

    pub fn set(&mut self, dof: DOF, value: f64) {
        self[dof] = value;
    }
}

impl Index<DOF> for SixDof {
    type Output = f64;

    fn index(&self, dof: DOF) -> &f64 {
        match dof {
            DOF::Surge => &self.surge,
            DOF::Sway => &self.sway,
            DOF::Heave => &self.heave,
            DOF::Roll => &self.roll,
            DOF::Pitch => &self.pitch,
            DOF::Yaw => &self.yaw,
        }
    }
}

impl IndexMut<DOF> for SixDof {
    fn index_mut(&mut self, dof: DOF) -> &mut f64 {
        match dof {
            DOF::Surge => &mut self.surge,
            DOF::Sway => &mut self.sway,
            DOF::Heave => &mut self.heave,
            DOF::Roll => &mut self.roll,
            DOF::Pitch => &mut self.pitch,
            DOF::Yaw => &mut self.yaw,
        }
    }
}

impl Add for SixDof {
    type Output = SixDof;

    fn add(self, rhs: SixDof) -> SixDof {
        SixDof {
            surge: self.surge + rhs.surge,
            sway: self.sway + rhs.sway,
            heave: self.heave + rhs.heave,
            roll: self.roll + rhs.roll,
            pitch: self.pitch + rhs.pitch,
            yaw: self.yaw + rhs.yaw,
        }
    }
}

impl AddAssign for SixDof {
    fn add_assign(&mut self, rhs: SixDof) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrips_every_dof() {
        let mut v = SixDof::zero();
        for (i, dof) in DOF::all().into_iter().enumerate() {
            v.set(dof, i as f64);
        }
        for (i, dof) in DOF::all().into_iter().enumerate() {
            assert_eq!(v.get(dof), i as f64);
        }
    }

    #[test]
    fn add_is_componentwise() {
        let mut a = SixDof::zero();
        a.surge = 1.0;
        let mut b = SixDof::zero();
        b.surge = 2.0;
        b.heave = 3.0;
        let c = a + b;
        assert_eq!(c.surge, 3.0);
        assert_eq!(c.heave, 3.0);
    }
}
