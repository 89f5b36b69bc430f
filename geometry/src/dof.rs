//! The six rigid-body degrees of freedom.

/// A degree of freedom of a rigid body: three linear, three angular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DOF {
    /// Translation along the body x-axis (forward).
    Surge,
    /// Translation along the body y-axis (starboard).
    Sway,
    /// Translation along the body z-axis (up).
    Heave,
    /// Rotation about the body x-axis.
    Roll,
    /// Rotation about the body y-axis.
    Pitch,
    /// Rotation about the body z-axis.
    Yaw,
}

impl DOF {
    /// All six degrees of freedom, in canonical order.
    pub fn all() -> [DOF; 6] {
        [DOF::Surge, DOF::Sway, DOF::Heave, DOF::Roll, DOF::Pitch, DOF::Yaw]
    }

    /// Index into a DOF-ordered array (0..6).
    pub fn index(&self) -> usize {
        match self {
            DOF::Surge => 0,
            DOF::Sway => 1,
            DOF::Heave => 2,
            DOF::Roll => 3,
            DOF::Pitch => 4,
            DOF::Yaw => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DOF::Surge => "surge",
            DOF::Sway => "sway",
            DOF::Heave => "heave",
            DOF::Roll => "roll",
            DOF::Pitch => "pitch",
            DOF::Yaw => "yaw",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense_and_ordered() {
        let idx: Vec<usize> = DOF::all().iter().map(DOF::index).collect();
        assert_eq!(idx, vec![0, 1, 2, 3, 4, 5]);
    }
}
