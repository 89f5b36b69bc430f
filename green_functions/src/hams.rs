//! HAMS Green function implementation

use super::*;

/// HAMS Green function implementation
pub struct HAMSImpl;

impl HAMSImpl {
    /// Create a new HAMS implementation
    pub fn new() -> Self {
        Self
    }
} 