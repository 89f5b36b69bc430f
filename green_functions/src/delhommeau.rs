//! Delhommeau Green function implementation

use super::*;

/// Delhommeau Green function implementation
pub struct DelhommeauImpl;

impl DelhommeauImpl {
    /// Create a new Delhommeau implementation
    pub fn new() -> Self {
        Self
    }
} 