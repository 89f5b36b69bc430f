//! # ASV Waves
//!
//! Linear (Airy) regular wave theory and Bretschneider sea-surface spectrum
//! synthesis: the irregular surface an ASV's dynamics and controllers are
//! driven against.
//!
//! ## Example
//!
//! ```rust
//! use asv_waves::SeaSurface;
//! use asv_geometry::Point;
//!
//! let sea = SeaSurface::new(3.5, std::f64::consts::FRAC_PI_3, 1, 15).unwrap();
//! let elevation = sea.elevation(&Point::new(100.0, 100.0, 0.0), 10.0).unwrap();
//! assert!(elevation.is_finite());
//! ```

pub mod regular_wave;
pub mod sea_surface;

pub use regular_wave::RegularWave;
pub use sea_surface::SeaSurface;

use thiserror::Error;

/// Errors produced while constructing or querying waves and sea surfaces.
#[derive(Error, Debug)]
pub enum WaveError {
    #[error("wave amplitude must be positive, got {amplitude}")]
    NonPositiveAmplitude { amplitude: f64 },

    #[error("wave frequency must be positive, got {frequency}")]
    NonPositiveFrequency { frequency: f64 },

    #[error("time must be non-negative, got {t}")]
    NegativeTime { t: f64 },

    #[error("significant wave height must be positive, got {h_s}")]
    NonPositiveWaveHeight { h_s: f64 },

    #[error("component wave count must be odd and at least 3, got {count}")]
    InvalidSpectrum { count: usize },
}

pub type Result<T> = std::result::Result<T, WaveError>;
