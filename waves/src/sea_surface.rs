//! Bretschneider sea-surface spectrum: a superposition of N regular waves.

use crate::{RegularWave, Result, WaveError};
use asv_geometry::{normalise_angle_2pi, normalise_angle_pi, Point, G};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

const ALPHA: f64 = 0.0081;

/// An irregular sea surface synthesised as a sum of `count_component_waves`
/// regular waves sampled from a Bretschneider spectrum.
///
/// Immutable once constructed: two surfaces built from identical inputs
/// produce identical spectra, since the phase lag of each component is drawn
/// from an RNG seeded solely from the constructor's `seed` argument.
#[derive(Debug, Clone)]
pub struct SeaSurface {
    significant_wave_height: f64,
    heading: f64,
    seed: i64,
    peak_frequency: f64,
    min_frequency: f64,
    max_frequency: f64,
    spectrum: Vec<RegularWave>,
}

impl SeaSurface {
    /// Construct a sea surface. `count_component_waves` must be odd and at
    /// least 3; `significant_wave_height` must be positive.
    pub fn new(significant_wave_height: f64, heading: f64, seed: i64, count_component_waves: usize) -> Result<Self> {
        if significant_wave_height <= 0.0 {
            return Err(WaveError::NonPositiveWaveHeight { h_s: significant_wave_height });
        }
        if count_component_waves < 3 || count_component_waves % 2 == 0 {
            return Err(WaveError::InvalidSpectrum { count: count_component_waves });
        }

        let heading = normalise_angle_2pi(heading);
        let h_s = significant_wave_height;
        let a_coeff = ALPHA * G * G / (2.0 * PI).powi(4);
        let b_coeff = 4.0 * ALPHA * G * G / ((2.0 * PI).powi(4) * h_s * h_s);
        let peak_frequency = 0.946 * b_coeff.powf(0.25);
        let min_frequency = 0.652 * peak_frequency;
        let max_frequency = 5.946 * peak_frequency;

        let n = count_component_waves;
        let half = (n - 1) / 2;
        let delta_mu = PI / n as f64;

        // One central band spanning the full range divided by N, then `half`
        // equal-width bands on either side of the peak. The central band's
        // width differs from the side bands' widths by construction: this
        // asymmetry is inherited, not a bug (see DESIGN.md).
        let delta_peak = (max_frequency - min_frequency) / n as f64;

        let mut frequencies = Vec::with_capacity(n);
        let mut band_widths = Vec::with_capacity(n);
        let mut headings = Vec::with_capacity(n);

        frequencies.push(peak_frequency);
        band_widths.push(delta_peak);
        headings.push(heading);

        if half > 0 {
            let delta_f_below = (peak_frequency - min_frequency) / half as f64;
            for i in 0..half {
                let f = min_frequency + i as f64 * delta_f_below;
                let mu = normalise_angle_pi(heading + PI / 2.0 - i as f64 * delta_mu - delta_mu / 2.0);
                frequencies.push(f);
                band_widths.push(delta_f_below);
                headings.push(normalise_angle_2pi(mu));
            }

            let delta_f_above = (max_frequency - peak_frequency) / half as f64;
            for i in 0..half {
                let f = max_frequency - i as f64 * delta_f_above;
                let mu = normalise_angle_pi(heading - i as f64 * delta_mu - delta_mu / 2.0);
                frequencies.push(f);
                band_widths.push(delta_f_above);
                headings.push(normalise_angle_2pi(mu));
            }
        }

        let mut rng = StdRng::seed_from_u64(seed as u64);
        let mut spectrum = Vec::with_capacity(n);
        for i in 0..n {
            let f = frequencies[i];
            let delta_f = band_widths[i];
            let density = (a_coeff / f.powi(5)) * (-b_coeff / f.powi(4)).exp();
            let amplitude = (2.0 * density * delta_f).sqrt();
            let phase_lag = rng.gen_range(0.0..PI);
            spectrum.push(RegularWave::new(amplitude, f, phase_lag, headings[i])?);
        }

        log::debug!(
            "synthesised sea surface: H_s={h_s:.2} heading={heading:.3} seed={seed} N={n} f_p={peak_frequency:.4}"
        );

        Ok(Self {
            significant_wave_height,
            heading,
            seed,
            peak_frequency,
            min_frequency,
            max_frequency,
            spectrum,
        })
    }

    pub fn significant_wave_height(&self) -> f64 {
        self.significant_wave_height
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn peak_frequency(&self) -> f64 {
        self.peak_frequency
    }

    pub fn min_frequency(&self) -> f64 {
        self.min_frequency
    }

    pub fn max_frequency(&self) -> f64 {
        self.max_frequency
    }

    pub fn component_waves(&self) -> &[RegularWave] {
        &self.spectrum
    }

    /// Elevation at `location` and time `t`: sum of every component wave.
    pub fn elevation(&self, location: &Point, t: f64) -> Result<f64> {
        if t < 0.0 {
            return Err(WaveError::NegativeTime { t });
        }
        let mut sum = 0.0;
        for wave in &self.spectrum {
            sum += wave.elevation(location, t)?;
        }
        Ok(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_even_or_small_component_count() {
        assert!(SeaSurface::new(3.5, 0.0, 1, 4).is_err());
        assert!(SeaSurface::new(3.5, 0.0, 1, 1).is_err());
    }

    #[test]
    fn rejects_non_positive_wave_height() {
        assert!(SeaSurface::new(0.0, 0.0, 1, 15).is_err());
    }

    #[test]
    fn same_seed_reproduces_identical_spectrum() {
        let a = SeaSurface::new(3.5, PI / 3.0, 1, 15).unwrap();
        let b = SeaSurface::new(3.5, PI / 3.0, 1, 15).unwrap();
        let p = Point::new(100.0, 100.0, 0.0);
        assert_eq!(a.elevation(&p, 10.0).unwrap(), b.elevation(&p, 10.0).unwrap());
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = SeaSurface::new(3.5, PI / 3.0, 1, 15).unwrap();
        let b = SeaSurface::new(3.5, PI / 3.0, 2, 15).unwrap();
        let p = Point::new(100.0, 100.0, 0.0);
        assert_ne!(a.elevation(&p, 10.0).unwrap(), b.elevation(&p, 10.0).unwrap());
    }

    #[test]
    fn component_count_matches_request() {
        let sea = SeaSurface::new(3.5, 0.0, 1, 15).unwrap();
        assert_eq!(sea.component_waves().len(), 15);
    }

    #[test]
    fn negative_time_is_an_error() {
        let sea = SeaSurface::new(3.5, 0.0, 1, 15).unwrap();
        assert!(sea.elevation(&Point::origin(), -1.0).is_err());
    }
}
