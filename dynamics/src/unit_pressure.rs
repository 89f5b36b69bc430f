//! Pre-computed table mapping an encounter-frequency bin to the pressure
//! amplitude, at the ASV's draft, of a unit-height wave. Rebuilt whenever the
//! ASV's bound sea surface changes.

use crate::encounter::encounter_frequency;
use crate::spec::AsvSpec;
use crate::{DynamicsError, Result};
use asv_waves::{RegularWave, SeaSurface};



/// Number of bins in the unit-wave-pressure table.
pub const TABLE_LEN: usize = 100;

/// A unit-height (amplitude 0.5 m) regular wave's pressure amplitude at the
/// vehicle's draft, tabulated across the encounter-frequency range implied
/// by the bound sea surface and the vehicle's maximum speed.
#[derive(Debug, Clone)]
pub struct UnitPressureTable {
    freq_min: f64,
    freq_max: f64,
    pressures: Vec<f64>,
}

impl UnitPressureTable {
    /// Build the table for `spec` against `sea_surface`.
    pub fn build(spec: &AsvSpec, sea_surface: &SeaSurface) -> Result<Self> {
        let max_speed_for_spectrum = 2.0 * spec.max_speed;
        let freq_min = encounter_frequency(sea_surface.min_frequency(), max_speed_for_spectrum, 0.0);
        let freq_max = encounter_frequency(sea_surface.max_frequency(), max_speed_for_spectrum, std::f64::consts::PI);

        let step = (freq_max - freq_min) / (TABLE_LEN as f64 - 1.0);
        let mut pressures = Vec::with_capacity(TABLE_LEN);
        for i in 0..TABLE_LEN {
            let freq = freq_min + i as f64 * step;
            let wave = RegularWave::new(0.5, freq, 0.0, 0.0)?;
            pressures.push(wave.pressure_amplitude(spec.submerged_depth()));
        }

        log::debug!("rebuilt unit-wave-pressure table: [{freq_min:.4}, {freq_max:.4}] rad/s, {TABLE_LEN} bins");

        Ok(Self { freq_min, freq_max, pressures })
    }

    pub fn freq_min(&self) -> f64 {
        self.freq_min
    }

    pub fn freq_max(&self) -> f64 {
        self.freq_max
    }

    fn step(&self) -> f64 {
        (self.freq_max - self.freq_min) / (TABLE_LEN as f64 - 1.0)
    }

    /// Pressure amplitude at the bin nearest `encounter_freq`, or an error if
    /// the frequency falls outside the tabulated range.
    pub fn pressure_at(&self, encounter_freq: f64) -> Result<f64> {
        let index = ((encounter_freq - self.freq_min) / self.step()).round();
        if index < 0.0 || index >= TABLE_LEN as f64 {
            return Err(DynamicsError::EncounterBinOutOfRange {
                bin: index as i64,
                table_len: TABLE_LEN,
            });
        }
        Ok(self.pressures[index as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_spec() -> AsvSpec {
        AsvSpec {
            l_wl: 2.1,
            b_wl: 0.6,
            d: 0.25,
            t: 0.15,
            displacement: 0.05,
            max_speed: 2.0,
            cog: asv_geometry::Vector::new(0.0, 0.0, 0.0),
            r_roll: 0.2,
            r_pitch: 0.6,
            r_yaw: 0.6,
        }
    }

    #[test]
    fn table_has_expected_length() {
        let sea = SeaSurface::new(3.5, 0.0, 1, 15).unwrap();
        let table = UnitPressureTable::build(&test_spec(), &sea).unwrap();
        assert_eq!(table.pressures.len(), TABLE_LEN);
    }

    #[test]
    fn out_of_range_frequency_is_an_error() {
        let sea = SeaSurface::new(3.5, 0.0, 1, 15).unwrap();
        let table = UnitPressureTable::build(&test_spec(), &sea).unwrap();
        assert!(table.pressure_at(table.freq_max() + 1000.0).is_err());
        assert!(table.pressure_at(table.freq_min() - 1000.0).is_err());
    }

    #[test]
    fn rebuild_changes_bounds_for_different_sea_state() {
        let spec = test_spec();
        let sea1 = SeaSurface::new(1.0, 0.0, 1, 15).unwrap();
        let sea2 = SeaSurface::new(8.0, 0.0, 1, 15).unwrap();
        let table1 = UnitPressureTable::build(&spec, &sea1).unwrap();
        let table2 = UnitPressureTable::build(&spec, &sea2).unwrap();
        assert_ne!(table1.freq_min(), table2.freq_min());
        assert_ne!(table1.freq_max(), table2.freq_max());
    }
}
