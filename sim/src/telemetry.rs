//! Bounded telemetry ring buffer and its append-mode flush to disk.

use crate::{Result, SimError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Maximum samples held in memory before a flush is required.
pub const OUTPUT_BUFFER_SIZE: usize = 200_000;

const HEADER: &str =
    "time(s) H_s(m) wave_heading(deg) wave_elevation(m) F_surge(N) surge_acc(m/s^2) surge_vel(m/s) cog_x(m) cog_y(m) cog_z(m) heel(deg) trim(deg) heading(deg)";

/// One row of an ASV's trajectory, in the exact column order written to its
/// telemetry file.
#[derive(Debug, Clone, Copy)]
pub struct TelemetrySample {
    pub time: f64,
    pub significant_wave_height: f64,
    pub wave_heading_deg: f64,
    pub wave_elevation: f64,
    pub surge_force: f64,
    pub surge_acceleration: f64,
    pub surge_velocity: f64,
    pub cog_x: f64,
    pub cog_y: f64,
    pub cog_z: f64,
    pub heel_deg: f64,
    pub trim_deg: f64,
    pub heading_deg: f64,
}

impl TelemetrySample {
    fn to_row(self) -> String {
        format!(
            "{} {} {} {} {} {} {} {} {} {} {} {} {}",
            self.time,
            self.significant_wave_height,
            self.wave_heading_deg,
            self.wave_elevation,
            self.surge_force,
            self.surge_acceleration,
            self.surge_velocity,
            self.cog_x,
            self.cog_y,
            self.cog_z,
            self.heel_deg,
            self.trim_deg,
            self.heading_deg,
        )
    }
}

/// Bounded ring buffer of telemetry samples for a single ASV. Holds at most
/// [`OUTPUT_BUFFER_SIZE`] rows before `push` reports it needs flushing.
#[derive(Debug, Clone, Default)]
pub struct TelemetryBuffer {
    samples: Vec<TelemetrySample>,
}

impl TelemetryBuffer {
    pub fn new() -> Self {
        Self { samples: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Record a sample. Returns `true` once the buffer has reached
    /// [`OUTPUT_BUFFER_SIZE`] and must be flushed before the next push.
    pub fn push(&mut self, sample: TelemetrySample) -> bool {
        self.samples.push(sample);
        self.samples.len() >= OUTPUT_BUFFER_SIZE
    }

    pub fn get(&self, index: usize) -> Result<&TelemetrySample> {
        self.samples.get(index).ok_or(SimError::IndexOutOfRange { index, len: self.samples.len() })
    }

    /// Append every buffered sample to `path`, writing the column header
    /// only if the file does not already exist or is empty, then clear the
    /// buffer. Idempotent across process restarts: re-running against the
    /// same file never duplicates the header.
    pub fn flush(&mut self, path: &Path) -> Result<()> {
        let needs_header = !path.exists() || path.metadata()?.len() == 0;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        if needs_header {
            writeln!(file, "{HEADER}")?;
        }
        for sample in &self.samples {
            writeln!(file, "{}", sample.to_row())?;
        }

        log::debug!("flushed {} telemetry samples to {}", self.samples.len(), path.display());
        self.samples.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample(time: f64) -> TelemetrySample {
        TelemetrySample {
            time,
            significant_wave_height: 3.5,
            wave_heading_deg: 60.0,
            wave_elevation: 0.1,
            surge_force: 1.0,
            surge_acceleration: 0.2,
            surge_velocity: 0.5,
            cog_x: 10.0,
            cog_y: 20.0,
            cog_z: 0.0,
            heel_deg: 0.0,
            trim_deg: 0.0,
            heading_deg: 90.0,
        }
    }

    #[test]
    fn push_reports_when_buffer_is_full() {
        let mut buffer = TelemetryBuffer::new();
        for i in 0..OUTPUT_BUFFER_SIZE - 1 {
            assert!(!buffer.push(sample(i as f64)));
        }
        assert!(buffer.push(sample(OUTPUT_BUFFER_SIZE as f64)));
    }

    #[test]
    fn flush_writes_header_only_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("asv-1.txt");

        let mut buffer = TelemetryBuffer::new();
        buffer.push(sample(0.0));
        buffer.flush(&path).unwrap();
        assert!(buffer.is_empty());

        buffer.push(sample(0.04));
        buffer.flush(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("time(s)").count(), 1);
        assert_eq!(contents.lines().count(), 3); // header + 2 rows
    }

    #[test]
    fn index_out_of_range_is_reported() {
        let buffer = TelemetryBuffer::new();
        assert!(matches!(buffer.get(0), Err(SimError::IndexOutOfRange { index: 0, len: 0 })));
    }
}
