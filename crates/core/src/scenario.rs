//! Run settings for stepping a set of particles through time
//!
//! A scenario is stored as JSON so runs can be reproduced and their final
//! state saved back out. The particles themselves carry no invariants, so only
//! the stepping parameters are validated.

use crate::core_types::particle::Particle;
use crate::error::ScenarioError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Fixed-step run description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Time step passed to every `Particle::update` call
    pub time_step: f64,
    /// Total simulated time
    pub duration: f64,
    /// Simulated time between progress reports
    pub report_interval: f64,
    /// Particles to advance
    pub particles: Vec<Particle>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            time_step: 0.1,
            duration: 10.0,
            report_interval: 1.0,
            particles: Vec::new(),
        }
    }
}

impl SimulationSettings {
    /// Load and validate settings from a JSON file
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or fails [`validate`](Self::validate)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ScenarioError::io(path, e))?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;

        info!(
            path = %path.display(),
            particles = settings.particles.len(),
            "loaded scenario"
        );
        Ok(settings)
    }

    /// Save settings to a JSON file
    ///
    /// # Errors
    /// Returns error if serialization or the write fails
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ScenarioError> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|e| ScenarioError::io(path, e))?;

        info!(path = %path.display(), "saved scenario");
        Ok(())
    }

    /// Check the stepping parameters
    ///
    /// # Errors
    /// Returns [`ScenarioError::InvalidSetting`] naming the first bad field
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(ScenarioError::invalid(
                "time_step",
                self.time_step,
                "must be finite and positive",
            ));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(ScenarioError::invalid(
                "duration",
                self.duration,
                "must be finite and non-negative",
            ));
        }
        if !self.report_interval.is_finite() || self.report_interval <= 0.0 {
            return Err(ScenarioError::invalid(
                "report_interval",
                self.report_interval,
                "must be finite and positive",
            ));
        }
        Ok(())
    }

    /// Number of whole steps needed to cover `duration`
    pub fn step_count(&self) -> u64 {
        (self.duration / self.time_step).ceil() as u64
    }
}
