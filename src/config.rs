use crate::error::{Error, Result};
use crate::geo::DEFAULT_RADIUS;
use serde::Deserialize;

/// Shape of the arcs drawn between endpoints
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArcConfig {
    pub segments: usize, // samples per arc minus one
    pub height: f64,     // peak elevation above the surface
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            segments: 100,
            height: 3.0,
        }
    }
}

/// Constants of the simulated latency model
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub base_ms: f64,
    pub ms_per_km: f64,
    pub jitter: bool,
    pub jitter_max_ms: f64,
    /// Scales latency into seconds-per-loop for the pulse animation
    pub multiplier: f64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            base_ms: 40.0,
            ms_per_km: 0.9,
            jitter: false,
            jitter_max_ms: 5.0,
            multiplier: 0.0015,
        }
    }
}

impl LatencyConfig {
    /// Reject constants that could make a pulse speed zero, negative or infinite.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_ms.is_finite() && self.base_ms > 0.0) {
            return Err(Error::Config(format!("latency base_ms must be > 0, got {}", self.base_ms)));
        }
        if !(self.ms_per_km.is_finite() && self.ms_per_km >= 0.0) {
            return Err(Error::Config(format!("latency ms_per_km must be >= 0, got {}", self.ms_per_km)));
        }
        if !(self.jitter_max_ms.is_finite() && self.jitter_max_ms >= 0.0) {
            return Err(Error::Config(format!("latency jitter_max_ms must be >= 0, got {}", self.jitter_max_ms)));
        }
        if !(self.multiplier.is_finite() && self.multiplier > 0.0) {
            return Err(Error::Config(format!("latency multiplier must be > 0, got {}", self.multiplier)));
        }
        Ok(())
    }
}

/// Everything needed to turn an endpoint list into a connection set
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobeConfig {
    pub radius: f64,
    pub arc: ArcConfig,
    pub latency: LatencyConfig,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            arc: ArcConfig::default(),
            latency: LatencyConfig::default(),
        }
    }
}

impl GlobeConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(Error::Config(format!("radius must be > 0, got {}", self.radius)));
        }
        if !(self.arc.height.is_finite() && self.arc.height >= 0.0) {
            return Err(Error::Config(format!("arc height must be >= 0, got {}", self.arc.height)));
        }
        self.latency.validate()
    }
}

/// Options for the interactive terminal view
#[derive(Clone, Debug)]
pub struct ViewConfig {
    pub time_step: f32, // seconds per frame
    pub spin: f64,      // globe rotation, radians per second
    pub tilt_deg: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            time_step: 0.03,
            spin: 0.15,
            tilt_deg: 23.5,
        }
    }
}
