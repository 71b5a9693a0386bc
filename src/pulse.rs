//! Looping pulse animation along an arc

use crate::arc::ArcPath;
use glam::DVec3;
use rand::Rng;

/// Progress of one pulse along its arc.
///
/// `phase` is the fraction of the arc covered and always lies in `[0, 1)`;
/// `speed` is phase units per second and never changes after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseState {
    phase: f64,
    speed: f64,
}

impl PulseState {
    pub fn new(speed: f64, phase: f64) -> Self {
        Self {
            phase: wrap_phase(phase),
            speed,
        }
    }

    /// Start somewhere random on the arc so pulses with similar speeds don't march in step.
    pub fn random<R: Rng>(speed: f64, rng: &mut R) -> Self {
        Self::new(speed, rng.gen::<f64>())
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Seconds for one full trip along the arc
    pub fn period(&self) -> f64 {
        1.0 / self.speed
    }

    pub fn advance(&mut self, dt: f64) {
        self.phase = wrap_phase(self.phase + dt * self.speed);
    }
}

fn wrap_phase(phase: f64) -> f64 {
    if !phase.is_finite() {
        return 0.0;
    }
    let wrapped = phase.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Point on `path` at fractional progress `phase`.
pub fn position_at(path: &ArcPath, phase: f64) -> DVec3 {
    let points = path.points();
    let last = points.len() - 1;
    let idx = phase * last as f64;
    let i = idx.floor() as usize;
    let alpha = idx - i as f64;

    if i < last {
        points[i].lerp(points[i + 1], alpha)
    } else {
        points[last]
    }
}
