//! Curved paths between two points on the globe

use crate::config::ArcConfig;
use glam::DVec3;
use std::f64::consts::PI;

/// Sampled arc from a server to a client, lifted off the surface by a sine bump.
///
/// Samples are taken by lerping the two surface points, pushing the result
/// back out to the sphere, then adding `height * sin(pi * t)`. This is not a
/// great circle: the spacing of samples bunches toward the middle on long
/// arcs, which reads smoother on screen than true slerp.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcPath {
    points: Vec<DVec3>,
}

impl ArcPath {
    /// Build an arc between `start` and `end`, both on the sphere of `radius`.
    pub fn build(start: DVec3, end: DVec3, radius: f64, config: &ArcConfig) -> Self {
        let segments = config.segments.max(1);
        let points = (0..=segments)
            .map(|i| {
                let t = i as f64 / segments as f64;
                // Antipodal endpoints pass through the origin at t = 0.5
                let direction = start.lerp(end, t).normalize_or_zero();
                direction * (radius + config.height * (PI * t).sin())
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> DVec3 {
        self.points[0]
    }

    pub fn last(&self) -> DVec3 {
        self.points[self.points.len() - 1]
    }
}
