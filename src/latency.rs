//! Great-circle distance and the simulated latency that paces each pulse

use crate::config::LatencyConfig;
use crate::geo::LatLng;
use rand::Rng;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometres.
pub fn haversine_distance(a: LatLng, b: LatLng) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let sin_d_lat = (d_lat / 2.0).sin();
    let sin_d_lng = (d_lng / 2.0).sin();
    let h = sin_d_lat * sin_d_lat + lat1.cos() * lat2.cos() * sin_d_lng * sin_d_lng;

    // Rounding can push h a hair past 1 for antipodal pairs
    2.0 * EARTH_RADIUS_KM * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Maps distance to a fake round-trip time and then to an animation speed.
#[derive(Clone, Copy, Debug)]
pub struct LatencyModel {
    config: LatencyConfig,
}

impl LatencyModel {
    pub fn new(config: LatencyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LatencyConfig {
        &self.config
    }

    /// Simulated latency in milliseconds. `rng` is only consulted when jitter is on.
    pub fn simulate_latency<R: Rng>(&self, a: LatLng, b: LatLng, rng: &mut R) -> f64 {
        let distance = haversine_distance(a, b);
        let jitter = if self.config.jitter && self.config.jitter_max_ms > 0.0 {
            rng.gen_range(0.0..self.config.jitter_max_ms)
        } else {
            0.0
        };
        self.config.base_ms + distance * self.config.ms_per_km + jitter
    }

    /// Phase units per second for a pulse with the given latency.
    pub fn speed_for(&self, latency_ms: f64) -> f64 {
        1.0 / (latency_ms * self.config.multiplier)
    }

    pub fn pulse_speed<R: Rng>(&self, a: LatLng, b: LatLng, rng: &mut R) -> f64 {
        self.speed_for(self.simulate_latency(a, b, rng))
    }
}

impl Default for LatencyModel {
    fn default() -> Self {
        Self::new(LatencyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    const SF: LatLng = LatLng::new(37.7749, -122.4194);
    const LONDON: LatLng = LatLng::new(51.5074, -0.1278);

    #[test]
    fn distance_identity_and_symmetry() {
        assert_eq!(haversine_distance(SF, SF), 0.0);
        let ab = haversine_distance(SF, LONDON);
        let ba = haversine_distance(LONDON, SF);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn distance_bounded_by_half_circumference() {
        let max = PI * EARTH_RADIUS_KM;
        let antipodal = haversine_distance(LatLng::new(0.0, 0.0), LatLng::new(0.0, 180.0));
        assert!((antipodal - max).abs() < 1e-6);
        let poles = haversine_distance(LatLng::new(90.0, 0.0), LatLng::new(-90.0, 0.0));
        assert!(poles <= max + 1e-9);
        for lat in (-90..=90).step_by(30) {
            for lng in (-180..=180).step_by(45) {
                let d = haversine_distance(SF, LatLng::new(lat as f64, lng as f64));
                assert!((0.0..=max + 1e-9).contains(&d));
            }
        }
    }

    #[test]
    fn sf_to_london_matches_known_distance() {
        let d = haversine_distance(SF, LONDON);
        assert!((d - 8600.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn latency_has_base_floor_without_jitter() {
        let model = LatencyModel::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(model.simulate_latency(SF, SF, &mut rng), 40.0);
        assert!(model.simulate_latency(SF, LONDON, &mut rng) >= 40.0);
    }

    #[test]
    fn sf_to_london_latency_and_speed() {
        let model = LatencyModel::default();
        let mut rng = StdRng::seed_from_u64(1);
        let latency = model.simulate_latency(SF, LONDON, &mut rng);
        let expected = 40.0 + 0.9 * haversine_distance(SF, LONDON);
        assert!((latency - expected).abs() < 1e-9);
        assert!((latency - 7780.0).abs() < 60.0);

        let speed = model.speed_for(latency);
        assert!((speed - 1.0 / (latency * 0.0015)).abs() < 1e-15);
        // one loop of the SF-London arc takes about 11.7 seconds
        assert!((speed - 0.0857).abs() < 5e-4, "speed {speed}");
    }

    #[test]
    fn speed_positive_and_finite() {
        let model = LatencyModel::default();
        for latency in [1e-6, 1.0, 40.0, 18053.0, 1e9] {
            let s = model.speed_for(latency);
            assert!(s.is_finite() && s > 0.0, "latency {latency} gave {s}");
        }
    }

    #[test]
    fn jitter_stays_in_range_and_uses_rng() {
        let model = LatencyModel::new(LatencyConfig { jitter: true, ..LatencyConfig::default() });
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let latency = model.simulate_latency(SF, SF, &mut rng);
            assert!((40.0..45.0).contains(&latency));
        }

        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(
            model.simulate_latency(SF, LONDON, &mut a),
            model.simulate_latency(SF, LONDON, &mut b)
        );
    }
}
