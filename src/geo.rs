//! Geographic endpoints and their projection onto the render sphere

use crate::error::{Error, Result};
use glam::DVec3;
use serde::Deserialize;

/// Radius of the globe in render-space units
pub const DEFAULT_RADIUS: f64 = 10.0;

/// Latitude/longitude pair in degrees
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build a coordinate from untrusted input, rejecting anything off the map.
    pub fn checked(lat: f64, lng: f64) -> Result<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if valid {
            Ok(Self { lat, lng })
        } else {
            Err(Error::InvalidCoordinate { lat, lng })
        }
    }
}

/// A named point on the map, either a server or a client
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
    pub name: String,
    pub latlng: LatLng,
    pub is_server: bool,
}

impl Endpoint {
    pub fn server(name: impl Into<String>, latlng: LatLng) -> Self {
        Self { name: name.into(), latlng, is_server: true }
    }

    pub fn client(name: impl Into<String>, latlng: LatLng) -> Self {
        Self { name: name.into(), latlng, is_server: false }
    }
}

/// Project a coordinate onto a sphere of `radius`.
///
/// The axis convention puts the north pole at +Y and longitude -180 on the
/// +X side, matching an equirectangular texture wrapped with its seam at the
/// antimeridian.
pub fn project(latlng: LatLng, radius: f64) -> DVec3 {
    let phi = (90.0 - latlng.lat).to_radians();
    let theta = (latlng.lng + 180.0).to_radians();
    DVec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn projection_stays_on_sphere() {
        for lat in (-90..=90).step_by(15) {
            for lng in (-180..=180).step_by(30) {
                let p = project(LatLng::new(lat as f64, lng as f64), DEFAULT_RADIUS);
                assert!((p.length() - DEFAULT_RADIUS).abs() < EPS, "off sphere at {lat},{lng}");
            }
        }
    }

    #[test]
    fn poles_map_to_y_axis() {
        let north = project(LatLng::new(90.0, 37.0), 10.0);
        assert!(north.abs_diff_eq(DVec3::new(0.0, 10.0, 0.0), EPS));
        let south = project(LatLng::new(-90.0, -120.0), 10.0);
        assert!(south.abs_diff_eq(DVec3::new(0.0, -10.0, 0.0), EPS));
    }

    #[test]
    fn equator_axis_convention() {
        // lng 0 => theta = pi => x = +R
        let p = project(LatLng::new(0.0, 0.0), 2.0);
        assert!(p.abs_diff_eq(DVec3::new(2.0, 0.0, 0.0), EPS));
        // lng 90 => theta = 3pi/2 => z = -R
        let p = project(LatLng::new(0.0, 90.0), 2.0);
        assert!(p.abs_diff_eq(DVec3::new(0.0, 0.0, -2.0), EPS));
    }

    #[test]
    fn checked_rejects_out_of_range() {
        assert!(LatLng::checked(45.0, 120.0).is_ok());
        assert!(LatLng::checked(90.0, -180.0).is_ok());
        assert!(matches!(
            LatLng::checked(91.0, 0.0),
            Err(Error::InvalidCoordinate { .. })
        ));
        assert!(LatLng::checked(0.0, 180.5).is_err());
        assert!(LatLng::checked(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn endpoint_constructors_set_role() {
        let s = Endpoint::server("SF Server", LatLng::new(37.7749, -122.4194));
        let c = Endpoint::client("Client 1", LatLng::new(51.5, -0.12));
        assert!(s.is_server);
        assert!(!c.is_server);
        assert_eq!(c.name, "Client 1");
    }
}
