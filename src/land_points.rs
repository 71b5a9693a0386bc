//! Where endpoints come from
//!
//! Servers are configured locally. Clients are either fetched from an HTTP
//! service that returns a JSON array of `[lat, lng]` pairs, or sampled from a
//! built-in list of major cities when running offline.

use crate::error::Result;
use crate::geo::{Endpoint, LatLng};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

pub const DEFAULT_URL: &str = "http://localhost:8080/land-points";

/// Number of clients the land-points service hands out per request
pub const SAMPLE_SIZE: usize = 5;

// ============================================================================
// Built-in data
// ============================================================================

static LAND_POINTS: &[(&str, f64, f64)] = &[
    ("Los Angeles", 34.05, -118.24),
    ("Paris", 48.85, 2.35),
    ("Sydney", -33.87, 151.21),
    ("New York", 40.71, -74.00),
    ("Tokyo", 35.68, 139.69),
    ("Sao Paulo", -23.55, -46.63),
    ("Moscow", 55.75, 37.61),
    ("Mexico City", 19.43, -99.13),
    ("Delhi", 28.61, 77.20),
    ("Nairobi", -1.29, 36.82),
    ("Shanghai", 31.23, 121.47),
    ("Berlin", 52.52, 13.40),
    ("London", 51.50, -0.12),
    ("San Francisco", 37.77, -122.42),
];

/// The two servers every client connects to unless settings say otherwise
pub fn default_servers() -> Vec<Endpoint> {
    vec![
        Endpoint::server("SF Server", LatLng::new(37.7749, -122.4194)),
        Endpoint::server("London Server", LatLng::new(51.5074, -0.1278)),
    ]
}

// ============================================================================
// Client Source
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum ClientSource {
    Http { url: String, timeout: Duration },
    Builtin { count: usize },
}

impl ClientSource {
    /// Produce the full client list or fail as a whole; never a partial list.
    pub fn load<R: Rng>(&self, rng: &mut R) -> Result<Vec<Endpoint>> {
        match self {
            ClientSource::Http { url, timeout } => fetch_clients(url, *timeout),
            ClientSource::Builtin { count } => Ok(sample_clients(rng, *count)),
        }
    }
}

/// GET `url` and decode its body as client coordinates.
pub fn fetch_clients(url: &str, timeout: Duration) -> Result<Vec<Endpoint>> {
    info!("fetching land points from {url}");
    let body = ureq::get(url).timeout(timeout).call()?.into_string()?;
    debug!("land points response: {} bytes", body.len());
    parse_clients(&body)
}

/// Decode `[[lat, lng], ...]` into clients named `Client 1`, `Client 2`, ...
pub fn parse_clients(body: &str) -> Result<Vec<Endpoint>> {
    let pairs: Vec<[f64; 2]> = serde_json::from_str(body)?;
    pairs
        .into_iter()
        .enumerate()
        .map(|(i, [lat, lng])| {
            let latlng = LatLng::checked(lat, lng)?;
            Ok(Endpoint::client(format!("Client {}", i + 1), latlng))
        })
        .collect()
}

/// Pick `count` distinct cities from the built-in list.
pub fn sample_clients<R: Rng>(rng: &mut R, count: usize) -> Vec<Endpoint> {
    LAND_POINTS
        .choose_multiple(rng, count)
        .enumerate()
        .map(|(i, &(city, lat, lng))| {
            Endpoint::client(format!("Client {} ({city})", i + 1), LatLng::new(lat, lng))
        })
        .collect()
}
