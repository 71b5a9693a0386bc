//! Latency pulses on a rotating globe.
//!
//! The geometry core (`geo`, `arc`, `latency`, `pulse`, `connections`) turns
//! an endpoint list into arcs and per-frame pulse positions. Everything else
//! feeds it endpoints or draws its output in a terminal.

pub mod arc;
pub mod colors;
pub mod config;
pub mod connections;
pub mod error;
pub mod geo;
pub mod help;
pub mod land_points;
pub mod latency;
pub mod pulse;
pub mod report;
pub mod settings;
pub mod terminal;
pub mod viz;

pub use arc::ArcPath;
pub use config::{ArcConfig, GlobeConfig, LatencyConfig, ViewConfig};
pub use connections::{Connection, ConnectionSet, PulseSink};
pub use error::{Error, Result};
pub use geo::{project, Endpoint, LatLng, DEFAULT_RADIUS};
pub use latency::{haversine_distance, LatencyModel, EARTH_RADIUS_KM};
pub use pulse::{position_at, PulseState};
