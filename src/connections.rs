//! Server-to-client connections: one arc and one pulse per pair

use crate::arc::ArcPath;
use crate::config::GlobeConfig;
use crate::geo::{project, Endpoint};
use crate::latency::{haversine_distance, LatencyModel};
use crate::pulse::{position_at, PulseState};
use glam::DVec3;
use log::debug;
use rand::Rng;

/// Receives pulse positions each frame.
///
/// `index` is the connection's position in [`ConnectionSet::connections`],
/// which is stable for the life of the set.
pub trait PulseSink {
    fn place_pulse(&mut self, index: usize, position: DVec3);
}

impl<F: FnMut(usize, DVec3)> PulseSink for F {
    fn place_pulse(&mut self, index: usize, position: DVec3) {
        self(index, position)
    }
}

#[derive(Clone, Debug)]
pub struct Connection {
    pub server: Endpoint,
    pub client: Endpoint,
    pub distance_km: f64,
    pub latency_ms: f64,
    path: ArcPath,
    pulse: PulseState,
}

impl Connection {
    pub fn path(&self) -> &ArcPath {
        &self.path
    }

    pub fn pulse(&self) -> &PulseState {
        &self.pulse
    }

    pub fn pulse_position(&self) -> DVec3 {
        position_at(&self.path, self.pulse.phase())
    }
}

/// Every server paired with every client, built once and then only animated.
#[derive(Clone, Debug, Default)]
pub struct ConnectionSet {
    connections: Vec<Connection>,
}

impl ConnectionSet {
    /// Pair each server with each client, servers in the outer loop, both in input order.
    pub fn new<R: Rng>(endpoints: &[Endpoint], config: &GlobeConfig, rng: &mut R) -> Self {
        let (servers, clients): (Vec<&Endpoint>, Vec<&Endpoint>) =
            endpoints.iter().partition(|e| e.is_server);
        let model = LatencyModel::new(config.latency);

        let mut connections = Vec::with_capacity(servers.len() * clients.len());
        for server in &servers {
            let start = project(server.latlng, config.radius);
            for client in &clients {
                let end = project(client.latlng, config.radius);
                let path = ArcPath::build(start, end, config.radius, &config.arc);

                let distance_km = haversine_distance(server.latlng, client.latlng);
                let latency_ms = model.simulate_latency(server.latlng, client.latlng, rng);
                let pulse = PulseState::random(model.speed_for(latency_ms), rng);

                debug!(
                    "{} -> {}: {:.0} km, {:.1} ms, period {:.2}s",
                    server.name,
                    client.name,
                    distance_km,
                    latency_ms,
                    pulse.period()
                );

                connections.push(Connection {
                    server: (*server).clone(),
                    client: (*client).clone(),
                    distance_km,
                    latency_ms,
                    path,
                    pulse,
                });
            }
        }

        debug!(
            "built {} connections from {} servers and {} clients",
            connections.len(),
            servers.len(),
            clients.len()
        );
        Self { connections }
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Static arc geometry, in connection order
    pub fn paths(&self) -> impl Iterator<Item = &ArcPath> + '_ {
        self.connections.iter().map(|c| &c.path)
    }

    /// Current pulse positions without advancing time
    pub fn positions(&self) -> Vec<DVec3> {
        self.connections.iter().map(Connection::pulse_position).collect()
    }

    /// Advance every pulse by `dt` seconds and report its new position.
    pub fn update<S: PulseSink + ?Sized>(&mut self, dt: f64, sink: &mut S) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        for (index, connection) in self.connections.iter_mut().enumerate() {
            connection.pulse.advance(dt);
            sink.place_pulse(index, position_at(&connection.path, connection.pulse.phase()));
        }
    }
}
