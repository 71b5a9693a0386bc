//! Plain-text summary of a connection set

use crate::connections::ConnectionSet;
use std::fmt::Write;

/// One line per connection: endpoints, distance, simulated latency, pulse speed and loop time.
pub fn connection_table(set: &ConnectionSet) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<18} {:<26} {:>10} {:>12} {:>12} {:>9}",
        "SERVER", "CLIENT", "DIST km", "LATENCY ms", "SPEED /s", "LOOP s"
    );
    for c in set.connections() {
        let _ = writeln!(
            out,
            "{:<18} {:<26} {:>10.0} {:>12.1} {:>12.3e} {:>9.1}",
            c.server.name,
            c.client.name,
            c.distance_km,
            c.latency_ms,
            c.pulse().speed(),
            c.pulse().period()
        );
    }
    out
}
