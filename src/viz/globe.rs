//! Rotating braille globe with latency pulses travelling along server-client arcs

use super::braille::BrailleCanvas;
use super::VizState;
use crate::colors::Layer;
use crate::config::{GlobeConfig, ViewConfig};
use crate::connections::{ConnectionSet, PulseSink};
use crate::geo::{project, Endpoint, LatLng};
use crate::help::{render_help_overlay, GLOBE_HELP};
use crate::terminal::Terminal;
use crossterm::event::KeyCode;
use crossterm::style::Color;
use glam::{DMat3, DVec3};
use log::info;
use std::f64::consts::FRAC_PI_2;
use std::io;
use std::time::Instant;

// Fraction of the smaller canvas dimension taken by the outermost arc peak
const FILL: f64 = 0.48;
const GRID_STEP_DEG: i32 = 30;
const MIN_ZOOM: f64 = 0.3;
const MAX_ZOOM: f64 = 3.0;

/// Orthographic view of the globe from +Z.
///
/// The globe spins about its own axis (`yaw`), is leaned by the axial
/// `tilt`, then the whole scene is pitched toward the viewer.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub yaw: f64,
    pub tilt: f64,
    pub pitch: f64,
    pub zoom: f64,
    radius: f64,
    scale: f64, // dots per world unit
    center: (f64, f64),
}

impl Camera {
    pub fn new(radius: f64, tilt_deg: f64) -> Self {
        Self {
            yaw: 0.0,
            tilt: tilt_deg.to_radians(),
            pitch: 0.0,
            zoom: 1.0,
            radius,
            scale: 1.0,
            center: (0.0, 0.0),
        }
    }

    /// Fit a sphere of `extent` world units into a canvas of the given dot size.
    pub fn fit(&mut self, width: usize, height: usize, extent: f64) {
        self.center = (width as f64 / 2.0, height as f64 / 2.0);
        self.scale = (width.min(height) as f64 * FILL / extent) * self.zoom;
    }

    fn rotation(&self) -> DMat3 {
        DMat3::from_rotation_x(self.pitch)
            * DMat3::from_rotation_z(self.tilt)
            * DMat3::from_rotation_y(self.yaw)
    }

    /// View-space position of a world point
    pub fn view(&self, p: DVec3) -> DVec3 {
        self.rotation() * p
    }

    /// Dot coordinates of `p`, or `None` when the globe hides it.
    pub fn to_screen(&self, p: DVec3) -> Option<(i32, i32)> {
        let v = self.view(p);
        let behind = v.z < 0.0 && v.x * v.x + v.y * v.y < self.radius * self.radius;
        if behind {
            return None;
        }
        Some((
            (self.center.0 + v.x * self.scale).round() as i32,
            (self.center.1 - v.y * self.scale).round() as i32,
        ))
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.pitch = (self.pitch + 0.05).min(FRAC_PI_2),
            KeyCode::Down | KeyCode::Char('j') => self.pitch = (self.pitch - 0.05).max(-FRAC_PI_2),
            KeyCode::Char('+') | KeyCode::Char('=') => self.zoom = (self.zoom * 1.2).min(MAX_ZOOM),
            KeyCode::Char('-') | KeyCode::Char('_') => self.zoom = (self.zoom / 1.2).max(MIN_ZOOM),
            KeyCode::Char('0') => self.zoom = 1.0,
            _ => return false,
        }
        true
    }
}

/// Draws pulse positions as they come out of [`ConnectionSet::update`].
struct PulseMarkers<'a> {
    canvas: &'a mut BrailleCanvas,
    camera: &'a Camera,
}

impl PulseSink for PulseMarkers<'_> {
    fn place_pulse(&mut self, _index: usize, position: DVec3) {
        if let Some(dot) = self.camera.to_screen(position) {
            self.canvas.blob(dot, 1, Layer::Pulse);
        }
    }
}

/// Latitude/longitude lines plus the silhouette of the sphere
fn draw_globe(canvas: &mut BrailleCanvas, camera: &Camera, radius: f64) {
    for lat in (-90 + GRID_STEP_DEG..90).step_by(GRID_STEP_DEG as usize) {
        for lng in -180..180 {
            if let Some((x, y)) = camera.to_screen(project(LatLng::new(lat as f64, lng as f64), radius)) {
                canvas.plot(x, y, Layer::Grid);
            }
        }
    }
    for lng in (-180..180).step_by(GRID_STEP_DEG as usize) {
        for lat in -90..=90 {
            if let Some((x, y)) = camera.to_screen(project(LatLng::new(lat as f64, lng as f64), radius)) {
                canvas.plot(x, y, Layer::Grid);
            }
        }
    }

    let (cx, cy) = camera.center;
    let r = radius * camera.scale;
    let steps = (r * 8.0).max(32.0) as usize;
    for i in 0..steps {
        let a = i as f64 / steps as f64 * std::f64::consts::TAU;
        canvas.plot((cx + r * a.cos()).round() as i32, (cy + r * a.sin()).round() as i32, Layer::Limb);
    }
}

fn draw_arcs(canvas: &mut BrailleCanvas, camera: &Camera, connections: &ConnectionSet) {
    for path in connections.paths() {
        let mut prev: Option<(i32, i32)> = None;
        for &p in path.points() {
            let cur = camera.to_screen(p);
            if let (Some(a), Some(b)) = (prev, cur) {
                canvas.line(a, b, Layer::Arc);
            }
            prev = cur;
        }
    }
}

fn draw_endpoints(canvas: &mut BrailleCanvas, camera: &Camera, endpoints: &[Endpoint], radius: f64) {
    for endpoint in endpoints {
        if let Some(dot) = camera.to_screen(project(endpoint.latlng, radius)) {
            if endpoint.is_server {
                canvas.blob(dot, 2, Layer::Server);
            } else {
                canvas.blob(dot, 1, Layer::Client);
            }
        }
    }
}

fn status_line(connections: Option<&ConnectionSet>, state: &VizState) -> String {
    let mut status = match connections {
        Some(set) => format!(" {} connections", set.len()),
        None => " no connections (client fetch failed)".to_string(),
    };
    if state.paused {
        status.push_str(" | PAUSED");
    }
    status.push_str(" | ? help ");
    status
}

/// Run the globe until the user quits.
///
/// `connections` is `None` when the client list could not be loaded; the
/// globe and the known endpoints are still drawn.
pub fn run(
    term: &mut Terminal,
    mut connections: Option<ConnectionSet>,
    endpoints: &[Endpoint],
    globe: &GlobeConfig,
    view: &ViewConfig,
) -> io::Result<()> {
    let mut state = VizState::new(view.time_step);
    let mut camera = Camera::new(globe.radius, view.tilt_deg);
    let mut spin = view.spin;
    let extent = globe.radius + globe.arc.height.max(0.0);

    let (mut prev_w, mut prev_h) = term.size();
    let mut canvas = BrailleCanvas::new(prev_w, prev_h);
    let mut last_frame = Instant::now();

    info!(
        "globe view: {} connections, spin {:.2} rad/s",
        connections.as_ref().map_or(0, ConnectionSet::len),
        spin
    );

    loop {
        let (width, height) = crossterm::terminal::size().unwrap_or(term.size());
        if width != prev_w || height != prev_h {
            term.resize(width, height);
            term.clear_screen()?;
            canvas = BrailleCanvas::new(width, height);
            prev_w = width;
            prev_h = height;
        }

        while let Some((code, mods)) = term.check_key()? {
            if state.handle_key(code, mods) {
                return Ok(());
            }
            if !camera.handle_key(code) {
                match code {
                    KeyCode::Left | KeyCode::Char('h') => spin -= 0.05,
                    KeyCode::Right | KeyCode::Char('l') => spin += 0.05,
                    _ => {}
                }
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        if state.paused {
            term.sleep(0.1);
            continue;
        }

        camera.yaw = (camera.yaw + spin * dt).rem_euclid(std::f64::consts::TAU);
        camera.fit(canvas.width(), canvas.height(), extent);

        canvas.clear();
        draw_globe(&mut canvas, &camera, globe.radius);
        if let Some(set) = connections.as_ref() {
            draw_arcs(&mut canvas, &camera, set);
        }
        draw_endpoints(&mut canvas, &camera, endpoints, globe.radius);
        if let Some(set) = connections.as_mut() {
            let mut markers = PulseMarkers { canvas: &mut canvas, camera: &camera };
            set.update(dt, &mut markers);
        }

        term.clear();
        canvas.blit(term, state.colors.scheme);
        term.set_str(0, height as i32 - 1, &status_line(connections.as_ref(), &state), Some(Color::DarkGrey), false);
        if state.show_help {
            render_help_overlay(term, GLOBE_HELP);
        }
        term.present()?;
        term.sleep(state.speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn camera() -> Camera {
        let mut cam = Camera::new(10.0, 0.0);
        cam.fit(200, 200, 13.0);
        cam
    }

    #[test]
    fn front_point_visible_back_point_hidden() {
        let cam = camera();
        assert!(cam.to_screen(DVec3::new(0.0, 0.0, 10.0)).is_some());
        assert!(cam.to_screen(DVec3::new(0.0, 0.0, -10.0)).is_none());
    }

    #[test]
    fn raised_point_behind_limb_is_visible() {
        let cam = camera();
        // Behind the globe but outside its silhouette
        assert!(cam.to_screen(DVec3::new(12.0, 0.0, -1.0)).is_some());
    }

    #[test]
    fn north_pole_is_above_center() {
        let cam = camera();
        let (x, y) = cam.to_screen(DVec3::new(0.0, 10.0, 0.0)).unwrap();
        assert_eq!(x, 100);
        assert!(y < 100);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = camera();
        for _ in 0..20 {
            cam.handle_key(KeyCode::Char('+'));
        }
        assert_eq!(cam.zoom, MAX_ZOOM);
        cam.handle_key(KeyCode::Char('0'));
        assert_eq!(cam.zoom, 1.0);
        for _ in 0..20 {
            cam.handle_key(KeyCode::Char('-'));
        }
        assert_eq!(cam.zoom, MIN_ZOOM);
    }

    #[test]
    fn pulse_markers_draw_visible_pulses() {
        let endpoints = vec![
            Endpoint::server("S", LatLng::new(0.0, 0.0)),
            Endpoint::client("C", LatLng::new(10.0, 20.0)),
        ];
        let mut set = ConnectionSet::new(&endpoints, &GlobeConfig::default(), &mut StdRng::seed_from_u64(1));
        let cam = camera();
        let mut canvas = BrailleCanvas::new(100, 50);
        {
            let mut markers = PulseMarkers { canvas: &mut canvas, camera: &cam };
            set.update(0.0, &mut markers);
        }
        let pulse = set.positions()[0];
        let visible = cam.to_screen(pulse).is_some();
        let lit = (0..50).any(|row| (0..100).any(|col| matches!(canvas.cell(col, row), Some((_, Layer::Pulse)))));
        assert_eq!(lit, visible);
    }

    #[test]
    fn status_reports_missing_connections() {
        let state = VizState::new(0.03);
        assert!(status_line(None, &state).contains("no connections"));
        let set = ConnectionSet::default();
        assert!(status_line(Some(&set), &state).contains("0 connections"));
    }
}
