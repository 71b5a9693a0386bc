use crate::config::{ArcConfig, LatencyConfig};
use crate::error::Result;
use crate::geo::{Endpoint, LatLng};
use crate::land_points::{default_servers, DEFAULT_URL};
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub servers: Vec<ServerSettings>, // empty = built-in SF + London
    #[serde(default)]
    pub arcs: ArcConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub view: ViewSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    pub url: String,
    pub timeout_secs: u64,
    pub offline: bool,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: 5,
            offline: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ViewSettings {
    pub spin: Option<f64>,     // radians per second
    pub tilt_deg: Option<f64>, // axial tilt
}

impl Settings {
    /// Load from the user config dir, falling back to defaults on any problem.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pulseglobe")
            .join("config.toml")
    }

    /// Configured servers, validated, or the defaults when none are listed.
    pub fn server_endpoints(&self) -> Result<Vec<Endpoint>> {
        if self.servers.is_empty() {
            return Ok(default_servers());
        }
        self.servers
            .iter()
            .map(|s| Ok(Endpoint::server(s.name.clone(), LatLng::checked(s.lat, s.lng)?)))
            .collect()
    }
}
