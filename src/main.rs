use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use pulseglobe::land_points::{ClientSource, SAMPLE_SIZE};
use pulseglobe::report::connection_table;
use pulseglobe::settings::Settings;
use pulseglobe::terminal::Terminal;
use pulseglobe::{viz, ConnectionSet, Endpoint, GlobeConfig, ViewConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "pulseglobe")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "Terminal globe with latency-paced pulses between servers and clients", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the rotating globe
    Run {
        #[command(flatten)]
        model: ModelArgs,

        /// Animation step delay in seconds
        #[arg(short, long, default_value = "0.03")]
        time: f32,

        /// Globe rotation in radians per second
        #[arg(long)]
        spin: Option<f64>,

        /// Axial tilt in degrees
        #[arg(long)]
        tilt: Option<f64>,
    },

    /// Print distance, latency and pulse speed for every connection
    Table {
        #[command(flatten)]
        model: ModelArgs,
    },
}

#[derive(Args)]
struct ModelArgs {
    /// Land-points endpoint returning a JSON array of [lat, lng] pairs
    #[arg(short, long)]
    url: Option<String>,

    /// Sample clients from the built-in city list instead of fetching
    #[arg(short, long)]
    offline: bool,

    /// Random seed for reproducible pulse phases
    #[arg(short, long)]
    seed: Option<u64>,

    /// Samples per arc (minus one)
    #[arg(long)]
    segments: Option<usize>,

    /// Peak arc elevation above the globe surface
    #[arg(long)]
    height: Option<f64>,

    /// Add up to 5 ms of random jitter to each simulated latency
    #[arg(short, long)]
    jitter: bool,
}

/// Everything the views need, built once before any frame is drawn
struct Scene {
    endpoints: Vec<Endpoint>,
    connections: Option<ConnectionSet>,
    globe: GlobeConfig,
}

fn build_scene(model: &ModelArgs, settings: &Settings) -> anyhow::Result<Scene> {
    let mut globe = GlobeConfig {
        arc: settings.arcs,
        latency: settings.latency,
        ..GlobeConfig::default()
    };
    if let Some(segments) = model.segments {
        globe.arc.segments = segments;
    }
    if let Some(height) = model.height {
        globe.arc.height = height;
    }
    globe.latency.jitter |= model.jitter;
    globe.validate().context("invalid globe configuration")?;

    let source = if model.offline || settings.source.offline {
        ClientSource::Builtin { count: SAMPLE_SIZE }
    } else {
        ClientSource::Http {
            url: model.url.clone().unwrap_or_else(|| settings.source.url.clone()),
            timeout: Duration::from_secs(settings.source.timeout_secs),
        }
    };

    let mut rng = match model.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut endpoints = settings.server_endpoints().context("invalid server in settings")?;
    let connections = match source.load(&mut rng) {
        Ok(clients) => {
            info!("loaded {} clients", clients.len());
            endpoints.extend(clients);
            Some(ConnectionSet::new(&endpoints, &globe, &mut rng))
        }
        Err(e) => {
            error!("Failed to load land points: {e}");
            None
        }
    };

    Ok(Scene { endpoints, connections, globe })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = Settings::load();

    match cli.command {
        Commands::Run { model, time, spin, tilt } => {
            let scene = build_scene(&model, &settings)?;
            let defaults = ViewConfig::default();
            let view = ViewConfig {
                time_step: time.max(0.0),
                spin: spin.or(settings.view.spin).unwrap_or(defaults.spin),
                tilt_deg: tilt.or(settings.view.tilt_deg).unwrap_or(defaults.tilt_deg),
            };

            let mut term = Terminal::new(true)?;
            viz::globe::run(&mut term, scene.connections, &scene.endpoints, &scene.globe, &view)?;
        }
        Commands::Table { model } => {
            let scene = build_scene(&model, &settings)?;
            let connections = scene
                .connections
                .context("no client coordinates; nothing to tabulate")?;
            print!("{}", connection_table(&connections));
        }
    }

    Ok(())
}
