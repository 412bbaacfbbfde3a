pub mod config;
pub mod geocode;
pub mod geodesic;
pub mod io;
pub mod map;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use config::SessionConfig;
use geocode::Gazetteer;
use log::{error, info, warn};
use map::{LookupOutcome, MapSession};

use crate::{io::geojson_output::make_geojson, io::svg_output::make_svg};


#[derive(Parser)]
pub struct Args {
    /// Path to the session config.
    pub config: PathBuf,
}


fn main() {
    if let Err(_) = std::env::var("RUST_LOG") {
        unsafe { std::env::set_var("RUST_LOG", "info") };
    }

    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        error!("{err:#}");
        std::process::exit(1);
    }
}


fn run(args: Args) -> Result<()> {
    let file = std::fs::File::open(&args.config)
        .with_context(|| format!("Could not open {:?}", args.config))?;
    let config: SessionConfig = serde_norway::from_reader(file)?;

    ensure!(config.radius_scale.is_finite() && config.radius_scale >= 0.0, "radius_scale should be a non-negative number");

    if !config.outdir.exists() {
        std::fs::create_dir_all(&config.outdir)?;
    }
    ensure!(config.outdir.is_dir(), "{:?} should be a directory", config.outdir);

    let name = &config.name;
    let mut session = MapSession::new(&config);
    let geocoder = Gazetteer::new(config.gazetteer);

    for (i, request) in config.requests.iter().enumerate() {
        match session.find(&geocoder, &request.address, request.radius)? {
            LookupOutcome::Shown(feature) => {
                let json = make_geojson(&feature)?;
                println!("{json}");

                let output_path = config.outdir.join(format!("{name}-{i:02}.geojson"));
                std::fs::write(output_path, json)?;

                info!("Request {i:02} - produced the GeoJSON");
            },
            LookupOutcome::Failed(status) => {
                info!("Request {i:02} - lookup failed: {status}");
            },
            // Requests run one at a time here, so nothing supersedes them.
            LookupOutcome::Stale => {
                warn!("Request {i:02} - superseded");
            },
        }
    }

    let document = make_svg(session.view())?;
    let output_path = config.outdir.join(format!("{name}.svg"));
    svg::save(output_path, &document)?;

    info!("Produced the overview SVG");

    Ok(())
}
