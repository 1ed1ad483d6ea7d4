use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use trackcoords_core::{entities::MapPoint, usecases};

use crate::{config::Config, gateways};

#[derive(Parser)]
#[command(name = "trackcoords", version, about)]
pub struct Args {
    /// Configuration file (default: trackcoords.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server
    Serve,
    /// Extract the coordinates of a TCX or GPX file as CSV
    Extract {
        /// Track file
        file: PathBuf,
        /// Write the CSV into this file instead of stdout
        #[arg(short, long, value_name = "CSV")]
        output: Option<PathBuf>,
    },
    /// Look up the coordinates of an address
    Geocode { address: String },
}

pub fn run(args: Args) -> Result<()> {
    let Args {
        config,
        enable_cors,
        command,
    } = args;
    match command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let cfg = Config::try_load_from_file_or_default(config)?;
            serve(cfg, enable_cors)
        }
        Command::Extract { file, output } => {
            let csv = extract_csv(&file)?;
            match output {
                Some(output) => fs::write(&output, csv)
                    .with_context(|| format!("Unable to write {}", output.display()))?,
                None => io::stdout().write_all(csv.as_bytes())?,
            }
            Ok(())
        }
        Command::Geocode { address } => {
            let cfg = Config::try_load_from_file_or_default(config)?;
            let geo_gw = gateways::geocoding_gateway(&cfg.geocoding);
            let pos = usecases::geocode_address(&*geo_gw, &address)?;
            println!("{}", geocode_output(pos));
            Ok(())
        }
    }
}

fn serve(cfg: Config, enable_cors: bool) -> Result<()> {
    let Config {
        webserver,
        geocoding,
    } = cfg;
    let geo_gw = gateways::geocoding_gateway(&geocoding);
    let web_cfg = trackcoords_webserver::Cfg {
        max_upload_size: webserver.max_upload_size,
    };
    let enable_cors = enable_cors || webserver.enable_cors;
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(trackcoords_webserver::run(
        web_cfg,
        enable_cors,
        geo_gw,
        env!("CARGO_PKG_VERSION"),
    ));
    Ok(())
}

fn extract_csv(file: &Path) -> Result<String> {
    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let content = fs::read(file).with_context(|| format!("Unable to read {}", file.display()))?;
    let coordinates = usecases::extract_coordinates_from_file(file_name, &content)?;
    log::info!(
        "Extracted {} coordinates from {}",
        coordinates.len(),
        file.display()
    );
    Ok(usecases::export_coordinates_csv(&coordinates)?)
}

fn geocode_output(pos: Option<MapPoint>) -> String {
    match pos {
        Some(pos) => pos.to_string(),
        None => "Address not found".to_string(),
    }
}
