use std::path::PathBuf;

use clap::Parser;
use log::info;

mod attract;
mod config;
mod emulator;
mod error;
mod font;
mod input;
mod leds;
mod scene;
mod screenshot;
mod video;

use config::{Config, ConfigError};

/// Laserdisc overlay compositor with an attract-mode scoreboard.
#[derive(Parser, Debug)]
#[command(name = "lasergate", version)]
struct Args {
    /// Config file (default: <config dir>/lasergate/lasergate.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,

    #[arg(long)]
    fullscreen: bool,

    /// Start with the scoreboard hidden
    #[arg(long)]
    no_scoreboard: bool,

    /// Use the Thayer's Quest scoreboard layout
    #[arg(long)]
    thayers: bool,

    #[arg(long)]
    no_crosshair: bool,

    #[arg(long)]
    screenshot_dir: Option<PathBuf>,

    /// Write the effective config back to the config file and exit
    #[arg(long)]
    save_config: bool,
}

impl Args {
    /// Command-line flags win over the file.
    fn apply(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.video.width = width;
        }
        if let Some(height) = self.height {
            config.video.height = height;
        }
        if self.fullscreen {
            config.video.fullscreen = true;
        }
        if self.no_scoreboard {
            config.scoreboard.enabled = false;
        }
        if self.thayers {
            config.scoreboard.thayers = true;
        }
        if self.no_crosshair {
            config.hud.crosshair = false;
        }
        if let Some(dir) = &self.screenshot_dir {
            config.screenshot_dir = Some(dir.clone());
        }
    }
}

fn load_config(args: &Args) -> Result<(Config, Option<PathBuf>), ConfigError> {
    let path = args.config.clone().or_else(Config::default_path);
    let mut config = match &path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    args.apply(&mut config);
    Ok((config, path))
}

fn main() {
    let args = Args::parse();

    let (config, path) = load_config(&args).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    if args.save_config {
        let Some(path) = path else {
            eprintln!("No config directory on this platform; pass --config");
            std::process::exit(1);
        };
        if let Err(e) = config.save(&path) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        info!("config written to {}", path.display());
        return;
    }

    let key_map = input::default_key_map();
    if let Err(e) = emulator::run(&config, &key_map) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
