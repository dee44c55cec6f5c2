//! Object Shapes CLI
//!
//! Usage:
//!   object-shapes --list
//!   object-shapes [OPTIONS] <SHAPE>
//!
//! Options:
//!   -l, --list             List available shapes
//!   -a, --at <X,Y>         Anchor point (default 0,0)
//!   -s, --scale <S>        Uniform scale (default from config)
//!   -f, --fit <SIZE>       Scale so the larger side equals SIZE
//!       --center           Treat --at as the shape center
//!   -c, --config <FILE>    Placement config (TOML format)
//!   -v, --verbose          Debug logging on stderr
//!   -h, --help             Print help

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use object_shapes::placement::{centered_anchor, fit_scale};
use object_shapes::{builtin, PlacementConfig, PlacementPipeline, Point};

#[derive(Parser)]
#[command(name = "object-shapes")]
#[command(about = "Place predefined composite shapes and print the resulting elements")]
struct Cli {
    /// Shape to place (see --list)
    shape: Option<String>,

    /// List available shapes
    #[arg(short, long)]
    list: bool,

    /// Anchor point as X,Y
    #[arg(short, long, value_parser = parse_point, default_value = "0,0")]
    at: Point,

    /// Uniform scale factor
    #[arg(short, long)]
    scale: Option<f64>,

    /// Scale so the shape's larger side equals SIZE (overrides --scale)
    #[arg(short, long, value_name = "SIZE")]
    fit: Option<f64>,

    /// Treat --at as the center of the placed shape
    #[arg(long)]
    center: bool,

    /// Placement config file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok(Point::new(x, y))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = match builtin() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.list {
        for name in catalog.names() {
            println!("{}", name);
        }
        return;
    }

    let Some(name) = cli.shape.as_deref() else {
        eprintln!("Error: no shape given. Available shapes:");
        for name in catalog.names() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    };

    let config = match &cli.config {
        Some(path) => match PlacementConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => PlacementConfig::default(),
    };

    let template = match catalog.get(name) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let scale = match cli.fit {
        Some(size) => fit_scale(template, size),
        None => Ok(cli.scale.unwrap_or(config.default_scale)),
    };
    let anchor = scale.and_then(|scale| {
        let anchor = if cli.center {
            centered_anchor(template, cli.at, scale)?
        } else {
            cli.at
        };
        Ok((anchor, scale))
    });

    let pipeline = PlacementPipeline::new(config.id_strategy.build(&config.id_prefix))
        .with_max_attempts(config.max_id_attempts);
    let mut scene = config.new_scene();

    let placed = anchor.and_then(|(anchor, scale)| {
        info!(shape = name, x = anchor.x, y = anchor.y, scale, "placing shape");
        pipeline.place_template(template, anchor, scale, &mut scene)
    });

    match placed {
        Ok(_) => match serde_json::to_string_pretty(scene.elements()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
