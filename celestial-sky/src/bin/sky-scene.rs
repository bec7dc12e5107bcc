use anyhow::Context;
use celestial_sky::{
    compute_scene, Catalog, NarrationRequest, ObserverMoment, Plottable, Scene, SceneConfig,
    DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG,
};
use chrono::{Timelike, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "sky-scene")]
#[command(about = "Compute what is above the horizon for a date, time and place")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Scene configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Replace the built-in star catalog with a JSON catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct MomentArgs {
    /// Date as YYYY-MM-DD (default: today, UTC)
    #[arg(long)]
    date: Option<String>,
    /// Clock time as HH:MM, read as UT (default: now)
    #[arg(long)]
    time: Option<String>,
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_LATITUDE_DEG)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_LONGITUDE_DEG)]
    lon: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full scene
    Scene {
        #[command(flatten)]
        moment: MomentArgs,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Print local sidereal time
    Lst {
        #[command(flatten)]
        moment: MomentArgs,
    },
    /// Print the narration prompts for a place
    Prompt {
        #[command(flatten)]
        moment: MomentArgs,
        /// Human-readable place name
        #[arg(long)]
        location_name: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Scene { moment, format } => {
            let moment = moment.resolve()?;
            let config = load_config(cli.config.as_deref())?;
            let catalog = load_catalog(cli.catalog.as_deref())?;

            let scene = compute_scene(&moment, &catalog, &config)
                .with_context(|| format!("Failed to compute scene for {}", moment))?;

            match format {
                OutputFormat::Table => print_table(&scene),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&scene)?),
            }
        }
        Commands::Lst { moment } => {
            let moment = moment.resolve()?;
            let lst = moment.local_sidereal_time()?;
            println!("{}", moment);
            println!("{} ({:.6} h)", lst, lst.hours());
        }
        Commands::Prompt {
            moment,
            location_name,
        } => {
            let request = NarrationRequest::new(moment.resolve()?, location_name);
            println!("[system]\n{}\n", request.system_prompt());
            println!("[user]\n{}", request.user_prompt());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

impl MomentArgs {
    fn resolve(self) -> anyhow::Result<ObserverMoment> {
        let now = Utc::now();
        let date = self
            .date
            .unwrap_or_else(|| now.date_naive().format("%Y-%m-%d").to_string());
        let time = self
            .time
            .unwrap_or_else(|| format!("{:02}:{:02}", now.hour(), now.minute()));

        let moment = ObserverMoment::parse(&date, &time, self.lat, self.lon)
            .context("Invalid observer input")?;
        debug!(%moment, "resolved observer");
        Ok(moment)
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SceneConfig> {
    let Some(path) = path else {
        return Ok(SceneConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = SceneConfig::from_json_str(&json)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    info!(path = %path.display(), "loaded scene configuration");
    Ok(config)
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Arc<Catalog>> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_json_str(&json)
        .with_context(|| format!("Invalid catalog {}", path.display()))?;
    info!(
        path = %path.display(),
        stars = catalog.stars().len(),
        constellations = catalog.constellations().len(),
        "loaded catalog"
    );
    Ok(Arc::new(catalog))
}

fn print_table(scene: &Scene) {
    println!("{}", scene.moment);
    println!("LST {:.4} h\n", scene.lst_hours);

    println!("{:<16} {:>7} {:>7} {:>3} {:>7} {:>7}", "Object", "Alt°", "Az°", "", "x", "y");
    for object in scene.visible_objects() {
        let h = object.horizontal();
        let Some(p) = object.projected() else {
            continue;
        };
        println!(
            "{:<16} {:>7.2} {:>7.2} {:>3} {:>7.3} {:>7.3}",
            object.name(),
            h.altitude_degrees(),
            h.azimuth_degrees(),
            h.cardinal_direction(),
            p.x,
            p.y
        );
    }

    let below: Vec<_> = scene
        .objects()
        .filter(|o| !o.is_visible())
        .map(|o| o.name().to_string())
        .collect();
    if !below.is_empty() {
        println!("\nBelow the horizon: {}", below.join(", "));
    }

    if scene.constellations.is_empty() {
        println!("\nNo constellations above the horizon.");
    } else {
        println!();
        for constellation in &scene.constellations {
            println!(
                "{}: {} of its stars visible, {} line segment(s)",
                constellation.name,
                constellation.members.len(),
                constellation.segments.len()
            );
        }
    }

    println!(
        "\nMoon: {} ({:.0}% lit), {}",
        scene.moon.phase_name,
        scene.moon.illuminated_fraction * 100.0,
        if scene.moon.is_visible() { "up" } else { "down" }
    );
}
