mod input;

use anyhow::Context;
use clap::{Parser, Subcommand};
use harmonia::aspects::Aspect;
use harmonia::harmony::AspectDescription;
use harmonia::reference::ReferenceTables;
use harmonia::{
    annotate, house_intensity, AspectDetector, BodyAnnotation, FrequencyResolver,
    HarmonyClassifier, Planet, SynastryScorer,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// TOML file overriding the reference tables (otherwise configs/harmonia.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aspects within one chart, with quality and meaning.
    Aspects {
        /// Chart JSON from the position resolver.
        chart: PathBuf,
    },
    /// Strongest connection between two charts.
    Connect { chart_a: PathBuf, chart_b: PathBuf },
    /// Expression intensity for a degree within a house (0-30).
    Intensity { degree: f64 },
    /// Base frequency and timbre role for a body.
    Tone { planet: String },
}

#[derive(Serialize)]
struct AspectReading {
    #[serde(flatten)]
    aspect: Aspect,
    #[serde(flatten)]
    description: AspectDescription,
}

#[derive(Serialize)]
struct ChartReading {
    bodies: Vec<BodyAnnotation>,
    aspects: Vec<AspectReading>,
}

fn load_tables(config: Option<&PathBuf>) -> anyhow::Result<ReferenceTables> {
    match config {
        Some(path) => harmonia_config::load_reference_tables_from_path(path),
        None => harmonia_config::load_reference_tables(),
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{text}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let tables = load_tables(args.config.as_ref())?;

    match &args.command {
        Command::Aspects { chart } => {
            let chart = input::read_chart(chart)?;
            let classifier = HarmonyClassifier::new(&tables);
            let aspects = AspectDetector::new(&tables)
                .detect(chart.bodies())
                .into_iter()
                .map(|aspect| AspectReading {
                    description: classifier.describe_aspect(&aspect),
                    aspect,
                })
                .collect();
            let bodies = annotate(&chart, &tables).context("Failed to annotate chart bodies")?;
            print_json(&ChartReading { bodies, aspects }, args.compact)?;
        }
        Command::Connect { chart_a, chart_b } => {
            let chart_a = input::read_chart(chart_a)?;
            let chart_b = input::read_chart(chart_b)?;
            let connection = SynastryScorer::new(&tables)
                .context("Reference tables cannot score connections")?
                .calculate_connection(&chart_a, &chart_b)
                .context("Failed to score connection")?;
            print_json(&connection, args.compact)?;
        }
        Command::Intensity { degree } => {
            let intensity = house_intensity(*degree)?;
            print_json(&serde_json::json!({ "degree": degree, "intensity": intensity }), args.compact)?;
        }
        Command::Tone { planet } => {
            let planet: Planet = planet.parse()?;
            let tone = FrequencyResolver::new(&tables).resolve_body(planet)?;
            print_json(&tone, args.compact)?;
        }
    }

    Ok(())
}
