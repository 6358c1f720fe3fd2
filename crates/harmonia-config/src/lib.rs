use anyhow::Context;
use harmonia::aspects::{first_overlap, AspectKind, Quality};
use harmonia::chart::{Planet, PlanetPair};
use harmonia::reference::{PlanetTone, ReferenceTables, TimbreRole};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Relative locations probed for the override file, first match wins.
pub const CONFIG_PATHS: &[&str] = &["configs/harmonia.toml", "../../configs/harmonia.toml"];

/// Orbs wider than this would swallow neighbouring aspects entirely.
const MAX_ORB: f64 = 30.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct HarmoniaToml {
    #[serde(default)]
    orbs: HashMap<String, f64>,
    #[serde(default)]
    priority: Option<Vec<String>>,
    #[serde(default)]
    dominant: Option<String>,
    #[serde(default)]
    frequencies: HashMap<String, ToneToml>,
    #[serde(default)]
    meanings: Vec<MeaningToml>,
    #[serde(default)]
    sound_blends: Vec<PairTextToml>,
    #[serde(default)]
    insights: Vec<PairTextToml>,
}

#[derive(Debug, Clone, Deserialize)]
struct ToneToml {
    #[serde(default)]
    hz: Option<f64>,
    #[serde(default)]
    timbre: Option<TimbreRole>,
}

#[derive(Debug, Clone, Deserialize)]
struct MeaningToml {
    a: String,
    b: String,
    quality: Quality,
    text: String,
}

#[derive(Debug, Clone, Deserialize)]
struct PairTextToml {
    a: String,
    b: String,
    text: String,
}

pub fn find_config_path() -> Option<PathBuf> {
    CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

/// Load tables from the first probed config file, or the compiled-in
/// defaults when none exists.
pub fn load_reference_tables() -> anyhow::Result<ReferenceTables> {
    match find_config_path() {
        Some(path) => load_reference_tables_from_path(&path),
        None => {
            log::debug!("No harmonia.toml found in {:?}; using default tables", CONFIG_PATHS);
            Ok(ReferenceTables::default())
        }
    }
}

pub fn load_reference_tables_from_path(path: &Path) -> anyhow::Result<ReferenceTables> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let tables = load_reference_tables_from_str(&text)
        .with_context(|| format!("Invalid reference overrides in {}", path.display()))?;
    log::info!("Loaded reference overrides from {}", path.display());
    Ok(tables)
}

/// Apply TOML overrides on top of `ReferenceTables::default()`.
pub fn load_reference_tables_from_str(text: &str) -> anyhow::Result<ReferenceTables> {
    let root: HarmoniaToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse harmonia.toml: {e}"))?;
    let mut tables = ReferenceTables::default();
    apply_overrides(&mut tables, root)?;
    Ok(tables)
}

fn apply_overrides(tables: &mut ReferenceTables, root: HarmoniaToml) -> anyhow::Result<()> {
    let HarmoniaToml {
        orbs,
        priority,
        dominant,
        frequencies,
        meanings,
        sound_blends,
        insights,
    } = root;

    for (name, orb) in orbs {
        let kind = AspectKind::from_name(&name)
            .ok_or_else(|| anyhow::anyhow!("Unknown aspect type in [orbs]: {name}"))?;
        if !orb.is_finite() || !(0.0..=MAX_ORB).contains(&orb) {
            anyhow::bail!("Orb for {name} must be within [0, {MAX_ORB}], got {orb}");
        }
        tables.set_orb(kind, orb);
    }

    if let Some((a, b)) = first_overlap(&tables.aspects) {
        log::warn!(
            "Orb windows for {} and {} overlap; tightest match wins",
            a.kind, b.kind
        );
    }

    if let Some(names) = priority {
        if names.is_empty() {
            anyhow::bail!("priority must list at least one body");
        }
        let planets = names
            .iter()
            .map(|n| parse_planet(n, "priority"))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let mut seen = HashSet::new();
        if let Some(dup) = planets.iter().find(|p| !seen.insert(**p)) {
            anyhow::bail!("priority lists {} more than once", dup);
        }
        tables.priority = planets;
    }

    if let Some(name) = dominant {
        tables.dominant = parse_planet(&name, "dominant")?;
    }

    for (name, tone) in frequencies {
        let planet = parse_planet(&name, "[frequencies]")?;
        let current = tables.tone(planet).copied();
        let hz = match (tone.hz, current) {
            (Some(hz), _) => hz,
            (None, Some(existing)) => existing.base_frequency_hz,
            (None, None) => anyhow::bail!("[frequencies.{name}] needs hz"),
        };
        if !hz.is_finite() || hz <= 0.0 {
            anyhow::bail!("[frequencies.{name}] hz must be positive, got {hz}");
        }
        let timbre = match (tone.timbre, current) {
            (Some(role), _) => role,
            (None, Some(existing)) => existing.timbre,
            (None, None) => anyhow::bail!("[frequencies.{name}] needs timbre"),
        };
        tables.tones.insert(
            planet,
            PlanetTone {
                base_frequency_hz: hz,
                timbre,
            },
        );
    }

    for entry in meanings {
        let pair = parse_pair(&entry.a, &entry.b, "meanings")?;
        tables.meanings.insert((entry.quality, pair), entry.text);
    }
    for entry in sound_blends {
        let pair = parse_pair(&entry.a, &entry.b, "sound_blends")?;
        tables.sound_blends.insert(pair, entry.text);
    }
    for entry in insights {
        let pair = parse_pair(&entry.a, &entry.b, "insights")?;
        tables.insights.insert(pair, entry.text);
    }

    Ok(())
}

fn parse_planet(name: &str, section: &str) -> anyhow::Result<Planet> {
    name.parse::<Planet>()
        .with_context(|| format!("Invalid body in {section}"))
}

fn parse_pair(a: &str, b: &str, section: &str) -> anyhow::Result<PlanetPair> {
    Ok(PlanetPair::new(
        parse_planet(a, section)?,
        parse_planet(b, section)?,
    ))
}
