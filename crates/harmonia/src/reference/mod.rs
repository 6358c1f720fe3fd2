//! Immutable reference data shared by every engine component.
//!
//! Components borrow a `ReferenceTables` value instead of reading globals,
//! so callers and tests can supply trimmed or extended tables.

pub mod text;
pub mod tones;

use crate::aspects::{default_aspect_catalog, AspectDefinition, AspectKind, Quality};
use crate::chart::{Planet, PlanetPair};
use crate::western::{default_element_pairings, Element, ElementPairing};
use std::collections::HashMap;

pub use text::{default_insights, default_meanings, default_sound_blends};
pub use tones::{default_genres, default_tones, element_key, PlanetTone, TimbreRole};

/// Narrative importance order used to pick the primary synastry aspect.
pub const PRIORITY_PLANETS: [Planet; 10] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Venus,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Pluto,
    Planet::Neptune,
    Planet::Uranus,
];

#[derive(Debug, Clone)]
pub struct ReferenceTables {
    /// Aspect catalog, checked in this order
    pub aspects: Vec<AspectDefinition>,
    pub priority: Vec<Planet>,
    /// Body whose element represents the chart in element matching
    pub dominant: Planet,
    /// Directional: (a, b) and (b, a) are separate entries
    pub element_pairings: HashMap<(Element, Element), ElementPairing>,
    /// Keyed by `element_key`
    pub genres: HashMap<(Element, Element), String>,
    pub meanings: HashMap<(Quality, PlanetPair), String>,
    pub sound_blends: HashMap<PlanetPair, String>,
    pub insights: HashMap<PlanetPair, String>,
    pub tones: HashMap<Planet, PlanetTone>,
}

lazy_static::lazy_static! {
    static ref STANDARD: ReferenceTables = ReferenceTables::default();
}

impl ReferenceTables {
    /// Shared copy of the default tables.
    pub fn standard() -> &'static ReferenceTables {
        &STANDARD
    }

    /// Default catalog and ordering with every text, genre and tone table empty.
    pub fn empty() -> Self {
        Self {
            aspects: default_aspect_catalog(),
            priority: PRIORITY_PLANETS.to_vec(),
            dominant: Planet::Sun,
            element_pairings: HashMap::new(),
            genres: HashMap::new(),
            meanings: HashMap::new(),
            sound_blends: HashMap::new(),
            insights: HashMap::new(),
            tones: HashMap::new(),
        }
    }

    pub fn orb(&self, kind: AspectKind) -> Option<f64> {
        self.aspects.iter().find(|d| d.kind == kind).map(|d| d.orb)
    }

    pub fn set_orb(&mut self, kind: AspectKind, orb: f64) {
        match self.aspects.iter_mut().find(|d| d.kind == kind) {
            Some(definition) => definition.orb = orb,
            None => self.aspects.push(AspectDefinition::new(kind, orb)),
        }
    }

    pub fn element_pairing(&self, a: Element, b: Element) -> Option<&ElementPairing> {
        self.element_pairings.get(&(a, b))
    }

    pub fn genre(&self, a: Element, b: Element) -> Option<&str> {
        self.genres.get(&element_key(a, b)).map(String::as_str)
    }

    pub fn meaning(&self, quality: Quality, pair: PlanetPair) -> Option<&str> {
        self.meanings.get(&(quality, pair)).map(String::as_str)
    }

    pub fn sound_blend(&self, pair: PlanetPair) -> Option<&str> {
        self.sound_blends.get(&pair).map(String::as_str)
    }

    pub fn insight(&self, pair: PlanetPair) -> Option<&str> {
        self.insights.get(&pair).map(String::as_str)
    }

    pub fn tone(&self, planet: Planet) -> Option<&PlanetTone> {
        self.tones.get(&planet)
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            element_pairings: default_element_pairings(),
            genres: default_genres(),
            meanings: default_meanings(),
            sound_blends: default_sound_blends(),
            insights: default_insights(),
            tones: default_tones(),
            ..Self::empty()
        }
    }
}
