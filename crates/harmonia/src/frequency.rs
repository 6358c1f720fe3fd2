//! Sonification parameters derived from bodies, houses and aspects.
//!
//! Playback and mixing live outside this crate; the resolver only hands out
//! numbers and labels.

use crate::aspects::Quality;
use crate::chart::Planet;
use crate::error::{check_house, HarmoniaError, Result};
use crate::intensity::house_intensity;
use crate::reference::{PlanetTone, ReferenceTables};
use serde::{Deserialize, Serialize};

/// Frequency shared by two bodies, with a word for how the tones interact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedFrequency {
    pub hz: f64,
    pub description: String,
}

pub struct FrequencyResolver<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> FrequencyResolver<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Base tone for a body. A body missing from the tone table is an error.
    pub fn resolve_body(&self, planet: Planet) -> Result<PlanetTone> {
        self.tables
            .tone(planet)
            .copied()
            .ok_or_else(|| HarmoniaError::UnknownBody {
                name: planet.name().to_string(),
            })
    }

    pub fn resolve_house(&self, house: u8, degree_in_house: f64) -> Result<u8> {
        check_house(house)?;
        house_intensity(degree_in_house)
    }

    /// Arithmetic mean of the two base frequencies.
    pub fn shared_frequency(&self, a: Planet, b: Planet, quality: Quality) -> Result<SharedFrequency> {
        let tone_a = self.resolve_body(a)?;
        let tone_b = self.resolve_body(b)?;
        let hz = (tone_a.base_frequency_hz + tone_b.base_frequency_hz) / 2.0;
        Ok(SharedFrequency {
            hz,
            description: format!("{:.2} Hz {} between {} and {}", hz, resonance(quality), a, b),
        })
    }
}

fn resonance(quality: Quality) -> &'static str {
    match quality {
        Quality::Harmonious => "consonance",
        Quality::Tense => "beating dissonance",
        Quality::Intense => "unison",
    }
}
