//! Sonification reference data: per-body base tones and element genres.
//!
//! Base frequencies follow the cosmic-octave convention (orbital period
//! transposed into the audible range).

use crate::chart::Planet;
use crate::western::Element;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimbreRole {
    Lead,
    Pad,
    Arpeggio,
    Harmony,
    Percussion,
    Brass,
    Bass,
    Texture,
    Drone,
    SubBass,
    Bell,
    Choir,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetTone {
    #[serde(rename = "baseFrequencyHz")]
    pub base_frequency_hz: f64,
    #[serde(rename = "timbreRole")]
    pub timbre: TimbreRole,
}

// (planet, hz, timbre)
const TONES: &[(Planet, f64, TimbreRole)] = &[
    (Planet::Sun, 126.22, TimbreRole::Lead),
    (Planet::Moon, 210.42, TimbreRole::Pad),
    (Planet::Mercury, 141.27, TimbreRole::Arpeggio),
    (Planet::Venus, 221.23, TimbreRole::Harmony),
    (Planet::Mars, 144.72, TimbreRole::Percussion),
    (Planet::Jupiter, 183.58, TimbreRole::Brass),
    (Planet::Saturn, 147.85, TimbreRole::Bass),
    (Planet::Uranus, 207.36, TimbreRole::Texture),
    (Planet::Neptune, 211.44, TimbreRole::Drone),
    (Planet::Pluto, 140.25, TimbreRole::SubBass),
    (Planet::Chiron, 151.27, TimbreRole::Bell),
    (Planet::NorthNode, 234.16, TimbreRole::Choir),
];

pub fn default_tones() -> HashMap<Planet, PlanetTone> {
    TONES
        .iter()
        .map(|&(planet, hz, timbre)| {
            (
                planet,
                PlanetTone {
                    base_frequency_hz: hz,
                    timbre,
                },
            )
        })
        .collect()
}

/// Unordered element pair key: the lower element (declaration order) first.
pub fn element_key(a: Element, b: Element) -> (Element, Element) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

const GENRES: &[(Element, Element, &str)] = &[
    (Element::Fire, Element::Fire, "Rock"),
    (Element::Earth, Element::Earth, "Folk"),
    (Element::Air, Element::Air, "Electronic"),
    (Element::Water, Element::Water, "Ambient"),
    (Element::Fire, Element::Earth, "Blues"),
    (Element::Fire, Element::Air, "Funk"),
    (Element::Fire, Element::Water, "Soul"),
    (Element::Earth, Element::Air, "Jazz"),
    (Element::Earth, Element::Water, "Acoustic"),
    (Element::Air, Element::Water, "Dream Pop"),
];

pub fn default_genres() -> HashMap<(Element, Element), String> {
    GENRES
        .iter()
        .map(|&(a, b, genre)| (element_key(a, b), genre.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ALL_PLANETS;
    use crate::western::ELEMENTS;

    #[test]
    fn test_every_planet_has_a_tone() {
        let tones = default_tones();
        assert_eq!(tones.len(), 12);
        for planet in ALL_PLANETS {
            assert!(tones[&planet].base_frequency_hz > 0.0);
        }
    }

    #[test]
    fn test_genres_cover_unordered_pairs() {
        let genres = default_genres();
        assert_eq!(genres.len(), 10);
        for a in ELEMENTS {
            for b in ELEMENTS {
                assert!(genres.contains_key(&element_key(a, b)));
            }
        }
        assert_eq!(genres[&element_key(Element::Water, Element::Fire)], "Soul");
    }
}
