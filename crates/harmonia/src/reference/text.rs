//! Curated descriptive text.
//!
//! Coverage is partial: only the pairs with the strongest narrative weight
//! are hand-written. Everything else falls back to generated sentences in
//! `harmony`.

use crate::aspects::Quality;
use crate::chart::{Planet, PlanetPair};
use std::collections::HashMap;

use Planet::*;

// (quality, a, b, meaning)
const MEANINGS: &[(Quality, Planet, Planet, &str)] = &[
    (Quality::Harmonious, Sun, Moon, "Identity and feeling agree; each person feels naturally understood"),
    (Quality::Harmonious, Venus, Mars, "Attraction comes easily and affection is expressed without friction"),
    (Quality::Harmonious, Sun, Venus, "Warm admiration that makes both people feel appreciated"),
    (Quality::Harmonious, Moon, Venus, "Tenderness and comfort flow in both directions"),
    (Quality::Harmonious, Mercury, Mercury, "Conversations click and ideas build on one another"),
    (Quality::Harmonious, Sun, Jupiter, "Generous encouragement; each helps the other grow"),
    (Quality::Harmonious, Moon, Saturn, "Steady emotional loyalty that deepens with time"),
    (Quality::Tense, Sun, Moon, "What one wants and what the other needs pull in different directions"),
    (Quality::Tense, Venus, Mars, "Magnetic attraction laced with friction and challenge"),
    (Quality::Tense, Venus, Saturn, "Affection meets caution; love has to prove itself"),
    (Quality::Tense, Mars, Mars, "Competing drives that can spark rivalry or shared ambition"),
    (Quality::Tense, Moon, Pluto, "Emotional intensity with undercurrents of control"),
    (Quality::Intense, Sun, Moon, "A deep merging of identity and emotion; a classic bond"),
    (Quality::Intense, Venus, Mars, "Immediate, powerful chemistry"),
    (Quality::Intense, Sun, Sun, "Shared purpose and a mirror of each other's core self"),
    (Quality::Intense, Moon, Moon, "Instinctive emotional recognition"),
    (Quality::Intense, Venus, Pluto, "Consuming attraction that transforms both people"),
];

// (a, b, blend)
const SOUND_BLENDS: &[(Planet, Planet, &str)] = &[
    (Sun, Moon, "A bright lead line resting on a warm sustained pad"),
    (Venus, Mars, "Lush harmony driven by a steady percussive pulse"),
    (Sun, Venus, "Melody doubled in sweet parallel thirds"),
    (Moon, Venus, "Soft chords swelling under a gentle pad"),
    (Mercury, Venus, "Quick arpeggios sparkling over close harmony"),
    (Saturn, Moon, "A deep bass anchor beneath drifting pads"),
    (Sun, Sun, "Two lead voices in unison"),
    (Pluto, Venus, "Sub-bass pressure beneath an aching harmony"),
];

// (a, b, insight)
const INSIGHTS: &[(Planet, Planet, &str)] = &[
    (Sun, Moon, "Your core selves and emotional needs are in conversation; this is the heart of the bond"),
    (Venus, Mars, "Desire and affection meet here; this is where the spark lives"),
    (Sun, Venus, "One of you lights up in the other's presence"),
    (Moon, Moon, "You understand each other's moods without words"),
    (Mercury, Mercury, "How you talk together shapes everything else"),
    (Sun, Saturn, "This connection asks for commitment and rewards patience"),
    (Moon, Venus, "Comfort and care come naturally between you"),
    (Mars, Mars, "Your energies push and pull; channel them toward a shared goal"),
];

pub fn default_meanings() -> HashMap<(Quality, PlanetPair), String> {
    MEANINGS
        .iter()
        .map(|&(quality, a, b, text)| ((quality, PlanetPair::new(a, b)), text.to_string()))
        .collect()
}

pub fn default_sound_blends() -> HashMap<PlanetPair, String> {
    SOUND_BLENDS
        .iter()
        .map(|&(a, b, text)| (PlanetPair::new(a, b), text.to_string()))
        .collect()
}

pub fn default_insights() -> HashMap<PlanetPair, String> {
    INSIGHTS
        .iter()
        .map(|&(a, b, text)| (PlanetPair::new(a, b), text.to_string()))
        .collect()
}
