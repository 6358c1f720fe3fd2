use crate::chart::{Planet, PlanetPair};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Major aspect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

pub const ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub fn target(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn quality(self) -> Quality {
        match self {
            AspectKind::Sextile | AspectKind::Trine => Quality::Harmonious,
            AspectKind::Square | AspectKind::Opposition => Quality::Tense,
            AspectKind::Conjunction => Quality::Intense,
        }
    }

    /// Verb used in generated sentences ("Venus trines Mars").
    pub fn verb(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "merges with",
            AspectKind::Sextile => "supports",
            AspectKind::Square => "challenges",
            AspectKind::Trine => "flows with",
            AspectKind::Opposition => "opposes",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ASPECT_KINDS
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Harmonious,
    Tense,
    Intense,
}

impl Quality {
    pub fn name(self) -> &'static str {
        match self {
            Quality::Harmonious => "harmonious",
            Quality::Tense => "tense",
            Quality::Intense => "intense",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Catalog entry: an aspect type with its allowed orb
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub orb: f64,
}

impl AspectDefinition {
    pub fn new(kind: AspectKind, orb: f64) -> Self {
        Self { kind, orb }
    }

    pub fn target(&self) -> f64 {
        self.kind.target()
    }

    /// Inclusive window check; returns the deviation from exact when it matches.
    pub fn deviation(&self, separation: f64) -> Option<f64> {
        let delta = (separation - self.target()).abs();
        (delta <= self.orb).then_some(delta)
    }
}

/// Standard catalog: conjunction, square, trine and opposition at 8°, sextile at 6°.
pub fn default_aspect_catalog() -> Vec<AspectDefinition> {
    vec![
        AspectDefinition::new(AspectKind::Conjunction, 8.0),
        AspectDefinition::new(AspectKind::Sextile, 6.0),
        AspectDefinition::new(AspectKind::Square, 8.0),
        AspectDefinition::new(AspectKind::Trine, 8.0),
        AspectDefinition::new(AspectKind::Opposition, 8.0),
    ]
}

/// A detected aspect between two bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    #[serde(rename = "bodyA")]
    pub body_a: Planet,
    #[serde(rename = "bodyB")]
    pub body_b: Planet,
    pub kind: AspectKind,
    /// Measured angular separation in [0, 180]
    pub separation: f64,
    /// |separation - target|
    #[serde(rename = "orbDelta")]
    pub orb_delta: f64,
    /// Whether the aspect is exact (within 0.1 degrees)
    pub exact: bool,
    pub quality: Quality,
}

impl Aspect {
    pub fn pair(&self) -> PlanetPair {
        PlanetPair::new(self.body_a, self.body_b)
    }

    /// "Venus trine Mars"
    pub fn label(&self) -> String {
        format!("{} {} {}", self.body_a, self.kind, self.body_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_is_total() {
        assert_eq!(AspectKind::Conjunction.quality(), Quality::Intense);
        assert_eq!(AspectKind::Sextile.quality(), Quality::Harmonious);
        assert_eq!(AspectKind::Trine.quality(), Quality::Harmonious);
        assert_eq!(AspectKind::Square.quality(), Quality::Tense);
        assert_eq!(AspectKind::Opposition.quality(), Quality::Tense);
    }

    #[test]
    fn test_default_windows_do_not_overlap() {
        let catalog = default_aspect_catalog();
        for (i, a) in catalog.iter().enumerate() {
            for b in catalog.iter().skip(i + 1) {
                let (lo, hi) = if a.target() < b.target() { (a, b) } else { (b, a) };
                assert!(lo.target() + lo.orb < hi.target() - hi.orb);
            }
        }
    }

    #[test]
    fn test_deviation_is_inclusive() {
        let sextile = AspectDefinition::new(AspectKind::Sextile, 6.0);
        assert_eq!(sextile.deviation(66.0), Some(6.0));
        assert_eq!(sextile.deviation(54.0), Some(6.0));
        assert_eq!(sextile.deviation(66.01), None);
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(AspectKind::from_name("Trine"), Some(AspectKind::Trine));
        assert_eq!(AspectKind::from_name("quincunx"), None);
    }
}
