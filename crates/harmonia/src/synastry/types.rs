use crate::aspects::{Aspect, Quality};
use crate::frequency::SharedFrequency;
use crate::harmony::{AspectDescription, Text};
use crate::western::{Compatibility, ElementPairing};
use serde::{Deserialize, Serialize};

/// Supporting detail shown alongside the primary connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextItem {
    pub label: String,
    pub detail: String,
}

/// Aspect tally across every priority-body cross aspect, plus a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompatibilitySignal {
    pub harmonious: usize,
    pub tense: usize,
    pub intense: usize,
    pub score: u8,
}

impl CompatibilitySignal {
    const HARMONIOUS_WEIGHT: i32 = 6;
    const INTENSE_WEIGHT: i32 = 4;
    const TENSE_WEIGHT: i32 = -5;

    pub fn from_aspects(aspects: &[Aspect], element: Option<Compatibility>) -> Self {
        let count = |q: Quality| aspects.iter().filter(|a| a.quality == q).count();
        let harmonious = count(Quality::Harmonious);
        let tense = count(Quality::Tense);
        let intense = count(Quality::Intense);

        let base = match element {
            Some(Compatibility::Same) => 70,
            Some(Compatibility::Compatible) => 65,
            Some(Compatibility::Neutral) | None => 50,
            Some(Compatibility::Challenging) => 40,
        };
        let score = base
            + Self::HARMONIOUS_WEIGHT * harmonious as i32
            + Self::INTENSE_WEIGHT * intense as i32
            + Self::TENSE_WEIGHT * tense as i32;

        Self {
            harmonious,
            tense,
            intense,
            score: score.clamp(0, 100) as u8,
        }
    }
}

/// Result of comparing two charts. Every field may be empty for partial
/// charts; absence is an expected state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynastryConnection {
    #[serde(rename = "primaryAspect")]
    pub primary_aspect: Option<Aspect>,
    #[serde(rename = "primaryDescription")]
    pub primary_description: Option<AspectDescription>,
    #[serde(rename = "elementMatch")]
    pub element_match: Option<ElementPairing>,
    #[serde(rename = "sharedFrequency")]
    pub shared_frequency: Option<SharedFrequency>,
    #[serde(rename = "sharedGenre")]
    pub shared_genre: Option<String>,
    pub insight: Option<Text>,
    #[serde(rename = "mutualContext")]
    pub mutual_context: Vec<ContextItem>,
    pub compatibility: CompatibilitySignal,
}

impl SynastryConnection {
    pub fn has_primary_aspect(&self) -> bool {
        self.primary_aspect.is_some()
    }
}
