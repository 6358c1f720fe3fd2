//! Aspect quality classification and descriptive text.

use crate::aspects::{Aspect, AspectKind, Quality};
use crate::chart::{Planet, PlanetPair};
use crate::reference::ReferenceTables;
use serde::{Deserialize, Serialize};

/// Text that is either hand-written in the reference tables or generated
/// from a template because no curated entry exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "text", rename_all = "lowercase")]
pub enum Text {
    Curated(String),
    Generated(String),
}

impl Text {
    pub fn as_str(&self) -> &str {
        match self {
            Text::Curated(text) | Text::Generated(text) => text,
        }
    }

    pub fn is_curated(&self) -> bool {
        matches!(self, Text::Curated(_))
    }

    fn lookup_or(curated: Option<&str>, generate: impl FnOnce() -> String) -> Self {
        match curated {
            Some(text) => Text::Curated(text.to_string()),
            None => Text::Generated(generate()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectDescription {
    pub meaning: Text,
    #[serde(rename = "soundBlend")]
    pub sound_blend: Text,
}

pub struct HarmonyClassifier<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> HarmonyClassifier<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    pub fn classify(&self, aspect: &Aspect) -> Quality {
        aspect.kind.quality()
    }

    /// Meaning and sound-blend text for a planet pair in the given aspect.
    ///
    /// The pair is canonicalized first, so argument order never matters.
    /// Never fails: missing entries produce generated text.
    pub fn describe(&self, a: Planet, b: Planet, kind: AspectKind) -> AspectDescription {
        let pair = PlanetPair::new(a, b);
        let quality = kind.quality();
        let meaning = Text::lookup_or(self.tables.meaning(quality, pair), || {
            generated_meaning(pair, kind)
        });
        let sound_blend = Text::lookup_or(self.tables.sound_blend(pair), || {
            generated_sound_blend(pair, kind)
        });
        AspectDescription { meaning, sound_blend }
    }

    pub fn describe_aspect(&self, aspect: &Aspect) -> AspectDescription {
        self.describe(aspect.body_a, aspect.body_b, aspect.kind)
    }

    /// Relationship insight for a pair, falling back to the meaning text.
    pub fn insight(&self, a: Planet, b: Planet, kind: AspectKind) -> Text {
        let pair = PlanetPair::new(a, b);
        match self.tables.insight(pair) {
            Some(text) => Text::Curated(text.to_string()),
            None => self.describe(a, b, kind).meaning,
        }
    }
}

fn generated_meaning(pair: PlanetPair, kind: AspectKind) -> String {
    format!(
        "{} {} {}, creating a {} connection",
        pair.first(),
        kind.verb(),
        pair.second(),
        kind.quality()
    )
}

fn generated_sound_blend(pair: PlanetPair, kind: AspectKind) -> String {
    format!(
        "{} and {} tones layered as a {} {}",
        pair.first(),
        pair.second(),
        kind.quality(),
        kind
    )
}
