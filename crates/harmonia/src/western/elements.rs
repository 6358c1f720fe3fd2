//! Elements and element compatibility.
//!
//! Each element groups three signs. Pairings between two elements carry a
//! compatibility class plus flavor text; the text is directional, so
//! Fire-Air and Air-Fire may read differently while sharing a class.

use crate::western::signs::{Sign, SIGN_ORDER};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

pub const ELEMENTS: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

impl Element {
    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }

    /// The three signs of this element, in zodiac order.
    pub fn signs(self) -> Vec<Sign> {
        SIGN_ORDER.iter().copied().filter(|s| s.element() == self).collect()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    Same,
    Compatible,
    Neutral,
    Challenging,
}

impl Compatibility {
    /// Classic elemental affinities: fire feeds on air, earth holds water.
    pub fn between(a: Element, b: Element) -> Self {
        use Element::*;
        match (a, b) {
            _ if a == b => Compatibility::Same,
            (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => Compatibility::Compatible,
            (Fire, Earth) | (Earth, Fire) | (Air, Water) | (Water, Air) => Compatibility::Neutral,
            _ => Compatibility::Challenging,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementPairing {
    #[serde(rename = "elementA")]
    pub element_a: Element,
    #[serde(rename = "elementB")]
    pub element_b: Element,
    pub compatibility: Compatibility,
    pub meaning: String,
}

impl ElementPairing {
    /// "Fire-Air" style label, in lookup direction.
    pub fn label(&self) -> String {
        format!("{}-{}", self.element_a, self.element_b)
    }
}

// (a, b, meaning)
const PAIRING_TEXT: &[(Element, Element, &str)] = &[
    (Element::Fire, Element::Fire, "Two flames that recognize each other and burn brighter together"),
    (Element::Fire, Element::Earth, "Fire brings the spark while Earth asks for a plan to hold it"),
    (Element::Fire, Element::Air, "Air fans Fire's enthusiasm into something larger than either"),
    (Element::Fire, Element::Water, "Fire's urgency meets Water's depth, producing steam and strong feeling"),
    (Element::Earth, Element::Fire, "Earth gives Fire's ambitions ground to build on"),
    (Element::Earth, Element::Earth, "A steady, practical bond built on shared patience"),
    (Element::Earth, Element::Air, "Earth wants proof while Air wants possibility"),
    (Element::Earth, Element::Water, "Water nourishes Earth and Earth gives Water a shape to fill"),
    (Element::Air, Element::Fire, "Air's ideas find momentum in Fire's will to act"),
    (Element::Air, Element::Earth, "Air offers new perspectives that Earth slowly tests"),
    (Element::Air, Element::Air, "A meeting of minds with endless conversation"),
    (Element::Air, Element::Water, "Air reasons where Water feels, and each learns the other's language"),
    (Element::Water, Element::Fire, "Water tempers Fire, though each can overwhelm the other"),
    (Element::Water, Element::Earth, "Water finds safety in Earth's steadiness"),
    (Element::Water, Element::Air, "Water brings feeling to Air's detachment"),
    (Element::Water, Element::Water, "Deep emotional attunement that needs little explanation"),
];

/// Standard directional pairing table covering all sixteen element pairs.
pub fn default_element_pairings() -> HashMap<(Element, Element), ElementPairing> {
    PAIRING_TEXT
        .iter()
        .map(|&(a, b, meaning)| {
            (
                (a, b),
                ElementPairing {
                    element_a: a,
                    element_b: b,
                    compatibility: Compatibility::between(a, b),
                    meaning: meaning.to_string(),
                },
            )
        })
        .collect()
}
