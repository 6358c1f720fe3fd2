use crate::chart::body::{Body, Planet};
use crate::error::{HarmoniaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
struct ChartRecord {
    #[serde(default)]
    label: Option<String>,
    bodies: Vec<Body>,
}

/// One person's body placements, as produced by the position resolver.
///
/// A chart may omit bodies (unknown birth time, partial data) but never
/// lists a planet twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChartRecord")]
pub struct Chart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    bodies: Vec<Body>,
}

impl Chart {
    pub fn new(label: Option<String>, bodies: Vec<Body>) -> Result<Self> {
        let mut seen = HashSet::new();
        for body in &bodies {
            if !seen.insert(body.planet()) {
                return Err(HarmoniaError::DuplicateBody {
                    name: body.planet().name().to_string(),
                });
            }
        }
        Ok(Self { label, bodies })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, planet: Planet) -> Option<&Body> {
        self.bodies.iter().find(|b| b.planet() == planet)
    }

    /// Bodies whose planet appears in `planets`, keeping chart order.
    pub fn restrict_to(&self, planets: &[Planet]) -> Vec<Body> {
        self.bodies
            .iter()
            .filter(|b| planets.contains(&b.planet()))
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl TryFrom<ChartRecord> for Chart {
    type Error = HarmoniaError;

    fn try_from(record: ChartRecord) -> Result<Self> {
        Chart::new(record.label, record.bodies)
    }
}
