//! Relationship-scoring engine built on chart positions.
//!
//! Given body placements for one or two charts, the engine detects aspects,
//! classifies their quality, scores house intensity and ranks cross-chart
//! aspects into a single synastry connection. Positions come from an
//! external resolver; nothing here touches an ephemeris, audio or I/O.

pub mod annotation;
pub mod aspects;
pub mod chart;
pub mod error;
pub mod frequency;
pub mod harmony;
pub mod intensity;
pub mod reference;
pub mod synastry;
pub mod western;

pub use annotation::{annotate, BodyAnnotation};
pub use aspects::{Aspect, AspectDetector, AspectKind, Quality};
pub use chart::{Body, Chart, Planet, PlanetPair};
pub use error::{HarmoniaError, Result};
pub use frequency::{FrequencyResolver, SharedFrequency};
pub use harmony::{AspectDescription, HarmonyClassifier, Text};
pub use intensity::house_intensity;
pub use reference::ReferenceTables;
pub use synastry::{SynastryConnection, SynastryScorer};
