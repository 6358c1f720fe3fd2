use crate::aspects::types::{Aspect, AspectDefinition};
use crate::chart::{Body, PlanetPair};
use crate::error::{check_longitude, Result};
use crate::reference::ReferenceTables;
use log::{debug, trace};

/// Within 0.1 degrees is "exact"
const EXACT_THRESHOLD: f64 = 0.1;

/// Angular separation between two longitudes, normalized to [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs() % 360.0;
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Finds aspects between bodies using the catalog from the reference tables.
pub struct AspectDetector<'a> {
    catalog: &'a [AspectDefinition],
}

impl<'a> AspectDetector<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self::with_catalog(&tables.aspects)
    }

    pub fn with_catalog(catalog: &'a [AspectDefinition]) -> Self {
        Self { catalog }
    }

    /// Best catalog match for a separation: smallest deviation from exact,
    /// earlier catalog entry on ties.
    pub fn match_separation(&self, separation: f64) -> Option<(AspectDefinition, f64)> {
        let mut best: Option<(AspectDefinition, f64)> = None;
        for definition in self.catalog {
            if let Some(delta) = definition.deviation(separation) {
                match best {
                    Some((_, best_delta)) if best_delta <= delta => {}
                    _ => best = Some((*definition, delta)),
                }
            }
        }
        best
    }

    /// Calculate the aspect between two raw longitudes, validating both.
    ///
    /// The returned aspect's bodies are filled by the caller; this entry point
    /// only reports the geometry.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Result<Option<(AspectDefinition, f64)>> {
        let lon1 = check_longitude(lon1)?;
        let lon2 = check_longitude(lon2)?;
        Ok(self.match_separation(angular_separation(lon1, lon2)))
    }

    fn aspect_between(&self, a: &Body, b: &Body) -> Option<Aspect> {
        let separation = angular_separation(a.longitude(), b.longitude());
        let (definition, orb_delta) = self.match_separation(separation)?;
        trace!(
            "{} {} {} (separation {:.2}, orb {:.2})",
            a.planet(),
            definition.kind,
            b.planet(),
            separation,
            orb_delta
        );
        Some(Aspect {
            body_a: a.planet(),
            body_b: b.planet(),
            kind: definition.kind,
            separation,
            orb_delta,
            exact: orb_delta < EXACT_THRESHOLD,
            quality: definition.kind.quality(),
        })
    }

    /// Compute aspects within a single chart.
    ///
    /// Each unordered pair is visited once and reported in canonical order,
    /// so swapping input positions never changes the result.
    pub fn detect(&self, bodies: &[Body]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let pair = PlanetPair::new(bodies[i].planet(), bodies[j].planet());
                let (first, second) = if pair.first() == bodies[i].planet() {
                    (&bodies[i], &bodies[j])
                } else {
                    (&bodies[j], &bodies[i])
                };
                if let Some(aspect) = self.aspect_between(first, second) {
                    aspects.push(aspect);
                }
            }
        }
        debug!("Detected {} aspects among {} bodies", aspects.len(), bodies.len());
        aspects
    }

    /// Compute aspects between two charts.
    ///
    /// Every body in `bodies_a` is paired with every body in `bodies_b`;
    /// `body_a` of each result always comes from the first chart.
    pub fn detect_cross(&self, bodies_a: &[Body], bodies_b: &[Body]) -> Vec<Aspect> {
        let aspects: Vec<Aspect> = bodies_a
            .iter()
            .flat_map(|a| bodies_b.iter().filter_map(move |b| self.aspect_between(a, b)))
            .collect();
        debug!(
            "Detected {} cross aspects between {} and {} bodies",
            aspects.len(),
            bodies_a.len(),
            bodies_b.len()
        );
        aspects
    }
}

/// First pair of catalog entries whose orb windows intersect, if any.
pub fn first_overlap(catalog: &[AspectDefinition]) -> Option<(AspectDefinition, AspectDefinition)> {
    for (i, a) in catalog.iter().enumerate() {
        for b in catalog.iter().skip(i + 1) {
            let a_range = (a.target() - a.orb, a.target() + a.orb);
            let b_range = (b.target() - b.orb, b.target() + b.orb);
            if a_range.0 <= b_range.1 && b_range.0 <= a_range.1 {
                return Some((*a, *b));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::types::{default_aspect_catalog, AspectKind, Quality};
    use crate::chart::Planet;

    fn body(planet: Planet, lon: f64) -> Body {
        Body::new(planet, lon, 1, 0.0).unwrap()
    }

    #[test]
    fn test_angular_separation_wraps() {
        assert_eq!(angular_separation(10.0, 70.0), 60.0);
        assert_eq!(angular_separation(350.0, 10.0), 20.0);
        assert_eq!(angular_separation(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_identical_longitudes_are_conjunct() {
        let catalog = default_aspect_catalog();
        let detector = AspectDetector::with_catalog(&catalog);
        let (definition, delta) = detector.match_separation(0.0).unwrap();
        assert_eq!(definition.kind, AspectKind::Conjunction);
        assert_eq!(delta, 0.0);
    }

    #[test]
    fn test_overlapping_orbs_prefer_tightest() {
        let catalog = vec![
            AspectDefinition::new(AspectKind::Sextile, 20.0),
            AspectDefinition::new(AspectKind::Square, 20.0),
        ];
        assert!(first_overlap(&catalog).is_some());
        let detector = AspectDetector::with_catalog(&catalog);
        let (definition, _) = detector.match_separation(80.0).unwrap();
        assert_eq!(definition.kind, AspectKind::Square);
        let (definition, _) = detector.match_separation(70.0).unwrap();
        assert_eq!(definition.kind, AspectKind::Sextile);
        // Equidistant: earlier catalog entry wins
        let (definition, _) = detector.match_separation(75.0).unwrap();
        assert_eq!(definition.kind, AspectKind::Sextile);
    }

    #[test]
    fn test_detect_canonical_order() {
        let catalog = default_aspect_catalog();
        let detector = AspectDetector::with_catalog(&catalog);
        let forward = detector.detect(&[body(Planet::Venus, 10.0), body(Planet::Mars, 130.0)]);
        let reverse = detector.detect(&[body(Planet::Mars, 130.0), body(Planet::Venus, 10.0)]);
        assert_eq!(forward, reverse);
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].body_a, Planet::Mars);
        assert_eq!(forward[0].kind, AspectKind::Trine);
        assert_eq!(forward[0].quality, Quality::Harmonious);
    }

    #[test]
    fn test_calculate_aspect_validates() {
        let catalog = default_aspect_catalog();
        let detector = AspectDetector::with_catalog(&catalog);
        assert!(detector.calculate_aspect(400.0, 10.0).is_err());
        assert!(detector.calculate_aspect(10.0, 40.0).unwrap().is_none());
    }
}
