use crate::aspects::{Aspect, AspectDetector};
use crate::chart::{Chart, Planet};
use crate::error::Result;
use crate::frequency::FrequencyResolver;
use crate::harmony::HarmonyClassifier;
use crate::reference::ReferenceTables;
use crate::synastry::types::{CompatibilitySignal, ContextItem, SynastryConnection};
use crate::western::ElementPairing;
use log::debug;

/// Secondary aspects listed in the mutual context
const MAX_CONTEXT_ASPECTS: usize = 5;

/// Compares two charts and surfaces their strongest connection.
pub struct SynastryScorer<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> SynastryScorer<'a> {
    /// Every priority body must have a tone; a missing one is `UnknownBody`.
    pub fn new(tables: &'a ReferenceTables) -> Result<Self> {
        let resolver = FrequencyResolver::new(tables);
        for planet in &tables.priority {
            resolver.resolve_body(*planet)?;
        }
        Ok(Self { tables })
    }

    fn priority_rank(&self, planet: Planet) -> usize {
        self.tables
            .priority
            .iter()
            .position(|p| *p == planet)
            .unwrap_or(usize::MAX)
    }

    /// Cross aspects between the charts' priority bodies, ordered by the
    /// priority rank of chart A's body, then chart B's body.
    ///
    /// The order depends only on the priority list, never on the order the
    /// charts list their bodies in.
    pub fn ranked_aspects(&self, chart_a: &Chart, chart_b: &Chart) -> Vec<Aspect> {
        let bodies_a = chart_a.restrict_to(&self.tables.priority);
        let bodies_b = chart_b.restrict_to(&self.tables.priority);
        let mut aspects = AspectDetector::new(self.tables).detect_cross(&bodies_a, &bodies_b);
        aspects.sort_by_key(|a| (self.priority_rank(a.body_a), self.priority_rank(a.body_b)));
        aspects
    }

    /// First aspect found walking the priority list for chart A, then chart B.
    pub fn primary_aspect<'b>(&self, ranked: &'b [Aspect]) -> Option<&'b Aspect> {
        self.tables.priority.iter().find_map(|pa| {
            self.tables
                .priority
                .iter()
                .find_map(|pb| ranked.iter().find(|a| a.body_a == *pa && a.body_b == *pb))
        })
    }

    /// Element pairing of the two charts' dominant bodies, in A-to-B direction.
    pub fn element_match(&self, chart_a: &Chart, chart_b: &Chart) -> Option<ElementPairing> {
        let dominant = self.tables.dominant;
        let a = chart_a.body(dominant)?;
        let b = chart_b.body(dominant)?;
        self.tables
            .element_pairing(a.element(), b.element())
            .cloned()
    }

    /// Build the connection between two charts.
    ///
    /// Charts without priority bodies or a dominant body still produce a
    /// connection, with the affected fields empty.
    pub fn calculate_connection(&self, chart_a: &Chart, chart_b: &Chart) -> Result<SynastryConnection> {
        let ranked = self.ranked_aspects(chart_a, chart_b);
        let primary = self.primary_aspect(&ranked).cloned();
        let element_match = self.element_match(chart_a, chart_b);

        let classifier = HarmonyClassifier::new(self.tables);
        let resolver = FrequencyResolver::new(self.tables);

        let shared_genre = element_match
            .as_ref()
            .and_then(|m| self.tables.genre(m.element_a, m.element_b))
            .map(str::to_string);

        let (primary_description, insight, shared_frequency) = match &primary {
            Some(aspect) => {
                debug!("Primary aspect: {}", aspect.label());
                (
                    Some(classifier.describe_aspect(aspect)),
                    Some(classifier.insight(aspect.body_a, aspect.body_b, aspect.kind)),
                    Some(resolver.shared_frequency(aspect.body_a, aspect.body_b, aspect.quality)?),
                )
            }
            None => {
                debug!("No primary aspect among {} cross aspects", ranked.len());
                (None, None, None)
            }
        };

        let mut mutual_context = Vec::new();
        if let Some(pairing) = &element_match {
            mutual_context.push(ContextItem {
                label: pairing.label(),
                detail: pairing.meaning.clone(),
            });
        }
        for aspect in ranked
            .iter()
            .filter(|a| primary.as_ref() != Some(*a))
            .take(MAX_CONTEXT_ASPECTS)
        {
            mutual_context.push(ContextItem {
                label: aspect.label(),
                detail: classifier.describe_aspect(aspect).meaning.as_str().to_string(),
            });
        }

        let compatibility =
            CompatibilitySignal::from_aspects(&ranked, element_match.as_ref().map(|m| m.compatibility));

        Ok(SynastryConnection {
            primary_aspect: primary,
            primary_description,
            element_match,
            shared_frequency,
            shared_genre,
            insight,
            mutual_context,
            compatibility,
        })
    }
}
