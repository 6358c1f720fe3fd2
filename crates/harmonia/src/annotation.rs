use crate::chart::{Chart, Planet};
use crate::error::Result;
use crate::frequency::FrequencyResolver;
use crate::reference::{PlanetTone, ReferenceTables};
use crate::western::{Element, Sign};
use serde::{Deserialize, Serialize};

/// A body joined with everything the wheel and playback layers need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyAnnotation {
    pub planet: Planet,
    pub sign: Sign,
    pub element: Element,
    pub house: u8,
    pub intensity: u8,
    pub tone: PlanetTone,
}

/// Annotate every body in the chart, in chart order.
pub fn annotate(chart: &Chart, tables: &ReferenceTables) -> Result<Vec<BodyAnnotation>> {
    let resolver = FrequencyResolver::new(tables);
    chart
        .bodies()
        .iter()
        .map(|body| -> Result<BodyAnnotation> {
            Ok(BodyAnnotation {
                planet: body.planet(),
                sign: body.sign(),
                element: body.element(),
                house: body.house(),
                intensity: resolver.resolve_house(body.house(), body.degree_in_house())?,
                tone: resolver.resolve_body(body.planet())?,
            })
        })
        .collect()
}
