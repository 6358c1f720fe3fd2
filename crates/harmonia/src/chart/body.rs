use crate::error::{check_degree, check_house, check_longitude, HarmoniaError, Result};
use crate::western::{Element, Sign};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Celestial bodies supplied by the position resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    NorthNode,
}

pub const ALL_PLANETS: [Planet; 12] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
    Planet::Chiron,
    Planet::NorthNode,
];

impl Planet {
    /// Display name, also the key used for lexicographic pair ordering.
    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
            Planet::Chiron => "Chiron",
            Planet::NorthNode => "North Node",
        }
    }

    /// Identifier used in JSON and TOML ("sun", "north_node").
    pub fn id(self) -> &'static str {
        match self {
            Planet::Sun => "sun",
            Planet::Moon => "moon",
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
            Planet::Mars => "mars",
            Planet::Jupiter => "jupiter",
            Planet::Saturn => "saturn",
            Planet::Uranus => "uranus",
            Planet::Neptune => "neptune",
            Planet::Pluto => "pluto",
            Planet::Chiron => "chiron",
            Planet::NorthNode => "north_node",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = HarmoniaError;

    /// Accepts ids and display names in any case ("venus", "North Node", "north-node").
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c.to_ascii_lowercase() })
            .collect();
        ALL_PLANETS
            .iter()
            .copied()
            .find(|p| p.id() == normalized)
            .ok_or_else(|| HarmoniaError::UnknownBody { name: s.to_string() })
    }
}

/// Unordered planet pair stored in canonical (lexicographic name) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanetPair {
    first: Planet,
    second: Planet,
}

impl PlanetPair {
    pub fn new(a: Planet, b: Planet) -> Self {
        if a.name() <= b.name() {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn first(&self) -> Planet {
        self.first
    }

    pub fn second(&self) -> Planet {
        self.second
    }

    pub fn contains(&self, planet: Planet) -> bool {
        self.first == planet || self.second == planet
    }
}

#[derive(Debug, Deserialize)]
struct BodyRecord {
    planet: String,
    longitude: f64,
    house: u8,
    degree_in_house: f64,
}

/// A celestial body's placement in one chart snapshot.
///
/// Fields are validated on construction and deserialization; the sign is
/// derived from the longitude. A body cannot be altered once built:
///
/// ```compile_fail
/// use harmonia::{Body, Planet};
///
/// let mut body = Body::new(Planet::Sun, 10.0, 1, 10.0).unwrap();
/// body.longitude = 730.0;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BodyRecord")]
pub struct Body {
    planet: Planet,
    longitude: f64,
    house: u8,
    degree_in_house: f64,
    sign: Sign,
}

impl Body {
    pub fn new(planet: Planet, longitude: f64, house: u8, degree_in_house: f64) -> Result<Self> {
        let longitude = check_longitude(longitude)?;
        let house = check_house(house)?;
        let degree_in_house = check_degree(degree_in_house)?;
        Ok(Self {
            planet,
            longitude,
            house,
            degree_in_house,
            sign: Sign::from_longitude(longitude)?,
        })
    }

    pub fn planet(&self) -> Planet {
        self.planet
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn house(&self) -> u8 {
        self.house
    }

    pub fn degree_in_house(&self) -> f64 {
        self.degree_in_house
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn element(&self) -> Element {
        self.sign.element()
    }
}

impl TryFrom<BodyRecord> for Body {
    type Error = HarmoniaError;

    fn try_from(record: BodyRecord) -> Result<Self> {
        let planet = record.planet.parse()?;
        Body::new(planet, record.longitude, record.house, record.degree_in_house)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_from_str() {
        assert_eq!("venus".parse::<Planet>().unwrap(), Planet::Venus);
        assert_eq!("Venus".parse::<Planet>().unwrap(), Planet::Venus);
        assert_eq!("North Node".parse::<Planet>().unwrap(), Planet::NorthNode);
        assert_eq!("north-node".parse::<Planet>().unwrap(), Planet::NorthNode);
        assert_eq!(
            "vulcan".parse::<Planet>(),
            Err(HarmoniaError::UnknownBody { name: "vulcan".to_string() })
        );
    }

    #[test]
    fn test_pair_is_canonical() {
        let a = PlanetPair::new(Planet::Venus, Planet::Mars);
        let b = PlanetPair::new(Planet::Mars, Planet::Venus);
        assert_eq!(a, b);
        assert_eq!(a.first(), Planet::Mars);
        assert_eq!(a.second(), Planet::Venus);
        assert!(a.contains(Planet::Venus));
    }

    #[test]
    fn test_body_accessors() {
        let body = Body::new(Planet::Mars, 215.5, 8, 4.5).unwrap();
        assert_eq!(body.planet(), Planet::Mars);
        assert_eq!(body.longitude(), 215.5);
        assert_eq!(body.house(), 8);
        assert_eq!(body.degree_in_house(), 4.5);
        assert_eq!(body.sign(), Sign::Scorpio);
    }

    #[test]
    fn test_body_validation() {
        let body = Body::new(Planet::Sun, 135.0, 5, 12.0).unwrap();
        assert_eq!(body.sign(), Sign::Leo);
        assert_eq!(body.element(), Element::Fire);

        assert!(matches!(
            Body::new(Planet::Sun, 360.0, 5, 12.0),
            Err(HarmoniaError::InvalidLongitude { .. })
        ));
        assert!(matches!(
            Body::new(Planet::Sun, 10.0, 13, 12.0),
            Err(HarmoniaError::InvalidHouse { value: 13 })
        ));
        assert!(matches!(
            Body::new(Planet::Sun, 10.0, 1, 30.0),
            Err(HarmoniaError::InvalidDegree { .. })
        ));
    }

    #[test]
    fn test_body_json() {
        let json = r#"{"planet": "moon", "longitude": 95.5, "house": 4, "degree_in_house": 3.25}"#;
        let body: Body = serde_json::from_str(json).unwrap();
        assert_eq!(body.planet(), Planet::Moon);
        assert_eq!(body.sign(), Sign::Cancer);

        let bad = r#"{"planet": "moon", "longitude": -1.0, "house": 4, "degree_in_house": 3.25}"#;
        assert!(serde_json::from_str::<Body>(bad).is_err());

        let unknown = r#"{"planet": "vulcan", "longitude": 1.0, "house": 4, "degree_in_house": 3.25}"#;
        let err = serde_json::from_str::<Body>(unknown).unwrap_err();
        assert!(err.to_string().contains("Unknown body"));
    }
}
