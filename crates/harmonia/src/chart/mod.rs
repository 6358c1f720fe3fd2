pub mod body;
pub mod data;

pub use body::{Body, Planet, PlanetPair, ALL_PLANETS};
pub use data::Chart;
