pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, first_overlap, AspectDetector};
pub use types::{
    default_aspect_catalog, Aspect, AspectDefinition, AspectKind, Quality, ASPECT_KINDS,
};
