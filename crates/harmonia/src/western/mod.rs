pub mod elements;
pub mod signs;

pub use elements::{default_element_pairings, Compatibility, Element, ElementPairing, ELEMENTS};
pub use signs::{get_sign_index, Sign, SIGN_ORDER};
