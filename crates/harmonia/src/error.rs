use thiserror::Error;

/// Errors raised when engine inputs fall outside their domain.
///
/// Missing curated text and charts without a qualifying aspect are not
/// errors; those resolve to generated text and `None` respectively.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HarmoniaError {
    #[error("Unknown body: {name}")]
    UnknownBody { name: String },
    #[error("Invalid longitude: {value}. Expected a value in [0, 360)")]
    InvalidLongitude { value: f64 },
    #[error("Invalid degree in house: {value}. Expected a value within the 30 degree house span")]
    InvalidDegree { value: f64 },
    #[error("Invalid house: {value}. Expected a house index in [1, 12]")]
    InvalidHouse { value: u8 },
    #[error("Body {name} appears more than once in chart")]
    DuplicateBody { name: String },
}

pub type Result<T> = std::result::Result<T, HarmoniaError>;

/// Reject longitudes outside [0, 360) and NaN.
pub fn check_longitude(value: f64) -> Result<f64> {
    if (0.0..360.0).contains(&value) {
        Ok(value)
    } else {
        Err(HarmoniaError::InvalidLongitude { value })
    }
}

/// Reject degrees outside [0, 30) and NaN.
pub fn check_degree(value: f64) -> Result<f64> {
    if (0.0..30.0).contains(&value) {
        Ok(value)
    } else {
        Err(HarmoniaError::InvalidDegree { value })
    }
}

pub fn check_house(value: u8) -> Result<u8> {
    if (1..=12).contains(&value) {
        Ok(value)
    } else {
        Err(HarmoniaError::InvalidHouse { value })
    }
}
