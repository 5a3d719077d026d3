use thiserror::Error;

/// Failure of the wrapped library's parser. Routine inside the resolution
/// loop, where it is absorbed and the next candidate is tried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("number could not be parsed: {0}")]
    Library(String),
}

/// Errors surfaced by the value object at its boundary operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// No candidates were supplied and the number is not in international
    /// form, so there is nothing to resolve against.
    #[error("no country could be determined for {number:?} and none was supplied")]
    CountryRequired { number: String },

    /// Candidates were supplied but the number matched none of them.
    #[error("number {number:?} does not match any of the countries [{countries}]")]
    CountryMismatch { number: String, countries: String },

    #[error("{0:?} is not a supported country code")]
    InvalidCountry(String),

    #[error("{0:?} is not a recognized number format")]
    InvalidFormat(String),
}
