mod libphonenumber;

pub use libphonenumber::Libphonenumber;

use crate::i18n::CountryCode;
use crate::number::{NumberFormat, NumberType, ParseError};

/// A parsed, library-native phone number.
pub type ParsedNumber = phonenumber::PhoneNumber;

/// The interface consumed from the wrapped phone number library, isolated
/// behind a trait so the resolver and the value object can be exercised
/// against a different implementation.
///
/// Implementations must be stateless with respect to calls: the library
/// loads its numbering-plan metadata once and never mutates it, so a single
/// instance is safe to share across threads.
pub trait PhoneDriver: Send + Sync {
    /// Parses `raw` against the given country context, or with the
    /// unknown-region mode when no country is supplied.
    fn parse(&self, raw: &str, country: Option<CountryCode>) -> Result<ParsedNumber, ParseError>;

    /// Full validity against the number's own numbering plan.
    fn is_valid_number(&self, number: &ParsedNumber) -> bool;

    /// Validity specifically for `country`'s numbering plan.
    fn is_valid_number_for_region(&self, number: &ParsedNumber, country: CountryCode) -> bool;

    /// Relaxed plausibility check (length-level, not pattern-level), against
    /// `country` when supplied or the number's own region otherwise.
    fn is_possible_number(&self, number: &ParsedNumber, country: Option<CountryCode>) -> bool;

    /// The region the library derives from the parsed number itself.
    fn region_code_for_number(&self, number: &ParsedNumber) -> Option<CountryCode>;

    fn number_type(&self, number: &ParsedNumber) -> NumberType;

    fn format(&self, number: &ParsedNumber, format: NumberFormat) -> String;

    /// Formats the number as it would be dialed from `from`.
    fn format_out_of_country(&self, number: &ParsedNumber, from: CountryCode) -> String;

    /// Formats the number for dialing from a mobile handset in `from`.
    fn format_for_mobile_dialing(
        &self,
        number: &ParsedNumber,
        from: CountryCode,
        with_formatting: bool,
    ) -> String;
}

/// The process-wide driver handle backed by the real library.
pub fn shared() -> &'static dyn PhoneDriver {
    &Libphonenumber
}
