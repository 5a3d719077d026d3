use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::driver::{self, ParsedNumber, PhoneDriver};
use crate::i18n::CountryCode;
use crate::number::{NumberError, NumberFormat, NumberType};
use crate::resolver::CountryResolver;

/// A phone number value object.
///
/// Holds the exact user-supplied text, an ordered list of candidate
/// countries and the lenient flag; everything else (the resolved country,
/// the parsed library-native number, types, formatted strings) is derived
/// on demand and never cached, since the candidate list of a derived value
/// may differ between calls.
///
/// Builder methods return a new instance; an existing value is never
/// mutated, so a base number can safely be reused across chained calls.
#[derive(Clone)]
pub struct PhoneNumber {
    raw: String,
    countries: Vec<CountryCode>,
    lenient: bool,
    driver: &'static dyn PhoneDriver,
}

impl PhoneNumber {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            countries: Vec::new(),
            lenient: false,
            driver: driver::shared(),
        }
    }

    /// Shortcut for [`PhoneNumber::new`] plus [`of_countries`].
    ///
    /// [`of_countries`]: PhoneNumber::of_countries
    pub fn with_countries<I, S>(raw: impl Into<String>, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(raw).of_countries(countries)
    }

    #[cfg(test)]
    pub(crate) fn using_driver(mut self, driver: &'static dyn PhoneDriver) -> Self {
        self.driver = driver;
        self
    }

    /// Returns a new value whose candidate list is extended with `country`.
    /// Unsupported codes are silently discarded, duplicates keep their
    /// first-appearance position.
    pub fn of_country(&self, country: &str) -> Self {
        self.of_countries([country])
    }

    /// Returns a new value whose candidate list is extended with `countries`.
    pub fn of_countries<I, S>(&self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = self.clone();
        for country in CountryCode::sanitize(countries) {
            if !next.countries.contains(&country) {
                next.countries.push(country);
            }
        }
        next
    }

    /// Toggles lenient matching: candidates are accepted on the relaxed
    /// possible-number check instead of full regional validity.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// The exact text this value was constructed from, never normalized.
    pub fn raw_number(&self) -> &str {
        &self.raw
    }

    pub fn countries(&self) -> &[CountryCode] {
        &self.countries
    }

    /// The resolved country, recomputed on every call.
    pub fn country(&self) -> Option<CountryCode> {
        CountryResolver::with_driver(self.driver).resolve(&self.raw, &self.countries, self.lenient)
    }

    /// Whether the number resolves to one of the given countries.
    pub fn is_of_country<I, S>(&self, countries: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let countries = CountryCode::sanitize(countries);
        self.country().map_or(false, |found| countries.contains(&found))
    }

    /// The library-native parsed number for the resolved country.
    ///
    /// Resolution failure is reported as country-mismatch when candidates
    /// were supplied and as country-required when there was nothing to try.
    pub fn parsed(&self) -> Result<ParsedNumber, NumberError> {
        match self.country() {
            Some(country) => Ok(self.driver.parse(&self.raw, Some(country))?),
            None if self.countries.is_empty() => Err(NumberError::CountryRequired {
                number: self.raw.clone(),
            }),
            None => Err(NumberError::CountryMismatch {
                number: self.raw.clone(),
                countries: self
                    .countries
                    .iter()
                    .map(CountryCode::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    /// The number's category, `Unknown` when it cannot be resolved at all.
    pub fn number_type(&self) -> NumberType {
        match self.parsed() {
            Ok(parsed) => self.driver.number_type(&parsed),
            Err(_) => NumberType::Unknown,
        }
    }

    /// Type predicate with the fixed-or-mobile widening: asking for either
    /// specific type also accepts the combined category.
    pub fn is_of_type(&self, types: &[NumberType]) -> bool {
        NumberType::widen(types).contains(&self.number_type())
    }

    /// Negative type predicate, widened the same way.
    pub fn is_not_of_type(&self, types: &[NumberType]) -> bool {
        !self.is_of_type(types)
    }

    /// Strict validity, or the relaxed possible-number check in lenient mode.
    /// The lenient check runs against the resolved country: a leniently
    /// resolved number may have no library-derivable region of its own.
    pub fn is_valid(&self) -> bool {
        match self.parsed() {
            Ok(parsed) if self.lenient => self.driver.is_possible_number(&parsed, self.country()),
            Ok(parsed) => self.driver.is_valid_number(&parsed),
            Err(_) => false,
        }
    }

    pub fn format(&self, format: NumberFormat) -> Result<String, NumberError> {
        Ok(self.driver.format(&self.parsed()?, format))
    }

    /// Formats by name or numeric constant; an unrecognized name is a hard
    /// error here, unlike the silent filtering of the lookup helpers.
    pub fn format_named(&self, format: &str) -> Result<String, NumberError> {
        let format = NumberFormat::lookup(format)
            .ok_or_else(|| NumberError::InvalidFormat(format.to_string()))?;
        self.format(format)
    }

    pub fn format_e164(&self) -> Result<String, NumberError> {
        self.format(NumberFormat::E164)
    }

    pub fn format_international(&self) -> Result<String, NumberError> {
        self.format(NumberFormat::International)
    }

    pub fn format_national(&self) -> Result<String, NumberError> {
        self.format(NumberFormat::National)
    }

    pub fn format_rfc3966(&self) -> Result<String, NumberError> {
        self.format(NumberFormat::RFC3966)
    }

    /// Formats the number as it would be dialed from `country`. An
    /// unsupported country is a hard error.
    pub fn format_for_country(&self, country: &str) -> Result<String, NumberError> {
        let country = CountryCode::new(country)
            .ok_or_else(|| NumberError::InvalidCountry(country.to_string()))?;
        Ok(self.driver.format_out_of_country(&self.parsed()?, country))
    }

    /// Formats the number for dialing from a mobile handset in `country`.
    pub fn format_for_mobile_dialing_in_country(
        &self,
        country: &str,
        with_formatting: bool,
    ) -> Result<String, NumberError> {
        let country = CountryCode::new(country)
            .ok_or_else(|| NumberError::InvalidCountry(country.to_string()))?;
        Ok(self
            .driver
            .format_for_mobile_dialing(&self.parsed()?, country, with_formatting))
    }

    /// Equality by canonical E.164 representation. An operand that cannot be
    /// formatted compares unequal instead of propagating the failure, which
    /// is also why this is a method and not `PartialEq`: an unparsable
    /// number is not even equal to itself.
    pub fn equals(&self, other: &PhoneNumber) -> bool {
        match (self.format_e164(), other.format_e164()) {
            (Ok(own), Ok(theirs)) => own == theirs,
            _ => false,
        }
    }

    pub fn not_equals(&self, other: &PhoneNumber) -> bool {
        !self.equals(other)
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneNumber")
            .field("raw", &self.raw)
            .field("countries", &self.countries)
            .field("lenient", &self.lenient)
            .finish()
    }
}

impl fmt::Display for PhoneNumber {
    /// The canonical E.164 string. Stringification must not fail, so an
    /// unformattable number falls back to its raw input.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format_e164() {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => f.write_str(&self.raw),
        }
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    /// Deserializes from the stored string form; the country is re-derived
    /// from the international format on use.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(PhoneNumber::new(String::deserialize(deserializer)?))
    }
}
