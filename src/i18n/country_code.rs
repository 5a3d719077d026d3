use std::fmt;
use std::str::FromStr;

use log::warn;
use phonenumber::country;

use crate::i18n::RegionCode;
use crate::number::NumberError;

/// A validated ISO-3166 alpha-2 country code.
///
/// Only codes the wrapped library has numbering metadata for can be
/// represented; everything else is rejected at construction time, which is
/// what lets the resolution loop assume every candidate is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode(country::Id);

impl CountryCode {
    /// Normalizes `code` (trim, uppercase) and returns `None` when the
    /// wrapped library does not support it. The library's unknown-region
    /// sentinel is rejected as well.
    pub fn new(code: &str) -> Option<Self> {
        let normalized = code.trim().to_ascii_uppercase();
        if normalized == RegionCode::unknown() {
            return None;
        }
        normalized.parse::<country::Id>().ok().map(CountryCode)
    }

    /// Order-preserving sanitation of a candidate list: case-normalize each
    /// entry, silently discard unsupported codes, and drop duplicates past
    /// their first appearance.
    pub fn sanitize<I, S>(codes: I) -> Vec<CountryCode>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sanitized = Vec::new();
        for code in codes {
            match Self::new(code.as_ref()) {
                Some(country) if !sanitized.contains(&country) => sanitized.push(country),
                Some(_) => {}
                None => warn!("discarding unsupported country code {:?}", code.as_ref()),
            }
        }
        sanitized
    }

    pub(crate) fn id(self) -> country::Id {
        self.0
    }

    pub(crate) fn from_id(id: country::Id) -> Self {
        CountryCode(id)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // country::Id debug-formats as the plain alpha-2 code.
        write!(f, "{:?}", self.0)
    }
}

impl FromStr for CountryCode {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or_else(|| NumberError::InvalidCountry(s.to_string()))
    }
}
