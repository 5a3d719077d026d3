use log::trace;

use crate::driver::{self, PhoneDriver};
use crate::i18n::CountryCode;

/// Selects the one country a raw number should be evaluated against.
///
/// Resolution is deterministic: an international-form parse wins outright,
/// otherwise candidates are tried strictly in their supplied order. Failure
/// to resolve is a routine outcome, reported as `None`.
pub struct CountryResolver {
    driver: &'static dyn PhoneDriver,
}

impl CountryResolver {
    pub fn new() -> Self {
        Self::with_driver(driver::shared())
    }

    pub fn with_driver(driver: &'static dyn PhoneDriver) -> Self {
        Self { driver }
    }

    /// Resolves `raw` against `candidates`.
    ///
    /// Candidates must already be sanitized (guaranteed by [`CountryCode`]).
    /// Per-candidate parse failures are absorbed and the loop continues;
    /// each candidate is parsed at most once per call. Nothing is cached
    /// across calls, since callers may supply a different candidate ordering
    /// every time.
    pub fn resolve(
        &self,
        raw: &str,
        candidates: &[CountryCode],
        lenient: bool,
    ) -> Option<CountryCode> {
        if let Some(found) = self.from_international_form(raw) {
            trace!("{:?} resolved from international form to {}", raw, found);
            return Some(found);
        }

        for &candidate in candidates {
            let parsed = match self.driver.parse(raw, Some(candidate)) {
                Ok(parsed) => parsed,
                Err(_) => continue,
            };

            if lenient {
                if self.driver.is_possible_number(&parsed, Some(candidate)) {
                    trace!("{:?} leniently accepted for {}", raw, candidate);
                    return Some(candidate);
                }
            } else if self.driver.is_valid_number_for_region(&parsed, candidate) {
                // The derived region wins over the candidate itself: it may
                // be a sub-region sharing the candidate's calling code.
                let found = self
                    .driver
                    .region_code_for_number(&parsed)
                    .unwrap_or(candidate);
                trace!("{:?} resolved via candidate {} to {}", raw, candidate, found);
                return Some(found);
            }
        }

        trace!("{:?} matched none of {:?}", raw, candidates);
        None
    }

    /// The direct international parse attempt: an unknown-region parse,
    /// retried on the `+`-tail when a supported two-letter country code is
    /// glued in front of an otherwise international number. The embedded
    /// calling code wins over the literal prefix, so `"US+3212345678"`
    /// resolves to `BE`.
    fn from_international_form(&self, raw: &str) -> Option<CountryCode> {
        if let Ok(parsed) = self.driver.parse(raw, None) {
            if let Some(found) = self.driver.region_code_for_number(&parsed) {
                return Some(found);
            }
        }

        let tail = international_tail(raw)?;
        let parsed = self.driver.parse(tail, None).ok()?;
        self.driver.region_code_for_number(&parsed)
    }
}

impl Default for CountryResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the `+...` tail of inputs like `"US+3212345678"`, where the
/// leading two characters form a supported country code and the `+` appears
/// past them. Anything else is not considered international-looking.
fn international_tail(raw: &str) -> Option<&str> {
    let number = raw.trim();
    let plus = number.find('+')?;
    if plus < 2 {
        return None;
    }
    CountryCode::new(number.get(..2)?)?;
    number.get(plus..)
}
