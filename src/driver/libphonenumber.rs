use log::trace;
use phonenumber::metadata::{Metadata, DATABASE};
use phonenumber::Mode;

use super::{ParsedNumber, PhoneDriver};
use crate::i18n::CountryCode;
use crate::number::{NumberFormat, NumberType, ParseError};

/// Production driver delegating to the `phonenumber` crate.
///
/// The crate has no direct equivalent of the possible-number check or the
/// out-of-country formatting calls of the reference library; those are
/// derived here from its metadata database and stock formatter modes, so
/// that everything above this module stays pure delegation.
pub struct Libphonenumber;

impl Libphonenumber {
    fn metadata_for(country: CountryCode) -> Option<&'static Metadata> {
        DATABASE.by_id(&country.to_string())
    }

    /// Metadata of the main region owning a calling code.
    fn metadata_for_calling_code(code: u16) -> Option<&'static Metadata> {
        DATABASE.by_code(&code).and_then(|regions| regions.into_iter().next())
    }

    /// Digit count of the national significant number, taken from the E.164
    /// rendering so leading national zeros are preserved.
    fn national_digits(number: &ParsedNumber) -> usize {
        let e164 = number.format().mode(Mode::E164).to_string();
        let code_digits = number.country().code().to_string().len();
        e164.len().saturating_sub(1 + code_digits)
    }
}

impl PhoneDriver for Libphonenumber {
    fn parse(&self, raw: &str, country: Option<CountryCode>) -> Result<ParsedNumber, ParseError> {
        phonenumber::parse(country.map(CountryCode::id), raw).map_err(|err| {
            trace!("parse failed for {:?} (hint {:?}): {:?}", raw, country, err);
            ParseError::Library(format!("{:?}", err))
        })
    }

    fn is_valid_number(&self, number: &ParsedNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn is_valid_number_for_region(&self, number: &ParsedNumber, country: CountryCode) -> bool {
        match Self::metadata_for(country) {
            // The region must use the number's calling code; past that, full
            // validity decides. Sub-regions sharing the calling code (NANPA)
            // are accepted here and disambiguated by the derived region.
            Some(metadata) => {
                metadata.country_code() == number.country().code() && phonenumber::is_valid(number)
            }
            None => false,
        }
    }

    fn is_possible_number(&self, number: &ParsedNumber, country: Option<CountryCode>) -> bool {
        let metadata = match country {
            Some(country) => Self::metadata_for(country),
            // The per-number lookup requires a derivable region, which a
            // possible-but-invalid number does not have. Fall back to the
            // main region of the calling code.
            None => number
                .metadata(&DATABASE)
                .or_else(|| Self::metadata_for_calling_code(number.country().code())),
        };
        let Some(metadata) = metadata else {
            return false;
        };
        if metadata.country_code() != number.country().code() {
            return false;
        }

        let digits = Self::national_digits(number);
        let general = metadata.descriptors().general();
        if general.possible_length().is_empty() {
            // Metadata without explicit length tables: fall back to the
            // E.164 bounds.
            return (2..=17).contains(&digits);
        }
        general.possible_length().iter().any(|&l| l as usize == digits)
            || general
                .possible_local_length()
                .iter()
                .any(|&l| l as usize == digits)
    }

    fn region_code_for_number(&self, number: &ParsedNumber) -> Option<CountryCode> {
        number.country().id().map(CountryCode::from_id)
    }

    fn number_type(&self, number: &ParsedNumber) -> NumberType {
        match number.number_type(&DATABASE) {
            phonenumber::Type::FixedLine => NumberType::FixedLine,
            phonenumber::Type::Mobile => NumberType::Mobile,
            phonenumber::Type::FixedLineOrMobile => NumberType::FixedLineOrMobile,
            phonenumber::Type::TollFree => NumberType::TollFree,
            phonenumber::Type::PremiumRate => NumberType::PremiumRate,
            phonenumber::Type::SharedCost => NumberType::SharedCost,
            phonenumber::Type::Voip => NumberType::VoIP,
            phonenumber::Type::PersonalNumber => NumberType::PersonalNumber,
            phonenumber::Type::Pager => NumberType::Pager,
            phonenumber::Type::Uan => NumberType::UAN,
            phonenumber::Type::Emergency => NumberType::Emergency,
            phonenumber::Type::Voicemail => NumberType::VoiceMail,
            // Short codes and the other carrier-internal categories have no
            // counterpart in the exposed enum.
            _ => NumberType::Unknown,
        }
    }

    fn format(&self, number: &ParsedNumber, format: NumberFormat) -> String {
        let mode = match format {
            NumberFormat::E164 => Mode::E164,
            NumberFormat::International => Mode::International,
            NumberFormat::National => Mode::National,
            NumberFormat::RFC3966 => Mode::Rfc3966,
        };
        number.format().mode(mode).to_string()
    }

    fn format_out_of_country(&self, number: &ParsedNumber, from: CountryCode) -> String {
        if self.region_code_for_number(number) == Some(from) {
            return number.format().mode(Mode::National).to_string();
        }
        match Self::metadata_for(from) {
            // Regions sharing the calling code (e.g. NANPA) dial the code
            // directly, without an international prefix.
            Some(metadata) if metadata.country_code() == number.country().code() => format!(
                "{} {}",
                number.country().code(),
                number.format().mode(Mode::National)
            ),
            _ => number.format().mode(Mode::International).to_string(),
        }
    }

    fn format_for_mobile_dialing(
        &self,
        number: &ParsedNumber,
        from: CountryCode,
        with_formatting: bool,
    ) -> String {
        let formatted = if self.region_code_for_number(number) == Some(from) {
            number.format().mode(Mode::National).to_string()
        } else if with_formatting {
            number.format().mode(Mode::International).to_string()
        } else {
            number.format().mode(Mode::E164).to_string()
        };
        if with_formatting {
            formatted
        } else {
            formatted
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect()
        }
    }
}
