mod number_tests;

use crate::driver::{ParsedNumber, PhoneDriver};
use crate::i18n::CountryCode;
use crate::number::{NumberFormat, NumberType, ParseError};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn country(code: &str) -> CountryCode {
    CountryCode::new(code).expect("supported country code")
}

/// A driver that fails every operation, for exercising the seam.
pub(super) struct RefuseEverything;

pub(super) static REFUSE: RefuseEverything = RefuseEverything;

impl PhoneDriver for RefuseEverything {
    fn parse(&self, _raw: &str, _country: Option<CountryCode>) -> Result<ParsedNumber, ParseError> {
        Err(ParseError::Library("refused".to_string()))
    }

    fn is_valid_number(&self, _number: &ParsedNumber) -> bool {
        false
    }

    fn is_valid_number_for_region(&self, _number: &ParsedNumber, _country: CountryCode) -> bool {
        false
    }

    fn is_possible_number(&self, _number: &ParsedNumber, _country: Option<CountryCode>) -> bool {
        false
    }

    fn region_code_for_number(&self, _number: &ParsedNumber) -> Option<CountryCode> {
        None
    }

    fn number_type(&self, _number: &ParsedNumber) -> NumberType {
        NumberType::Unknown
    }

    fn format(&self, _number: &ParsedNumber, _format: NumberFormat) -> String {
        String::new()
    }

    fn format_out_of_country(&self, _number: &ParsedNumber, _from: CountryCode) -> String {
        String::new()
    }

    fn format_for_mobile_dialing(
        &self,
        _number: &ParsedNumber,
        _from: CountryCode,
        _with_formatting: bool,
    ) -> String {
        String::new()
    }
}
