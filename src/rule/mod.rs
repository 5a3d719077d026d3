use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::i18n::CountryCode;
use crate::number::{NumberType, PhoneNumber};

/// Configuration errors of the rule itself; raised immediately, never
/// absorbed into a failed validation result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Allowed and blocked type lists are mutually exclusive.
    #[error("cannot use allowed and blocked phone types simultaneously")]
    ConflictingTypeFilters,

    /// A parameter matched both an input field and a country or type name,
    /// which is a caller programming error rather than something to guess
    /// an interpretation for.
    #[error("parameter {0:?} is both an input field and a country or type name")]
    AmbiguousParameter(String),
}

/// A phone validation predicate.
///
/// Configured through builder calls or string parameters, evaluated against
/// one field of an input record. The record is a plain json value so that
/// the sibling country field can be read from nested data with dot paths.
#[derive(Debug, Clone, Default)]
pub struct PhoneRule {
    countries: Vec<String>,
    country_field: Option<String>,
    allowed_types: Vec<NumberType>,
    blocked_types: Vec<NumberType>,
    international: bool,
    lenient: bool,
}

impl PhoneRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an explicit candidate country. Unsupported codes are kept here
    /// and discarded later by the value object, but their presence still
    /// counts for the country-membership check.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.countries.push(country.into());
        self
    }

    pub fn countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries.extend(countries.into_iter().map(Into::into));
        self
    }

    /// Names the input field to read the fallback country from. Defaults to
    /// `<attribute>_country`.
    pub fn country_field(mut self, name: impl Into<String>) -> Self {
        self.country_field = Some(name.into());
        self
    }

    pub fn number_type(mut self, number_type: NumberType) -> Self {
        self.allowed_types.push(number_type);
        self
    }

    pub fn not_type(mut self, number_type: NumberType) -> Self {
        self.blocked_types.push(number_type);
        self
    }

    pub fn mobile(self) -> Self {
        self.number_type(NumberType::Mobile)
    }

    pub fn fixed_line(self) -> Self {
        self.number_type(NumberType::FixedLine)
    }

    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }

    /// Accept any resolvable number regardless of the candidate countries.
    pub fn international(mut self) -> Self {
        self.international = true;
        self
    }

    /// Applies string parameters in the `BE,mobile,!voip,lenient` style.
    ///
    /// Each parameter is, in order of precedence: a blocked type (`!` prefix),
    /// the `lenient` or `international` flag, a type name, an existing input
    /// field naming the country source, or a country code. A parameter that
    /// is simultaneously an existing field and a type or country name is
    /// ambiguous and raises immediately.
    pub fn with_parameters<I, S>(mut self, parameters: I, data: &Value) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for parameter in parameters {
            let parameter = parameter.as_ref();

            if let Some(blocked) = parameter.strip_prefix('!') {
                if let Some(number_type) = NumberType::lookup(blocked) {
                    self = self.not_type(number_type);
                    continue;
                }
            }
            if parameter.eq_ignore_ascii_case("lenient") {
                self = self.lenient();
                continue;
            }
            if parameter.eq_ignore_ascii_case("international") {
                self = self.international();
                continue;
            }

            let as_type = NumberType::lookup(parameter);
            let names_country = CountryCode::new(parameter).is_some();
            let names_field = data_get(data, parameter).is_some();

            if names_field && (as_type.is_some() || names_country) {
                return Err(RuleError::AmbiguousParameter(parameter.to_string()));
            }

            if let Some(number_type) = as_type {
                self = self.number_type(number_type);
            } else if names_field {
                self.country_field = Some(parameter.to_string());
            } else if names_country {
                self = self.country(parameter);
            } else {
                debug!("ignoring unrecognized rule parameter {:?}", parameter);
            }
        }
        Ok(self)
    }

    /// Evaluates the rule for `value`, reading the fallback country from
    /// `data`. Configuration errors are checked before any resolution work.
    pub fn passes(&self, attribute: &str, value: &str, data: &Value) -> Result<bool, RuleError> {
        if !self.allowed_types.is_empty() && !self.blocked_types.is_empty() {
            return Err(RuleError::ConflictingTypeFilters);
        }

        let mut countries = Vec::new();
        if let Some(country) = self.country_field_value(attribute, data) {
            countries.push(country);
        }
        countries.extend(self.countries.iter().cloned());

        let phone = PhoneNumber::with_countries(value, &countries).lenient(self.lenient);

        // Is the resolved country within the supplied list (if applicable)?
        if !self.international && !countries.is_empty() && !phone.is_of_country(&countries) {
            return Ok(false);
        }

        if !self.allowed_types.is_empty() && !phone.is_of_type(&self.allowed_types) {
            return Ok(false);
        }

        if !self.blocked_types.is_empty() && phone.is_of_type(&self.blocked_types) {
            return Ok(false);
        }

        Ok(phone.is_valid())
    }

    fn country_field_value(&self, attribute: &str, data: &Value) -> Option<String> {
        let field = match &self.country_field {
            Some(field) => field.clone(),
            None => format!("{attribute}_country"),
        };
        data_get(data, &field)
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Dot-notation lookup into a nested json record, e.g.
/// `"billing.phone_country"` or `"contacts.0.country"`.
pub(crate) fn data_get<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = data;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
