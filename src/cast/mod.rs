use serde_json::{Map, Value};
use thiserror::Error;

use crate::number::{NumberError, NumberFormat, PhoneNumber};
use crate::rule::data_get;

/// One row of stored attributes, keyed by column name.
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastError {
    /// An E.164 column must carry its own country; a stored national-format
    /// value cannot be read back.
    #[error("stored value for {0:?} is not in international format")]
    NotInternational(String),

    /// No country could be determined from the configured sibling columns.
    #[error("missing country specification for the {0:?} attribute")]
    MissingCountry(String),

    #[error("{0}")]
    Number(#[from] NumberError),
}

/// A persisted representation of a phone attribute.
///
/// `read` rebuilds the value object from the stored columns; `write` maps a
/// raw input to the columns to store. `write` returns every column the codec
/// maintains, which is how the pair codec keeps its companion country column
/// in sync.
pub trait AttributeCodec {
    fn read(&self, key: &str, attributes: &Record) -> Result<Option<PhoneNumber>, CastError>;

    fn write(
        &self,
        key: &str,
        value: Option<&str>,
        attributes: &Record,
    ) -> Result<Record, CastError>;
}

/// Stores the canonical E.164 string only.
#[derive(Debug, Clone, Default)]
pub struct E164Codec {
    parameters: Vec<String>,
}

impl E164Codec {
    pub fn new() -> Self {
        Self::default()
    }

    /// `parameters` may name sibling columns to read candidate countries
    /// from on write, or be country codes themselves.
    pub fn with_parameters<I, S>(parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }
}

impl AttributeCodec for E164Codec {
    fn read(&self, key: &str, attributes: &Record) -> Result<Option<PhoneNumber>, CastError> {
        let Some(value) = stored_string(attributes, key) else {
            return Ok(None);
        };

        let phone = PhoneNumber::new(value);
        if phone.country().is_none() {
            return Err(CastError::NotInternational(key.to_string()));
        }
        Ok(Some(phone))
    }

    fn write(
        &self,
        key: &str,
        value: Option<&str>,
        attributes: &Record,
    ) -> Result<Record, CastError> {
        let mut columns = Record::new();
        let Some(value) = nonempty(value) else {
            columns.insert(key.to_string(), Value::Null);
            return Ok(columns);
        };

        let countries = possible_countries(&self.parameters, key, attributes);
        let phone = PhoneNumber::with_countries(value, countries);
        columns.insert(
            key.to_string(),
            Value::String(phone.format(NumberFormat::E164)?),
        );
        Ok(columns)
    }
}

/// Stores the raw string; the country comes out-of-band from one or more
/// configured sibling columns.
#[derive(Debug, Clone, Default)]
pub struct RawCodec {
    parameters: Vec<String>,
}

impl RawCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters<I, S>(parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }
}

impl AttributeCodec for RawCodec {
    fn read(&self, key: &str, attributes: &Record) -> Result<Option<PhoneNumber>, CastError> {
        let Some(value) = stored_string(attributes, key) else {
            return Ok(None);
        };

        let countries = possible_countries(&self.parameters, key, attributes);
        let phone = PhoneNumber::with_countries(value, countries);
        let Some(country) = phone.country() else {
            return Err(CastError::MissingCountry(key.to_string()));
        };

        // Pin the value to the one resolved country.
        Ok(Some(PhoneNumber::with_countries(
            value,
            [country.to_string()],
        )))
    }

    fn write(
        &self,
        key: &str,
        value: Option<&str>,
        attributes: &Record,
    ) -> Result<Record, CastError> {
        let _ = attributes;
        let mut columns = Record::new();
        let stored = match nonempty(value) {
            Some(value) => Value::String(value.to_string()),
            None => Value::Null,
        };
        columns.insert(key.to_string(), stored);
        Ok(columns)
    }
}

/// Stores the raw string plus a companion country column, maintained
/// automatically on write.
#[derive(Debug, Clone, Default)]
pub struct PairCodec {
    country_column: Option<String>,
}

impl PairCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the companion column name, which defaults to
    /// `<key>_country`.
    pub fn with_country_column(column: impl Into<String>) -> Self {
        Self {
            country_column: Some(column.into()),
        }
    }

    fn column_for(&self, key: &str) -> String {
        match &self.country_column {
            Some(column) => column.clone(),
            None => format!("{key}_country"),
        }
    }
}

impl AttributeCodec for PairCodec {
    fn read(&self, key: &str, attributes: &Record) -> Result<Option<PhoneNumber>, CastError> {
        let Some(value) = stored_string(attributes, key) else {
            return Ok(None);
        };

        let column = self.column_for(key);
        let countries = record_get(attributes, &column)
            .and_then(Value::as_str)
            .into_iter()
            .collect::<Vec<_>>();

        let phone = PhoneNumber::with_countries(value, countries);
        if phone.country().is_none() {
            return Err(CastError::MissingCountry(key.to_string()));
        }
        Ok(Some(phone))
    }

    fn write(
        &self,
        key: &str,
        value: Option<&str>,
        attributes: &Record,
    ) -> Result<Record, CastError> {
        let column = self.column_for(key);
        let mut columns = Record::new();

        let Some(value) = nonempty(value) else {
            columns.insert(key.to_string(), Value::Null);
            columns.insert(column, Value::Null);
            return Ok(columns);
        };

        // The current companion value is the only candidate besides the
        // number's own international form.
        let countries = record_get(attributes, &column)
            .and_then(Value::as_str)
            .into_iter()
            .collect::<Vec<_>>();
        let phone = PhoneNumber::with_countries(value, countries);
        let Some(country) = phone.country() else {
            return Err(CastError::MissingCountry(key.to_string()));
        };

        columns.insert(key.to_string(), Value::String(value.to_string()));
        columns.insert(column, Value::String(country.to_string()));
        Ok(columns)
    }
}

/// The configured parameters plus the value of the first parameter naming an
/// existing column, defaulting to the `<key>_country` sibling. Parameters
/// that are neither get discarded later by candidate sanitation.
fn possible_countries(parameters: &[String], key: &str, attributes: &Record) -> Vec<String> {
    let mut countries = parameters.to_vec();

    let field = parameters
        .iter()
        .find(|parameter| record_get(attributes, parameter).is_some())
        .cloned()
        .unwrap_or_else(|| format!("{key}_country"));

    if let Some(country) = record_get(attributes, &field).and_then(Value::as_str) {
        countries.push(country.to_string());
    }
    countries
}

/// Dot-notation lookup over a record.
fn record_get<'a>(attributes: &'a Record, path: &str) -> Option<&'a Value> {
    let (head, rest) = match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };
    let value = attributes.get(head)?;
    match rest {
        Some(rest) => data_get(value, rest),
        None => Some(value),
    }
}

fn stored_string<'a>(attributes: &'a Record, key: &str) -> Option<&'a str> {
    record_get(attributes, key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
