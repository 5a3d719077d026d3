//! Application-level glue around the [`phonenumber`] crate: country
//! resolution with candidate fallbacks, a validation rule, and attribute
//! codecs for persistence layers. All actual parsing, numbering-plan
//! metadata and formatting is delegated to the wrapped library.

/// Country codes and the special regions of the wrapped library.
pub mod i18n;

/// The seam around the wrapped library; swap in a stub for tests.
pub mod driver;

/// The phone number value object, its enums and error types.
pub mod number;

mod resolver;

/// Validation predicate for input pipelines.
pub mod rule;

/// Attribute codecs for persistence mappings.
pub mod cast;

pub use cast::{AttributeCodec, CastError, E164Codec, PairCodec, RawCodec};
pub use i18n::CountryCode;
pub use number::{NumberError, NumberFormat, NumberType, PhoneNumber};
pub use resolver::CountryResolver;
pub use rule::{PhoneRule, RuleError};

#[cfg(test)]
mod tests;
