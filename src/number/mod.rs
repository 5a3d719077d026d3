mod enums;
pub mod errors;
mod phone_number;

pub use enums::{NumberFormat, NumberType};
pub use errors::{NumberError, ParseError};
pub use phone_number::PhoneNumber;
