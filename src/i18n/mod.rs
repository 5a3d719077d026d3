mod country_code;
mod region_code;

pub use country_code::CountryCode;
pub use region_code::RegionCode;
