use strum::{EnumIter, EnumString, IntoStaticStr};

/// The standardized output formats of the wrapped library.
///
/// For example, the Google Switzerland office number would be:
/// - **E164**: `+41446681800`
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
/// - **RFC3966**: `tel:+41-44-668-1800`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NumberFormat {
    /// International format without separators, always starting with a `+`
    /// followed by the country calling code. The canonical stored form.
    E164,
    /// Country calling code plus spaced groups, as recommended for
    /// international display.
    International,
    /// The format used for dialing within the number's own country; may
    /// include a national prefix such as `0`.
    National,
    /// The `tel:` link format with hyphen separators.
    RFC3966,
}

impl NumberFormat {
    /// Resolves a mixed-case name (`"e164"`, `"RFC3966"`) or a numeric string
    /// matching the upstream constant values (`"0"`..`"3"`). Unrecognized
    /// input yields `None`; boundary operations that promise a hard error
    /// wrap this themselves.
    pub fn lookup(value: &str) -> Option<Self> {
        if let Ok(format) = value.trim().parse::<NumberFormat>() {
            return Some(format);
        }
        match value.trim() {
            "0" => Some(NumberFormat::E164),
            "1" => Some(NumberFormat::International),
            "2" => Some(NumberFormat::National),
            "3" => Some(NumberFormat::RFC3966),
            _ => None,
        }
    }

    /// The lowercase name, matching the upstream constant spelling.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Categorizes phone numbers based on their primary use.
///
/// The set mirrors the wrapped library's categories; classification itself is
/// pure delegation, the only local policy being the fixed-or-mobile widening
/// applied by type predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NumberType {
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// Numbers assigned to wireless devices.
    Mobile,
    /// Used in regions (e.g. the USA) where fixed-line and mobile numbers
    /// cannot be told apart from the digits alone.
    FixedLineOrMobile,
    /// Free for the caller; the recipient pays.
    TollFree,
    /// Higher-rate service numbers.
    PremiumRate,
    /// Call cost split between caller and recipient.
    SharedCost,
    /// Voice-over-IP service numbers.
    #[strum(serialize = "voip")]
    VoIP,
    /// A number tied to a person rather than a location or device.
    PersonalNumber,
    /// Paging devices.
    Pager,
    /// Universal Access Numbers, routed by the owning company.
    UAN,
    /// Emergency services numbers.
    Emergency,
    /// Voicemail access numbers.
    #[strum(serialize = "voicemail")]
    VoiceMail,
    /// The number matches no known pattern for its region.
    Unknown,
}

impl NumberType {
    /// Resolves a mixed-case name (`"fixed_line"`, `"MOBILE"`) or a numeric
    /// string matching the upstream constant values. Unrecognized input
    /// yields `None`.
    pub fn lookup(value: &str) -> Option<Self> {
        if let Ok(number_type) = value.trim().parse::<NumberType>() {
            return Some(number_type);
        }
        match value.trim() {
            "0" => Some(NumberType::FixedLine),
            "1" => Some(NumberType::Mobile),
            "2" => Some(NumberType::FixedLineOrMobile),
            "3" => Some(NumberType::TollFree),
            "4" => Some(NumberType::PremiumRate),
            "5" => Some(NumberType::SharedCost),
            "6" => Some(NumberType::VoIP),
            "7" => Some(NumberType::PersonalNumber),
            "8" => Some(NumberType::Pager),
            "9" => Some(NumberType::UAN),
            "10" => Some(NumberType::Unknown),
            "27" => Some(NumberType::Emergency),
            "28" => Some(NumberType::VoiceMail),
            _ => None,
        }
    }

    /// The lowercase name, matching the upstream constant spelling.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Widens a requested type list with the combined fixed-or-mobile
    /// category when either specific type is present. Many numbering plans
    /// cannot distinguish the two, so a query for one must accept the
    /// combined category too. Applied for both positive and negative type
    /// matching, and only when one of the two specific types is requested.
    pub fn widen(types: &[NumberType]) -> Vec<NumberType> {
        let mut widened = types.to_vec();
        let wants_either = types
            .iter()
            .any(|t| matches!(t, NumberType::FixedLine | NumberType::Mobile));
        if wants_either && !widened.contains(&NumberType::FixedLineOrMobile) {
            widened.push(NumberType::FixedLineOrMobile);
        }
        widened
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_lookup_by_name_is_case_insensitive() {
        assert_eq!(NumberFormat::lookup("E164"), Some(NumberFormat::E164));
        assert_eq!(NumberFormat::lookup("rfc3966"), Some(NumberFormat::RFC3966));
        assert_eq!(NumberFormat::lookup("International"), Some(NumberFormat::International));
        assert_eq!(NumberFormat::lookup("fax"), None);
    }

    #[test]
    fn format_lookup_by_numeric_value() {
        assert_eq!(NumberFormat::lookup("0"), Some(NumberFormat::E164));
        assert_eq!(NumberFormat::lookup("2"), Some(NumberFormat::National));
        assert_eq!(NumberFormat::lookup("9"), None);
    }

    #[test]
    fn type_lookup_matches_names_and_numbers() {
        assert_eq!(NumberType::lookup("FIXED_LINE"), Some(NumberType::FixedLine));
        assert_eq!(NumberType::lookup("voip"), Some(NumberType::VoIP));
        assert_eq!(NumberType::lookup("Voicemail"), Some(NumberType::VoiceMail));
        assert_eq!(NumberType::lookup("2"), Some(NumberType::FixedLineOrMobile));
        assert_eq!(NumberType::lookup("27"), Some(NumberType::Emergency));
        assert_eq!(NumberType::lookup("landline"), None);
        assert_eq!(NumberType::lookup("99"), None);
    }

    #[test]
    fn names_are_lowercase() {
        assert_eq!(NumberType::FixedLineOrMobile.name(), "fixed_line_or_mobile");
        assert_eq!(NumberType::UAN.name(), "uan");
        assert_eq!(NumberType::VoIP.name(), "voip");
        assert_eq!(NumberFormat::RFC3966.name(), "rfc3966");
    }

    #[test]
    fn widening_applies_only_to_fixed_or_mobile_queries() {
        let widened = NumberType::widen(&[NumberType::Mobile]);
        assert!(widened.contains(&NumberType::FixedLineOrMobile));

        let widened = NumberType::widen(&[NumberType::FixedLine, NumberType::Pager]);
        assert!(widened.contains(&NumberType::FixedLineOrMobile));

        let untouched = NumberType::widen(&[NumberType::TollFree]);
        assert!(!untouched.contains(&NumberType::FixedLineOrMobile));
    }
}
