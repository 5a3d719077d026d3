use super::{country, init_logs, REFUSE};
use crate::number::{NumberError, NumberType, PhoneNumber};

#[test]
fn resolves_and_round_trips_through_e164() {
    init_logs();
    let phone = PhoneNumber::new("012345678").of_country("BE");

    assert_eq!(phone.country(), Some(country("BE")));
    let e164 = phone.format_e164().unwrap();
    assert_eq!(e164, "+3212345678");

    // Re-resolving from the canonical form alone lands on the same country.
    let reparsed = PhoneNumber::new(e164);
    assert_eq!(reparsed.country(), phone.country());
}

#[test]
fn formatting_shortcuts_delegate_to_the_library() {
    let phone = PhoneNumber::new("+3212345678");

    assert_eq!(phone.format_e164().unwrap(), "+3212345678");
    assert!(phone.format_international().unwrap().starts_with("+32"));
    assert!(phone.format_national().unwrap().starts_with('0'));
    assert!(phone.format_rfc3966().unwrap().starts_with("tel:"));
}

#[test]
fn format_named_accepts_names_and_numeric_constants() {
    let phone = PhoneNumber::new("+3212345678");

    assert_eq!(phone.format_named("E164").unwrap(), "+3212345678");
    assert_eq!(phone.format_named("e164").unwrap(), phone.format_named("0").unwrap());

    let err = phone.format_named("intl").unwrap_err();
    assert_eq!(err, NumberError::InvalidFormat("intl".to_string()));
}

#[test]
fn dialing_context_formatting() {
    let phone = PhoneNumber::new("+3212345678");

    // Dialed at home: national format.
    assert_eq!(
        phone.format_for_country("BE").unwrap(),
        phone.format_national().unwrap()
    );
    // Dialed from abroad: carries the country calling code.
    assert!(phone.format_for_country("US").unwrap().contains("32"));
    // Mobile dialing without formatting is dialable digits only.
    assert_eq!(
        phone
            .format_for_mobile_dialing_in_country("US", false)
            .unwrap(),
        "+3212345678"
    );

    let err = phone.format_for_country("XX").unwrap_err();
    assert_eq!(err, NumberError::InvalidCountry("XX".to_string()));
}

#[test]
fn builder_returns_new_instances() {
    let base = PhoneNumber::new("012345678");
    let belgian = base.of_country("BE");

    assert!(base.countries().is_empty());
    assert_eq!(base.country(), None);
    assert_eq!(belgian.country(), Some(country("BE")));
}

#[test]
fn candidate_lists_are_sanitized_in_order() {
    let phone = PhoneNumber::new("012345678").of_countries(["be", "XX", "BE", "zz", "nl"]);
    assert_eq!(phone.countries(), &[country("BE"), country("NL")]);
}

#[test]
fn type_classification_widens_fixed_or_mobile() {
    // A US number: the numbering plan cannot tell fixed from mobile.
    let phone = PhoneNumber::new("+16502530000");

    assert_eq!(phone.number_type(), NumberType::FixedLineOrMobile);
    assert!(phone.is_of_type(&[NumberType::FixedLine]));
    assert!(phone.is_of_type(&[NumberType::Mobile]));
    assert!(!phone.is_of_type(&[NumberType::TollFree]));
    // Negative matching widens the same way.
    assert!(!phone.is_not_of_type(&[NumberType::Mobile]));
    assert!(phone.is_not_of_type(&[NumberType::Pager]));
}

#[test]
fn equality_tolerates_representation_and_malformed_operands() {
    let national = PhoneNumber::new("012345678").of_country("BE");
    let international = PhoneNumber::new("+3212345678");
    let junk = PhoneNumber::new("not a phone");

    assert!(national.equals(&international));
    assert!(international.equals(&national));
    assert!(national.equals(&national));

    assert!(!national.equals(&junk));
    assert!(!junk.equals(&national));
    assert!(!junk.equals(&junk));
    assert!(national.not_equals(&junk));
}

#[test]
fn display_never_fails() {
    assert_eq!(
        PhoneNumber::new("012345678").of_country("BE").to_string(),
        "+3212345678"
    );
    assert_eq!(PhoneNumber::new("not a phone").to_string(), "not a phone");
}

#[test]
fn serde_uses_the_canonical_string() {
    let phone = PhoneNumber::new("012345678").of_country("BE");
    assert_eq!(serde_json::to_string(&phone).unwrap(), "\"+3212345678\"");

    let stored: PhoneNumber = serde_json::from_str("\"+3212345678\"").unwrap();
    assert_eq!(stored.country(), Some(country("BE")));
}

#[test]
fn unresolvable_numbers_report_the_matching_error() {
    let bare = PhoneNumber::new("012345678");
    assert!(matches!(
        bare.parsed(),
        Err(NumberError::CountryRequired { .. })
    ));

    let mismatched = bare.of_country("NL");
    assert!(matches!(
        mismatched.parsed(),
        Err(NumberError::CountryMismatch { .. })
    ));

    assert_eq!(mismatched.number_type(), NumberType::Unknown);
    assert!(!mismatched.is_valid());
}

#[test]
fn lenient_mode_relaxes_validity() {
    let clipped = PhoneNumber::new("88885555").of_country("AU");

    assert!(!clipped.is_valid());
    assert!(clipped.lenient(true).is_valid());
}

#[test]
fn value_object_honors_an_injected_driver() {
    let phone = PhoneNumber::new("+3212345678").using_driver(&REFUSE);

    assert_eq!(phone.country(), None);
    assert!(!phone.is_valid());
    // Display falls back to the raw input when the driver fails.
    assert_eq!(phone.to_string(), "+3212345678");
}
