//! Configuration and validation failures.

use hwaddress::*;
use pretty_assertions::assert_eq;

struct AttrErr;

impl AddressKind for AttrErr {
    const SPEC: AddressSpec =
        AddressSpec::builtin("ATTR_ERR", 47, Grouping::Uniform(2), Delimiter::Period);
}

#[test]
fn test_config_errors() {
    assert!(matches!(
        AddressSpec::new("_", 47, Delimiter::Period, 2usize, Case::Lower),
        Err(ConfigError::BitLength { bits: 47, .. })
    ));
    assert!(matches!(
        AddressSpec::new("_", 48, Delimiter::Period, 0usize, Case::Lower),
        Err(ConfigError::GroupSize { size: 0, .. })
    ));
    assert!(matches!(
        AddressSpec::new("_", 48, Delimiter::Period, vec![4usize, 4], Case::Lower),
        Err(ConfigError::GroupSections { digits: 12, .. })
    ));
    assert!(matches!(
        "3".parse::<Delimiter>(),
        Err(ConfigError::Delimiter(_))
    ));

    let err = HwAddress::<AttrErr>::new("12:34:56:78:90:ab").unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_case_must_be_a_name() {
    let json = r#"{"name": "_", "bit_len": 48, "delimiter": ".", "case": "Potato"}"#;
    assert!(serde_json::from_str::<AddressSpec>(json).is_err());

    let json = r#"{"name": "_", "bit_len": 48, "delimiter": ".", "case": true}"#;
    assert!(serde_json::from_str::<AddressSpec>(json).is_err());
}

#[test]
fn test_validation_errors() {
    assert!(matches!(
        Mac::new("12:34:56:78:90:ag"),
        Err(Error::Validation(ValidationError::NonHex { .. }))
    ));
    assert!(matches!(
        Mac::new("12:34:56:78:90"),
        Err(Error::Validation(ValidationError::Length {
            expected: 12,
            found: 10,
            ..
        }))
    ));
    assert!(matches!(
        Mac::new("12:34:56:78:90:ab:cd"),
        Err(Error::Validation(ValidationError::Length { found: 14, .. }))
    ));
    assert!(matches!(
        Mac::new(1u128 << 48),
        Err(Error::Validation(ValidationError::Overflow { bits: 48, .. }))
    ));
    assert!(matches!(
        Mac::new(-5i64),
        Err(Error::Validation(ValidationError::Negative { value: -5 }))
    ));
    assert!(matches!(
        Wwnx::new(u128::MAX),
        Err(Error::Validation(ValidationError::Structure { .. }))
    ));
}

#[test]
fn test_no_truncation_or_padding() {
    // Strings never get padded, even though integers do.
    assert!(Mac::new("abc").is_err());
    assert!(Mac::new(0xabcu32).is_ok());
    assert!(IbLid::new("0x12345").is_err());
}

#[test]
fn test_factory_no_match() {
    let err = hw_address("abcd").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"'abcd' does not seem to be any of ["MAC", "MAC-64", "GUID"]"#
    );
}

#[test]
#[should_panic(expected = "NAA must be 1, 2, 5, or 6")]
fn test_wwn_oui_invariant() {
    // A WWN-family kind without the NAA check reaches the unreachable branch.
    struct Unchecked;

    impl AddressKind for Unchecked {
        const SPEC: AddressSpec =
            AddressSpec::builtin("UNCHECKED", 64, Grouping::Uniform(2), Delimiter::Colon);
    }

    impl WwnFamily for Unchecked {}

    let addr = HwAddress::<Unchecked>::new(0x3000_0000_0000_0000u64).unwrap();
    let _ = addr.oui();
}
