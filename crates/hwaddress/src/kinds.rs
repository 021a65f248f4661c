//! Built-in address kinds.
//!
//! Each kind is a marker type implementing [`AddressKind`], with a type alias
//! for the matching [`HwAddress`]. Derived sub-fields are shared through the
//! [`EuiFields`] and [`WwnFields`] traits.

use crate::address::{AddressKind, HardwareAddress, HwAddress};
use crate::digits::Digits;
use crate::error::ValidationError;
use crate::options::{Delimiter, Grouping};
use crate::spec::AddressSpec;
use std::borrow::Cow;

macro_rules! address_kind {
    ($(#[$meta:meta])* $kind:ident => $alias:ident, $name:literal, $bits:literal, $grouping:expr, $delimiter:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $kind;

        $(#[$meta])*
        pub type $alias = HwAddress<$kind>;

        impl AddressKind for $kind {
            const SPEC: AddressSpec = AddressSpec::builtin($name, $bits, $grouping, $delimiter);
        }
    };
}

macro_rules! address_kind_checked {
    ($(#[$meta:meta])* $kind:ident => $alias:ident, $name:literal, $bits:literal, $grouping:expr, $delimiter:expr, $check:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $kind;

        $(#[$meta])*
        pub type $alias = HwAddress<$kind>;

        impl AddressKind for $kind {
            const SPEC: AddressSpec = AddressSpec::builtin($name, $bits, $grouping, $delimiter);

            fn check(digits: &Digits) -> Result<(), ValidationError> {
                $check(digits)
            }
        }
    };
}

const PAIRS: Grouping = Grouping::Uniform(2);
const QUADS: Grouping = Grouping::Uniform(4);
const GUID_SECTIONS: Grouping = Grouping::Sections(Cow::Borrowed(&[8, 4, 4, 4, 12]));

address_kind!(
    /// Generic 48-bit hardware (MAC) address.
    MacKind => Mac, "MAC", 48, PAIRS, Delimiter::Colon
);
address_kind!(
    /// Generic 64-bit hardware address.
    Mac64Kind => Mac64, "MAC-64", 64, PAIRS, Delimiter::Colon
);
address_kind!(
    /// Generic 128-bit identifier, rendered `8-4-4-4-12`.
    GuidKind => Guid, "GUID", 128, GUID_SECTIONS, Delimiter::Hyphen
);
address_kind!(
    /// IEEE EUI-48.
    Eui48Kind => Eui48, "EUI-48", 48, PAIRS, Delimiter::Hyphen
);
address_kind!(
    /// IEEE EUI-64.
    Eui64Kind => Eui64, "EUI-64", 64, PAIRS, Delimiter::Hyphen
);
address_kind_checked!(
    /// Fibre Channel World Wide Name. NAA must be 1, 2, or 5.
    WwnKind => Wwn, "WWN", 64, PAIRS, Delimiter::Colon, check_wwn
);
address_kind_checked!(
    /// Extended (128-bit) World Wide Name. NAA must be 6.
    WwnxKind => Wwnx, "WWNx", 128, PAIRS, Delimiter::Colon, check_wwnx
);
address_kind!(
    /// InfiniBand Local Identifier.
    IbLidKind => IbLid, "IB-LID", 16, QUADS, Delimiter::None
);
address_kind!(
    /// InfiniBand Global Unique Identifier.
    IbGuidKind => IbGuid, "IB-GUID", 64, QUADS, Delimiter::Colon
);
address_kind!(
    /// InfiniBand Global Identifier: 64-bit subnet prefix then a GUID.
    IbGidKind => IbGid, "IB-GID", 128, QUADS, Delimiter::Colon
);
address_kind!(
    /// Organizationally Unique Identifier.
    OuiKind => Oui, "OUI", 24, PAIRS, Delimiter::Colon
);
address_kind!(
    /// Company ID.
    CidKind => Cid, "CID", 24, PAIRS, Delimiter::Colon
);
address_kind!(
    /// 36-bit Organizationally Unique Identifier.
    Oui36Kind => Oui36, "OUI-36", 36, PAIRS, Delimiter::Colon
);
address_kind!(
    /// Subnet prefix half of an InfiniBand GID.
    IbGidPrefixKind => IbGidPrefix, "IB-GID-prefix", 64, QUADS, Delimiter::Colon
);

fn check_wwn(digits: &Digits) -> Result<(), ValidationError> {
    match digits.leading() {
        '1' | '2' | '5' => Ok(()),
        _ => Err(ValidationError::structure(
            "WWN",
            "first hex digit must be 1, 2, or 5",
        )),
    }
}

fn check_wwnx(digits: &Digits) -> Result<(), ValidationError> {
    match digits.leading() {
        '6' => Ok(()),
        _ => Err(ValidationError::structure("WWNx", "first hex digit must be 6")),
    }
}

/// Kinds carrying an IEEE EUI layout.
pub trait EuiFamily: AddressKind {}

impl EuiFamily for Eui48Kind {}
impl EuiFamily for Eui64Kind {}
impl EuiFamily for IbGuidKind {}

/// Kinds carrying a Fibre Channel NAA in the leading digit.
pub trait WwnFamily: AddressKind {}

impl WwnFamily for WwnKind {}
impl WwnFamily for WwnxKind {}

/// Sub-fields of EUI-48/EUI-64 based addresses.
pub trait EuiFields: HardwareAddress {
    /// Organizationally Unique Identifier: the first 24 bits.
    fn oui(&self) -> Oui {
        Oui::from_trusted(self.digits().slice(0..6))
    }

    /// Company ID: the first 24 bits.
    fn cid(&self) -> Cid {
        Cid::from_trusted(self.digits().slice(0..6))
    }

    /// 36-bit OUI: the first 36 bits.
    fn oui36(&self) -> Oui36 {
        Oui36::from_trusted(self.digits().slice(0..9))
    }

    /// Least significant bit of the first octet is set.
    fn is_multicast(&self) -> bool {
        first_octet(self.digits()) & 0x01 != 0
    }

    fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    /// Second least significant bit of the first octet is set.
    fn is_local(&self) -> bool {
        first_octet(self.digits()) & 0x02 != 0
    }

    fn is_universal(&self) -> bool {
        !self.is_local()
    }
}

fn first_octet(digits: &Digits) -> u8 {
    u8::from_str_radix(digits.slice(0..2), 16).unwrap_or(0)
}

impl<K: EuiFamily> EuiFields for HwAddress<K> {}

/// Sub-fields of World Wide Names.
pub trait WwnFields: HardwareAddress {
    /// Network Address Authority: the leading digit.
    fn naa(&self) -> char {
        self.digits().leading()
    }

    /// Organizationally Unique Identifier; its position depends on the NAA.
    ///
    /// # Panics
    ///
    /// Panics if the NAA is not 1, 2, 5, or 6. Construction rejects such
    /// values, so reaching this is a bug.
    fn oui(&self) -> Oui {
        let range = match self.naa() {
            '1' | '2' => 4..10,
            '5' | '6' => 1..7,
            naa => panic!("WWN(x) NAA must be 1, 2, 5, or 6, found {naa}"),
        };
        Oui::from_trusted(self.digits().slice(range))
    }
}

impl<K: WwnFamily> WwnFields for HwAddress<K> {}

impl IbGid {
    /// Subnet prefix: the leading 64 bits.
    pub fn prefix(&self) -> IbGidPrefix {
        IbGidPrefix::from_trusted(self.digits().slice(0..16))
    }

    /// Port GUID: the trailing 64 bits.
    pub fn guid(&self) -> IbGuid {
        IbGuid::from_trusted(self.digits().slice(16..32))
    }

    /// Reassembles a GID from its prefix and GUID.
    pub fn from_parts(prefix: &IbGidPrefix, guid: &IbGuid) -> Self {
        let digits = format!("{}{}", prefix.digits(), guid.digits());
        IbGid::from_trusted(&digits)
    }
}
