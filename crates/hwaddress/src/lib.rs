//! Hardware address types with loose parsing, strict validation, and
//! configurable formatting.
//!
//! Every address is a fixed-length sequence of hex digits. This crate
//! provides:
//!
//! - [`HwAddress`]: the generic value type, parameterized by an
//!   [`AddressKind`] that fixes bit length and default formatting
//! - Built-in kinds: [`Mac`], [`Mac64`], [`Guid`], [`Eui48`], [`Eui64`],
//!   [`Wwn`], [`Wwnx`], [`IbLid`], [`IbGuid`], [`IbGid`]
//! - Derived sub-fields through [`EuiFields`], [`WwnFields`], and
//!   [`IbGid::prefix`]/[`IbGid::guid`]
//! - [`Classifier`] and the [`hw_address`], [`eui_address`],
//!   [`wwn_address`], [`ib_address`] factories for input of unknown kind
//! - [`AddressSpec`] and [`Verifier`] for caller-defined formats
//!
//! # Example
//!
//! ```
//! use hwaddress::{Case, Delimiter, EuiFields, FormatOptions, HardwareAddress, Mac, Eui48};
//!
//! let mac: Mac = "0x1234.5678.9ABC".parse().unwrap();
//! assert_eq!(mac.to_string(), "12:34:56:78:9a:bc");
//!
//! let opts = FormatOptions::new()
//!     .with_delimiter(Delimiter::Period)
//!     .with_grouping(4usize)
//!     .with_case(Case::Upper);
//! assert_eq!(mac.format(&opts).unwrap(), "1234.5678.9ABC");
//!
//! let eui = Eui48::new(mac.to_u128()).unwrap();
//! assert_eq!(eui.oui().to_u128(), 0x12_3456);
//! ```

mod address;
mod classify;
mod digits;
mod error;
mod kinds;
mod options;
mod spec;

pub use address::{AddressInput, AddressKind, HardwareAddress, HwAddress};
pub use classify::{
    eui_address, hw_address, ib_address, wwn_address, AnyAddress, Candidate, Classifier,
    EuiAddress, GenericAddress, IbAddress, WwnAddress,
};
pub use digits::Digits;
pub use error::{ConfigError, Error, Result, ValidationError};
pub use kinds::{
    Cid, CidKind, Eui48, Eui48Kind, Eui64, Eui64Kind, EuiFamily, EuiFields, Guid, GuidKind,
    IbGid, IbGidKind, IbGidPrefix, IbGidPrefixKind, IbGuid, IbGuidKind, IbLid, IbLidKind, Mac,
    Mac64, Mac64Kind, MacKind, Oui, Oui36, Oui36Kind, OuiKind, Wwn, WwnFamily, WwnFields,
    WwnKind, Wwnx, WwnxKind,
};
pub use options::{Case, Delimiter, FormatOptions, Grouping, GROUP_SIZES, STRIP_TOKENS};
pub use spec::{AddressSpec, Verifier, MAX_BIT_LEN};
