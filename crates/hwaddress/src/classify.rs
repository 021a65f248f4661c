//! Classification of addresses whose concrete kind is not known up front.
//!
//! A [`Classifier`] holds an ordered candidate list and returns the first
//! kind that accepts the input. Input rejections move on to the next
//! candidate; a broken kind definition aborts the search.
//!
//! # Example
//!
//! ```
//! use hwaddress::{eui_address, EuiAddress, HardwareAddress};
//!
//! let addr = eui_address(0xffff_ffff_ffffu64).unwrap();
//! assert!(matches!(addr, EuiAddress::Eui48(_)));
//!
//! let addr = eui_address(0x1_0000_0000_0000u64).unwrap();
//! assert_eq!(addr.kind_name(), "EUI-64");
//! ```

use crate::address::{AddressInput, AddressKind, HardwareAddress, HwAddress};
use crate::digits::Digits;
use crate::error::{Error, Result};
use crate::kinds::*;
use crate::spec::AddressSpec;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::fmt;

/// One entry in a classifier's candidate list.
pub struct Candidate<T> {
    name: Cow<'static, str>,
    build: fn(AddressInput<'_>) -> Result<T>,
}

impl<T> Candidate<T> {
    /// Candidate trying kind `K`.
    pub fn of<K: AddressKind>() -> Self
    where
        HwAddress<K>: Into<T>,
    {
        Candidate {
            name: K::SPEC.name,
            build: build_as::<K, T>,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> fmt::Debug for Candidate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Candidate").field(&self.name).finish()
    }
}

fn build_as<K: AddressKind, T>(input: AddressInput<'_>) -> Result<T>
where
    HwAddress<K>: Into<T>,
{
    HwAddress::<K>::new(input).map(Into::into)
}

/// Ordered list of candidate kinds producing values of type `T`.
#[derive(Debug)]
pub struct Classifier<T> {
    candidates: Vec<Candidate<T>>,
}

impl<T> Default for Classifier<T> {
    fn default() -> Self {
        Classifier {
            candidates: Vec::new(),
        }
    }
}

impl<T> Classifier<T> {
    /// Creates an empty classifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends kind `K` to the candidate list.
    pub fn candidate<K: AddressKind>(mut self) -> Self
    where
        HwAddress<K>: Into<T>,
    {
        self.candidates.push(Candidate::of::<K>());
        self
    }

    /// Candidate names in the order they are tried.
    pub fn candidates(&self) -> impl Iterator<Item = &str> + '_ {
        self.candidates.iter().map(Candidate::name)
    }

    /// Returns the first candidate that constructs from `input`.
    ///
    /// # Errors
    ///
    /// [`Error::NoMatch`] if every candidate rejects the input. A candidate
    /// with an invalid definition fails the call with [`Error::Config`]
    /// immediately.
    pub fn classify<'a>(&self, input: impl Into<AddressInput<'a>>) -> Result<T> {
        let input = input.into();

        for candidate in &self.candidates {
            match (candidate.build)(input) {
                Ok(addr) => {
                    tracing::debug!(%input, kind = %candidate.name, "Classified address");
                    return Ok(addr);
                }
                Err(err) if err.is_validation() => {
                    tracing::trace!(%input, kind = %candidate.name, error = %err, "Candidate rejected");
                }
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(%input, "No candidate matched");
        Err(Error::NoMatch {
            input: input.to_string(),
            candidates: self.candidates().map(str::to_string).collect(),
        })
    }
}

macro_rules! address_family {
    ($(#[$meta:meta])* $name:ident { $($variant:ident($ty:ty)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($ty)),+
        }

        $(
            impl From<$ty> for $name {
                fn from(addr: $ty) -> Self {
                    $name::$variant(addr)
                }
            }
        )+

        impl HardwareAddress for $name {
            fn spec(&self) -> AddressSpec {
                match self {
                    $($name::$variant(addr) => addr.spec()),+
                }
            }

            fn digits(&self) -> &Digits {
                match self {
                    $($name::$variant(addr) => addr.digits()),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $($name::$variant(addr) => fmt::Display::fmt(addr, f)),+
                }
            }
        }
    };
}

address_family!(
    /// Result of [`hw_address`].
    GenericAddress {
        Mac(Mac),
        Mac64(Mac64),
        Guid(Guid),
    }
);

address_family!(
    /// Result of [`eui_address`].
    EuiAddress {
        Eui48(Eui48),
        Eui64(Eui64),
    }
);

address_family!(
    /// Result of [`wwn_address`].
    WwnAddress {
        Wwn(Wwn),
        Wwnx(Wwnx),
    }
);

address_family!(
    /// Result of [`ib_address`].
    IbAddress {
        Lid(IbLid),
        Guid(IbGuid),
        Gid(IbGid),
    }
);

address_family!(
    /// Any built-in kind, for caller-assembled classifiers.
    AnyAddress {
        Mac(Mac),
        Mac64(Mac64),
        Guid(Guid),
        Eui48(Eui48),
        Eui64(Eui64),
        Wwn(Wwn),
        Wwnx(Wwnx),
        IbLid(IbLid),
        IbGuid(IbGuid),
        IbGid(IbGid),
        Oui(Oui),
        Cid(Cid),
        Oui36(Oui36),
        IbGidPrefix(IbGidPrefix),
    }
);

impl Classifier<GenericAddress> {
    /// 48-bit, then 64-bit, then 128-bit.
    pub fn generic() -> Self {
        Classifier::new()
            .candidate::<MacKind>()
            .candidate::<Mac64Kind>()
            .candidate::<GuidKind>()
    }
}

impl Classifier<EuiAddress> {
    /// EUI-48, then EUI-64.
    pub fn eui() -> Self {
        Classifier::new()
            .candidate::<Eui48Kind>()
            .candidate::<Eui64Kind>()
    }
}

impl Classifier<WwnAddress> {
    /// WWN, then WWNx.
    pub fn wwn() -> Self {
        Classifier::new()
            .candidate::<WwnKind>()
            .candidate::<WwnxKind>()
    }
}

impl Classifier<IbAddress> {
    /// LID, then GUID, then GID.
    pub fn infiniband() -> Self {
        Classifier::new()
            .candidate::<IbLidKind>()
            .candidate::<IbGuidKind>()
            .candidate::<IbGidKind>()
    }
}

static GENERIC: Lazy<Classifier<GenericAddress>> = Lazy::new(Classifier::generic);
static EUI: Lazy<Classifier<EuiAddress>> = Lazy::new(Classifier::eui);
static WWN: Lazy<Classifier<WwnAddress>> = Lazy::new(Classifier::wwn);
static INFINIBAND: Lazy<Classifier<IbAddress>> = Lazy::new(Classifier::infiniband);

/// Classifies `input` as the narrowest of MAC, MAC-64, or GUID.
pub fn hw_address<'a>(input: impl Into<AddressInput<'a>>) -> Result<GenericAddress> {
    GENERIC.classify(input)
}

/// Classifies `input` as EUI-48 or EUI-64.
pub fn eui_address<'a>(input: impl Into<AddressInput<'a>>) -> Result<EuiAddress> {
    EUI.classify(input)
}

/// Classifies `input` as WWN or WWNx.
pub fn wwn_address<'a>(input: impl Into<AddressInput<'a>>) -> Result<WwnAddress> {
    WWN.classify(input)
}

/// Classifies `input` as InfiniBand LID, GUID, or GID.
pub fn ib_address<'a>(input: impl Into<AddressInput<'a>>) -> Result<IbAddress> {
    INFINIBAND.classify(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::options::{Delimiter, Grouping};
    use pretty_assertions::assert_eq;

    struct Broken;

    impl AddressKind for Broken {
        const SPEC: AddressSpec =
            AddressSpec::builtin("BROKEN", 48, Grouping::Uniform(9), Delimiter::Colon);
    }

    #[derive(Debug)]
    enum Probe {
        Broken,
        Mac,
    }

    impl From<HwAddress<Broken>> for Probe {
        fn from(_: HwAddress<Broken>) -> Self {
            Probe::Broken
        }
    }

    impl From<Mac> for Probe {
        fn from(_: Mac) -> Self {
            Probe::Mac
        }
    }

    #[test]
    fn test_candidate_order() {
        let classifier = Classifier::infiniband();
        let names: Vec<&str> = classifier.candidates().collect();
        assert_eq!(names, vec!["IB-LID", "IB-GUID", "IB-GID"]);
    }

    #[test]
    fn test_first_match_wins() {
        assert!(matches!(hw_address(0u8).unwrap(), GenericAddress::Mac(_)));
        assert!(matches!(
            hw_address((1u128 << 48) - 1).unwrap(),
            GenericAddress::Mac(_)
        ));
        assert!(matches!(
            hw_address(1u128 << 48).unwrap(),
            GenericAddress::Mac64(_)
        ));
        assert!(matches!(
            hw_address(1u128 << 64).unwrap(),
            GenericAddress::Guid(_)
        ));
    }

    #[test]
    fn test_no_match() {
        let err = hw_address("abcd").unwrap_err();
        assert_eq!(
            err,
            Error::NoMatch {
                input: "'abcd'".to_string(),
                candidates: vec!["MAC".into(), "MAC-64".into(), "GUID".into()],
            }
        );
    }

    #[test]
    fn test_config_error_aborts_search() {
        let classifier = Classifier::<Probe>::new()
            .candidate::<Broken>()
            .candidate::<MacKind>();
        let err = classifier.classify("12:34:56:78:9a:bc").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_custom_order() {
        let classifier = Classifier::<AnyAddress>::new()
            .candidate::<WwnKind>()
            .candidate::<Eui64Kind>();
        let addr = classifier.classify("10:00:00:00:c9:12:34:56").unwrap();
        assert_eq!(addr.kind_name(), "WWN");
        let addr = classifier.classify("30:00:00:00:c9:12:34:56").unwrap();
        assert!(matches!(addr, AnyAddress::Eui64(_)));
    }

    #[test]
    fn test_family_display_delegates() {
        let addr = ib_address(0xbeefu16).unwrap();
        assert_eq!(addr.to_string(), "0xbeef");
        let addr = wwn_address("5006016088001122").unwrap();
        assert_eq!(addr.to_string(), "50:06:01:60:88:00:11:22");
        assert_eq!(addr.hex(), "0x5006016088001122");
    }

    #[test]
    fn test_negative_is_rejected_everywhere() {
        let err = eui_address(-1i32).unwrap_err();
        assert!(matches!(err, Error::NoMatch { .. }));
        assert!(matches!(
            Eui48::new(-1i32),
            Err(Error::Validation(ValidationError::Negative { value: -1 }))
        ));
    }
}
