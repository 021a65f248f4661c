//! The generic address value type.

use crate::digits::Digits;
use crate::error::{ConfigError, Error, Result, ValidationError};
use crate::options::FormatOptions;
use crate::spec::AddressSpec;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

/// Raw input accepted by every address constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressInput<'a> {
    Unsigned(u128),
    /// Signed integers are accepted only when non-negative.
    Signed(i128),
    /// Loosely formatted string; delimiters and a `0x` prefix are ignored.
    Text(&'a str),
}

impl fmt::Display for AddressInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressInput::Unsigned(v) => write!(f, "{v}"),
            AddressInput::Signed(v) => write!(f, "{v}"),
            AddressInput::Text(s) => write!(f, "'{s}'"),
        }
    }
}

macro_rules! input_from {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for AddressInput<'_> {
                fn from(value: $ty) -> Self {
                    AddressInput::$variant(value as _)
                }
            }
        )+
    };
}

input_from!(Unsigned: u8, u16, u32, u64, usize);
input_from!(Signed: i8, i16, i32, i64, isize);

impl From<u128> for AddressInput<'_> {
    fn from(value: u128) -> Self {
        AddressInput::Unsigned(value)
    }
}

impl From<i128> for AddressInput<'_> {
    fn from(value: i128) -> Self {
        AddressInput::Signed(value)
    }
}

impl<'a> From<&'a str> for AddressInput<'a> {
    fn from(s: &'a str) -> Self {
        AddressInput::Text(s)
    }
}

impl<'a> From<&'a String> for AddressInput<'a> {
    fn from(s: &'a String) -> Self {
        AddressInput::Text(s.as_str())
    }
}

/// A concrete kind of hardware address.
///
/// Implementors are marker types. The [`AddressSpec`] fixes bit length and default
/// formatting; [`check`](AddressKind::check) adds structural constraints on
/// the normalized digits.
pub trait AddressKind: 'static {
    const SPEC: AddressSpec;

    /// Structural check run after normalization.
    fn check(_digits: &Digits) -> std::result::Result<(), ValidationError> {
        Ok(())
    }
}

/// Read access shared by every address value, whatever its kind.
///
/// All views are computed from the canonical digits.
pub trait HardwareAddress: fmt::Display {
    /// Spec of the concrete kind.
    fn spec(&self) -> AddressSpec;

    /// Canonical digits.
    fn digits(&self) -> &Digits;

    fn kind_name(&self) -> Cow<'static, str> {
        self.spec().name
    }

    fn bit_len(&self) -> u32 {
        self.spec().bit_len
    }

    /// Integer value.
    fn to_u128(&self) -> u128 {
        self.digits().to_u128()
    }

    /// `0x` followed by the digits.
    fn hex(&self) -> String {
        self.digits().to_hex()
    }

    /// Base-2 form of the integer value (`0b...`), no padding.
    fn bin(&self) -> String {
        self.digits().to_bin()
    }

    /// Every digit as four binary digits, separated by spaces.
    fn binary(&self) -> String {
        self.digits().to_padded_binary()
    }

    /// Renders with per-call overrides; unset options use the kind defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an overriding grouping does not fit the
    /// digit count.
    fn format(&self, options: &FormatOptions) -> std::result::Result<String, ConfigError> {
        self.spec().render(self.digits(), options)
    }

    /// Numeric comparison, across kinds.
    fn cmp_value(&self, other: &dyn HardwareAddress) -> Ordering {
        self.to_u128().cmp(&other.to_u128())
    }
}

/// An immutable address value of kind `K`.
///
/// Values of the same kind are equal when their integer values are; values
/// of different kinds are different types. Use
/// [`HardwareAddress::cmp_value`] to compare across kinds.
///
/// # Examples
///
/// ```
/// use hwaddress::{Eui48, HardwareAddress};
///
/// let addr: Eui48 = "12:34:56:78:9A:BC".parse().unwrap();
/// assert_eq!(addr.to_string(), "12-34-56-78-9a-bc");
/// assert_eq!(addr.to_u128(), 0x1234_5678_9abc);
/// assert_eq!(addr, Eui48::new(0x1234_5678_9abcu64).unwrap());
/// ```
pub struct HwAddress<K> {
    digits: Digits,
    kind: PhantomData<fn() -> K>,
}

impl<K: AddressKind> HwAddress<K> {
    /// Creates an address from an integer or string.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if the kind's [`AddressSpec`] is invalid, [`Error::Validation`]
    /// if the input does not describe an address of this kind.
    pub fn new<'a>(input: impl Into<AddressInput<'a>>) -> Result<Self> {
        let spec = K::SPEC;
        spec.validate()?;
        let digits = spec.normalize(&input.into())?;
        K::check(&digits)?;
        Ok(HwAddress {
            digits,
            kind: PhantomData,
        })
    }

    /// Builds a value from digits already sliced out of a valid address.
    pub(crate) fn from_trusted(digits: &str) -> Self {
        debug_assert_eq!(digits.len(), K::SPEC.digit_count());
        HwAddress {
            digits: Digits::from_normalized(digits.to_string()),
            kind: PhantomData,
        }
    }

    /// Returns true if `address` is laid out exactly in this kind's
    /// canonical format (letter case aside).
    pub fn verify(address: &str) -> bool {
        match K::SPEC.verifier() {
            Ok(verifier) => verifier.is_match(address) && Self::new(address).is_ok(),
            Err(_) => false,
        }
    }

    /// Digit at `index`.
    pub fn nibble(&self, index: usize) -> Option<char> {
        self.digits.nibble(index)
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.digits.iter()
    }
}

impl<K: AddressKind> HardwareAddress for HwAddress<K> {
    fn spec(&self) -> AddressSpec {
        K::SPEC
    }

    fn digits(&self) -> &Digits {
        &self.digits
    }
}

impl<K> Clone for HwAddress<K> {
    fn clone(&self) -> Self {
        HwAddress {
            digits: self.digits.clone(),
            kind: PhantomData,
        }
    }
}

impl<K> PartialEq for HwAddress<K> {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl<K> Eq for HwAddress<K> {}

impl<K> Hash for HwAddress<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl<K> PartialOrd for HwAddress<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for HwAddress<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits.to_u128().cmp(&other.digits.to_u128())
    }
}

impl<K: AddressKind> fmt::Display for HwAddress<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&K::SPEC.render_default(&self.digits))
    }
}

impl<K: AddressKind> fmt::Debug for HwAddress<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", K::SPEC.name, self)
    }
}

impl<K: AddressKind> FromStr for HwAddress<K> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl<K: AddressKind> TryFrom<&str> for HwAddress<K> {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl<K: AddressKind> TryFrom<u128> for HwAddress<K> {
    type Error = Error;

    fn try_from(value: u128) -> Result<Self> {
        Self::new(value)
    }
}

impl<K: AddressKind> From<HwAddress<K>> for u128 {
    fn from(addr: HwAddress<K>) -> u128 {
        addr.to_u128()
    }
}

impl<K: AddressKind> Serialize for HwAddress<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, K: AddressKind> Deserialize<'de> for HwAddress<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
