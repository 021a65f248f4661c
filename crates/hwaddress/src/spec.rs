//! Address kind configuration: bit length and default formatting.
//!
//! An [`AddressSpec`] holds everything that distinguishes one kind of
//! address from another apart from structural checks. The built-in kinds use
//! `const` specs; callers can build their own at runtime with
//! [`AddressSpec::new`] or load them from configuration through serde.

use crate::address::AddressInput;
use crate::digits::Digits;
use crate::error::{ConfigError, ValidationError};
use crate::options::{Case, Delimiter, FormatOptions, Grouping, STRIP_TOKENS};
use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Widest supported address, so the integer view always fits in a `u128`.
pub const MAX_BIT_LEN: u32 = 128;

fn default_grouping() -> Grouping {
    Grouping::Uniform(2)
}

/// Fixed parameters of an address kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressSpec {
    /// Kind name, used in errors and classifier reports.
    pub name: Cow<'static, str>,
    /// Address length in bits; a positive multiple of 4.
    pub bit_len: u32,
    #[serde(default = "default_grouping")]
    pub grouping: Grouping,
    pub delimiter: Delimiter,
    #[serde(default)]
    pub case: Case,
}

impl AddressSpec {
    /// Spec for a built-in kind. Not validated; see [`AddressSpec::validate`].
    pub const fn builtin(
        name: &'static str,
        bit_len: u32,
        grouping: Grouping,
        delimiter: Delimiter,
    ) -> Self {
        AddressSpec {
            name: Cow::Borrowed(name),
            bit_len,
            grouping,
            delimiter,
            case: Case::Lower,
        }
    }

    /// Creates and validates a spec for a caller-defined kind.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the parameters break any of the rules
    /// checked by [`AddressSpec::validate`].
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        bit_len: u32,
        delimiter: Delimiter,
        grouping: impl Into<Grouping>,
        case: Case,
    ) -> Result<Self, ConfigError> {
        let spec = AddressSpec {
            name: name.into(),
            bit_len,
            grouping: grouping.into(),
            delimiter,
            case,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Number of hex digits in an address of this kind.
    pub const fn digit_count(&self) -> usize {
        (self.bit_len / 4) as usize
    }

    /// Checks the kind parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = if self.bit_len == 0 || self.bit_len % 4 != 0 || self.bit_len > MAX_BIT_LEN {
            Err(ConfigError::BitLength {
                kind: self.name.to_string(),
                bits: self.bit_len,
            })
        } else {
            self.grouping.validate(&self.name, self.digit_count())
        };

        if let Err(err) = &result {
            tracing::warn!(kind = %self.name, error = %err, "Invalid address kind definition");
        }
        result
    }

    /// Runs the shared normalization path on `input`.
    ///
    /// Integers are zero-padded to the digit count; strings are lowercased
    /// and stripped of [`STRIP_TOKENS`]. The result must be exactly
    /// [`digit_count`](Self::digit_count) hex digits.
    pub fn normalize(&self, input: &AddressInput<'_>) -> Result<Digits, ValidationError> {
        match *input {
            AddressInput::Unsigned(value) => self.normalize_str(&self.pad_integer(value)?),
            AddressInput::Signed(value) => {
                let value =
                    u128::try_from(value).map_err(|_| ValidationError::Negative { value })?;
                self.normalize_str(&self.pad_integer(value)?)
            }
            AddressInput::Text(text) => self.normalize_str(text),
        }
    }

    fn pad_integer(&self, value: u128) -> Result<String, ValidationError> {
        let bits = u128::BITS - value.leading_zeros();
        if bits > self.bit_len {
            return Err(ValidationError::Overflow {
                value,
                bits: self.bit_len,
            });
        }
        Ok(format!("{:0width$x}", value, width = self.digit_count()))
    }

    fn normalize_str(&self, input: &str) -> Result<Digits, ValidationError> {
        let stripped = STRIP_TOKENS
            .iter()
            .fold(input.to_lowercase(), |acc, token| acc.replace(token, ""));

        let expected = self.digit_count();
        let found = stripped.chars().count();
        if found != expected {
            return Err(ValidationError::Length {
                input: input.to_string(),
                expected,
                found,
            });
        }

        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::NonHex {
                input: input.to_string(),
            });
        }

        Ok(Digits::from_normalized(stripped))
    }

    /// Renders `digits` with the spec defaults, overridden by `options`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an overriding grouping is invalid for the
    /// digit count.
    pub fn render(&self, digits: &Digits, options: &FormatOptions) -> Result<String, ConfigError> {
        let grouping = options.grouping.as_ref().unwrap_or(&self.grouping);
        grouping.validate(&self.name, digits.len())?;
        Ok(render_digits(
            digits.as_str(),
            grouping,
            options.delimiter.unwrap_or(self.delimiter),
            options.case.unwrap_or(self.case),
        ))
    }

    /// Renders `digits` with the spec defaults.
    pub fn render_default(&self, digits: &Digits) -> String {
        render_digits(digits.as_str(), &self.grouping, self.delimiter, self.case)
    }

    /// Normalizes `input` and renders it in this spec's canonical format.
    ///
    /// Structural checks belong to address kinds, not specs, and are not run.
    pub fn canonicalize<'a>(
        &self,
        input: impl Into<AddressInput<'a>>,
    ) -> crate::Result<String> {
        self.validate()?;
        let digits = self.normalize(&input.into())?;
        Ok(self.render_default(&digits))
    }

    /// Compiles a [`Verifier`] for this spec's default layout.
    pub fn verifier(&self) -> Result<Verifier, ConfigError> {
        Verifier::new(self, &FormatOptions::default())
    }
}

/// Groups, joins, and cases digits. An empty delimiter yields the `0x` form.
pub(crate) fn render_digits(
    digits: &str,
    grouping: &Grouping,
    delimiter: Delimiter,
    case: Case,
) -> String {
    let joined = grouping.join(digits, delimiter);
    let joined = if case.is_upper() {
        joined.to_uppercase()
    } else {
        joined
    };

    if delimiter.is_empty() {
        format!("0x{joined}")
    } else {
        joined
    }
}

/// Checks whether strings are laid out exactly in one address format.
///
/// Digits must sit in the right groups with the right delimiter between
/// them; letter case is not significant. With an empty delimiter the string
/// must carry the `0x` prefix.
#[derive(Debug, Clone)]
pub struct Verifier {
    name: String,
    pattern: Regex,
}

impl Verifier {
    /// Compiles a verifier for `spec` rendered with `options`.
    pub fn new(spec: &AddressSpec, options: &FormatOptions) -> Result<Self, ConfigError> {
        spec.validate()?;
        let grouping = options.grouping.as_ref().unwrap_or(&spec.grouping);
        let delimiter = options.delimiter.unwrap_or(spec.delimiter);
        grouping.validate(&spec.name, spec.digit_count())?;

        let body = grouping
            .group_lengths(spec.digit_count())
            .into_iter()
            .map(|len| format!("[0-9a-f]{{{len}}}"))
            .join(&regex::escape(delimiter.as_str()));
        let prefix = if delimiter.is_empty() { "0x" } else { "" };
        let pattern = format!("(?i)^{prefix}{body}$");

        let pattern = Regex::new(&pattern).map_err(|e| ConfigError::Pattern {
            kind: spec.name.to_string(),
            message: e.to_string(),
        })?;

        Ok(Verifier {
            name: spec.name.to_string(),
            pattern,
        })
    }

    /// Kind name this verifier was built for.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_match(&self, address: &str) -> bool {
        self.pattern.is_match(address)
    }
}
