//! Formatting vocabulary shared by every address kind.

use crate::error::ConfigError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Allowed uniform group sizes, in hex digits.
pub const GROUP_SIZES: RangeInclusive<usize> = 1..=4;

/// Substrings removed from string input, in removal order.
pub const STRIP_TOKENS: [&str; 5] = ["-", ":", ".", " ", "0x"];

/// Character placed between digit groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Delimiter {
    Hyphen,
    Colon,
    Period,
    Space,
    /// No separator. Canonical rendering then uses the `0x` form.
    None,
}

impl Delimiter {
    /// Every allowed delimiter.
    pub const ALL: [Delimiter; 5] = [
        Delimiter::Hyphen,
        Delimiter::Colon,
        Delimiter::Period,
        Delimiter::Space,
        Delimiter::None,
    ];

    /// String forms of [`Delimiter::ALL`], same order.
    pub const ALL_STR: [&'static str; 5] = ["-", ":", ".", " ", ""];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Hyphen => "-",
            Delimiter::Colon => ":",
            Delimiter::Period => ".",
            Delimiter::Space => " ",
            Delimiter::None => "",
        }
    }

    /// Returns true for [`Delimiter::None`].
    pub const fn is_empty(&self) -> bool {
        matches!(self, Delimiter::None)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Delimiter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Delimiter::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ConfigError::Delimiter(s.to_string()))
    }
}

impl TryFrom<char> for Delimiter {
    type Error = ConfigError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_string().parse()
    }
}

impl TryFrom<String> for Delimiter {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Delimiter> for String {
    fn from(d: Delimiter) -> String {
        d.as_str().to_string()
    }
}

/// Letter case of rendered hex digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    #[default]
    Lower,
    Upper,
}

impl Case {
    pub const fn is_upper(&self) -> bool {
        matches!(self, Case::Upper)
    }
}

impl From<bool> for Case {
    /// `true` selects uppercase.
    fn from(upper: bool) -> Self {
        if upper {
            Case::Upper
        } else {
            Case::Lower
        }
    }
}

/// How digits are partitioned into groups.
///
/// Deserializes from either a number (`2`) or a list (`[8, 4, 4, 4, 12]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Grouping {
    /// Fixed-size groups left to right; the last group may be shorter.
    Uniform(usize),
    /// Explicit group lengths consumed in order.
    Sections(Cow<'static, [usize]>),
}

impl Grouping {
    /// Sections from a runtime list.
    pub fn sections(sections: impl Into<Vec<usize>>) -> Self {
        Grouping::Sections(Cow::Owned(sections.into()))
    }

    /// Checks this grouping against a digit count.
    pub fn validate(&self, kind: &str, digits: usize) -> Result<(), ConfigError> {
        match self {
            Grouping::Uniform(size) => {
                if GROUP_SIZES.contains(size) {
                    Ok(())
                } else {
                    Err(ConfigError::GroupSize {
                        kind: kind.to_string(),
                        size: *size,
                        min: *GROUP_SIZES.start(),
                        max: *GROUP_SIZES.end(),
                    })
                }
            }
            Grouping::Sections(sections) => {
                let sum: usize = sections.iter().sum();
                if sections.is_empty() || sections.contains(&0) || sum != digits {
                    Err(ConfigError::GroupSections {
                        kind: kind.to_string(),
                        sections: sections.to_vec(),
                        digits,
                    })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Lengths of each group for `digits` digits.
    pub fn group_lengths(&self, digits: usize) -> Vec<usize> {
        match self {
            Grouping::Uniform(size) => {
                let size = (*size).max(1);
                (0..digits)
                    .step_by(size)
                    .map(|start| size.min(digits - start))
                    .collect()
            }
            Grouping::Sections(sections) => sections.to_vec(),
        }
    }

    /// Splits an ASCII digit string into groups and joins them with `delimiter`.
    pub(crate) fn join(&self, digits: &str, delimiter: Delimiter) -> String {
        let mut start = 0;
        self.group_lengths(digits.len())
            .into_iter()
            .map(|len| {
                let end = (start + len).min(digits.len());
                let part = &digits[start..end];
                start = end;
                part
            })
            .join(delimiter.as_str())
    }
}

impl From<usize> for Grouping {
    fn from(size: usize) -> Self {
        Grouping::Uniform(size)
    }
}

impl From<Vec<usize>> for Grouping {
    fn from(sections: Vec<usize>) -> Self {
        Grouping::sections(sections)
    }
}

/// Per-call formatting overrides.
///
/// Any field left as `None` falls back to the address kind's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub delimiter: Option<Delimiter>,
    pub grouping: Option<Grouping>,
    pub case: Option<Case>,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn with_grouping(mut self, grouping: impl Into<Grouping>) -> Self {
        self.grouping = Some(grouping.into());
        self
    }

    pub fn with_case(mut self, case: Case) -> Self {
        self.case = Some(case);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_delimiter_parse() {
        assert_eq!("-".parse::<Delimiter>().unwrap(), Delimiter::Hyphen);
        assert_eq!("".parse::<Delimiter>().unwrap(), Delimiter::None);
        assert_eq!(Delimiter::try_from(' ').unwrap(), Delimiter::Space);
        assert!("/".parse::<Delimiter>().is_err());
        assert!("::".parse::<Delimiter>().is_err());
    }

    #[test]
    fn test_delimiter_all_matches_strings() {
        let strs: Vec<&str> = Delimiter::ALL.iter().map(Delimiter::as_str).collect();
        assert_eq!(strs, Delimiter::ALL_STR.to_vec());
    }

    #[test]
    fn test_uniform_join() {
        assert_eq!(
            Grouping::Uniform(2).join("123456789abc", Delimiter::Colon),
            "12:34:56:78:9a:bc"
        );
        assert_eq!(
            Grouping::Uniform(4).join("123456789abc", Delimiter::Period),
            "1234.5678.9abc"
        );
    }

    #[test]
    fn test_uniform_join_with_remainder() {
        assert_eq!(
            Grouping::Uniform(4).join("123456", Delimiter::Hyphen),
            "1234-56"
        );
        assert_eq!(Grouping::Uniform(4).group_lengths(9), vec![4, 4, 1]);
    }

    #[test]
    fn test_sections_join() {
        let grouping = Grouping::sections(vec![8usize, 4, 4, 4, 12]);
        assert_eq!(
            grouping.join("0123456789abcdef0123456789abcdef", Delimiter::Hyphen),
            "01234567-89ab-cdef-0123-456789abcdef"
        );
    }

    #[test]
    fn test_grouping_validate() {
        assert!(Grouping::Uniform(1).validate("t", 12).is_ok());
        assert!(Grouping::Uniform(4).validate("t", 12).is_ok());
        assert!(Grouping::Uniform(0).validate("t", 12).is_err());
        assert!(Grouping::Uniform(5).validate("t", 12).is_err());
        assert!(Grouping::sections(vec![6usize, 6]).validate("t", 12).is_ok());
        assert!(Grouping::sections(vec![6usize, 5]).validate("t", 12).is_err());
        assert!(Grouping::sections(vec![12usize, 0]).validate("t", 12).is_err());
        assert!(Grouping::sections(Vec::<usize>::new()).validate("t", 12).is_err());
    }

    #[test]
    fn test_options_from_json() {
        let opts: FormatOptions =
            serde_json::from_str(r#"{"delimiter": ".", "grouping": 4, "case": "upper"}"#).unwrap();
        assert_eq!(
            opts,
            FormatOptions::new()
                .with_delimiter(Delimiter::Period)
                .with_grouping(4usize)
                .with_case(Case::Upper)
        );

        let opts: FormatOptions = serde_json::from_str(r#"{"grouping": [6, 6]}"#).unwrap();
        assert_eq!(opts.grouping, Some(Grouping::sections(vec![6usize, 6])));
        assert_eq!(opts.delimiter, None);
    }

    #[test]
    fn test_options_reject_bad_values() {
        assert!(serde_json::from_str::<FormatOptions>(r#"{"delimiter": "/"}"#).is_err());
        assert!(serde_json::from_str::<FormatOptions>(r#"{"case": "Potato"}"#).is_err());
    }
}
