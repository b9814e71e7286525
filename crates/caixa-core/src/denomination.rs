//! # Denominations
//!
//! The closed set of banknotes the register accepts.
//!
//! ## Note Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Banknote Denominations                          │
//! │                                                                         │
//! │   Tag         Face value          Greedy order                          │
//! │   ─────────   ──────────          ────────────                          │
//! │   duzentos    200                 1st                                   │
//! │   cem         100                 2nd                                   │
//! │   cinquenta    50                 3rd                                   │
//! │   vinte        20                 4th                                   │
//! │   dez          10                 5th                                   │
//! │   cinco         5                 6th                                   │
//! │   dois          2                 7th (smallest)                        │
//! │                                                                         │
//! │   NOTE: there is no 1-note, so odd amounts below 5 are never payable    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tag is the stable key used on the wire and in the CLI; the face value
//! is what the arithmetic uses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DenominationError;

/// One banknote type.
///
/// Variants are declared in ascending face value, so the derived `Ord`
/// orders denominations by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Denomination {
    #[serde(rename = "dois")]
    Two,
    #[serde(rename = "cinco")]
    Five,
    #[serde(rename = "dez")]
    Ten,
    #[serde(rename = "vinte")]
    Twenty,
    #[serde(rename = "cinquenta")]
    Fifty,
    #[serde(rename = "cem")]
    OneHundred,
    #[serde(rename = "duzentos")]
    TwoHundred,
}

impl Denomination {
    /// Every denomination, smallest face value first.
    pub const ALL: [Denomination; 7] = [
        Denomination::Two,
        Denomination::Five,
        Denomination::Ten,
        Denomination::Twenty,
        Denomination::Fifty,
        Denomination::OneHundred,
        Denomination::TwoHundred,
    ];

    /// Every denomination, largest face value first. This is the order the
    /// greedy withdrawal walks.
    pub const DESCENDING: [Denomination; 7] = [
        Denomination::TwoHundred,
        Denomination::OneHundred,
        Denomination::Fifty,
        Denomination::Twenty,
        Denomination::Ten,
        Denomination::Five,
        Denomination::Two,
    ];

    /// The smallest note. Suggestion searches stop here.
    pub const SMALLEST: Denomination = Denomination::Two;

    /// Face value of the note.
    #[inline]
    pub const fn value(&self) -> u64 {
        match self {
            Denomination::Two => 2,
            Denomination::Five => 5,
            Denomination::Ten => 10,
            Denomination::Twenty => 20,
            Denomination::Fifty => 50,
            Denomination::OneHundred => 100,
            Denomination::TwoHundred => 200,
        }
    }

    /// The tag used as the mapping key (`"dez"`, `"duzentos"`, ...).
    pub const fn name(&self) -> &'static str {
        match self {
            Denomination::Two => "dois",
            Denomination::Five => "cinco",
            Denomination::Ten => "dez",
            Denomination::Twenty => "vinte",
            Denomination::Fifty => "cinquenta",
            Denomination::OneHundred => "cem",
            Denomination::TwoHundred => "duzentos",
        }
    }

    /// Looks up a denomination by face value.
    ///
    /// Returns `None` for any value outside the note set. The `TryFrom<u64>`
    /// impl wraps this with a reportable error.
    pub fn from_value(value: u64) -> Option<Self> {
        Denomination::ALL.into_iter().find(|d| d.value() == value)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<u64> for Denomination {
    type Error = DenominationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Denomination::from_value(value).ok_or(DenominationError::UnknownValue(value))
    }
}

/// Parses either a tag (`"dez"`) or a face value (`"10"`).
impl FromStr for Denomination {
    type Err = DenominationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(value) = s.parse::<u64>() {
            return Denomination::try_from(value);
        }

        let lowered = s.to_lowercase();
        Denomination::ALL
            .into_iter()
            .find(|d| d.name() == lowered)
            .ok_or_else(|| DenominationError::UnknownName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_is_reverse_of_all() {
        let mut reversed = Denomination::ALL;
        reversed.reverse();
        assert_eq!(reversed, Denomination::DESCENDING);
    }

    #[test]
    fn test_ord_follows_face_value() {
        for pair in Denomination::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].value() < pair[1].value());
        }
        assert_eq!(Denomination::SMALLEST, Denomination::ALL[0]);
    }

    #[test]
    fn test_value_lookup() {
        assert_eq!(Denomination::from_value(50), Some(Denomination::Fifty));
        assert_eq!(Denomination::from_value(1), None);
        assert_eq!(Denomination::from_value(500), None);
    }

    #[test]
    fn test_try_from_unknown_value() {
        let err = Denomination::try_from(3).unwrap_err();
        assert!(matches!(err, DenominationError::UnknownValue(3)));
    }

    #[test]
    fn test_parse_tag_and_value() {
        assert_eq!("dez".parse::<Denomination>().unwrap(), Denomination::Ten);
        assert_eq!("DUZENTOS".parse::<Denomination>().unwrap(), Denomination::TwoHundred);
        assert_eq!("200".parse::<Denomination>().unwrap(), Denomination::TwoHundred);
        assert_eq!(" 2 ".parse::<Denomination>().unwrap(), Denomination::Two);
        assert!("tres".parse::<Denomination>().is_err());
        assert!("7".parse::<Denomination>().is_err());
    }

    #[test]
    fn test_serde_uses_tag() {
        let json = serde_json::to_string(&Denomination::Ten).unwrap();
        assert_eq!(json, "\"dez\"");

        let parsed: Denomination = serde_json::from_str("\"cinquenta\"").unwrap();
        assert_eq!(parsed, Denomination::Fifty);
    }
}
