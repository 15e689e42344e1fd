//! Favourite colour domain type
//!
//! The seven canonical German colour names, with the fixed numeric codes the
//! seed file uses in place of names. Parsing accepts the common ASCII
//! spellings of the umlaut forms (gruen, tuerkis, weiss).

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Canonical favourite colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Blau,
    Gruen,
    Violett,
    Rot,
    Gelb,
    Tuerkis,
    Weiss,
}

impl Colour {
    /// All colours in code order (1-7)
    pub const ALL: [Colour; 7] = [
        Colour::Blau,
        Colour::Gruen,
        Colour::Violett,
        Colour::Rot,
        Colour::Gelb,
        Colour::Tuerkis,
        Colour::Weiss,
    ];

    /// Canonical (diacritic) spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Colour::Blau => "blau",
            Colour::Gruen => "grün",
            Colour::Violett => "violett",
            Colour::Rot => "rot",
            Colour::Gelb => "gelb",
            Colour::Tuerkis => "türkis",
            Colour::Weiss => "weiß",
        }
    }

    /// Numeric code used by the seed file
    pub fn code(&self) -> i64 {
        match self {
            Colour::Blau => 1,
            Colour::Gruen => 2,
            Colour::Violett => 3,
            Colour::Rot => 4,
            Colour::Gelb => 5,
            Colour::Tuerkis => 6,
            Colour::Weiss => 7,
        }
    }

    /// Map a seed-file colour code onto its colour
    pub fn from_code(code: i64) -> Result<Colour> {
        match code {
            1 => Ok(Colour::Blau),
            2 => Ok(Colour::Gruen),
            3 => Ok(Colour::Violett),
            4 => Ok(Colour::Rot),
            5 => Ok(Colour::Gelb),
            6 => Ok(Colour::Tuerkis),
            7 => Ok(Colour::Weiss),
            _ => Err(Error::UnsupportedColourCode(code)),
        }
    }

    /// Parse a free-form colour string.
    ///
    /// Trims, lowercases (Unicode-aware, the umlaut forms must survive), maps
    /// the ASCII fallback spellings to canonical form, then requires set
    /// membership.
    pub fn parse(raw: &str) -> Result<Colour> {
        let normalized = raw.trim().to_lowercase();

        let canonical = match normalized.as_str() {
            "gruen" => "grün",
            "tuerkis" => "türkis",
            "weiss" => "weiß",
            other => other,
        };

        match canonical {
            "blau" => Ok(Colour::Blau),
            "grün" => Ok(Colour::Gruen),
            "violett" => Ok(Colour::Violett),
            "rot" => Ok(Colour::Rot),
            "gelb" => Ok(Colour::Gelb),
            "türkis" => Ok(Colour::Tuerkis),
            "weiß" => Ok(Colour::Weiss),
            _ => Err(Error::InvalidColour(raw.to_string())),
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Colour {
    type Err = Error;

    fn from_str(s: &str) -> Result<Colour> {
        Colour::parse(s)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Colour, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Colour::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapping_is_fixed() {
        assert_eq!(Colour::from_code(1).unwrap(), Colour::Blau);
        assert_eq!(Colour::from_code(2).unwrap(), Colour::Gruen);
        assert_eq!(Colour::from_code(3).unwrap(), Colour::Violett);
        assert_eq!(Colour::from_code(4).unwrap(), Colour::Rot);
        assert_eq!(Colour::from_code(5).unwrap(), Colour::Gelb);
        assert_eq!(Colour::from_code(6).unwrap(), Colour::Tuerkis);
        assert_eq!(Colour::from_code(7).unwrap(), Colour::Weiss);
    }

    #[test]
    fn test_code_roundtrip() {
        for colour in Colour::ALL {
            assert_eq!(Colour::from_code(colour.code()).unwrap(), colour);
        }
    }

    #[test]
    fn test_code_out_of_range_rejected() {
        for code in [0, -1, 8, 100, i64::MIN] {
            assert!(matches!(
                Colour::from_code(code),
                Err(Error::UnsupportedColourCode(c)) if c == code
            ));
        }
    }

    #[test]
    fn test_parse_canonical_spellings() {
        assert_eq!(Colour::parse("blau").unwrap(), Colour::Blau);
        assert_eq!(Colour::parse("grün").unwrap(), Colour::Gruen);
        assert_eq!(Colour::parse("violett").unwrap(), Colour::Violett);
        assert_eq!(Colour::parse("rot").unwrap(), Colour::Rot);
        assert_eq!(Colour::parse("gelb").unwrap(), Colour::Gelb);
        assert_eq!(Colour::parse("türkis").unwrap(), Colour::Tuerkis);
        assert_eq!(Colour::parse("weiß").unwrap(), Colour::Weiss);
    }

    #[test]
    fn test_parse_ascii_fallback_spellings() {
        assert_eq!(Colour::parse("gruen").unwrap(), Colour::Gruen);
        assert_eq!(Colour::parse("tuerkis").unwrap(), Colour::Tuerkis);
        assert_eq!(Colour::parse("weiss").unwrap(), Colour::Weiss);
    }

    #[test]
    fn test_parse_trims_and_lowercases() {
        assert_eq!(Colour::parse("  Blau  ").unwrap(), Colour::Blau);
        assert_eq!(Colour::parse("GRÜN").unwrap(), Colour::Gruen);
        assert_eq!(Colour::parse("TUERKIS").unwrap(), Colour::Tuerkis);
        assert_eq!(Colour::parse(" WeiSS ").unwrap(), Colour::Weiss);
    }

    #[test]
    fn test_parse_blank_rejected() {
        assert!(matches!(Colour::parse(""), Err(Error::InvalidColour(_))));
        assert!(matches!(Colour::parse("   "), Err(Error::InvalidColour(_))));
    }

    #[test]
    fn test_parse_unknown_rejected() {
        assert!(matches!(
            Colour::parse("schwarz"),
            Err(Error::InvalidColour(_))
        ));
        assert!(matches!(Colour::parse("blue"), Err(Error::InvalidColour(_))));
    }

    #[test]
    fn test_display_uses_canonical_form() {
        assert_eq!(Colour::Weiss.to_string(), "weiß");
        assert_eq!(Colour::Gruen.to_string(), "grün");
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Colour::Tuerkis).unwrap();
        assert_eq!(json, "\"türkis\"");
        let back: Colour = serde_json::from_str("\"tuerkis\"").unwrap();
        assert_eq!(back, Colour::Tuerkis);
    }
}
