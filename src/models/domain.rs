use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four classical elements the zodiac wheel divides into.
///
/// `Ord` is derived so an unordered pair of elements can be normalized by
/// sorting before lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name one of the twelve signs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized zodiac sign: {0}")]
pub struct ParseZodiacError(pub String);

/// The twelve zodiac signs, in calendar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// Full catalog, used for sign picker listings
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// The element a sign belongs to. Fixed table, never mutated at runtime.
    pub const fn element(self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = ParseZodiacError;

    /// Case-insensitive parse of the canonical English sign names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aries" => Ok(ZodiacSign::Aries),
            "taurus" => Ok(ZodiacSign::Taurus),
            "gemini" => Ok(ZodiacSign::Gemini),
            "cancer" => Ok(ZodiacSign::Cancer),
            "leo" => Ok(ZodiacSign::Leo),
            "virgo" => Ok(ZodiacSign::Virgo),
            "libra" => Ok(ZodiacSign::Libra),
            "scorpio" => Ok(ZodiacSign::Scorpio),
            "sagittarius" => Ok(ZodiacSign::Sagittarius),
            "capricorn" => Ok(ZodiacSign::Capricorn),
            "aquarius" => Ok(ZodiacSign::Aquarius),
            "pisces" => Ok(ZodiacSign::Pisces),
            _ => Err(ParseZodiacError(s.trim().to_string())),
        }
    }
}

/// Outcome of comparing two zodiac selections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZodiacMatch {
    pub bonus: u8,
    pub message: String,
}

/// Full compatibility report for a pair of names and optional signs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityReport {
    #[serde(rename = "baseScore")]
    pub base_score: u8,
    #[serde(rename = "zodiacBonus")]
    pub zodiac_bonus: u8,
    #[serde(rename = "finalScore")]
    pub final_score: u8,
    #[serde(rename = "verdictMessage")]
    pub verdict_message: String,
    #[serde(rename = "zodiacMessage")]
    pub zodiac_message: String,
    #[serde(rename = "adviceMessage")]
    pub advice_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_signs() {
        assert_eq!(ZodiacSign::ALL.len(), 12);

        // Three signs per element
        for element in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
            let count = ZodiacSign::ALL
                .iter()
                .filter(|sign| sign.element() == element)
                .count();
            assert_eq!(count, 3, "Element {} should have 3 signs", element);
        }
    }

    #[test]
    fn test_element_table() {
        assert_eq!(ZodiacSign::Leo.element(), Element::Fire);
        assert_eq!(ZodiacSign::Virgo.element(), Element::Earth);
        assert_eq!(ZodiacSign::Libra.element(), Element::Air);
        assert_eq!(ZodiacSign::Pisces.element(), Element::Water);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Leo".parse::<ZodiacSign>().unwrap(), ZodiacSign::Leo);
        assert_eq!("leo".parse::<ZodiacSign>().unwrap(), ZodiacSign::Leo);
        assert_eq!("LEO".parse::<ZodiacSign>().unwrap(), ZodiacSign::Leo);
        assert_eq!(" scorpio ".parse::<ZodiacSign>().unwrap(), ZodiacSign::Scorpio);
    }

    #[test]
    fn test_parse_rejects_unknown_sign() {
        let err = "Ophiuchus".parse::<ZodiacSign>().unwrap_err();
        assert_eq!(err, ParseZodiacError("Ophiuchus".to_string()));
    }

    #[test]
    fn test_display_round_trips() {
        for sign in ZodiacSign::ALL {
            let parsed: ZodiacSign = sign.to_string().parse().unwrap();
            assert_eq!(parsed, sign);
        }
    }
}
