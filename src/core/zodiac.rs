use crate::models::{Element, ZodiacMatch, ZodiacSign};

/// Bonus when both partners share the same sign
pub const SAME_SIGN_BONUS: u8 = 15;
/// Bonus when the two signs share an element
pub const SAME_ELEMENT_BONUS: u8 = 12;
/// Bonus for the complementary element pairs (Fire-Air, Earth-Water)
pub const COMPLEMENTARY_BONUS: u8 = 8;
/// Small bonus for any other recognized pair
pub const DIFFERENT_STYLES_BONUS: u8 = 3;

/// Evaluate the star match bonus for two optional sign selections.
///
/// Branches, in precedence order: unselected, unrecognized, same sign, same
/// element, complementary elements, different styles. Exactly one branch
/// applies per call and no input combination is an error; missing or unknown
/// signs degrade to a zero bonus.
pub fn evaluate_zodiac(sign1: Option<&str>, sign2: Option<&str>) -> ZodiacMatch {
    // Blank selections count as unselected
    let raw1 = sign1.map(str::trim).filter(|s| !s.is_empty());
    let raw2 = sign2.map(str::trim).filter(|s| !s.is_empty());

    let (raw1, raw2) = match (raw1, raw2) {
        (Some(first), Some(second)) => (first, second),
        _ => {
            return ZodiacMatch {
                bonus: 0,
                message: "Select both zodiac signs to see the star match bonus!".to_string(),
            }
        }
    };

    match (raw1.parse::<ZodiacSign>(), raw2.parse::<ZodiacSign>()) {
        (Ok(first), Ok(second)) => sign_match(first, second),
        _ => ZodiacMatch {
            bonus: 0,
            message: "Unknown zodiac sign(s). No star bonus added.".to_string(),
        },
    }
}

/// Bonus and message for two recognized signs
pub fn sign_match(sign1: ZodiacSign, sign2: ZodiacSign) -> ZodiacMatch {
    if sign1 == sign2 {
        return ZodiacMatch {
            bonus: SAME_SIGN_BONUS,
            message: format!("{} & {}: Same sign! Strong mutual understanding.", sign1, sign2),
        };
    }

    let elem1 = sign1.element();
    let elem2 = sign2.element();

    if elem1 == elem2 {
        return ZodiacMatch {
            bonus: SAME_ELEMENT_BONUS,
            message: format!(
                "{} & {}: Both are {} signs - natural flow and comfort.",
                sign1, sign2, elem1
            ),
        };
    }

    if is_complementary(elem1, elem2) {
        return ZodiacMatch {
            bonus: COMPLEMENTARY_BONUS,
            message: format!(
                "{} ({}) & {} ({}): Complementary energies - good balance when you support each other.",
                sign1, elem1, sign2, elem2
            ),
        };
    }

    ZodiacMatch {
        bonus: DIFFERENT_STYLES_BONUS,
        message: format!(
            "{} ({}) & {} ({}): Different styles, but opposites can attract if you communicate well.",
            sign1, elem1, sign2, elem2
        ),
    }
}

/// Complementary element check on the order-normalized pair
#[inline]
fn is_complementary(first: Element, second: Element) -> bool {
    let pair = if first <= second {
        (first, second)
    } else {
        (second, first)
    };

    matches!(
        pair,
        (Element::Fire, Element::Air) | (Element::Earth, Element::Water)
    )
}
