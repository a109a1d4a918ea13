// Unit tests for Amora Algo

use amora_algo::core::{
    evaluator::{advice_message, finalize_score, verdict_message},
    scoring::compute_base_score,
    zodiac::evaluate_zodiac,
};
use amora_algo::models::{Element, ZodiacSign};

#[test]
fn test_base_score_in_range() {
    let pairs = [
        ("Ann", "Ben"),
        ("Alexandra", "Benjamin"),
        ("José", "Zoë"),
        ("", ""),
        ("!!!", "123"),
        ("a very long name with spaces", "another rather long name"),
    ];

    for (name1, name2) in pairs {
        let score = compute_base_score(name1, name2);
        assert!(score <= 100, "Score {} out of range for ({:?}, {:?})", score, name1, name2);
    }
}

#[test]
fn test_base_score_is_deterministic() {
    let first = compute_base_score("Alexandra", "Benjamin");
    let second = compute_base_score("Alexandra", "Benjamin");
    assert_eq!(first, second);
}

#[test]
fn test_base_score_empty_input() {
    assert_eq!(compute_base_score("", ""), 0);
}

#[test]
fn test_base_score_no_alphabetic_content() {
    assert_eq!(compute_base_score("!!!", "123"), 0);
}

#[test]
fn test_base_score_case_independence() {
    let lower = compute_base_score("ann", "ben");
    assert_eq!(compute_base_score("Ann", "Ben"), lower);
    assert_eq!(compute_base_score("ANN", "BEN"), lower);
}

#[test]
fn test_base_score_space_removal() {
    assert_eq!(compute_base_score("A B", "C"), compute_base_score("AB", "C"));
}

#[test]
fn test_zodiac_same_sign() {
    assert_eq!(evaluate_zodiac(Some("Leo"), Some("Leo")).bonus, 15);
}

#[test]
fn test_zodiac_same_element() {
    // Leo and Aries are both Fire
    assert_eq!(evaluate_zodiac(Some("Leo"), Some("Aries")).bonus, 12);
}

#[test]
fn test_zodiac_complementary_elements() {
    // Fire-Air
    assert_eq!(evaluate_zodiac(Some("Leo"), Some("Libra")).bonus, 8);
}

#[test]
fn test_zodiac_different_styles() {
    // Fire-Water is not a complementary pair
    assert_eq!(evaluate_zodiac(Some("Leo"), Some("Cancer")).bonus, 3);
}

#[test]
fn test_zodiac_missing_selection() {
    assert_eq!(evaluate_zodiac(None, Some("Leo")).bonus, 0);
}

#[test]
fn test_zodiac_unknown_sign() {
    assert_eq!(evaluate_zodiac(Some("Serpentarius"), Some("Leo")).bonus, 0);
}

#[test]
fn test_zodiac_bonus_is_symmetric() {
    for first in ZodiacSign::ALL {
        for second in ZodiacSign::ALL {
            let forward = evaluate_zodiac(Some(first.name()), Some(second.name()));
            let backward = evaluate_zodiac(Some(second.name()), Some(first.name()));
            assert_eq!(
                forward.bonus, backward.bonus,
                "Bonus should not depend on order for {} and {}",
                first, second
            );
        }
    }
}

#[test]
fn test_zodiac_bonus_is_one_of_the_fixed_tiers() {
    for first in ZodiacSign::ALL {
        for second in ZodiacSign::ALL {
            let bonus = evaluate_zodiac(Some(first.name()), Some(second.name())).bonus;
            assert!(
                [3, 8, 12, 15].contains(&bonus),
                "Unexpected bonus {} for {} and {}",
                bonus,
                first,
                second
            );
        }
    }
}

#[test]
fn test_finalize_never_exceeds_100() {
    for base in 0..=100u8 {
        for bonus in [0u8, 3, 8, 12, 15] {
            let final_score = finalize_score(base, bonus);
            assert!(final_score <= 100);
            assert_eq!(final_score as u16, (base as u16 + bonus as u16).min(100));
        }
    }
}

#[test]
fn test_finalize_clamp_example() {
    assert_eq!(finalize_score(95, 15), 100);
}

#[test]
fn test_verdict_threshold_boundaries() {
    assert_ne!(verdict_message(79), verdict_message(80));
    assert_eq!(verdict_message(80), "Looks like REAL love!");
    assert_ne!(verdict_message(49), verdict_message(50));
    assert_ne!(verdict_message(29), verdict_message(30));
}

#[test]
fn test_advice_threshold_boundaries() {
    assert_ne!(advice_message(89), advice_message(90));
    assert_ne!(advice_message(74), advice_message(75));
    assert_ne!(advice_message(49), advice_message(50));
    assert_ne!(advice_message(29), advice_message(30));
}

#[test]
fn test_element_table_is_total() {
    for sign in ZodiacSign::ALL {
        let element = sign.element();
        assert!(matches!(
            element,
            Element::Fire | Element::Earth | Element::Air | Element::Water
        ));
    }
}
