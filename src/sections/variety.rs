//! Character variety section - uppercase, lowercase, digits, symbols.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::requirements::Requirement;

const POINTS_PER_CLASS: SectionResult = 15;

const CLASSES: [Requirement; 4] = [
    Requirement::Uppercase,
    Requirement::Lowercase,
    Requirement::Digit,
    Requirement::Symbol,
];

/// Awards 15 points for each character class present.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let present = CLASSES.iter().filter(|class| class.is_met(pwd)).count();
    present as SectionResult * POINTS_PER_CLASS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(password: &str) -> SectionResult {
        character_variety_section(&SecretString::new(password.to_string().into()))
    }

    #[test]
    fn test_variety_section_single_class() {
        assert_eq!(points("lowercase"), 15);
        assert_eq!(points("UPPERCASE"), 15);
        assert_eq!(points("2024"), 15);
        assert_eq!(points("!@#$"), 15);
    }

    #[test]
    fn test_variety_section_all_categories() {
        assert_eq!(points("HasAll123!@#"), 60);
    }

    #[test]
    fn test_variety_section_repeats_do_not_count_twice() {
        assert_eq!(points("aA"), 30);
        assert_eq!(points("aaaaAAAA"), 30);
    }
}
