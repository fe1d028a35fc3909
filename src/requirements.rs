//! Composition requirements rendered as a checklist next to the meter.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

/// Length needed to satisfy [`Requirement::MinLength`].
pub const MIN_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    /// Any character that is neither alphabetic nor an ASCII digit `0-9`.
    /// Non-ASCII digits such as `٣` therefore count as symbols.
    Symbol,
}

impl Requirement {
    /// Checklist order.
    pub const ALL: [Requirement; 5] = [
        Requirement::MinLength,
        Requirement::Uppercase,
        Requirement::Lowercase,
        Requirement::Digit,
        Requirement::Symbol,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Requirement::MinLength => "At least 8 characters",
            Requirement::Uppercase => "At least 1 uppercase letter",
            Requirement::Lowercase => "At least 1 lowercase letter",
            Requirement::Digit => "At least 1 digit",
            Requirement::Symbol => "At least 1 symbol",
        }
    }

    /// Whether `password` satisfies this requirement.
    ///
    /// Digits are ASCII `0-9`; a symbol is anything that is neither
    /// alphabetic nor such a digit, so the character classes never overlap.
    pub fn is_met(&self, password: &str) -> bool {
        match self {
            Requirement::MinLength => password.chars().count() >= MIN_LENGTH,
            Requirement::Uppercase => password.chars().any(char::is_uppercase),
            Requirement::Lowercase => password.chars().any(char::is_lowercase),
            Requirement::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Requirement::Symbol => password
                .chars()
                .any(|c| !c.is_alphabetic() && !c.is_ascii_digit()),
        }
    }
}

/// A requirement paired with whether the current password satisfies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequirementCheck {
    pub requirement: Requirement,
    pub satisfied: bool,
}

impl RequirementCheck {
    pub fn description(&self) -> &'static str {
        self.requirement.description()
    }
}

/// Checks every requirement, in checklist order.
pub fn check_requirements(password: &SecretString) -> Vec<RequirementCheck> {
    let pwd = password.expose_secret();
    Requirement::ALL
        .iter()
        .map(|&requirement| RequirementCheck {
            requirement,
            satisfied: requirement.is_met(pwd),
        })
        .collect()
}
