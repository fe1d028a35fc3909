//! Length section - rewards longer passwords in three tiers.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::requirements::MIN_LENGTH;

const LONG_LENGTH: usize = 12;
const VERY_LONG_LENGTH: usize = 16;

/// Awards +20 at 8 characters, another +10 at 12 and another +10 at 16.
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = password.expose_secret().chars().count();
    let mut points = 0;
    if len >= MIN_LENGTH {
        points += 20;
    }
    if len >= LONG_LENGTH {
        points += 10;
    }
    if len >= VERY_LONG_LENGTH {
        points += 10;
    }
    points
}
