//! Value types produced by a password evaluation.

use serde::Serialize;

use crate::requirements::RequirementCheck;

/// Message shown when there is nothing to evaluate yet.
pub const EMPTY_PASSWORD_FEEDBACK: &str = "Enter a password to check its strength";

/// Strength score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MIN: PasswordScore = PasswordScore(0);
    pub const MAX: PasswordScore = PasswordScore(100);

    /// Builds a score from a raw point total, clamping it to `0..=100`.
    pub fn new(raw: i64) -> Self {
        PasswordScore(raw.clamp(0, 100) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse classification of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrengthLevel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLevel {
    /// Lower bounds are inclusive: `< 40` weak, `40..70` moderate, `>= 70` strong.
    pub fn from_score(score: PasswordScore) -> Self {
        let value = score.value();
        if value < 40 {
            StrengthLevel::Weak
        } else if value < 70 {
            StrengthLevel::Moderate
        } else {
            StrengthLevel::Strong
        }
    }

    pub fn feedback(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => {
                "Weak password: it is vulnerable to attacks. Use more characters and mix upper case, lower case, digits and symbols."
            }
            StrengthLevel::Moderate => {
                "Acceptable password, but it could be improved. Consider making it longer."
            }
            StrengthLevel::Strong => "Excellent password: it would be very hard to crack.",
        }
    }
}

/// Rough estimate of how long an offline attack would take.
///
/// The buckets use their own boundaries (30/50/70), which do not line up
/// with the [`StrengthLevel`] thresholds (40/70).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrackTime {
    NotApplicable,
    Seconds,
    MinutesToHours,
    DaysToMonths,
    YearsToCenturies,
}

impl CrackTime {
    pub fn from_score(score: PasswordScore) -> Self {
        let value = score.value();
        if value < 30 {
            CrackTime::Seconds
        } else if value < 50 {
            CrackTime::MinutesToHours
        } else if value < 70 {
            CrackTime::DaysToMonths
        } else {
            CrackTime::YearsToCenturies
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CrackTime::NotApplicable => "N/A",
            CrackTime::Seconds => "seconds",
            CrackTime::MinutesToHours => "minutes to hours",
            CrackTime::DaysToMonths => "days to months",
            CrackTime::YearsToCenturies => "years to centuries",
        }
    }
}

impl std::fmt::Display for CrackTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of evaluating one password. Built fresh on every evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordStrengthResult {
    pub score: PasswordScore,
    pub level: StrengthLevel,
    pub feedback: &'static str,
    pub time_to_crack: CrackTime,
    pub requirements: Vec<RequirementCheck>,
}

impl PasswordStrengthResult {
    /// Result for an empty input. Distinct from a scored zero: it carries no
    /// checklist and asks the user to type something.
    pub fn empty() -> Self {
        PasswordStrengthResult {
            score: PasswordScore::MIN,
            level: StrengthLevel::Weak,
            feedback: EMPTY_PASSWORD_FEEDBACK,
            time_to_crack: CrackTime::NotApplicable,
            requirements: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.time_to_crack == CrackTime::NotApplicable
    }
}
