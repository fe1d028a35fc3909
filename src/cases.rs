//! Password scenarios used by the simulator.
//!
//! A case names a place the password is meant for and the minimum score that
//! place demands. It does not influence scoring; it only judges a result.

use serde::{Deserialize, Serialize};

use crate::types::{PasswordScore, PasswordStrengthResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub requirement: String,
    pub minimum_score: u8,
    /// Shown when a password falls short of `minimum_score`.
    pub explanation: String,
}

/// Whether a password evaluated to `result` is good enough for `case`.
pub fn meets_requirements(result: &PasswordStrengthResult, case: &PasswordCase) -> bool {
    case.accepts(result.score)
}

/// Outcome of judging a result against a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseVerdict<'a> {
    pub passed: bool,
    pub explanation: Option<&'a str>,
}

impl PasswordCase {
    /// Inclusive: a score equal to the minimum passes.
    pub fn accepts(&self, score: PasswordScore) -> bool {
        score.value() >= self.minimum_score
    }

    pub fn verdict(&self, result: &PasswordStrengthResult) -> CaseVerdict<'_> {
        let passed = meets_requirements(result, self);
        CaseVerdict {
            passed,
            explanation: (!passed).then_some(self.explanation.as_str()),
        }
    }
}

pub fn health_system_case() -> PasswordCase {
    PasswordCase {
        id: "health-system".to_string(),
        title: "Health system access".to_string(),
        description: "You are creating the password for a clinic's patient record system.".to_string(),
        requirement: "Minimum score: 60".to_string(),
        minimum_score: 60,
        explanation: "Medical records are a prime target. A weak password here exposes the private data of every patient.".to_string(),
    }
}

pub fn banking_case() -> PasswordCase {
    PasswordCase {
        id: "banking".to_string(),
        title: "Online banking".to_string(),
        description: "You are creating the password for your online bank account.".to_string(),
        requirement: "Minimum score: 70".to_string(),
        minimum_score: 70,
        explanation: "Whoever gets into your bank account can move your money. Banking needs a strong password.".to_string(),
    }
}

pub fn email_case() -> PasswordCase {
    PasswordCase {
        id: "email".to_string(),
        title: "Personal email".to_string(),
        description: "You are creating the password for your personal email account.".to_string(),
        requirement: "Minimum score: 50".to_string(),
        minimum_score: 50,
        explanation: "Your email resets the passwords of your other accounts. Losing it means losing them too.".to_string(),
    }
}

/// The bundled cases, in presentation order.
pub fn builtin_cases() -> Vec<PasswordCase> {
    vec![health_system_case(), banking_case(), email_case()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate_password_strength;
    use secrecy::SecretString;

    fn evaluate(password: &str) -> PasswordStrengthResult {
        evaluate_password_strength(&SecretString::new(password.to_string().into()))
    }

    #[test]
    fn test_banking_boundary_is_inclusive() {
        let banking = banking_case();
        assert_eq!(banking.minimum_score, 70);
        assert!(!banking.accepts(PasswordScore::new(69)));
        assert!(banking.accepts(PasswordScore::new(70)));
        assert!(banking.accepts(PasswordScore::new(100)));
    }

    #[test]
    fn test_meets_requirements_with_evaluated_password() {
        // 20 + 10 + 10 (length) + 15 + 15 (upper, lower)
        let result = evaluate("CorrectHorseBattery");
        assert_eq!(result.score.value(), 70);
        assert!(meets_requirements(&result, &banking_case()));

        let result = evaluate("Passwordxy");
        assert_eq!(result.score.value(), 50);
        assert!(!meets_requirements(&result, &banking_case()));
        assert!(meets_requirements(&result, &email_case()));
    }

    #[test]
    fn test_empty_password_meets_nothing_demanding() {
        let result = evaluate("");
        for case in builtin_cases() {
            assert!(!meets_requirements(&result, &case));
        }
    }

    #[test]
    fn test_verdict_explains_only_failures() {
        let banking = banking_case();

        let verdict = banking.verdict(&evaluate("password"));
        assert!(!verdict.passed);
        assert_eq!(verdict.explanation, Some(banking.explanation.as_str()));

        let verdict = banking.verdict(&evaluate("Tr0ub4dor&9XZ"));
        assert!(verdict.passed);
        assert_eq!(verdict.explanation, None);
    }

    #[test]
    fn test_builtin_cases() {
        let cases = builtin_cases();
        let ids: Vec<_> = cases.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["health-system", "banking", "email"]);
        let scores: Vec<_> = cases.iter().map(|c| c.minimum_score).collect();
        assert_eq!(scores, vec![60, 70, 50]);
    }

    #[test]
    fn test_case_json_shape() {
        let json = serde_json::to_value(email_case()).unwrap();
        assert_eq!(json["id"], "email");
        assert_eq!(json["minimum_score"], 50);

        let parsed: PasswordCase = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, email_case());
    }
}
