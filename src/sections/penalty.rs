//! Pattern penalty section - single-class passwords and trivial runs.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Literal runs that cost points wherever they appear. Case-sensitive.
const TRIVIAL_RUNS: [&str; 2] = ["123", "abc"];

/// Subtracts 20 for an all-digit password, 20 for an all-lowercase one and
/// 10 if it contains "123" or "abc".
///
/// The all-digit and all-lowercase checks are ASCII-only and never match an
/// empty string.
pub fn pattern_penalty_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let mut points = 0;

    if is_all(pwd, |c| c.is_ascii_digit()) {
        points -= 20;
    }
    if is_all(pwd, |c| c.is_ascii_lowercase()) {
        points -= 20;
    }
    if TRIVIAL_RUNS.iter().any(|run| pwd.contains(*run)) {
        points -= 10;
    }
    points
}

fn is_all(pwd: &str, pred: impl Fn(char) -> bool) -> bool {
    !pwd.is_empty() && pwd.chars().all(pred)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(password: &str) -> SectionResult {
        pattern_penalty_section(&SecretString::new(password.to_string().into()))
    }

    #[test]
    fn test_penalty_all_digits() {
        assert_eq!(points("98765"), -20);
    }

    #[test]
    fn test_penalty_all_lowercase() {
        assert_eq!(points("password"), -20);
    }

    #[test]
    fn test_penalty_trivial_runs() {
        assert_eq!(points("X123Y"), -10);
        assert_eq!(points("Xabc!"), -10);
        assert_eq!(points("123abc"), -10);
    }

    #[test]
    fn test_penalty_stacks() {
        assert_eq!(points("12345678"), -30);
        assert_eq!(points("abcdef"), -30);
    }

    #[test]
    fn test_penalty_runs_are_case_sensitive() {
        assert_eq!(points("ABC!"), 0);
        assert_eq!(points("aBc!"), 0);
    }

    #[test]
    fn test_penalty_lowercase_check_is_ascii_only() {
        assert_eq!(points("été"), 0);
    }

    #[test]
    fn test_penalty_empty_matches_nothing() {
        assert_eq!(points(""), 0);
    }

    #[test]
    fn test_penalty_strong_password() {
        assert_eq!(points("RandomPass42!@#Word"), 0);
    }
}
