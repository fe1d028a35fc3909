//! Password strength scoring for the CyberLearn password simulator
//!
//! Scores a candidate password from 0 to 100, classifies it, estimates how
//! long it would resist cracking and reports which composition requirements
//! it satisfies. Scenario cases ("banking", "email", ...) then decide whether
//! the score is good enough for a given use.
//!
//! # Features
//!
//! - `async` (default): Enables debounced live evaluation with cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_CASES_PATH`: Path to a JSON case catalog
//!   (default: the bundled health-system, banking and email cases)
//!
//! # Example
//!
//! ```rust
//! use cyberlearn_pwd_strength::{evaluate_password_strength, find_case, meets_requirements};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Tr0ub4dor&9XZ".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! println!("Score: {}", evaluation.score);
//! println!("Level: {:?}", evaluation.level);
//! println!("Time to crack: {}", evaluation.time_to_crack);
//!
//! let banking = find_case("banking").expect("bundled case");
//! assert!(meets_requirements(&evaluation, &banking));
//! ```

// Internal modules
mod cases;
mod catalog;
mod evaluator;
mod requirements;
mod sections;
mod types;

#[cfg(feature = "async")]
mod live;

// Public API
pub use cases::{
    CaseVerdict, PasswordCase, banking_case, builtin_cases, email_case, health_system_case,
    meets_requirements,
};
pub use catalog::{
    CASES_PATH_ENV, CatalogError, find_case, get_cases, get_cases_path, init_cases,
    init_cases_from_path, parse_cases,
};
pub use evaluator::evaluate_password_strength;
pub use requirements::{MIN_LENGTH, Requirement, RequirementCheck, check_requirements};
pub use types::{
    CrackTime, EMPTY_PASSWORD_FEEDBACK, PasswordScore, PasswordStrengthResult, StrengthLevel,
};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_strength_tx};

#[cfg(feature = "async")]
pub use live::LiveEvaluator;
