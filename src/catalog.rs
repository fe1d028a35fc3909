//! Case catalog management
//!
//! Holds the process-wide list of password cases, either the bundled ones or
//! a list loaded from a JSON file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

use crate::cases::{PasswordCase, builtin_cases};

/// Environment variable naming a JSON case catalog.
pub const CASES_PATH_ENV: &str = "PWD_CASES_PATH";

static CASES: RwLock<Option<Vec<PasswordCase>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Case catalog file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read case catalog file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse case catalog: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Case catalog is empty")]
    EmptyCatalog,
    #[error("Case '{id}' has minimum score {score}, must be at most 100")]
    InvalidMinimumScore { id: String, score: u8 },
    #[error("Duplicate case id: {0}")]
    DuplicateId(String),
}

/// Returns the catalog path from `PWD_CASES_PATH`, if set.
pub fn get_cases_path() -> Option<PathBuf> {
    std::env::var_os(CASES_PATH_ENV).map(PathBuf::from)
}

/// Initializes the case catalog.
///
/// Loads the file named by `PWD_CASES_PATH` when it is set, otherwise
/// installs the bundled cases. Returns the number of cases.
///
/// # Errors
///
/// Same as [`init_cases_from_path`].
pub fn init_cases() -> Result<usize, CatalogError> {
    match get_cases_path() {
        Some(path) => init_cases_from_path(path),
        None => install(builtin_cases()),
    }
}

/// Initializes the case catalog from a JSON file holding an array of cases.
///
/// Idempotent: once a catalog is installed later calls return its size.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist or cannot be read
/// - File is not a JSON array of cases
/// - The array is empty
/// - A minimum score exceeds 100 or an id repeats
pub fn init_cases_from_path<P: AsRef<Path>>(path: P) -> Result<usize, CatalogError> {
    if let Some(count) = installed_count() {
        return Ok(count);
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Case catalog initialization FAILED: FileNotFound {:?}", path);
        return Err(CatalogError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let cases = parse_cases(&content)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Case catalog loaded: {} cases from {:?}", cases.len(), path);

    install(cases)
}

/// Parses and validates a JSON case catalog.
///
/// # Arguments
/// * `content` - JSON text holding an array of cases
///
/// # Returns
/// - `Ok(cases)` in file order when every case is valid
/// - `Err(CatalogError::ParseError)` if the JSON is malformed or a field is missing
/// - `Err(CatalogError::EmptyCatalog)` if the array is empty
/// - `Err(CatalogError::InvalidMinimumScore)` if a minimum score exceeds 100
/// - `Err(CatalogError::DuplicateId)` if two cases share an id
pub fn parse_cases(content: &str) -> Result<Vec<PasswordCase>, CatalogError> {
    let cases: Vec<PasswordCase> = serde_json::from_str(content)?;

    if cases.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let mut seen = HashSet::new();
    for case in &cases {
        if case.minimum_score > 100 {
            return Err(CatalogError::InvalidMinimumScore {
                id: case.id.clone(),
                score: case.minimum_score,
            });
        }
        if !seen.insert(case.id.as_str()) {
            return Err(CatalogError::DuplicateId(case.id.clone()));
        }
    }

    Ok(cases)
}

fn installed_count() -> Option<usize> {
    let guard = CASES.read().unwrap_or_else(PoisonError::into_inner);
    guard.as_ref().map(Vec::len)
}

fn install(cases: Vec<PasswordCase>) -> Result<usize, CatalogError> {
    let mut guard = CASES.write().unwrap_or_else(PoisonError::into_inner);
    // Another caller may have won the race since the read check
    if let Some(existing) = guard.as_ref() {
        return Ok(existing.len());
    }
    let count = cases.len();
    *guard = Some(cases);
    Ok(count)
}

/// Returns the installed cases, or the bundled ones if the catalog was
/// never initialized.
pub fn get_cases() -> Vec<PasswordCase> {
    let guard = CASES.read().unwrap_or_else(PoisonError::into_inner);
    guard.clone().unwrap_or_else(builtin_cases)
}

/// Looks a case up by id.
pub fn find_case(id: &str) -> Option<PasswordCase> {
    get_cases().into_iter().find(|case| case.id == id)
}

/// Resets the catalog for testing purposes.
#[cfg(test)]
pub fn reset_cases_for_testing() {
    let mut guard = CASES.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
