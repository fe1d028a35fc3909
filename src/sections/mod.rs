//! Password scoring sections
//!
//! Each section scores one aspect of a password and returns a signed
//! point delta. The evaluator sums the deltas and clamps the total.

mod length;
mod penalty;
mod variety;

pub use length::length_section;
pub use penalty::pattern_penalty_section;
pub use variety::character_variety_section;

/// Signed point contribution of a section.
pub type SectionResult = i64;
