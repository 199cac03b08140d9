//! Repository layout checks
//!
//! Kept out of the unit target so a missing test file is reported as a
//! layout problem rather than a compile error.

mod coverage;
