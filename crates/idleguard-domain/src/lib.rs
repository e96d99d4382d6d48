//! Pure usage classification (no IO).
//!
//! Input: an inventory of resource snapshots fetched elsewhere, plus an
//! effective config and an evaluation instant.
//! Output: findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;

pub mod checks;
mod engine;
pub mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
pub(crate) mod test_support;

pub use engine::evaluate;
