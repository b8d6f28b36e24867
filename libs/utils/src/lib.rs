//! Utility types and functions shared by the crates in this repo.

pub mod term;
