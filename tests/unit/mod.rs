//! Unit tests module
//!
//! Contains unit tests for individual components through the public API.

mod actions; // reserved action keywords
mod identifiers; // identifier heuristic
mod matching; // segment splitting and template matching
mod path_normalization_tests;
