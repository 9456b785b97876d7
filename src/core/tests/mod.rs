//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Binding extraction tests
//! - Argument validation tests
//! - Keycode table tests
//! - Type tests (Behavior, Binding)

#[cfg(test)]
mod validator_tests;
