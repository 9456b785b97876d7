//! Config module tests
//!
//! - Keymap file opening, reading and path expansion
