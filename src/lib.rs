// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! ZMK Keymap Validator
//!
//! A fast lint for ZMK keymap files that catches unknown keycodes and
//! invalid mouse arguments before they reach the firmware build.
//!
//! # Features
//!
//! - **Keycode Checking:** `&kp` arguments are checked against a table of known keycodes
//! - **Mouse Arguments:** `&mkp`, `&msc` and `&mmv` arguments are checked against their own sets
//! - **Suggestions:** Common typos such as `C_VOL_MUTE` come with a replacement hint
//! - **Line Numbers:** Every diagnostic points at the offending line
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, keycode tables, extraction, validation)
//! - **`config`:** Keymap file loading
//! - **`report`:** Console output
//!
//! # Limitations
//!
//! This is a line scanner, not a devicetree parser. Layers, macros, combos
//! and behavior arity are not checked, and only comment lines that *start*
//! with `//` or `/*` are skipped.
//!
//! # Examples
//!
//! ## Validating keymap text
//!
//! ```
//! use zmk_keymap_validator::core::validate_keymap;
//!
//! let diagnostics = validate_keymap("bindings = <&kp A &mkp MB9>;");
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].line, 1);
//! ```
//!
//! ## Validating a file
//!
//! ```no_run
//! use zmk_keymap_validator::{config::KeymapFile, core::validate_keymap, report::Report};
//!
//! let content = KeymapFile::open("config/corne.keymap")?.read()?;
//! let report = Report::new(validate_keymap(&content));
//! if report.is_valid() {
//!     println!("No problems!");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;
pub mod report;

// Re-export commonly used types for convenience
pub use crate::core::{Behavior, Binding, Diagnostic, ValidationError};

/// Initialise tracing, writing to stderr so stdout carries only the report.
///
/// `level` takes a filter directive (`debug`, `zmk_keymap_validator=trace`,
/// ...). Without one, `RUST_LOG` is honoured, falling back to `warn`.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init_tracing(level: Option<&str>) {
    use tracing_subscriber::EnvFilter;

    let filter = match level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // Ignore the error if the global subscriber was already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
