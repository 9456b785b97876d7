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

//! Whitelist validation of binding arguments
//!
//! Each binding is checked against the table for its behavior:
//! - `&kp` arguments must be known keycodes
//! - `&mkp`, `&msc` and `&mmv` arguments must be in their small fixed sets
//! - Everything else is accepted without inspection
//!
//! Problems never abort the scan. Each one becomes a `Diagnostic` and the
//! full list is returned in the order the bindings appear.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::{debug, trace};

use crate::core::keycodes::{is_known_behavior, KEYCODES, MOUSE_BUTTONS, MOVE_CODES, SCROLL_CODES};
use crate::core::parser::extract_bindings;
use crate::core::types::{Behavior, Binding};

/// Substring → replacement hints for common keycode typos
const KEYCODE_HINTS: &[(&str, &str)] = &[("VOL_MUTE", "C_MUTE"), ("VOL_DOWN", "C_VOL_DN")];

/// Why a single binding argument was rejected
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// `&kp` argument is not a known keycode
    #[error("Unknown keycode '{keycode}'{}", format_hints(.suggestions))]
    UnknownKeycode {
        keycode: String,
        suggestions: Vec<&'static str>,
    },

    /// `&mkp` argument is not a mouse button
    #[error("Invalid mouse button '{0}' (valid: {valid})", valid = join_sorted(&MOUSE_BUTTONS))]
    InvalidMouseButton(String),

    /// `&msc` argument is not a scroll direction
    #[error("Invalid scroll code '{0}' (valid: {valid})", valid = join_sorted(&SCROLL_CODES))]
    InvalidScrollCode(String),

    /// `&mmv` argument is not a move direction
    #[error("Invalid mouse move '{0}' (valid: {valid})", valid = join_sorted(&MOVE_CODES))]
    InvalidMouseMove(String),
}

/// A rejected binding with its location
///
/// Displays as `Line <n>: <reason>`, the form printed by the CLI.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("Line {line}: {error}")]
pub struct Diagnostic {
    /// 1-based line of the offending binding
    pub line: usize,
    /// What was wrong with it
    pub error: ValidationError,
}

fn format_hints(suggestions: &[&str]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

fn join_sorted(set: &BTreeSet<&'static str>) -> String {
    set.iter().copied().collect::<Vec<_>>().join(", ")
}

/// Returns true if `arg` is accepted by `&kp`
pub fn is_valid_keycode(arg: &str) -> bool {
    KEYCODES.contains(arg)
}

/// Suggests replacements for an unknown keycode
///
/// Every matching hint is returned, in table order. An empty vector means
/// there is nothing useful to suggest.
pub fn suggest_keycodes(arg: &str) -> Vec<&'static str> {
    KEYCODE_HINTS
        .iter()
        .filter(|(fragment, _)| arg.contains(fragment))
        .map(|(_, replacement)| *replacement)
        .collect()
}

/// Validates one binding's argument against its behavior's table
pub fn validate_binding(binding: &Binding<'_>) -> Result<(), ValidationError> {
    let arg = binding.arg;
    let behavior = binding.behavior_kind();

    if !behavior.is_validated() {
        if !is_known_behavior(binding.behavior) {
            debug!(line = binding.line, behavior = binding.behavior, "unrecognised behavior, argument not checked");
        }
        return Ok(());
    }

    match behavior {
        Behavior::KeyPress if !is_valid_keycode(arg) => Err(ValidationError::UnknownKeycode {
            keycode: arg.to_string(),
            suggestions: suggest_keycodes(arg),
        }),
        Behavior::MouseButton if !MOUSE_BUTTONS.contains(arg) => {
            Err(ValidationError::InvalidMouseButton(arg.to_string()))
        }
        Behavior::MouseScroll if !SCROLL_CODES.contains(arg) => {
            Err(ValidationError::InvalidScrollCode(arg.to_string()))
        }
        Behavior::MouseMove if !MOVE_CODES.contains(arg) => {
            Err(ValidationError::InvalidMouseMove(arg.to_string()))
        }
        _ => Ok(()),
    }
}

/// Validates a sequence of bindings, collecting every failure
///
/// The returned diagnostics follow the input order. Repeated identical
/// mistakes are reported once per occurrence.
pub fn validate_bindings<'a, I>(bindings: I) -> Vec<Diagnostic>
where
    I: IntoIterator<Item = Binding<'a>>,
{
    let mut diagnostics = Vec::new();
    let mut checked = 0usize;

    for binding in bindings {
        checked += 1;
        trace!(%binding, "checking binding");

        if let Err(error) = validate_binding(&binding) {
            diagnostics.push(Diagnostic {
                line: binding.line,
                error,
            });
        }
    }

    debug!(checked, failed = diagnostics.len(), "validation pass finished");
    diagnostics
}

/// Extracts and validates all bindings in keymap text
///
/// # Example
/// ```
/// use zmk_keymap_validator::core::validator::validate_keymap;
///
/// let diagnostics = validate_keymap("&kp C_VOL_MUTE");
/// assert_eq!(
///     diagnostics[0].to_string(),
///     "Line 1: Unknown keycode 'C_VOL_MUTE' (did you mean: C_MUTE?)"
/// );
/// ```
pub fn validate_keymap(content: &str) -> Vec<Diagnostic> {
    validate_bindings(extract_bindings(content))
}
