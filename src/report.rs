// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! Console report for a validation run
//!
//! A passing run prints a single confirmation line. A failing run prints a
//! header followed by one indented line per diagnostic, in scan order:
//!
//! ```text
//! ✗ Keymap validation failed:
//!   Line 3: Unknown keycode 'C_VOL_MUTE' (did you mean: C_MUTE?)
//!   Line 9: Invalid mouse button 'MB9' (valid: LCLK, MB1, MB2, MB3, MB4, MB5, MCLK, RCLK)
//! ```

use colored::*;
use std::io::{self, Write};

use crate::core::Diagnostic;

/// Printed when no diagnostics were found
pub const SUCCESS_MESSAGE: &str = "Keymap keycodes are valid";

/// Printed above the list of diagnostics
pub const FAILURE_HEADER: &str = "Keymap validation failed:";

/// Outcome of validating one keymap
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Wraps diagnostics collected by the validator
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Returns true if nothing was flagged
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics in the order they were found
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of flagged bindings
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if nothing was flagged
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl From<Vec<Diagnostic>> for Report {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::new(diagnostics)
    }
}

/// Writes the report to `out`
///
/// Colour is applied by `colored` and switches off on its own when the
/// output is not a terminal or `NO_COLOR` is set.
pub fn render_report(report: &Report, out: &mut impl Write) -> io::Result<()> {
    if report.is_valid() {
        writeln!(out, "{} {}", "✓".green().bold(), SUCCESS_MESSAGE)?;
        return Ok(());
    }

    writeln!(out, "{} {}", "✗".red().bold(), FAILURE_HEADER.bold())?;
    for diagnostic in report.diagnostics() {
        writeln!(out, "  {}", diagnostic)?;
    }

    Ok(())
}
