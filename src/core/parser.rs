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

//! src/core/parser.rs
//!
//! Binding extraction from ZMK keymap text
//!
//! This is a line scanner, not a devicetree parser. It handles:
//! - `&behavior ARG` declarations anywhere on a line
//! - Several bindings per line (`bindings = <&kp A &kp B>;`)
//! - Line comments (`//`) and block-comment openers (`/*`)
//! - Line numbers for error reporting
//!
//! # Limitations
//! Comment detection only looks at the start of a trimmed line. The body
//! of a multi-line `/* ... */` block is scanned like any other text, and
//! bindings inside a trailing `// ...` comment are still picked up.
//! Declarations whose first argument is not a plain token (`&kp LS(A)`)
//! yield the leading token only (`LS`).

use regex::Regex;
use std::sync::LazyLock;

use crate::core::types::Binding;

/// `&<behavior>` followed by whitespace and an argument token
static BINDING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(\w+)\s+([A-Za-z0-9_]+)").expect("binding pattern should be valid regex")
});

/// Extract every binding from keymap text
///
/// # Arguments
/// * `content` - The full keymap file content
///
/// # Returns
/// A lazy iterator over bindings in top-to-bottom, left-to-right order.
/// Calling this again on the same content starts a fresh scan.
///
/// # Example
/// ```
/// use zmk_keymap_validator::core::parser::extract_bindings;
///
/// let keymap = "bindings = <&kp A &mo 1>;\n// &kp IGNORED";
/// let found: Vec<_> = extract_bindings(keymap)
///     .map(|b| (b.line, b.behavior, b.arg))
///     .collect();
/// assert_eq!(found, vec![(1, "kp", "A"), (1, "mo", "1")]);
/// ```
pub fn extract_bindings(content: &str) -> impl Iterator<Item = Binding<'_>> + '_ {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line)) // Human-readable numbers start at 1
        .filter(|(_, line)| !is_comment_line(line))
        .flat_map(|(line_num, line)| parse_line(line_num, line))
}

/// Find all bindings on a single line
///
/// The caller is responsible for skipping comment lines.
pub fn parse_line(line_num: usize, line: &str) -> impl Iterator<Item = Binding<'_>> + '_ {
    BINDING_PATTERN.captures_iter(line).filter_map(move |caps| {
        Some(Binding {
            line: line_num,
            behavior: caps.get(1)?.as_str(),
            arg: caps.get(2)?.as_str(),
        })
    })
}

/// Returns true if the trimmed line opens a `//` or `/*` comment
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("//") || trimmed.starts_with("/*")
}
