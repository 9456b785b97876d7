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

//! src/core/types.rs
//!
//! Core type definitions for keymap linting
//!
//! - `Behavior`: Which argument rule applies to a binding
//! - `Binding`: A single `&behavior ARG` occurrence in keymap text
//!
//! Bindings borrow from the keymap source; they live only as long as one
//! validation pass.

use std::fmt;

/// Classification of a behavior name
///
/// Only four behaviors take an argument the linter checks. Everything
/// else, known or not, lands in `Other` and is accepted without looking
/// at its argument.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Behavior<'a> {
    /// `&kp` - key press
    KeyPress,
    /// `&mkp` - mouse button press
    MouseButton,
    /// `&msc` - mouse scroll
    MouseScroll,
    /// `&mmv` - mouse move
    MouseMove,
    /// Any other behavior name
    Other(&'a str),
}

impl<'a> Behavior<'a> {
    /// Maps a behavior name (without the `&`) to its classification
    pub fn from_name(name: &'a str) -> Self {
        match name {
            "kp" => Behavior::KeyPress,
            "mkp" => Behavior::MouseButton,
            "msc" => Behavior::MouseScroll,
            "mmv" => Behavior::MouseMove,
            other => Behavior::Other(other),
        }
    }

    /// Returns the behavior name as written in a keymap
    pub fn name(&self) -> &'a str {
        match *self {
            Behavior::KeyPress => "kp",
            Behavior::MouseButton => "mkp",
            Behavior::MouseScroll => "msc",
            Behavior::MouseMove => "mmv",
            Behavior::Other(name) => name,
        }
    }

    /// Returns true if arguments to this behavior are checked
    pub fn is_validated(&self) -> bool {
        !matches!(self, Behavior::Other(_))
    }
}

impl fmt::Display for Behavior<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{}", self.name())
    }
}

/// A binding declaration found in keymap text
///
/// # Example
/// `&kp C_MUTE` on line 12 becomes:
/// ```
/// # use zmk_keymap_validator::core::Binding;
/// let binding = Binding { line: 12, behavior: "kp", arg: "C_MUTE" };
/// assert_eq!(binding.to_string(), "line 12: &kp C_MUTE");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Binding<'a> {
    /// 1-based line number
    pub line: usize,
    /// Behavior name without the leading `&`
    pub behavior: &'a str,
    /// First argument token
    pub arg: &'a str,
}

impl<'a> Binding<'a> {
    /// Classifies this binding's behavior
    pub fn behavior_kind(&self) -> Behavior<'a> {
        Behavior::from_name(self.behavior)
    }
}

impl fmt::Display for Binding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: &{} {}", self.line, self.behavior, self.arg)
    }
}
