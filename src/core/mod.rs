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

//! src/core/mod.rs
//!
//! Core linting logic
//!
//! This module contains the data structures and algorithms for checking
//! keymap bindings, including:
//! - Type definitions for bindings and behaviors
//! - Static keycode and argument tables
//! - Binding extraction from raw keymap text
//! - Argument validation and diagnostics
//!
//! Nothing here touches the filesystem or the terminal, so every piece can
//! be tested on plain strings.

pub mod keycodes;
pub mod parser;
pub mod types;
pub mod validator;

pub use parser::extract_bindings;
pub use types::*;
pub use validator::{validate_keymap, Diagnostic, ValidationError};

#[cfg(test)]
mod tests;
