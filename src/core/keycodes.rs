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

//! src/core/keycodes.rs
//!
//! Known ZMK tokens
//!
//! Static lookup tables used by the validator:
//! - `KEYCODES`: every token accepted by the key-press behavior (`&kp`)
//! - `BEHAVIORS`: behavior names the linter knows about
//! - `MOUSE_BUTTONS`, `SCROLL_CODES`, `MOVE_CODES`: argument sets for
//!   `&mkp`, `&msc` and `&mmv`
//!
//! The keycode table is not exhaustive, but covers what most keymaps use.
//! All tables are built once on first access and never mutated.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

/// Every token accepted as an argument to `&kp`
pub static KEYCODES: LazyLock<HashSet<String>> = LazyLock::new(build_keycodes);

/// Behavior names the linter knows about
///
/// Only `kp`, `mkp`, `msc` and `mmv` have their arguments checked; the rest
/// are accepted as-is. Unknown behaviors are accepted too, this set only
/// tells the two apart in logs.
pub static BEHAVIORS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BEHAVIOR_NAMES.iter().copied().collect());

/// Valid `&mkp` arguments (iterates alphabetically)
pub static MOUSE_BUTTONS: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| {
    ["LCLK", "RCLK", "MCLK", "MB1", "MB2", "MB3", "MB4", "MB5"]
        .into_iter()
        .collect()
});

/// Valid `&msc` arguments (iterates alphabetically)
pub static SCROLL_CODES: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| {
    ["SCRL_UP", "SCRL_DOWN", "SCRL_LEFT", "SCRL_RIGHT"]
        .into_iter()
        .collect()
});

/// Valid `&mmv` arguments (iterates alphabetically)
pub static MOVE_CODES: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| {
    ["MOVE_UP", "MOVE_DOWN", "MOVE_LEFT", "MOVE_RIGHT"]
        .into_iter()
        .collect()
});

const BEHAVIOR_NAMES: &[&str] = &[
    "trans", "none", "kp", "mo", "lt", "mt", "sk", "sl", "tog", "to",
    "bt", "mkp", "msc", "mmv", "mms", "out", "rgb_ug", "ext_power",
    "caps_word", "key_repeat", "reset", "bootloader", "sys_reset",
];

const MODIFIERS: &[&str] = &[
    "LSHFT", "RSHFT", "LSHIFT", "RSHIFT", "LCTRL", "RCTRL", "LALT", "RALT",
    "LGUI", "RGUI", "LMETA", "RMETA", "LWIN", "RWIN", "LCMD", "RCMD",
];

const NAVIGATION: &[&str] = &[
    "UP", "DOWN", "LEFT", "RIGHT", "HOME", "END", "PG_UP", "PG_DN",
    "PAGE_UP", "PAGE_DOWN", "INS", "INSERT", "DEL", "DELETE",
];

const COMMON_KEYS: &[&str] = &[
    "SPACE", "RET", "RETURN", "ENTER", "TAB", "ESC", "ESCAPE",
    "BSPC", "BACKSPACE", "CAPS", "CAPSLOCK", "CAPS_LOCK",
    "PSCRN", "PRINTSCREEN", "PRINT_SCREEN", "SLCK", "SCROLLLOCK", "SCROLL_LOCK",
    "PAUSE_BREAK", "PAUSE",
];

const PUNCTUATION: &[&str] = &[
    "MINUS", "EQUAL", "LBKT", "RBKT", "LBRC", "RBRC",
    "LEFT_BRACKET", "RIGHT_BRACKET", "LEFT_BRACE", "RIGHT_BRACE",
    "BSLH", "BACKSLASH", "SEMI", "SEMICOLON", "SQT", "APOS", "APOSTROPHE",
    "GRAVE", "COMMA", "DOT", "PERIOD", "SLASH", "FSLH",
    "TILDE", "EXCL", "EXCLAMATION", "AT", "AT_SIGN", "HASH", "POUND",
    "DLLR", "DOLLAR", "PRCNT", "PERCENT", "CARET", "AMPS", "AMPERSAND",
    "ASTRK", "ASTERISK", "STAR", "LPAR", "RPAR",
    "LEFT_PARENTHESIS", "RIGHT_PARENTHESIS", "UNDER", "UNDERSCORE",
    "PLUS", "PIPE", "COLON", "DQT", "DOUBLE_QUOTES", "LT", "GT",
    "QMARK", "QUESTION",
];

const NUMPAD_OPERATORS: &[&str] = &[
    "KP_PLUS", "KP_MINUS", "KP_MULTIPLY", "KP_DIVIDE", "KP_DOT",
    "KP_ENTER", "KP_EQUAL", "KP_NUMLOCK", "NUMLOCK",
];

const CONSUMER: &[&str] = &[
    "C_MUTE", "C_VOL_UP", "C_VOL_DN", "C_VOLUME_UP", "C_VOLUME_DOWN",
    "C_PP", "C_PLAY_PAUSE", "C_PLAY", "C_PAUSE", "C_STOP",
    "C_NEXT", "C_PREV", "C_PREVIOUS", "C_FF", "C_RW", "C_FAST_FORWARD", "C_REWIND",
    "C_BRI_UP", "C_BRI_DN", "C_BRIGHTNESS_INC", "C_BRIGHTNESS_DEC",
    "C_AL_CALC", "C_AL_WWW", "C_AL_MAIL", "C_AL_FILES",
    "C_AC_SEARCH", "C_AC_HOME", "C_AC_BACK", "C_AC_FORWARD", "C_AC_REFRESH",
];

const BLUETOOTH: &[&str] = &["BT_CLR", "BT_CLR_ALL", "BT_NXT", "BT_PRV"];

const OUTPUT: &[&str] = &["OUT_USB", "OUT_BLE", "OUT_TOG"];

const POWER_AND_RESET: &[&str] = &[
    "C_PWR", "C_POWER", "C_SLEEP", "C_AL_LOCK", "RESET", "BOOTLOADER",
];

/// Builds the keycode table
///
/// Generated ranges (letters, digits, F-keys, numpad digits) are expanded
/// here; everything else comes from the grouped constant lists above.
/// Mouse scroll, move and button codes are also valid `&kp` arguments.
pub fn build_keycodes() -> HashSet<String> {
    let mut codes: HashSet<String> = HashSet::new();

    // Letters
    codes.extend(('A'..='Z').map(String::from));

    // Numbers
    codes.extend((0..10).map(|i| format!("N{i}")));
    codes.extend((0..10).map(|i| format!("NUMBER_{i}")));

    // Function keys
    codes.extend((1..=24).map(|i| format!("F{i}")));

    // Numpad digits
    codes.extend((0..10).map(|i| format!("KP_N{i}")));

    let groups: [&[&str]; 9] = [
        MODIFIERS,
        NAVIGATION,
        COMMON_KEYS,
        PUNCTUATION,
        NUMPAD_OPERATORS,
        CONSUMER,
        BLUETOOTH,
        OUTPUT,
        POWER_AND_RESET,
    ];
    for group in groups {
        codes.extend(group.iter().map(|s| s.to_string()));
    }

    for mouse in [&*SCROLL_CODES, &*MOVE_CODES, &*MOUSE_BUTTONS] {
        codes.extend(mouse.iter().map(|s| s.to_string()));
    }

    codes
}

/// Returns true if `name` is a behavior listed in `BEHAVIORS`
pub fn is_known_behavior(name: &str) -> bool {
    BEHAVIORS.contains(name)
}
