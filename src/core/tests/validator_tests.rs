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

use crate::core::{
    keycodes::{KEYCODES, MOUSE_BUTTONS, MOVE_CODES, SCROLL_CODES},
    types::Binding,
    validator::{validate_binding, validate_bindings, validate_keymap, Diagnostic, ValidationError},
};

fn messages(content: &str) -> Vec<String> {
    validate_keymap(content).iter().map(ToString::to_string).collect()
}

#[test]
fn test_valid_keycode_passes() {
    assert!(validate_keymap("&kp A").is_empty());
}

#[test]
fn test_every_keycode_passes() {
    for code in KEYCODES.iter() {
        let binding = Binding { line: 1, behavior: "kp", arg: code };
        assert!(validate_binding(&binding).is_ok(), "{code} should be accepted");
    }
}

#[test]
fn test_vol_mute_suggests_c_mute() {
    assert_eq!(
        messages("&kp C_VOL_MUTE"),
        vec!["Line 1: Unknown keycode 'C_VOL_MUTE' (did you mean: C_MUTE?)"]
    );
}

#[test]
fn test_vol_down_suggests_c_vol_dn() {
    assert_eq!(
        messages("&kp C_VOL_DOWN"),
        vec!["Line 1: Unknown keycode 'C_VOL_DOWN' (did you mean: C_VOL_DN?)"]
    );
}

#[test]
fn test_unknown_keycode_without_suggestion() {
    assert_eq!(messages("&kp ZZZZ"), vec!["Line 1: Unknown keycode 'ZZZZ'"]);
}

#[test]
fn test_invalid_mouse_button() {
    assert_eq!(
        messages("&mkp MB9"),
        vec!["Line 1: Invalid mouse button 'MB9' (valid: LCLK, MB1, MB2, MB3, MB4, MB5, MCLK, RCLK)"]
    );
}

#[test]
fn test_invalid_scroll_code() {
    assert_eq!(
        messages("&msc MOVE_UP"),
        vec!["Line 1: Invalid scroll code 'MOVE_UP' (valid: SCRL_DOWN, SCRL_LEFT, SCRL_RIGHT, SCRL_UP)"]
    );
}

#[test]
fn test_invalid_mouse_move() {
    assert_eq!(
        messages("&mmv SCRL_UP"),
        vec!["Line 1: Invalid mouse move 'SCRL_UP' (valid: MOVE_DOWN, MOVE_LEFT, MOVE_RIGHT, MOVE_UP)"]
    );
}

#[test]
fn test_valid_mouse_arguments_pass() {
    for code in MOUSE_BUTTONS.iter() {
        assert!(validate_keymap(&format!("&mkp {code}")).is_empty());
    }
    for code in SCROLL_CODES.iter() {
        assert!(validate_keymap(&format!("&msc {code}")).is_empty());
    }
    for code in MOVE_CODES.iter() {
        assert!(validate_keymap(&format!("&mmv {code}")).is_empty());
    }
}

#[test]
fn test_mouse_button_is_not_a_scroll_code() {
    // Sets are per-behavior: a valid &kp argument is not automatically a valid &mkp one
    assert_eq!(validate_keymap("&mkp A").len(), 1);
    assert_eq!(validate_keymap("&msc LCLK").len(), 1);
}

#[test]
fn test_commented_binding_ignored() {
    assert!(validate_keymap("// &kp ZZZZ").is_empty());
    assert!(validate_keymap("/* &kp ZZZZ */").is_empty());
}

#[test]
fn test_unvalidated_behaviors_ignored() {
    let keymap = "&mo 99\n&lt 1 SPACE\n&bt BT_SEL 0\n&custom WHATEVER\n";
    assert!(validate_keymap(keymap).is_empty());
}

#[test]
fn test_diagnostics_follow_scan_order() {
    let keymap = "\
/ {
    keymap {
        base {
            bindings = <&kp BAD1 &kp A &mkp BAD2>;
            // &kp IGNORED
            sensor-bindings = <&msc BAD3>;
            extra = <&mmv BAD4 &kp BAD1>;
        };
    };
};
";
    let diagnostics = validate_keymap(keymap);
    let lines: Vec<usize> = diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![4, 4, 6, 7, 7]);

    assert!(matches!(diagnostics[0].error, ValidationError::UnknownKeycode { .. }));
    assert!(matches!(diagnostics[1].error, ValidationError::InvalidMouseButton(_)));
    assert!(matches!(diagnostics[2].error, ValidationError::InvalidScrollCode(_)));
    assert!(matches!(diagnostics[3].error, ValidationError::InvalidMouseMove(_)));
}

#[test]
fn test_repeated_errors_not_deduplicated() {
    let diagnostics = validate_keymap("&kp ZZZZ &kp ZZZZ\n&kp ZZZZ");
    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics[0], diagnostics[1]);
}

#[test]
fn test_validation_is_idempotent() {
    let keymap = "&kp C_VOL_MUTE\n&mkp MB9\n&kp A\n&msc NOPE\n";
    assert_eq!(validate_keymap(keymap), validate_keymap(keymap));
}

#[test]
fn test_validate_bindings_accepts_any_source() {
    let bindings = vec![
        Binding { line: 10, behavior: "kp", arg: "A" },
        Binding { line: 11, behavior: "mmv", arg: "MOVE_SIDEWAYS" },
    ];

    assert_eq!(
        validate_bindings(bindings),
        vec![Diagnostic {
            line: 11,
            error: ValidationError::InvalidMouseMove("MOVE_SIDEWAYS".to_string()),
        }]
    );
}

#[test]
fn test_empty_keymap_is_valid() {
    assert!(validate_keymap("").is_empty());
}
