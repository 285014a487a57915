use reckon::keypad::{parse_keys, BinaryKey, Key, Keypad, ERROR_TEXT};

fn assert_display(keys: &str, expected: &str) {
    let mut keypad = Keypad::new();
    keypad.press_all(parse_keys(keys).unwrap_or_else(|e| panic!("{e}")));
    assert_eq!(keypad.display(), expected, "after keys `{keys}`");
}

#[test]
fn evaluates_typed_expressions() {
    assert_display("2+3*4=", "14");
    assert_display("7/2=", "3.5");
    assert_display("1/3=", "0.333333333333");
    assert_display("200+10%=", "200.1");
}

#[test]
fn toggled_signs_evaluate() {
    assert_display("5~+3=", "-2");
    assert_display("5-3~=", "8");
    assert_display("4*3~=", "-12");
}

#[test]
fn digit_after_result_starts_fresh() {
    let mut keypad = Keypad::new();
    keypad.press_all(parse_keys("2+2=").unwrap());
    assert_eq!(keypad.history(), "2+2");

    keypad.press(Key::Digit('7'));
    assert_eq!(keypad.display(), "7");
    assert_eq!(keypad.history(), "");
    assert!(!keypad.just_evaluated());
}

#[test]
fn operator_after_result_continues_from_it() {
    let mut keypad = Keypad::new();
    keypad.press_all(parse_keys("2+2=*3=").unwrap());
    assert_eq!(keypad.display(), "12");
    assert_eq!(keypad.history(), "4*3");
}

#[test]
fn decimal_after_result_starts_fresh() {
    assert_display("2+2=.5", "0.5");
}

#[test]
fn division_by_zero_shows_error() {
    let mut keypad = Keypad::new();
    keypad.press_all(parse_keys("5/0=").unwrap());
    assert_eq!(keypad.display(), ERROR_TEXT);
    assert!(keypad.is_error());
    assert_eq!(keypad.history(), "5/0");
}

#[test]
fn error_ignores_operators_and_evaluation() {
    assert_display("5/0=+", ERROR_TEXT);
    assert_display("5/0==", ERROR_TEXT);
    assert_display("5/0=~", ERROR_TEXT);
    assert_display("5/0=%", ERROR_TEXT);
}

#[test]
fn error_recovers_through_editing_keys() {
    assert_display("5/0=C", "0");
    assert_display("5/0=<", "0");
    assert_display("5/0=8", "8");
    assert_display("5/0=.", "0.");
}

#[test]
fn overflow_shows_error() {
    let mut keys = "9".repeat(200);
    keys.push('*');
    keys.push_str(&"9".repeat(200));
    keys.push('=');
    assert_display(&keys, ERROR_TEXT);
}

#[test]
fn percent_of_an_overflowing_number_shows_error() {
    let mut keypad = Keypad::new();
    keypad.press_all(parse_keys(&"9".repeat(400)).unwrap());
    keypad.press(Key::Percent);
    assert_eq!(keypad.display(), ERROR_TEXT);
    assert!(keypad.is_error());

    keypad.press(Key::ToggleSign);
    keypad.press(Key::Operator(BinaryKey::Add));
    assert_eq!(keypad.display(), ERROR_TEXT);
}

#[test]
fn percent_then_sign_is_rejected_by_the_engine() {
    assert_display("50+5%-2=", ERROR_TEXT);
}

#[test]
fn later_lines_build_on_the_previous_result() {
    let mut keypad = Keypad::new();
    for line in ["12+3=", "*2="] {
        keypad.press_all(parse_keys(line).unwrap());
    }
    assert_eq!(keypad.display(), "30");
    assert_eq!(keypad.history(), "15*2");
}

#[test]
fn clear_resets_everything() {
    let mut keypad = Keypad::new();
    keypad.press_all(parse_keys("12+3=C").unwrap());
    assert_eq!(keypad, Keypad::new());
}
