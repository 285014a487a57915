use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::{evaluate_expression, util::format::format_result};

/// Text shown on the display after a failed evaluation.
pub const ERROR_TEXT: &str = "Error";

/// Characters that end the number currently being typed.
const SEGMENT_BREAKS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

lazy_static! {
    /// A negated operand at the end of the buffer, e.g. `3*(-12.5)`.
    static ref WRAPPED_NEGATIVE: Regex = Regex::new(
        r"\(-([0-9]+(?:\.[0-9]*)?|\.[0-9]+)\)$"
    ).unwrap();

    /// The number at the end of the buffer.
    static ref TRAILING_NUMBER: Regex = Regex::new(
        r"(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$"
    ).unwrap();

    /// A buffer that is nothing but one optionally signed number.
    static ref PLAIN_NUMBER: Regex = Regex::new(
        r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)\s*$"
    ).unwrap();
}

/// A binary operator key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryKey {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryKey {
    /// The character appended to the buffer.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

/// A key on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `0` to `9`.
    Digit(char),
    /// `.`
    Decimal,
    /// `+`, `-`, `*` or `/`.
    Operator(BinaryKey),
    /// `%`
    Percent,
    /// `±`
    ToggleSign,
    /// `⌫`
    Backspace,
    /// `C` / `AC`
    Clear,
    /// `=`
    Evaluate,
}

/// A character that does not map to any key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unrecognized key '{0}'.")]
pub struct InvalidKey(pub char);

impl TryFrom<char> for Key {
    type Error = InvalidKey;

    /// Maps a typed character to a key.
    ///
    /// Besides the obvious symbols, `~` and `±` toggle the sign, `<` and `⌫`
    /// erase, and `c`/`C` clear.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            '0'..='9' => Self::Digit(c),
            '.' => Self::Decimal,
            '+' => Self::Operator(BinaryKey::Add),
            '-' => Self::Operator(BinaryKey::Sub),
            '*' => Self::Operator(BinaryKey::Mul),
            '/' => Self::Operator(BinaryKey::Div),
            '%' => Self::Percent,
            '~' | '±' => Self::ToggleSign,
            '<' | '⌫' => Self::Backspace,
            'c' | 'C' => Self::Clear,
            '=' => Self::Evaluate,
            _ => return Err(InvalidKey(c)),
        })
    }
}

/// Parses a string of key characters, ignoring whitespace.
///
/// # Errors
/// Returns the first character that is not a key.
///
/// # Example
/// ```
/// use reckon::keypad::{parse_keys, BinaryKey, Key};
///
/// let keys = parse_keys("1 + 2 =").unwrap();
/// assert_eq!(keys,
///            vec![Key::Digit('1'),
///                 Key::Operator(BinaryKey::Add),
///                 Key::Digit('2'),
///                 Key::Evaluate]);
/// assert!(parse_keys("1^2").is_err());
/// ```
pub fn parse_keys(input: &str) -> Result<Vec<Key>, InvalidKey> {
    input.chars()
         .filter(|c| !c.is_whitespace())
         .map(Key::try_from)
         .collect()
}

/// Editing state of the calculator display.
///
/// The keypad owns the text buffer shown to the user and applies the editing
/// rules for every key. Pressing `=` hands the buffer to
/// [`evaluate_expression`] and replaces it with the formatted result, or with
/// [`ERROR_TEXT`]. While the display shows the error, only clear, backspace,
/// digits and the decimal point have an effect.
///
/// # Example
/// ```
/// use reckon::keypad::{parse_keys, Keypad};
///
/// let mut keypad = Keypad::new();
/// keypad.press_all(parse_keys("200+10%=").unwrap());
/// assert_eq!(keypad.display(), "200.1");
/// assert_eq!(keypad.history(), "200+10%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    display:        String,
    history:        String,
    just_evaluated: bool,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates a keypad showing `0` with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self { display:        "0".to_string(),
               history:        String::new(),
               just_evaluated: false, }
    }

    /// The main display line.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The secondary line: the pending expression, or the last evaluated one.
    #[must_use]
    pub fn history(&self) -> &str {
        &self.history
    }

    /// Whether the display shows a result that the next digit replaces.
    #[must_use]
    pub const fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// Whether the display shows [`ERROR_TEXT`].
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_TEXT
    }

    /// Label of the clear key: `AC` on a blank display, `C` otherwise.
    #[must_use]
    pub fn clear_label(&self) -> &'static str {
        if self.display == "0" { "AC" } else { "C" }
    }

    /// Applies a single key press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.push_digit(digit),
            Key::Decimal => self.push_decimal(),
            Key::Operator(op) => self.push_operator(op),
            Key::Percent => self.apply_percent(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Backspace => self.backspace(),
            Key::Clear => self.clear(),
            Key::Evaluate => self.evaluate(),
        }
        debug!(?key, display = %self.display, history = %self.history, "key pressed");
    }

    /// Applies key presses in order.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) {
        for key in keys {
            self.press(key);
        }
    }

    fn push_digit(&mut self, digit: char) {
        if self.just_evaluated {
            self.display = digit.to_string();
            self.history.clear();
            self.just_evaluated = false;
        } else if self.is_error() || self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    fn push_decimal(&mut self) {
        if self.is_error() {
            self.display = "0.".to_string();
            self.just_evaluated = false;
            return;
        }

        if self.just_evaluated {
            self.display = "0.".to_string();
            self.history.clear();
            self.just_evaluated = false;
            return;
        }

        if ends_with_operator(&self.display) {
            self.display.push_str("0.");
            return;
        }

        // One decimal point per number.
        let segment = match self.display.rfind(SEGMENT_BREAKS) {
            Some(index) => &self.display[index + 1..],
            None => &self.display,
        };
        if !segment.contains('.') {
            self.display.push('.');
        }
    }

    fn push_operator(&mut self, op: BinaryKey) {
        if self.is_error() {
            return;
        }
        self.just_evaluated = false;

        if ends_with_operator(&self.display) {
            self.display.pop();
        }
        if self.display.is_empty() {
            self.display.push('0');
        }

        self.display.push(op.symbol());
        self.history.clone_from(&self.display);
    }

    fn apply_percent(&mut self) {
        if self.is_error() {
            return;
        }

        if PLAIN_NUMBER.is_match(&self.display) {
            self.display = self.display
                               .trim()
                               .parse::<f64>()
                               .ok()
                               .map(|value| value / 100.0)
                               .filter(|value| value.is_finite())
                               .map_or_else(|| ERROR_TEXT.to_string(), format_result);
            return;
        }

        if ends_with_operator(&self.display) || self.display.ends_with('%') {
            return;
        }
        self.display.push('%');
    }

    fn toggle_sign(&mut self) {
        if self.is_error() {
            return;
        }
        self.just_evaluated = false;

        if ends_with_operator(&self.display) {
            return;
        }

        let (core, suffix) = match self.display.strip_suffix('%') {
            Some(core) => (core, "%"),
            None => (self.display.as_str(), ""),
        };

        let toggled = if let Some(captures) = WRAPPED_NEGATIVE.captures(core) {
            // `...(-N)` unwraps to `...N`.
            let start = core.len() - captures[0].len();
            format!("{}{}", &core[..start], &captures[1])
        } else if let Some(number) = TRAILING_NUMBER.find(core) {
            let start = number.start();
            let bytes = core.as_bytes();
            let unary_minus = start > 0
                              && bytes[start - 1] == b'-'
                              && (start == 1 || b"+-*/(".contains(&bytes[start - 2]));
            if unary_minus {
                format!("{}{}", &core[..start - 1], number.as_str())
            } else {
                format!("{}(-{})", &core[..start], number.as_str())
            }
        } else {
            return;
        };

        self.display = if toggled.is_empty() {
            "0".to_string()
        } else {
            toggled + suffix
        };
    }

    fn backspace(&mut self) {
        if self.is_error() || self.display.chars().count() <= 1 {
            self.display = "0".to_string();
        } else {
            self.display.pop();
        }
        self.just_evaluated = false;
    }

    fn clear(&mut self) {
        self.display = "0".to_string();
        self.history.clear();
        self.just_evaluated = false;
    }

    fn evaluate(&mut self) {
        if self.is_error() {
            return;
        }

        if ends_with_operator(&self.display) {
            self.display = ERROR_TEXT.to_string();
            return;
        }

        let expression = std::mem::take(&mut self.display);
        self.display = match evaluate_expression(&expression) {
            Ok(value) if value.is_finite() => format_result(value),
            Ok(value) => {
                debug!(value, "result is not finite");
                ERROR_TEXT.to_string()
            },
            Err(e) => {
                debug!(error = %e, "evaluation failed");
                ERROR_TEXT.to_string()
            },
        };
        self.history = expression;
        self.just_evaluated = true;
    }
}

fn ends_with_operator(buffer: &str) -> bool {
    buffer.ends_with(['+', '-', '*', '/'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(keys: &str) -> Keypad {
        let mut keypad = Keypad::new();
        keypad.press_all(parse_keys(keys).unwrap());
        keypad
    }

    #[test]
    fn digits_replace_the_initial_zero() {
        assert_eq!(typed("").display(), "0");
        assert_eq!(typed("0").display(), "0");
        assert_eq!(typed("007").display(), "7");
        assert_eq!(typed("123").display(), "123");
    }

    #[test]
    fn one_decimal_point_per_number() {
        assert_eq!(typed("1..2.").display(), "1.2");
        assert_eq!(typed("1.5+2.").display(), "1.5+2.");
        assert_eq!(typed("1.5+.").display(), "1.5+0.");
        assert_eq!(typed(".").display(), "0.");
    }

    #[test]
    fn trailing_operator_is_replaced() {
        let keypad = typed("5+*-");
        assert_eq!(keypad.display(), "5-");
        assert_eq!(keypad.history(), "5-");
    }

    #[test]
    fn backspace_keeps_a_zero_baseline() {
        assert_eq!(typed("12<").display(), "1");
        assert_eq!(typed("12<<").display(), "0");
        assert_eq!(typed("<<").display(), "0");
    }

    #[test]
    fn toggle_sign_wraps_and_unwraps() {
        assert_eq!(typed("5~").display(), "(-5)");
        assert_eq!(typed("5~~").display(), "5");
        assert_eq!(typed("3+5~").display(), "3+(-5)");
        assert_eq!(typed("3+5~~").display(), "3+5");
        assert_eq!(typed("3+~").display(), "3+");
    }

    #[test]
    fn toggle_sign_removes_a_unary_minus() {
        let mut keypad = Keypad::new();
        keypad.press_all(parse_keys("4*").unwrap());
        keypad.display.push_str("-5");
        keypad.press(Key::ToggleSign);
        assert_eq!(keypad.display(), "4*5");
    }

    #[test]
    fn toggle_sign_keeps_a_trailing_percent() {
        assert_eq!(typed("2+5%~").display(), "2+(-5)%");
        assert_eq!(typed("2+5%~~").display(), "2+5%");
    }

    #[test]
    fn percent_on_a_plain_number_converts_immediately() {
        assert_eq!(typed("50%").display(), "0.5");
        assert_eq!(typed("5~%").display(), "(-5)%");
    }

    #[test]
    fn percent_in_an_expression_is_appended_once() {
        assert_eq!(typed("200+10%%").display(), "200+10%");
        assert_eq!(typed("200+%").display(), "200+");
    }

    #[test]
    fn evaluate_shows_result_and_history() {
        let keypad = typed("2+3*4=");
        assert_eq!(keypad.display(), "14");
        assert_eq!(keypad.history(), "2+3*4");
        assert!(keypad.just_evaluated());
    }

    #[test]
    fn evaluate_rejects_a_trailing_operator() {
        let keypad = typed("2+=");
        assert_eq!(keypad.display(), ERROR_TEXT);
        assert_eq!(keypad.history(), "2+");
    }

    #[test]
    fn clear_label_follows_the_display() {
        assert_eq!(typed("").clear_label(), "AC");
        assert_eq!(typed("1").clear_label(), "C");
        assert_eq!(typed("1C").clear_label(), "AC");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_eq!(parse_keys("1x"), Err(InvalidKey('x')));
        assert_eq!(parse_keys("5n"), Err(InvalidKey('n')));
    }
}
