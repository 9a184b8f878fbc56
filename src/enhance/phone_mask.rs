//! Phone Input Mask
//!
//! Formats phone inputs as `+7 (999) 123-45-67` while typing. The first
//! digit is the country digit and is always rendered as the prefix.

use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent};

use crate::config::PhoneMaskConfig;
use crate::dom;

const PHONE_INPUTS: &str = r#"input[type="tel"], input[name="phone"]"#;

/// Re-mask raw input. Digits past the eleventh are dropped.
pub fn format_phone(raw: &str, prefix: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len();
    if len == 0 {
        return String::new();
    }
    let group = |from: usize, to: usize| -> String { digits[from.min(len)..to.min(len)].iter().collect() };

    let mut formatted = prefix.to_string();
    if len > 1 {
        formatted.push_str(" (");
        formatted.push_str(&group(1, 4));
    }
    if len >= 5 {
        formatted.push_str(") ");
        formatted.push_str(&group(4, 7));
    }
    if len >= 8 {
        formatted.push('-');
        formatted.push_str(&group(7, 9));
    }
    if len >= 10 {
        formatted.push('-');
        formatted.push_str(&group(9, 11));
    }
    formatted
}

/// Backspace may not eat the bare prefix
pub fn blocks_backspace(key: &str, value: &str, prefix: &str) -> bool {
    key == "Backspace" && value == prefix
}

pub fn init_phone_mask(config: &PhoneMaskConfig) {
    for input in dom::query_all(PHONE_INPUTS) {
        let Ok(input) = input.dyn_into::<HtmlInputElement>() else {
            continue;
        };

        let prefix = config.country_prefix.clone();
        let field = input.clone();
        dom::listen(&input, "input", move |_| {
            field.set_value(&format_phone(&field.value(), &prefix));
        });

        let prefix = config.country_prefix.clone();
        let field = input.clone();
        dom::listen(&input, "keydown", move |ev| {
            let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if blocks_backspace(&key, &field.value(), &prefix) {
                ev.prevent_default();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grows_with_digits() {
        assert_eq!(format_phone("", "+7"), "");
        assert_eq!(format_phone("abc", "+7"), "");
        assert_eq!(format_phone("8", "+7"), "+7");
        assert_eq!(format_phone("89", "+7"), "+7 (9");
        assert_eq!(format_phone("8999", "+7"), "+7 (999");
        assert_eq!(format_phone("89991", "+7"), "+7 (999) 1");
        assert_eq!(format_phone("89991234", "+7"), "+7 (999) 123-4");
        assert_eq!(format_phone("8999123456", "+7"), "+7 (999) 123-45-6");
        assert_eq!(format_phone("8 999 123 45 67", "+7"), "+7 (999) 123-45-67");
    }

    #[test]
    fn test_reformatting_is_stable() {
        let once = format_phone("89991234567", "+7");
        assert_eq!(format_phone(&once, "+7"), once);
        assert_eq!(format_phone("+7 (999) 123-45-678", "+7"), "+7 (999) 123-45-67");
    }

    #[test]
    fn test_backspace_guard() {
        assert!(blocks_backspace("Backspace", "+7", "+7"));
        assert!(!blocks_backspace("Backspace", "+7 (9", "+7"));
        assert!(!blocks_backspace("Delete", "+7", "+7"));
    }
}
