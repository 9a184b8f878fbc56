//! Contact Form Validation
//!
//! Client-side checks on the callback form before it is submitted. The
//! server validates again; this only saves a round trip.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

use crate::config::ContactFormConfig;
use crate::dom;

const INVALID_CLASS: &str = "is-invalid";
const FEEDBACK_CLASS: &str = "invalid-feedback";

/// Error message for a phone value with too few digits
pub fn phone_error<'a>(value: &str, config: &'a ContactFormConfig) -> Option<&'a str> {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    (digits < config.min_phone_digits).then_some(config.phone_error.as_str())
}

/// Error message for a message that is too short once trimmed
pub fn message_error<'a>(value: &str, config: &'a ContactFormConfig) -> Option<&'a str> {
    let chars = value.trim().chars().count();
    (chars < config.min_message_chars).then_some(config.message_error.as_str())
}

fn clear_error(field: &Element) {
    let _ = field.class_list().remove_1(INVALID_CLASS);
    if let Some(feedback) = field
        .parent_element()
        .and_then(|parent| dom::query_in(&parent, &format!(".{FEEDBACK_CLASS}")))
    {
        feedback.remove();
    }
}

fn show_error(field: &Element, message: &str) {
    let _ = field.class_list().add_1(INVALID_CLASS);
    let (Some(parent), Some(doc)) = (field.parent_element(), field.owner_document()) else {
        return;
    };
    match doc.create_element("div") {
        Ok(feedback) => {
            feedback.set_class_name(FEEDBACK_CLASS);
            feedback.set_text_content(Some(message));
            let _ = parent.append_child(&feedback);
        }
        Err(err) => log::warn!("validation message not shown: {:?}", err),
    }
}

/// Replace any previous feedback on `field`; true when it passed
fn apply(field: &Element, error: Option<&str>) -> bool {
    clear_error(field);
    match error {
        Some(message) => {
            show_error(field, message);
            false
        }
        None => true,
    }
}

pub fn init_contact_form(config: &ContactFormConfig) {
    let Some(form) = dom::query(".contact-form") else {
        return;
    };
    let config = config.clone();

    dom::listen(&form, "submit", move |ev| {
        let Some(form) = ev.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let mut valid = true;

        if let Some(phone) = dom::query_in(&form, r#"input[name="phone"]"#)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            valid &= apply(&phone, phone_error(&phone.value(), &config));
        }
        if let Some(message) = dom::query_in(&form, r#"textarea[name="message"]"#)
            .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
        {
            valid &= apply(&message, message_error(&message.value(), &config));
        }

        if !valid {
            log::debug!("contact form submit blocked by validation");
            ev.prevent_default();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_counts_digits_only() {
        let config = ContactFormConfig::default();
        assert_eq!(phone_error("+7 (999) 123-45-67", &config), None);
        assert_eq!(phone_error("999 123 45 67", &config), None);
        assert_eq!(phone_error("+7 (999) 12", &config), Some(config.phone_error.as_str()));
        assert_eq!(phone_error("", &config), Some(config.phone_error.as_str()));
    }

    #[test]
    fn test_message_is_trimmed_and_counted_in_chars() {
        let config = ContactFormConfig::default();
        assert_eq!(message_error("   short    ", &config), Some(config.message_error.as_str()));
        assert_eq!(message_error("Нужна вывеска", &config), None);
        assert_eq!(message_error("Здравствуй", &config), None);
        assert_eq!(message_error("Здравству", &config), Some(config.message_error.as_str()));
    }

    #[test]
    fn test_thresholds_follow_config() {
        let config = ContactFormConfig {
            min_phone_digits: 3,
            min_message_chars: 0,
            ..Default::default()
        };
        assert_eq!(phone_error("123", &config), None);
        assert_eq!(message_error("", &config), None);
    }
}
