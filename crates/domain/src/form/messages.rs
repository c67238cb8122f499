//! User-facing texts of the forms

use serde::{Deserialize, Serialize};

/// Banner, button and annotation texts.
///
/// Defaults are the site's Russian copy. Every value can be overridden from
/// configuration; missing keys keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormMessages {
    /// Contact form sent
    pub success: String,
    /// Send failed
    pub error: String,
    /// A required field is empty
    pub validation_error: String,
    /// Newsletter address is malformed
    pub email_error: String,
    /// Submit control label while sending
    pub sending: String,
    /// Newsletter subscription done
    pub subscribed: String,
    /// Inline annotation for an empty required field
    pub required_field: String,
    /// Inline annotation for a malformed email field
    pub invalid_email_field: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        Self {
            success: "Спасибо! Ваше сообщение отправлено.".to_string(),
            error: "Произошла ошибка. Попробуйте позже.".to_string(),
            validation_error: "Пожалуйста, заполните все обязательные поля.".to_string(),
            email_error: "Пожалуйста, введите корректный email.".to_string(),
            sending: "Отправка...".to_string(),
            subscribed: "Вы успешно подписались на рассылку!".to_string(),
            required_field: "Это поле обязательно".to_string(),
            invalid_email_field: "Некорректный email".to_string(),
        }
    }
}
