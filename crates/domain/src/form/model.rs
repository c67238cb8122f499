//! Form aggregate: fields, annotations, submit control and banner

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::banner::{Banner, BannerId, BannerKind};
use super::data::FormData;
use super::field::{Field, FieldIssue};
use super::messages::FormMessages;
use super::submission::SubmissionState;
use crate::DomainError;

/// Label restored when the original one was never captured
pub const DEFAULT_SUBMIT_LABEL: &str = "Отправить";

/// The form's submit button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
    original_label: Option<String>,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            original_label: None,
        }
    }

    /// Switch to the "sending" look, remembering the current label
    pub fn set_loading(&mut self, sending_label: &str) {
        self.original_label = Some(std::mem::replace(
            &mut self.label,
            sending_label.to_string(),
        ));
        self.disabled = true;
    }

    /// Back to enabled with the remembered label
    pub fn restore(&mut self) {
        self.label = self
            .original_label
            .take()
            .unwrap_or_else(|| DEFAULT_SUBMIT_LABEL.to_string());
        self.disabled = false;
    }

    pub fn style(&self) -> &'static str {
        if self.disabled {
            "opacity: 0.7;"
        } else {
            "opacity: 1;"
        }
    }
}

/// A form and everything the view shows about it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormModel {
    fields: Vec<Field>,
    errors: BTreeMap<String, String>,
    submit: SubmitControl,
    banner: Option<Banner>,
    next_banner_id: u64,
    focus_request: Option<String>,
    state: SubmissionState,
}

impl FormModel {
    pub fn new(fields: Vec<Field>, submit_label: impl Into<String>) -> Self {
        Self {
            fields,
            errors: BTreeMap::new(),
            submit: SubmitControl::new(submit_label),
            banner: None,
            next_banner_id: 0,
            focus_request: None,
            state: SubmissionState::Idle,
        }
    }

    /// Contact form layout used on the site
    pub fn contact() -> Self {
        Self::new(
            vec![
                Field::text("name", "Имя").required(),
                Field::email("email", "Email").required(),
                Field::text("subject", "Тема"),
                Field::textarea("message", "Сообщение").required(),
            ],
            DEFAULT_SUBMIT_LABEL,
        )
    }

    /// Newsletter form: a single email field
    pub fn newsletter() -> Self {
        Self::new(
            vec![Field::email("email", "Ваш email").required()],
            "Подписаться",
        )
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// First field of the given kind, used by single-purpose forms
    pub fn first_of_kind(&self, kind: super::FieldKind) -> Option<&Field> {
        self.fields.iter().find(|f| f.kind == kind)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn submit(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Consume a pending focus request
    pub fn take_focus_request(&mut self) -> Option<String> {
        self.focus_request.take()
    }

    // -------------------------------------------------------------------------
    // Field values and annotations
    // -------------------------------------------------------------------------

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), DomainError> {
        let field = self.field_mut(name)?;
        field.value = value.into();
        Ok(())
    }

    /// User typed into a field: store the value and drop its annotation
    pub fn handle_input(&mut self, name: &str, value: impl Into<String>) -> Result<(), DomainError> {
        self.set_value(name, value)?;
        self.clear_error(name);
        Ok(())
    }

    /// Validate one field, updating its annotation
    pub fn validate_field(
        &mut self,
        name: &str,
        messages: &FormMessages,
    ) -> Result<bool, DomainError> {
        let issue = self
            .field(name)
            .ok_or_else(|| DomainError::unknown_field(name))?
            .check();

        match issue {
            Ok(()) => {
                self.clear_error(name);
                Ok(true)
            }
            Err(FieldIssue::Required) => {
                self.set_error(name, &messages.required_field);
                Ok(false)
            }
            Err(FieldIssue::InvalidEmail) => {
                self.set_error(name, &messages.invalid_email_field);
                Ok(false)
            }
        }
    }

    /// Validate every required field; all of them get annotated, not just the first
    pub fn validate_required(&mut self, messages: &FormMessages) -> bool {
        let required: Vec<String> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.clone())
            .collect();

        required.iter().fold(true, |valid, name| {
            // Names come from our own field list
            let ok = self.validate_field(name, messages).unwrap_or(false);
            valid && ok
        })
    }

    pub fn set_error(&mut self, name: &str, message: &str) {
        self.errors.insert(name.to_string(), message.to_string());
    }

    pub fn clear_error(&mut self, name: &str) {
        self.errors.remove(name);
    }

    pub fn request_focus(&mut self, name: &str) {
        self.focus_request = Some(name.to_string());
    }

    /// Clear all values and annotations
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.errors.clear();
        self.focus_request = None;
    }

    /// Current values keyed by field name
    pub fn data(&self) -> FormData {
        self.fields.iter().fold(FormData::new(), |data, f| {
            data.with(f.name.clone(), f.value.clone())
        })
    }

    // -------------------------------------------------------------------------
    // Banner
    // -------------------------------------------------------------------------

    /// Show a banner, replacing the current one
    pub fn show_banner(&mut self, kind: BannerKind, text: impl Into<String>) -> BannerId {
        self.next_banner_id += 1;
        let id = BannerId(self.next_banner_id);
        self.banner = Some(Banner {
            id,
            kind,
            text: text.into(),
            fading: false,
        });
        id
    }

    /// Start fading the banner if it is still the one with `id`
    pub fn fade_banner(&mut self, id: BannerId) -> bool {
        match self.banner.as_mut() {
            Some(banner) if banner.id == id => {
                banner.fading = true;
                true
            }
            _ => false,
        }
    }

    /// Remove the banner if it is still the one with `id`
    pub fn dismiss_banner(&mut self, id: BannerId) -> bool {
        if self.banner.as_ref().is_some_and(|b| b.id == id) {
            self.banner = None;
            true
        } else {
            false
        }
    }

    // -------------------------------------------------------------------------
    // Submission lifecycle
    // -------------------------------------------------------------------------

    /// Enter validation. Refused while the submit control is disabled.
    pub fn begin_submission(&mut self) -> Result<(), DomainError> {
        if self.submit.disabled {
            return Err(DomainError::invalid_transition(
                self.state.name(),
                SubmissionState::Validating.name(),
            ));
        }
        self.state = self.state.begin_validation()?;
        Ok(())
    }

    /// Validation failed: show the banner and settle back to idle
    pub fn reject_submission(&mut self, text: &str) -> Result<BannerId, DomainError> {
        self.state = self.state.reject()?;
        Ok(self.show_banner(BannerKind::Error, text))
    }

    /// Validation passed: disable the submit control for the send
    pub fn start_sending(&mut self, sending_label: &str) -> Result<(), DomainError> {
        self.state = self.state.begin_sending()?;
        self.submit.set_loading(sending_label);
        Ok(())
    }

    /// Send resolved: success banner and empty form
    pub fn finish_success(&mut self, text: &str) -> Result<BannerId, DomainError> {
        self.state = self.state.succeed()?;
        self.reset();
        Ok(self.show_banner(BannerKind::Success, text))
    }

    /// Send rejected: error banner, values kept for a manual retry
    pub fn finish_failure(&mut self, text: &str) -> Result<BannerId, DomainError> {
        self.state = self.state.fail()?;
        Ok(self.show_banner(BannerKind::Error, text))
    }

    /// Re-enable the submit control.
    ///
    /// A send that never reported back counts as failed.
    pub fn restore_submit(&mut self) {
        if self.state.is_sending() {
            self.state = SubmissionState::Failed;
        }
        self.submit.restore();
    }

    fn field_mut(&mut self, name: &str) -> Result<&mut Field, DomainError> {
        self.fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| DomainError::unknown_field(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_contact() -> FormModel {
        let mut form = FormModel::contact();
        form.set_value("name", "Oleg").expect("field");
        form.set_value("email", "a@b.com").expect("field");
        form.set_value("message", "Hello").expect("field");
        form
    }

    #[test]
    fn test_validate_required_annotates_every_failing_field() {
        let mut form = FormModel::contact();
        form.set_value("email", "a@b").expect("field");
        let messages = FormMessages::default();

        assert!(!form.validate_required(&messages));
        assert_eq!(form.error_for("name"), Some(messages.required_field.as_str()));
        assert_eq!(
            form.error_for("email"),
            Some(messages.invalid_email_field.as_str())
        );
        assert_eq!(form.error_for("message"), Some(messages.required_field.as_str()));
        assert_eq!(form.error_for("subject"), None);
    }

    #[test]
    fn test_valid_field_clears_annotation() {
        let mut form = FormModel::contact();
        let messages = FormMessages::default();
        assert_eq!(form.validate_field("name", &messages), Ok(false));

        form.set_value("name", "Oleg").expect("field");
        assert_eq!(form.validate_field("name", &messages), Ok(true));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_input_clears_annotation() {
        let mut form = FormModel::contact();
        form.set_error("name", "required");
        form.handle_input("name", "O").expect("field");
        assert_eq!(form.error_for("name"), None);
        assert_eq!(form.field("name").map(|f| f.value.as_str()), Some("O"));
    }

    #[test]
    fn test_unknown_field() {
        let mut form = FormModel::newsletter();
        assert_eq!(
            form.set_value("phone", "123"),
            Err(DomainError::unknown_field("phone"))
        );
        assert!(form
            .validate_field("phone", &FormMessages::default())
            .is_err());
    }

    #[test]
    fn test_show_banner_replaces_previous() {
        let mut form = FormModel::newsletter();
        let first = form.show_banner(BannerKind::Error, "first");
        let second = form.show_banner(BannerKind::Success, "second");

        assert_ne!(first, second);
        let banner = form.banner().expect("banner");
        assert_eq!(banner.id, second);
        assert_eq!(banner.text, "second");
    }

    #[test]
    fn test_stale_dismissal_keeps_newer_banner() {
        let mut form = FormModel::newsletter();
        let old = form.show_banner(BannerKind::Error, "old");
        let new = form.show_banner(BannerKind::Error, "new");

        assert!(!form.fade_banner(old));
        assert!(!form.dismiss_banner(old));
        assert_eq!(form.banner().map(|b| b.id), Some(new));

        assert!(form.fade_banner(new));
        assert!(form.banner().is_some_and(|b| b.fading));
        assert!(form.dismiss_banner(new));
        assert!(form.banner().is_none());
    }

    #[test]
    fn test_successful_submission_resets_form() {
        let mut form = filled_contact();
        form.begin_submission().expect("idle");
        form.start_sending("Sending").expect("validating");

        assert!(form.submit().disabled);
        assert_eq!(form.submit().label, "Sending");
        assert!(form.begin_submission().is_err());

        form.finish_success("Done").expect("sending");
        form.restore_submit();

        assert!(form.fields().iter().all(|f| f.value.is_empty()));
        assert_eq!(form.state(), SubmissionState::Succeeded);
        assert_eq!(form.submit(), &SubmitControl::new(DEFAULT_SUBMIT_LABEL));
        assert_eq!(form.banner().map(|b| b.kind), Some(BannerKind::Success));
    }

    #[test]
    fn test_failed_submission_keeps_values() {
        let mut form = filled_contact();
        form.begin_submission().expect("idle");
        form.start_sending("Sending").expect("validating");
        form.finish_failure("Error").expect("sending");
        form.restore_submit();

        assert_eq!(form.field("name").map(|f| f.value.as_str()), Some("Oleg"));
        assert_eq!(form.state(), SubmissionState::Failed);
        assert!(!form.submit().disabled);
    }

    #[test]
    fn test_restore_without_capture_uses_default_label() {
        let mut control = SubmitControl::new("Подписаться");
        control.restore();
        assert_eq!(control.label, DEFAULT_SUBMIT_LABEL);
    }

    #[test]
    fn test_abandoned_send_counts_as_failed() {
        let mut form = filled_contact();
        form.begin_submission().expect("idle");
        form.start_sending("Sending").expect("validating");
        form.restore_submit();

        assert_eq!(form.state(), SubmissionState::Failed);
        assert!(!form.submit().disabled);
    }

    #[test]
    fn test_data_keeps_field_order() {
        let form = filled_contact();
        let data = form.data();
        let names: Vec<&str> = data.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["name", "email", "subject", "message"]);
    }
}
