//! Form Controller - submission use case for the contact and newsletter forms
//!
//! One controller per mounted form. The form state lives in the view's store;
//! the controller validates it, drives the submit control, calls the
//! [`FormSubmitPort`] and shows the resulting banner.

use std::sync::Arc;

use iwe_domain::form::{BANNER_FADE_MS, BANNER_VISIBLE_MS};
use iwe_domain::{is_valid_email, BannerId, FieldKind, FormData, FormMessages, FormModel};

use crate::application::store::StateStore;
use crate::ports::outbound::{FormSubmitPort, PlatformPort};

/// Which of the site's forms a controller drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    Contact,
    Newsletter,
}

impl FormVariant {
    /// DOM id of the `<form>` element; field ids are derived from it
    pub fn dom_id(&self) -> &'static str {
        match self {
            Self::Contact => "contact-form",
            Self::Newsletter => "newsletter-form",
        }
    }

    pub fn field_dom_id(&self, field: &str) -> String {
        format!("{}-{}", self.dom_id(), field)
    }

    /// Fresh model with this variant's fields
    pub fn model(&self) -> FormModel {
        match self {
            Self::Contact => FormModel::contact(),
            Self::Newsletter => FormModel::newsletter(),
        }
    }

    fn success_message<'a>(&self, messages: &'a FormMessages) -> &'a str {
        match self {
            Self::Contact => &messages.success,
            Self::Newsletter => &messages.subscribed,
        }
    }
}

/// What a submit request ended in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A send was already in flight, or the form is gone
    Ignored,
    /// Validation failed; nothing was sent
    Rejected(BannerId),
    Sent(BannerId),
    Failed(BannerId),
}

impl SubmitOutcome {
    /// Banner shown for this outcome, if any
    pub fn banner(&self) -> Option<BannerId> {
        match self {
            Self::Ignored => None,
            Self::Rejected(id) | Self::Sent(id) | Self::Failed(id) => Some(*id),
        }
    }
}

/// Validation verdict: data to send, or the banner text and field to focus
type Verdict = Result<FormData, (String, Option<String>)>;

#[derive(Clone)]
pub struct FormController<S> {
    variant: FormVariant,
    endpoint: String,
    messages: FormMessages,
    store: S,
    submitter: Arc<dyn FormSubmitPort>,
    platform: Arc<dyn PlatformPort>,
}

impl<S: StateStore<FormModel>> FormController<S> {
    pub fn new(
        variant: FormVariant,
        endpoint: impl Into<String>,
        messages: FormMessages,
        store: S,
        submitter: Arc<dyn FormSubmitPort>,
        platform: Arc<dyn PlatformPort>,
    ) -> Self {
        let endpoint = endpoint.into();
        tracing::info!(form = variant.dom_id(), endpoint = %endpoint, "Form controller initialized");
        Self {
            variant,
            endpoint,
            messages,
            store,
            submitter,
            platform,
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    /// The user typed into a field
    pub fn handle_input(&self, field: &str, value: String) {
        let result = self.store.update(|form| form.handle_input(field, value));
        if let Some(Err(e)) = result {
            tracing::warn!(form = self.variant.dom_id(), error = %e, "Input for unknown field");
        }
    }

    /// A field lost focus. Only the contact form validates live.
    pub fn handle_blur(&self, field: &str) {
        if self.variant != FormVariant::Contact {
            return;
        }
        let result = self
            .store
            .update(|form| form.validate_field(field, &self.messages));
        if let Some(Err(e)) = result {
            tracing::warn!(form = self.variant.dom_id(), error = %e, "Blur on unknown field");
        }
    }

    /// Validate and send the form.
    ///
    /// The submit control is disabled for the duration of the send and
    /// re-enabled afterwards however the send ends, including when the
    /// returned future is dropped mid-flight.
    pub async fn submit(&self) -> SubmitOutcome {
        match self.store.update(|form| form.begin_submission()) {
            None => return SubmitOutcome::Ignored,
            Some(Err(e)) => {
                tracing::debug!(form = self.variant.dom_id(), reason = %e, "Submit ignored");
                return SubmitOutcome::Ignored;
            }
            Some(Ok(())) => {}
        }

        let verdict = self.store.update(|form| self.validate(form));
        let data = match verdict {
            None => return SubmitOutcome::Ignored,
            Some(Ok(data)) => data,
            Some(Err((text, focus))) => return self.reject(&text, focus),
        };

        let started = self
            .store
            .update(|form| form.start_sending(&self.messages.sending));
        if !matches!(started, Some(Ok(()))) {
            return SubmitOutcome::Ignored;
        }
        let _restore = RestoreOnDrop {
            store: self.store.clone(),
        };

        tracing::debug!(form = self.variant.dom_id(), endpoint = %self.endpoint, "Submitting form");

        match self.submitter.send(&self.endpoint, &data).await {
            Ok(_) => {
                let text = self.variant.success_message(&self.messages);
                self.finish(|form| form.finish_success(text), SubmitOutcome::Sent)
            }
            Err(e) => {
                tracing::error!(
                    form = self.variant.dom_id(),
                    endpoint = %self.endpoint,
                    error = %e,
                    "Form submission error"
                );
                let text = &self.messages.error;
                self.finish(|form| form.finish_failure(text), SubmitOutcome::Failed)
            }
        }
    }

    /// Fade and remove a banner after its display time.
    ///
    /// A banner that has been replaced in the meantime is left alone.
    pub async fn auto_dismiss(&self, id: BannerId) {
        self.platform.sleep_ms(BANNER_VISIBLE_MS).await;
        if self.store.update(|form| form.fade_banner(id)) != Some(true) {
            return;
        }
        self.platform.sleep_ms(BANNER_FADE_MS).await;
        self.store.update(|form| form.dismiss_banner(id));
    }

    /// Submit, then run the banner timer for whatever banner it produced
    pub async fn submit_and_dismiss(&self) -> SubmitOutcome {
        let outcome = self.submit().await;
        if let Some(id) = outcome.banner() {
            self.auto_dismiss(id).await;
        }
        outcome
    }

    fn validate(&self, form: &mut FormModel) -> Verdict {
        match self.variant {
            FormVariant::Contact => {
                if form.validate_required(&self.messages) {
                    Ok(form.data())
                } else {
                    Err((self.messages.validation_error.clone(), None))
                }
            }
            FormVariant::Newsletter => {
                let Some(field) = form.first_of_kind(FieldKind::Email) else {
                    return Err((self.messages.validation_error.clone(), None));
                };
                let name = field.name.clone();
                let email = field.trimmed().to_string();

                if email.is_empty() {
                    Err((self.messages.validation_error.clone(), Some(name)))
                } else if !is_valid_email(&email) {
                    Err((self.messages.email_error.clone(), Some(name)))
                } else {
                    Ok(FormData::new().with(name, email))
                }
            }
        }
    }

    fn reject(&self, text: &str, focus: Option<String>) -> SubmitOutcome {
        let banner = self.store.update(|form| {
            if let Some(name) = &focus {
                form.request_focus(name);
            }
            form.reject_submission(text)
        });

        if let Some(name) = self.store.update(|form| form.take_focus_request()).flatten() {
            self.platform
                .focus_element(&self.variant.field_dom_id(&name));
        }

        match banner {
            Some(Ok(id)) => SubmitOutcome::Rejected(id),
            Some(Err(e)) => {
                tracing::warn!(form = self.variant.dom_id(), error = %e, "Could not reject submission");
                SubmitOutcome::Ignored
            }
            None => SubmitOutcome::Ignored,
        }
    }

    fn finish(
        &self,
        apply: impl FnOnce(&mut FormModel) -> Result<BannerId, iwe_domain::DomainError>,
        outcome: fn(BannerId) -> SubmitOutcome,
    ) -> SubmitOutcome {
        match self.store.update(apply) {
            Some(Ok(id)) => outcome(id),
            Some(Err(e)) => {
                tracing::warn!(form = self.variant.dom_id(), error = %e, "Could not finish submission");
                SubmitOutcome::Ignored
            }
            None => SubmitOutcome::Ignored,
        }
    }
}

/// Re-enables the submit control when the send scope ends
struct RestoreOnDrop<S: StateStore<FormModel>> {
    store: S,
}

impl<S: StateStore<FormModel>> Drop for RestoreOnDrop<S> {
    fn drop(&mut self) {
        self.store.update(|form| form.restore_submit());
    }
}
