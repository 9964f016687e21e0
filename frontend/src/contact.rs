use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestMode;
use yew::Reducible;

use crate::config;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Message => "message",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("email address is not valid")]
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Missing(field) => *field,
            FieldError::InvalidEmail => Field::Email,
        }
    }
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }

    /// Name, email and phone are required; the email must look like
    /// `something@something` with no whitespace.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::Missing(Field::Name));
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError::Missing(Field::Email));
        } else if !looks_like_email(&self.email) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.phone.trim().is_empty() {
            errors.push(FieldError::Missing(Field::Phone));
        }
        errors
    }
}

fn looks_like_email(value: &str) -> bool {
    !value.chars().any(char::is_whitespace)
        && value
            .char_indices()
            .any(|(i, ch)| ch == '@' && i > 0 && i + 1 < value.len())
}

/// Body posted to the form endpoint.
#[derive(Debug, Serialize)]
pub struct Submission<'a> {
    #[serde(flatten)]
    pub form: &'a ContactForm,
    pub timestamp: String,
    pub source: &'static str,
}

impl<'a> Submission<'a> {
    pub fn new(form: &'a ContactForm, at: DateTime<Utc>) -> Self {
        Self {
            form,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            source: config::FORM_SOURCE,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("contact request failed: {0}")]
    Request(#[from] gloo_net::Error),
}

/// Posts the form. The endpoint is opaque (`no-cors`), so the only
/// failure we can observe is the request itself not going out.
pub async fn submit(endpoint: &str, form: &ContactForm) -> Result<(), SubmitError> {
    let payload = Submission::new(form, Utc::now());
    Request::post(endpoint)
        .mode(RequestMode::NoCors)
        .json(&payload)?
        .send()
        .await?;
    Ok(())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusEvent {
    Submit,
    Succeeded,
    Failed,
    /// The reset timer for a finished submission fired.
    Reset,
}

impl SubmitStatus {
    pub fn on(self, event: StatusEvent) -> Self {
        use StatusEvent::*;
        use SubmitStatus::*;
        match (self, event) {
            (Idle | Success | Error, Submit) => Submitting,
            (Submitting, Succeeded) => Success,
            (Submitting, Failed) => Error,
            (Success | Error, Reset) => Idle,
            (state, _) => state,
        }
    }

    /// Finished states that fall back to idle after `STATUS_RESET_MS`.
    pub fn is_terminal(self) -> bool {
        matches!(self, SubmitStatus::Success | SubmitStatus::Error)
    }
}

/// Arms the timer that returns a finished submission to idle. Nothing is
/// scheduled while idle or submitting; dropping the timer cancels the reset.
pub fn arm_reset(
    status: SubmitStatus,
    delay_ms: u32,
    dispatch: impl FnOnce(StatusEvent) + 'static,
) -> Option<Timeout> {
    status
        .is_terminal()
        .then(|| Timeout::new(delay_ms, move || dispatch(StatusEvent::Reset)))
}

impl Reducible for SubmitStatus {
    type Action = StatusEvent;

    fn reduce(self: Rc<Self>, action: StatusEvent) -> Rc<Self> {
        let next = self.on(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Aziz".into(),
            email: "aziz@fleet.us".into(),
            phone: "+1 312 555 0100".into(),
            company: "".into(),
            message: "Need an IFTA quote".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn required_fields_are_reported() {
        let errors = ContactForm::default().validate();
        assert_eq!(
            errors,
            vec![
                FieldError::Missing(Field::Name),
                FieldError::Missing(Field::Email),
                FieldError::Missing(Field::Phone),
            ]
        );
        assert_eq!(errors[1].to_string(), "email is required");
    }

    #[test]
    fn email_shape() {
        for good in ["a@b", "first.last@example.com", "x@y@z"] {
            assert!(looks_like_email(good), "{}", good);
        }
        for bad in ["@example.com", "user@", "user", "us er@example.com", "user@exa mple.com"] {
            assert!(!looks_like_email(bad), "{}", bad);
        }
        let form = ContactForm {
            email: "not-an-email".into(),
            ..filled()
        };
        assert_eq!(form.validate(), vec![FieldError::InvalidEmail]);
        assert_eq!(form.validate()[0].field(), Field::Email);
    }

    #[test]
    fn payload_carries_form_timestamp_and_source() {
        let form = filled();
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        let json = serde_json::to_value(Submission::new(&form, at)).unwrap();

        assert_eq!(json["name"], "Aziz");
        assert_eq!(json["email"], "aziz@fleet.us");
        assert_eq!(json["phone"], "+1 312 555 0100");
        assert_eq!(json["company"], "");
        assert_eq!(json["message"], "Need an IFTA quote");
        assert_eq!(json["timestamp"], "2025-03-01T12:30:00.000Z");
        assert_eq!(json["source"], "Falcon Team Website");
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn successful_submission_flow() {
        let status = SubmitStatus::default();
        assert_eq!(status, SubmitStatus::Idle);
        let status = status.on(StatusEvent::Submit);
        assert_eq!(status, SubmitStatus::Submitting);
        let status = status.on(StatusEvent::Succeeded);
        assert_eq!(status, SubmitStatus::Success);
        assert!(status.is_terminal());
        assert_eq!(status.on(StatusEvent::Reset), SubmitStatus::Idle);
    }

    #[test]
    fn failed_submission_flow() {
        let status = SubmitStatus::Idle
            .on(StatusEvent::Submit)
            .on(StatusEvent::Failed);
        assert_eq!(status, SubmitStatus::Error);
        assert!(status.is_terminal());
        assert_eq!(status.on(StatusEvent::Reset), SubmitStatus::Idle);
    }

    #[test]
    fn stray_events_are_ignored() {
        assert_eq!(SubmitStatus::Submitting.on(StatusEvent::Submit), SubmitStatus::Submitting);
        assert_eq!(SubmitStatus::Submitting.on(StatusEvent::Reset), SubmitStatus::Submitting);
        assert_eq!(SubmitStatus::Idle.on(StatusEvent::Succeeded), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::Idle.on(StatusEvent::Reset), SubmitStatus::Idle);
        assert!(!SubmitStatus::Idle.is_terminal());
        assert!(!SubmitStatus::Submitting.is_terminal());
    }

    #[test]
    fn no_reset_is_armed_before_a_result() {
        for status in [SubmitStatus::Idle, SubmitStatus::Submitting] {
            assert!(arm_reset(status, config::STATUS_RESET_MS, |_| panic!("no reset expected")).is_none());
        }
    }

    #[test]
    fn reducer_applies_events() {
        let status = Rc::new(SubmitStatus::Idle);
        let status = status.reduce(StatusEvent::Submit);
        assert_eq!(*status, SubmitStatus::Submitting);
        let status = status.reduce(StatusEvent::Failed);
        assert_eq!(*status, SubmitStatus::Error);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn armed(status: SubmitStatus) -> (Rc<Cell<SubmitStatus>>, Option<Timeout>) {
        let state = Rc::new(Cell::new(status));
        let target = state.clone();
        let timer = arm_reset(status, 10, move |event| target.set(target.get().on(event)));
        (state, timer)
    }

    #[wasm_bindgen_test]
    async fn finished_submissions_fall_back_to_idle() {
        for status in [SubmitStatus::Success, SubmitStatus::Error] {
            let (state, timer) = armed(status);
            assert!(timer.is_some());
            assert_eq!(state.get(), status);
            TimeoutFuture::new(50).await;
            assert_eq!(state.get(), SubmitStatus::Idle);
        }
    }

    #[wasm_bindgen_test]
    async fn dropped_timer_keeps_the_result() {
        let (state, timer) = armed(SubmitStatus::Success);
        drop(timer);
        TimeoutFuture::new(50).await;
        assert_eq!(state.get(), SubmitStatus::Success);
    }
}
