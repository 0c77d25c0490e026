use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::config::RuntimeConfig;
use crate::decision::{CoinFlip, Decision};
use crate::forms::{clip, require, require_max_len, FormError};
use crate::timers::{schedule_redirect, use_scoped_timer, PendingRedirect};
use crate::ui::{Button, ButtonVariant, ProgressBar, TextField};

pub const DEFAULT_PHONE_PREFIX: &str = "+998";
pub const CODE_MAX_LEN: usize = 5;
const TOTAL_STEPS: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectStep {
    Credentials,
    Phone,
    Code,
    TwoFactor,
    Complete,
}

impl ConnectStep {
    /// Position in the three-stage progress header.
    pub fn number(self) -> u8 {
        match self {
            ConnectStep::Credentials => 1,
            ConnectStep::Phone => 2,
            ConnectStep::Code | ConnectStep::TwoFactor | ConnectStep::Complete => 3,
        }
    }

    pub fn previous(self) -> Option<ConnectStep> {
        match self {
            ConnectStep::Phone => Some(ConnectStep::Credentials),
            ConnectStep::Code => Some(ConnectStep::Phone),
            ConnectStep::TwoFactor => Some(ConnectStep::Code),
            ConnectStep::Credentials | ConnectStep::Complete => None,
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            ConnectStep::Credentials => "Enter your API credentials to begin",
            ConnectStep::Phone => "Provide your phone number",
            ConnectStep::Code => "Enter the verification code",
            ConnectStep::TwoFactor => "Two-factor authentication required",
            ConnectStep::Complete => "Successfully connected!",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConnectWizard {
    pub step: ConnectStep,
    pub api_id: String,
    pub api_hash: String,
    pub phone: String,
    pub code: String,
    pub two_factor_password: String,
    pub requires_two_factor: bool,
}

impl Default for ConnectWizard {
    fn default() -> Self {
        Self {
            step: ConnectStep::Credentials,
            api_id: String::new(),
            api_hash: String::new(),
            phone: DEFAULT_PHONE_PREFIX.to_string(),
            code: String::new(),
            two_factor_password: String::new(),
            requires_two_factor: false,
        }
    }
}

impl ConnectWizard {
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.step.number()) / f64::from(TOTAL_STEPS) * 100.0
    }

    pub fn submit_credentials(&mut self) -> Result<(), FormError> {
        require("API ID", &self.api_id)?;
        require("API Hash", &self.api_hash)?;
        self.advance(ConnectStep::Credentials, ConnectStep::Phone);
        Ok(())
    }

    pub fn submit_phone(&mut self) -> Result<(), FormError> {
        require("Phone number", &self.phone)?;
        self.advance(ConnectStep::Phone, ConnectStep::Code);
        Ok(())
    }

    /// `two_factor` answers whether the account needs a password after the
    /// code. Returns the redirect to schedule when the flow is finished.
    pub fn submit_code(
        &mut self,
        two_factor: &dyn Decision,
    ) -> Result<Option<PendingRedirect>, FormError> {
        require_max_len("Verification code", &self.code, CODE_MAX_LEN)?;
        if self.step != ConnectStep::Code {
            return Ok(None);
        }
        if two_factor.decide() {
            self.requires_two_factor = true;
            self.advance(ConnectStep::Code, ConnectStep::TwoFactor);
            return Ok(None);
        }
        self.advance(ConnectStep::Code, ConnectStep::Complete);
        Ok(Some(PendingRedirect::to_dashboard()))
    }

    pub fn submit_two_factor(&mut self) -> Result<Option<PendingRedirect>, FormError> {
        require("Two-factor password", &self.two_factor_password)?;
        if self.step != ConnectStep::TwoFactor {
            return Ok(None);
        }
        self.advance(ConnectStep::TwoFactor, ConnectStep::Complete);
        Ok(Some(PendingRedirect::to_dashboard()))
    }

    /// Steps back once; returns false when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    fn advance(&mut self, from: ConnectStep, to: ConnectStep) {
        if self.step == from {
            tracing::info!("connect: {from:?} -> {to:?}");
            self.step = to;
        }
    }
}

#[component]
pub fn ConnectPage() -> Element {
    let config = use_context::<RuntimeConfig>();
    let two_factor = CoinFlip::new(config.two_factor_probability);
    let navigator = use_navigator();
    let mut wizard = use_signal(ConnectWizard::default);
    let mut error = use_signal(|| None::<FormError>);
    let mut redirect_timer = use_scoped_timer("connect-redirect");

    let mut finish = move |result: Result<Option<PendingRedirect>, FormError>| match result {
        Ok(Some(redirect)) => {
            error.set(None);
            schedule_redirect(&mut redirect_timer, navigator, redirect);
        }
        Ok(None) => error.set(None),
        Err(err) => error.set(Some(err)),
    };

    let mut go_back = move || {
        error.set(None);
        wizard.write().back();
    };

    let state = wizard();
    let step_number = state.step.number();
    let complete = state.step == ConnectStep::Complete;

    rsx! {
        document::Title { "Connect Telegram | {config.app_name}" }
        div { class: "screen screen-gradient",
            div { class: "glass-card narrow",
                div { class: "card-header centered",
                    div { class: "logo-tile", "✈" }
                    h1 { class: "screen-title light", "Connect Your Telegram" }
                    p { class: "screen-subtitle light", "{state.step.subtitle()}" }
                }
                div { class: "stepper",
                    div { class: "stepper-labels",
                        StepMarker { number: 1, label: "Credentials", current: step_number, done: step_number > 1 }
                        StepMarker { number: 2, label: "Phone", current: step_number, done: step_number > 2 }
                        StepMarker { number: 3, label: "Verify", current: step_number, done: complete }
                    }
                    ProgressBar { value: state.progress_percent() }
                }
                if let Some(err) = error() {
                    p { class: "form-error", role: "alert", "{err}" }
                }
                {match state.step {
                    ConnectStep::Credentials => rsx! {
                        form {
                            class: "form-stack",
                            onsubmit: move |event| {
                                event.prevent_default();
                                let result = wizard.write().submit_credentials();
                                finish(result.map(|_| None));
                            },
                            TextField {
                                id: "api-id".to_string(),
                                label: "API ID".to_string(),
                                value: state.api_id.clone(),
                                placeholder: Some("Enter your API ID".to_string()),
                                hint: Some("Get it from my.telegram.org".to_string()),
                                required: true,
                                oninput: move |value| wizard.write().api_id = value,
                            }
                            TextField {
                                id: "api-hash".to_string(),
                                label: "API Hash".to_string(),
                                value: state.api_hash.clone(),
                                placeholder: Some("Enter your API Hash".to_string()),
                                hint: Some("Your unique API hash from Telegram".to_string()),
                                required: true,
                                oninput: move |value| wizard.write().api_hash = value,
                            }
                            Button { variant: ButtonVariant::Light, submit: true, wide: true, "Continue ➤" }
                        }
                    },
                    ConnectStep::Phone => rsx! {
                        form {
                            class: "form-stack",
                            onsubmit: move |event| {
                                event.prevent_default();
                                let result = wizard.write().submit_phone();
                                finish(result.map(|_| None));
                            },
                            TextField {
                                id: "phone".to_string(),
                                label: "Phone Number".to_string(),
                                value: state.phone.clone(),
                                kind: Some("tel".to_string()),
                                placeholder: Some("+998901234567".to_string()),
                                hint: Some("Enter your Telegram phone number with country code".to_string()),
                                required: true,
                                oninput: move |value| wizard.write().phone = value,
                            }
                            Button { variant: ButtonVariant::Light, submit: true, wide: true, "Send Code ➤" }
                            Button { variant: ButtonVariant::Ghost, wide: true, onclick: move |_| go_back(), "Back" }
                        }
                    },
                    ConnectStep::Code => rsx! {
                        form {
                            class: "form-stack",
                            onsubmit: move |event| {
                                event.prevent_default();
                                let result = wizard.write().submit_code(&two_factor);
                                finish(result);
                            },
                            TextField {
                                id: "code".to_string(),
                                label: "Verification Code".to_string(),
                                value: state.code.clone(),
                                placeholder: Some("12345".to_string()),
                                hint: Some("Enter the code sent to your Telegram app or SMS".to_string()),
                                required: true,
                                centered: true,
                                max_length: Some(CODE_MAX_LEN),
                                oninput: move |value: String| wizard.write().code = clip(&value, CODE_MAX_LEN),
                            }
                            Button { variant: ButtonVariant::Light, submit: true, wide: true, "Verify Code ✓" }
                            Button { variant: ButtonVariant::Ghost, wide: true, onclick: move |_| go_back(), "Back" }
                        }
                    },
                    ConnectStep::TwoFactor => rsx! {
                        form {
                            class: "form-stack",
                            onsubmit: move |event| {
                                event.prevent_default();
                                let result = wizard.write().submit_two_factor();
                                finish(result);
                            },
                            TextField {
                                id: "twofa".to_string(),
                                label: "Two-Factor Password".to_string(),
                                value: state.two_factor_password.clone(),
                                kind: Some("password".to_string()),
                                placeholder: Some("Enter your 2FA password".to_string()),
                                hint: Some("Your account has two-factor authentication enabled".to_string()),
                                required: true,
                                oninput: move |value| wizard.write().two_factor_password = value,
                            }
                            Button { variant: ButtonVariant::Light, submit: true, wide: true, "Verify Password ✓" }
                            Button { variant: ButtonVariant::Ghost, wide: true, onclick: move |_| go_back(), "Back" }
                        }
                    },
                    ConnectStep::Complete => rsx! {
                        div { class: "complete centered",
                            div { class: "complete-icon", "✓" }
                            h3 { class: "screen-heading light", "Successfully Connected!" }
                            p { class: "screen-subtitle light", "Redirecting to your dashboard..." }
                            div { class: "spinner" }
                        }
                    },
                }}
            }
        }
    }
}

#[component]
fn StepMarker(number: u8, label: &'static str, current: u8, done: bool) -> Element {
    let reached = current >= number;
    rsx! {
        div { class: "step-marker",
            div { class: if reached { "step-dot reached" } else { "step-dot" },
                if done { "✓" } else { "{number}" }
            }
            span { class: "step-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Fixed;
    use pretty_assertions::assert_eq;

    fn filled() -> ConnectWizard {
        ConnectWizard {
            api_id: "12345".to_string(),
            api_hash: "0123456789abcdef".to_string(),
            code: "54321".to_string(),
            two_factor_password: "hunter2".to_string(),
            ..ConnectWizard::default()
        }
    }

    #[test]
    fn starts_on_credentials_with_phone_prefix() {
        let wizard = ConnectWizard::default();
        assert_eq!(wizard.step, ConnectStep::Credentials);
        assert_eq!(wizard.phone, "+998");
        assert!(!wizard.requires_two_factor);
    }

    #[test]
    fn empty_credentials_do_not_advance() {
        let mut wizard = ConnectWizard::default();
        assert_eq!(wizard.submit_credentials(), Err(FormError::Missing("API ID")));
        assert_eq!(wizard.step, ConnectStep::Credentials);

        wizard.api_id = "12345".to_string();
        wizard.api_hash = "  ".to_string();
        assert_eq!(wizard.submit_credentials(), Err(FormError::Missing("API Hash")));
        assert_eq!(wizard.step, ConnectStep::Credentials);
    }

    #[test]
    fn happy_path_without_two_factor_redirects() {
        let mut wizard = filled();
        wizard.submit_credentials().unwrap();
        assert_eq!(wizard.step, ConnectStep::Phone);
        wizard.submit_phone().unwrap();
        assert_eq!(wizard.step, ConnectStep::Code);

        let redirect = wizard.submit_code(&Fixed(false)).unwrap();
        assert_eq!(wizard.step, ConnectStep::Complete);
        assert_eq!(redirect, Some(PendingRedirect::to_dashboard()));
        assert!(!wizard.requires_two_factor);
    }

    #[test]
    fn two_factor_branch_requires_password() {
        let mut wizard = filled();
        wizard.step = ConnectStep::Code;

        assert_eq!(wizard.submit_code(&Fixed(true)).unwrap(), None);
        assert_eq!(wizard.step, ConnectStep::TwoFactor);
        assert!(wizard.requires_two_factor);

        wizard.two_factor_password.clear();
        assert_eq!(
            wizard.submit_two_factor(),
            Err(FormError::Missing("Two-factor password"))
        );
        assert_eq!(wizard.step, ConnectStep::TwoFactor);

        wizard.two_factor_password = "hunter2".to_string();
        assert_eq!(
            wizard.submit_two_factor().unwrap(),
            Some(PendingRedirect::to_dashboard())
        );
        assert_eq!(wizard.step, ConnectStep::Complete);
    }

    #[test]
    fn back_steps_exactly_one() {
        let cases = [
            (ConnectStep::Phone, Some(ConnectStep::Credentials)),
            (ConnectStep::Code, Some(ConnectStep::Phone)),
            (ConnectStep::TwoFactor, Some(ConnectStep::Code)),
            (ConnectStep::Credentials, None),
            (ConnectStep::Complete, None),
        ];
        for (from, expected) in cases {
            let mut wizard = ConnectWizard {
                step: from,
                ..ConnectWizard::default()
            };
            let moved = wizard.back();
            assert_eq!(moved, expected.is_some(), "back from {from:?}");
            assert_eq!(wizard.step, expected.unwrap_or(from), "back from {from:?}");
        }
    }

    #[test]
    fn overlong_code_is_rejected() {
        let mut wizard = filled();
        wizard.step = ConnectStep::Code;
        wizard.code = "123456".to_string();
        assert_eq!(
            wizard.submit_code(&Fixed(false)),
            Err(FormError::TooLong { field: "Verification code", max: 5 })
        );
        assert_eq!(wizard.step, ConnectStep::Code);
    }

    #[test]
    fn progress_tracks_step_number() {
        let mut wizard = ConnectWizard::default();
        assert_eq!(wizard.progress_percent().round(), 33.0);
        wizard.step = ConnectStep::Phone;
        assert_eq!(wizard.progress_percent().round(), 67.0);
        for step in [ConnectStep::Code, ConnectStep::TwoFactor, ConnectStep::Complete] {
            wizard.step = step;
            assert_eq!(wizard.progress_percent(), 100.0);
        }
    }
}
