use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::clipboard::copy_with_toast;
use crate::config::RuntimeConfig;
use crate::decision::random_unit;
use crate::timers::{schedule_redirect, use_scoped_timer, PendingRedirect};
use crate::toast::use_toaster;
use crate::ui::{Button, ButtonSize, ButtonVariant};

/// Lifetime of an unlock code, in seconds.
pub const UNLOCK_WINDOW_SECS: u32 = 300;
/// The call fallback appears once the countdown is at or below this.
pub const CALL_OPTION_AT_SECS: u32 = 180;
const OTP_MIN: u32 = 100_000;
const OTP_SPAN: u32 = 900_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnlockStep {
    Request,
    Waiting,
    Success,
    Error,
    Timeout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Not waiting; the tick was ignored.
    Idle,
    Running { remaining: u32 },
    Expired,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnlockFlow {
    pub step: UnlockStep,
    pub otp: String,
    pub countdown: u32,
    pub show_call_option: bool,
}

impl Default for UnlockFlow {
    fn default() -> Self {
        Self {
            step: UnlockStep::Request,
            otp: String::new(),
            countdown: UNLOCK_WINDOW_SECS,
            show_call_option: false,
        }
    }
}

/// Six-digit code from a uniform draw in `[0, 1)`.
pub fn otp_from_unit(unit: f64) -> String {
    let offset = (unit.clamp(0.0, 1.0) * f64::from(OTP_SPAN)).floor() as u32;
    (OTP_MIN + offset.min(OTP_SPAN - 1)).to_string()
}

pub fn generate_otp() -> String {
    otp_from_unit(random_unit())
}

/// `m:ss`.
pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

impl UnlockFlow {
    /// Starts a fresh waiting window with `otp`.
    pub fn request(&mut self, otp: String) {
        tracing::info!("unlock: {:?} -> Waiting", self.step);
        self.otp = otp;
        self.countdown = UNLOCK_WINDOW_SECS;
        self.show_call_option = false;
        self.step = UnlockStep::Waiting;
    }

    pub fn tick(&mut self) -> Tick {
        if self.step != UnlockStep::Waiting {
            return Tick::Idle;
        }
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown <= CALL_OPTION_AT_SECS {
            self.show_call_option = true;
        }
        if self.countdown == 0 {
            tracing::info!("unlock: code expired");
            self.step = UnlockStep::Timeout;
            return Tick::Expired;
        }
        Tick::Running {
            remaining: self.countdown,
        }
    }

    pub fn simulate_unlock(&mut self) -> Option<PendingRedirect> {
        if self.step != UnlockStep::Waiting {
            return None;
        }
        tracing::info!("unlock: Waiting -> Success");
        self.step = UnlockStep::Success;
        Some(PendingRedirect::to_dashboard())
    }

    pub fn simulate_error(&mut self) -> bool {
        if self.step != UnlockStep::Waiting {
            return false;
        }
        tracing::info!("unlock: Waiting -> Error");
        self.step = UnlockStep::Error;
        true
    }

    pub fn retry(&mut self) -> bool {
        if !matches!(self.step, UnlockStep::Error | UnlockStep::Timeout) {
            return false;
        }
        self.step = UnlockStep::Request;
        self.show_call_option = false;
        true
    }

    pub fn sms_body(&self) -> String {
        format!("UNLOCK {}", self.otp)
    }

    /// The SMS body with the middle of the code hidden.
    pub fn masked_sms_body(&self) -> String {
        let chars: Vec<char> = self.otp.chars().collect();
        if chars.len() < 4 {
            return "UNLOCK ••••".to_string();
        }
        let head: String = chars[..2].iter().collect();
        let tail: String = chars[chars.len() - 2..].iter().collect();
        format!("UNLOCK {head}••••{tail}")
    }
}

#[component]
pub fn UnlockPage() -> Element {
    let config = use_context::<RuntimeConfig>();
    let navigator = use_navigator();
    let toaster = use_toaster();
    let mut flow = use_signal(UnlockFlow::default);
    let mut countdown_timer = use_scoped_timer("unlock-countdown");
    let mut redirect_timer = use_scoped_timer("unlock-redirect");

    let mut start_countdown = move || {
        countdown_timer.start_interval(1000, move || {
            let tick = flow.write().tick();
            match tick {
                Tick::Running { remaining } if remaining == CALL_OPTION_AT_SECS => {
                    tracing::debug!("unlock: call option revealed");
                }
                Tick::Expired => tracing::debug!("unlock: countdown finished"),
                _ => {}
            }
        });
    };

    let state = flow();
    let sms_number = config.unlock_sms_number.clone();
    let copy_number = sms_number.clone();

    rsx! {
        document::Title { "Unlock | {config.app_name}" }
        div { class: "screen screen-plain",
            div { class: "panel-card narrow",
                {match state.step {
                    UnlockStep::Request => rsx! {
                        div { class: "centered",
                            div { class: "icon-tile tone-blue", "🔒" }
                            h1 { class: "screen-title", "Account Locked" }
                            p { class: "screen-subtitle", "Your Telegram session needs to be unlocked. Request an OTP code to proceed." }
                            Button {
                                wide: true,
                                size: ButtonSize::Lg,
                                onclick: move |_| {
                                    flow.write().request(generate_otp());
                                    start_countdown();
                                    toaster.success("OTP Generated", Some("Send the SMS to unlock your account"));
                                },
                                "Request Unlock"
                            }
                            p { class: "caption", "You'll receive a unique code to send via SMS" }
                        }
                    },
                    UnlockStep::Waiting => rsx! {
                        div {
                            div { class: "centered",
                                div { class: "icon-tile tone-orange pulse", "⏱" }
                                h1 { class: "screen-title", "Waiting for SMS" }
                                p { class: "screen-subtitle", "Send the following SMS from your phone" }
                                p { class: "countdown", "⏱ {format_countdown(state.countdown)}" }
                            }
                            div { class: "instructions",
                                p { class: "field-label", "Send SMS to:" }
                                div { class: "copy-row",
                                    span { class: "copy-value", "{sms_number}" }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        size: ButtonSize::Sm,
                                        aria_label: Some("Copy phone number".to_string()),
                                        onclick: move |_| copy_with_toast(copy_number.clone(), toaster),
                                        "⧉"
                                    }
                                }
                                p { class: "field-label", "Message text:" }
                                div { class: "copy-row",
                                    code { class: "copy-value mono", "{state.masked_sms_body()}" }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        size: ButtonSize::Sm,
                                        aria_label: Some("Copy message text".to_string()),
                                        onclick: move |_| copy_with_toast(flow.peek().sms_body(), toaster),
                                        "⧉"
                                    }
                                }
                            }
                            div { class: "note note-warning",
                                strong { "Security Note: " }
                                "SMS can be intercepted. Consider enabling TOTP for better security."
                            }
                            if state.show_call_option {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    wide: true,
                                    onclick: move |_| toaster.info("Call feature", Some("Calling your phone...")),
                                    "📞 Call Me Instead"
                                }
                            }
                            div { class: "debug-controls",
                                p { class: "caption centered", "Simulate Events (Demo Only)" }
                                div { class: "button-row",
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        size: ButtonSize::Sm,
                                        onclick: move |_| {
                                            let redirect = flow.write().simulate_unlock();
                                            if let Some(redirect) = redirect {
                                                countdown_timer.cancel();
                                                toaster.success("Account Unlocked!", Some("You can now access Telegram UI"));
                                                schedule_redirect(&mut redirect_timer, navigator, redirect);
                                            }
                                        },
                                        "Simulate Unlock"
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        size: ButtonSize::Sm,
                                        onclick: move |_| {
                                            if flow.write().simulate_error() {
                                                countdown_timer.cancel();
                                                toaster.error("Unlock Failed", Some("Invalid code or timeout"));
                                            }
                                        },
                                        "Simulate Error"
                                    }
                                }
                            }
                        }
                    },
                    UnlockStep::Success => rsx! {
                        div { class: "centered",
                            div { class: "icon-tile tone-green bounce", "✓" }
                            h1 { class: "screen-title", "Account Unlocked!" }
                            p { class: "screen-subtitle", "You may now access Telegram UI. Redirecting..." }
                            div { class: "spinner dark" }
                        }
                    },
                    UnlockStep::Error => rsx! {
                        div { class: "centered",
                            div { class: "icon-tile tone-red", "!" }
                            h1 { class: "screen-title", "Unlock Failed" }
                            p { class: "screen-subtitle", "The unlock code was invalid or expired. Please try again." }
                            Button {
                                wide: true,
                                size: ButtonSize::Lg,
                                onclick: move |_| {
                                    countdown_timer.cancel();
                                    flow.write().retry();
                                },
                                "Try Again"
                            }
                        }
                    },
                    UnlockStep::Timeout => rsx! {
                        div { class: "centered",
                            div { class: "icon-tile tone-gray", "⏱" }
                            h1 { class: "screen-title", "Code Expired" }
                            p { class: "screen-subtitle", "The unlock code has expired after 5 minutes. Request a new code to continue." }
                            Button {
                                wide: true,
                                size: ButtonSize::Lg,
                                onclick: move |_| {
                                    countdown_timer.cancel();
                                    flow.write().retry();
                                },
                                "Request New Code"
                            }
                        }
                    },
                }}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn waiting() -> UnlockFlow {
        let mut flow = UnlockFlow::default();
        flow.request("482913".to_string());
        flow
    }

    #[test]
    fn request_starts_waiting_window() {
        let flow = waiting();
        assert_eq!(flow.step, UnlockStep::Waiting);
        assert_eq!(flow.countdown, 300);
        assert!(!flow.show_call_option);
    }

    #[test]
    fn generated_codes_have_six_digits() {
        for _ in 0..128 {
            let code = generate_otp();
            assert_eq!(code.len(), 6, "{code}");
            assert!(code.chars().all(|c| c.is_ascii_digit()), "{code}");
        }
        assert_eq!(otp_from_unit(0.0), "100000");
        assert_eq!(otp_from_unit(0.999_999_999), "999999");
        assert_eq!(otp_from_unit(1.0), "999999");
    }

    #[test]
    fn countdown_decreases_by_one_until_timeout() {
        let mut flow = waiting();
        let mut previous = flow.countdown;
        for _ in 0..299 {
            assert!(matches!(flow.tick(), Tick::Running { .. }));
            assert_eq!(flow.countdown, previous - 1);
            assert_eq!(flow.step, UnlockStep::Waiting);
            previous = flow.countdown;
        }
        assert_eq!(flow.countdown, 1);
        assert_eq!(flow.tick(), Tick::Expired);
        assert_eq!(flow.countdown, 0);
        assert_eq!(flow.step, UnlockStep::Timeout);
        assert_eq!(flow.tick(), Tick::Idle);
        assert_eq!(flow.countdown, 0);
    }

    #[test]
    fn call_option_appears_at_two_minutes_and_stays() {
        let mut flow = waiting();
        let mut seen = false;
        while flow.step == UnlockStep::Waiting {
            flow.tick();
            if flow.countdown > CALL_OPTION_AT_SECS {
                assert!(!flow.show_call_option, "shown early at {}", flow.countdown);
            } else {
                assert!(flow.show_call_option, "hidden at {}", flow.countdown);
                seen = true;
            }
        }
        assert!(seen);
        assert!(flow.show_call_option);
    }

    #[test]
    fn simulate_unlock_redirects_to_dashboard_after_two_seconds() {
        let mut flow = waiting();
        let redirect = flow.simulate_unlock().unwrap();
        assert_eq!(flow.step, UnlockStep::Success);
        assert_eq!(redirect.after_ms, 2000);
        assert_eq!(redirect.to.to_string(), "/dashboard");
        assert_eq!(flow.tick(), Tick::Idle);
    }

    #[test]
    fn simulate_controls_only_work_while_waiting() {
        let mut flow = UnlockFlow::default();
        assert_eq!(flow.simulate_unlock(), None);
        assert!(!flow.simulate_error());
        assert_eq!(flow.step, UnlockStep::Request);
    }

    #[test]
    fn retry_returns_to_request_and_hides_call_option() {
        let mut flow = waiting();
        for _ in 0..150 {
            flow.tick();
        }
        assert!(flow.show_call_option);
        assert!(flow.simulate_error());
        assert!(flow.retry());
        assert_eq!(flow.step, UnlockStep::Request);
        assert!(!flow.show_call_option);

        let mut flow = waiting();
        while flow.tick() != Tick::Expired {}
        assert!(flow.retry());
        assert_eq!(flow.step, UnlockStep::Request);

        let mut flow = waiting();
        assert!(!flow.retry());
        assert_eq!(flow.step, UnlockStep::Waiting);
    }

    #[test]
    fn sms_body_is_masked_for_display() {
        let flow = waiting();
        assert_eq!(flow.sms_body(), "UNLOCK 482913");
        assert_eq!(flow.masked_sms_body(), "UNLOCK 48••••13");
    }

    #[test]
    fn countdown_label_pads_seconds() {
        assert_eq!(format_countdown(300), "5:00");
        assert_eq!(format_countdown(179), "2:59");
        assert_eq!(format_countdown(9), "0:09");
    }
}
