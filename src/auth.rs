use dioxus::prelude::*;
use dioxus_router::{use_navigator, Link};

use crate::config::RuntimeConfig;
use crate::connect::DEFAULT_PHONE_PREFIX;
use crate::forms::{require, FormError};
use crate::routes::Route;
use crate::ui::{Button, ButtonVariant, TabList, TabSpec, TextField};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    fn value(self) -> &'static str {
        match self {
            AuthTab::Login => "login",
            AuthTab::Register => "register",
        }
    }

    fn from_value(value: &str) -> Self {
        match value {
            "register" => AuthTab::Register,
            _ => AuthTab::Login,
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            AuthTab::Login => "Kirish",
            AuthTab::Register => "Ro'yxatdan o'tish",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthForm {
    pub username: String,
    pub password: String,
    pub phone: String,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            phone: DEFAULT_PHONE_PREFIX.to_string(),
        }
    }
}

impl AuthForm {
    /// All three fields are required. Nothing is checked against a backend.
    pub fn validate(&self) -> Result<(), FormError> {
        require("Username", &self.username)?;
        require("Password", &self.password)?;
        require("Phone number", &self.phone)?;
        Ok(())
    }
}

#[component]
pub fn AuthPage() -> Element {
    let config = use_context::<RuntimeConfig>();
    let mut tab = use_signal(AuthTab::default);
    let login = use_signal(AuthForm::default);
    let register = use_signal(AuthForm::default);

    let tabs = vec![
        TabSpec { value: AuthTab::Login.value(), label: "Login" },
        TabSpec { value: AuthTab::Register.value(), label: "Register" },
    ];
    let active = tab();

    rsx! {
        document::Title { "Welcome | {config.app_name}" }
        div { class: "screen screen-gradient centered-screen",
            div { class: "corner-link",
                Link { to: Route::Landing {}, class: "btn btn-ghost btn-md light", "💬 Back to Home" }
            }
            div { class: "glass-card narrow",
                div { class: "card-header centered",
                    div { class: "logo-tile", "💬" }
                    h2 { class: "screen-title light", "Welcome" }
                    p { class: "screen-subtitle light", "Sign in or create an account" }
                }
                TabList {
                    tabs,
                    active: active.value().to_string(),
                    onselect: move |value: &'static str| tab.set(AuthTab::from_value(value)),
                }
                {match active {
                    AuthTab::Login => rsx! { CredentialsForm { key: "{AuthTab::Login.value()}", kind: AuthTab::Login, form: login } },
                    AuthTab::Register => rsx! { CredentialsForm { key: "{AuthTab::Register.value()}", kind: AuthTab::Register, form: register } },
                }}
            }
        }
    }
}

#[component]
fn CredentialsForm(kind: AuthTab, mut form: Signal<AuthForm>) -> Element {
    let navigator = use_navigator();
    let mut error = use_signal(|| None::<FormError>);
    let prefix = kind.value();
    let state = form();

    rsx! {
        form {
            class: "form-stack",
            onsubmit: move |event| {
                event.prevent_default();
                match form.peek().validate() {
                    Ok(()) => {
                        tracing::info!("auth: {prefix} submitted");
                        error.set(None);
                        navigator.push(Route::Connect {});
                    }
                    Err(err) => error.set(Some(err)),
                }
            },
            if let Some(err) = error() {
                p { class: "form-error", role: "alert", "{err}" }
            }
            TextField {
                id: format!("{prefix}-username"),
                label: "Username".to_string(),
                value: state.username.clone(),
                placeholder: Some("username".to_string()),
                required: true,
                oninput: move |value| form.write().username = value,
            }
            TextField {
                id: format!("{prefix}-password"),
                label: "Password".to_string(),
                value: state.password.clone(),
                kind: Some("password".to_string()),
                placeholder: Some("••••••••".to_string()),
                required: true,
                oninput: move |value| form.write().password = value,
            }
            TextField {
                id: format!("{prefix}-phone"),
                label: "Phone Number".to_string(),
                value: state.phone.clone(),
                kind: Some("tel".to_string()),
                placeholder: Some("+998901234567".to_string()),
                required: true,
                oninput: move |value| form.write().phone = value,
            }
            Button { variant: ButtonVariant::Light, submit: true, wide: true, "{kind.submit_label()} ➤" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_form_defaults_phone_prefix() {
        let form = AuthForm::default();
        assert_eq!(form.phone, "+998");
        assert_eq!(form.validate(), Err(FormError::Missing("Username")));
    }

    #[test]
    fn blank_password_is_reported() {
        let form = AuthForm {
            username: "alice".to_string(),
            password: "   ".to_string(),
            ..AuthForm::default()
        };
        assert_eq!(form.validate(), Err(FormError::Missing("Password")));
    }

    #[test]
    fn complete_form_passes() {
        let form = AuthForm {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
            ..AuthForm::default()
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn tab_values_round_trip() {
        for tab in [AuthTab::Login, AuthTab::Register] {
            assert_eq!(AuthTab::from_value(tab.value()), tab);
        }
    }
}
