//! Password reset request.
//!
//! There is no reset endpoint on the backend yet; submission is simulated
//! with a short delay before the confirmation step is shown.

#[cfg(test)]
#[path = "forgot_test.rs"]
mod forgot_test;

use std::sync::LazyLock;
use std::time::Duration;

use leptos::prelude::*;
use regex::Regex;

use crate::components::auth_dialog::{AuthSwitch, AuthView};

pub const EMAIL_REQUIRED: &str = "Email address is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";

/// How long the simulated reset request takes.
pub const SIMULATED_RESET_DELAY: Duration = Duration::from_secs(2);

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ForgotStep {
    #[default]
    EnterEmail,
    EmailSent,
}

/// Trimmed email, or the message to show under the field.
pub fn validate_reset_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    match EMAIL_PATTERN.as_ref() {
        Ok(pattern) if pattern.is_match(email) => Ok(email.to_owned()),
        Ok(_) => Err(EMAIL_INVALID),
        Err(e) => {
            log::error!("email pattern failed to compile: {e}");
            Err(EMAIL_INVALID)
        }
    }
}

#[component]
pub fn ForgotPasswordForm(#[prop(optional)] on_switch: Option<Callback<AuthView>>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let step = RwSignal::new(ForgotStep::EnterEmail);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let address = match validate_reset_email(&email.get_untracked()) {
            Ok(address) => address,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(SIMULATED_RESET_DELAY).await;
            log::debug!("password reset requested for {address}");
            step.set(ForgotStep::EmailSent);
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = address;
            step.set(ForgotStep::EmailSent);
            busy.set(false);
        }
    };

    let on_retry = move |_| {
        step.set(ForgotStep::EnterEmail);
        email.set(String::new());
    };

    move || match step.get() {
        ForgotStep::EnterEmail => view! {
            <form class="auth-form" on:submit=on_submit>
                <h2>"Forgot your password?"</h2>
                <p class="auth-form__hint">"Enter the email linked to your account and we'll send reset instructions."</p>
                <label class="auth-form__label" for="forgot-email">"Email Address"</label>
                <input
                    id="forgot-email"
                    class="auth-form__input"
                    class:auth-form__input--error=move || error.get().is_some()
                    type="email"
                    placeholder="Enter your email address"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        error.set(None);
                    }
                />
                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send Reset Link" }}
                </button>
                <p class="auth-form__footer">
                    <AuthSwitch on_switch=on_switch target=AuthView::Login label="Back to sign in"/>
                </p>
            </form>
        }
        .into_any(),
        ForgotStep::EmailSent => view! {
            <div class="auth-form auth-form--sent">
                <h2>"Check your email"</h2>
                <p class="auth-form__hint">
                    "We've sent password reset instructions to "
                    <strong>{move || email.get()}</strong>
                </p>
                <button class="auth-form__submit" type="button" on:click=on_retry>
                    "Try another email"
                </button>
                <p class="auth-form__footer">
                    <AuthSwitch on_switch=on_switch target=AuthView::Login label="Back to sign in"/>
                </p>
            </div>
        }
        .into_any(),
    }
}

/// `/forgot-password` route.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <ForgotPasswordForm/>
            </div>
        </div>
    }
}
