//! Mobile number + password sign-in.
//!
//! The form is shared between the `/login` route and the navbar dialog.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::auth_dialog::{AuthSwitch, AuthView};
use crate::net::api::BrowserApiClient;
use crate::net::types::LoginRequest;
use crate::state::auth::use_auth;

pub const MISSING_CREDENTIALS: &str = "Please enter both mobile number and password";
pub const LOGIN_SUCCESS: &str = "Login successful! Welcome back.";
pub const LOGIN_FALLBACK: &str = "Login failed. Please check your credentials and try again.";

/// Trim the mobile number and require both fields. The password is sent
/// exactly as typed.
pub fn validate_login_input(mobile_number: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let mobile_number = mobile_number.trim();
    if mobile_number.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(LoginRequest { mobile_number: mobile_number.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginForm(
    /// Switches the hosting dialog to another auth view; links are used when absent.
    #[prop(optional)]
    on_switch: Option<Callback<AuthView>>,
    /// Runs after a successful sign-in.
    #[prop(optional)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let mobile = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let auth = use_auth();
    let api = StoredValue::new(expect_context::<BrowserApiClient>());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&mobile.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                crate::util::notify::alert(message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let response = api.login_user(&credentials).await;
                match auth.apply_auth_response(response, LOGIN_FALLBACK) {
                    Ok(user) => {
                        log::debug!("signed in user {}", user.id);
                        crate::util::notify::alert(LOGIN_SUCCESS);
                        mobile.set(String::new());
                        password.set(String::new());
                        if let Some(done) = on_success {
                            done.run(());
                        }
                    }
                    Err(message) => crate::util::notify::alert(&message),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, api, auth, on_success);
            busy.set(false);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Welcome back"</h2>
            <label class="auth-form__label" for="login-mobile">"Mobile Number"</label>
            <input
                id="login-mobile"
                class="auth-form__input"
                type="tel"
                placeholder="Enter your mobile number"
                prop:value=move || mobile.get()
                on:input=move |ev| mobile.set(event_target_value(&ev))
            />
            <label class="auth-form__label" for="login-password">"Password"</label>
            <div class="auth-form__password">
                <input
                    id="login-password"
                    class="auth-form__input"
                    type=move || if show_password.get() { "text" } else { "password" }
                    placeholder="Enter your password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="button" class="auth-form__toggle" on:click=move |_| show_password.update(|v| *v = !*v)>
                    {move || if show_password.get() { "Hide" } else { "Show" }}
                </button>
            </div>
            <AuthSwitch on_switch=on_switch target=AuthView::ForgotPassword label="Forgot password?"/>
            <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Signing in..." } else { "Sign In" }}
            </button>
            <p class="auth-form__footer">
                "Don't have an account? "
                <AuthSwitch on_switch=on_switch target=AuthView::Register label="Sign up"/>
            </p>
        </form>
    }
}

/// `/login` route.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <LoginForm/>
            </div>
        </div>
    }
}
