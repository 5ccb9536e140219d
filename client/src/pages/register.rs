//! New student registration.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_dialog::{AuthSwitch, AuthView};
use crate::net::api::BrowserApiClient;
use crate::net::types::RegisterRequest;
use crate::state::auth::use_auth;

pub const TERMS_NOT_ACCEPTED: &str = "Please agree to the terms and conditions";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MISSING_REQUIRED: &str = "Please fill in all required fields";
pub const REGISTER_FALLBACK: &str = "Registration failed. Please check your information and try again.";

/// Landing page after a successful registration.
pub const POST_REGISTER_PATH: &str = "/profile";

/// Raw form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub full_name: String,
    pub mobile_number: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Check the form in the order the user is told about problems: terms, then
/// password confirmation, then required fields. An empty email is omitted.
pub fn validate_register_input(fields: &RegisterFields, agreed_to_terms: bool) -> Result<RegisterRequest, &'static str> {
    if !agreed_to_terms {
        return Err(TERMS_NOT_ACCEPTED);
    }
    if fields.password != fields.confirm_password {
        return Err(PASSWORD_MISMATCH);
    }
    let full_name = fields.full_name.trim();
    let mobile_number = fields.mobile_number.trim();
    if full_name.is_empty() || mobile_number.is_empty() || fields.password.is_empty() {
        return Err(MISSING_REQUIRED);
    }
    let email = fields.email.trim();
    Ok(RegisterRequest {
        full_name: full_name.to_owned(),
        mobile_number: mobile_number.to_owned(),
        email: (!email.is_empty()).then(|| email.to_owned()),
        password: fields.password.clone(),
        confirm_password: fields.confirm_password.clone(),
    })
}

#[component]
pub fn RegisterForm(
    #[prop(optional)] on_switch: Option<Callback<AuthView>>,
    #[prop(optional)] on_success: Option<Callback<()>>,
) -> impl IntoView {
    let fields = RwSignal::new(RegisterFields::default());
    let agreed = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let auth = use_auth();
    let api = StoredValue::new(expect_context::<BrowserApiClient>());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match fields.with_untracked(|f| validate_register_input(f, agreed.get_untracked())) {
            Ok(request) => request,
            Err(message) => {
                crate::util::notify::alert(message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let response = api.register_user(&request).await;
                match auth.apply_auth_response(response, REGISTER_FALLBACK) {
                    Ok(user) => {
                        log::debug!("registered user {}", user.id);
                        if let Some(done) = on_success {
                            done.run(());
                        }
                        navigate(POST_REGISTER_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(message) => crate::util::notify::alert(&message),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, api, auth, &navigate, on_success);
            busy.set(false);
        }
    };

    let edit = move |apply: fn(&mut RegisterFields, String), value: String| fields.update(|f| apply(f, value));
    let password_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Create your account"</h2>
            <label class="auth-form__label" for="register-name">"Full Name"</label>
            <input
                id="register-name"
                class="auth-form__input"
                type="text"
                placeholder="Enter your full name"
                prop:value=move || fields.with(|f| f.full_name.clone())
                on:input=move |ev| edit(|f, v| f.full_name = v, event_target_value(&ev))
            />
            <label class="auth-form__label" for="register-mobile">"Mobile Number"</label>
            <input
                id="register-mobile"
                class="auth-form__input"
                type="tel"
                placeholder="Enter your mobile number"
                prop:value=move || fields.with(|f| f.mobile_number.clone())
                on:input=move |ev| edit(|f, v| f.mobile_number = v, event_target_value(&ev))
            />
            <label class="auth-form__label" for="register-email">"Email (optional)"</label>
            <input
                id="register-email"
                class="auth-form__input"
                type="email"
                placeholder="Enter your email"
                prop:value=move || fields.with(|f| f.email.clone())
                on:input=move |ev| edit(|f, v| f.email = v, event_target_value(&ev))
            />
            <label class="auth-form__label" for="register-password">"Password"</label>
            <input
                id="register-password"
                class="auth-form__input"
                type=password_type
                placeholder="Create a password"
                prop:value=move || fields.with(|f| f.password.clone())
                on:input=move |ev| edit(|f, v| f.password = v, event_target_value(&ev))
            />
            <label class="auth-form__label" for="register-confirm">"Confirm Password"</label>
            <input
                id="register-confirm"
                class="auth-form__input"
                type=password_type
                placeholder="Confirm your password"
                prop:value=move || fields.with(|f| f.confirm_password.clone())
                on:input=move |ev| edit(|f, v| f.confirm_password = v, event_target_value(&ev))
            />
            <button type="button" class="auth-form__toggle" on:click=move |_| show_password.update(|v| *v = !*v)>
                {move || if show_password.get() { "Hide passwords" } else { "Show passwords" }}
            </button>
            <label class="auth-form__check">
                <input type="checkbox" prop:checked=move || agreed.get() on:change=move |ev| agreed.set(event_target_checked(&ev))/>
                " I agree to the terms and conditions"
            </label>
            <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Creating account..." } else { "Create Account" }}
            </button>
            <p class="auth-form__footer">
                "Already have an account? "
                <AuthSwitch on_switch=on_switch target=AuthView::Login label="Sign in"/>
            </p>
        </form>
    }
}

/// `/register` route.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <RegisterForm/>
            </div>
        </div>
    }
}
