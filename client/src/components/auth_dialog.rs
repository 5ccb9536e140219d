//! Modal host for the login, registration and password-reset forms.

use leptos::prelude::*;

use crate::pages::forgot::ForgotPasswordForm;
use crate::pages::login::LoginForm;
use crate::pages::register::RegisterForm;

/// Which auth form the dialog shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthView {
    Login,
    Register,
    ForgotPassword,
}

impl AuthView {
    /// Route that renders the same form as a full page.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::ForgotPassword => "/forgot-password",
        }
    }
}

/// Link to another auth form: swaps the dialog view when hosted in one,
/// otherwise a plain link to the form's route.
#[component]
pub fn AuthSwitch(on_switch: Option<Callback<AuthView>>, target: AuthView, label: &'static str) -> impl IntoView {
    view! {
        <a
            class="auth-form__link"
            href={target.path()}
            on:click=move |ev| {
                if let Some(switch) = on_switch {
                    ev.prevent_default();
                    switch.run(target);
                }
            }
        >
            {label}
        </a>
    }
}

/// Dialog bound to `open`; `None` means closed.
#[component]
pub fn AuthDialog(open: RwSignal<Option<AuthView>>) -> impl IntoView {
    let on_switch = Callback::new(move |next: AuthView| open.set(Some(next)));
    let on_close = Callback::new(move |()| open.set(None));
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    move || {
        open.get().map(|current| {
            let form = match current {
                AuthView::Login => view! { <LoginForm on_switch=on_switch on_success=on_close/> }.into_any(),
                AuthView::Register => view! { <RegisterForm on_switch=on_switch on_success=on_close/> }.into_any(),
                AuthView::ForgotPassword => view! { <ForgotPasswordForm on_switch=on_switch/> }.into_any(),
            };
            view! {
                <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                    <div
                        class="dialog dialog--auth"
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=on_keydown
                        tabindex="0"
                    >
                        <button class="dialog__close" type="button" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                        {form}
                    </div>
                </div>
            }
        })
    }
}
