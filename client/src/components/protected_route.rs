//! Route-level gate for pages that require a session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{Outlet, Redirect};

use crate::state::auth::use_auth;
use crate::util::auth::{GuardDecision, guard_decision};

/// Parent-route view that renders its child route only for a logged-in user.
///
/// While startup hydration runs it shows a neutral placeholder and performs no
/// redirect. Anonymous visitors are redirected to `/` with the history entry
/// replaced, so the protected URL is not reachable via back-navigation.
#[component]
pub fn RequireAuth() -> impl IntoView {
    let auth = use_auth();
    let decision = Memo::new(move |_| guard_decision(&auth.state()));

    move || match decision.get() {
        GuardDecision::Loading => view! { <div class="route-loading">"Loading..."</div> }.into_any(),
        GuardDecision::Allow => view! { <Outlet/> }.into_any(),
        GuardDecision::Redirect(path) => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=path options=options/> }.into_any()
        }
    }
}
