//! Top navigation for the public pages.

use leptos::prelude::*;
use leptos_router::components::A;

use super::auth_dialog::{AuthDialog, AuthView};
use crate::state::auth::use_auth;

/// Public site sections, in display order.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Blogs", "/blogs"),
    ("Courses", "/course"),
    ("Test Series", "/test-series"),
    ("Study Material", "/study-material"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let dialog = RwSignal::new(None::<AuthView>);
    let menu_open = RwSignal::new(false);

    let user_name = move || auth.user().map(|u| u.full_name).unwrap_or_default();

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"BioCure"</A>
            <button
                class="navbar__menu-toggle"
                type="button"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <ul class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <li on:click=move |_| menu_open.set(false)>
                                <A href={*href}>{*label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="navbar__session">
                <Show
                    when=move || auth.is_authenticated()
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn--primary"
                                type="button"
                                disabled=move || auth.is_loading()
                                on:click=move |_| dialog.set(Some(AuthView::Login))
                            >
                                "Login / Register"
                            </button>
                        }
                    }
                >
                    <A href="/profile" attr:class="navbar__user">{user_name}</A>
                    <button class="btn" type="button" on:click=move |_| auth.logout()>
                        "Logout"
                    </button>
                </Show>
            </div>
            <AuthDialog open=dialog/>
        </nav>
    }
}
