//! Side navigation and page frame for the student area.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::use_auth;

/// Entries above the divider.
pub const PRIMARY_ITEMS: [(&str, &str); 5] = [
    ("Study", "/study"),
    ("Batches", "/batches"),
    ("Test Series", "/test-series-page"),
    ("Library", "/library"),
    ("Store", "/store"),
];

/// Entries below the divider.
pub const SECONDARY_ITEMS: [(&str, &str); 2] = [("Contact Us", "/contact"), ("About Us", "/about")];

// `A` marks the current route with `aria-current="page"`, which the stylesheet highlights.
fn nav_item(label: &'static str, href: &'static str) -> impl IntoView {
    view! { <A href=href attr:class="sidebar__item">{label}</A> }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <A href="/" attr:class="sidebar__brand">"BioCure"</A>
            <nav class="sidebar__nav">
                {PRIMARY_ITEMS.iter().map(|(label, href)| nav_item(*label, *href)).collect_view()}
                <hr class="sidebar__divider"/>
                {SECONDARY_ITEMS.iter().map(|(label, href)| nav_item(*label, *href)).collect_view()}
            </nav>
        </aside>
    }
}

/// Sidebar plus a top bar with the signed-in user and a logout action.
#[component]
pub fn StudentShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let user_name = move || auth.user().map(|u| u.full_name);

    view! {
        <div class="student-shell">
            <Sidebar/>
            <div class="student-shell__main">
                <header class="menubar">
                    <Show
                        when=move || user_name().is_some()
                        fallback=|| view! { <A href="/login" attr:class="btn btn--primary">"Sign In"</A> }
                    >
                        <A href="/profile" attr:class="menubar__user">{move || user_name().unwrap_or_default()}</A>
                        <button class="btn" type="button" on:click=move |_| auth.logout()>
                            "Logout"
                        </button>
                    </Show>
                </header>
                <main class="student-shell__content">{children()}</main>
            </div>
        </div>
    }
}
