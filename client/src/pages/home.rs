//! Public landing page and the marketing section stubs.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::state::auth::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<crate::config::AppConfig>();
    let greeting = move || auth.user().map(|u| format!("Welcome back, {}!", u.full_name));

    view! {
        <Navbar/>
        <section class="hero">
            <h1>{config.app_name.clone()}</h1>
            <p class="hero__tagline">{config.app_description.clone()}</p>
            <p class="hero__greeting">{greeting}</p>
            <div class="hero__actions">
                <A href="/batches" attr:class="btn btn--primary">"Explore Batches"</A>
                <A href="/study" attr:class="btn">"Start Studying"</A>
            </div>
        </section>
        <Footer/>
    }
}

/// Navbar, a heading, and the footer.
#[component]
fn MarketingPage(title: &'static str) -> impl IntoView {
    view! {
        <Navbar/>
        <div class="marketing-page">
            <h2>{title}</h2>
        </div>
        <Footer/>
    }
}

#[component]
pub fn BlogsPage() -> impl IntoView {
    view! { <MarketingPage title="Welcome to Test Blogs"/> }
}

#[component]
pub fn CoursePage() -> impl IntoView {
    view! { <MarketingPage title="Welcome to Test Courses"/> }
}

#[component]
pub fn TestSeriesPage() -> impl IntoView {
    view! { <MarketingPage title="Welcome to Test Series Page"/> }
}

#[component]
pub fn StudyMaterialPage() -> impl IntoView {
    view! { <MarketingPage title="Welcome to Test Study Material"/> }
}
