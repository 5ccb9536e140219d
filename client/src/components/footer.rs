use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<crate::config::AppConfig>();

    view! {
        <footer class="footer">
            <p class="footer__name">{config.app_name.clone()}</p>
            <p class="footer__tagline">{config.app_description.clone()}</p>
            <nav class="footer__links">
                <A href="/batches">"Batches"</A>
                <A href="/library">"Library"</A>
                <A href="/store">"Store"</A>
            </nav>
            <p class="footer__version">"v" {config.app_version.clone()}</p>
        </footer>
    }
}
