//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::{NavigateOptions, StaticSegment};

use crate::components::protected_route::RequireAuth;
use crate::config::AppConfig;
use crate::net::api::{ApiClient, BrowserApiClient};
use crate::net::transport::FetchTransport;
use crate::pages::catalog::{BatchesPage, LibraryPage, StorePage, TestSeriesCatalogPage};
use crate::pages::forgot::ForgotPasswordPage;
use crate::pages::home::{BlogsPage, CoursePage, HomePage, StudyMaterialPage, TestSeriesPage};
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::study::StudyPage;
use crate::state::auth::provide_auth;
use crate::state::token_store::TokenStore;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Redirect to the root, replacing the current history entry.
#[component]
fn ToRoot() -> impl IntoView {
    view! { <Redirect path="/" options=NavigateOptions { replace: true, ..NavigateOptions::default() }/> }
}

/// Root application component.
///
/// Provides configuration, the API client and the auth session, then sets
/// up client-side routing. `/profile` and `/study` sit under the auth gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let api: BrowserApiClient = ApiClient::new(&config, FetchTransport, TokenStore::new(BrowserStorage));
    let title = config.app_name.clone();
    provide_context(config);
    provide_context(api);
    provide_auth();

    view! {
        <Stylesheet id="leptos" href="/pkg/biocure.css"/>
        <Title text=title/>

        <Router>
            <Routes fallback=ToRoot>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("home") view=ToRoot/>
                <Route path=StaticSegment("blogs") view=BlogsPage/>
                <Route path=StaticSegment("course") view=CoursePage/>
                <Route path=StaticSegment("test-series") view=TestSeriesPage/>
                <Route path=StaticSegment("study-material") view=StudyMaterialPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("batches") view=BatchesPage/>
                <Route path=StaticSegment("library") view=LibraryPage/>
                <Route path=StaticSegment("store") view=StorePage/>
                <Route path=StaticSegment("test-series-page") view=TestSeriesCatalogPage/>
                <ParentRoute path=StaticSegment("") view=RequireAuth>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("study") view=StudyPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
