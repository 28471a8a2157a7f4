//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_provider::AuthProvider;
use crate::config::{SITE_DESCRIPTION, SITE_NAME};
use crate::net::api::ApiClient;
use crate::pages::{
    dashboard::DashboardPage,
    home::HomePage,
    login::LoginPage,
    post_editor::{EditPostPage, NewPostPage},
    posts::PostsPage,
    register::RegisterPage,
};
use crate::state::bootstrap::Bootstrapper;
use crate::state::session::SessionStore;

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

/// Root application component.
///
/// Owns the session store, the API client bound to it and the bootstrapper,
/// and provides all three as context before any route renders.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    provide_context(ApiClient::browser(session));
    provide_context(Bootstrapper::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/postdesk.css"/>
        <Title text=SITE_NAME/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <Router>
            <AuthProvider>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("posts") view=PostsPage/>
                    <Route path=(StaticSegment("posts"), StaticSegment("new")) view=NewPostPage/>
                    <Route
                        path=(StaticSegment("posts"), ParamSegment("id"), StaticSegment("edit"))
                        view=EditPostPage
                    />
                </Routes>
            </AuthProvider>
        </Router>
    }
}
