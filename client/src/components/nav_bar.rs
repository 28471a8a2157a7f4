//! Top navigation for authenticated views.

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::config::{DASHBOARD_NAV, SITE_NAME};
use crate::net::api::ApiClient;

/// Site title, section links, the signed-in user's name and a logout button.
#[component]
pub fn NavBar() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = api.session().clone();
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let user_name = move || session.get().user().map(|u| u.name.clone()).unwrap_or_default();

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::state::actions::sign_out(&api).await;
                busy.set(false);
                navigate(crate::config::LOGIN_PATH, NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &api;
    };

    view! {
        <header class="nav-bar">
            <span class="nav-bar__title">{SITE_NAME}</span>
            <nav class="nav-bar__links">
                {DASHBOARD_NAV
                    .iter()
                    .map(|item| view! { <A href=item.href>{item.title}</A> })
                    .collect::<Vec<_>>()}
            </nav>
            <span class="nav-bar__user">{user_name}</span>
            <button class="btn btn--ghost" on:click=on_logout disabled=move || busy.get()>
                "Log out"
            </button>
        </header>
    }
}
