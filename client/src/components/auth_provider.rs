//! Session gate wrapped around every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App`. Starts the one-time session verification, installs
//! the route guard, and shows a spinner instead of route content until the
//! session is known and the current path agrees with it.
//!
//! The gate is a `Show` over the whole route tree, so every flip of
//! `can_render` (each guard redirect, e.g. right after login) unmounts and
//! remounts `Routes`. Page-local signals do not survive a redirect.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::LoadingSpinner;
use crate::net::api::ApiClient;
use crate::state::bootstrap::Bootstrapper;
use crate::util::auth::{can_render, install_route_guard};

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let boot = expect_context::<Bootstrapper>();
    let session = api.session().clone();
    let pathname = use_location().pathname;

    install_route_guard(session.clone(), boot.clone(), pathname, use_navigate());

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        let boot = boot.clone();
        leptos::task::spawn_local(async move {
            boot.run(&api).await;
        });
    }

    let ready = move || can_render(boot.is_initialized(), &session.get(), &pathname.get());

    view! {
        <Show when=ready fallback=|| view! { <LoadingSpinner/> }>
            {children()}
        </Show>
    }
}
