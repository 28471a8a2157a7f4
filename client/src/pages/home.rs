//! Root route. Sends a signed-in user to the dashboard; anonymous visitors
//! never render it because the route guard sends them to login first.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingSpinner;
use crate::config::LANDING_PATH;
use crate::net::api::ApiClient;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<ApiClient>().session().clone();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate(LANDING_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! { <LoadingSpinner/> }
}
