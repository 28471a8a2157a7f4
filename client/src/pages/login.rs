//! Login page: email + password against `POST /login`.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::config::{REGISTER_PATH, SITE_NAME};
use crate::net::api::ApiClient;
use crate::state::actions::SubmitError;

/// Query flag set by the register page after a successful sign-up.
pub const REGISTERED_QUERY: &str = "registered";

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<SubmitError>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            let (email_value, password_value) = (email.get(), password.get());
            leptos::task::spawn_local(async move {
                match crate::state::actions::sign_in(&api, &email_value, &password_value).await {
                    Ok(_) => navigate(crate::config::LANDING_PATH, NavigateOptions::default()),
                    Err(e) => error.set(Some(e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &api;
    };

    let registered = move || query.read().get(REGISTERED_QUERY).is_some();
    let field_error = move |name: &'static str| move || error.get().and_then(|e| e.field(name));
    let banner = move || error.get().and_then(|e| e.banner());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{SITE_NAME}</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <Show when=registered>
                    <p class="auth-card__notice">"Account created. You can sign in now."</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <p class="auth-form__error">{field_error("email")}</p>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <p class="auth-form__error">{field_error("password")}</p>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || banner().is_some()>
                    <p class="auth-card__message">{move || banner().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? " <A href=REGISTER_PATH>"Register"</A>
                </p>
            </div>
        </div>
    }
}
