//! Registration page: name, email and password against `POST /register`.

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::config::{LOGIN_PATH, SITE_NAME};
use crate::net::api::ApiClient;
use crate::state::actions::SubmitError;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
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
            let (name_value, email_value, password_value) = (name.get(), email.get(), password.get());
            leptos::task::spawn_local(async move {
                match crate::state::actions::register_account(&api, &name_value, &email_value, &password_value).await
                {
                    Ok(message) => {
                        log::debug!("registered: {message}");
                        let target = format!("{LOGIN_PATH}?{}=1", super::login::REGISTERED_QUERY);
                        navigate(&target, NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &api;
    };

    let field_error = move |field: &'static str| move || error.get().and_then(|e| e.field(field));
    let banner = move || error.get().and_then(|e| e.banner());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{SITE_NAME}</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <p class="auth-form__error">{field_error("name")}</p>
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
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || banner().is_some()>
                    <p class="auth-card__message">{move || banner().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? " <A href=LOGIN_PATH>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
