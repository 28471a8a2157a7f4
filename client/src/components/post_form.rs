//! Create/edit form for a single post.
//!
//! DESIGN
//! ======
//! Validation runs in `state::actions::save_post` before any request, so the
//! form only tracks input signals and renders whatever error comes back.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::net::api::ApiClient;
use crate::net::types::PostPayload;
use crate::state::actions::SubmitError;

/// Post editor. Creates a post when `post_id` is `None`, otherwise updates it.
/// Navigates to the posts list after a successful save.
#[component]
pub fn PostForm(#[prop(optional)] initial: Option<PostPayload>, #[prop(optional)] post_id: Option<u64>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let initial = initial.unwrap_or_default();
    let title = RwSignal::new(initial.title);
    let content = RwSignal::new(initial.content);
    let is_published = RwSignal::new(initial.is_published);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<SubmitError>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        saving.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            let (title_value, content_value) = (title.get(), content.get());
            let published = is_published.get();
            leptos::task::spawn_local(async move {
                match crate::state::actions::save_post(&api, post_id, &title_value, &content_value, published).await {
                    Ok(_) => navigate(crate::config::POSTS_PATH, NavigateOptions::default()),
                    Err(e) => error.set(Some(e)),
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &api;
    };

    let field_error = move |name: &'static str| move || error.get().and_then(|e| e.field(name));
    let banner = move || error.get().and_then(|e| e.banner());
    let heading = if post_id.is_some() { "Edit Post" } else { "Create Post" };
    let submit_label = move || match (saving.get(), post_id.is_some()) {
        (true, _) => "Saving...",
        (false, true) => "Update Post",
        (false, false) => "Create Post",
    };

    view! {
        <section class="card">
            <h2 class="card__title">{heading}</h2>
            <form class="post-form" on:submit=on_submit>
                <label class="post-form__label" for="post-title">"Title"</label>
                <input
                    id="post-title"
                    class="post-form__input"
                    type="text"
                    placeholder="Enter post title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <p class="post-form__error">{field_error("title")}</p>

                <label class="post-form__label" for="post-content">"Content"</label>
                <textarea
                    id="post-content"
                    class="post-form__textarea"
                    placeholder="Enter post content"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <p class="post-form__error">{field_error("content")}</p>

                <fieldset class="post-form__status">
                    <legend>"Is Published"</legend>
                    <label>
                        <input
                            type="radio"
                            name="is_published"
                            prop:checked=move || !is_published.get()
                            on:change=move |_| is_published.set(false)
                        />
                        "Draft"
                    </label>
                    <label>
                        <input
                            type="radio"
                            name="is_published"
                            prop:checked=move || is_published.get()
                            on:change=move |_| is_published.set(true)
                        />
                        "Publish"
                    </label>
                </fieldset>

                <Show when=move || banner().is_some()>
                    <p class="post-form__banner">{move || banner().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {submit_label}
                </button>
            </form>
        </section>
    }
}
