//! New-post and edit-post pages around `PostForm`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::nav_bar::NavBar;
use crate::components::post_form::PostForm;
use crate::net::api::ApiClient;
use crate::net::types::PostPayload;

#[component]
pub fn NewPostPage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="editor-page">
            <PostForm/>
        </main>
    }
}

/// Loads `GET /posts/{id}` and opens the form prefilled.
#[component]
pub fn EditPostPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let post_id = move || params.read().get("id").and_then(|raw| raw.parse::<u64>().ok());

    let post = LocalResource::new(move || {
        let api = api.clone();
        let id = post_id();
        async move {
            match id {
                Some(id) => api.get_post(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    view! {
        <NavBar/>
        <main class="editor-page">
            <Suspense fallback=move || view! { <p>"Loading post..."</p> }>
                {move || {
                    post.get()
                        .map(|result| match result {
                            Ok(Some(post)) => {
                                let initial = PostPayload::from(&post);
                                view! { <PostForm initial=initial post_id=post.id/> }.into_any()
                            }
                            Ok(None) => view! { <p class="editor-page__error">"Unknown post."</p> }.into_any(),
                            Err(e) if e.status() == Some(404) => {
                                view! { <p class="editor-page__error">"Post not found."</p> }.into_any()
                            }
                            Err(e) => view! { <p class="editor-page__error">{e.user_message()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </main>
    }
}
