//! Dashboard page: the signed-in user's own posts.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It lists `GET /posts/my`, shows
//! published/draft counts, and lets the owner delete a post in place.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::nav_bar::NavBar;
use crate::components::post_card::PostCard;
use crate::net::api::ApiClient;
use crate::net::types::Post;

/// Published and draft counts for a post list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PostCounts {
    pub published: usize,
    pub drafts: usize,
}

#[must_use]
pub fn post_counts(posts: &[Post]) -> PostCounts {
    let published = posts.iter().filter(|p| p.is_published).count();
    PostCounts { published, drafts: posts.len() - published }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = api.session().clone();
    let action_error = RwSignal::new(None::<String>);

    let posts = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.my_posts().await }
        }
    });

    let on_delete = Callback::new(move |id: u64| {
        action_error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.delete_post(id).await {
                    Ok(()) => posts.refetch(),
                    Err(e) => action_error.set(Some(e.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&api, id);
    });

    let greeting = move || {
        session.get().user().map(|u| format!("Welcome back, {}", u.name)).unwrap_or_default()
    };

    view! {
        <NavBar/>
        <main class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <A href="/posts/new">"+ New Post"</A>
            </header>
            <Show when=move || action_error.get().is_some()>
                <p class="dashboard-page__error">{move || action_error.get().unwrap_or_default()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading posts..."</p> }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let counts = post_counts(&list);
                                view! {
                                    <p class="dashboard-page__stats">
                                        {format!(
                                            "{} published, {} drafts",
                                            counts.published,
                                            counts.drafts,
                                        )}
                                    </p>
                                    <div class="dashboard-page__posts">
                                        {list
                                            .into_iter()
                                            .map(|post| view! { <PostCard post=post on_delete=on_delete/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="dashboard-page__error">{e.user_message()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </main>
    }
}
