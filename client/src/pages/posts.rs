//! All posts with their authors (`GET /post-detail`).

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::post_card::PostCard;
use crate::net::api::ApiClient;

#[component]
pub fn PostsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let posts = LocalResource::new(move || {
        let api = api.clone();
        async move { api.list_posts_with_author().await }
    });

    view! {
        <NavBar/>
        <main class="posts-page">
            <h1>"Posts"</h1>
            <Suspense fallback=move || view! { <p>"Loading posts..."</p> }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="posts-page__empty">"No posts yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                list.into_iter()
                                    .map(|item| view! { <PostCard post=item.post author=item.user.name/> })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                            Err(e) => view! { <p class="posts-page__error">{e.user_message()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </main>
    }
}
