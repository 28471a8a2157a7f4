//! Read-only card for one post in a list.

use leptos::prelude::*;

use crate::net::types::Post;

/// Post title, status badge and content. `author` is shown when known.
#[component]
pub fn PostCard(
    post: Post,
    #[prop(optional)] author: Option<String>,
    #[prop(optional)] on_delete: Option<Callback<u64>>,
) -> impl IntoView {
    let id = post.id;
    let edit_href = format!("/posts/{id}/edit");
    let draft = !post.is_published;
    let status = if draft { "Draft" } else { "Published" };

    view! {
        <article class="post-card">
            <header class="post-card__header">
                <h3 class="post-card__title">{post.title}</h3>
                <span class="post-card__status" class:post-card__status--draft=draft>
                    {status}
                </span>
            </header>
            {author.map(|name| view! { <p class="post-card__author">"by " {name}</p> })}
            <p class="post-card__content">{post.content}</p>
            <footer class="post-card__footer">
                <span class="post-card__date">{post.updated_at}</span>
                {on_delete
                    .map(|on_delete| {
                        view! {
                            <a class="btn btn--ghost" href=edit_href>"Edit"</a>
                            <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                                "Delete"
                            </button>
                        }
                    })}
            </footer>
        </article>
    }
}
