use crate::components::card::PromptCardList;
use crate::utils::{filter_posts, Post, Route, Session, Theme};
use dioxus::prelude::*;

#[component]
pub fn Feed(
    theme: Signal<Theme>,
    posts: Signal<Vec<Post>>,
    session: Signal<Session>,
    current_path: Signal<String>,
    on_navigate: EventHandler<Route>,
) -> Element {
    let _ = theme.read();
    let mut search_text = use_signal(String::new);

    let visible = filter_posts(&posts.read(), &search_text.read());
    let viewer = session.read().current_viewer().cloned();

    // Owner controls never show on the feed, so edit/delete only need to be logged.
    let ignore_edit = move |post: Post| {
        tracing::debug!(post_id = %post.id, "Edit ignored outside profile");
    };
    let ignore_delete = move |post: Post| {
        tracing::debug!(post_id = %post.id, "Delete ignored outside profile");
    };

    rsx! {
        section {
            class: "page",

            h1 { class: "page-title", "Discover & Share Prompts" }
            p {
                class: "page-desc",
                "Browse prompts from the community. Copy one you like or click a tag to filter."
            }

            input {
                class: "search_input",
                r#type: "text",
                placeholder: "Search for a tag or a username",
                value: "{search_text}",
                oninput: move |evt| search_text.set(evt.value()),
            }

            PromptCardList {
                theme,
                posts: visible,
                viewer,
                current_path,
                is_profile_page: false,
                on_navigate,
                on_edit: ignore_edit,
                on_delete: ignore_delete,
                on_tag_selected: Some(EventHandler::new(move |tag: String| search_text.set(tag))),
            }
        }
    }
}
