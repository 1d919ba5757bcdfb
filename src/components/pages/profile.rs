use crate::components::card::PromptCardList;
use crate::utils::{posts_by_creator, remove_post, Post, Route, Session, Theme};
use dioxus::prelude::*;

/// Own profile (`/profile`) or another creator's (`/profile/{id}?name=...`).
#[component]
pub fn Profile(
    theme: Signal<Theme>,
    route: Route,
    posts: Signal<Vec<Post>>,
    session: Signal<Session>,
    current_path: Signal<String>,
    on_navigate: EventHandler<Route>,
    on_sign_in: EventHandler<()>,
) -> Element {
    let _ = theme.read();
    let mut notice = use_signal(|| None::<String>);
    let viewer = session.read().current_viewer().cloned();

    let (title, description, creator_id) = match &route {
        Route::UserProfile { id, name } => (
            format!("{}'s Profile", name),
            format!(
                "Welcome to {name}'s personalized profile page. \
                 Explore {name}'s prompts and be inspired by the power of their imagination."
            ),
            Some(id.clone()),
        ),
        _ => (
            "My Profile".to_string(),
            "Welcome to your personalized profile page.".to_string(),
            viewer.as_ref().map(|v| v.id.clone()),
        ),
    };

    let handle_edit = move |post: Post| {
        // Editing happens in an external editor; this page only records the request.
        tracing::info!(post_id = %post.id, "Edit requested");
        notice.set(Some(format!("Edit requested for #{}", post.tag)));
    };

    let mut feed = posts;
    let handle_delete = move |post: Post| {
        if remove_post(&mut feed.write(), &post.id) {
            tracing::info!(post_id = %post.id, "Prompt deleted");
            notice.set(Some("Prompt deleted".to_string()));
        } else {
            tracing::warn!(post_id = %post.id, "Delete requested for unknown prompt");
        }
    };

    rsx! {
        section {
            class: "page",

            h1 { class: "page-title", "{title}" }
            p { class: "page-desc", "{description}" }

            if let Some(message) = notice() {
                div {
                    class: "notice",
                    onclick: move |_| notice.set(None),
                    "{message}"
                }
            }

            match creator_id {
                Some(id) => rsx! {
                    PromptCardList {
                        theme,
                        posts: posts_by_creator(&posts.read(), &id),
                        viewer,
                        current_path,
                        is_profile_page: route.is_profile_page(),
                        on_navigate,
                        on_edit: handle_edit,
                        on_delete: handle_delete,
                        on_tag_selected: None,
                    }
                },
                None => rsx! {
                    div {
                        class: "empty",
                        p { "Sign in to see your prompts." }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_sign_in.call(()),
                            "Sign in"
                        }
                    }
                },
            }
        }
    }
}
