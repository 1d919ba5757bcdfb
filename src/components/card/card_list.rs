use super::PromptCard;
use crate::utils::{Post, Route, Theme, Viewer};
use dioxus::prelude::*;

#[component]
pub fn PromptCardList(
    theme: Signal<Theme>,
    posts: Vec<Post>,
    #[props(!optional)] viewer: Option<Viewer>,
    current_path: Signal<String>,
    is_profile_page: bool,
    on_navigate: EventHandler<Route>,
    on_edit: EventHandler<Post>,
    on_delete: EventHandler<Post>,
    #[props(!optional)] on_tag_selected: Option<EventHandler<String>>,
) -> Element {
    if posts.is_empty() {
        return rsx! {
            p { class: "empty", "No prompts yet" }
        };
    }

    rsx! {
        div {
            class: "prompt_layout",

            for post in posts.iter() {
                {
                    let edit_post = post.clone();
                    let delete_post = post.clone();

                    rsx! {
                        PromptCard {
                            key: "{post.id}",
                            theme,
                            post: post.clone(),
                            viewer: viewer.clone(),
                            current_path,
                            is_profile_page,
                            on_navigate,
                            on_edit: move |_| on_edit.call(edit_post.clone()),
                            on_delete: move |_| on_delete.call(delete_post.clone()),
                            on_tag_selected,
                        }
                    }
                }
            }
        }
    }
}
