use crate::components::card::Avatar;
use crate::utils::{Post, Route, Session, Theme};
use dioxus::prelude::*;

#[component]
pub fn Header(
    theme: Signal<Theme>,
    session: Signal<Session>,
    posts: Signal<Vec<Post>>,
    on_toggle_theme: EventHandler<()>,
    on_sign_in: EventHandler<()>,
    on_sign_out: EventHandler<()>,
    on_navigate: EventHandler<Route>,
) -> Element {
    let theme_val = *theme.read();
    let viewer_id = session.read().viewer_id().map(str::to_string);

    // Show the viewer's avatar when one of their posts is in the feed.
    let viewer_avatar = viewer_id.as_deref().and_then(|id| {
        posts
            .read()
            .iter()
            .find(|post| post.creator.id == id)
            .map(|post| post.creator.image.clone())
    });

    rsx! {
        header {
            class: "header",

            // Left side - Title/Logo
            span {
                class: "brand",
                onclick: move |_| on_navigate.call(Route::Home),
                "Promptcard"
            }

            // Right side - Controls
            div {
                class: "controls",

                button {
                    class: "btn",
                    onclick: move |_| on_toggle_theme.call(()),
                    "{theme_val.toggle_label()}"
                }

                if viewer_id.is_some() {
                    button {
                        class: "btn",
                        onclick: move |_| on_navigate.call(Route::MyProfile),
                        "My Profile"
                    }
                    button {
                        class: "btn",
                        onclick: move |_| on_sign_out.call(()),
                        "Sign out"
                    }
                    if let Some(url) = viewer_avatar {
                        div {
                            onclick: move |_| on_navigate.call(Route::MyProfile),
                            Avatar { url: url, size: 37 }
                        }
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_sign_in.call(()),
                        "Sign in"
                    }
                }
            }
        }
    }
}
