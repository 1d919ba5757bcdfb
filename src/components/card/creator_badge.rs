use crate::utils::Route;
use dioxus::prelude::*;

pub const AVATAR_SIZE: u32 = 40;

#[component]
pub fn Avatar(url: String, size: u32) -> Element {
    rsx! {
        img {
            class: "avatar",
            src: "{url}",
            alt: "user_image",
            width: "{size}",
            height: "{size}",
        }
    }
}

/// Creator avatar, name and email. Activating it navigates to `target`.
#[component]
pub fn CreatorBadge(
    name: String,
    email: String,
    avatar_url: String,
    target: Route,
    on_navigate: EventHandler<Route>,
) -> Element {
    rsx! {
        div {
            class: "creator",
            onclick: move |_| on_navigate.call(target.clone()),

            Avatar { url: avatar_url, size: AVATAR_SIZE }

            div {
                class: "creator_details",
                h3 { class: "creator_name", "{name}" }
                p { class: "creator_email", "{email}" }
            }
        }
    }
}
