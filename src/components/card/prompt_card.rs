use super::{CopyButton, CreatorBadge, Modal, OwnerControls, TagLabel};
use crate::utils::{
    card_height, copy_prompt, expire_after, CardView, CopyFeedback, Disclosure, Post, Route,
    SystemClipboard, Theme, ViewMode, Viewer,
};
use dioxus::prelude::*;

/// One prompt in a listing: the compact card plus its full-text overlay.
///
/// Copy feedback and disclosure state belong to this instance and are
/// dropped with it. Both views are rendered from [`CardView`] so they can't
/// disagree about ownership, copy state or navigation.
#[component]
pub fn PromptCard(
    theme: Signal<Theme>,
    post: Post,
    #[props(!optional)] viewer: Option<Viewer>,
    current_path: Signal<String>,
    is_profile_page: bool,
    on_navigate: EventHandler<Route>,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
    #[props(!optional)] on_tag_selected: Option<EventHandler<String>>,
) -> Element {
    let _ = theme.read();
    let mut feedback = use_signal(CopyFeedback::new);
    let mut disclosure = use_signal(Disclosure::default);

    let prompt = post.prompt.clone();
    let handle_copy = use_callback(move |_: ()| {
        let ticket = copy_prompt(&SystemClipboard, &mut feedback.write(), &prompt);
        // Only the newest ticket clears, so earlier timers can't cut a fresh confirmation short.
        spawn(expire_after(ticket, move |ticket| {
            feedback.write().expire(ticket);
        }));
    });

    let path = current_path.read().clone();
    let state = disclosure();
    let viewer = viewer.as_ref();
    let compact = CardView::build(&post, viewer, &path, &feedback.read(), state, ViewMode::Compact);
    let full = CardView::build(&post, viewer, &path, &feedback.read(), state, ViewMode::Expanded);
    let height = card_height(is_profile_page);

    rsx! {
        div {
            class: "prompt_card",
            style: "height: {height};",

            div {
                class: "card_header",
                CreatorBadge {
                    name: compact.creator_name.clone(),
                    email: compact.creator_email.clone(),
                    avatar_url: compact.avatar_url.clone(),
                    target: compact.avatar_target.clone(),
                    on_navigate,
                }
                CopyButton { icon: compact.copy_icon, on_copy: handle_copy }
            }

            p {
                class: "prompt_para",
                "{compact.text}"
                if let Some(label) = compact.expand_label {
                    span {
                        class: "expand_link",
                        onclick: move |_| disclosure.write().open(),
                        "{label}"
                    }
                }
            }

            TagLabel {
                label: compact.tag_label.clone(),
                tag: post.tag.clone(),
                on_tag_selected,
            }

            if compact.show_owner_controls {
                OwnerControls { on_edit, on_delete }
            }
        }

        Modal {
            theme,
            open: state.is_expanded(),
            on_close: move |_| disclosure.write().close(),

            div {
                class: "full-prompt-card",

                div {
                    class: "card_header",
                    CreatorBadge {
                        name: full.creator_name.clone(),
                        email: full.creator_email.clone(),
                        avatar_url: full.avatar_url.clone(),
                        target: full.avatar_target.clone(),
                        on_navigate,
                    }
                    CopyButton { icon: full.copy_icon, on_copy: handle_copy }
                }

                div {
                    class: "prompt",
                    p { "{full.text}" }
                }

                TagLabel {
                    label: full.tag_label.clone(),
                    tag: post.tag.clone(),
                    on_tag_selected,
                }

                if full.show_owner_controls {
                    OwnerControls { on_edit, on_delete }
                }
            }
        }
    }
}
