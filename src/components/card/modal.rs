use crate::utils::Theme;
use dioxus::prelude::*;

const CLOSE_ICON: Asset = asset!("/assets/icons/close.svg");

/// Full-viewport overlay, stacked above everything else on the page.
#[component]
pub fn Modal(
    theme: Signal<Theme>,
    open: bool,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let _ = theme.read();

    if !open {
        return rsx! {};
    }

    rsx! {
        // Backdrop
        div {
            class: "modal",
            onclick: move |_| on_close.call(()),

            // Stop propagation so clicking inside doesn't close
            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "close",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    img {
                        src: CLOSE_ICON,
                        width: "20",
                        height: "20",
                        alt: "close",
                    }
                }

                {children}
            }
        }
    }
}
