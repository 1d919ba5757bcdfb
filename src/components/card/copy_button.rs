use crate::utils::CopyIcon;
use dioxus::prelude::*;

const COPY_ICON: Asset = asset!("/assets/icons/copy.svg");
const TICK_ICON: Asset = asset!("/assets/icons/tick.svg");

#[component]
pub fn CopyButton(icon: CopyIcon, on_copy: EventHandler<()>) -> Element {
    let icon_src = match icon {
        CopyIcon::Copy => COPY_ICON,
        CopyIcon::Tick => TICK_ICON,
    };

    rsx! {
        div {
            class: "copy_btn",
            title: "Copy prompt",
            onclick: move |evt| {
                evt.stop_propagation();
                on_copy.call(());
            },
            img {
                src: icon_src,
                alt: icon.alt(),
                width: "12",
                height: "12",
            }
        }
    }
}
