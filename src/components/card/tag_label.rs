use crate::utils::select_tag;
use dioxus::prelude::*;

/// `#tag` label. Clicking it only does something when the caller supplied a handler.
#[component]
pub fn TagLabel(
    label: String,
    tag: String,
    #[props(!optional)] on_tag_selected: Option<EventHandler<String>>,
) -> Element {
    rsx! {
        p {
            class: "tag",
            class: if on_tag_selected.is_some() { "clickable" } else { "" },
            onclick: move |_| {
                let callback = on_tag_selected.map(|handler| move |tag: String| handler.call(tag));
                select_tag(callback, &tag);
            },
            "{label}"
        }
    }
}
