use dioxus::prelude::*;

#[component]
pub fn OwnerControls(on_edit: EventHandler<()>, on_delete: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "owner_controls",
            p {
                class: "edit",
                onclick: move |_| on_edit.call(()),
                "Edit"
            }
            p {
                class: "delete",
                onclick: move |_| on_delete.call(()),
                "Delete"
            }
        }
    }
}
