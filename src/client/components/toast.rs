use dioxus::prelude::*;

use crate::client::util::regenerate::ToastState;

/// Transient success notification, fades out while `leaving` is set.
#[component]
pub fn Toast(toast: Option<ToastState>) -> Element {
    let Some(toast) = toast else {
        return rsx!();
    };

    let opacity = if toast.leaving { "opacity-0" } else { "opacity-100" };

    rsx!(
        div { class: "toast toast-top toast-end",
            div {
                class: "alert alert-success transition-opacity duration-300 {opacity}",
                role: "status",
                span { "{toast.message}" }
            }
        }
    )
}
