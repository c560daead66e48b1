use dioxus::prelude::*;

/// Generic dialog shell. Renders nothing while hidden.
///
/// `on_close` fires for the close button, Escape, and backdrop clicks when
/// `mask_closable` is set. Clicks inside the dialog never reach the backdrop.
#[component]
pub fn ModalHost(
    visible: bool,
    on_close: Callback<()>,
    #[props(default = true)] mask_closable: bool,
    #[props(default = false)] hide_close: bool,
    title: Option<String>,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    if !visible {
        return rsx! {};
    }
    let overlay_class = if mask_closable {
        "modal-overlay modal-overlay--dismissable"
    } else {
        "modal-overlay"
    };

    rsx! {
        div {
            class: overlay_class,
            tabindex: "-1",
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onclick: move |_| {
                if mask_closable {
                    on_close.call(());
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal {class}",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                if !hide_close {
                    button {
                        class: "modal-close",
                        r#type: "button",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                if let Some(title) = title {
                    h3 { class: "modal-title", "{title}" }
                }
                {children}
            }
        }
    }
}
