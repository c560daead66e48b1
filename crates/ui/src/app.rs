use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;
use crate::views::{Notifications, ToastStack};

#[component]
pub fn App() -> Element {
    use_context_provider(Notifications::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Collections" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
            ToastStack {}
        }
    }
}
