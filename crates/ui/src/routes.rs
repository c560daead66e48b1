use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{FavoritesView, HomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/user/:uid/favorite?:fid", FavoritesView)] Favorites { uid: String, fid: String },
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let viewer = ctx
        .viewer()
        .map_or_else(|| "Not signed in".to_owned(), |id| format!("Signed in as {id}"));

    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { class: "topbar__brand", to: Route::Home {}, "Collections" }
                span { class: "topbar__viewer", "{viewer}" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
