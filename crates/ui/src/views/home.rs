use dioxus::prelude::*;

use crate::context::AppContext;

use super::favorites::FavoritesView;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let uid = ctx.default_owner().to_string();
    let fid = ctx.initial_collection().unwrap_or_default().to_owned();

    rsx! {
        FavoritesView { uid, fid }
    }
}
