use dioxus::prelude::*;

use super::collections::CollectionListView;
use super::sub_collection::SubCollectionView;

/// `/user/:uid/favorite?fid=` page. A non-empty `fid` switches the page to
/// that collection's members.
#[component]
pub fn FavoritesView(uid: String, fid: String) -> Element {
    let fid = fid.trim().to_owned();
    rsx! {
        div { class: "page favorites",
            if fid.is_empty() {
                h2 { class: "favorites__title", "Collections" }
                CollectionListView { key: "{uid}", uid: uid.clone() }
            } else {
                SubCollectionView { key: "{uid}/{fid}", uid: uid.clone(), fid: fid.clone() }
            }
        }
    }
}
