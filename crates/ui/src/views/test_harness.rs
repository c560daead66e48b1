use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::Router;
use hub_core::model::{Collection, CollectionId, CollectionStatus, SiteConfig, UserId};
use services::{CollectionService, MemoryClipboard, ShareService};
use storage::repository::{CollectionRepository, InMemoryRepository};

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::collections::CollectionTestHandles;
use crate::views::{Notifications, SubCollectionTestHandles};
use crate::views::collections::state::CollectionListState;
use crate::views::CollectionIntent;

pub const OWNER: &str = "u1";

pub fn go_libs() -> Collection {
    Collection::new(
        CollectionId::new("1"),
        "Go libs",
        None,
        CollectionStatus::Public,
        "2023-01-02T03:04:05",
        5,
    )
    .expect("valid collection")
}

pub fn drafts() -> Collection {
    Collection::new(
        CollectionId::new("2"),
        "drafts",
        None,
        CollectionStatus::Private,
        "2023-01-03T03:04:05",
        0,
    )
    .expect("valid collection")
}

/// Store holding `OWNER`'s two collections, seen by `viewer`.
pub fn seeded_repository(viewer: Option<&str>) -> InMemoryRepository {
    let repo = InMemoryRepository::new();
    let owner = UserId::new(OWNER);
    repo.insert_collection(&owner, go_libs()).expect("insert");
    repo.insert_collection(&owner, drafts()).expect("insert");
    repo.set_viewer(viewer.map(UserId::new)).expect("viewer");
    repo
}

struct TestApp {
    collections: Arc<CollectionService>,
    share: Arc<ShareService>,
    viewer: Option<UserId>,
    owner: UserId,
    initial_collection: Option<String>,
}

impl UiApp for TestApp {
    fn collection_service(&self) -> Arc<CollectionService> {
        Arc::clone(&self.collections)
    }

    fn share_service(&self) -> Arc<ShareService> {
        Arc::clone(&self.share)
    }

    fn viewer(&self) -> Option<UserId> {
        self.viewer.clone()
    }

    fn default_owner(&self) -> UserId {
        self.owner.clone()
    }

    fn initial_collection(&self) -> Option<String> {
        self.initial_collection.clone()
    }
}

pub struct HarnessConfig {
    pub repository: Arc<dyn CollectionRepository>,
    pub clipboard: MemoryClipboard,
    pub viewer: Option<&'static str>,
    pub initial_collection: Option<&'static str>,
}

impl HarnessConfig {
    /// The owner browsing their own collections.
    pub fn owner() -> Self {
        Self {
            repository: Arc::new(seeded_repository(Some(OWNER))),
            clipboard: MemoryClipboard::new(),
            viewer: Some(OWNER),
            initial_collection: None,
        }
    }

    /// An anonymous visitor.
    pub fn visitor() -> Self {
        Self {
            repository: Arc::new(seeded_repository(None)),
            clipboard: MemoryClipboard::new(),
            viewer: None,
            initial_collection: None,
        }
    }
}

#[derive(Clone, Default)]
struct NoticeHandle(Rc<RefCell<Option<Notifications>>>);

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    collection_handles: CollectionTestHandles,
    sub_collection_handles: SubCollectionTestHandles,
    notices: NoticeHandle,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn RouterHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let notifications = use_context_provider(Notifications::new);
    use_context_provider(|| props.collection_handles.clone());
    use_context_provider(|| props.sub_collection_handles.clone());
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.notices.0.borrow_mut() = Some(notifications);
    }
    rsx! { Router::<Route> {} }
}

pub struct UiHarness {
    pub dom: VirtualDom,
    pub clipboard: MemoryClipboard,
    collection_handles: CollectionTestHandles,
    sub_collection_handles: SubCollectionTestHandles,
    notices: NoticeHandle,
}

impl UiHarness {
    pub fn dispatch(&self, intent: CollectionIntent) {
        let dispatch = self.collection_handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
    }

    pub fn state(&self) -> CollectionListState {
        self.collection_handles.state()
    }

    /// Run `f` with the dom's runtime entered, for signal reads and writes.
    pub fn with_runtime<O>(&self, f: impl FnOnce() -> O) -> O {
        self.dom.in_runtime(f)
    }

    pub fn notifications(&self) -> Notifications {
        (*self.notices.0.borrow()).expect("notifications registered")
    }

    pub fn set_edit_fields(&self, name: &str, description: &str) {
        let state = self.state();
        self.with_runtime(|| {
            let mut fields = state.edit;
            fields.name.set(name.to_owned());
            fields.description.set(description.to_owned());
        });
    }

    pub fn set_create_fields(&self, name: &str, description: &str, status: CollectionStatus) {
        let state = self.state();
        self.with_runtime(|| state.create.fill(name, description, status));
    }

    /// Request page `n` of the open collection, as the pagination buttons do.
    pub fn set_page(&self, n: u32) {
        let mut page = self.sub_collection_handles.page();
        self.with_runtime(|| page.set(n));
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    /// Let spawned tasks and resources finish, then re-render.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(20),
                self.dom.wait_for_work(),
            )
            .await;
            drive_dom(&mut self.dom);
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_harness(config: HarnessConfig) -> UiHarness {
    let collections = Arc::new(CollectionService::new(config.repository));
    let share = Arc::new(ShareService::new(
        SiteConfig::default(),
        Arc::new(config.clipboard.clone()),
    ));
    let app = Arc::new(TestApp {
        collections,
        share,
        viewer: config.viewer.map(UserId::new),
        owner: UserId::new(OWNER),
        initial_collection: config.initial_collection.map(str::to_owned),
    });

    let collection_handles = CollectionTestHandles::default();
    let sub_collection_handles = SubCollectionTestHandles::default();
    let notices = NoticeHandle::default();
    let mut dom = VirtualDom::new_with_props(
        RouterHarness,
        HarnessProps {
            app,
            collection_handles: collection_handles.clone(),
            sub_collection_handles: sub_collection_handles.clone(),
            notices: notices.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    let mut harness = UiHarness {
        dom,
        clipboard: config.clipboard,
        collection_handles,
        sub_collection_handles,
        notices,
    };
    harness.settle().await;
    harness
}

/// Rendered rows keyed by collection id, in render order.
pub fn rendered_rows(html: &str) -> Vec<(String, String)> {
    html.split("data-fid=\"")
        .skip(1)
        .filter_map(|chunk| {
            let (fid, rest) = chunk.split_once('"')?;
            Some((fid.to_owned(), rest.to_owned()))
        })
        .collect()
}
