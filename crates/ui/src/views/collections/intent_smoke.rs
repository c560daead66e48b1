use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dioxus::prelude::ReadableExt;
use hub_core::model::{
    CollectionFields, CollectionId, CollectionListing, CollectionStatus, MemberPage, UserId,
    Visibility,
};
use services::MemoryClipboard;
use storage::repository::{CollectionRepository, InMemoryRepository, StorageError};
use tokio::sync::Notify;

use crate::views::test_harness::{
    HarnessConfig, OWNER, drafts, go_libs, rendered_rows, seeded_repository, setup_harness,
};
use crate::views::{CollectionIntent, NoticeLevel};
use crate::vm::{ModalGesture, ModalState};

/// Delegates to an in-memory store but refuses every delete and edit.
struct LockedCollections {
    inner: InMemoryRepository,
    message: Option<String>,
}

#[async_trait]
impl CollectionRepository for LockedCollections {
    async fn list_collections(
        &self,
        owner: &UserId,
    ) -> Result<Visibility<CollectionListing>, StorageError> {
        self.inner.list_collections(owner).await
    }

    async fn list_members(
        &self,
        owner: &UserId,
        collection: &CollectionId,
        page: u32,
    ) -> Result<Visibility<MemberPage>, StorageError> {
        self.inner.list_members(owner, collection, page).await
    }

    async fn delete_collection(&self, _collection: &CollectionId) -> Result<(), StorageError> {
        Err(StorageError::Rejected {
            message: self.message.clone(),
        })
    }

    async fn edit_collection(
        &self,
        _collection: &CollectionId,
        _fields: &CollectionFields,
    ) -> Result<(), StorageError> {
        Err(StorageError::Rejected {
            message: self.message.clone(),
        })
    }

    async fn create_collection(&self, fields: &CollectionFields) -> Result<(), StorageError> {
        self.inner.create_collection(fields).await
    }
}

/// Counts deletes and holds each one until the gate opens.
struct GatedDeletes {
    inner: InMemoryRepository,
    deletes: Arc<AtomicUsize>,
    gate: Arc<Notify>,
}

#[async_trait]
impl CollectionRepository for GatedDeletes {
    async fn list_collections(
        &self,
        owner: &UserId,
    ) -> Result<Visibility<CollectionListing>, StorageError> {
        self.inner.list_collections(owner).await
    }

    async fn list_members(
        &self,
        owner: &UserId,
        collection: &CollectionId,
        page: u32,
    ) -> Result<Visibility<MemberPage>, StorageError> {
        self.inner.list_members(owner, collection, page).await
    }

    async fn delete_collection(&self, collection: &CollectionId) -> Result<(), StorageError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.inner.delete_collection(collection).await
    }

    async fn edit_collection(
        &self,
        collection: &CollectionId,
        fields: &CollectionFields,
    ) -> Result<(), StorageError> {
        self.inner.edit_collection(collection, fields).await
    }

    async fn create_collection(&self, fields: &CollectionFields) -> Result<(), StorageError> {
        self.inner.create_collection(fields).await
    }
}

fn locked_config(message: Option<&str>) -> HarnessConfig {
    HarnessConfig {
        repository: Arc::new(LockedCollections {
            inner: seeded_repository(Some(OWNER)),
            message: message.map(str::to_owned),
        }),
        ..HarnessConfig::owner()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn owner_rows_show_lock_and_share_affordances() {
    let harness = setup_harness(HarnessConfig::owner()).await;
    let html = harness.render();

    assert!(html.contains("New collection"));
    let rows = rendered_rows(&html);
    let ids: Vec<&str> = rows.iter().map(|(fid, _)| fid.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);

    let (_, public_row) = &rows[0];
    assert!(public_row.contains("Go libs"));
    assert!(public_row.contains("collection-share"));
    assert!(!public_row.contains("collection-lock"));
    assert!(public_row.contains("No description yet"));
    assert!(public_row.contains("5 projects"));
    assert!(public_row.contains("/user/u1/favorite/?fid=1"));

    let (_, private_row) = &rows[1];
    assert!(private_row.contains("collection-lock"));
    assert!(!private_row.contains("collection-share"));
    assert!(private_row.contains("collection-more"));
}

#[tokio::test(flavor = "current_thread")]
async fn hover_reveals_inline_owner_actions() {
    let mut harness = setup_harness(HarnessConfig::owner()).await;
    assert!(!harness.render().contains("collection-edit"));

    harness.dispatch(CollectionIntent::PointerEnter(CollectionId::new("1")));
    harness.drive();
    let rows = rendered_rows(&harness.render());
    assert!(rows[0].1.contains("collection-edit"));
    assert!(rows[0].1.contains("collection-delete"));
    assert!(!rows[1].1.contains("collection-edit"));

    harness.dispatch(CollectionIntent::PointerLeave(CollectionId::new("1")));
    harness.drive();
    assert!(!harness.render().contains("collection-edit"));
}

#[tokio::test(flavor = "current_thread")]
async fn visitor_sees_public_rows_without_owner_controls() {
    let harness = setup_harness(HarnessConfig::visitor()).await;
    let html = harness.render();

    assert!(!html.contains("New collection"));
    let rows = rendered_rows(&html);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, "1");
    assert!(rows[0].1.contains("collection-share"));
    assert!(!rows[0].1.contains("collection-more"));
}

#[tokio::test(flavor = "current_thread")]
async fn confirmed_delete_refetches_and_closes_dialog() {
    let mut harness = setup_harness(HarnessConfig::owner()).await;

    harness.dispatch(CollectionIntent::Modal(ModalGesture::Delete(drafts())));
    harness.drive();
    assert!(harness.render().contains("Delete this collection?"));

    harness.dispatch(CollectionIntent::ConfirmDelete);
    harness.settle().await;

    let state = harness.state();
    let modal = harness.with_runtime(|| state.modal.peek().state().clone());
    assert_eq!(modal, ModalState::Closed);

    let html = harness.render();
    assert!(!html.contains("Delete this collection?"));
    let rows = rendered_rows(&html);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, "1");

    let notice = harness
        .with_runtime(|| harness.notifications().latest())
        .expect("notice shown");
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "Collection deleted");
}

#[tokio::test(flavor = "current_thread")]
async fn refused_delete_keeps_row_dialog_and_hover() {
    let mut harness = setup_harness(locked_config(Some("collection is locked"))).await;

    harness.dispatch(CollectionIntent::PointerEnter(CollectionId::new("2")));
    harness.dispatch(CollectionIntent::Modal(ModalGesture::Delete(drafts())));
    harness.drive();
    harness.dispatch(CollectionIntent::ConfirmDelete);
    harness.settle().await;

    let state = harness.state();
    let (modal, active) = harness.with_runtime(|| {
        (
            state.modal.peek().state().clone(),
            state.tracker.peek().active().cloned(),
        )
    });
    assert_eq!(modal, ModalState::ConfirmingDelete(drafts()));
    assert_eq!(active, Some(CollectionId::new("2")));

    let html = harness.render();
    assert_eq!(rendered_rows(&html).len(), 2);
    assert!(html.contains("Delete this collection?"));

    let notice = harness
        .with_runtime(|| harness.notifications().latest())
        .expect("notice shown");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "collection is locked");
}

#[tokio::test(flavor = "current_thread")]
async fn refused_delete_without_message_uses_fallback() {
    let mut harness = setup_harness(locked_config(None)).await;

    harness.dispatch(CollectionIntent::Modal(ModalGesture::Delete(go_libs())));
    harness.dispatch(CollectionIntent::ConfirmDelete);
    harness.settle().await;

    let notice = harness
        .with_runtime(|| harness.notifications().latest())
        .expect("notice shown");
    assert_eq!(notice.message, "Delete failed");
}

#[tokio::test(flavor = "current_thread")]
async fn repeated_confirm_sends_one_delete() {
    let deletes = Arc::new(AtomicUsize::new(0));
    let gate = Arc::new(Notify::new());
    let mut harness = setup_harness(HarnessConfig {
        repository: Arc::new(GatedDeletes {
            inner: seeded_repository(Some(OWNER)),
            deletes: deletes.clone(),
            gate: gate.clone(),
        }),
        ..HarnessConfig::owner()
    })
    .await;

    harness.dispatch(CollectionIntent::Modal(ModalGesture::Delete(drafts())));
    harness.drive();
    harness.dispatch(CollectionIntent::ConfirmDelete);
    harness.dispatch(CollectionIntent::ConfirmDelete);
    harness.settle().await;

    assert_eq!(deletes.load(Ordering::SeqCst), 1);
    let html = harness.render();
    let (_, confirm) = html
        .split_once("confirm-delete__confirm")
        .expect("confirm button rendered");
    let button = confirm.split("</button>").next().unwrap_or_default();
    assert!(button.contains("disabled"), "{button}");
    assert!(button.contains("Deleting…"));

    gate.notify_one();
    harness.settle().await;

    let state = harness.state();
    let modal = harness.with_runtime(|| state.modal.peek().state().clone());
    assert_eq!(modal, ModalState::Closed);
    assert_eq!(deletes.load(Ordering::SeqCst), 1);
    assert_eq!(rendered_rows(&harness.render()).len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn row_gesture_replaces_open_dialog() {
    let mut harness = setup_harness(HarnessConfig::owner()).await;

    harness.dispatch(CollectionIntent::Modal(ModalGesture::MoreActions(go_libs())));
    harness.drive();
    assert!(harness.render().contains("action-sheet"));

    harness.dispatch(CollectionIntent::Modal(ModalGesture::SheetDelete));
    harness.drive();
    harness.dispatch(CollectionIntent::Modal(ModalGesture::Edit(drafts())));
    harness.drive();

    let state = harness.state();
    let (modal, cur_item) = harness.with_runtime(|| {
        let orchestrator = state.modal.peek();
        (
            orchestrator.state().clone(),
            orchestrator.cur_item().cloned(),
        )
    });
    assert_eq!(modal, ModalState::Editing(drafts()));
    assert_eq!(cur_item, Some(drafts()));

    let html = harness.render();
    assert!(html.contains("Edit collection"));
    assert!(!html.contains("Delete this collection?"));
    assert!(!html.contains("action-sheet"));
}

#[tokio::test(flavor = "current_thread")]
async fn edit_validates_inline_then_saves() {
    let mut harness = setup_harness(HarnessConfig::owner()).await;

    harness.dispatch(CollectionIntent::Modal(ModalGesture::Edit(go_libs())));
    harness.drive();
    let state = harness.state();
    let seeded = harness.with_runtime(|| state.edit.name.peek().clone());
    assert_eq!(seeded, "Go libs");
    // Opening the edit form stays on the list.
    assert_eq!(rendered_rows(&harness.render()).len(), 2);

    harness.set_edit_fields("   ", "");
    harness.dispatch(CollectionIntent::SubmitEdit);
    harness.drive();
    let (modal, error) = harness.with_runtime(|| {
        (
            state.modal.peek().state().clone(),
            state.edit.error.peek().clone(),
        )
    });
    assert!(matches!(modal, ModalState::Editing(_)));
    assert_eq!(error.as_deref(), Some("collection name cannot be empty"));
    assert!(harness.render().contains("collection-form__error"));

    harness.set_edit_fields("Rust libs", "crates worth a look");
    harness.dispatch(CollectionIntent::SubmitEdit);
    harness.settle().await;

    let modal = harness.with_runtime(|| state.modal.peek().state().clone());
    assert_eq!(modal, ModalState::Closed);
    let rows = rendered_rows(&harness.render());
    assert!(rows[0].1.contains("Rust libs"));
    assert!(rows[0].1.contains("crates worth a look"));
}

#[tokio::test(flavor = "current_thread")]
async fn refused_edit_keeps_form_open() {
    let mut harness = setup_harness(locked_config(Some("name already taken"))).await;

    harness.dispatch(CollectionIntent::Modal(ModalGesture::Edit(go_libs())));
    harness.drive();
    harness.set_edit_fields("Rust libs", "");
    harness.dispatch(CollectionIntent::SubmitEdit);
    harness.settle().await;

    let state = harness.state();
    let (modal, error) = harness.with_runtime(|| {
        (
            state.modal.peek().state().clone(),
            state.edit.error.peek().clone(),
        )
    });
    assert_eq!(modal, ModalState::Editing(go_libs()));
    assert_eq!(error, None);

    let html = harness.render();
    assert!(html.contains("Edit collection"));
    assert!(rendered_rows(&html)[0].1.contains("Go libs"));

    let notice = harness
        .with_runtime(|| harness.notifications().latest())
        .expect("notice shown");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "name already taken");
}

#[tokio::test(flavor = "current_thread")]
async fn refused_edit_without_message_uses_fallback() {
    let mut harness = setup_harness(locked_config(None)).await;

    harness.dispatch(CollectionIntent::Modal(ModalGesture::Edit(drafts())));
    harness.drive();
    harness.dispatch(CollectionIntent::SubmitEdit);
    harness.settle().await;

    let state = harness.state();
    let modal = harness.with_runtime(|| state.modal.peek().state().clone());
    assert_eq!(modal, ModalState::Editing(drafts()));
    let notice = harness
        .with_runtime(|| harness.notifications().latest())
        .expect("notice shown");
    assert_eq!(notice.message, "Update failed");
}

#[tokio::test(flavor = "current_thread")]
async fn only_form_dialogs_close_from_the_backdrop() {
    let mut harness = setup_harness(HarnessConfig::owner()).await;

    harness.dispatch(CollectionIntent::Modal(ModalGesture::Edit(go_libs())));
    harness.drive();
    assert!(harness.render().contains("modal-overlay--dismissable"));

    harness.dispatch(CollectionIntent::Modal(ModalGesture::Delete(go_libs())));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Delete this collection?"));
    assert!(html.contains("modal-overlay"));
    assert!(!html.contains("modal-overlay--dismissable"));
}

#[tokio::test(flavor = "current_thread")]
async fn create_dialog_appends_collection() {
    let mut harness = setup_harness(HarnessConfig::owner()).await;

    harness.dispatch(CollectionIntent::OpenCreate);
    harness.drive();
    let state = harness.state();
    assert!(harness.with_runtime(|| *state.show_create.peek()));

    harness.set_create_fields("Zig tools", "", CollectionStatus::Private);
    harness.dispatch(CollectionIntent::SubmitCreate);
    harness.settle().await;

    assert!(!harness.with_runtime(|| *state.show_create.peek()));
    let rows = rendered_rows(&harness.render());
    assert_eq!(rows.len(), 3);
    assert!(rows[2].1.contains("Zig tools"));
    assert!(rows[2].1.contains("collection-lock"));
}

#[tokio::test(flavor = "current_thread")]
async fn share_copies_link_and_confirms() {
    let harness = setup_harness(HarnessConfig::owner()).await;

    harness.dispatch(CollectionIntent::Share(go_libs()));

    let copied = harness.clipboard.contents().expect("clipboard written");
    assert!(copied.starts_with("Collection Go libs\n"));
    assert!(copied.ends_with("/user/u1/favorite/?fid=1"));
    let notice = harness
        .with_runtime(|| harness.notifications().latest())
        .expect("notice shown");
    assert_eq!(notice.level, NoticeLevel::Success);
}

#[tokio::test(flavor = "current_thread")]
async fn share_failure_only_reports() {
    let harness = setup_harness(HarnessConfig {
        clipboard: MemoryClipboard::unavailable(),
        ..HarnessConfig::owner()
    })
    .await;

    harness.dispatch(CollectionIntent::Share(go_libs()));

    let notice = harness
        .with_runtime(|| harness.notifications().latest())
        .expect("notice shown");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(rendered_rows(&harness.render()).len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn opening_a_row_shows_its_members() {
    let mut harness = setup_harness(HarnessConfig::owner()).await;

    harness.dispatch(CollectionIntent::OpenRow(CollectionId::new("1")));
    harness.settle().await;

    let html = harness.render();
    assert!(rendered_rows(&html).is_empty());
    assert!(html.contains("breadcrumb"));
    assert!(html.contains("Go libs"));
    assert!(html.contains("Nothing saved here yet"));
}
