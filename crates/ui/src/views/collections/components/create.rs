use dioxus::prelude::*;

use crate::views::ModalHost;

use super::super::actions::CollectionIntent;
use super::super::state::FormFields;
use super::modals::CollectionForm;

#[component]
pub fn CreateCollectionDialog(
    visible: bool,
    creating: bool,
    fields: FormFields,
    on_intent: Callback<CollectionIntent>,
) -> Element {
    let close = move |()| on_intent.call(CollectionIntent::CloseCreate);

    rsx! {
        ModalHost {
            visible,
            mask_closable: false,
            title: "New collection".to_string(),
            class: "modal--form",
            on_close: close,
            CollectionForm {
                fields,
                busy: creating,
                submit_label: "Create",
                on_submit: move |()| on_intent.call(CollectionIntent::SubmitCreate),
                on_cancel: close,
            }
        }
    }
}
