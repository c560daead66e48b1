use dioxus::prelude::*;
use services::CollectionServiceError;
use storage::repository::StorageError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unreachable,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unreachable => "Could not reach the server. Check your connection and retry.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&CollectionServiceError> for ViewError {
    fn from(err: &CollectionServiceError) -> Self {
        match err {
            CollectionServiceError::Storage(
                StorageError::Connection(_) | StorageError::HttpStatus(_),
            ) => Self::Unreachable,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
