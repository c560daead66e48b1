#![forbid(unsafe_code)]

pub mod collection_service;
pub mod error;
pub mod share_service;

pub use collection_service::CollectionService;
pub use error::{CollectionServiceError, ShareError};
pub use share_service::{Clipboard, MemoryClipboard, ShareService, SystemClipboard};
