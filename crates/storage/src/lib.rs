#![forbid(unsafe_code)]

pub mod http;
pub mod repository;

pub use http::{ApiConfig, HttpRepository};
pub use repository::{CollectionRepository, InMemoryRepository, Storage, StorageError};
