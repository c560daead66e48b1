mod actions;
mod components;
pub(crate) mod state;
mod view;

pub use actions::CollectionIntent;
pub use view::CollectionListView;

#[cfg(test)]
pub(crate) use view::CollectionTestHandles;

#[cfg(test)]
mod intent_smoke;
