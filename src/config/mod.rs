// Re-export all items from the submodules
mod profile;

// Re-export the collection profile
pub use profile::{load_or_create_config, CollectionProfile};
