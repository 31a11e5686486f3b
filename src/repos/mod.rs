//! Repository discovery and the git auto-push sweep.

mod autopush;
mod discovery;
mod runner;
pub mod transliterate;

// Re-export the sweep types
pub use autopush::{AutoPusher, PushReport};

// Re-export discovery helpers
pub use discovery::{find_repositories, is_repository};

// Re-export command execution
pub use runner::{CommandRunner, SystemRunner};
