//! Content loaders for reading battle data from files.
//!
//! All loaders parse the records defined in [`crate::formats`].

pub mod config;
pub mod factory;
pub mod monsters;
pub mod stages;
pub mod units;

pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory};
pub use monsters::MonsterLoader;
pub use stages::StageLoader;
pub use units::UnitLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
