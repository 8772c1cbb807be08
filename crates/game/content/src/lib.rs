//! Data-driven battle content and loaders.
//!
//! This crate reads the static definitions a battle is built from:
//! - unit catalogs (RON)
//! - monster catalogs with rewards (RON)
//! - stage layouts (RON, 1-based coordinates)
//! - battle configuration (TOML)
//!
//! Content is consumed by runtime oracles and never appears in battle state.
//! Records live in [`formats`]; loaders convert them into `battle-core` types.

pub mod formats;
pub mod loaders;

pub use formats::{MonsterRecord, PlacementRecord, StageRecord, UnitRecord};
pub use loaders::{
    ConfigLoader, Content, ContentFactory, LoadResult, MonsterLoader, StageLoader, UnitLoader,
};
