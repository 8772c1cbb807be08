//! Runtime wrappers around static battle content.
//!
//! [`CatalogOracle`] exposes the `battle-core` [`battle_core::DefinitionOracle`]
//! trait over definitions loaded by `battle-content`. The data is immutable at
//! runtime; dynamic state lives in the simulation driver.
mod catalog;

pub use catalog::CatalogOracle;
