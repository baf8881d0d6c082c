//! Rotation catalog loader with hot-reload via a `notify` watcher.
//!
//! A catalog is a single `PmRotation` YAML file. [`load_file`] and
//! [`parse_str`] turn it into a [`Rotation`](crate::catalog::Rotation);
//! [`CatalogStore`] keeps the current one in memory and swaps it when the
//! file changes. A failed reload keeps the previous rotation.

mod core;
mod error;
mod watcher;

#[cfg(test)]
mod tests;

pub use self::core::{load_document, load_file, parse_document, parse_str, CatalogStore};
pub use self::error::{CatalogError, Result};
