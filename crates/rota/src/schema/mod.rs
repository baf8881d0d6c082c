//! YAML schema types for rotation catalogs.
//!
//! A rotation file follows the same `apiVersion / kind / metadata` header
//! as every other document we keep on disk:
//!
//! ```yaml
//! apiVersion: v1
//! kind: PmRotation
//! metadata: { id: gedung-a, name: Gedung A }
//! assets: [...]
//! teams: [...]
//! cycle: { week1: {...}, week2: {...}, week3: {...}, week4: {...} }
//! ```

mod document;
mod metadata;

pub use document::*;
pub use metadata::*;
