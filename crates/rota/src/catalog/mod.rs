//! In-memory catalogs consumed by the scheduler.
//!
//! - [`ReferenceCatalog`]: assets by id, teams by 1-based position
//! - [`CycleCatalog`]: the fixed 4-week rotation pattern
//! - [`Rotation`]: both catalogs plus the metadata of the document they came from
//!
//! Catalogs are plain values handed to every call; nothing here is global.

mod cycle;
mod reference;


pub use self::cycle::{CycleCatalog, ScheduleSlot, WeeklySchedule};
pub use self::reference::ReferenceCatalog;

use crate::schema::CommonMetadata;

/// A loaded PM rotation: reference data plus the cycle pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation {
    pub metadata: CommonMetadata,
    pub reference: ReferenceCatalog,
    pub cycle: CycleCatalog,
}

impl Rotation {
    /// Build a rotation without a backing document (tests, embedded catalogs).
    pub fn new(reference: ReferenceCatalog, cycle: CycleCatalog) -> Self {
        Self {
            metadata: CommonMetadata::anonymous(),
            reference,
            cycle,
        }
    }

    /// `metadata.enabled`; a disabled rotation schedules nothing.
    pub fn is_enabled(&self) -> bool {
        self.metadata.enabled
    }
}
