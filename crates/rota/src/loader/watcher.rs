//! Filesystem event handler for the notify watcher (hot-reload).

use std::path::Path;
use std::sync::atomic::AtomicU64;
use std::sync::{Arc, RwLock};

use notify::event::{CreateKind, ModifyKind, RemoveKind};
use notify::{Event, EventKind};
use tracing::{debug, warn};

use crate::catalog::Rotation;

use super::core::reload_into;

/// Handle a single filesystem event for the watched catalog file.
pub(super) fn handle_fs_event(
    event: &Event,
    target: &Path,
    current: &Arc<RwLock<Arc<Rotation>>>,
    generation: &Arc<AtomicU64>,
) {
    let Some(target_name) = target.file_name() else {
        return;
    };

    // Editors save through temp files in the same directory.
    let touches_target = event
        .paths
        .iter()
        .any(|p| p.file_name() == Some(target_name));
    if !touches_target {
        return;
    }

    match &event.kind {
        EventKind::Create(CreateKind::File | CreateKind::Any)
        | EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Name(_) | ModifyKind::Any) => {
            // Errors are logged inside; the previous rotation stays active.
            let _ = reload_into(target, current, generation);
        }
        EventKind::Remove(RemoveKind::File | RemoveKind::Any) => {
            warn!(path = %target.display(), "catalog file removed, keeping last loaded rotation");
        }
        other => {
            debug!(path = %target.display(), kind = ?other, "ignoring filesystem event");
        }
    }
}
