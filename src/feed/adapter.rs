use std::path::{Path, PathBuf};
use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::SourceId;
use crate::base::constants::{BEANS_DESCRIPTOR_SUFFIX, ITEMS_DESCRIPTOR_SUFFIX};
use crate::state::ModelStateService;

/// A file-change notification from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEvent {
    Created(PathBuf),
    Changed(PathBuf),
    Removed(PathBuf),
    /// Both the old and the new identifier must be invalidated.
    Renamed { from: PathBuf, to: PathBuf },
}

/// Filters file events to one meta-model domain and pushes the matching
/// source identifiers into the service's dirty set.
pub struct ChangeFeedAdapter {
    service: Arc<ModelStateService>,
    suffixes: Vec<SmolStr>,
}

impl ChangeFeedAdapter {
    pub fn new(
        service: Arc<ModelStateService>,
        suffixes: impl IntoIterator<Item = impl Into<SmolStr>>,
    ) -> Self {
        Self {
            service,
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Adapter for the item/type-system meta-model instance.
    pub fn items(service: Arc<ModelStateService>) -> Self {
        Self::new(service, [ITEMS_DESCRIPTOR_SUFFIX])
    }

    /// Adapter for the bean meta-model instance.
    pub fn beans(service: Arc<ModelStateService>) -> Self {
        Self::new(service, [BEANS_DESCRIPTOR_SUFFIX])
    }

    /// Handles one event, enqueueing the source identifiers it invalidates.
    pub fn handle(&self, event: &FileEvent) {
        let mut invalidated: Vec<SourceId> = Vec::new();
        match event {
            FileEvent::Created(path) | FileEvent::Changed(path) | FileEvent::Removed(path) => {
                if self.matches(path) {
                    invalidated.push(SourceId::from_path(path));
                }
            }
            FileEvent::Renamed { from, to } => {
                if self.matches(from) {
                    invalidated.push(SourceId::from_path(from));
                }
                if self.matches(to) {
                    invalidated.push(SourceId::from_path(to));
                }
            }
        }

        if invalidated.is_empty() {
            tracing::trace!(?event, "event outside this meta-model domain");
            return;
        }
        tracing::debug!(sources = invalidated.len(), "descriptor change enqueued");
        self.service.enqueue(invalidated);
    }

    fn matches(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }
}
