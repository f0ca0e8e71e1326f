use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashSet;
use tokio_util::sync::CancellationToken;

use crate::base::SourceId;
use crate::builder::{BuildRun, DeclarationProvider, full_build, incremental_build};
use crate::model::GlobalModel;

use super::events::{ChangeListener, ModelChange};

/// Lifecycle state of the owned global model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeState {
    /// No model has ever been computed.
    Uncomputed,
    /// A recompute is wanted or in flight.
    Computing,
    /// The published snapshot is current.
    Computed,
}

/// Result of a non-blocking read.
#[derive(Debug, Clone)]
pub enum ModelRead {
    /// The current, fully consistent snapshot.
    Ready(Arc<GlobalModel>),
    /// A recompute is wanted or in flight; retry after the change
    /// notification. This is a routine condition, not a fault.
    Pending,
    /// The environment is bulk-indexing; defer rather than risk stale data.
    Busy,
}

impl ModelRead {
    pub fn ready(self) -> Option<Arc<GlobalModel>> {
        match self {
            ModelRead::Ready(model) => Some(model),
            _ => None,
        }
    }
}

/// Result of one recompute attempt.
#[derive(Debug, Clone)]
pub enum RecomputeOutcome {
    /// A new snapshot was published and subscribers notified.
    Completed(ModelChange),
    /// Nothing was dirty and a snapshot already exists.
    Clean,
    /// Externally cancelled; dirty entries were restored and the previous
    /// snapshot remains authoritative.
    Cancelled,
    /// Another recompute holds the build permit.
    AlreadyRunning,
}

struct ServiceCore {
    state: ComputeState,
    dirty: FxHashSet<SourceId>,
}

/// Owner of the live global model, its dirty set, and its state machine.
///
/// Construction starts [`ComputeState::Uncomputed`]; disposal is dropping
/// the service. Collaborators hold it behind an `Arc`.
pub struct ModelStateService {
    core: Mutex<ServiceCore>,
    published: RwLock<Option<Arc<GlobalModel>>>,
    version: AtomicU64,
    /// Nesting depth of bulk environment operations (reindexing etc.).
    bulk_depth: AtomicUsize,
    listeners: Mutex<Vec<ChangeListener>>,
    /// Serializes recompute attempts; never held while notifying.
    build_permit: Mutex<()>,
}

impl ModelStateService {
    pub fn new() -> Self {
        Self {
            core: Mutex::new(ServiceCore {
                state: ComputeState::Uncomputed,
                dirty: FxHashSet::default(),
            }),
            published: RwLock::new(None),
            version: AtomicU64::new(0),
            bulk_depth: AtomicUsize::new(0),
            listeners: Mutex::new(Vec::new()),
            build_permit: Mutex::new(()),
        }
    }

    /// Returns the current snapshot without blocking on a rebuild.
    ///
    /// When the model is stale or absent this flips the state machine to
    /// `Computing` — marking that a recompute is wanted — and returns
    /// [`ModelRead::Pending`]; the caller retries after the next change
    /// notification. The embedder's scheduler observes
    /// [`Self::recompute_wanted`] and drives [`Self::recompute`] on a
    /// background thread.
    pub fn get(&self) -> ModelRead {
        if self.bulk_depth.load(Ordering::Acquire) > 0 {
            return ModelRead::Busy;
        }
        let mut core = self.core.lock();
        match core.state {
            ComputeState::Computed if core.dirty.is_empty() => {
                match self.published.read().as_ref() {
                    Some(model) => ModelRead::Ready(Arc::clone(model)),
                    None => {
                        debug_assert!(false, "computed state without a published snapshot");
                        ModelRead::Pending
                    }
                }
            }
            _ => {
                if core.state != ComputeState::Computing {
                    tracing::debug!(from = ?core.state, "read triggered recompute request");
                    core.state = ComputeState::Computing;
                }
                ModelRead::Pending
            }
        }
    }

    /// Merges the given sources into the dirty set (union, never a
    /// replacement). Safe to call concurrently from change-feed threads.
    pub fn enqueue(&self, sources: impl IntoIterator<Item = SourceId>) {
        let mut core = self.core.lock();
        let before = core.dirty.len();
        core.dirty.extend(sources);
        if core.dirty.len() > before && core.state == ComputeState::Computed {
            core.state = ComputeState::Computing;
        }
    }

    /// True if a recompute is wanted: the state machine is `Computing` or
    /// dirty entries are pending.
    pub fn recompute_wanted(&self) -> bool {
        let core = self.core.lock();
        core.state == ComputeState::Computing || !core.dirty.is_empty()
    }

    pub fn state(&self) -> ComputeState {
        self.core.lock().state
    }

    /// Version of the currently published snapshot; 0 before the first.
    pub fn current_version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Subscribes to the change topic. Fired once per successful recompute.
    pub fn subscribe(&self, listener: impl Fn(&ModelChange) + Send + Sync + 'static) {
        self.listeners.lock().push(Box::new(listener));
    }

    /// Marks the start of a bulk environment operation; reads defer until
    /// the matching [`Self::end_bulk_operation`].
    pub fn begin_bulk_operation(&self) {
        self.bulk_depth.fetch_add(1, Ordering::AcqRel);
    }

    pub fn end_bulk_operation(&self) {
        let previous = self.bulk_depth.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(previous > 0, "unbalanced end_bulk_operation");
    }

    /// Runs one recompute attempt on the calling thread.
    ///
    /// Atomically snapshots and clears the dirty set, runs a full build if
    /// no snapshot exists yet (incremental otherwise), publishes the result
    /// with a bumped version, and notifies subscribers. If new dirty
    /// entries arrived during the build the state re-enters `Computing`
    /// instead of settling. On cancellation the snapshot entries are
    /// restored into the dirty set and the previous model stays published.
    pub fn recompute(
        &self,
        provider: &dyn DeclarationProvider,
        cancel: &CancellationToken,
    ) -> RecomputeOutcome {
        let Some(_permit) = self.build_permit.try_lock() else {
            return RecomputeOutcome::AlreadyRunning;
        };

        let previous = self.published.read().clone();
        let snapshot: Vec<SourceId> = {
            let mut core = self.core.lock();
            if core.dirty.is_empty() && previous.is_some() {
                core.state = ComputeState::Computed;
                return RecomputeOutcome::Clean;
            }
            core.state = ComputeState::Computing;
            core.dirty.drain().collect()
        };

        let run = match &previous {
            Some(model) => incremental_build(model, provider, &snapshot, cancel),
            None => full_build(provider, cancel),
        };

        match run {
            BuildRun::Cancelled => {
                let mut core = self.core.lock();
                // Union with entries that arrived mid-build; nothing is lost.
                core.dirty.extend(snapshot);
                core.state = match previous {
                    Some(_) => ComputeState::Computed,
                    None => ComputeState::Uncomputed,
                };
                tracing::debug!("recompute cancelled, dirty set restored");
                RecomputeOutcome::Cancelled
            }
            BuildRun::Completed(outcome) => {
                let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;
                let mut model = outcome.model;
                model.set_version(version);
                let model = Arc::new(model);
                let change = ModelChange {
                    version,
                    changed: outcome.changed,
                };

                {
                    let mut core = self.core.lock();
                    *self.published.write() = Some(Arc::clone(&model));
                    core.state = if core.dirty.is_empty() {
                        ComputeState::Computed
                    } else {
                        // New changes arrived during the build.
                        ComputeState::Computing
                    };
                    tracing::debug!(
                        version,
                        classifiers = model.classifier_count(),
                        settled = core.state == ComputeState::Computed,
                        "published new global model"
                    );
                }

                self.notify(&change);
                RecomputeOutcome::Completed(change)
            }
        }
    }

    fn notify(&self, change: &ModelChange) {
        let listeners = self.listeners.lock();
        for listener in listeners.iter() {
            listener(change);
        }
    }
}

impl Default for ModelStateService {
    fn default() -> Self {
        Self::new()
    }
}
