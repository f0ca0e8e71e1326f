use crate::builder::ChangedClassifiers;

/// Payload of the change topic, fired once per successful recompute.
///
/// Downstream caches key their invalidation on `changed`: a named set for
/// incremental builds, [`ChangedClassifiers::All`] for full builds.
#[derive(Debug, Clone)]
pub struct ModelChange {
    /// The modification counter of the newly published model.
    pub version: u64,
    pub changed: ChangedClassifiers,
}

/// A subscriber on the change topic. Invoked on the recomputing thread;
/// listeners must be quick and must not call back into `recompute`.
pub type ChangeListener = Box<dyn Fn(&ModelChange) + Send + Sync>;
