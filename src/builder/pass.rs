use rustc_hash::FxHashSet;
use tokio_util::sync::CancellationToken;

use crate::base::{Name, SourceId};
use crate::decl::ClassifierKind;
use crate::model::GlobalModel;

use super::DeclarationProvider;

/// Which classifiers a build pass touched, for narrow downstream
/// invalidation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangedClassifiers {
    /// A full rebuild; every cached view must be invalidated.
    All,
    /// An incremental rebuild touching exactly these classifiers.
    Named(Vec<(ClassifierKind, Name)>),
}

impl ChangedClassifiers {
    pub fn contains(&self, kind: ClassifierKind, name: &Name) -> bool {
        match self {
            ChangedClassifiers::All => true,
            ChangedClassifiers::Named(names) => names.iter().any(|(k, n)| *k == kind && n == name),
        }
    }
}

/// The product of a completed build pass. The model is unversioned; the
/// state service stamps the counter at publication.
#[derive(Debug)]
pub struct BuildOutcome {
    pub model: GlobalModel,
    pub changed: ChangedClassifiers,
}

/// Result of running a build pass.
#[derive(Debug)]
pub enum BuildRun {
    Completed(BuildOutcome),
    /// Externally cancelled; no model was produced and the previous
    /// snapshot stays authoritative.
    Cancelled,
}

/// Builds a global model from every source the provider knows.
pub fn full_build(provider: &dyn DeclarationProvider, cancel: &CancellationToken) -> BuildRun {
    let mut model = GlobalModel::empty();
    let sources = provider.all_sources();
    let source_count = sources.len();

    for source in sources {
        if cancel.is_cancelled() {
            tracing::debug!("full build cancelled");
            return BuildRun::Cancelled;
        }
        fold_source(&mut model, provider, &source);
    }
    model.run_post_merge();

    tracing::debug!(
        sources = source_count,
        classifiers = model.classifier_count(),
        "full build completed"
    );
    BuildRun::Completed(BuildOutcome {
        model,
        changed: ChangedClassifiers::All,
    })
}

/// Rebuilds incrementally for a set of changed sources.
///
/// Every declaration previously attributed to a changed source is removed,
/// then the source's current declarations are folded back in. A source
/// that disappeared contributes nothing; classifiers left without
/// contributors are deleted.
pub fn incremental_build(
    previous: &GlobalModel,
    provider: &dyn DeclarationProvider,
    changed_sources: &[SourceId],
    cancel: &CancellationToken,
) -> BuildRun {
    let mut model = previous.clone();
    let mut touched: FxHashSet<(ClassifierKind, Name)> = FxHashSet::default();

    let mut sources: Vec<&SourceId> = changed_sources.iter().collect();
    sources.sort();
    sources.dedup();

    for source in sources {
        if cancel.is_cancelled() {
            tracing::debug!("incremental build cancelled");
            return BuildRun::Cancelled;
        }
        touched.extend(model.remove_source(source));
        touched.extend(fold_source(&mut model, provider, source));
    }
    model.run_post_merge();

    // The post-merge pass can flip resolved references on beans no changed
    // file declares, so every bean is diffed, not only the touched ones.
    touched.extend(model.bean_names_differing_from(previous));

    let mut changed: Vec<(ClassifierKind, Name)> = touched
        .into_iter()
        .filter(|(kind, name)| model.classifier_differs(previous, *kind, name))
        .collect();
    changed.sort();
    tracing::debug!(
        sources = changed_sources.len(),
        changed = changed.len(),
        "incremental build completed"
    );
    BuildRun::Completed(BuildOutcome {
        model,
        changed: ChangedClassifiers::Named(changed),
    })
}

/// Folds one source's current declarations into the model, skipping
/// malformed records. Returns the classifiers the source touched.
fn fold_source(
    model: &mut GlobalModel,
    provider: &dyn DeclarationProvider,
    source: &SourceId,
) -> Vec<(ClassifierKind, Name)> {
    let mut touched = Vec::new();
    for decl in provider.declarations(source) {
        if let Err(error) = decl.validate() {
            tracing::warn!(%error, "skipping malformed declaration");
            continue;
        }
        touched.push(model.apply(decl));
    }
    touched
}
