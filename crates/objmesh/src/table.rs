//! Named table of parsed models.

use std::collections::HashMap;
use std::time::Instant;

use objmesh_decode::{ParseStats, ParsedModel, parse_model_with_stats};

use crate::error::{Error, Result};
use crate::policy::{FailureAction, LoadOutcome, LoadPolicy};
use crate::source::ModelInfo;

/// Owns every loaded [`ParsedModel`], keyed by name.
///
/// A failed load leaves the table exactly as it was. Mutation goes through
/// `&mut self`; share the table behind a lock if several threads load.
#[derive(Debug, Default)]
pub struct ModelTable {
    models: HashMap<String, ParsedModel>,
}

impl ModelTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Names of the loaded models, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.models.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Parse `source` and register it under `name`.
    pub fn load(&mut self, name: &str, source: &str) -> Result<()> {
        self.load_with_stats(name, source).map(|_| ())
    }

    /// Like [`load`](Self::load), also returning the record counts of the
    /// source that was registered.
    pub fn load_with_stats(&mut self, name: &str, source: &str) -> Result<ParseStats> {
        if self.models.contains_key(name) {
            return Err(Error::DuplicateName(name.to_owned()));
        }

        let started = Instant::now();
        let (model, stats) = parse_model_with_stats(source).map_err(|source| Error::Parse {
            name: name.to_owned(),
            source,
        })?;

        tracing::info!(
            "Loaded model \"{}\": {} vertices, {} layout, took {:.2}ms",
            name,
            model.vertex_count(),
            model.variant(),
            started.elapsed().as_secs_f64() * 1000.0
        );

        self.models.insert(name.to_owned(), model);
        Ok(stats)
    }

    /// Read and load a model, handling failures according to `policy`.
    pub fn load_info(&mut self, info: &ModelInfo, policy: &LoadPolicy) -> Result<LoadOutcome> {
        let text = match info.source.read() {
            Ok(text) => text,
            Err(err) => return handle_failure(policy.missing_file, err),
        };

        match self.load(&info.name, &text) {
            Ok(()) => Ok(LoadOutcome::Loaded),
            Err(err @ Error::Parse { .. }) => handle_failure(policy.malformed_source, err),
            Err(err) => Err(err),
        }
    }

    /// Load several models, stopping at the first propagated failure.
    ///
    /// Returns how many were loaded. Models loaded before a failure stay in
    /// the table.
    pub fn load_all<'a>(
        &mut self,
        infos: impl IntoIterator<Item = &'a ModelInfo>,
        policy: &LoadPolicy,
    ) -> Result<usize> {
        let mut loaded = 0;
        for info in infos {
            if self.load_info(info, policy)? == LoadOutcome::Loaded {
                loaded += 1;
            }
        }
        Ok(loaded)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParsedModel> {
        self.models.get(name)
    }

    /// Remove one model. Absent names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<ParsedModel> {
        let removed = self.models.remove(name);
        if removed.is_some() {
            tracing::debug!("Deleted model \"{}\"", name);
        }
        removed
    }

    /// Remove several models, returning how many were present.
    pub fn delete_many<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        names
            .iter()
            .filter(|name| self.delete(name.as_ref()).is_some())
            .count()
    }

    /// Remove every model, returning how many there were.
    pub fn delete_all(&mut self) -> usize {
        let count = self.models.len();
        self.models.clear();
        if count > 0 {
            tracing::debug!("Deleted all {} models", count);
        }
        count
    }

    /// Tear the table down, reporting each model that was never deleted.
    pub fn close(mut self, mut on_leftover: impl FnMut(&str)) {
        for name in self.names() {
            on_leftover(name);
        }
        self.delete_all();
    }
}

fn handle_failure(action: FailureAction, err: Error) -> Result<LoadOutcome> {
    match action {
        FailureAction::Propagate => Err(err),
        FailureAction::Skip => {
            tracing::warn!("Skipping model: {}", err);
            Ok(LoadOutcome::Skipped)
        }
    }
}
