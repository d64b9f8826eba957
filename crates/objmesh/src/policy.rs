//! Caller-selected handling of failed loads.

/// What to do when a load fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureAction {
    /// Return the error to the caller.
    #[default]
    Propagate,
    /// Log a warning and report [`LoadOutcome::Skipped`].
    Skip,
}

/// Failure handling for [`ModelTable::load_info`](crate::ModelTable::load_info).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadPolicy {
    /// The source file cannot be read.
    pub missing_file: FailureAction,
    /// The source was read but did not parse.
    pub malformed_source: FailureAction,
}

impl LoadPolicy {
    /// Propagate every failure.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Skip sources that fail to parse, but still fail on unreadable files.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            missing_file: FailureAction::Propagate,
            malformed_source: FailureAction::Skip,
        }
    }
}

/// Result of a load that did not propagate an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Skipped,
}
