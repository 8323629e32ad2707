use thiserror::Error;

/// Error taxonomy for the pattern pipeline.
///
/// Two kinds only. `InvalidConfiguration` means the caller supplied
/// parameters that violate their stated constraints and is surfaced
/// immediately. `InvalidInput` means an operation received structurally
/// invalid data from a previous step; it should not occur while the
/// generator's invariants hold and indicates a defect if observed.
/// Both propagate synchronously to the caller with no local recovery.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
