use thiserror::Error;

/// Failures surfaced during atom construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AtomError {
    /// A nucleus needs at least one nucleon for its radius to be defined.
    #[error("atom has no nucleons; nucleus radius is undefined")]
    DegenerateAtom,

    /// An explicitly supplied shell configuration is internally inconsistent.
    #[error("invalid shell configuration: {0}")]
    InvalidShellConfig(String),
}
