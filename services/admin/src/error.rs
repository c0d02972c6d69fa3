use fieldops_core::error::FetchError;
use fieldops_domain::{EntityKind, FieldError, RecordId};

/// Errors surfaced by entity page operations.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("record {0} is not in the loaded list")]
    NotLoaded(RecordId),
    #[error("no {kind} labelled {label:?}")]
    UnknownReference { kind: EntityKind, label: String },
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error("the {0} list could not be loaded")]
    Unavailable(EntityKind),
    #[error("page is no longer active")]
    Cancelled,
}

impl PageError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(e) => e.kind(),
            Self::NotLoaded(_) => "NOT_LOADED",
            Self::UnknownReference { .. } => "UNKNOWN_REFERENCE",
            Self::Field(_) => "INVALID_FIELD",
            Self::Unavailable(_) => "UNAVAILABLE",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Whether retrying the operation unchanged may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Fetch(e) => e.is_transient(),
            _ => false,
        }
    }
}
