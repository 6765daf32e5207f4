// Error types for the explorer core
//
// Every core operation returns these instead of panicking; none of them is
// fatal to the process. Startup and IO plumbing use anyhow instead.

use thiserror::Error;

use crate::model::EntityKind;

pub type ExplorerResult<T> = Result<T, ExplorerError>;

#[derive(Debug, Error)]
pub enum ExplorerError {
    /// A list cursor was asked to move outside its bounds
    #[error("index {index} is out of range for a list of {count} items")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("layer index {index} is out of range ({count} layers)")]
    LayerIndexOutOfRange { index: usize, count: usize },

    #[error("{kind} index {index} is out of range ({count} found)")]
    EntityIndexOutOfRange {
        index: usize,
        kind: EntityKind,
        count: usize,
    },

    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    /// Raised by any read path before the first snapshot arrives
    #[error("no drawing data loaded")]
    NoDataAvailable,

    #[error("failed to {context}")]
    Format {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to {context}")]
    ClipboardWriteFailure {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ExplorerError {
    /// Wrap a clipboard backend error with what was being copied
    pub fn clipboard(context: impl Into<String>, source: anyhow::Error) -> Self {
        ExplorerError::ClipboardWriteFailure {
            context: context.into(),
            source: source.into(),
        }
    }
}
