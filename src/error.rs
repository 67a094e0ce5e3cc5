//! Error taxonomy for loading and rendering.
//!
//! ERROR HANDLING
//! ==============
//! Library functions return `Result<_, AppError>` and propagate with `?`.
//! Only the top-level dispatch in [`crate::app`] turns an error into the
//! visible error panel. An article id that matches nothing is not an error;
//! the renderer shows a not-found message for it instead.

/// Errors produced while fetching, parsing, or writing to the page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request for a static asset could not be sent or completed.
    #[error("fetch {path} failed: {message}")]
    Fetch { path: String, message: String },

    /// The static host answered with a non-success status.
    #[error("fetch {path} failed: status {status}")]
    Status { path: String, status: u16 },

    /// A JSON asset was fetched but could not be decoded.
    #[error("parse {path} failed: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A container element required by the render is not in the document.
    #[error("element #{0} not found")]
    MissingElement(String),

    /// A browser DOM or history call was rejected.
    #[error("dom call failed: {0}")]
    Dom(String),

    /// Local storage is unavailable or rejected the write.
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl AppError {
    /// The asset path involved in a fetch/parse failure, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Fetch { path, .. } | Self::Status { path, .. } | Self::Parse { path, .. } => Some(path),
            Self::MissingElement(_) | Self::Dom(_) | Self::Storage(_) => None,
        }
    }
}
