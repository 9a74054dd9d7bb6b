/// Core error types for Tunebox
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Rejected construction input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Track title is empty or blank
    #[error("Title cannot be empty")]
    EmptyTitle,

    /// Track artist is empty or blank
    #[error("Artist cannot be empty")]
    EmptyArtist,

    /// Release year lies in the future
    #[error("Year cannot be greater than {current} (got {year})")]
    FutureYear { year: i32, current: i32 },

    /// Collection name is empty or blank
    #[error("Name cannot be empty")]
    EmptyName,
}

/// Core error type for Tunebox
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Invalid construction input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Index outside the current presentation order
    #[error("Index out of bounds: {index} (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Named playlist does not exist
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// Invalid catalog configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a playlist not found error
    pub fn playlist_not_found(name: impl Into<String>) -> Self {
        Self::PlaylistNotFound(name.into())
    }

    /// Whether this error came from input validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
