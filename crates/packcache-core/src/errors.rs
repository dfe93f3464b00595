use packcache_core_types::TitleKey;
use thiserror::Error;

/// Result type alias using CacheError
pub type Result<T> = std::result::Result<T, CacheError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in PackCache. Each kind maps to a stable error code that can be used for
/// programmatic error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Selection
    /// Fallback selection requested on a populated but empty collection
    EmptyCollection,
    /// The variant enumerator collaborator failed
    EnumerationFailed,

    // Persistence
    Io,
    Serialization,
    /// Persisted state could not be restored (never surfaced from restore itself)
    RestoreFailure,

    // Validation
    InvalidInput,
    NotFound,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::EmptyCollection => "ERR_EMPTY_COLLECTION",
            ExErrorKind::EnumerationFailed => "ERR_ENUMERATION_FAILED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::RestoreFailure => "ERR_RESTORE_FAILURE",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
        }
    }
}

/// Canonical structured error type
///
/// This error type provides a structured representation of errors with
/// classification fields for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    title_key: Option<String>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            title_key: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add title key context
    pub fn with_title_key(mut self, key: impl Into<String>) -> Self {
        self.title_key = Some(key.into());
        self
    }

    /// Add filesystem path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the title key context, if any
    pub fn title_key(&self) -> Option<&str> {
        self.title_key.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(title_key) = &self.title_key {
            write!(f, " (title_key: {})", title_key)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain errors raised by the selection cache
#[derive(Error, Debug, Clone)]
pub enum CacheError {
    /// Fallback selection needs a first element but the collection is empty
    #[error("Variant collection for title {title_key} is empty")]
    EmptyCollection { title_key: TitleKey },

    /// The enumerator collaborator could not list variants for a title
    #[error("Variant enumeration failed for title {title_key}: {cause}")]
    EnumerationFailed { title_key: TitleKey, cause: ExError },
}

impl CacheError {
    /// Get the canonical kind for this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            CacheError::EmptyCollection { .. } => ExErrorKind::EmptyCollection,
            CacheError::EnumerationFailed { .. } => ExErrorKind::EnumerationFailed,
        }
    }
}

/// Conversion from CacheError to ExError
impl From<CacheError> for ExError {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::EmptyCollection { title_key } => {
                ExError::new(ExErrorKind::EmptyCollection)
                    .with_op("effective_selection")
                    .with_title_key(title_key.as_str())
                    .with_message("No variant to fall back to")
            }
            CacheError::EnumerationFailed { title_key, cause } => {
                ExError::new(ExErrorKind::EnumerationFailed)
                    .with_op("enumerate_variants")
                    .with_title_key(title_key.as_str())
                    .with_message("Variant enumeration failed")
                    .with_source(cause)
            }
        }
    }
}
