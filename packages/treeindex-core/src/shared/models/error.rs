//! Error types for the treeindex-core crate
//!
//! One error type crosses every layer: parsing, extraction, storage and the
//! query engine. Query operations return it as a typed result so a transport
//! can map `kind` onto its own error codes.
//!
//! Features:
//! - Categorized error kinds (parse failure, not found, invalid argument, ...)
//! - Optional file path, line and operation context
//! - Source error chaining

use std::fmt;

/// Error kind categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A file's tree could not be produced (file is skipped by the build)
    Parse,
    /// File, node id, or callable-at-line not present in the index
    NotFound,
    /// Required query parameter missing or malformed
    InvalidArgument,
    /// Database or serialization failure inside the index store
    Storage,
    /// Configuration errors
    Config,
    /// IO errors
    IO,
    /// Unexpected failure in the query path
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Storage => "storage",
            ErrorKind::Config => "config",
            ErrorKind::IO => "io",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type
#[derive(Debug)]
pub struct TreeIndexError {
    pub kind: ErrorKind,
    pub message: String,
    pub file_path: Option<String>,
    pub line: Option<u32>,
    /// Query operation and its inputs, e.g. `getCallHierarchy(file_path=a.rb, line=3)`
    pub operation: Option<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TreeIndexError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            file_path: None,
            line: None,
            operation: None,
            source: None,
        }
    }

    pub fn with_file(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IO, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// Whether this error is a structured miss or a caller mistake, as opposed
    /// to a failure of the index itself.
    pub fn is_expected(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound | ErrorKind::InvalidArgument)
    }
}

impl fmt::Display for TreeIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)?;
        if let Some(ref file) = self.file_path {
            write!(f, " in {}", file)?;
            if let Some(line) = self.line {
                write!(f, ":{}", line)?;
            }
        }
        if let Some(ref operation) = self.operation {
            write!(f, " during {}", operation)?;
        }
        Ok(())
    }
}

impl std::error::Error for TreeIndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TreeIndexError>;

impl From<std::io::Error> for TreeIndexError {
    fn from(err: std::io::Error) -> Self {
        TreeIndexError::io(format!("IO error: {}", err)).with_source(err)
    }
}

impl From<serde_json::Error> for TreeIndexError {
    fn from(err: serde_json::Error) -> Self {
        TreeIndexError::storage(format!("JSON serialization error: {}", err)).with_source(err)
    }
}

impl From<crate::config::ConfigError> for TreeIndexError {
    fn from(err: crate::config::ConfigError) -> Self {
        TreeIndexError::config(err.to_string()).with_source(err)
    }
}

// SQLite Error Conversion
#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for TreeIndexError {
    fn from(err: rusqlite::Error) -> Self {
        TreeIndexError::storage(format!("SQLite error: {}", err)).with_source(err)
    }
}

// Lock poisoning (Mutex<Connection>, RwLock<Tables>)
impl<T> From<std::sync::PoisonError<T>> for TreeIndexError {
    fn from(_err: std::sync::PoisonError<T>) -> Self {
        TreeIndexError::internal("Index store lock poisoned")
    }
}
