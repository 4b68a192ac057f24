use crate::model::PackSide;
use thiserror::Error;

/// Result type alias using EmojiPackError
pub type Result<T> = std::result::Result<T, EmojiPackError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Comparison
    /// One pack binds a keyword to more than one snippet
    DuplicateKeyword,

    // Input / archive parsing
    InvalidInput,
    /// An archive entry is not a readable snippet or plist
    InvalidArchive,
    /// A required field is absent from a persisted record
    MissingField,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    /// The remote emoji source failed or answered with an error status
    ExternalService,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::DuplicateKeyword => "ERR_DUPLICATE_KEYWORD",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidArchive => "ERR_INVALID_ARCHIVE",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context
/// (operation, subject, pack side, file path) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    subject: Option<String>,
    side: Option<PackSide>,
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
            subject: None,
            side: None,
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

    /// Add the subject the error is about (a keyword, uid, archive entry or URL)
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Add pack side context
    pub fn with_side(mut self, side: PackSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Add file path context
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

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn side(&self) -> Option<PackSide> {
        self.side
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

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
        if let Some(subject) = &self.subject {
            write!(f, " (subject: {})", subject)?;
        }
        if let Some(side) = self.side {
            write!(f, " (pack: {})", side)?;
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
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain errors raised by the comparison engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmojiPackError {
    /// A single pack binds one keyword to more than one snippet
    #[error("Duplicate keyword '{keyword}' in {side} pack")]
    DuplicateKeyword { keyword: String, side: PackSide },
}

impl From<EmojiPackError> for ExError {
    fn from(err: EmojiPackError) -> Self {
        match err {
            EmojiPackError::DuplicateKeyword { keyword, side } => {
                ExError::new(ExErrorKind::DuplicateKeyword)
                    .with_op("compare_keywords")
                    .with_subject(keyword)
                    .with_side(side)
                    .with_message("Keyword is bound to more than one snippet")
            }
        }
    }
}
