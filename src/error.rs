//! Error types for extended pattern compilation and matching

/// Result type for xregex operations
pub type Result<T> = std::result::Result<T, RegexError>;

/// Errors that can occur while compiling, matching or replacing
#[derive(Debug, thiserror::Error)]
pub enum RegexError {
    /// Extended syntax used incorrectly, e.g. a doubly negated Unicode token
    #[error("erroneous characters: {0}")]
    MalformedToken(String),

    /// Unicode escape names a category, script or block nobody registered
    #[error("invalid or unsupported Unicode item: {0}")]
    UnsupportedUnicodeToken(String),

    /// Named group uses a reserved (purely numeric) name
    #[error("cannot use an integer as capture name: {0}")]
    InvalidCaptureName(String),

    /// Token rule registration attempted while the registry is closed
    #[error("extensibility must be enabled before registering tokens")]
    ExtensibilityDisabled,

    /// A token handler or trigger tried to compile a pattern
    #[error("cannot compile a pattern from within a token handler or trigger")]
    ReentrantCompilation,

    /// Recursive matching ran out of input with open or stray delimiters
    #[error("string contains unbalanced delimiters")]
    UnbalancedDelimiter,

    /// Bad escape character setup for recursive matching
    #[error("{0}")]
    EscapeConfiguration(String),

    /// Flag letter outside `gimnsxy`
    #[error("unknown regex flag: {0:?}")]
    UnknownFlag(char),

    /// The same flag was both added and removed
    #[error("conflicting flags: {0}")]
    FlagConflict(String),

    /// Error raised by the native engine, at compile or match time
    #[error(transparent)]
    Native(Box<fancy_regex::Error>),
}

impl From<fancy_regex::Error> for RegexError {
    fn from(err: fancy_regex::Error) -> Self {
        RegexError::Native(Box::new(err))
    }
}
