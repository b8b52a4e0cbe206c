use failure::Fail;

#[derive(Debug, Fail)]
pub enum KvMapError {
    #[fail(display = "entry not found: {}", key)]
    EntryNotFound { key: String },
    #[fail(display = "precondition violated in {}: key {:?} must not be empty", operation, key)]
    PreconditionViolation { operation: &'static str, key: String },
    #[fail(display = "postcondition violated in {}: key {:?} is absent after the write", operation, key)]
    PostconditionViolation { operation: &'static str, key: String },
    #[fail(display = "backing store replaced during read-only {} of key {:?}", operation, key)]
    MutationDuringRead { operation: &'static str, key: String },
    #[fail(display = "invariant violated: {}", detail)]
    InvariantViolation { detail: String },
    #[fail(display = "step {} failed: {}", step, reason)]
    Expectation { step: usize, reason: String },
    #[fail(display = "invalid parameter: {}", parameter)]
    CliError { parameter: String },
    #[fail(display = "{}", _0)]
    Io(#[fail(cause)] std::io::Error),
    #[fail(display = "{}", _0)]
    Serde(#[fail(cause)] serde_json::Error),
}

impl KvMapError {
    /// Defects of the implementation itself rather than of the caller.
    ///
    /// These are never handed back as `Err`; the checking wrapper panics
    /// with them.
    pub fn is_fatal(&self) -> bool {
        match self {
            KvMapError::PostconditionViolation { .. }
            | KvMapError::MutationDuringRead { .. }
            | KvMapError::InvariantViolation { .. } => true,
            _ => false,
        }
    }
}

impl From<std::io::Error> for KvMapError {
    fn from(err: std::io::Error) -> Self {
        KvMapError::Io(err)
    }
}

impl From<serde_json::Error> for KvMapError {
    fn from(err: serde_json::Error) -> Self {
        KvMapError::Serde(err)
    }
}
