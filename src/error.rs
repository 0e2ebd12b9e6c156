use std::path::PathBuf;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The text could not be split into fields and paragraphs.
    Syntax,
    /// The text was well-formed but a value broke a rule of the format.
    Validation,
    /// The backing status file could not be read.
    Io,
}

/// Error type for status file parsing and loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field could not be tokenized (e.g. no `:` after the name).
    #[error("malformed field: {0}")]
    MalformedField(String),

    /// Field name is empty or contains characters outside the allowed set.
    #[error("invalid field name: {0:?}")]
    InvalidFieldName(String),

    /// `Package` value does not follow the package name grammar.
    #[error("invalid package name: {0:?}")]
    InvalidPackageName(String),

    /// `Description` field has neither a synopsis nor an extended text.
    #[error("empty description")]
    EmptyDescription,

    /// The same field name occurs more than once in a paragraph.
    #[error("duplicate keys found: {}", .0.join(", "))]
    DuplicateFields(Vec<String>),

    /// Missing mandatory field in a paragraph.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Two paragraphs declare the same package.
    #[error("duplicate package: {0}")]
    DuplicatePackage(String),

    /// The status file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Classify this error as a syntax, validation or I/O failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedField(_) | Error::InvalidFieldName(_) => ErrorKind::Syntax,
            Error::InvalidPackageName(_)
            | Error::EmptyDescription
            | Error::DuplicateFields(_)
            | Error::MissingField(_)
            | Error::DuplicatePackage(_) => ErrorKind::Validation,
            Error::Io { .. } => ErrorKind::Io,
        }
    }
}

/// Result type for dpkg-status operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_keys_message() {
        let err = Error::DuplicateFields(vec!["Package".to_string(), "Version".to_string()]);
        assert_eq!(err.to_string(), "duplicate keys found: Package, Version");
    }

    #[test]
    fn kinds() {
        assert_eq!(Error::InvalidFieldName("#x".into()).kind(), ErrorKind::Syntax);
        assert_eq!(Error::EmptyDescription.kind(), ErrorKind::Validation);
        let io = Error::Io {
            path: PathBuf::from("/nonexistent"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(io.kind(), ErrorKind::Io);
        assert!(io.to_string().starts_with("failed to read /nonexistent"));
    }
}
