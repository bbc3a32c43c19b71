use std::fmt;
use std::path::PathBuf;

/// Error types for codemod operations
#[derive(Debug)]
pub enum CodemodError {
    /// Reading a source file failed (permissions, invalid UTF-8)
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing a rewritten source file back failed
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error outside of per-file processing
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Regex compilation error
    Regex(regex::Error),
}

impl fmt::Display for CodemodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodemodError::FileRead { path, source } => {
                write!(f, "Could not read '{}': {source}", path.display())
            }
            CodemodError::FileWrite { path, source } => {
                write!(f, "Could not write '{}': {source}", path.display())
            }
            CodemodError::Io(err) => write!(f, "IO error: {err}"),
            CodemodError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CodemodError::Regex(err) => write!(f, "Regex error: {err}"),
        }
    }
}

impl std::error::Error for CodemodError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodemodError::FileRead { source, .. } | CodemodError::FileWrite { source, .. } => {
                Some(source)
            }
            CodemodError::Io(err) => Some(err),
            CodemodError::Regex(err) => Some(err),
            CodemodError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for CodemodError {
    fn from(err: std::io::Error) -> Self {
        CodemodError::Io(err)
    }
}

impl From<regex::Error> for CodemodError {
    fn from(err: regex::Error) -> Self {
        CodemodError::Regex(err)
    }
}

/// Type alias for Results using CodemodError
pub type Result<T> = std::result::Result<T, CodemodError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = CodemodError::Config("empty marker".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: empty marker"
        );

        let read_error = CodemodError::FileRead {
            path: PathBuf::from("app/page.tsx"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            format!("{read_error}"),
            "Could not read 'app/page.tsx': denied"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let codemod_error = CodemodError::from(io_error);

        match codemod_error {
            CodemodError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    #[allow(clippy::invalid_regex)]
    fn test_error_from_regex() {
        let regex_error = regex::Regex::new("[invalid").unwrap_err();
        let codemod_error = CodemodError::from(regex_error);

        assert!(matches!(codemod_error, CodemodError::Regex(_)));
        assert!(codemod_error.source().is_some());
        assert!(format!("{codemod_error}").contains("Regex error:"));
    }

    #[test]
    fn test_error_file_write_display_and_source() {
        let write_error = CodemodError::FileWrite {
            path: PathBuf::from("hooks/useChat.ts"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert_eq!(
            format!("{write_error}"),
            "Could not write 'hooks/useChat.ts': read-only"
        );
        assert!(write_error.source().is_some());
    }

    #[test]
    fn test_error_config_has_no_source() {
        let error = CodemodError::Config("test".to_string());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CodemodError>();
    }
}
