use std::fmt;

/// Error type shared by layout generation and the position file codec.
#[derive(Debug)]
pub enum LayoutError {
    InvalidParams { reason: String },
    Parse { line: usize, reason: String },
    Io(std::io::Error),
}

impl LayoutError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid layout params: {reason}"),
            Self::Parse { line, reason } => write!(f, "position file line {line}: {reason}"),
            Self::Io(err) => write!(f, "position file i/o: {err}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
