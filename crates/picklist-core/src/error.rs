use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ItemsError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { origin: String, source: serde_json::Error },
}

impl fmt::Display for ItemsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "Failed to read {}: {source}", path.display()),
            Self::Parse { origin, source } => write!(f, "Invalid items in {origin}: {source}"),
        }
    }
}

impl std::error::Error for ItemsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
