use std::fmt;
use std::path::PathBuf;

/// Ambient errors shared across shadergraph crates: config loading, file I/O,
/// JSON parsing for anything that isn't the compile pipeline itself.
///
/// Contract rule: this type lives in `shadergraph-core` and can be re-exported
/// by downstream crates. Compile-time failures (cycle detection, unknown
/// operator kinds, ...) have their own closed taxonomy in
/// `shadergraph-compiler::ErrorKind` — this type is for everything around it.
#[derive(Debug)]
pub enum EngineError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    InvalidConfig {
        path: PathBuf,
        msg: String,
    },

    Other(String),
}

impl EngineError {
    pub fn other<T: Into<String>>(s: T) -> Self {
        EngineError::Other(s.into())
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Io { path, source } => {
                write!(f, "io error at {}: {}", path.display(), source)
            }
            EngineError::Json { path, source } => {
                write!(f, "json parse error at {}: {}", path.display(), source)
            }
            EngineError::InvalidConfig { path, msg } => {
                write!(f, "invalid config at {}: {}", path.display(), msg)
            }
            EngineError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io { source, .. } => Some(source),
            EngineError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}
