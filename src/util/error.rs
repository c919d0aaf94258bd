// KramerPrefs - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation.
// All errors preserve the causal chain for diagnostic logging; the
// user-facing text is derived separately by the controller.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Backend errors
// ---------------------------------------------------------------------------

/// Errors produced by a preferences backend call.
///
/// `endpoint` is the request path (e.g. `/keywords/add`) so log lines can be
/// correlated with the call that failed.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, body read error).
    Transport {
        endpoint: &'static str,
        detail: String,
    },

    /// The backend answered with a non-2xx status.
    Status {
        endpoint: &'static str,
        code: u16,
        body: String,
    },

    /// A 2xx response whose body could not be decoded.
    Malformed {
        endpoint: &'static str,
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Path of the call that failed.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Malformed { endpoint, .. } => endpoint,
        }
    }

    /// HTTP status code, for protocol failures only.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Body text returned by the server with a non-2xx status, if non-empty.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => {
                let body = body.trim();
                (!body.is_empty()).then_some(body)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { endpoint, detail } => {
                write!(f, "Request to '{endpoint}' failed: {detail}")
            }
            Self::Status {
                endpoint,
                code,
                body,
            } => write!(f, "'{endpoint}' returned HTTP {code}: {body}"),
            Self::Malformed { endpoint, source } => {
                write!(f, "Malformed response from '{endpoint}': {source}")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to reading `config.toml`.
#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    Read { path: PathBuf, source: io::Error },

    /// The file is not valid TOML or has the wrong shape.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "Could not read config file '{}': {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "Failed to parse config file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
