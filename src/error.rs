//! Error types for the mdhtml library.
//!
//! Every variant is fatal: the run stops at the first failing step. The only
//! recovered condition (a missing extension mechanism) never becomes an error,
//! see [`crate::markdown::render_fragment`].

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the mdhtml library.
#[derive(Debug, Error)]
pub enum Error {
    // ── Input ─────────────────────────────────────────────────────────────
    /// Input file is missing or cannot be read.
    #[error("Failed to read input file '{}': {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file was read but is not valid UTF-8.
    #[error("Input file '{}' is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    // ── Output ────────────────────────────────────────────────────────────
    /// Output file could not be created or written.
    #[error("Failed to write output file '{}': {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config ────────────────────────────────────────────────────────────
    #[error("Failed to read config file '{}': {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file '{}': {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn read_input_display_names_path() {
        let e = Error::ReadInput {
            path: PathBuf::from("/tmp/missing.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/tmp/missing.md"), "got: {msg}");
        assert!(msg.contains("not found"), "got: {msg}");
    }

    #[test]
    fn decode_display_names_path() {
        let source = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let e = Error::Decode {
            path: PathBuf::from("notes.md"),
            source,
        };
        assert!(e.to_string().contains("notes.md"));
        assert!(e.to_string().contains("UTF-8"));
    }

    #[test]
    fn write_output_keeps_source() {
        use std::error::Error as _;

        let e = Error::WriteOutput {
            path: PathBuf::from("/nope/out.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.source().is_some());
    }
}
