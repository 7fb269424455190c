use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "I/O error for {path_desc}: {source}",
        path_desc = PathDisplay(path)
    )]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "failed to parse {format} {path_desc}: {details} (line {line_number})",
        path_desc = PathDisplay(path)
    )]
    Parse {
        format: &'static str,
        path: Option<PathBuf>,
        line_number: usize,
        details: String,
    },
}

impl Error {
    pub fn from_io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { path, source }
    }

    pub fn parse(
        format: &'static str,
        path: Option<PathBuf>,
        line_number: usize,
        details: impl Into<String>,
    ) -> Self {
        Self::Parse {
            format,
            path,
            line_number,
            details: details.into(),
        }
    }

    /// Maps a failed `lines()` read, turning undecodable text into a line-tagged parse error.
    pub fn from_line_read(
        source: std::io::Error,
        format: &'static str,
        line_number: usize,
    ) -> Self {
        if source.kind() == std::io::ErrorKind::InvalidData {
            Self::parse(format, None, line_number, source.to_string())
        } else {
            Self::from_io(source, None)
        }
    }

    /// Attaches a file path to an error produced while reading an anonymous stream.
    pub fn with_path(self, file: &Path) -> Self {
        match self {
            Self::Io { path: None, source } => Self::Io {
                path: Some(file.to_path_buf()),
                source,
            },
            Self::Parse {
                format,
                path: None,
                line_number,
                details,
            } => Self::Parse {
                format,
                path: Some(file.to_path_buf()),
                line_number,
                details,
            },
            other => other,
        }
    }
}

struct PathDisplay<'a>(&'a Option<PathBuf>);

impl<'a> fmt::Display for PathDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "file '{}'", p.display()),
            None => write!(f, "stream source"),
        }
    }
}
