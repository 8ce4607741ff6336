use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned while loading and plotting an RTT series
#[derive(Error, Debug)]
pub enum RttError {
    /// The input file is missing or cannot be opened
    #[error("could not open {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file was opened but a line could not be read
    #[error("could not read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A non-blank line is not a `time rtt` pair
    #[error("line {line}: {reason}, found {content:?}")]
    Parse {
        line: usize,
        content: String,
        reason: ParseReason,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Why a line failed the two-float contract
#[derive(Error, Debug)]
pub enum ParseReason {
    #[error("expected 2 tokens but got {0}")]
    TokenCount(usize),

    #[error("invalid number {token:?} ({source})")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("no samples to plot")]
    EmptySeries,

    #[error("unsupported output format {0:?}, use .svg or .png")]
    UnsupportedFormat(String),

    #[error("cannot fit values from {min} to {max} on an axis")]
    Range { min: f64, max: f64 },

    #[error("drawing failed: {0}")]
    Backend(String),

    #[error("could not run the viewer: {0}")]
    Viewer(String),
}

impl RttError {
    /// true for the errors raised by the line parser
    pub fn is_parse(&self) -> bool {
        matches!(self, RttError::Parse { .. })
    }

    /// true when the input could not be opened or read
    pub fn is_file_access(&self) -> bool {
        matches!(self, RttError::FileAccess { .. } | RttError::Read { .. })
    }
}
